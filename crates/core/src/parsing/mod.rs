pub mod cell;
pub mod headers;
