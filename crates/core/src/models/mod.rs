pub mod allocation;
pub mod holding;
pub mod performance;
pub mod summary;
