pub mod allocation_service;
pub mod holdings_loader;
pub mod performance_service;
pub mod summary_service;
