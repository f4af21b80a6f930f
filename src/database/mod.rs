pub mod manager;
pub mod models;
pub mod queries;

pub use manager::{migrator, DatabaseError, DatabaseManager};
