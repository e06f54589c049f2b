pub mod drill;
pub mod error;
pub mod types;
