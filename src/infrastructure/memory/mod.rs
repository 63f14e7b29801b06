pub mod memory_connection;
pub mod repositories;
pub mod seed;
