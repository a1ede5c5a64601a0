pub mod database;

pub use database::{connect, init_schema};
