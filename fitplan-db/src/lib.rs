pub mod connection;
pub mod profile;
mod schema;

pub use connection::{Connection, StoreError};
