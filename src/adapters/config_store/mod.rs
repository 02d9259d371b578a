//! Configuration store adapters.

mod in_memory;
mod postgres;

pub use in_memory::InMemoryConfigStore;
pub use postgres::PostgresConfigStore;
