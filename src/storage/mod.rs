// storage/mod.rs
// SQLite-backed address cache

pub mod cache;
pub mod migrations;
pub mod models;
pub mod pool;
#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use cache::IpCache;
pub use migrations::run_migrations;
pub use models::AddressRecord;
pub use pool::init_db_pool_with_path;
