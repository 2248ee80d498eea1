// ethgate Infrastructure - SQLite Adapter
// Implements: ResultSink (optional query log)

mod connection;
mod migration;
mod result_sink;

pub use connection::create_pool;
pub use migration::run_migrations;
pub use result_sink::SqliteResultSink;

// Note: sqlx::Error conversion is handled by wrapping in helper functions
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for
// GatewayError here)
