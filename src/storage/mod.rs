//! Document store operations.

mod insert;
mod migrations;
mod models;
mod pool;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use insert::insert_document;
pub use migrations::run_migrations;
pub use models::PersistedDocument;
pub use pool::DocumentStore;
