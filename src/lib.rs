//! Core library surface for the Recital Order Manager TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces. Keeping the glue logic documented makes it easy to recall why each
//! re-export exists when revisiting the project.
pub mod gesture;
pub mod models;
pub mod order;
pub mod seed;
pub mod store;
pub mod ui;

/// Convenience re-exports for the persistence layer. These are typically used
/// by `main.rs` to open the on-disk store and hydrate the working list.
pub use store::{load_dances, store_dances, FileStore, KeyValueStore};

/// The primary domain type plus the default program it falls back to.
pub use models::Dance;
pub use seed::seed_dances;

/// The working-list controller every reorder funnels through.
pub use order::ProgramOrder;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
