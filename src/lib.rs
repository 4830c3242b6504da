//! Book Club: REST backend for a catalogue of authors and their books, stored in PostgreSQL.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;

pub use error::{AppError, ConfigError, StoreError};
pub use migration::apply_migrations;
pub use model::{Author, AuthorInput, Book, BookInput};
pub use routes::{app, catalog_routes, common_routes};
pub use seed::seed_catalogue;
pub use settings::Settings;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, MemoryStore, PgStore, Store};

/// Default `RUST_LOG` directives when none are set.
pub const DEFAULT_LOG_FILTER: &str = "bookclub=info,seed=info,tower_http=info";
