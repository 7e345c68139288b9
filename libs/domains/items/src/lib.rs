//! Items Domain
//!
//! CRUD over a single MongoDB collection of items.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, id/body parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Codec    │  ← hex id → ObjectId, rejects malformed ids
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← one repository call per request
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← wire Item, ItemPayload, stored ItemDocument
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{
//!     handlers,
//!     mongodb::MongoItemRepository,
//!     service::ItemService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("items");
//!
//! let repository = MongoItemRepository::new(&db);
//! let service = ItemService::new(repository);
//!
//! let router = axum::Router::new().nest(handlers::ITEMS_PATH, handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use crate::mongodb::MongoItemRepository;
pub use codec::ItemIdPath;
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{Item, ItemDocument, ItemPayload};
pub use repository::ItemRepository;
pub use service::ItemService;
