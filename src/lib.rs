//! shelfdb - a durable, in-memory book catalog
//!
//! A record arena with a primary index, a title tree, an undo stack and a
//! pending-search queue, persisted to a flat snapshot file after every
//! mutation.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod index;
pub mod observability;
pub mod snapshot;

pub use catalog::{Book, CatalogEngine, CatalogStats, LoadReport, LoadSource, Outcome, SearchResult};
pub use config::CatalogConfig;
