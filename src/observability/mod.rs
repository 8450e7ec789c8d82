//! Observability subsystem for shelfdb
//!
//! Structured logging through `tracing`. Each log line carries an `event`
//! field from [`Event`].
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on catalog state
//! 3. Logging failures never fail a catalog operation

mod events;
mod logger;

pub use events::Event;
pub use logger::init_logging;
