//! Core types for stickercal.
//!
//! This crate is shared by the server and the CLI:
//! - `event` for the sticker event model and id generation
//! - `kv` and `event_store` for persistence behind the HTTP routes
//! - `calendar` for the client-side month view state
//! - `config` for the shared configuration file

pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod event_store;
pub mod kv;

pub use error::{StickerError, StickerResult};
pub use event::{Event, NewEvent};
pub use event_store::EventStore;
