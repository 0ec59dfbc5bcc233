//! A terminal to-do list built around a pure reducer core.
//!
//! All durable state lives in a [`store::Store`] driven by
//! [`todo::TodoIntent`]s through a pure reducer. Persistence, the feed
//! loader, and the TUI are explicit collaborators layered on top; none
//! of them reach into the state behind the store's back.

pub mod config;
pub mod loader;
pub mod logging;
pub mod persist;
pub mod store;
pub mod todo;
pub mod ui;
