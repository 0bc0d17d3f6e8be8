//! Host utilities for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic and only knows how rows map to cells. This crate
//! provides the host side a list needs around it:
//!
//! - A per-kind pool of detached cells, and a linear [`ListHost`] that recycles cells as the
//!   viewport moves
//! - A [`ListScreen`] that shows either a sampled list or an empty-state placeholder
//! - Test doubles for the image and interaction capabilities, plus a small demo catalog
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod catalog;
mod host;
mod images;
mod log;
mod pool;
mod screen;


pub use catalog::RandomDrawables;
pub use host::{LayoutPass, ListHost};
pub use images::{DeferredImages, ImmediateImages};
pub use log::{InteractionEvent, InteractionLog};
pub use pool::{CellPool, DEFAULT_CAPACITY_PER_KIND};
pub use screen::{ListScreen, ScreenContent, ScreenOptions};
