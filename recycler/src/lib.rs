//! A headless recycled-list adapter.
//!
//! For host-side utilities (cell pool, list host, screen, demo catalog), see the
//! `recycler-adapter` crate.
//!
//! This crate holds the contract between a scrolling list and the data it shows: a fixed
//! collection of labels framed by a header and a footer row, classified row by row, and bound
//! into a small number of reusable cells.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`CellFactory`] that lays out new cells
//! - an [`ImageProvider`] and a [`DrawablePool`] for item images
//! - a [`Notifier`] and a [`Navigator`] for click handlers
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod cell;
mod env;
mod error;
mod image;
mod options;
mod sample;
mod types;

#[cfg(test)]
mod tests;

pub use adapter::ListAdapter;
pub use cell::{Cell, CellId, DecorCell, Interaction, ItemCell};
pub use env::{
    BindEnv, CellFactory, DefaultCellFactory, DrawablePool, ImageProvider, Navigator, Notifier,
};
pub use error::Error;
pub use image::{ImageRequest, ImageSlot, ImageTarget};
pub use options::AdapterOptions;
#[cfg(feature = "std")]
pub use sample::sample_thread_rng;
pub use sample::sample;
pub use types::{DrawableId, FitMode, Row, RowKind, RowRange, classify};
