#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # bookfinder
//!
//! bookfinder looks up book metadata by ISBN from a configurable provider and normalizes the
//! answer into a [`BookRecord`]. Two providers are supported, see [`ProviderKind`].
//!
//! A [`LookupController`] owns the [`SearchState`] of the last search, which is all a rendering
//! layer needs to display.
//!
//! ```no_run
//! use bookfinder::{Config, LookupController, ProviderKind, SearchQuery, SearchState};
//!
//! let mut controller = LookupController::new(Config::new(ProviderKind::OpenLibrary))?;
//!
//! match controller.submit(&SearchQuery::new("9780140449136")) {
//!     SearchState::Success(record) => println!("{}", record.title.as_deref().unwrap_or("Unknown")),
//!     SearchState::Failure(message) => eprintln!("{message}"),
//!     SearchState::Idle | SearchState::Loading => {}
//! }
//! # Ok::<(), bookfinder::Error>(())
//! ```

mod api;
mod config;
mod controller;
mod error;
pub mod record;

pub use api::Client;
pub use config::{Config, ProviderKind};
pub use controller::{LookupController, SearchQuery, SearchState};
pub use error::{Error, ErrorKind};
pub use record::{humanize_subject, BookRecord, OtherEdition};

#[cfg(test)]
pub(crate) use error::{EMPTY_INPUT_MESSAGE, NOT_FOUND_MESSAGE, TRANSPORT_MESSAGE};
