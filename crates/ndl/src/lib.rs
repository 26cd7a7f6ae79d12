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

//! # ndl
//!
//! ndl looks up bibliographic information of a book by ISBN in the National Diet Library search.
//! It scrapes the search result page, follows the first result to its detail page, and splits
//! the detail text into labeled fields using a [`LabelSet`].
//!
//! ```no_run
//! use ndl::{Catalog, Config};
//!
//! let mut catalog = Catalog::new(Config::default())?;
//! let info = catalog.book_info("9784000000000")?;
//! for (label, values) in &info {
//!     println!("{label}: {values:?}");
//! }
//! # Ok::<(), ndl::Error>(())
//! ```

mod api;
mod book;
mod config;
mod error;
pub mod label;
pub mod page;
mod throttle;

pub use book::BookInfo;
pub use config::{Config, DEFAULT_INTERVAL, NDL_SEARCH_URL};
pub use error::{Error, ErrorKind};
pub use label::{FieldEntry, FieldLabel, LabelSet, MatchMode};
pub use throttle::Throttle;

use log::trace;

type Client = reqwest::blocking::Client;

/// The NDL catalog, holding the HTTP client and the request throttle for a batch of lookups.
#[derive(Debug)]
pub struct Catalog {
    client: Client,
    config: Config,
    throttle: Throttle,
}

impl Catalog {
    /// Creates a catalog from `config`.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the HTTP client cannot be initialised.
    pub fn new(config: Config) -> Result<Self, Error> {
        // The blocking client times out after 30s unless told otherwise.
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::wrap(ErrorKind::Network, e))?;

        Ok(Self {
            client,
            throttle: Throttle::new(config.interval),
            config,
        })
    }

    /// The configuration the catalog was created with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Searches the catalog for `isbn` and returns the fields of the first result.
    ///
    /// The returned [`BookInfo`] is empty when the detail page had no known field.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when a request fails or responds with a non-success status.
    /// An `Err` is returned when the search finds no book or its first result has no link.
    /// An `Err` is returned when the detail page does not have the expected structure.
    pub fn book_info(&mut self, isbn: &str) -> Result<BookInfo, Error> {
        trace!("Search book info by ISBN of '{isbn}'");
        api::ndl::get_book_info(&self.client, isbn, &self.config, &mut self.throttle)
    }
}
