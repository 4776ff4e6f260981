use std::{fmt, path::Path, str::FromStr};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{Error, ErrorKind};

const OPEN_LIBRARY_BASE_URL: &str = "https://openlibrary.org";
const BOOK_INFO_BASE_URL: &str = "http://localhost:8000";

/// The book-metadata service a lookup is sent to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// The public Open Library lookup API, keyed by `ISBN:<isbn>`.
    #[default]
    #[serde(alias = "A", alias = "a")]
    OpenLibrary,
    /// A locally hosted proxy returning a `{success, data, error}` envelope.
    #[serde(alias = "B", alias = "b")]
    BookInfo,
}

impl ProviderKind {
    /// The base URL used when none is configured.
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::OpenLibrary => OPEN_LIBRARY_BASE_URL,
            Self::BookInfo => BOOK_INFO_BASE_URL,
        }
    }

    /// Short name used in configuration and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenLibrary => "open-library",
            Self::BookInfo => "book-info",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open-library" | "openlibrary" | "a" => Ok(Self::OpenLibrary),
            "book-info" | "bookinfo" | "b" => Ok(Self::BookInfo),
            other => Err(Error::new(
                ErrorKind::Config,
                format!("Unknown provider '{other}' - expected 'open-library' or 'book-info'"),
            )),
        }
    }
}

/// Lookup configuration: which provider to query and where it lives.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Which response shape and endpoint template to use.
    #[serde(default)]
    pub provider: ProviderKind,
    /// Base URL of the provider, defaults to [`ProviderKind::default_base_url`].
    pub base_url: Option<String>,
    /// Request timeout in seconds, the transport default applies when unset.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Creates a configuration for `provider` using its default base URL.
    #[must_use]
    pub const fn new(provider: ProviderKind) -> Self {
        Self {
            provider,
            base_url: None,
            timeout_secs: None,
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The base URL without any trailing `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.provider.default_base_url())
            .trim_end_matches('/')
    }

    /// Parses a TOML configuration.
    ///
    /// # Errors
    ///
    /// An `Err` with [`ErrorKind::Config`] is returned when the TOML is invalid or contains
    /// unknown keys.
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        toml::from_str(toml).map_err(|e| Error::wrap(ErrorKind::Config, e))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// An `Err` with [`ErrorKind::Config`] is returned when the file cannot be read or parsed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        trace!("Reading configuration from '{}'", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::new(
                ErrorKind::Config,
                format!("Cannot read config file '{}': {e}", path.display()),
            )
        })?;
        Self::from_toml_str(&content)
    }
}
