use std::time::Duration;

use log::{debug, info, trace, warn};

use crate::{api, BookRecord, Client, Config, Error, ErrorKind};

/// A single user-initiated search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    isbn: String,
}

impl SearchQuery {
    /// Creates a query from the raw text that was entered.
    pub fn new<S: Into<String>>(isbn: S) -> Self {
        Self { isbn: isbn.into() }
    }

    /// The ISBN with surrounding whitespace removed.
    #[must_use]
    pub fn isbn(&self) -> &str {
        self.isbn.trim()
    }
}

impl From<&str> for SearchQuery {
    fn from(isbn: &str) -> Self {
        Self::new(isbn)
    }
}

/// The observable state of a [`LookupController`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchState {
    /// No search has been made yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last search found a book.
    Success(BookRecord),
    /// The last search failed, with a message fit to show the person searching.
    Failure(String),
}

impl SearchState {
    /// `true` only while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Short lowercase name of the state.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Failure(_) => "failure",
        }
    }
}

/// Looks up books by ISBN and owns the resulting [`SearchState`].
///
/// `submit` takes the controller by exclusive reference, so a second search can only start once
/// the previous one has resolved and there is never more than one request writing the state.
pub struct LookupController<C = reqwest::blocking::Client> {
    client: C,
    config: Config,
    state: SearchState,
}

impl LookupController {
    /// Creates a controller using a `reqwest` blocking client.
    ///
    /// # Errors
    ///
    /// An `Err` with [`ErrorKind::Transport`] is returned when the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, Error> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(secs) = config.timeout_secs {
            trace!("Using a request timeout of {secs}s");
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| Error::wrap(ErrorKind::Transport, e))?;

        Ok(Self::with_client(client, config))
    }
}

impl<C: Client> LookupController<C> {
    /// Creates a controller on top of any [`Client`].
    pub fn with_client(client: C, config: Config) -> Self {
        Self {
            client,
            config,
            state: SearchState::Idle,
        }
    }

    /// The configuration lookups are made with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Looks up a book without touching the controller state.
    ///
    /// # Errors
    ///
    /// An `Err` with [`ErrorKind::EmptyInput`] is returned for an empty ISBN, no request is made.
    /// An `Err` with [`ErrorKind::NotFound`] or [`ErrorKind::Provider`] is returned when the
    /// provider has no book for the ISBN.
    /// An `Err` with [`ErrorKind::Transport`] is returned when the request or decoding fails.
    pub fn lookup(&self, query: &SearchQuery) -> Result<BookRecord, Error> {
        let isbn = query.isbn();
        if isbn.is_empty() {
            return Err(Error::empty_input());
        }

        api::get_book_record(&self.client, &self.config, isbn)
    }

    /// Runs a search and returns the state it ended in.
    pub fn submit(&mut self, query: &SearchQuery) -> &SearchState {
        self.submit_with(query, |_| {})
    }

    /// Runs a search, calling `observe` after every state transition.
    ///
    /// An empty ISBN goes straight to [`SearchState::Failure`], otherwise the observer sees
    /// [`SearchState::Loading`] followed by either [`SearchState::Success`] or
    /// [`SearchState::Failure`].
    pub fn submit_with<F>(&mut self, query: &SearchQuery, mut observe: F) -> &SearchState
    where
        F: FnMut(&SearchState),
    {
        if query.isbn().is_empty() {
            info!("Empty ISBN submitted - skipping lookup");
            self.transition(
                SearchState::Failure(Error::empty_input().user_message()),
                &mut observe,
            );
            return &self.state;
        }

        self.transition(SearchState::Loading, &mut observe);

        let next = match self.lookup(query) {
            Ok(record) => SearchState::Success(record),
            Err(err) => {
                if err.kind() == ErrorKind::Transport {
                    warn!("Lookup of '{}' failed: {err}", query.isbn());
                } else {
                    debug!("Lookup of '{}' found nothing: {err}", query.isbn());
                }
                SearchState::Failure(err.user_message())
            }
        };

        self.transition(next, &mut observe);
        &self.state
    }

    fn transition<F>(&mut self, next: SearchState, observe: &mut F)
    where
        F: FnMut(&SearchState),
    {
        debug!("Search state: {} -> {}", self.state.name(), next.name());
        self.state = next;
        observe(&self.state);
    }
}
