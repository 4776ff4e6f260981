pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

pub(crate) const EMPTY_INPUT_MESSAGE: &str = "Please enter an ISBN number";
pub(crate) const NOT_FOUND_MESSAGE: &str = "Book not found. Please check the ISBN number.";
pub(crate) const TRANSPORT_MESSAGE: &str = "Failed to fetch book data. Please try again.";

/// The Errors that may occur when looking up a book.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The ISBN was empty once surrounding whitespace was removed.
    EmptyInput,
    /// The provider answered but had no book for the ISBN.
    NotFound,
    /// The provider answered with an explicit error message.
    Provider,
    /// The request failed, returned a non-success status or a body that could not be parsed.
    Transport,
    /// The lookup configuration is invalid.
    Config,
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    pub(crate) fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput, EMPTY_INPUT_MESSAGE)
    }

    pub(crate) fn not_found() -> Self {
        Self::new(ErrorKind::NotFound, NOT_FOUND_MESSAGE)
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message that is safe to show to the person searching.
    ///
    /// Transport failures always reduce to the same canned message, the underlying cause is only
    /// available through [`std::error::Error::source`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match (self.kind, &self.message) {
            (ErrorKind::EmptyInput, _) => EMPTY_INPUT_MESSAGE.to_owned(),
            (ErrorKind::Transport, _) => TRANSPORT_MESSAGE.to_owned(),
            (ErrorKind::NotFound, None) => NOT_FOUND_MESSAGE.to_owned(),
            (_, Some(message)) => message.clone(),
            (_, None) => self.to_string(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::EmptyInput => f.write_str("Empty input")?,
            ErrorKind::NotFound => f.write_str("Not found")?,
            ErrorKind::Provider => f.write_str("Provider error")?,
            ErrorKind::Transport => f.write_str("Transport error")?,
            ErrorKind::Config => f.write_str("Config error")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_cause_is_hidden_from_user_message() {
        let err = Error::wrap(ErrorKind::Transport, "connection refused");

        assert_eq!(TRANSPORT_MESSAGE, err.user_message());
        assert_eq!("Transport error: caused by connection refused", err.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn provider_message_is_forwarded() {
        let err = Error::new(ErrorKind::Provider, "No match");
        assert_eq!("No match", err.user_message());
    }

    #[test]
    fn not_found_without_message_uses_default() {
        let err = Error::wrap(ErrorKind::NotFound, "empty mapping");
        assert_eq!(NOT_FOUND_MESSAGE, err.user_message());
    }
}
