use serde::de::DeserializeOwned;

pub(crate) mod book_info;
pub(crate) mod loose;
pub(crate) mod open_library;

use crate::{BookRecord, Config, Error, ErrorKind, ProviderKind};

/// The HTTP transport used to reach a provider.
///
/// Every failure of the transport, be it a connection error, a non-success status or a body that
/// cannot be deserialized, is reported with [`ErrorKind::Transport`].
pub trait Client
where
    Self: Default,
{
    /// Sends a `GET` request to `url` and deserializes the JSON body.
    ///
    /// # Errors
    ///
    /// An `Err` with [`ErrorKind::Transport`] is returned when the request fails, the status is
    /// not a success or the body is not the expected JSON.
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::blocking::Client {
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::wrap(ErrorKind::Transport, e))
            .and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Transport, e)))
    }
}

/// Fetches and maps a single book from the provider selected by `config`.
pub(crate) fn get_book_record<C: Client>(
    client: &C,
    config: &Config,
    isbn: &str,
) -> Result<BookRecord, Error> {
    match config.provider {
        ProviderKind::OpenLibrary => {
            open_library::get_book_record(client, config.base_url(), isbn)
        }
        ProviderKind::BookInfo => book_info::get_book_record(client, config.base_url(), isbn),
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, call_count, impl_text_producer, MockClient, NetworkErrorProducer, Producer,
    URL_SINK,
};

#[cfg(test)]
mod test {

    use super::*;
    use std::cell::{Cell, RefCell};

    thread_local! {
        pub(crate) static URL_SINK: RefCell<Option<String>> = RefCell::new(None);
        static CALL_COUNT: Cell<usize> = Cell::new(0);
    }

    /// Number of requests the [`MockClient`] received on this thread.
    pub(crate) fn call_count() -> usize {
        CALL_COUNT.with(Cell::get)
    }

    /// Asserts that the expected URL is the same as the one provided to the [`MockClient`].
    ///
    /// The [`MockClient`] will update the static thread local `URL_SINK` with the URL string that
    /// was passed to it, this allows for asserting that implementing functions or methods are
    /// building the correct URL.
    macro_rules! assert_url {
        ($expected: expr) => {
            assert_url!($expected, "");
        };
        ($expected: expr, $($arg: tt)+) => {
            let url = crate::api::URL_SINK.with(|url| url.borrow().clone().unwrap_or_default());
            assert_eq!($expected, url, $($arg)+);
        };
    }

    pub(crate) trait Producer<T>
    where
        Self: Default,
    {
        fn produce() -> Result<T, Error>;
    }

    #[derive(Default)]
    pub(crate) struct MockClient<P: Producer<String> = EmptyTextProducer> {
        _producer: std::marker::PhantomData<P>,
    }

    impl<P: Producer<String>> Client for MockClient<P> {
        fn get_json<T>(&self, url: &str) -> Result<T, Error>
        where
            T: DeserializeOwned,
        {
            URL_SINK.with(|sink| *sink.borrow_mut() = Some(url.to_owned()));
            CALL_COUNT.with(|count| count.set(count.get() + 1));
            P::produce().and_then(|json| {
                serde_json::from_str(&json).map_err(|e| Error::wrap(ErrorKind::Transport, e))
            })
        }
    }

    macro_rules! impl_text_producer {
        ($($producer:ident => $exp:expr,)*) => {
            $(
                #[derive(Default)]
                pub(crate) struct $producer;

                impl crate::api::Producer<String> for $producer {
                    fn produce() -> Result<String, crate::Error> {
                        $exp
                    }
                }
            )*
        };
    }
    impl_text_producer! {
        EmptyTextProducer => Ok("".to_owned()),
        NetworkErrorProducer => Err(Error::new(ErrorKind::Transport, "Network error")),
    }

    pub(crate) use assert_url;
    pub(crate) use impl_text_producer;
}
