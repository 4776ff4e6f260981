use log::{debug, info, trace};
use serde::Deserialize;

use crate::{
    record::{humanize_subject, non_empty, non_empty_all},
    BookRecord, Error, ErrorKind, OtherEdition,
};

use super::{
    loose::{OneOrMany, Scalar},
    Client,
};

pub(crate) fn get_book_record<C: Client>(
    client: &C,
    base_url: &str,
    isbn: &str,
) -> Result<BookRecord, Error> {
    info!("Searching for ISBN '{isbn}' using the book-info endpoint");
    let url = format!("{base_url}/api/book-info/?isbn={isbn}");
    trace!("GET {url}");

    let envelope: Envelope = client.get_json(&url)?;

    trace!("Request was successful");

    envelope.into_record()
}

/// The `{success, data, error}` wrapper the proxy puts around every answer.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Envelope {
    #[serde(default)]
    success: bool,
    data: Option<BookInfo>,
    error: Option<String>,
}

impl Envelope {
    fn into_record(self) -> Result<BookRecord, Error> {
        match self {
            Self {
                success: true,
                data: Some(data),
                ..
            } => Ok(BookRecord::from(data)),
            Self { error, .. } => Err(non_empty(error).map_or_else(Error::not_found, |message| {
                debug!("Provider reported an error: {message}");
                Error::new(ErrorKind::Provider, message)
            })),
        }
    }
}

/// Book data as forwarded from ISBNdb by the proxy.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct BookInfo {
    isbn: Option<String>,
    isbn10: Option<String>,
    isbn13: Option<String>,
    title: Option<String>,
    title_long: Option<String>,
    authors: Option<OneOrMany<String>>,
    publisher: Option<String>,
    publish_date: Option<Scalar>,
    edition: Option<Scalar>,
    language: Option<String>,
    pages: Option<Scalar>,
    dimensions: Option<String>,
    overview: Option<String>,
    image: Option<String>,
    subjects: Option<OneOrMany<String>>,
    dewey_decimal: Option<OneOrMany<Scalar>>,
    msrp: Option<Scalar>,
    binding: Option<String>,
    #[serde(default)]
    other_isbns: Vec<OtherIsbn>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct OtherIsbn {
    isbn: String,
    binding: Option<String>,
}

fn scalar(value: Option<Scalar>) -> Option<String> {
    non_empty(value.map(String::from))
}

fn many<T: Into<String>>(value: Option<OneOrMany<T>>) -> Vec<String> {
    non_empty_all(
        value
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .map(Into::into),
    )
}

impl From<BookInfo> for BookRecord {
    fn from(info: BookInfo) -> Self {
        // Deconstruct info to take ownership of fields (avoids cloning).
        let BookInfo {
            isbn,
            isbn10,
            isbn13,
            title,
            title_long,
            authors,
            publisher,
            publish_date,
            edition,
            language,
            pages,
            dimensions,
            overview,
            image,
            subjects,
            dewey_decimal,
            msrp,
            binding,
            other_isbns,
        } = info;

        let page_count = scalar(pages).and_then(|pages| {
            pages
                .parse::<u32>()
                .map_err(|_| debug!("Dropping page count '{pages}' - not a number"))
                .ok()
        });

        let other_editions = other_isbns
            .into_iter()
            .filter_map(|OtherIsbn { isbn, binding }| {
                non_empty(Some(isbn)).map(|isbn| OtherEdition {
                    isbn,
                    binding: non_empty(binding),
                })
            })
            .collect();

        Self {
            title: non_empty(title),
            title_long: non_empty(title_long),
            authors: many(authors),
            publisher: non_empty(publisher),
            publish_date: scalar(publish_date),
            page_count,
            language: non_empty(language),
            binding: non_empty(binding),
            edition: scalar(edition),
            price_msrp: scalar(msrp),
            isbn10: non_empty(isbn10).or_else(|| non_empty(isbn)),
            isbn13: non_empty(isbn13),
            cover_image_url: non_empty(image),
            subjects: many(subjects)
                .iter()
                .map(|s| humanize_subject(s))
                .collect(),
            dimensions: non_empty(dimensions),
            dewey_decimal: many(dewey_decimal),
            other_editions,
            overview: non_empty(overview),
        }
    }
}
