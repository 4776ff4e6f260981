use std::collections::HashMap;

use log::{info, trace};
use serde::Deserialize;

use crate::{
    record::{humanize_subject, non_empty, non_empty_all},
    BookRecord, Error,
};

use super::Client;

macro_rules! open_library_url {
    ($base: expr, $isbn: expr) => {
        format!(
            "{}/api/books?bibkeys=ISBN:{}&format=json&jscmd=data",
            $base, $isbn
        )
    };
}

pub(crate) fn get_book_record<C: Client>(
    client: &C,
    base_url: &str,
    isbn: &str,
) -> Result<BookRecord, Error> {
    info!("Searching for ISBN '{isbn}' using the Open Library API");
    let url = open_library_url!(base_url, isbn);
    trace!("GET {url}");

    let response: HashMap<String, Option<Book>> = client.get_json(&url)?;

    trace!("Request was successful");

    record_from_response(response, isbn)
}

/// Picks the book keyed by `ISBN:<isbn>` out of the response mapping.
///
/// A missing key and a `null` entry both mean the book is unknown.
fn record_from_response(
    mut response: HashMap<String, Option<Book>>,
    isbn: &str,
) -> Result<BookRecord, Error> {
    let book = response
        .remove(&format!("ISBN:{isbn}"))
        .flatten()
        .ok_or_else(Error::not_found)?;

    let mut record = BookRecord::from(book);
    record.fill_isbn(isbn);
    Ok(record)
}

/// A book as returned by `jscmd=data`.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Book {
    title: Option<String>,
    subtitle: Option<String>,
    #[serde(default)]
    authors: Vec<Named>,
    #[serde(default)]
    publishers: Vec<Named>,
    publish_date: Option<String>,
    number_of_pages: Option<u32>,
    cover: Option<Cover>,
    #[serde(default)]
    subjects: Vec<Named>,
    #[serde(default)]
    identifiers: Identifiers,
    #[serde(default)]
    classifications: Classifications,
    physical_dimensions: Option<String>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Named {
    name: String,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Cover {
    small: Option<String>,
    medium: Option<String>,
    large: Option<String>,
}

#[derive(Deserialize, Default)]
#[cfg_attr(test, derive(Debug))]
struct Identifiers {
    #[serde(default)]
    isbn_10: Vec<String>,
    #[serde(default)]
    isbn_13: Vec<String>,
}

#[derive(Deserialize, Default)]
#[cfg_attr(test, derive(Debug))]
struct Classifications {
    #[serde(default)]
    dewey_decimal_class: Vec<String>,
}

fn names(named: Vec<Named>) -> Vec<String> {
    non_empty_all(named.into_iter().map(|n| n.name))
}

impl From<Book> for BookRecord {
    fn from(book: Book) -> Self {
        // Deconstruct book to take ownership of fields (avoids cloning).
        let Book {
            title,
            subtitle,
            authors,
            publishers,
            publish_date,
            number_of_pages,
            cover,
            subjects,
            identifiers: Identifiers { isbn_10, isbn_13 },
            classifications: Classifications {
                dewey_decimal_class,
            },
            physical_dimensions,
        } = book;

        let title = non_empty(title);
        let title_long = match (&title, non_empty(subtitle)) {
            (Some(title), Some(subtitle)) => Some(format!("{title}: {subtitle}")),
            _ => None,
        };

        let publishers = names(publishers);
        let publisher = if publishers.is_empty() {
            None
        } else {
            Some(publishers.join(", "))
        };

        let cover_image_url = cover.and_then(|c| non_empty(c.medium.or(c.large).or(c.small)));

        Self {
            title,
            title_long,
            authors: names(authors),
            publisher,
            publish_date: non_empty(publish_date),
            page_count: number_of_pages,
            cover_image_url,
            subjects: names(subjects)
                .iter()
                .map(|s| humanize_subject(s))
                .collect(),
            isbn10: non_empty_all(isbn_10).into_iter().next(),
            isbn13: non_empty_all(isbn_13).into_iter().next(),
            dewey_decimal: non_empty_all(dewey_decimal_class),
            dimensions: non_empty(physical_dimensions),
            ..Self::default()
        }
    }
}
