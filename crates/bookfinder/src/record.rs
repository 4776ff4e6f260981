//! The provider-agnostic book model.

use serde::Serialize;

/// Normalized book metadata returned by every provider.
///
/// Providers disagree on payload shape and completeness, so every field is optional and the
/// sequences are simply empty when the provider has nothing to say.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    /// Short title.
    pub title: Option<String>,
    /// Title including any subtitle.
    pub title_long: Option<String>,
    /// Author names in the order the provider listed them.
    pub authors: Vec<String>,
    /// Publisher name(s).
    pub publisher: Option<String>,
    /// Publication date as reported by the provider, not parsed.
    pub publish_date: Option<String>,
    /// Number of pages.
    pub page_count: Option<u32>,
    /// Language code or name.
    pub language: Option<String>,
    /// Binding, e.g. "Paperback".
    pub binding: Option<String>,
    /// Edition description.
    pub edition: Option<String>,
    /// Manufacturer's suggested retail price.
    pub price_msrp: Option<String>,
    /// ISBN-10.
    pub isbn10: Option<String>,
    /// ISBN-13.
    pub isbn13: Option<String>,
    /// URL of a cover image.
    pub cover_image_url: Option<String>,
    /// Humanized subject tags, see [`humanize_subject`].
    pub subjects: Vec<String>,
    /// Physical dimensions.
    pub dimensions: Option<String>,
    /// Dewey decimal classifications.
    pub dewey_decimal: Vec<String>,
    /// Other editions of the same work.
    pub other_editions: Vec<OtherEdition>,
    /// Synopsis.
    pub overview: Option<String>,
}

/// Another edition of a book, identified by its ISBN.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtherEdition {
    /// ISBN of the edition.
    pub isbn: String,
    /// Binding of the edition when known.
    pub binding: Option<String>,
}

impl BookRecord {
    /// Authors joined with `", "`, or `None` when there are no authors.
    #[must_use]
    pub fn authors_joined(&self) -> Option<String> {
        if self.authors.is_empty() {
            None
        } else {
            Some(self.authors.join(", "))
        }
    }

    /// Fills the ISBN slot matching the length of `isbn` when the provider left both empty.
    pub(crate) fn fill_isbn(&mut self, isbn: &str) {
        if self.isbn10.is_some() || self.isbn13.is_some() {
            return;
        }

        if isbn.chars().count() == 13 {
            self.isbn13 = Some(isbn.to_owned());
        } else {
            self.isbn10 = Some(isbn.to_owned());
        }
    }
}

/// Turns a subject tag into a readable label.
///
/// Underscores become spaces and each word is title-cased, so `SCIENCE_FICTION` becomes
/// `Science Fiction`.
///
/// ```
/// assert_eq!("Science Fiction", bookfinder::humanize_subject("SCIENCE_FICTION"));
/// assert_eq!("English Literature", bookfinder::humanize_subject("english  literature"));
/// ```
#[must_use]
pub fn humanize_subject(subject: &str) -> String {
    subject
        .replace('_', " ")
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Returns `None` for strings that are empty once trimmed.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

/// Drops empty entries from a list of strings.
pub(crate) fn non_empty_all<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    values
        .into_iter()
        .filter_map(|s| non_empty(Some(s)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_tags_are_title_cased() {
        assert_eq!("Science Fiction", humanize_subject("SCIENCE_FICTION"));
        assert_eq!("Dystopias", humanize_subject("dystopias"));
        assert_eq!("Fiction General", humanize_subject("_fiction__general_"));
        assert_eq!("", humanize_subject("___"));
    }

    #[test]
    fn authors_joined_is_none_for_no_authors() {
        let mut record = BookRecord::default();
        assert_eq!(None, record.authors_joined());

        record.authors = vec!["Terry Pratchett".to_owned(), "Neil Gaiman".to_owned()];
        assert_eq!(
            Some("Terry Pratchett, Neil Gaiman".to_owned()),
            record.authors_joined()
        );
    }

    #[test]
    fn fill_isbn_uses_length_to_pick_slot() {
        let mut record = BookRecord::default();
        record.fill_isbn("9780140449136");
        assert_eq!(Some("9780140449136"), record.isbn13.as_deref());
        assert_eq!(None, record.isbn10);

        let mut record = BookRecord::default();
        record.fill_isbn("0735619670");
        assert_eq!(Some("0735619670"), record.isbn10.as_deref());

        // never overrides what the provider sent
        record.fill_isbn("9780140449136");
        assert_eq!(None, record.isbn13);
    }

    #[test]
    fn blank_strings_are_absent() {
        assert_eq!(None, non_empty(Some("   ".to_owned())));
        assert_eq!(Some("x".to_owned()), non_empty(Some(" x ".to_owned())));
        assert_eq!(
            vec!["a".to_owned()],
            non_empty_all(vec![String::new(), "a".to_owned()])
        );
    }
}
