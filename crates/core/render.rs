use std::fmt::Write;

use bookfinder::{BookRecord, SearchState};

const UNKNOWN: &str = "Unknown";

/// Renders the state of a search as it should appear in the terminal.
pub fn render(state: &SearchState) -> String {
    match state {
        SearchState::Idle => "Enter an ISBN to find book information".to_owned(),
        SearchState::Loading => "Searching...".to_owned(),
        SearchState::Failure(message) => message.clone(),
        SearchState::Success(record) => render_record(record),
    }
}

/// The details panel for a book.
///
/// Title, authors, publisher and publish date are always shown, any other field is only shown
/// when the provider sent it.
pub fn render_record(record: &BookRecord) -> String {
    let mut fields: Vec<(&str, String)> = vec![
        ("Title", or_unknown(record.title.clone())),
        ("Author(s)", or_unknown(record.authors_joined())),
        ("Publisher", or_unknown(record.publisher.clone())),
        ("Publish Date", or_unknown(record.publish_date.clone())),
    ];

    let optional = [
        ("Full Title", record.title_long.clone()),
        ("Pages", record.page_count.map(|p| p.to_string())),
        ("Language", record.language.clone()),
        ("Binding", record.binding.clone()),
        ("Edition", record.edition.clone()),
        ("MSRP", record.price_msrp.clone()),
        ("ISBN-10", record.isbn10.clone()),
        ("ISBN-13", record.isbn13.clone()),
        ("Dimensions", record.dimensions.clone()),
        ("Dewey Decimal", joined(&record.dewey_decimal)),
        ("Subjects", joined(&record.subjects)),
        ("Other Editions", other_editions(record)),
        ("Cover", record.cover_image_url.clone()),
    ];

    fields.extend(
        optional
            .into_iter()
            .filter_map(|(label, value)| value.map(|v| (label, v))),
    );

    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = String::from("Book Information\n");
    for (label, value) in fields {
        // writing to a String cannot fail
        let _ = writeln!(out, "  {label:<width$}  {value}");
    }

    if let Some(overview) = &record.overview {
        let _ = write!(out, "\n{overview}\n");
    }

    out.trim_end().to_owned()
}

fn or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN.to_owned())
}

fn joined(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

fn other_editions(record: &BookRecord) -> Option<String> {
    let editions = record
        .other_editions
        .iter()
        .map(|e| match &e.binding {
            Some(binding) => format!("{} ({binding})", e.isbn),
            None => e.isbn.clone(),
        })
        .collect::<Vec<_>>();

    joined(&editions)
}
