//! Deserialization helpers for loosely typed provider payloads.

use serde::Deserialize;

/// A value the provider sends either on its own or wrapped in an array.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// A scalar the provider sends either as a string or as a number.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
#[serde(untagged)]
pub(crate) enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => text,
            Scalar::Number(number) => number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_becomes_one_element_vec() {
        let authors: OneOrMany<String> = serde_json::from_str(r#""Aldous Huxley""#).unwrap();
        assert_eq!(vec!["Aldous Huxley".to_owned()], authors.into_vec());

        let authors: OneOrMany<String> = serde_json::from_str(r#"["A", "B"]"#).unwrap();
        assert_eq!(vec!["A".to_owned(), "B".to_owned()], authors.into_vec());
    }

    #[test]
    fn numbers_and_strings_are_both_scalars() {
        let price: Scalar = serde_json::from_str("12.99").unwrap();
        assert_eq!("12.99", String::from(price));

        let pages: Scalar = serde_json::from_str(r#""320""#).unwrap();
        assert_eq!("320", String::from(pages));
    }
}
