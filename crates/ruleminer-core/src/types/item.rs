//! Item: the atomic categorical symbol.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ITEM_SEPARATOR, MEASURE_DELIMITER, SIDE_SEPARATOR, SUPPORT_SEPARATOR};
use crate::errors::ParseError;

/// Characters that delimit the persisted text formats and may not appear in an item.
pub const RESERVED_CHARS: [char; 6] = [
    ITEM_SEPARATOR,
    SIDE_SEPARATOR,
    MEASURE_DELIMITER,
    SUPPORT_SEPARATOR,
    '\n',
    '\r',
];

/// A validated item symbol.
///
/// Non-empty, no leading or trailing whitespace, none of [`RESERVED_CHARS`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Item(String);

impl Item {
    pub fn new(text: impl Into<String>) -> Result<Self, ParseError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ParseError::EmptyItem);
        }
        if let Some(character) = text.chars().find(|c| RESERVED_CHARS.contains(c)) {
            return Err(ParseError::ReservedCharacter {
                item: text,
                character,
            });
        }
        if text.trim() != text {
            return Err(ParseError::UntrimmedItem { item: text });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the item text starts with any of `prefixes`.
    pub fn has_any_prefix<S: AsRef<str>>(&self, prefixes: &[S]) -> bool {
        prefixes.iter().any(|p| self.0.starts_with(p.as_ref()))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Item {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Item {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Item {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Item> for String {
    fn from(item: Item) -> Self {
        item.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_attribute_value_items() {
        let item = Item::new("age=30-39").unwrap();
        assert_eq!(item.as_str(), "age=30-39");
    }

    #[test]
    fn rejects_reserved_characters() {
        for bad in ["a,b", "a>b", "a;b", "a\tb", "a\nb"] {
            assert!(
                matches!(Item::new(bad), Err(ParseError::ReservedCharacter { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_empty_and_untrimmed() {
        assert_eq!(Item::new(""), Err(ParseError::EmptyItem));
        assert!(matches!(
            Item::new(" milk"),
            Err(ParseError::UntrimmedItem { .. })
        ));
    }

    #[test]
    fn prefix_matching() {
        let item = Item::new("class=yes").unwrap();
        assert!(item.has_any_prefix(&["class="]));
        assert!(!item.has_any_prefix(&["age=", "sex="]));
        assert!(!item.has_any_prefix::<&str>(&[]));
    }
}
