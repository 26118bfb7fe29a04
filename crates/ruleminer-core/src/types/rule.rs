//! Association rule entity and its canonical text form.

use std::fmt;
use std::str::FromStr;

use crate::constants::SIDE_SEPARATOR;
use crate::errors::ParseError;

use super::Itemset;

/// Implication `left -> right` between two non-empty, disjoint itemsets.
///
/// Serialized as `l1,l2>r1,r2`. Equality is structural over both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssociationRule {
    left: Itemset,
    right: Itemset,
}

impl AssociationRule {
    pub fn new(left: Itemset, right: Itemset) -> Result<Self, ParseError> {
        if left.is_empty() || right.is_empty() {
            let side = if left.is_empty() { "left" } else { "right" };
            return Err(ParseError::EmptySide {
                text: format!("{left}{SIDE_SEPARATOR}{right}"),
                side,
            });
        }
        if let Some(item) = left.first_shared(&right) {
            return Err(ParseError::OverlappingSides {
                text: format!("{left}{SIDE_SEPARATOR}{right}"),
                item: item.to_string(),
            });
        }
        Ok(Self { left, right })
    }

    /// Parse the canonical text form. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        let (left, right) = text
            .split_once(SIDE_SEPARATOR)
            .ok_or_else(|| ParseError::MissingSeparator {
                text: text.to_string(),
            })?;
        for (side, part) in [("left", left), ("right", right)] {
            if part.is_empty() {
                return Err(ParseError::EmptySide {
                    text: text.to_string(),
                    side,
                });
            }
        }
        Self::new(Itemset::parse(left)?, Itemset::parse(right)?)
    }

    pub fn left(&self) -> &Itemset {
        &self.left
    }

    pub fn right(&self) -> &Itemset {
        &self.right
    }

    /// `|left| + |right|`.
    pub fn length(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// The itemset the rule was generated from: `left ∪ right`.
    pub fn union(&self) -> Itemset {
        self.left.union(&self.right)
    }

    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SIDE_SEPARATOR}{}", self.left, self.right)
    }
}

impl FromStr for AssociationRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_text() {
        let rule = AssociationRule::parse("bread,milk>butter").unwrap();
        assert_eq!(rule.left().len(), 2);
        assert_eq!(rule.right().len(), 1);
        assert_eq!(rule.length(), 3);
        assert_eq!(rule.serialize(), "bread,milk>butter");
    }

    #[test]
    fn parse_canonicalizes_item_order() {
        let a = AssociationRule::parse("milk,bread>butter").unwrap();
        let b = AssociationRule::parse("bread,milk>butter").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.serialize(), "bread,milk>butter");
    }

    #[test]
    fn parse_trims_line_endings() {
        let rule = AssociationRule::parse("a>b\n").unwrap();
        assert_eq!(rule.serialize(), "a>b");
    }

    #[test]
    fn rejects_malformed_rules() {
        assert!(matches!(
            AssociationRule::parse("a,b"),
            Err(ParseError::MissingSeparator { .. })
        ));
        assert!(matches!(
            AssociationRule::parse(">b"),
            Err(ParseError::EmptySide { side: "left", .. })
        ));
        assert!(matches!(
            AssociationRule::parse("a>"),
            Err(ParseError::EmptySide { side: "right", .. })
        ));
        assert!(matches!(
            AssociationRule::parse("a,b>b"),
            Err(ParseError::OverlappingSides { .. })
        ));
        assert!(matches!(
            AssociationRule::parse("a>b>c"),
            Err(ParseError::ReservedCharacter { .. })
        ));
    }

    #[test]
    fn union_covers_both_sides() {
        let rule = AssociationRule::parse("a>b,c").unwrap();
        assert_eq!(rule.union().serialize(), "a,b,c");
    }
}
