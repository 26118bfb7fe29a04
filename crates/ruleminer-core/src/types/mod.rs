//! Domain types: items, itemsets, association rules, frequency combos.

pub mod combo;
pub mod item;
pub mod itemset;
pub mod rule;

pub use combo::FrequencyCombo;
pub use item::Item;
pub use itemset::Itemset;
pub use rule::AssociationRule;
