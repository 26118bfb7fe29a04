//! Frequency combo: the three support counts behind every rule metric.

/// `(left_support, right_support, both_support)` for one rule, resolved from
/// the itemset dictionary as `left`, `right` and `left ∪ right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyCombo {
    pub left: u64,
    pub right: u64,
    pub both: u64,
}

impl FrequencyCombo {
    pub fn new(left: u64, right: u64, both: u64) -> Self {
        Self { left, right, both }
    }

    /// `both / left`, or `None` when the left support is zero.
    pub fn confidence(&self) -> Option<f64> {
        if self.left == 0 {
            None
        } else {
            Some(self.both as f64 / self.left as f64)
        }
    }
}
