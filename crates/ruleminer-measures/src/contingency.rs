//! 2×2 contingency table of a rule `A -> B`: raw counts plus probabilities.

use ruleminer_core::types::FrequencyCombo;

/// Cell and marginal probabilities derived from `(left, right, both, total)`.
///
/// With `total == 0` every probability is NaN.
/// Ratios of two counts are taken from the counts themselves, so `b_given_a`
/// is exactly `both / left`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContingencyTable {
    pub left: u64,
    pub right: u64,
    pub both: u64,
    /// Transaction count.
    pub n: f64,
    /// P(A)
    pub a: f64,
    /// P(B)
    pub b: f64,
    /// P(AB)
    pub ab: f64,
}

impl ContingencyTable {
    pub fn from_counts(left: u64, right: u64, both: u64, total: u64) -> Self {
        let total = total as f64;
        Self {
            left,
            right,
            both,
            n: total,
            a: left as f64 / total,
            b: right as f64 / total,
            ab: both as f64 / total,
        }
    }

    pub fn from_combo(combo: &FrequencyCombo, total: u64) -> Self {
        Self::from_counts(combo.left, combo.right, combo.both, total)
    }

    /// P(¬A)
    pub fn not_a(&self) -> f64 {
        1.0 - self.a
    }

    /// P(¬B)
    pub fn not_b(&self) -> f64 {
        1.0 - self.b
    }

    /// P(A¬B)
    pub fn a_not_b(&self) -> f64 {
        self.a - self.ab
    }

    /// P(¬AB)
    pub fn not_a_b(&self) -> f64 {
        self.b - self.ab
    }

    /// P(¬A¬B)
    pub fn not_a_not_b(&self) -> f64 {
        1.0 - self.a - self.b + self.ab
    }

    /// P(B|A)
    pub fn b_given_a(&self) -> f64 {
        self.both as f64 / self.left as f64
    }

    /// P(AB) / (P(A)P(B))
    pub fn lift(&self) -> f64 {
        self.ab / (self.a * self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_sum_to_one() {
        let t = ContingencyTable::from_counts(50, 20, 10, 100);
        let sum = t.ab + t.a_not_b() + t.not_a_b() + t.not_a_not_b();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((t.b_given_a() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn b_given_a_is_exact_count_ratio() {
        // (1/5) / (3/5) rounds differently from 1/3.
        let t = ContingencyTable::from_counts(3, 2, 1, 5);
        assert_eq!(t.b_given_a(), 1.0 / 3.0);
        assert!(ContingencyTable::from_counts(0, 2, 0, 5).b_given_a().is_nan());
    }

    #[test]
    fn zero_total_is_nan_not_a_panic() {
        let t = ContingencyTable::from_counts(0, 0, 0, 0);
        assert!(t.a.is_nan());
        assert!(t.lift().is_nan());
    }
}
