//! Batch evaluation of the measure battery.

use ruleminer_core::constants::{MEASURE_COUNT, MEASURE_DELIMITER};
use ruleminer_core::types::FrequencyCombo;
use tracing::trace;

use crate::contingency::ContingencyTable;
use crate::measures::{Measure, MEASURES};

/// Evaluates every measure of [`MEASURES`] in their fixed order.
#[derive(Debug, Clone, Copy)]
pub struct InterestingnessEvaluator {
    measures: &'static [Measure; MEASURE_COUNT],
}

impl Default for InterestingnessEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl InterestingnessEvaluator {
    pub fn new() -> Self {
        Self {
            measures: &MEASURES,
        }
    }

    /// Column labels, in output order.
    pub fn measure_names(&self) -> [&'static str; MEASURE_COUNT] {
        self.measures.map(|m| m.name)
    }

    /// All measure values for one rule. Never fails: degenerate combos
    /// produce non-finite values.
    pub fn evaluate(&self, combo: &FrequencyCombo, total: u64) -> [f64; MEASURE_COUNT] {
        let table = ContingencyTable::from_combo(combo, total);
        let values = self.measures.map(|m| (m.formula)(&table));
        if values.iter().any(|v| !v.is_finite()) {
            trace!(?combo, total, "non-finite measure values");
        }
        values
    }

    /// `rule;v1;...;v32` with `f64` display formatting.
    pub fn format_line(&self, rule_text: &str, values: &[f64; MEASURE_COUNT]) -> String {
        let delimiter = MEASURE_DELIMITER.to_string();
        std::iter::once(rule_text.to_string())
            .chain(values.iter().map(ToString::to_string))
            .collect::<Vec<_>>()
            .join(delimiter.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_the_fixed_order() {
        let names = InterestingnessEvaluator::new().measure_names();
        assert_eq!(names[0], "confidence");
        assert_eq!(names[6], "lift");
        assert_eq!(names[MEASURE_COUNT - 1], "zhang");
    }

    #[test]
    fn format_line_has_one_column_per_measure() {
        let evaluator = InterestingnessEvaluator::new();
        let values = evaluator.evaluate(&FrequencyCombo::new(0, 0, 0), 100);
        let line = evaluator.format_line("a>b", &values);
        let columns: Vec<&str> = line.split(MEASURE_DELIMITER).collect();
        assert_eq!(columns.len(), MEASURE_COUNT + 1);
        assert_eq!(columns[0], "a>b");
        assert_eq!(columns[1], "NaN");
    }
}
