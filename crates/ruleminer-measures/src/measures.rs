//! The fixed, ordered battery of 32 interestingness measures.
//!
//! Notation: A is the left side, B the right side, probabilities are
//! relative to the transaction count and every logarithm is base 2.

use ruleminer_core::constants::MEASURE_COUNT;

use crate::contingency::ContingencyTable;

/// A named measure formula.
#[derive(Debug, Clone, Copy)]
pub struct Measure {
    pub name: &'static str,
    pub formula: fn(&ContingencyTable) -> f64,
}

impl Measure {
    /// Evaluate on raw counts.
    pub fn compute(&self, left: u64, right: u64, both: u64, total: u64) -> f64 {
        (self.formula)(&ContingencyTable::from_counts(left, right, both, total))
    }
}

macro_rules! measures {
    ($($name:ident),* $(,)?) => {
        [$(Measure { name: stringify!($name), formula: $name }),*]
    };
}

/// Output column order of the interestingness file.
pub const MEASURES: [Measure; MEASURE_COUNT] = measures![
    confidence,
    coverage,
    prevalence,
    recall,
    specificity,
    accuracy,
    lift,
    leverage,
    change_of_support,
    relative_risk,
    jaccard,
    certainty_factor,
    odds_ratio,
    yule_q,
    yule_y,
    klosgen,
    conviction,
    weighted_dependency,
    collective_strength,
    laplace_correction,
    j_measure,
    one_way_support,
    two_way_support,
    two_way_support_variation,
    linear_correlation_coefficient,
    loevinger,
    information_gain,
    sebag_schoenauer,
    least_contradiction,
    odd_multiplier,
    counter_example_rate,
    zhang,
];

/// `p * log2(p / q)` with the information-theoretic convention `0 log 0 = 0`.
fn plogp(p: f64, q: f64) -> f64 {
    if p == 0.0 {
        0.0
    } else {
        p * (p / q).log2()
    }
}

/// P(B|A)
pub fn confidence(t: &ContingencyTable) -> f64 {
    t.b_given_a()
}

/// P(A)
pub fn coverage(t: &ContingencyTable) -> f64 {
    t.a
}

/// P(B)
pub fn prevalence(t: &ContingencyTable) -> f64 {
    t.b
}

/// P(A|B)
pub fn recall(t: &ContingencyTable) -> f64 {
    t.ab / t.b
}

/// P(¬B|¬A)
pub fn specificity(t: &ContingencyTable) -> f64 {
    t.not_a_not_b() / t.not_a()
}

/// P(AB) + P(¬A¬B)
pub fn accuracy(t: &ContingencyTable) -> f64 {
    t.ab + t.not_a_not_b()
}

pub fn lift(t: &ContingencyTable) -> f64 {
    t.lift()
}

/// P(AB) - P(A)P(B). Also known as Piatetsky-Shapiro.
pub fn leverage(t: &ContingencyTable) -> f64 {
    t.ab - t.a * t.b
}

/// P(B|A) - P(B)
pub fn change_of_support(t: &ContingencyTable) -> f64 {
    t.b_given_a() - t.b
}

/// P(B|A) / P(B|¬A)
pub fn relative_risk(t: &ContingencyTable) -> f64 {
    t.b_given_a() / (t.not_a_b() / t.not_a())
}

pub fn jaccard(t: &ContingencyTable) -> f64 {
    t.ab / (t.a + t.b - t.ab)
}

pub fn certainty_factor(t: &ContingencyTable) -> f64 {
    (t.b_given_a() - t.b) / t.not_b()
}

pub fn odds_ratio(t: &ContingencyTable) -> f64 {
    (t.ab * t.not_a_not_b()) / (t.a_not_b() * t.not_a_b())
}

pub fn yule_q(t: &ContingencyTable) -> f64 {
    let agree = t.ab * t.not_a_not_b();
    let disagree = t.a_not_b() * t.not_a_b();
    (agree - disagree) / (agree + disagree)
}

pub fn yule_y(t: &ContingencyTable) -> f64 {
    let agree = (t.ab * t.not_a_not_b()).sqrt();
    let disagree = (t.a_not_b() * t.not_a_b()).sqrt();
    (agree - disagree) / (agree + disagree)
}

/// sqrt(P(AB)) · (P(B|A) - P(B))
pub fn klosgen(t: &ContingencyTable) -> f64 {
    t.ab.sqrt() * (t.b_given_a() - t.b)
}

/// P(A)P(¬B) / P(A¬B)
pub fn conviction(t: &ContingencyTable) -> f64 {
    t.a * t.not_b() / t.a_not_b()
}

/// (lift - 1) · P(AB), the k = m = 1 instance.
pub fn weighted_dependency(t: &ContingencyTable) -> f64 {
    (t.lift() - 1.0) * t.ab
}

pub fn collective_strength(t: &ContingencyTable) -> f64 {
    let observed = t.ab + t.not_a_not_b();
    let expected = t.a * t.b + t.not_a() * t.not_b();
    (observed / expected) * ((1.0 - expected) / (1.0 - observed))
}

/// (|AB| + 1) / (|A| + 2)
pub fn laplace_correction(t: &ContingencyTable) -> f64 {
    (t.both as f64 + 1.0) / (t.left as f64 + 2.0)
}

pub fn j_measure(t: &ContingencyTable) -> f64 {
    plogp(t.ab, t.a * t.b) + plogp(t.a_not_b(), t.a * t.not_b())
}

/// P(B|A) · log2(lift)
pub fn one_way_support(t: &ContingencyTable) -> f64 {
    t.b_given_a() * t.lift().log2()
}

/// P(AB) · log2(lift)
pub fn two_way_support(t: &ContingencyTable) -> f64 {
    t.ab * t.lift().log2()
}

/// Mutual information between the A and B indicators.
pub fn two_way_support_variation(t: &ContingencyTable) -> f64 {
    plogp(t.ab, t.a * t.b)
        + plogp(t.a_not_b(), t.a * t.not_b())
        + plogp(t.not_a_b(), t.not_a() * t.b)
        + plogp(t.not_a_not_b(), t.not_a() * t.not_b())
}

/// Phi coefficient.
pub fn linear_correlation_coefficient(t: &ContingencyTable) -> f64 {
    (t.ab - t.a * t.b) / (t.a * t.b * t.not_a() * t.not_b()).sqrt()
}

pub fn loevinger(t: &ContingencyTable) -> f64 {
    1.0 - t.a * t.not_b() / t.a_not_b()
}

/// log2(lift)
pub fn information_gain(t: &ContingencyTable) -> f64 {
    t.lift().log2()
}

/// P(AB) / P(A¬B)
pub fn sebag_schoenauer(t: &ContingencyTable) -> f64 {
    t.ab / t.a_not_b()
}

pub fn least_contradiction(t: &ContingencyTable) -> f64 {
    (t.ab - t.a_not_b()) / t.b
}

pub fn odd_multiplier(t: &ContingencyTable) -> f64 {
    (t.ab * t.not_b()) / (t.b * t.a_not_b())
}

/// 1 - P(A¬B) / P(AB)
pub fn counter_example_rate(t: &ContingencyTable) -> f64 {
    1.0 - t.a_not_b() / t.ab
}

pub fn zhang(t: &ContingencyTable) -> f64 {
    (t.ab - t.a * t.b) / (t.ab * t.not_b()).max(t.b * t.a_not_b())
}
