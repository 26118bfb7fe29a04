//! Fixed-length feature vectors and the schema they are checked against.

use ruleminer_core::errors::FeatureError;

/// Left and right feature counts of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSchema {
    pub left_count: usize,
    pub right_count: usize,
}

impl FeatureSchema {
    pub fn new(left_count: usize, right_count: usize) -> Self {
        Self {
            left_count,
            right_count,
        }
    }

    /// Length every vector of this schema has.
    pub fn dimension(&self) -> usize {
        self.left_count + self.right_count
    }
}

/// A rule's features: left-side values followed by right-side values.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
    left_count: usize,
}

impl FeatureVector {
    /// Wrap `values`, asserting the length against `schema`.
    pub fn new(schema: &FeatureSchema, rule: &str, values: Vec<f64>) -> Result<Self, FeatureError> {
        if values.len() != schema.dimension() {
            return Err(FeatureError::DimensionMismatch {
                rule: rule.to_string(),
                expected: schema.dimension(),
                actual: values.len(),
            });
        }
        Ok(Self {
            values,
            left_count: schema.left_count,
        })
    }

    /// Concatenate side vectors, asserting each against its half of `schema`.
    pub fn from_sides(
        schema: &FeatureSchema,
        rule: &str,
        mut left: Vec<f64>,
        right: Vec<f64>,
    ) -> Result<Self, FeatureError> {
        if left.len() != schema.left_count || right.len() != schema.right_count {
            return Err(FeatureError::DimensionMismatch {
                rule: rule.to_string(),
                expected: schema.dimension(),
                actual: left.len() + right.len(),
            });
        }
        left.extend(right);
        Self::new(schema, rule, left)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn left(&self) -> &[f64] {
        &self.values[..self.left_count]
    }

    pub fn right(&self) -> &[f64] {
        &self.values[self.left_count..]
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
