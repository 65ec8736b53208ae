//! Field validation rules.
//!
//! # Responsibility
//! - Model per-field constraint configuration (`FieldRule`).
//! - Evaluate all configured checks as a logical AND (`validate`).
//!
//! # Invariants
//! - An absent option means that check is skipped.
//! - Length checks apply to the trimmed string form of the value.
//! - Numeric bounds apply to the raw value; text that does not parse as
//!   a number fails the bound check.

/// A candidate field value as entered by the user.
///
/// Form inputs arrive as text; callers that already hold a parsed number
/// submit `Number` directly.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Trimmed string form used by the `required` and length checks.
    fn trimmed_text(&self) -> String {
        match self {
            Self::Text(value) => value.trim().to_string(),
            Self::Number(value) => value.to_string(),
        }
    }

    /// Numeric form used by the `min`/`max` checks.
    ///
    /// Returns `None` for text that does not parse as a number.
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(value) => value.trim().parse().ok(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Constraint configuration for one candidate field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    value: FieldValue,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
}

impl FieldRule {
    /// Creates a rule with no checks configured; such a rule always
    /// passes.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Requires the trimmed value to be non-empty.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires the trimmed value to hold at least `length` characters.
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Requires the trimmed value to hold at most `length` characters.
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Requires the numeric value to be at least `bound`.
    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    /// Requires the numeric value to be at most `bound`.
    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Evaluates every configured check on the rule.
///
/// Pure: never mutates input, never touches any other state. Returns
/// `true` only when all configured checks pass.
pub fn validate(rule: &FieldRule) -> bool {
    let trimmed = rule.value.trimmed_text();

    if rule.required && trimmed.is_empty() {
        return false;
    }
    if let Some(min_length) = rule.min_length {
        if trimmed.chars().count() < min_length {
            return false;
        }
    }
    if let Some(max_length) = rule.max_length {
        if trimmed.chars().count() > max_length {
            return false;
        }
    }

    if rule.min.is_some() || rule.max.is_some() {
        let Some(number) = rule.value.as_number() else {
            return false;
        };
        if let Some(min) = rule.min {
            if number < min {
                return false;
            }
        }
        if let Some(max) = rule.max {
            if number > max {
                return false;
            }
        }
    }

    true
}
