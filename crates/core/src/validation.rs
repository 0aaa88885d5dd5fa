//! Personalization validation.
//!
//! Pure rule checks over customer-supplied personalization. Every rule runs
//! independently and all violations are reported together, so a caller can
//! surface the complete correction list in one pass instead of bouncing the
//! customer through one error at a time.

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::SmallVec;
use thiserror::Error;

use crate::personalization::Personalization;

/// Longest accepted child name, in characters.
pub const CHILD_NAME_LIMIT: usize = 50;

/// Longest accepted dedication, in characters.
pub const DEDICATION_LIMIT: usize = 500;

/// Baseline screening entries when no external moderation list is supplied.
const DEFAULT_DENYLIST: [&str; 2] = ["bad", "inappropriate"];

/// A single violated validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// Child name blank or whitespace-only.
    #[error("child name is required")]
    EmptyName,

    /// Child name over [`CHILD_NAME_LIMIT`] characters.
    #[error("child name must be 50 characters or less")]
    NameTooLong,

    /// Child name contains a character outside letters, spaces, hyphens,
    /// and apostrophes.
    #[error("child name can only contain letters, spaces, hyphens, and apostrophes")]
    InvalidNameCharacters,

    /// Dedication over [`DEDICATION_LIMIT`] characters.
    #[error("dedication must be 500 characters or less")]
    DedicationTooLong,

    /// Screening matched the combined name and dedication text.
    #[error("content contains inappropriate language")]
    InappropriateContent,
}

/// Every rule violated by one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: SmallVec<[Violation; 4]>,
}

impl ValidationErrors {
    /// The violations, in rule order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether a specific rule was violated.
    #[must_use]
    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }

    /// Number of violated rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether no rule was violated. Never true for a returned error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }

            Display::fmt(violation, f)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Case-insensitive denylist screening for customer-entered text.
///
/// The default list mirrors the storefront's baseline filter; a moderation
/// backend can supply richer entries through [`Screening::new`] without the
/// validation rules changing shape.
#[derive(Debug, Clone)]
pub struct Screening {
    entries: Vec<String>,
}

impl Screening {
    /// Build a screening over the given denylist entries.
    ///
    /// Entries are matched as case-insensitive substrings; blank entries are
    /// ignored.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| entry.into().to_lowercase())
                .filter(|entry| !entry.trim().is_empty())
                .collect(),
        }
    }

    /// Whether any denylist entry occurs in the text.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();

        self.entries.iter().any(|entry| lowered.contains(entry))
    }
}

impl Default for Screening {
    fn default() -> Self {
        Self::new(DEFAULT_DENYLIST)
    }
}

/// Validate a personalization against every rule.
///
/// # Errors
///
/// Returns [`ValidationErrors`] aggregating every violated rule; checks do
/// not short-circuit on the first failure.
pub fn validate(input: &Personalization, screening: &Screening) -> Result<(), ValidationErrors> {
    let mut violations = SmallVec::new();

    if input.child_name.trim().is_empty() {
        violations.push(Violation::EmptyName);
    }

    if input.child_name.chars().count() > CHILD_NAME_LIMIT {
        violations.push(Violation::NameTooLong);
    }

    if !input.child_name.chars().all(is_name_char) {
        violations.push(Violation::InvalidNameCharacters);
    }

    if let Some(dedication) = &input.dedication {
        if dedication.chars().count() > DEDICATION_LIMIT {
            violations.push(Violation::DedicationTooLong);
        }
    }

    // Screen the combined text the way it reaches print.
    let dedication = input.dedication.as_deref().unwrap_or_default();

    if screening.matches(&format!("{} {dedication}", input.child_name)) {
        violations.push(Violation::InappropriateContent);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { violations })
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, ' ' | '-' | '\'')
}

/// Character budget of a dedication, for live counters in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedicationBudget {
    /// Characters used so far.
    pub current: usize,

    /// Maximum allowed, always [`DEDICATION_LIMIT`].
    pub max: usize,

    /// Characters left before the limit; zero once exceeded.
    pub remaining: usize,
}

/// Compute the character budget for a dedication in progress.
#[must_use]
pub fn dedication_budget(text: &str) -> DedicationBudget {
    let current = text.chars().count();

    DedicationBudget {
        current,
        max: DEDICATION_LIMIT,
        remaining: DEDICATION_LIMIT.saturating_sub(current),
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures;

    use super::*;

    #[test]
    fn valid_input_passes() {
        let input = fixtures::personalization();

        assert!(validate(&input, &Screening::default()).is_ok());
    }

    #[test]
    fn hyphens_apostrophes_and_spaces_are_valid_name_characters() {
        let mut input = fixtures::personalization();
        input.child_name = "Anne-Marie O'Neill".to_string();

        assert!(validate(&input, &Screening::default()).is_ok());
    }

    #[test]
    fn blank_name_reports_empty_name() {
        let mut input = fixtures::personalization();
        input.child_name = "   ".to_string();

        let errors = validate(&input, &Screening::default()).unwrap_err();

        assert!(errors.contains(Violation::EmptyName));
    }

    #[test]
    fn digits_and_symbols_report_invalid_name_characters() {
        for name in ["Emma3", "Leo!", "M@ya", "Noah_", "Zoe\u{e9}\u{4e2d}"] {
            let mut input = fixtures::personalization();
            input.child_name = name.to_string();

            let errors = validate(&input, &Screening::default()).unwrap_err();

            assert!(
                errors.contains(Violation::InvalidNameCharacters),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn overlong_name_reports_name_too_long() {
        let mut input = fixtures::personalization();
        input.child_name = "A".repeat(CHILD_NAME_LIMIT + 1);

        let errors = validate(&input, &Screening::default()).unwrap_err();

        assert!(errors.contains(Violation::NameTooLong));
        assert_eq!(errors.len(), 1, "a long all-letter name breaks one rule");
    }

    #[test]
    fn name_at_the_limit_is_accepted() {
        let mut input = fixtures::personalization();
        input.child_name = "A".repeat(CHILD_NAME_LIMIT);

        assert!(validate(&input, &Screening::default()).is_ok());
    }

    #[test]
    fn overlong_dedication_reports_dedication_too_long() {
        let mut input = fixtures::personalization();
        input.dedication = Some("x".repeat(DEDICATION_LIMIT + 1));

        let errors = validate(&input, &Screening::default()).unwrap_err();

        assert!(errors.contains(Violation::DedicationTooLong));
    }

    #[test]
    fn absent_dedication_is_valid() {
        let mut input = fixtures::personalization();
        input.dedication = None;

        assert!(validate(&input, &Screening::default()).is_ok());
    }

    #[test]
    fn screening_matches_case_insensitively_across_both_fields() {
        let mut input = fixtures::personalization();
        input.dedication = Some("You are INAPPROPRIATE".to_string());

        let errors = validate(&input, &Screening::default()).unwrap_err();

        assert!(errors.contains(Violation::InappropriateContent));
    }

    #[test]
    fn custom_denylist_replaces_the_default() {
        let screening = Screening::new(["dragon"]);
        let mut input = fixtures::personalization();
        input.dedication = Some("Here be Dragons".to_string());

        let errors = validate(&input, &screening).unwrap_err();

        assert!(errors.contains(Violation::InappropriateContent));

        // The default entries no longer apply.
        input.dedication = Some("not bad at all".to_string());

        assert!(validate(&input, &screening).is_ok());
    }

    #[test]
    fn all_violations_are_reported_together() {
        let mut input = fixtures::personalization();
        input.child_name = format!("{}!", "B".repeat(CHILD_NAME_LIMIT));
        input.dedication = Some("bad ".repeat(200));

        let errors = validate(&input, &Screening::default()).unwrap_err();

        assert!(errors.contains(Violation::NameTooLong));
        assert!(errors.contains(Violation::InvalidNameCharacters));
        assert!(errors.contains(Violation::DedicationTooLong));
        assert!(errors.contains(Violation::InappropriateContent));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn display_joins_violations_for_human_readable_messages() {
        let mut input = fixtures::personalization();
        input.child_name = String::new();

        let errors = validate(&input, &Screening::default()).unwrap_err();

        assert_eq!(errors.to_string(), "child name is required");
    }

    #[test]
    fn dedication_budget_counts_down_and_saturates() {
        assert_eq!(
            dedication_budget("With love"),
            DedicationBudget {
                current: 9,
                max: DEDICATION_LIMIT,
                remaining: DEDICATION_LIMIT - 9,
            }
        );

        let over = "x".repeat(DEDICATION_LIMIT + 40);

        assert_eq!(dedication_budget(&over).remaining, 0);
    }
}
