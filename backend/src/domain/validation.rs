//! Field rules shared by the user and article entities.
//!
//! The rules are deliberately tiny: a value may be required to be non-blank,
//! and identifier-like values may additionally be required to carry no
//! whitespace at all. Entity constructors tag a [`FieldRuleViolation`] with
//! the field it came from, so callers see `IllegalWriter`, `IllegalTitle`,
//! and so on rather than a bare rule failure.

/// A raw field value broke one of the shared text rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldRuleViolation {
    /// The value is empty or whitespace only.
    #[error("must not be blank")]
    Blank,
    /// The value contains at least one whitespace character.
    #[error("must not contain whitespace")]
    ContainsWhitespace,
    /// The value is not shaped the way the field requires.
    #[error("is malformed")]
    Malformed,
}

/// Reject empty and whitespace-only values.
///
/// Both cases report [`FieldRuleViolation::Blank`]; callers that receive an
/// absent value should pass the empty string so it fails the same way.
///
/// # Examples
/// ```
/// use cafe::domain::validation::{FieldRuleViolation, validate_non_blank};
///
/// assert_eq!(validate_non_blank("   "), Err(FieldRuleViolation::Blank));
/// assert!(validate_non_blank("champ").is_ok());
/// ```
pub fn validate_non_blank(value: &str) -> Result<(), FieldRuleViolation> {
    if value.trim().is_empty() {
        return Err(FieldRuleViolation::Blank);
    }
    Ok(())
}

/// Reject values containing any Unicode whitespace character.
///
/// # Examples
/// ```
/// use cafe::domain::validation::{FieldRuleViolation, validate_no_whitespace};
///
/// assert_eq!(
///     validate_no_whitespace("cha mp"),
///     Err(FieldRuleViolation::ContainsWhitespace)
/// );
/// ```
pub fn validate_no_whitespace(value: &str) -> Result<(), FieldRuleViolation> {
    if value.chars().any(char::is_whitespace) {
        return Err(FieldRuleViolation::ContainsWhitespace);
    }
    Ok(())
}

/// Apply both rules, blank first.
pub(crate) fn validate_compact(value: &str) -> Result<(), FieldRuleViolation> {
    validate_non_blank(value)?;
    validate_no_whitespace(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n")]
    #[case("\u{3000}")]
    fn blank_values_share_one_violation(#[case] value: &str) {
        assert_eq!(validate_non_blank(value), Err(FieldRuleViolation::Blank));
    }

    #[rstest]
    #[case("cha mp")]
    #[case("champ\t")]
    #[case(" champ")]
    #[case("cha\u{00a0}mp")]
    fn interior_or_edge_whitespace_is_rejected(#[case] value: &str) {
        assert_eq!(
            validate_no_whitespace(value),
            Err(FieldRuleViolation::ContainsWhitespace)
        );
    }

    #[rstest]
    fn compact_reports_blank_before_whitespace() {
        assert_eq!(validate_compact("  "), Err(FieldRuleViolation::Blank));
        assert_eq!(
            validate_compact("a b"),
            Err(FieldRuleViolation::ContainsWhitespace)
        );
        assert!(validate_compact("champ").is_ok());
    }
}
