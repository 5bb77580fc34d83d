//! String validator: length, emptiness, case-insensitive equality, and
//! whole-subject pattern matching.

use crate::checks::length::LengthRules;
use crate::checks::text::TextRules;
use crate::core::{Core, Outcome};
use crate::error::{ConstructionError, ValidationError};
use crate::subject::{IntoSubject, describe};

/// Validates a string subject.
///
/// Lengths count Unicode scalar values, not bytes. The case-sensitive and
/// case-insensitive equality tests are mutually exclusive: enabling one
/// disables the other.
///
/// # Examples
///
/// ```
/// use proviso::string;
///
/// let passed = string("HelloWorld")
///     .min_length(8)?
///     .max_length(10)?
///     .validate()?;
/// assert!(passed);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct StringValidator {
    core: Core<String>,
    length: LengthRules,
    text: TextRules,
}

impl StringValidator {
    super::base_api!(String);

    /// Enables the case-sensitive equality test, replacing any previous
    /// expected value. Forces not-null; disables the case-insensitive
    /// test.
    pub fn equals(mut self, expected: impl Into<String>) -> Self {
        self.text.clear_equals_no_case();
        self.core.enable_equals(expected.into());
        self
    }

    /// Enables the case-insensitive equality test, replacing any previous
    /// expected value. Forces not-null; disables the case-sensitive test.
    pub fn equals_no_case(mut self, expected: impl Into<String>) -> Self {
        self.core.disable_equals();
        self.core.enable_not_null();
        self.text.set_equals_no_case(expected.into());
        self
    }

    /// The subject must contain at least one char. Forces not-null.
    pub fn not_empty(mut self) -> Self {
        self.core.enable_not_null();
        self.length.set_not_empty();
        self
    }

    /// Enables the minimum-length test (inclusive), replacing any previous
    /// bound. Forces not-null. A minimum above an already-set maximum is a
    /// construction error.
    pub fn min_length(mut self, min: usize) -> Result<Self, ConstructionError> {
        self.length.set_min(min)?;
        self.core.enable_not_null();
        Ok(self)
    }

    /// Enables the maximum-length test (inclusive), replacing any previous
    /// bound. Forces not-null. A maximum below an already-set minimum is a
    /// construction error.
    pub fn max_length(mut self, max: usize) -> Result<Self, ConstructionError> {
        self.length.set_max(max)?;
        self.core.enable_not_null();
        Ok(self)
    }

    /// Enables the pattern test, replacing any previous pattern. The
    /// pattern is compiled here and anchored to the whole subject, so a
    /// partial substring match is not a pass. Forces not-null. An invalid
    /// pattern is a construction error.
    pub fn matches(mut self, pattern: &str) -> Result<Self, ConstructionError> {
        self.text.set_pattern(pattern)?;
        self.core.enable_not_null();
        Ok(self)
    }

    /// Runs the enabled tests in fixed order: not-null, equals, not-empty,
    /// min-length, max-length, equals-no-case, pattern. Zero enabled tests
    /// pass vacuously.
    pub fn validate(&self) -> Result<bool, ValidationError> {
        let mut out = Outcome::new(self.core.is_fail_fast());
        self.run(&mut out)?;
        Ok(out.passed())
    }

    /// Runs the string-layer tests against a caller-owned outcome. The URI
    /// validator drives this as its structural base.
    pub(crate) fn run(&self, out: &mut Outcome) -> Result<(), ValidationError> {
        self.core.run(out)?;
        let length = self.core.value().map(|subject| subject.chars().count());
        self.length
            .run(length, || describe(self.core.value()), out)?;
        self.text
            .run(self.core.value().map(String::as_str), out)?;
        Ok(())
    }

    pub(crate) fn is_fail_fast(&self) -> bool {
        self.core.is_fail_fast()
    }
}

/// Creates a string validator for the given subject.
pub fn string(value: impl IntoSubject<String>) -> StringValidator {
    StringValidator {
        core: Core::new(value.into_subject()),
        length: LengthRules::new(),
        text: TextRules::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tests_is_a_vacuous_pass() {
        assert!(string("anything").validate().unwrap());
        assert!(string(None::<&str>).validate().unwrap());
    }

    #[test]
    fn length_range() {
        let passed = string("HelloWorld")
            .min_length(8)
            .unwrap()
            .max_length(10)
            .unwrap()
            .validate()
            .unwrap();
        assert!(passed);
    }

    #[test]
    fn max_length_fail_fast_raises() {
        let err = string("HelloWorld")
            .max_length(5)
            .unwrap()
            .fail_fast()
            .validate()
            .unwrap_err();
        assert_eq!(err.code, "max_length");
        assert_eq!(err.param("max"), Some("5"));
        assert_eq!(err.param("length"), Some("10"));
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        let passed = string("héllo")
            .min_length(5)
            .unwrap()
            .max_length(5)
            .unwrap()
            .validate()
            .unwrap();
        assert!(passed);
    }

    #[test]
    fn equals_is_case_sensitive() {
        assert!(string("Hello").equals("Hello").validate().unwrap());
        assert!(!string("Hello").equals("hello").validate().unwrap());
    }

    #[test]
    fn equals_no_case_supersedes_equals() {
        let passed = string("Hello")
            .equals("goodbye")
            .equals_no_case("HELLO")
            .validate()
            .unwrap();
        assert!(passed);
    }

    #[test]
    fn equals_supersedes_equals_no_case() {
        let passed = string("Hello")
            .equals_no_case("goodbye")
            .equals("Hello")
            .validate()
            .unwrap();
        assert!(passed);
    }

    #[test]
    fn pattern_must_cover_the_whole_subject() {
        assert!(string("12345").matches("[0-9]+").unwrap().validate().unwrap());
        assert!(
            !string("12345x")
                .matches("[0-9]+")
                .unwrap()
                .validate()
                .unwrap()
        );
    }

    #[test]
    fn invalid_pattern_fails_the_chaining_call() {
        let err = string("x").matches("([0-9]+");
        assert!(matches!(err, Err(ConstructionError::BadPattern(_))));
    }

    #[test]
    fn not_empty() {
        assert!(string("x").not_empty().validate().unwrap());
        assert!(!string("").not_empty().validate().unwrap());
        assert!(!string(None::<&str>).not_empty().validate().unwrap());
    }

    #[test]
    fn fixed_order_reports_not_empty_before_pattern() {
        let err = string("")
            .matches("[a-z]+")
            .unwrap()
            .not_empty()
            .fail_fast()
            .validate()
            .unwrap_err();
        assert_eq!(err.code, "not_empty");
    }

    #[test]
    fn value_returns_the_subject() {
        let validator = string("abc");
        assert_eq!(validator.value().map(String::as_str), Some("abc"));
        assert_eq!(string(None::<&str>).value(), None);
    }
}
