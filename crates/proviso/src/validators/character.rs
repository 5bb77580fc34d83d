//! Char validator: value bounds plus classification tests.

use crate::checks::bounds::Bounds;
use crate::checks::class::{CharRules, CharTest};
use crate::core::{Core, Outcome};
use crate::error::{ConstructionError, ValidationError};
use crate::subject::IntoSubject;

/// Validates a char subject.
///
/// `'\0'` is the empty char for the not-empty test. The uppercase and
/// lowercase tests are mutually exclusive: enabling one disables the
/// other.
///
/// # Examples
///
/// ```
/// use proviso::character;
///
/// assert!(character('7').is_digit().validate().unwrap());
/// assert!(!character('x').is_uppercase().validate().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct CharValidator {
    core: Core<char>,
    bounds: Bounds<char>,
    class: CharRules,
}

impl CharValidator {
    super::base_api!(char);

    /// Enables the equality test, replacing any previous expected value.
    /// Forces not-null.
    pub fn equals(mut self, expected: char) -> Self {
        self.core.enable_equals(expected);
        self
    }

    /// The subject must not be the empty char `'\0'`. Forces not-null.
    pub fn not_empty(self) -> Self {
        self.enable(CharTest::NotEmpty)
    }

    /// Enables the minimum-value test (inclusive, natural char order),
    /// replacing any previous bound. Forces not-null. A minimum above an
    /// already-set maximum is a construction error.
    pub fn min_value(mut self, min: char) -> Result<Self, ConstructionError> {
        self.bounds.set_min(min)?;
        self.core.enable_not_null();
        Ok(self)
    }

    /// Enables the maximum-value test (inclusive, natural char order),
    /// replacing any previous bound. Forces not-null. A maximum below an
    /// already-set minimum is a construction error.
    pub fn max_value(mut self, max: char) -> Result<Self, ConstructionError> {
        self.bounds.set_max(max)?;
        self.core.enable_not_null();
        Ok(self)
    }

    /// The subject must be a digit. Forces not-null.
    pub fn is_digit(self) -> Self {
        self.enable(CharTest::Digit)
    }

    /// The subject must be upper case. Forces not-null; disables the
    /// lowercase test.
    pub fn is_uppercase(self) -> Self {
        self.enable(CharTest::Uppercase)
    }

    /// The subject must be lower case. Forces not-null; disables the
    /// uppercase test.
    pub fn is_lowercase(self) -> Self {
        self.enable(CharTest::Lowercase)
    }

    /// The subject must be whitespace. Forces not-null.
    pub fn is_whitespace(self) -> Self {
        self.enable(CharTest::Whitespace)
    }

    fn enable(mut self, test: CharTest) -> Self {
        self.core.enable_not_null();
        self.class.enable(test);
        self
    }

    /// Runs the enabled tests in fixed order: not-null, equals, not-empty,
    /// min, max, digit, uppercase, lowercase, whitespace. Zero enabled
    /// tests pass vacuously.
    pub fn validate(&self) -> Result<bool, ValidationError> {
        let mut out = Outcome::new(self.core.is_fail_fast());
        self.core.run(&mut out)?;
        self.class.run_not_empty(self.core.value(), &mut out)?;
        self.bounds.run(self.core.value(), &mut out)?;
        self.class.run_classes(self.core.value(), &mut out)?;
        Ok(out.passed())
    }
}

/// Creates a char validator for the given subject.
pub fn character(value: impl IntoSubject<char>) -> CharValidator {
    CharValidator {
        core: Core::new(value.into_subject()),
        bounds: Bounds::new(),
        class: CharRules::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
