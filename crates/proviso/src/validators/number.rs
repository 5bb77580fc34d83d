//! Numeric validator: value bounds and sign tests, generic over the
//! primitive numeric kinds.
//!
//! One generic builder replaces a per-kind validator family. The
//! [`Numeric`] bound resolves the comparison semantics per concrete kind
//! at compile time; the zero/positive/negative tests compare against the
//! kind's zero baseline.

use crate::checks::bounds::Bounds;
use crate::checks::sign::{SignTest, Signs};
use crate::core::{Core, Outcome};
use crate::error::{ConstructionError, ValidationError};
use crate::subject::{IntoSubject, Numeric};

/// Validates a numeric subject.
///
/// # Examples
///
/// ```
/// use proviso::number;
///
/// let in_range = number(7_i32)
///     .min_value(5)?
///     .max_value(10)?
///     .validate()?;
/// assert!(in_range);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct NumberValidator<T: Numeric> {
    core: Core<T>,
    bounds: Bounds<T>,
    signs: Signs,
}

impl<T: Numeric> NumberValidator<T> {
    super::base_api!(T);

    /// Enables the equality test, replacing any previous expected value.
    /// Forces not-null.
    pub fn equals(mut self, expected: T) -> Self {
        self.core.enable_equals(expected);
        self
    }

    /// Enables the minimum-value test (inclusive), replacing any previous
    /// bound. Forces not-null. A minimum above an already-set maximum is a
    /// construction error.
    pub fn min_value(mut self, min: T) -> Result<Self, ConstructionError> {
        self.bounds.set_min(min)?;
        self.core.enable_not_null();
        Ok(self)
    }

    /// Enables the maximum-value test (inclusive), replacing any previous
    /// bound. Forces not-null. A maximum below an already-set minimum is a
    /// construction error.
    pub fn max_value(mut self, max: T) -> Result<Self, ConstructionError> {
        self.bounds.set_max(max)?;
        self.core.enable_not_null();
        Ok(self)
    }

    /// The subject must equal the kind's zero baseline. Forces not-null.
    pub fn is_zero(self) -> Self {
        self.enable(SignTest::Zero)
    }

    /// The subject must be strictly above zero. Forces not-null.
    pub fn is_positive(self) -> Self {
        self.enable(SignTest::Positive)
    }

    /// The subject must be strictly below zero. Forces not-null.
    pub fn is_negative(self) -> Self {
        self.enable(SignTest::Negative)
    }

    fn enable(mut self, test: SignTest) -> Self {
        self.core.enable_not_null();
        self.signs.enable(test);
        self
    }

    /// Runs the enabled tests in fixed order: not-null, equals, min, max,
    /// zero, positive, negative. Zero enabled tests pass vacuously.
    pub fn validate(&self) -> Result<bool, ValidationError> {
        let mut out = Outcome::new(self.core.is_fail_fast());
        self.core.run(&mut out)?;
        self.bounds.run(self.core.value(), &mut out)?;
        self.signs.run(self.core.value(), &mut out)?;
        Ok(out.passed())
    }
}

/// Creates a numeric validator for the given subject.
pub fn number<T: Numeric>(value: impl IntoSubject<T>) -> NumberValidator<T> {
    NumberValidator {
        core: Core::new(value.into_subject()),
        bounds: Bounds::new(),
        signs: Signs::new(),
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
        assert!(number(42_i64).validate().unwrap());
        assert!(number::<f64>(None::<f64>).validate().unwrap());
    }

    #[test]
    fn range_boundaries_are_inclusive() {
        for subject in [5, 7, 10] {
            let passed = number(subject)
                .min_value(5)
                .unwrap()
                .max_value(10)
                .unwrap()
                .validate()
                .unwrap();
            assert!(passed, "{subject} should be inside [5, 10]");
        }
        for subject in [4, 11] {
            let passed = number(subject)
                .min_value(5)
                .unwrap()
                .max_value(10)
                .unwrap()
                .validate()
                .unwrap();
            assert!(!passed, "{subject} should be outside [5, 10]");
        }
    }

    #[test]
    fn conflicting_bounds_fail_the_chaining_call() {
        let err = number(7).min_value(9).unwrap().max_value(3);
        assert!(matches!(err, Err(ConstructionError::BoundConflict { .. })));
    }

    #[test]
    fn is_zero() {
        assert!(number(0).is_zero().validate().unwrap());
        assert!(!number(5).is_zero().validate().unwrap());
    }

    #[test]
    fn is_zero_fail_fast_raises() {
        let err = number(5).is_zero().fail_fast().validate().unwrap_err();
        assert_eq!(err.code, "zero_value");
        assert_eq!(err.param("actual"), Some("5"));
    }

    #[test]
    fn signs_on_floats() {
        assert!(number(0.5_f64).is_positive().validate().unwrap());
        assert!(number(-0.5_f64).is_negative().validate().unwrap());
        assert!(!number(0.0_f64).is_positive().validate().unwrap());
    }

    #[test]
    fn bound_tests_force_not_null() {
        let passed = number(None::<i32>).min_value(1).unwrap().validate().unwrap();
        assert!(!passed);
    }

    #[test]
    fn fixed_order_reports_min_before_max() {
        // subject below min and above max is impossible; chain min after
        // max and confirm the min failure is still reported first
        let err = number(1)
            .max_value(10)
            .unwrap()
            .min_value(5)
            .unwrap()
            .fail_fast()
            .validate()
            .unwrap_err();
        assert_eq!(err.code, "min_value");
    }
}
