//! Array validator: element-wise equality plus length tests over the
//! element count.

use std::fmt;

use crate::checks::length::LengthRules;
use crate::core::{Core, Outcome};
use crate::error::{ConstructionError, ValidationError};
use crate::subject::{IntoSubject, describe};

/// Validates an array subject.
///
/// Equality is element-wise and order-sensitive; arrays of different
/// lengths are never equal.
///
/// # Examples
///
/// ```
/// use proviso::array;
///
/// assert!(array(["a", "b"]).equals(["a", "b"]).validate().unwrap());
/// assert!(!array(["a", "b"]).equals(["b", "a"]).validate().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ArrayValidator<T> {
    core: Core<Vec<T>>,
    length: LengthRules,
}

impl<T: PartialEq + fmt::Debug> ArrayValidator<T> {
    super::base_api!(Vec<T>);

    /// Enables the element-wise equality test, replacing any previous
    /// expected value. Forces not-null.
    pub fn equals(mut self, expected: impl Into<Vec<T>>) -> Self {
        self.core.enable_equals(expected.into());
        self
    }

    /// The subject must contain at least one element. Forces not-null.
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

    /// Runs the enabled tests in fixed order: not-null, equals, not-empty,
    /// min-length, max-length. Zero enabled tests pass vacuously.
    pub fn validate(&self) -> Result<bool, ValidationError> {
        let mut out = Outcome::new(self.core.is_fail_fast());
        self.core.run(&mut out)?;
        let length = self.core.value().map(Vec::len);
        self.length
            .run(length, || describe(self.core.value()), &mut out)?;
        Ok(out.passed())
    }
}

/// Creates an array validator for the given subject.
pub fn array<T>(value: impl IntoSubject<Vec<T>>) -> ArrayValidator<T> {
    ArrayValidator {
        core: Core::new(value.into_subject()),
        length: LengthRules::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
