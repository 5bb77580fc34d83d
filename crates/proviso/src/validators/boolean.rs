//! Boolean validator: true/false tests on top of the base protocol.

use smallvec::SmallVec;

use crate::core::{Core, Outcome};
use crate::error::ValidationError;
use crate::subject::{IntoSubject, describe};

/// A boolean outcome test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoolTest {
    True,
    False,
}

/// Validates a boolean subject.
///
/// # Examples
///
/// ```
/// use proviso::boolean;
///
/// assert!(boolean(true).is_true().validate().unwrap());
/// assert!(!boolean(true).is_false().validate().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct BooleanValidator {
    core: Core<bool>,
    tests: SmallVec<[BoolTest; 2]>,
}

impl BooleanValidator {
    super::base_api!(bool);

    /// Enables the equality test, replacing any previous expected value.
    /// Forces not-null.
    pub fn equals(mut self, expected: bool) -> Self {
        self.core.enable_equals(expected);
        self
    }

    /// The subject must be `true`. Forces not-null.
    pub fn is_true(self) -> Self {
        self.enable(BoolTest::True)
    }

    /// The subject must be `false`. Forces not-null.
    pub fn is_false(self) -> Self {
        self.enable(BoolTest::False)
    }

    fn enable(mut self, test: BoolTest) -> Self {
        self.core.enable_not_null();
        if !self.tests.contains(&test) {
            self.tests.push(test);
        }
        self
    }

    /// Runs the enabled tests in fixed order: not-null, equals, is-true,
    /// is-false. Zero enabled tests pass vacuously.
    pub fn validate(&self) -> Result<bool, ValidationError> {
        let mut out = Outcome::new(self.core.is_fail_fast());
        self.core.run(&mut out)?;

        for test in [BoolTest::True, BoolTest::False] {
            if !self.tests.contains(&test) {
                continue;
            }

            let ok = self.core.value().is_some_and(|actual| match test {
                BoolTest::True => *actual,
                BoolTest::False => !*actual,
            });

            out.check(ok, || match test {
                BoolTest::True => ValidationError::is_true(describe(self.core.value())),
                BoolTest::False => ValidationError::is_false(describe(self.core.value())),
            })?;
        }

        Ok(out.passed())
    }
}

/// Creates a boolean validator for the given subject.
pub fn boolean(value: impl IntoSubject<bool>) -> BooleanValidator {
    BooleanValidator {
        core: Core::new(value.into_subject()),
        tests: SmallVec::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
