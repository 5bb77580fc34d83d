//! Char classification tests: emptiness, digit, case, whitespace.

use smallvec::SmallVec;

use crate::core::Outcome;
use crate::error::ValidationError;
use crate::subject::describe;

/// A char classification test. `'\0'` is the empty char.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharTest {
    NotEmpty,
    Digit,
    Uppercase,
    Lowercase,
    Whitespace,
}

/// The char tests enabled on one validator.
///
/// Uppercase and lowercase are mutually exclusive: enabling one disables
/// the other.
#[derive(Debug, Clone)]
pub(crate) struct CharRules {
    tests: SmallVec<[CharTest; 4]>,
}

impl CharRules {
    pub(crate) fn new() -> Self {
        Self {
            tests: SmallVec::new(),
        }
    }

    pub(crate) fn enable(&mut self, test: CharTest) {
        match test {
            CharTest::Uppercase => self.tests.retain(|t| *t != CharTest::Lowercase),
            CharTest::Lowercase => self.tests.retain(|t| *t != CharTest::Uppercase),
            _ => {}
        }
        if !self.tests.contains(&test) {
            self.tests.push(test);
        }
    }

    /// Runs the not-empty test if enabled. Ordered before the bound tests
    /// in the protocol, so it is split out of [`CharRules::run_classes`].
    pub(crate) fn run_not_empty(
        &self,
        value: Option<&char>,
        out: &mut Outcome,
    ) -> Result<(), ValidationError> {
        if self.tests.contains(&CharTest::NotEmpty) {
            let ok = value.is_some_and(|actual| *actual != '\0');
            out.check(ok, || ValidationError::not_empty(describe(value)))?;
        }
        Ok(())
    }

    /// Runs the classification tests in fixed order: digit, uppercase,
    /// lowercase, whitespace.
    pub(crate) fn run_classes(
        &self,
        value: Option<&char>,
        out: &mut Outcome,
    ) -> Result<(), ValidationError> {
        for test in [
            CharTest::Digit,
            CharTest::Uppercase,
            CharTest::Lowercase,
            CharTest::Whitespace,
        ] {
            if !self.tests.contains(&test) {
                continue;
            }

            let ok = value.is_some_and(|actual| match test {
                CharTest::Digit => actual.is_numeric(),
                CharTest::Uppercase => actual.is_uppercase(),
                CharTest::Lowercase => actual.is_lowercase(),
                CharTest::Whitespace => actual.is_whitespace(),
                CharTest::NotEmpty => unreachable!(),
            });

            out.check(ok, || match test {
                CharTest::Digit => ValidationError::char_class("is_digit", "a digit", describe(value)),
                CharTest::Uppercase => {
                    ValidationError::char_class("is_uppercase", "upper case", describe(value))
                }
                CharTest::Lowercase => {
                    ValidationError::char_class("is_lowercase", "lower case", describe(value))
                }
                CharTest::Whitespace => {
                    ValidationError::char_class("is_whitespace", "a whitespace", describe(value))
                }
                CharTest::NotEmpty => unreachable!(),
            })?;
        }

        Ok(())
    }
}
