//! Sign tests: zero, positive, negative against the kind's zero baseline.

use smallvec::SmallVec;

use crate::core::Outcome;
use crate::error::ValidationError;
use crate::subject::{Numeric, describe};

/// A sign test against [`Numeric::ZERO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SignTest {
    Zero,
    Positive,
    Negative,
}

/// The sign tests enabled on one numeric validator.
#[derive(Debug, Clone)]
pub(crate) struct Signs {
    tests: SmallVec<[SignTest; 3]>,
}

impl Signs {
    pub(crate) fn new() -> Self {
        Self {
            tests: SmallVec::new(),
        }
    }

    pub(crate) fn enable(&mut self, test: SignTest) {
        if !self.tests.contains(&test) {
            self.tests.push(test);
        }
    }

    /// Runs the enabled sign tests in fixed order: zero, positive,
    /// negative. An absent subject fails any enabled test.
    pub(crate) fn run<T: Numeric>(
        &self,
        value: Option<&T>,
        out: &mut Outcome,
    ) -> Result<(), ValidationError> {
        for test in [SignTest::Zero, SignTest::Positive, SignTest::Negative] {
            if !self.tests.contains(&test) {
                continue;
            }

            let ok = value.is_some_and(|actual| match test {
                SignTest::Zero => *actual == T::ZERO,
                SignTest::Positive => *actual > T::ZERO,
                SignTest::Negative => *actual < T::ZERO,
            });

            out.check(ok, || match test {
                SignTest::Zero => ValidationError::zero_value(describe(value)),
                SignTest::Positive => ValidationError::positive_value(describe(value)),
                SignTest::Negative => ValidationError::negative_value(describe(value)),
            })?;
        }

        Ok(())
    }
}
