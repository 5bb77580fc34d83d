//! Length and emptiness tests, shared by strings and arrays.
//!
//! The caller supplies the measured length (Unicode scalar values for
//! strings, element count for arrays); this module only compares.

use std::mem;

use smallvec::SmallVec;

use crate::core::Outcome;
use crate::error::{ConstructionError, ValidationError};

/// A length or emptiness test.
#[derive(Debug, Clone, Copy)]
pub(crate) enum LengthTest {
    NotEmpty,
    Min(usize),
    Max(usize),
}

/// The length tests enabled on one validator.
///
/// As with value bounds, min/max consistency is checked at the moment each
/// bound is set.
#[derive(Debug, Clone)]
pub(crate) struct LengthRules {
    tests: SmallVec<[LengthTest; 3]>,
}

impl LengthRules {
    pub(crate) fn new() -> Self {
        Self {
            tests: SmallVec::new(),
        }
    }

    fn min(&self) -> Option<usize> {
        self.tests.iter().find_map(|test| match test {
            LengthTest::Min(bound) => Some(*bound),
            _ => None,
        })
    }

    fn max(&self) -> Option<usize> {
        self.tests.iter().find_map(|test| match test {
            LengthTest::Max(bound) => Some(*bound),
            _ => None,
        })
    }

    fn upsert(&mut self, test: LengthTest) {
        let kind = mem::discriminant(&test);
        match self
            .tests
            .iter()
            .position(|existing| mem::discriminant(existing) == kind)
        {
            Some(index) => self.tests[index] = test,
            None => self.tests.push(test),
        }
    }

    pub(crate) fn set_not_empty(&mut self) {
        self.upsert(LengthTest::NotEmpty);
    }

    pub(crate) fn set_min(&mut self, min: usize) -> Result<(), ConstructionError> {
        if let Some(max) = self.max() {
            if min > max {
                return Err(ConstructionError::BoundConflict {
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        self.upsert(LengthTest::Min(min));
        Ok(())
    }

    pub(crate) fn set_max(&mut self, max: usize) -> Result<(), ConstructionError> {
        if let Some(min) = self.min() {
            if min > max {
                return Err(ConstructionError::BoundConflict {
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        self.upsert(LengthTest::Max(max));
        Ok(())
    }

    /// Runs the enabled tests in fixed order: not-empty, min length, max
    /// length. An absent subject (length `None`) fails any enabled test.
    pub(crate) fn run(
        &self,
        length: Option<usize>,
        subject: impl Fn() -> String,
        out: &mut Outcome,
    ) -> Result<(), ValidationError> {
        let rendered_length =
            || length.map_or_else(|| "None".to_owned(), |actual| actual.to_string());

        if self
            .tests
            .iter()
            .any(|test| matches!(test, LengthTest::NotEmpty))
        {
            let ok = length.is_some_and(|actual| actual > 0);
            out.check(ok, || ValidationError::not_empty(subject()))?;
        }

        if let Some(min) = self.min() {
            let ok = length.is_some_and(|actual| actual >= min);
            out.check(ok, || {
                ValidationError::min_length(subject(), rendered_length(), min)
            })?;
        }

        if let Some(max) = self.max() {
            let ok = length.is_some_and(|actual| actual <= max);
            out.check(ok, || {
                ValidationError::max_length(subject(), rendered_length(), max)
            })?;
        }

        Ok(())
    }
}
