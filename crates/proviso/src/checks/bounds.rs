//! Value bound tests: min and max against the kind's natural order.

use std::fmt;
use std::mem;

use smallvec::SmallVec;

use crate::core::Outcome;
use crate::error::{ConstructionError, ValidationError};
use crate::subject::describe;

/// A value bound test.
#[derive(Debug, Clone, Copy)]
pub(crate) enum BoundTest<T> {
    Min(T),
    Max(T),
}

/// The value bound tests enabled on one validator.
///
/// Bound consistency is checked at the moment each bound is set: a min
/// above an already-set max (or vice versa) is a construction error, never
/// deferred to evaluation.
#[derive(Debug, Clone)]
pub(crate) struct Bounds<T> {
    tests: SmallVec<[BoundTest<T>; 2]>,
}

impl<T: PartialOrd + Copy + fmt::Debug> Bounds<T> {
    pub(crate) fn new() -> Self {
        Self {
            tests: SmallVec::new(),
        }
    }

    fn min(&self) -> Option<T> {
        self.tests.iter().find_map(|test| match test {
            BoundTest::Min(bound) => Some(*bound),
            BoundTest::Max(_) => None,
        })
    }

    fn max(&self) -> Option<T> {
        self.tests.iter().find_map(|test| match test {
            BoundTest::Max(bound) => Some(*bound),
            BoundTest::Min(_) => None,
        })
    }

    fn upsert(&mut self, test: BoundTest<T>) {
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

    /// Enables the min test, replacing any previous bound.
    pub(crate) fn set_min(&mut self, min: T) -> Result<(), ConstructionError> {
        if let Some(max) = self.max() {
            if min > max {
                return Err(ConstructionError::BoundConflict {
                    min: format!("{min:?}"),
                    max: format!("{max:?}"),
                });
            }
        }
        self.upsert(BoundTest::Min(min));
        Ok(())
    }

    /// Enables the max test, replacing any previous bound.
    pub(crate) fn set_max(&mut self, max: T) -> Result<(), ConstructionError> {
        if let Some(min) = self.min() {
            if min > max {
                return Err(ConstructionError::BoundConflict {
                    min: format!("{min:?}"),
                    max: format!("{max:?}"),
                });
            }
        }
        self.upsert(BoundTest::Max(max));
        Ok(())
    }

    /// Runs the enabled bound tests: min, then max. An absent subject
    /// fails any enabled bound.
    pub(crate) fn run(
        &self,
        value: Option<&T>,
        out: &mut Outcome,
    ) -> Result<(), ValidationError> {
        if let Some(min) = self.min() {
            let ok = value.is_some_and(|actual| *actual >= min);
            out.check(ok, || {
                ValidationError::min_value(describe(value), format!("{min:?}"))
            })?;
        }

        if let Some(max) = self.max() {
            let ok = value.is_some_and(|actual| *actual <= max);
            out.check(ok, || {
                ValidationError::max_value(describe(value), format!("{max:?}"))
            })?;
        }

        Ok(())
    }
}
