//! The shared evaluation protocol: outcome accumulation and the base
//! validator core every typed validator embeds.
//!
//! Each enabled test routes its result through [`Outcome::check`], which
//! applies the one rule of the protocol: with fail-fast off a failing test
//! folds into the accumulated boolean; with fail-fast on the first failing
//! test returns its structured failure and aborts the remaining checks.
//! The evaluation core itself never unwinds.

use std::fmt;

use smallvec::SmallVec;

use crate::error::ValidationError;
use crate::subject::describe;

// ============================================================================
// OUTCOME ACCUMULATOR
// ============================================================================

/// Accumulates per-check results for one `validate()` call.
#[derive(Debug)]
pub(crate) struct Outcome {
    fail_fast: bool,
    passed: bool,
}

impl Outcome {
    pub(crate) fn new(fail_fast: bool) -> Self {
        Self {
            fail_fast,
            passed: true,
        }
    }

    /// Applies one check result.
    ///
    /// The failure is constructed lazily; with fail-fast off no message is
    /// ever built.
    pub(crate) fn check(
        &mut self,
        ok: bool,
        failure: impl FnOnce() -> ValidationError,
    ) -> Result<(), ValidationError> {
        if !ok {
            if self.fail_fast {
                return Err(failure());
            }
            self.passed = false;
        }
        Ok(())
    }

    /// The accumulated result so far.
    pub(crate) fn passed(&self) -> bool {
        self.passed
    }
}

// ============================================================================
// BASE TESTS
// ============================================================================

/// The tests every validator kind supports.
#[derive(Debug, Clone)]
pub(crate) enum BaseTest<T> {
    /// The subject must be present.
    NotNull,
    /// The subject must equal the stored value.
    Equals(T),
}

// ============================================================================
// CORE
// ============================================================================

/// Generic core owned by every typed validator: the subject, the fail-fast
/// toggle, and the base test records.
#[derive(Debug, Clone)]
pub(crate) struct Core<T> {
    value: Option<T>,
    fail_fast: bool,
    tests: SmallVec<[BaseTest<T>; 2]>,
}

impl<T> Core<T> {
    pub(crate) fn new(value: Option<T>) -> Self {
        Self {
            value,
            fail_fast: false,
            tests: SmallVec::new(),
        }
    }

    pub(crate) fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub(crate) fn set_fail_fast(&mut self) {
        self.fail_fast = true;
    }

    pub(crate) fn is_fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Enables the not-null test.
    pub(crate) fn enable_not_null(&mut self) {
        if !self
            .tests
            .iter()
            .any(|test| matches!(test, BaseTest::NotNull))
        {
            self.tests.push(BaseTest::NotNull);
        }
    }

    /// Enables the equality test, replacing any previous expected value.
    /// Forces not-null: equality against an absent subject must fail
    /// deterministically rather than crash.
    pub(crate) fn enable_equals(&mut self, expected: T) {
        self.enable_not_null();
        match self
            .tests
            .iter_mut()
            .find(|test| matches!(test, BaseTest::Equals(_)))
        {
            Some(slot) => *slot = BaseTest::Equals(expected),
            None => self.tests.push(BaseTest::Equals(expected)),
        }
    }

    /// Removes the equality test (the case-insensitive string test
    /// supersedes it).
    pub(crate) fn disable_equals(&mut self) {
        self.tests.retain(|test| !matches!(test, BaseTest::Equals(_)));
    }
}

impl<T: PartialEq + fmt::Debug> Core<T> {
    /// Runs the base tests in fixed order: not-null, then equals.
    pub(crate) fn run(&self, out: &mut Outcome) -> Result<(), ValidationError> {
        if self
            .tests
            .iter()
            .any(|test| matches!(test, BaseTest::NotNull))
        {
            out.check(self.value.is_some(), ValidationError::not_null)?;
        }

        if let Some(BaseTest::Equals(expected)) = self
            .tests
            .iter()
            .find(|test| matches!(test, BaseTest::Equals(_)))
        {
            let ok = self.value.as_ref() == Some(expected);
            out.check(ok, || {
                ValidationError::equals(describe(self.value.as_ref()), format!("{expected:?}"))
            })?;
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
