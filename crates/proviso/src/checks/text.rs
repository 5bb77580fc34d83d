//! String-only tests: case-insensitive equality and whole-subject
//! pattern matching.

use std::mem;

use regex::Regex;
use smallvec::SmallVec;

use crate::core::Outcome;
use crate::error::{ConstructionError, ValidationError};

/// A string classification test.
#[derive(Debug, Clone)]
pub(crate) enum TextTest {
    EqualsNoCase(String),
    Matches {
        /// The pattern as the caller wrote it, for failure messages.
        pattern: String,
        /// The compiled pattern, anchored to the whole subject.
        regex: Regex,
    },
}

/// The string tests enabled on one validator.
#[derive(Debug, Clone)]
pub(crate) struct TextRules {
    tests: SmallVec<[TextTest; 2]>,
}

impl TextRules {
    pub(crate) fn new() -> Self {
        Self {
            tests: SmallVec::new(),
        }
    }

    fn upsert(&mut self, test: TextTest) {
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

    pub(crate) fn set_equals_no_case(&mut self, expected: String) {
        self.upsert(TextTest::EqualsNoCase(expected));
    }

    /// Removes the case-insensitive equality test (a later case-sensitive
    /// `equals` supersedes it).
    pub(crate) fn clear_equals_no_case(&mut self) {
        self.tests
            .retain(|test| !matches!(test, TextTest::EqualsNoCase(_)));
    }

    /// Enables the pattern test. The pattern is compiled up front and
    /// anchored so a partial substring match is not a pass.
    pub(crate) fn set_pattern(&mut self, pattern: &str) -> Result<(), ConstructionError> {
        let regex = Regex::new(&format!(r"\A(?:{pattern})\z"))?;
        self.upsert(TextTest::Matches {
            pattern: pattern.to_owned(),
            regex,
        });
        Ok(())
    }

    /// Runs the enabled tests in fixed order: equals-no-case, then
    /// pattern match. An absent subject fails any enabled test.
    pub(crate) fn run(
        &self,
        value: Option<&str>,
        out: &mut Outcome,
    ) -> Result<(), ValidationError> {
        let rendered = || value.map_or_else(|| "None".to_owned(), |actual| format!("{actual:?}"));

        if let Some(TextTest::EqualsNoCase(expected)) = self
            .tests
            .iter()
            .find(|test| matches!(test, TextTest::EqualsNoCase(_)))
        {
            let ok = value.is_some_and(|actual| actual.to_lowercase() == expected.to_lowercase());
            out.check(ok, || {
                ValidationError::equals_no_case(rendered(), format!("{expected:?}"))
            })?;
        }

        if let Some(TextTest::Matches { pattern, regex }) = self
            .tests
            .iter()
            .find(|test| matches!(test, TextTest::Matches { .. }))
        {
            let ok = value.is_some_and(|actual| regex.is_match(actual));
            out.check(ok, || ValidationError::pattern_match(rendered(), pattern))?;
        }

        Ok(())
    }
}
