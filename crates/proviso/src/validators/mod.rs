//! Typed validator builders, one per subject kind.
//!
//! Each builder composes the shared [`Core`](crate::core) with the test
//! families its kind supports, exposes chainable selection calls, and runs
//! the enabled tests in the fixed order of the protocol when `validate()`
//! is called. Factory functions live beside their builder type and are
//! re-exported from the crate root.

mod array;
mod boolean;
mod character;
mod number;
mod string;
mod uri;

pub use array::{ArrayValidator, array};
pub use boolean::{BooleanValidator, boolean};
pub use character::{CharValidator, character};
pub use number::{NumberValidator, number};
pub use string::{StringValidator, string};
pub use uri::{UriValidator, uri};

/// Generates the base operations every typed validator exposes: the
/// not-null selector, the fail-fast toggle, and the subject accessor.
macro_rules! base_api {
    ($kind:ty) => {
        /// Enables the not-null test.
        pub fn not_null(mut self) -> Self {
            self.core.enable_not_null();
            self
        }

        /// Enables fail-fast: a failing `validate()` returns the first
        /// structured failure instead of folding into a `false` result.
        pub fn fail_fast(mut self) -> Self {
            self.core.set_fail_fast();
            self
        }

        /// Returns the subject, or `None` for an absent subject.
        #[must_use]
        pub fn value(&self) -> Option<&$kind> {
            self.core.value()
        }
    };
}

pub(crate) use base_api;
