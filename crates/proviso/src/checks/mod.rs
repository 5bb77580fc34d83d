//! Test families shared across validator kinds.
//!
//! Each family is a tagged-union record type plus one evaluation routine,
//! written once and instantiated by whichever typed validators support it.
//! Evaluation always walks a family's tests in the fixed order of the
//! protocol, regardless of the order the caller chained them in.

pub(crate) mod bounds;
pub(crate) mod class;
pub(crate) mod length;
pub(crate) mod sign;
pub(crate) mod text;
