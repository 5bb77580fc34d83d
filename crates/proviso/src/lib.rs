//! # proviso
//!
//! Fluent precondition and argument validation: wrap a value, chain test
//! selections, evaluate once.
//!
//! ## Quick start
//!
//! ```
//! use proviso::prelude::*;
//!
//! assert!(string("HelloWorld").min_length(8)?.max_length(10)?.validate()?);
//! assert!(number(0).is_zero().validate()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## The protocol
//!
//! Every validator follows the same state machine. A factory function
//! wraps the subject; each chained call enables one test (and forces the
//! not-null test on, since every other test presupposes a present
//! subject); `validate()` runs the enabled tests in a fixed order
//! regardless of chaining order and returns `Ok(true)` when all pass.
//! Zero enabled tests pass vacuously.
//!
//! With [`fail_fast`](StringValidator::fail_fast) enabled, the first
//! failing test returns its [`ValidationError`] instead, aborting the
//! remaining checks. Mis-assembling a validator — conflicting bounds, both
//! restriction lists, a bad pattern or URI — is a [`ConstructionError`]
//! surfaced from the chaining call itself, never deferred to evaluation.
//!
//! ## URI policy
//!
//! ```no_run
//! use proviso::prelude::*;
//!
//! let passed = uri("https://localhost")?
//!     .allow_domain("127.0.0.1")?
//!     .allow_protocols(["https"])?
//!     .allow_ports([443])?
//!     .validate()?;
//! assert!(passed);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The URI validator runs its string-layer tests first, resolves the
//! subject's host, then checks the allow list, allowed protocols, allowed
//! ports, and deny list, in that order. An unconfigured restriction passes
//! unconditionally. Host resolution is the one blocking step in the crate;
//! callers wanting a timeout wrap the call externally.

// Chaining calls return Result<Self, ConstructionError> by design; the
// builders hold the subject and restriction sets inline.
#![allow(clippy::result_large_err)]

mod checks;
mod core;
pub mod error;
pub mod prelude;
mod subject;
pub mod validators;

pub use error::{ConstructionError, ValidationError};
pub use subject::{IntoSubject, Numeric};
pub use validators::{
    ArrayValidator, BooleanValidator, CharValidator, NumberValidator, StringValidator,
    UriValidator, array, boolean, character, number, string, uri,
};
