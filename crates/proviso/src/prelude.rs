//! Prelude module for convenient imports.
//!
//! A single `use proviso::prelude::*;` brings in the factory functions,
//! the validator types, and the error types.
//!
//! # Examples
//!
//! ```
//! use proviso::prelude::*;
//!
//! assert!(string("abc").not_empty().validate().unwrap());
//! ```

pub use crate::error::{ConstructionError, ValidationError};
pub use crate::subject::{IntoSubject, Numeric};
pub use crate::validators::{
    ArrayValidator, BooleanValidator, CharValidator, NumberValidator, StringValidator,
    UriValidator, array, boolean, character, number, string, uri,
};
