//! Error types for validator construction and evaluation.
//!
//! Two kinds of failure exist and never mix:
//!
//! - [`ConstructionError`] — the validator itself was assembled wrongly
//!   (conflicting bounds, both restriction lists active, malformed URI).
//!   These are returned by the chaining call that caused them, regardless
//!   of the fail-fast toggle.
//! - [`ValidationError`] — the subject failed an enabled test. With
//!   fail-fast off these fold into a `false` result; with fail-fast on the
//!   first one is returned from `validate()`.
//!
//! String fields use `Cow<'static, str>` for zero allocation in the common
//! case of static error codes.

use std::borrow::Cow;
use std::fmt;
use std::net::IpAddr;

use smallvec::SmallVec;

// ============================================================================
// CONSTRUCTION ERROR
// ============================================================================

/// A contract violation in how a validator was assembled.
///
/// Construction errors represent programmer error, not a property of the
/// data under test, so they surface from the chaining call itself and are
/// never folded into the boolean evaluation result.
#[derive(Debug, thiserror::Error)]
pub enum ConstructionError {
    /// A minimum bound was set above an already-set maximum, or vice versa.
    #[error("min bound {min} must not exceed max bound {max}")]
    BoundConflict {
        /// The minimum bound, rendered for display.
        min: String,
        /// The maximum bound, rendered for display.
        max: String,
    },

    /// The allow list and the deny list were enabled on the same validator.
    #[error("only one restriction list can be active at a time, either the allow list or the deny list")]
    ListConflict,

    /// The URI could not be parsed.
    #[error("the URI could not be parsed: {0}")]
    MalformedUri(#[from] url::ParseError),

    /// The pattern handed to a match test could not be compiled.
    #[error("the pattern could not be compiled: {0}")]
    BadPattern(#[from] regex::Error),

    /// A protocol entry was blank after trimming.
    #[error("each protocol entry must be non-blank")]
    BlankProtocol,

    /// A restriction that requires at least one entry received none.
    #[error("the parameter '{0}' must contain at least one entry")]
    EmptyRestriction(&'static str),

    /// An allow-list or deny-list entry could not be resolved to an address.
    #[error("the domain '{domain}' could not be resolved: {source}")]
    UnresolvableDomain {
        /// The entry as handed to the restriction call.
        domain: String,
        /// The resolver error.
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured evaluation failure.
///
/// Carries a stable `code` for programmatic handling, a human-readable
/// `message` embedding the checked value and the compared parameter, and
/// the raw parameters as ordered key/value pairs.
///
/// # Examples
///
/// ```rust,ignore
/// let error = ValidationError::new("min_length", "the value is too short")
///     .with_param("min", "5")
///     .with_param("actual", "3");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error code, e.g. `"min_length"`, `"unknown_host"`.
    pub code: Cow<'static, str>,

    /// Human-readable message. Suitable for surfacing to a human; not a
    /// stable machine-readable format.
    pub message: Cow<'static, str>,

    /// Parameters behind the message, as ordered key/value pairs
    /// (typically 0-3 entries).
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// PER-TEST CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// The subject was null/absent.
    pub fn not_null() -> Self {
        Self::new("not_null", "the value must not be null")
    }

    /// The subject did not equal the expected value.
    pub fn equals(actual: String, expected: String) -> Self {
        Self::new(
            "equals",
            format!("the value {actual} does not equal the expected value {expected}"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual)
    }

    /// The subject did not equal the expected value ignoring case.
    pub fn equals_no_case(actual: String, expected: String) -> Self {
        Self::new(
            "equals_no_case",
            format!("the value {actual} does not equal the expected value {expected} ignoring case"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual)
    }

    /// The subject was empty.
    pub fn not_empty(actual: String) -> Self {
        Self::new("not_empty", format!("the value {actual} must not be empty"))
            .with_param("actual", actual)
    }

    /// The subject's length fell below the minimum.
    pub fn min_length(actual: String, length: String, min: usize) -> Self {
        Self::new(
            "min_length",
            format!("the value {actual} (length {length}) must be at least {min} long"),
        )
        .with_param("min", min.to_string())
        .with_param("length", length)
        .with_param("actual", actual)
    }

    /// The subject's length exceeded the maximum.
    pub fn max_length(actual: String, length: String, max: usize) -> Self {
        Self::new(
            "max_length",
            format!("the value {actual} (length {length}) must be at most {max} long"),
        )
        .with_param("max", max.to_string())
        .with_param("length", length)
        .with_param("actual", actual)
    }

    /// The subject fell below the minimum bound.
    pub fn min_value(actual: String, min: String) -> Self {
        Self::new(
            "min_value",
            format!("the value {actual} must be greater than or equal to the min value {min}"),
        )
        .with_param("min", min)
        .with_param("actual", actual)
    }

    /// The subject exceeded the maximum bound.
    pub fn max_value(actual: String, max: String) -> Self {
        Self::new(
            "max_value",
            format!("the value {actual} must be less than or equal to the max value {max}"),
        )
        .with_param("max", max)
        .with_param("actual", actual)
    }

    /// The subject was not zero.
    pub fn zero_value(actual: String) -> Self {
        Self::new("zero_value", format!("the value {actual} is not zero"))
            .with_param("actual", actual)
    }

    /// The subject was not positive.
    pub fn positive_value(actual: String) -> Self {
        Self::new(
            "positive_value",
            format!("the value {actual} must be positive"),
        )
        .with_param("actual", actual)
    }

    /// The subject was not negative.
    pub fn negative_value(actual: String) -> Self {
        Self::new(
            "negative_value",
            format!("the value {actual} must be negative"),
        )
        .with_param("actual", actual)
    }

    /// The subject did not match the pattern over its whole extent.
    pub fn pattern_match(actual: String, pattern: &str) -> Self {
        Self::new(
            "pattern_match",
            format!("the value {actual} does not match the pattern '{pattern}'"),
        )
        .with_param("pattern", pattern.to_owned())
        .with_param("actual", actual)
    }

    /// The char failed a classification test.
    pub fn char_class(code: &'static str, expectation: &'static str, actual: String) -> Self {
        Self::new(code, format!("the char {actual} is not {expectation}"))
            .with_param("actual", actual)
    }

    /// The subject was not `true`.
    pub fn is_true(actual: String) -> Self {
        Self::new("is_true", format!("the value {actual} must be true")).with_param("actual", actual)
    }

    /// The subject was not `false`.
    pub fn is_false(actual: String) -> Self {
        Self::new("is_false", format!("the value {actual} must be false"))
            .with_param("actual", actual)
    }

    /// The URI's host could not be resolved to an address.
    pub fn unknown_host(host: &str) -> Self {
        Self::new("unknown_host", format!("the host '{host}' is unknown"))
            .with_param("host", host.to_owned())
    }

    /// The resolved address matched no allow-list entry.
    pub fn allow_list(address: IpAddr, allowed: &std::collections::BTreeSet<IpAddr>) -> Self {
        Self::new(
            "allow_list",
            format!("the address {address} does not match the entries in the allow list {allowed:?}"),
        )
        .with_param("address", address.to_string())
        .with_param("allowed", format!("{allowed:?}"))
    }

    /// The resolved address matched a deny-list entry.
    pub fn deny_list(address: IpAddr, denied: &std::collections::BTreeSet<IpAddr>) -> Self {
        Self::new(
            "deny_list",
            format!("the address {address} is present in the deny list {denied:?}"),
        )
        .with_param("address", address.to_string())
        .with_param("denied", format!("{denied:?}"))
    }

    /// The URI's scheme matched no allowed-protocol entry.
    pub fn allowed_protocols(
        scheme: &str,
        allowed: &std::collections::BTreeSet<String>,
    ) -> Self {
        Self::new(
            "allowed_protocols",
            format!("the protocol '{scheme}' does not match the allowed protocols {allowed:?}"),
        )
        .with_param("protocol", scheme.to_owned())
        .with_param("allowed", format!("{allowed:?}"))
    }

    /// The URI's effective port matched no allowed-port entry, or no
    /// effective port could be determined.
    pub fn allowed_ports(port: Option<u16>, allowed: &std::collections::BTreeSet<u16>) -> Self {
        let rendered = port.map_or_else(|| "unknown".to_owned(), |p| p.to_string());
        Self::new(
            "allowed_ports",
            format!("the port '{rendered}' does not match the allowed ports {allowed:?}"),
        )
        .with_param("port", rendered)
        .with_param("allowed", format!("{allowed:?}"))
    }
}

// ============================================================================
// TESTS
// ============================================================================
