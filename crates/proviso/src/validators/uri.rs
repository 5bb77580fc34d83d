//! URI/domain policy validator.
//!
//! Layered on [`StringValidator`]: the caller's original URI string is the
//! structural subject, and the string test selectors are re-exposed by
//! delegation. On top of that sit the network-identity restrictions:
//! allow/deny lists of resolved addresses (mutually exclusive modes),
//! allowed protocols, and allowed ports.
//!
//! List matching is by exact resolved-address equality. Distinct host
//! names resolving to the same address are conflated, and a DNS answer
//! change between calls changes the outcome.

use std::collections::BTreeSet;
use std::io;
use std::net::{IpAddr, ToSocketAddrs};

use tracing::{debug, trace};
use url::{Host, Url};

use crate::core::Outcome;
use crate::error::{ConstructionError, ValidationError};
use crate::validators::string::{StringValidator, string};

// ============================================================================
// RESTRICTION POLICY
// ============================================================================

/// The restriction-list mode of one URI validator.
///
/// An unconfigured restriction must not block all traffic, so the absence
/// of a list passes unconditionally; the modes themselves are mutually
/// exclusive per instance.
#[derive(Debug, Clone)]
enum Policy {
    Unrestricted,
    Allow(BTreeSet<IpAddr>),
    Deny(BTreeSet<IpAddr>),
}

// ============================================================================
// URI VALIDATOR
// ============================================================================

/// Validates a URI subject: structural string tests first, then the
/// resolved-address, protocol, and port restrictions.
///
/// # Examples
///
/// ```no_run
/// use proviso::uri;
///
/// let passed = uri("https://localhost:8443")?
///     .allow_ports([443])?
///     .validate()?;
/// assert!(!passed); // explicit port 8443 is not in the allowed set
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct UriValidator {
    text: StringValidator,
    url: Url,
    policy: Policy,
    protocols: BTreeSet<String>,
    ports: BTreeSet<u16>,
}

impl UriValidator {
    // ------------------------------------------------------------------
    // String-layer delegation
    // ------------------------------------------------------------------

    /// Enables the not-null test on the string layer.
    pub fn not_null(mut self) -> Self {
        self.text = self.text.not_null();
        self
    }

    /// Enables the case-sensitive equality test on the string layer.
    pub fn equals(mut self, expected: impl Into<String>) -> Self {
        self.text = self.text.equals(expected);
        self
    }

    /// Enables the case-insensitive equality test on the string layer.
    pub fn equals_no_case(mut self, expected: impl Into<String>) -> Self {
        self.text = self.text.equals_no_case(expected);
        self
    }

    /// The URI's string form must be non-empty.
    pub fn not_empty(mut self) -> Self {
        self.text = self.text.not_empty();
        self
    }

    /// Enables the minimum-length test on the string layer.
    pub fn min_length(mut self, min: usize) -> Result<Self, ConstructionError> {
        self.text = self.text.min_length(min)?;
        Ok(self)
    }

    /// Enables the maximum-length test on the string layer.
    pub fn max_length(mut self, max: usize) -> Result<Self, ConstructionError> {
        self.text = self.text.max_length(max)?;
        Ok(self)
    }

    /// Enables the whole-subject pattern test on the string layer.
    pub fn matches(mut self, pattern: &str) -> Result<Self, ConstructionError> {
        self.text = self.text.matches(pattern)?;
        Ok(self)
    }

    /// Enables fail-fast: a failing `validate()` returns the first
    /// structured failure instead of folding into a `false` result.
    pub fn fail_fast(mut self) -> Self {
        self.text = self.text.fail_fast();
        self
    }

    /// Returns the URI's original string form.
    #[must_use]
    pub fn value(&self) -> Option<&String> {
        self.text.value()
    }

    // ------------------------------------------------------------------
    // Network-identity restrictions
    // ------------------------------------------------------------------

    /// Resolves the entry's host to an address and adds it to the allow
    /// list. The entry may be a full URI or a bare host name; multiple
    /// calls accumulate.
    ///
    /// Fails immediately if deny mode is already active on this instance,
    /// or if the host cannot be resolved.
    pub fn allow_domain(mut self, domain_or_uri: &str) -> Result<Self, ConstructionError> {
        if matches!(self.policy, Policy::Deny(_)) {
            return Err(ConstructionError::ListConflict);
        }
        let address = resolve_entry(domain_or_uri)?;
        match &mut self.policy {
            Policy::Allow(allowed) => {
                allowed.insert(address);
            }
            _ => self.policy = Policy::Allow(BTreeSet::from([address])),
        }
        Ok(self)
    }

    /// Resolves the entry's host to an address and adds it to the deny
    /// list. The entry may be a full URI or a bare host name; multiple
    /// calls accumulate.
    ///
    /// Fails immediately if allow mode is already active on this instance,
    /// or if the host cannot be resolved.
    pub fn deny_domain(mut self, domain_or_uri: &str) -> Result<Self, ConstructionError> {
        if matches!(self.policy, Policy::Allow(_)) {
            return Err(ConstructionError::ListConflict);
        }
        let address = resolve_entry(domain_or_uri)?;
        match &mut self.policy {
            Policy::Deny(denied) => {
                denied.insert(address);
            }
            _ => self.policy = Policy::Deny(BTreeSet::from([address])),
        }
        Ok(self)
    }

    /// Restricts the URI to the given protocols (case-insensitive).
    /// Requires at least one entry; entries are trimmed and lower-cased,
    /// and a blank entry is a construction error. Multiple calls
    /// accumulate.
    pub fn allow_protocols<I>(mut self, protocols: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut any = false;
        for protocol in protocols {
            let trimmed = protocol.as_ref().trim();
            if trimmed.is_empty() {
                return Err(ConstructionError::BlankProtocol);
            }
            self.protocols.insert(trimmed.to_lowercase());
            any = true;
        }
        if !any {
            return Err(ConstructionError::EmptyRestriction("protocols"));
        }
        Ok(self)
    }

    /// Restricts the URI to the given ports. Requires at least one entry;
    /// `u16` makes the TCP range check structural. Multiple calls
    /// accumulate.
    pub fn allow_ports<I>(mut self, ports: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = u16>,
    {
        let mut any = false;
        for port in ports {
            self.ports.insert(port);
            any = true;
        }
        if !any {
            return Err(ConstructionError::EmptyRestriction("ports"));
        }
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------

    /// Runs the enabled tests: the full string layer first, then host
    /// resolution, then allow list, protocols, ports, deny list.
    ///
    /// A structural failure skips the network-identity checks entirely. A
    /// host that cannot be resolved is a validation failure
    /// (`unknown_host`), not an error: it folds into `false` or raises
    /// under fail-fast like any other test.
    pub fn validate(&self) -> Result<bool, ValidationError> {
        let mut out = Outcome::new(self.text.is_fail_fast());

        self.text.run(&mut out)?;
        if !out.passed() {
            return Ok(false);
        }

        let host = self.url.host_str().unwrap_or_default();
        let Some(address) = self.resolve_subject(host) else {
            out.check(false, || ValidationError::unknown_host(host))?;
            return Ok(out.passed());
        };

        if let Policy::Allow(allowed) = &self.policy {
            out.check(allowed.contains(&address), || {
                ValidationError::allow_list(address, allowed)
            })?;
        }

        if !self.protocols.is_empty() {
            let scheme = self.url.scheme();
            out.check(self.protocols.contains(scheme), || {
                ValidationError::allowed_protocols(scheme, &self.protocols)
            })?;
        }

        if !self.ports.is_empty() {
            let port = self.url.port_or_known_default();
            let ok = port.is_some_and(|effective| self.ports.contains(&effective));
            out.check(ok, || ValidationError::allowed_ports(port, &self.ports))?;
        }

        if let Policy::Deny(denied) = &self.policy {
            out.check(!denied.contains(&address), || {
                ValidationError::deny_list(address, denied)
            })?;
        }

        Ok(out.passed())
    }

    fn resolve_subject(&self, host: &str) -> Option<IpAddr> {
        if host.is_empty() {
            return None;
        }
        match resolve_host(host) {
            Ok(address) => Some(address),
            Err(error) => {
                debug!(host, %error, "subject host resolution failed");
                None
            }
        }
    }
}

/// Creates a URI validator for the given subject. The caller's original
/// string stays the structural subject; a string that does not parse as an
/// absolute URI is a construction error.
pub fn uri(input: &str) -> Result<UriValidator, ConstructionError> {
    let url = Url::parse(input)?;
    Ok(UriValidator {
        text: string(input),
        url,
        policy: Policy::Unrestricted,
        protocols: BTreeSet::new(),
        ports: BTreeSet::new(),
    })
}

// ============================================================================
// HOST RESOLUTION
// ============================================================================

/// Resolves an allow/deny entry, which may be a full URI or a bare host
/// name, to its network address.
fn resolve_entry(domain_or_uri: &str) -> Result<IpAddr, ConstructionError> {
    let host = match Url::parse(domain_or_uri) {
        Ok(parsed) => parsed
            .host_str()
            .map_or_else(|| domain_or_uri.to_owned(), str::to_owned),
        Err(_) => domain_or_uri.to_owned(),
    };
    resolve_host(&host).map_err(|source| ConstructionError::UnresolvableDomain {
        domain: domain_or_uri.to_owned(),
        source,
    })
}

/// Resolves a host name to a network address. IP literals short-circuit
/// without a lookup; otherwise the first resolver answer wins.
fn resolve_host(host: &str) -> io::Result<IpAddr> {
    if let Ok(literal) = Host::parse(host) {
        match literal {
            Host::Ipv4(address) => return Ok(IpAddr::V4(address)),
            Host::Ipv6(address) => return Ok(IpAddr::V6(address)),
            Host::Domain(_) => {}
        }
    }

    trace!(host, "resolving host through the system resolver");
    (host, 0)
        .to_socket_addrs()?
        .next()
        .map(|socket| socket.ip())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no addresses for host '{host}'"),
            )
        })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_uri_fails_construction() {
        assert!(matches!(
            uri("not a uri"),
            Err(ConstructionError::MalformedUri(_))
        ));
    }

    #[test]
    fn ip_literals_resolve_without_a_lookup() {
        assert_eq!(
            resolve_host("127.0.0.1").unwrap(),
            "127.0.0.1".parse::<IpAddr>().unwrap()
        );
        assert_eq!(
            resolve_host("[::1]").unwrap(),
            "::1".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn entry_accepts_a_full_uri_or_a_bare_host() {
        let from_uri = resolve_entry("http://127.0.0.1:8080/path").unwrap();
        let from_host = resolve_entry("127.0.0.1").unwrap();
        assert_eq!(from_uri, from_host);
    }

    #[test]
    fn unresolvable_entry_fails_the_chaining_call() {
        let validator = uri("http://127.0.0.1").unwrap();
        let err = validator.allow_domain("my%20bad.domain.example");
        assert!(matches!(
            err,
            Err(ConstructionError::UnresolvableDomain { .. })
        ));
    }

    #[test]
    fn deny_after_allow_conflicts() {
        let err = uri("http://127.0.0.1")
            .unwrap()
            .allow_domain("127.0.0.1")
            .unwrap()
            .deny_domain("127.0.0.2");
        assert!(matches!(err, Err(ConstructionError::ListConflict)));
    }

    #[test]
    fn allow_after_deny_conflicts() {
        let err = uri("http://127.0.0.1")
            .unwrap()
            .deny_domain("127.0.0.1")
            .unwrap()
            .allow_domain("127.0.0.2");
        assert!(matches!(err, Err(ConstructionError::ListConflict)));
    }

    #[test]
    fn blank_protocol_entry_is_rejected() {
        let err = uri("http://127.0.0.1")
            .unwrap()
            .allow_protocols(["https", "  "]);
        assert!(matches!(err, Err(ConstructionError::BlankProtocol)));
    }

    #[test]
    fn empty_restrictions_are_rejected() {
        let err = uri("http://127.0.0.1")
            .unwrap()
            .allow_protocols(Vec::<String>::new());
        assert!(matches!(
            err,
            Err(ConstructionError::EmptyRestriction("protocols"))
        ));

        let err = uri("http://127.0.0.1").unwrap().allow_ports([]);
        assert!(matches!(
            err,
            Err(ConstructionError::EmptyRestriction("ports"))
        ));
    }

    #[test]
    fn protocols_are_trimmed_and_lower_cased() {
        let passed = uri("https://127.0.0.1")
            .unwrap()
            .allow_protocols([" HTTPS "])
            .unwrap()
            .validate()
            .unwrap();
        assert!(passed);
    }

    #[test]
    fn the_original_string_is_the_structural_subject() {
        // url normalizes the serialization; the subject must stay verbatim
        let validator = uri("HTTP://127.0.0.1:80/").unwrap();
        assert_eq!(
            validator.value().map(String::as_str),
            Some("HTTP://127.0.0.1:80/")
        );
    }
}
