//! URI policy evaluation: allow/deny lists, protocols, ports, and the
//! ordering between structural and network-identity checks.
//!
//! No test reaches the network: subjects and list entries use `localhost`
//! and IP-literal hosts only.

use pretty_assertions::assert_eq;
use proviso::prelude::*;

// ============================================================================
// ALLOW LIST
// ============================================================================

#[test]
fn no_restriction_passes_unconditionally() {
    assert!(uri("http://127.0.0.1").unwrap().validate().unwrap());
}

#[test]
fn allow_list_passes_on_a_member() {
    let passed = uri("http://127.0.0.1")
        .unwrap()
        .allow_domain("127.0.0.1")
        .unwrap()
        .validate()
        .unwrap();
    assert!(passed);
}

#[test]
fn allow_list_fails_on_a_non_member() {
    let passed = uri("http://127.0.0.1")
        .unwrap()
        .allow_domain("127.0.0.2")
        .unwrap()
        .validate()
        .unwrap();
    assert!(!passed);
}

#[test]
fn allow_entries_accumulate() {
    let passed = uri("http://127.0.0.1")
        .unwrap()
        .allow_domain("127.0.0.2")
        .unwrap()
        .allow_domain("127.0.0.1")
        .unwrap()
        .validate()
        .unwrap();
    assert!(passed);
}

#[test]
fn allow_list_matches_by_resolved_address() {
    // the entry and the subject spell the host differently; both resolve
    // to the same address through the same resolver path
    let passed = uri("http://localhost")
        .unwrap()
        .allow_domain("http://localhost:9999/ignored")
        .unwrap()
        .validate()
        .unwrap();
    assert!(passed);
}

// ============================================================================
// DENY LIST
// ============================================================================

#[test]
fn deny_list_fails_on_a_member() {
    let passed = uri("http://127.0.0.1")
        .unwrap()
        .deny_domain("127.0.0.1")
        .unwrap()
        .validate()
        .unwrap();
    assert!(!passed);
}

#[test]
fn deny_list_passes_on_a_non_member() {
    let passed = uri("http://127.0.0.1")
        .unwrap()
        .deny_domain("127.0.0.2")
        .unwrap()
        .validate()
        .unwrap();
    assert!(passed);
}

#[test]
fn the_two_list_modes_conflict_in_both_orders() {
    assert!(matches!(
        uri("http://127.0.0.1")
            .unwrap()
            .allow_domain("127.0.0.1")
            .unwrap()
            .deny_domain("127.0.0.2"),
        Err(ConstructionError::ListConflict)
    ));
    assert!(matches!(
        uri("http://127.0.0.1")
            .unwrap()
            .deny_domain("127.0.0.1")
            .unwrap()
            .allow_domain("127.0.0.2"),
        Err(ConstructionError::ListConflict)
    ));
}

// ============================================================================
// PROTOCOLS
// ============================================================================

#[test]
fn scheme_outside_the_allowed_protocols_fails() {
    let passed = uri("http://localhost")
        .unwrap()
        .allow_protocols(["https"])
        .unwrap()
        .validate()
        .unwrap();
    assert!(!passed);
}

#[test]
fn scheme_matching_is_case_insensitive() {
    // the subject scheme is upper case in the original string; url
    // lower-cases it, and the entry is normalized at the chaining call
    let passed = uri("HTTPS://127.0.0.1")
        .unwrap()
        .allow_protocols(["HTTPS"])
        .unwrap()
        .validate()
        .unwrap();
    assert!(passed);
}

// ============================================================================
// PORTS
// ============================================================================

#[test]
fn explicit_port_outside_the_allowed_ports_fails() {
    let passed = uri("https://localhost:8443")
        .unwrap()
        .allow_ports([443])
        .unwrap()
        .validate()
        .unwrap();
    assert!(!passed);
}

#[test]
fn an_unspecified_port_resolves_to_the_scheme_default() {
    let passed = uri("https://127.0.0.1")
        .unwrap()
        .allow_ports([443])
        .unwrap()
        .validate()
        .unwrap();
    assert!(passed);

    let passed = uri("http://127.0.0.1")
        .unwrap()
        .allow_ports([80])
        .unwrap()
        .validate()
        .unwrap();
    assert!(passed);
}

#[test]
fn a_scheme_with_no_known_default_fails_an_enabled_port_restriction() {
    let err = uri("foo://127.0.0.1")
        .unwrap()
        .allow_ports([80])
        .unwrap()
        .fail_fast()
        .validate()
        .unwrap_err();
    assert_eq!(err.code, "allowed_ports");
    assert_eq!(err.param("port"), Some("unknown"));
}

#[test]
fn port_entries_accumulate() {
    let passed = uri("https://127.0.0.1:8443")
        .unwrap()
        .allow_ports([443])
        .unwrap()
        .allow_ports([8443])
        .unwrap()
        .validate()
        .unwrap();
    assert!(passed);
}

// ============================================================================
// RESOLUTION FAILURES
// ============================================================================

#[test]
fn an_unknown_subject_host_is_a_validation_failure_not_a_crash() {
    let validator = uri("http://no-such-host.invalid").unwrap();
    assert!(!validator.validate().unwrap());
}

#[test]
fn an_unknown_subject_host_raises_under_fail_fast() {
    let err = uri("http://no-such-host.invalid")
        .unwrap()
        .fail_fast()
        .validate()
        .unwrap_err();
    assert_eq!(err.code, "unknown_host");
    assert_eq!(err.param("host"), Some("no-such-host.invalid"));
}

#[test]
fn a_hostless_uri_cannot_resolve() {
    let validator = uri("mailto:user@example.com").unwrap();
    assert!(!validator.validate().unwrap());
}

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn a_structural_failure_skips_the_network_identity_checks() {
    // the deny list would also fail, but the string layer fails first and
    // short-circuits the rest
    let err = uri("http://127.0.0.1")
        .unwrap()
        .max_length(5)
        .unwrap()
        .deny_domain("127.0.0.1")
        .unwrap()
        .fail_fast()
        .validate()
        .unwrap_err();
    assert_eq!(err.code, "max_length");
}

#[test]
fn the_allow_list_is_checked_before_the_protocols() {
    let err = uri("http://127.0.0.1")
        .unwrap()
        .allow_domain("127.0.0.2")
        .unwrap()
        .allow_protocols(["https"])
        .unwrap()
        .fail_fast()
        .validate()
        .unwrap_err();
    assert_eq!(err.code, "allow_list");
}

#[test]
fn the_deny_list_is_checked_after_the_protocols() {
    let err = uri("http://127.0.0.1")
        .unwrap()
        .deny_domain("127.0.0.1")
        .unwrap()
        .allow_protocols(["https"])
        .unwrap()
        .fail_fast()
        .validate()
        .unwrap_err();
    assert_eq!(err.code, "allowed_protocols");
}

#[test]
fn structural_tests_apply_to_the_original_string_form() {
    let passed = uri("http://127.0.0.1")
        .unwrap()
        .matches("http://[0-9.]+")
        .unwrap()
        .validate()
        .unwrap();
    assert!(passed);
}
