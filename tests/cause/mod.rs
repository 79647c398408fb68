use std::any::type_name;
use std::collections::HashSet;
use std::sync::Arc;

use faultline::cause::{self, Cause, CauseResolver};
use faultline::error::{BoxError, CauseResolvingError};
use faultline::registry::TypeHierarchy;

#[derive(Debug)]
struct SomeFault {
    detail: &'static str,
}

#[test]
fn test_cause_equality_is_by_key_alone() {
    let first = SomeFault { detail: "a" };
    let second = SomeFault { detail: "b" };

    // Same key, different contexts: still the same cause.
    assert_eq!(Cause::new("TIMEOUT", &first), Cause::new("TIMEOUT", &second));

    // Different keys, identical context: never equal.
    assert_ne!(Cause::new("TIMEOUT", &first), Cause::new("REFUSED", &first));
}

#[test]
fn test_cause_hashing_follows_equality() {
    let fault_a = SomeFault { detail: "a" };
    let fault_b = SomeFault { detail: "b" };

    let mut set = HashSet::new();
    set.insert(Cause::new("TIMEOUT", &fault_a));
    assert!(!set.insert(Cause::new("TIMEOUT", &fault_b)));
    assert!(set.insert(Cause::new("REFUSED", &fault_a)));
}

#[test]
fn test_fixed_cause_resolver_returns_constant_key() {
    let resolver = cause::fixed("PAYMENT_DECLINED");
    let fault = SomeFault { detail: "card expired" };

    let cause = resolver.cause_of(&fault).expect("cause expected");
    assert_eq!(cause.key(), "PAYMENT_DECLINED");
    assert_eq!(cause.context().detail, "card expired");
}

fn detail_key(fault: &SomeFault) -> Result<String, BoxError> {
    Ok(fault.detail.to_uppercase())
}

fn failing_key(_fault: &SomeFault) -> Result<String, BoxError> {
    Err("key computation broke".into())
}

#[test]
fn test_from_fn_cause_resolver_uses_supplied_function() {
    let resolver = cause::from_fn(detail_key);
    let fault = SomeFault { detail: "timeout" };

    let cause = resolver.cause_of(&fault).expect("cause expected");
    assert_eq!(cause.key(), "TIMEOUT");
}

#[test]
fn test_from_fn_cause_resolver_wraps_function_failure() {
    let resolver = cause::from_fn(failing_key);
    let fault = SomeFault { detail: "irrelevant" };

    let error = resolver.cause_of(&fault).unwrap_err();
    assert!(matches!(error, CauseResolvingError::Failed { .. }));
    let source = std::error::Error::source(&error).expect("wrapped source expected");
    assert_eq!(source.to_string(), "key computation broke");
}

#[test]
fn test_by_type_cause_resolver_uses_qualified_type_name() {
    let resolver = cause::by_type(Arc::new(TypeHierarchy::empty()));
    let fault = SomeFault { detail: "x" };

    let cause = resolver.cause_of(&fault).expect("cause expected");
    assert_eq!(cause.key(), type_name::<SomeFault>());
}

#[derive(Debug)]
struct GeneratedFault;
#[derive(Debug)]
struct BaseFault;

#[test]
fn test_by_type_falls_back_to_nearest_named_ancestor() {
    let hierarchy = Arc::new(
        TypeHierarchy::builder()
            .anonymous::<GeneratedFault>()
            .link::<GeneratedFault, BaseFault>()
            .build(),
    );
    let resolver = cause::by_type(hierarchy);

    let cause = resolver.cause_of(&GeneratedFault).expect("cause expected");
    assert_eq!(cause.key(), type_name::<BaseFault>());
}

#[derive(Debug)]
struct UnnamedParent;
#[derive(Debug)]
struct NamedSibling;
#[derive(Debug)]
struct NamedGrandparent;

#[test]
fn test_by_type_prefers_shallower_ancestors_breadth_first() {
    // GeneratedFault -> [UnnamedParent, NamedSibling], UnnamedParent ->
    // NamedGrandparent. The depth-1 NamedSibling must win over the depth-2
    // NamedGrandparent even though UnnamedParent is declared first.
    let hierarchy = Arc::new(
        TypeHierarchy::builder()
            .anonymous::<GeneratedFault>()
            .anonymous::<UnnamedParent>()
            .link::<GeneratedFault, UnnamedParent>()
            .link::<GeneratedFault, NamedSibling>()
            .link::<UnnamedParent, NamedGrandparent>()
            .build(),
    );
    let resolver = cause::by_type(hierarchy);

    let cause = resolver.cause_of(&GeneratedFault).expect("cause expected");
    assert_eq!(cause.key(), type_name::<NamedSibling>());
}

#[test]
fn test_by_type_fails_only_when_whole_chain_is_anonymous() {
    let hierarchy = Arc::new(
        TypeHierarchy::builder()
            .anonymous::<GeneratedFault>()
            .anonymous::<BaseFault>()
            .link::<GeneratedFault, BaseFault>()
            .build(),
    );
    let resolver = cause::by_type(hierarchy);

    let error = resolver.cause_of(&GeneratedFault).unwrap_err();
    assert!(matches!(
        error,
        CauseResolvingError::UnresolvableTypeName { .. }
    ));
}

#[test]
fn test_renamed_type_resolves_to_override() {
    let hierarchy = Arc::new(
        TypeHierarchy::builder()
            .rename::<SomeFault>("com.example.SomeFault")
            .build(),
    );
    let resolver = cause::by_type(hierarchy);
    let fault = SomeFault { detail: "x" };

    let cause = resolver.cause_of(&fault).expect("cause expected");
    assert_eq!(cause.key(), "com.example.SomeFault");
}
