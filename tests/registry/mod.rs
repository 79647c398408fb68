use std::sync::{Arc, Barrier};

use faultline::cause;
use faultline::error::GenerationError;
use faultline::payload::OperationErrorGenerator;
use faultline::registry::{CompositeResponseGenerator, Fault, FaultRegistry, TypeHierarchy};
use faultline::resolver::{code, message};
use faultline::response::{HttpStatus, PayloadResponseGenerator};

/// A family-level generator, written against `dyn Fault` so any descendant
/// in the hierarchy can dispatch to it.
fn family_responder(key: &str, status: HttpStatus) -> PayloadResponseGenerator<dyn Fault> {
    let payload = OperationErrorGenerator::<dyn Fault>::builder()
        .cause(cause::fixed(key))
        .code(code::from_cause_key())
        .message(message::fixed("failure"))
        .build()
        .expect("complete configuration");
    PayloadResponseGenerator::builder()
        .payload(payload)
        .status(status)
        .build()
        .expect("complete configuration")
}

#[derive(Debug)]
struct ServiceFault;
#[derive(Debug)]
struct DatabaseFault;
#[derive(Debug)]
struct ConnectionPoolFault;

fn service_hierarchy() -> Arc<TypeHierarchy> {
    // ConnectionPoolFault and DatabaseFault are both descendants of
    // ServiceFault; only DatabaseFault has a mapping of its own.
    Arc::new(
        TypeHierarchy::builder()
            .link::<DatabaseFault, ServiceFault>()
            .link::<ConnectionPoolFault, ServiceFault>()
            .build(),
    )
}

#[test]
fn test_subtype_mapping_beats_supertype_mapping() {
    let registry = FaultRegistry::builder()
        .hierarchy(service_hierarchy())
        .register_dyn::<ServiceFault>(family_responder("SERVICE", HttpStatus::INTERNAL_SERVER_ERROR))
        .register_dyn::<DatabaseFault>(family_responder("DATABASE", HttpStatus::SERVICE_UNAVAILABLE))
        .build();
    let composite = CompositeResponseGenerator::new(registry);

    let response = composite.response_of(&DatabaseFault).expect("response expected");
    assert_eq!(response.status().code(), 503);
}

#[test]
fn test_unmapped_sibling_falls_back_to_supertype_mapping() {
    let registry = FaultRegistry::builder()
        .hierarchy(service_hierarchy())
        .register_dyn::<ServiceFault>(family_responder("SERVICE", HttpStatus::INTERNAL_SERVER_ERROR))
        .register_dyn::<DatabaseFault>(family_responder("DATABASE", HttpStatus::SERVICE_UNAVAILABLE))
        .build();
    let composite = CompositeResponseGenerator::new(registry);

    // No direct mapping for ConnectionPoolFault: its ancestor answers.
    let response = composite
        .response_of(&ConnectionPoolFault)
        .expect("response expected");
    assert_eq!(response.status().code(), 500);
}

#[derive(Debug)]
struct FirstParent;
#[derive(Debug)]
struct SecondParent;
#[derive(Debug)]
struct TwoParents;

#[test]
fn test_equally_deep_ancestors_tie_break_by_declaration_order() {
    let hierarchy = Arc::new(
        TypeHierarchy::builder()
            .link::<TwoParents, FirstParent>()
            .link::<TwoParents, SecondParent>()
            .build(),
    );
    let registry = FaultRegistry::builder()
        .hierarchy(hierarchy)
        .register_dyn::<FirstParent>(family_responder("FIRST", HttpStatus::BAD_REQUEST))
        .register_dyn::<SecondParent>(family_responder("SECOND", HttpStatus::CONFLICT))
        .build();
    let composite = CompositeResponseGenerator::new(registry);

    let response = composite.response_of(&TwoParents).expect("response expected");
    assert_eq!(response.status().code(), 400);
}

#[derive(Debug)]
struct Unmapped {
    id: u32,
}

#[test]
fn test_empty_registry_returns_no_match() {
    let registry = FaultRegistry::builder().build();
    assert!(registry.search_for(&Unmapped { id: 7 }).is_none());
}

#[test]
fn test_composite_surfaces_misses_with_the_fault_repr() {
    let composite = CompositeResponseGenerator::new(FaultRegistry::builder().build());

    let error = composite.response_of(&Unmapped { id: 7 }).unwrap_err();
    let GenerationError::NoGeneratorFound { fault } = &error else {
        panic!("expected a no-generator failure, got {error}");
    };
    assert!(fault.contains("Unmapped"));
    assert!(fault.contains('7'));
}

#[test]
fn test_concrete_generator_reached_via_hierarchy_reports_mismatch() {
    // ServiceFault's generator is typed for ServiceFault values only, yet
    // the hierarchy routes DatabaseFault values to it.
    let typed = {
        let payload = OperationErrorGenerator::<ServiceFault>::builder()
            .cause(cause::fixed("SERVICE"))
            .code(code::from_cause_key())
            .message(message::fixed("failure"))
            .build()
            .expect("complete configuration");
        PayloadResponseGenerator::builder()
            .payload(payload)
            .status(HttpStatus::INTERNAL_SERVER_ERROR)
            .build()
            .expect("complete configuration")
    };
    let registry = FaultRegistry::builder()
        .hierarchy(service_hierarchy())
        .register::<ServiceFault>(typed)
        .build();
    let composite = CompositeResponseGenerator::new(registry);

    // The exact type still works.
    assert!(composite.response_of(&ServiceFault).is_ok());

    let error = composite.response_of(&DatabaseFault).unwrap_err();
    assert!(matches!(error, GenerationError::TypeMismatch { .. }));
}

#[test]
fn test_lookup_results_are_cached_per_observed_type() {
    let registry = FaultRegistry::builder()
        .hierarchy(service_hierarchy())
        .register_dyn::<ServiceFault>(family_responder("SERVICE", HttpStatus::INTERNAL_SERVER_ERROR))
        .build();

    for _ in 0..10 {
        assert!(registry.search_for(&ConnectionPoolFault).is_some());
    }
    // Misses are cached too.
    for _ in 0..10 {
        assert!(registry.search_for(&Unmapped { id: 1 }).is_none());
    }

    let stats = registry.cache_stats();
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.computed, 2);
}

#[test]
fn test_cache_single_flight_under_concurrent_lookups() {
    const CALLERS: usize = 50;

    let registry = FaultRegistry::builder()
        .hierarchy(service_hierarchy())
        .register_dyn::<ServiceFault>(family_responder("SERVICE", HttpStatus::INTERNAL_SERVER_ERROR))
        .build();
    let registry = Arc::new(registry);
    let barrier = Arc::new(Barrier::new(CALLERS));

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..CALLERS)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                scope.spawn(move || {
                    barrier.wait();
                    registry.search_for(&ConnectionPoolFault)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker panicked"))
            .collect()
    });

    // Every caller sees the identical generator instance.
    let first = results[0].as_ref().expect("generator expected");
    for result in &results {
        let generator = result.as_ref().expect("generator expected");
        assert!(Arc::ptr_eq(first, generator));
    }

    // The hierarchy walk ran exactly once despite 50 concurrent callers.
    let stats = registry.cache_stats();
    assert_eq!(stats.computed, 1);
    assert_eq!(stats.entries, 1);
}
