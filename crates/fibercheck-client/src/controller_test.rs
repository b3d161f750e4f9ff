use fibercheck_core::{CoverageResponse, CoverageStatus};

use super::*;

fn filled_controller() -> SearchController {
    let mut controller = SearchController::new(Locale::It);
    controller.set_field(Field::City, "Asti");
    controller.set_field(Field::PostalCode, "14100");
    controller.set_field(Field::Civic, "10");
    controller
}

fn acme() -> CoverageResult {
    CoverageResult {
        tech: Some("FTTH".to_string()),
        max_down_mbps: Some(1000.0),
        ..CoverageResult::new("Acme", CoverageStatus::Available)
    }
}

fn payload(results: Vec<CoverageResult>) -> Result<LookupOutcome, LookupError> {
    Ok(LookupOutcome::Payload(CoverageResponse {
        query: None,
        results: Some(results),
    }))
}

#[test]
fn starts_idle_with_default_country() {
    let controller = SearchController::new(Locale::It);
    assert_eq!(controller.state(), &SearchState::Idle);
    assert_eq!(controller.query().country, "IT");
    assert!(!controller.can_submit());
}

#[test]
fn begin_submit_is_noop_when_incomplete() {
    let mut controller = SearchController::new(Locale::It);
    controller.set_field(Field::City, "Asti");
    assert!(controller.begin_submit().is_none());
    assert_eq!(controller.state(), &SearchState::Idle);
}

#[test]
fn set_field_by_name_rejects_unknown_field() {
    let mut controller = SearchController::new(Locale::It);
    assert!(controller.set_field_by_name("postalCode", "14100").is_ok());
    assert_eq!(controller.query().postal_code, "14100");
    assert!(matches!(
        controller.set_field_by_name("province", "AT"),
        Err(CoreError::UnknownField(_))
    ));
}

#[test]
fn begin_submit_moves_to_loading_with_query_snapshot() {
    let mut controller = filled_controller();
    let pending = controller.begin_submit().expect("form is complete");
    assert!(controller.is_loading());
    assert_eq!(pending.query.city, "Asti");

    controller.set_field(Field::City, "Alba");
    assert_eq!(pending.query.city, "Asti");
}

#[test]
fn no_content_loads_empty_results_with_submitted_query() {
    let mut controller = filled_controller();
    let pending = controller.begin_submit().unwrap();
    assert!(controller.complete(pending, Ok(LookupOutcome::NoContent)));

    match controller.state() {
        SearchState::Loaded { query, results } => {
            assert!(results.is_empty());
            assert_eq!(query.postal_code, "14100");
        }
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
fn payload_without_query_keeps_submitted_query() {
    let mut controller = filled_controller();
    let pending = controller.begin_submit().unwrap();
    controller.complete(pending, payload(vec![acme()]));

    let SearchState::Loaded { query, results } = controller.state() else {
        panic!("expected Loaded");
    };
    assert_eq!(query.country, "IT");
    assert_eq!(query.city, "Asti");
    assert_eq!(query.postal_code, "14100");
    assert_eq!(query.street, "");
    assert_eq!(query.civic, "10");
    assert_eq!(results.len(), 1);
}

#[test]
fn payload_query_echo_replaces_submitted_query() {
    let mut controller = filled_controller();
    let pending = controller.begin_submit().unwrap();
    let echoed = AddressQuery {
        street: "Corso Alfieri".to_string(),
        ..pending.query.clone()
    };
    controller.complete(
        pending,
        Ok(LookupOutcome::Payload(CoverageResponse {
            query: Some(echoed.clone()),
            results: None,
        })),
    );

    assert_eq!(
        controller.state(),
        &SearchState::Loaded {
            query: echoed,
            results: Vec::new(),
        }
    );
}

#[test]
fn server_error_sets_message_and_keeps_last_loaded() {
    let mut controller = filled_controller();
    let first = controller.begin_submit().unwrap();
    controller.complete(first, payload(vec![acme()]));

    let second = controller.begin_submit().unwrap();
    controller.complete(
        second,
        Err(LookupError::Status {
            status: 500,
            body: String::new(),
        }),
    );

    assert_eq!(controller.state(), &SearchState::Error("HTTP 500".to_string()));
    let (query, results) = controller.last_loaded().expect("previous results retained");
    assert_eq!(query.city, "Asti");
    assert_eq!(results, &[acme()]);
}

#[test]
fn stale_response_is_discarded() {
    let mut controller = filled_controller();
    let older = controller.begin_submit().unwrap();
    controller.set_field(Field::Civic, "12");
    let newer = controller.begin_submit().unwrap();
    assert!(newer.request_id > older.request_id);

    assert!(controller.complete(newer, Ok(LookupOutcome::NoContent)));
    assert!(!controller.complete(older, payload(vec![acme()])));

    let SearchState::Loaded { query, results } = controller.state() else {
        panic!("expected Loaded");
    };
    assert_eq!(query.civic, "12");
    assert!(results.is_empty());
}

#[test]
fn stale_error_does_not_clobber_loading_state() {
    let mut controller = filled_controller();
    let older = controller.begin_submit().unwrap();
    let _newer = controller.begin_submit().unwrap();

    let applied = controller.complete(
        older,
        Err(LookupError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        }),
    );
    assert!(!applied);
    assert!(controller.is_loading());
}

#[test]
fn resubmit_after_error_is_allowed() {
    let mut controller = filled_controller();
    let pending = controller.begin_submit().unwrap();
    controller.complete(
        pending,
        Err(LookupError::Status {
            status: 503,
            body: "maintenance".to_string(),
        }),
    );
    assert_eq!(
        controller.state(),
        &SearchState::Error("maintenance".to_string())
    );

    let retry = controller.begin_submit().expect("retry allowed after error");
    assert!(controller.is_loading());
    controller.complete(retry, payload(vec![acme()]));
    assert!(matches!(controller.state(), SearchState::Loaded { .. }));
}
