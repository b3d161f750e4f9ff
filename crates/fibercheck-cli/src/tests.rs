use clap::Parser;
use fibercheck_core::{results_view, AddressQuery, CoverageResult, CoverageStatus, Locale};

use fibercheck_client::SearchState;

use super::*;
use crate::lookup::render_state;
use crate::output::render_text;

fn asti() -> AddressQuery {
    AddressQuery {
        city: "Asti".to_string(),
        postal_code: "14100".to_string(),
        civic: "10".to_string(),
        ..AddressQuery::default()
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["fibercheck-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_lookup_with_defaults() {
    let cli = Cli::try_parse_from(["fibercheck-cli", "lookup", "--city", "Asti"])
        .expect("expected valid cli args");
    let Some(Commands::Lookup(args)) = cli.command else {
        panic!("expected lookup command");
    };
    assert_eq!(args.country, "IT");
    assert_eq!(args.city, "Asti");
    assert_eq!(args.postal_code, "");
    assert!(args.endpoint.is_none());
    assert!(args.locale.is_none());
    assert!(!args.json);
}

#[test]
fn parses_lookup_with_all_flags() {
    let cli = Cli::try_parse_from([
        "fibercheck-cli",
        "lookup",
        "--city",
        "Asti",
        "--postal-code",
        "14100",
        "--street",
        "Via Roma",
        "--civic",
        "10",
        "--endpoint",
        "http://localhost:4000",
        "--locale",
        "en",
        "--json",
    ])
    .expect("expected valid cli args");
    let Some(Commands::Lookup(args)) = cli.command else {
        panic!("expected lookup command");
    };
    assert_eq!(args.postal_code, "14100");
    assert_eq!(args.street, "Via Roma");
    assert_eq!(args.endpoint.as_deref(), Some("http://localhost:4000"));
    assert_eq!(args.locale, Some(Locale::En));
    assert!(args.json);
}

#[test]
fn rejects_unknown_locale() {
    let result = Cli::try_parse_from(["fibercheck-cli", "lookup", "--locale", "fr"]);
    assert!(result.is_err());
}

#[test]
fn text_output_for_empty_results() {
    let view = results_view(&asti(), &[], Locale::En);
    assert_eq!(
        render_text(&view),
        "No results for the given address\nSearch: 10 14100 Asti\n"
    );
}

#[test]
fn text_output_for_one_card() {
    let result = CoverageResult {
        tech: Some("FTTH".to_string()),
        max_down_mbps: Some(1000.0),
        max_up_mbps: Some(300.0),
        ..CoverageResult::new("Acme Fiber Co", CoverageStatus::Available)
    };
    let view = results_view(&asti(), &[result], Locale::It);
    assert_eq!(
        render_text(&view),
        "Risultati per 10 14100 Asti\n\n[AF] Acme Fiber Co  ✔ Disponibile\n     FTTH  ↓ 1000 Mbps  ↑ 300 Mbps\n"
    );
}

#[test]
fn text_output_for_unknown_status_without_tech() {
    let result = CoverageResult::new("Acme", CoverageStatus::Unrecognized("x".to_string()));
    let view = results_view(&asti(), &[result], Locale::En);
    let text = render_text(&view);
    assert!(text.contains("? Unknown"));
    assert!(text.contains("     n/a\n"));
}

#[test]
fn loaded_state_renders_text_by_default() {
    let state = SearchState::Loaded {
        query: asti(),
        results: Vec::new(),
    };
    let out = render_state(&state, Locale::En, false).expect("loaded state renders");
    assert_eq!(out, "No results for the given address\nSearch: 10 14100 Asti\n");
}

#[test]
fn loaded_state_renders_json_when_requested() {
    let state = SearchState::Loaded {
        query: asti(),
        results: vec![CoverageResult::new("Acme", CoverageStatus::Soon)],
    };
    let out = render_state(&state, Locale::En, true).expect("loaded state renders");
    assert!(out.ends_with('\n'));

    let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(json["query"]["city"], "Asti");
    assert_eq!(json["query"]["postalCode"], "14100");
    assert_eq!(json["results"][0]["provider"], "Acme");
    assert_eq!(json["results"][0]["status"], "soon");
}

#[test]
fn error_state_fails_with_localized_prefix() {
    let state = SearchState::Error("partner lookup unavailable".to_string());
    let err = render_state(&state, Locale::It, false).expect_err("error state fails");
    let message = err.to_string();
    assert!(message.starts_with(Locale::It.error_prefix()));
    assert!(message.ends_with("partner lookup unavailable"));
}

#[test]
fn unfinished_state_is_an_error() {
    assert!(render_state(&SearchState::Loading, Locale::En, false).is_err());
    assert!(render_state(&SearchState::Idle, Locale::En, true).is_err());
}
