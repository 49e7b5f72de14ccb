//! Option, collection and async bridge integration tests.

#[macro_use]
mod common;
use common::*;

use std::collections::VecDeque;

use futures_lite::future;
use outcomes::{
    Failure, OptionExt, OptionOutcomeExt, Outcome, OutcomeIteratorExt, Success,
    partition_outcomes,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum LookupError {
    Missing(&'static str),
    Invalid(&'static str),
}

fn lookup(key: &'static str) -> Outcome<LookupError, u16> {
    let raw = match key {
        "port" => Some("8080"),
        "timeout" => Some("soon"),
        _ => None,
    };
    raw.to_success_or(LookupError::Missing(key)).and_then(|text| {
        text.parse::<u16>()
            .map_err(|_| LookupError::Invalid(key))
            .into()
    })
}

#[test]
fn option_bridge_feeds_combinator_chains() {
    init_test("option_bridge_feeds_combinator_chains");
    assert_eq!(lookup("port"), Success(8080));
    assert_eq!(lookup("timeout"), Failure(LookupError::Invalid("timeout")));
    let missing = lookup("host");
    assert_with_log!(
        missing == Failure(LookupError::Missing("host")),
        "missing key",
        LookupError::Missing("host"),
        missing
    );
    test_complete!("option_bridge_feeds_combinator_chains");
}

#[test]
fn option_bridge_unit_forms() {
    init_test("option_bridge_unit_forms");
    let cached: Option<u8> = None;
    assert_eq!(cached.to_success(), Failure(()));
    assert_eq!(cached.to_failure(), Success(()));
    assert_eq!(None::<u8>.to_failure_or_else(|| "lazy"), Success("lazy"));
    let mut calls = 0;
    let present = Some(1_u8).to_failure_or_else(|| {
        calls += 1;
        "never"
    });
    assert_with_log!(present == Failure(1) && calls == 0, "default skipped", 0, calls);
    test_complete!("option_bridge_unit_forms");
}

#[test]
fn optional_outcome_transposes_with_defaults() {
    init_test("optional_outcome_transposes_with_defaults");
    let keys = ["port", "host", "timeout"];
    let results: Vec<Outcome<LookupError, u16>> = keys
        .into_iter()
        .map(|key| Some(lookup(key)).transpose_success_or(LookupError::Missing(key)))
        .collect();
    assert_eq!(results[0], Success(8080));
    assert_eq!(results[1], Failure(LookupError::Missing("host")));

    let skipped: Option<Outcome<LookupError, u16>> = None;
    assert_eq!(skipped.clone().transpose_success(), Success(None));
    assert_eq!(skipped.clone().transpose_failure(), Failure(None));
    assert_eq!(skipped.transpose_failure_or(80), Success(80));
    test_complete!("optional_outcome_transposes_with_defaults");
}

#[test]
fn partition_batch_of_lookups() {
    init_test("partition_batch_of_lookups");
    let batch: VecDeque<Outcome<LookupError, u16>> =
        ["port", "host", "port", "timeout"].into_iter().map(lookup).collect();

    let (ports, errors): (VecDeque<u16>, VecDeque<LookupError>) = partition_outcomes(batch.clone());
    assert_eq!(ports, VecDeque::from([8080, 8080]));
    assert_eq!(
        errors,
        VecDeque::from([LookupError::Missing("host"), LookupError::Invalid("timeout")])
    );

    let only_errors: Vec<LookupError> = batch.into_iter().failures().collect();
    assert_eq!(only_errors.len(), 2);
    test_complete!("partition_batch_of_lookups");
}

async fn fetch(port: u16) -> u32 {
    future::yield_now().await;
    u32::from(port) * 2
}

#[test]
fn async_transposition_awaits_the_success_slot() {
    init_test("async_transposition_awaits_the_success_slot");
    let resolved = future::block_on(lookup("port").map(fetch).transpose_async());
    assert_eq!(resolved, Success(16160));

    let skipped = future::block_on(lookup("host").map(fetch).transpose_async());
    assert_eq!(skipped, Failure(LookupError::Missing("host")));
    test_complete!("async_transposition_awaits_the_success_slot");
}

#[test]
fn async_transposition_awaits_the_failure_slot() {
    init_test("async_transposition_awaits_the_failure_slot");
    let describe = |error: LookupError| async move {
        future::yield_now().await;
        format!("{error:?}")
    };
    let resolved = future::block_on(lookup("timeout").map_failure(describe).transpose_async_failure());
    assert_eq!(resolved, Failure("Invalid(\"timeout\")".to_string()));

    let kept = future::block_on(lookup("port").map_failure(describe).transpose_async_failure());
    assert_eq!(kept, Success(8080));
    test_complete!("async_transposition_awaits_the_failure_slot");
}

#[test]
fn async_results_complete_in_underlying_order() {
    init_test("async_results_complete_in_underlying_order");
    let outcomes = future::block_on(async {
        let mut collected = Vec::new();
        for key in ["port", "host", "port"] {
            collected.push(lookup(key).map(fetch).transpose_async().await);
        }
        collected
    });
    let (values, errors): (Vec<u32>, Vec<LookupError>) = outcomes.into_iter().partition_outcomes();
    assert_eq!(values, [16160, 16160]);
    assert_eq!(errors, [LookupError::Missing("host")]);
    test_complete!("async_results_complete_in_underlying_order");
}
