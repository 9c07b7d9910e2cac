//! Integration Tests für den Parameter Fetcher

mod common;

use common::MockSource;
use embassy_futures::block_on;
use flash_core::{
    Adjustment, BODY_CAPACITY, FetchError, Fetched, Fetcher, ParseError, PeriodLimits,
    PeriodUpdate, TransportError,
};

fn fetcher() -> (Fetcher<MockSource>, MockSource) {
    let source = MockSource::new();
    (Fetcher::new(source.clone(), PeriodLimits::DEFAULT), source)
}

#[test]
fn test_new_value_is_reported_as_change() {
    let (mut fetcher, source) = fetcher();
    source.push_ok(r#"{"delay": 1200}"#);

    let fetched = block_on(fetcher.fetch(500)).unwrap();

    assert_eq!(
        fetched,
        Fetched {
            raw: 1200,
            period: 1200,
            adjustment: Adjustment::None,
            update: PeriodUpdate::Changed { from: 500, to: 1200 },
        }
    );
}

#[test]
fn test_same_value_is_unchanged() {
    let (mut fetcher, source) = fetcher();
    source.push_ok(r#"{"delay":750}"#);

    let fetched = block_on(fetcher.fetch(750)).unwrap();

    assert_eq!(fetched.update, PeriodUpdate::Unchanged(750));
}

#[test]
fn test_zero_is_default_and_unchanged_at_default() {
    let (mut fetcher, source) = fetcher();
    source.push_ok(r#"{"delay":0}"#);

    let fetched = block_on(fetcher.fetch(500)).unwrap();

    assert_eq!(fetched.period, 500);
    assert_eq!(fetched.adjustment, Adjustment::Defaulted);
    assert_eq!(fetched.update, PeriodUpdate::Unchanged(500));
}

#[test]
fn test_zero_is_change_back_to_default() {
    let (mut fetcher, source) = fetcher();
    source.push_ok(r#"{"delay":0}"#);

    let fetched = block_on(fetcher.fetch(1200)).unwrap();

    assert_eq!(fetched.update, PeriodUpdate::Changed { from: 1200, to: 500 });
}

#[test]
fn test_missing_field_behaves_like_zero() {
    let (mut fetcher, source) = fetcher();
    source.push_ok(r#"{"min":50,"max":2000}"#);

    let fetched = block_on(fetcher.fetch(800)).unwrap();

    assert_eq!(fetched.raw, 0);
    assert_eq!(fetched.adjustment, Adjustment::Defaulted);
    assert_eq!(fetched.update, PeriodUpdate::Changed { from: 800, to: 500 });
}

#[test]
fn test_out_of_range_is_clamped_and_applied() {
    let (mut fetcher, source) = fetcher();
    source.push_ok(r#"{"delay":5000}"#);

    let fetched = block_on(fetcher.fetch(500)).unwrap();

    assert_eq!(fetched.period, 2000);
    assert_eq!(fetched.adjustment, Adjustment::Clamped { raw: 5000 });
    assert_eq!(fetched.update, PeriodUpdate::Changed { from: 500, to: 2000 });
}

#[test]
fn test_below_minimum_is_clamped() {
    let (mut fetcher, source) = fetcher();
    source.push_ok(r#"{"delay":-20}"#);

    let fetched = block_on(fetcher.fetch(500)).unwrap();

    assert_eq!(fetched.period, 50);
    assert_eq!(fetched.adjustment, Adjustment::Clamped { raw: -20 });
}

#[test]
fn test_whole_float_is_applied() {
    let (mut fetcher, source) = fetcher();
    source.push_ok(r#"{"delay":1200.0}"#);

    let fetched = block_on(fetcher.fetch(500)).unwrap();

    assert_eq!(fetched.raw, 1200);
    assert_eq!(fetched.period, 1200);
    assert_eq!(fetched.adjustment, Adjustment::None);
    assert_eq!(fetched.update, PeriodUpdate::Changed { from: 500, to: 1200 });
}

#[test]
fn test_fraction_is_truncated_then_clamped() {
    let (mut fetcher, source) = fetcher();
    source.push_ok(r#"{"delay":12.5}"#);

    let fetched = block_on(fetcher.fetch(500)).unwrap();

    assert_eq!(fetched.period, 50);
    assert_eq!(fetched.adjustment, Adjustment::Clamped { raw: 12 });
}

#[test]
fn test_unrepresentable_number_falls_back_to_default() {
    let (mut fetcher, source) = fetcher();
    source.push_ok(r#"{"delay":99999999999999999999}"#);

    let fetched = block_on(fetcher.fetch(900)).unwrap();

    assert_eq!(fetched.adjustment, Adjustment::Defaulted);
    assert_eq!(fetched.update, PeriodUpdate::Changed { from: 900, to: 500 });
}

#[test]
fn test_fetcher_uses_configured_limits() {
    let limits = PeriodLimits {
        min: 100,
        max: 300,
        default: 200,
    };
    let source = MockSource::new();
    let mut fetcher = Fetcher::new(source.clone(), limits);
    source.push_ok(r#"{"delay":1200}"#);

    assert_eq!(fetcher.limits(), &limits);
    assert_eq!(block_on(fetcher.fetch(200)).unwrap().period, 300);
}

#[test]
fn test_non_200_is_status_error() {
    let (mut fetcher, source) = fetcher();
    source.push(Ok((503, r#"{"error":"Internal server error"}"#)));

    assert_eq!(block_on(fetcher.fetch(500)), Err(FetchError::Status(503)));
}

#[test]
fn test_transport_error_is_passed_through() {
    let (mut fetcher, source) = fetcher();
    source.push(Err(TransportError::Timeout));

    assert_eq!(
        block_on(fetcher.fetch(500)),
        Err(FetchError::Transport(TransportError::Timeout))
    );
}

#[test]
fn test_unparseable_body_is_parse_error() {
    let (mut fetcher, source) = fetcher();
    source.push_ok("<html>gateway timeout</html>");

    assert!(matches!(
        block_on(fetcher.fetch(500)),
        Err(FetchError::Parse(_))
    ));
}

#[test]
fn test_empty_body_is_parse_error() {
    let (mut fetcher, source) = fetcher();
    source.push_ok("");

    assert_eq!(
        block_on(fetcher.fetch(500)),
        Err(FetchError::Parse(ParseError::Empty))
    );
}

#[test]
fn test_oversized_body_is_rejected_by_source() {
    let (mut fetcher, source) = fetcher();
    let padding = " ".repeat(BODY_CAPACITY);
    let body: &'static str = Box::leak(format!(r#"{{"delay":700}}{}"#, padding).into_boxed_str());
    source.push_ok(body);

    assert_eq!(
        block_on(fetcher.fetch(500)),
        Err(FetchError::Transport(TransportError::BodyTooLarge))
    );
}

#[test]
fn test_one_request_per_fetch() {
    let (mut fetcher, source) = fetcher();

    block_on(fetcher.fetch(500)).unwrap();
    block_on(fetcher.fetch(500)).unwrap();

    assert_eq!(source.calls(), 2);
}
