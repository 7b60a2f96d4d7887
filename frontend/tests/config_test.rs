//! App-wide settings the screens read from context.

use pretty_assertions::assert_eq;
use std::time::Duration;
use tallybook_core::FallbackPolicy;
use tallybook_frontend::app::app_config;

#[test]
fn defaults_keep_latency_and_success_banner_delay() {
    let config = app_config();
    assert_eq!(config.latency, Duration::from_millis(1500));
    assert_eq!(config.auto_close, Duration::from_millis(1500));
    assert_eq!(config.detail_fallback, FallbackPolicy::FirstRecord);
}
