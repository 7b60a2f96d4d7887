use std::env;
use std::time::Duration;

use anyhow::{bail, Context};

use crate::detail::FallbackPolicy;
use crate::form::DEFAULT_AUTO_CLOSE;
use crate::models::Currency;

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Simulated delay before every store mutation.
    pub latency: Duration,
    /// How long a success banner stays up before the form closes.
    pub auto_close: Duration,
    pub detail_fallback: FallbackPolicy,
    pub currency: Currency,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            latency: DEFAULT_LATENCY,
            auto_close: DEFAULT_AUTO_CLOSE,
            detail_fallback: FallbackPolicy::default(),
            currency: Currency::default(),
        }
    }
}

impl Config {
    /// Reads `TALLYBOOK_*` variables; unset ones keep their defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Config::default();
        let latency = match lookup("TALLYBOOK_LATENCY_MS") {
            Some(v) => millis(&v).context("TALLYBOOK_LATENCY_MS")?,
            None => defaults.latency,
        };
        let auto_close = match lookup("TALLYBOOK_AUTO_CLOSE_MS") {
            Some(v) => millis(&v).context("TALLYBOOK_AUTO_CLOSE_MS")?,
            None => defaults.auto_close,
        };
        let detail_fallback = match lookup("TALLYBOOK_DETAIL_FALLBACK") {
            Some(v) => match FallbackPolicy::parse(&v) {
                Some(p) => p,
                None => bail!("TALLYBOOK_DETAIL_FALLBACK: expected 'first' or 'not_found', got '{}'", v),
            },
            None => defaults.detail_fallback,
        };
        let currency = match lookup("TALLYBOOK_CURRENCY") {
            Some(v) => match Currency::parse(&v) {
                Some(c) => c,
                None => bail!("TALLYBOOK_CURRENCY: unknown currency '{}'", v),
            },
            None => defaults.currency,
        };
        Ok(Config {
            latency,
            auto_close,
            detail_fallback,
            currency,
        })
    }

    /// No latency and no auto-close delay.
    pub fn for_tests() -> Self {
        Config {
            latency: Duration::ZERO,
            auto_close: Duration::ZERO,
            ..Config::default()
        }
    }
}

fn millis(value: &str) -> anyhow::Result<Duration> {
    let ms: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("expected milliseconds, got '{}'", value))?;
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_values_use_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.latency, Duration::from_millis(1500));
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("TALLYBOOK_LATENCY_MS", "0"),
            ("TALLYBOOK_AUTO_CLOSE_MS", "250"),
            ("TALLYBOOK_DETAIL_FALLBACK", "not_found"),
            ("TALLYBOOK_CURRENCY", "eur"),
        ]))
        .unwrap();
        assert_eq!(config.latency, Duration::ZERO);
        assert_eq!(config.auto_close, Duration::from_millis(250));
        assert_eq!(config.detail_fallback, FallbackPolicy::NotFound);
        assert_eq!(config.currency, Currency::EUR);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = Config::from_lookup(lookup(&[("TALLYBOOK_LATENCY_MS", "soon")])).unwrap_err();
        assert!(format!("{:#}", err).contains("TALLYBOOK_LATENCY_MS"));
        assert!(Config::from_lookup(lookup(&[("TALLYBOOK_DETAIL_FALLBACK", "last")])).is_err());
        assert!(Config::from_lookup(lookup(&[("TALLYBOOK_CURRENCY", "XYZ")])).is_err());
    }
}
