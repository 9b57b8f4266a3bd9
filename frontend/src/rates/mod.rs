//! Bitcoin price snapshot shown next to the balance.
//!
//! A [`RateSource`] provides the USD and EUR quotes, VND is derived from USD
//! with a configured multiplier, and [`RateFetch`] runs the single
//! cancellable fetch a page makes when it mounts.

mod source;
mod task;

pub use source::{CoindeskSource, RateSource, RateSourceHandle};
pub use task::RateFetch;

use log::error;
use serde::Deserialize;

use crate::error::RateError;
use crate::format::to_fixed;

#[derive(Deserialize)]
struct CurrentPrice {
    bpi: Bpi,
}

#[derive(Deserialize)]
struct Bpi {
    #[serde(rename = "USD")]
    usd: BpiEntry,
    #[serde(rename = "EUR")]
    eur: BpiEntry,
}

#[derive(Deserialize)]
struct BpiEntry {
    rate_float: f64,
}

/// The two quotes read from the price API.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BpiQuote {
    pub usd: f64,
    pub eur: f64,
}

/// Extracts `bpi.USD.rate_float` and `bpi.EUR.rate_float` from a
/// current-price body. Other fields are ignored.
pub fn parse_current_price(body: &str) -> Result<BpiQuote, RateError> {
    let price: CurrentPrice = serde_json::from_str(body)?;
    Ok(BpiQuote {
        usd: price.bpi.usd.rate_float,
        eur: price.bpi.eur.rate_float,
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RateSnapshot {
    pub usd: f64,
    pub eur: f64,
    pub vnd: f64,
}

impl RateSnapshot {
    pub fn from_quote(quote: BpiQuote, vnd_per_usd: f64) -> Self {
        Self {
            usd: quote.usd,
            eur: quote.eur,
            vnd: quote.usd * vnd_per_usd,
        }
    }

    pub fn readout(&self) -> [String; 3] {
        [
            format!("USD: ${}", to_fixed(self.usd, 2)),
            format!("EUR: €{}", to_fixed(self.eur, 2)),
            format!("VND: ₫{}", to_fixed(self.vnd, 0)),
        ]
    }
}

/// Fetches one quote and derives a snapshot. Failures are logged and yield
/// `None`; the caller keeps whatever snapshot it already had.
pub async fn fetch_snapshot(source: &dyn RateSource, vnd_per_usd: f64) -> Option<RateSnapshot> {
    match source.fetch().await {
        Ok(quote) => Some(RateSnapshot::from_quote(quote, vnd_per_usd)),
        Err(err) => {
            error!("Error fetching Bitcoin rates: {}", err);
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::testing::{FailingSource, StaticSource};
    use super::*;

    const SAMPLE_BODY: &str = r#"{"bpi":{"USD":{"rate_float":100},"EUR":{"rate_float":90}}}"#;

    #[test]
    fn parses_usd_and_eur_quotes() {
        let quote = parse_current_price(SAMPLE_BODY).unwrap();
        assert_eq!(quote, BpiQuote { usd: 100.0, eur: 90.0 });
    }

    #[test]
    fn ignores_extra_fields() {
        let body = r#"{
            "time": {"updated": "Mar 1, 2024 10:00:00 UTC"},
            "chartName": "Bitcoin",
            "bpi": {
                "USD": {"code": "USD", "rate": "43,250.1700", "rate_float": 43250.17},
                "GBP": {"code": "GBP", "rate": "34,100.0000", "rate_float": 34100.0},
                "EUR": {"code": "EUR", "rate": "39,870.5500", "rate_float": 39870.55}
            }
        }"#;
        let quote = parse_current_price(body).unwrap();
        assert_eq!(quote.usd, 43250.17);
        assert_eq!(quote.eur, 39870.55);
    }

    #[test]
    fn missing_or_mistyped_fields_fail() {
        assert!(parse_current_price(r#"{"bpi":{"USD":{"rate_float":1}}}"#).is_err());
        assert!(parse_current_price(r#"{"bpi":{"USD":{"rate_float":"1"},"EUR":{"rate_float":1}}}"#).is_err());
        assert!(parse_current_price("<html>busy</html>").is_err());
    }

    #[test]
    fn readout_for_sample_quote() {
        let snapshot = RateSnapshot::from_quote(parse_current_price(SAMPLE_BODY).unwrap(), 25380.0);
        assert_eq!(
            snapshot.readout(),
            ["USD: $100.00", "EUR: €90.00", "VND: ₫2538000"]
        );
    }

    #[test]
    fn default_readout_is_zero() {
        assert_eq!(
            RateSnapshot::default().readout(),
            ["USD: $0.00", "EUR: €0.00", "VND: ₫0"]
        );
    }

    #[test]
    fn vnd_is_usd_times_multiplier() {
        let quote = BpiQuote {
            usd: 43250.17,
            eur: 39870.55,
        };
        let snapshot = RateSnapshot::from_quote(quote, 25380.0);
        assert_eq!(snapshot.vnd, 43250.17 * 25380.0);
        assert_eq!(snapshot.readout()[2], "VND: ₫1097689315");

        let custom = RateSnapshot::from_quote(quote, 2.0);
        assert_eq!(custom.vnd, 86500.34);
    }

    #[test]
    fn fetch_snapshot_derives_from_source() {
        let snapshot = block_on(fetch_snapshot(&StaticSource(SAMPLE_BODY), 25380.0));
        assert_eq!(
            snapshot,
            Some(RateSnapshot {
                usd: 100.0,
                eur: 90.0,
                vnd: 2538000.0,
            })
        );
    }

    #[test]
    fn fetch_snapshot_swallows_failures() {
        assert_eq!(block_on(fetch_snapshot(&FailingSource, 25380.0)), None);
        assert_eq!(block_on(fetch_snapshot(&StaticSource("{}"), 25380.0)), None);
    }
}
