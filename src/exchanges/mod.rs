//! Built-in venue catalog
//!
//! Each module builds the describe() tree for one venue: identity,
//! capability flags, endpoint tables, rate limits and fee schedules.
//! Content mirrors what the upstream library reports; the dump pipeline
//! treats the trees as opaque.

pub mod binance;
pub mod bitstamp;
pub mod blofin;
pub mod kraken;
pub mod poloniex;
pub mod xt;

use anyhow::Result;

use crate::descriptor::Descriptor;
use crate::registry::Factory;

/// One supported trading venue.
///
/// `describe` reports the synchronous request/response capabilities;
/// `describe_ws` reports the subscription/push capabilities and returns
/// `None` for venues without streaming support.
pub trait Exchange {
    fn id(&self) -> &'static str;

    fn describe(&self) -> Result<Descriptor>;

    fn describe_ws(&self) -> Option<Result<Descriptor>> {
        None
    }
}

/// The compiled-in catalog the registry is built from.
pub fn catalog() -> Vec<(&'static str, Factory)> {
    vec![
        ("binance", || Box::new(binance::Binance)),
        ("bitstamp", || Box::new(bitstamp::Bitstamp)),
        ("blofin", || Box::new(blofin::Blofin)),
        ("kraken", || Box::new(kraken::Kraken)),
        ("poloniex", || Box::new(poloniex::Poloniex)),
        ("xt", || Box::new(xt::Xt)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;

    /// Every catalog descriptor's repr must normalize back to the same
    /// value the descriptor serializes to directly.
    #[test]
    fn test_catalog_descriptors_round_trip() {
        for (id, factory) in catalog() {
            let exchange = factory();
            let descriptor = exchange.describe().unwrap();
            let parsed = normalize(&descriptor.repr())
                .unwrap_or_else(|e| panic!("{id} rest descriptor: {e}"));
            let direct = serde_json::to_value(&descriptor).unwrap();
            assert_eq!(parsed, direct, "{id} rest descriptor drifted");

            if let Some(ws) = exchange.describe_ws() {
                let descriptor = ws.unwrap();
                let parsed = normalize(&descriptor.repr())
                    .unwrap_or_else(|e| panic!("{id} ws descriptor: {e}"));
                let direct = serde_json::to_value(&descriptor).unwrap();
                assert_eq!(parsed, direct, "{id} ws descriptor drifted");
            }
        }
    }

    #[test]
    fn test_descriptor_ids_match_catalog_ids() {
        for (id, factory) in catalog() {
            let exchange = factory();
            let descriptor = exchange.describe().unwrap();
            match descriptor {
                Descriptor::Map(entries) => {
                    let reported = entries.iter().find(|(k, _)| k == "id");
                    assert_eq!(
                        reported,
                        Some(&("id".to_string(), Descriptor::from(id))),
                        "{id} reports a different id"
                    );
                }
                other => panic!("{id} descriptor is not a map: {other:?}"),
            }
        }
    }
}
