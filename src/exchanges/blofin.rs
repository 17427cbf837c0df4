//! Blofin descriptors
//!
//! The streaming descriptor embeds the connection keepalive as a bound
//! method, one of the two cases that historically only showed up in
//! streaming dumps.

use anyhow::Result;

use super::Exchange;
use crate::descriptor::Descriptor;

pub struct Blofin;

impl Exchange for Blofin {
    fn id(&self) -> &'static str {
        "blofin"
    }

    fn describe(&self) -> Result<Descriptor> {
        Ok(rest_descriptor())
    }

    fn describe_ws(&self) -> Option<Result<Descriptor>> {
        Some(Ok(ws_descriptor()))
    }
}

fn rest_descriptor() -> Descriptor {
    Descriptor::map([
        ("id", "blofin".into()),
        ("name", "Blofin".into()),
        ("countries", Descriptor::seq(["SG".into()])),
        ("version", "v1".into()),
        ("rateLimit", Descriptor::Int(100)),
        ("certified", false.into()),
        ("pro", true.into()),
        (
            "has",
            Descriptor::map([
                ("spot", false.into()),
                ("swap", true.into()),
                ("future", true.into()),
                ("fetchMarkets", true.into()),
                ("fetchCurrencies", true.into()),
                ("fetchTicker", true.into()),
                ("fetchOrderBook", true.into()),
                ("fetchTrades", true.into()),
                ("fetchOHLCV", true.into()),
                ("fetchBalance", true.into()),
                ("createOrder", true.into()),
                ("cancelOrder", true.into()),
                ("cancelAllOrders", true.into()),
                ("fetchOpenOrders", true.into()),
                ("fetchClosedOrders", true.into()),
                ("fetchMyTrades", true.into()),
                ("fetchOrder", true.into()),
                ("editOrder", true.into()),
                ("fetchDepositAddress", true.into()),
                ("fetchDeposits", true.into()),
                ("fetchWithdrawals", true.into()),
                ("withdraw", true.into()),
                ("fetchPositions", true.into()),
                ("setLeverage", true.into()),
                ("setMarginMode", true.into()),
                ("fetchFundingRate", true.into()),
                ("fetchFundingRateHistory", true.into()),
                ("fetchFundingHistory", true.into()),
                ("ws", true.into()),
            ]),
        ),
        (
            "urls",
            Descriptor::map([
                ("logo", "https://blofin.com/logo.png".into()),
                (
                    "api",
                    Descriptor::map([
                        ("public", "https://openapi.blofin.com".into()),
                        ("private", "https://openapi.blofin.com".into()),
                    ]),
                ),
                ("www", "https://blofin.com".into()),
                ("doc", Descriptor::seq(["https://docs.blofin.com".into()])),
            ]),
        ),
        (
            "fees",
            Descriptor::map([(
                "trading",
                Descriptor::map([
                    ("tierBased", true.into()),
                    ("percentage", true.into()),
                    ("maker", 0.0002.into()),
                    ("taker", 0.0006.into()),
                ]),
            )]),
        ),
        (
            "requiredCredentials",
            Descriptor::map([
                ("apiKey", true.into()),
                ("secret", true.into()),
                ("password", true.into()),
            ]),
        ),
        (
            "exceptions",
            Descriptor::map([
                ("152002", Descriptor::class("ccxt.base.errors.InvalidOrder")),
                ("152409", Descriptor::class("ccxt.base.errors.InsufficientFunds")),
                ("429", Descriptor::class("ccxt.base.errors.RateLimitExceeded")),
            ]),
        ),
        (
            "options",
            Descriptor::map([("defaultType", "swap".into())]),
        ),
    ])
}

fn ws_descriptor() -> Descriptor {
    Descriptor::map([
        ("id", "blofin".into()),
        ("name", "Blofin".into()),
        (
            "has",
            Descriptor::map([
                ("ws", true.into()),
                ("watchTicker", true.into()),
                ("watchTrades", true.into()),
                ("watchOrderBook", true.into()),
                ("watchOHLCV", true.into()),
                ("watchOrders", true.into()),
                ("watchPositions", true.into()),
            ]),
        ),
        (
            "urls",
            Descriptor::map([(
                "api",
                Descriptor::map([
                    ("ws", "wss://openapi.blofin.com/ws/public".into()),
                    ("private", "wss://openapi.blofin.com/ws/private".into()),
                ]),
            )]),
        ),
        (
            "options",
            Descriptor::map([
                ("ping", Descriptor::bound_method("blofin.ping", "ccxt.blofin")),
                ("pingInterval", Descriptor::Int(25000)),
                ("watchOrderBookLimit", Descriptor::Int(100)),
            ]),
        ),
    ])
}
