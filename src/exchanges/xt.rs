//! XT descriptors

use anyhow::Result;

use super::Exchange;
use crate::descriptor::Descriptor;

pub struct Xt;

impl Exchange for Xt {
    fn id(&self) -> &'static str {
        "xt"
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
        ("id", "xt".into()),
        ("name", "XT".into()),
        ("countries", Descriptor::seq(["SC".into()])),
        ("version", "v4".into()),
        ("rateLimit", Descriptor::Int(100)),
        ("certified", false.into()),
        ("pro", true.into()),
        (
            "has",
            Descriptor::map([
                ("spot", true.into()),
                ("margin", true.into()),
                ("swap", true.into()),
                ("future", true.into()),
                ("fetchMarkets", true.into()),
                ("fetchCurrencies", true.into()),
                ("fetchTicker", true.into()),
                ("fetchTickers", true.into()),
                ("fetchOrderBook", true.into()),
                ("fetchOHLCV", true.into()),
                ("fetchTrades", true.into()),
                ("fetchBalance", true.into()),
                ("createOrder", true.into()),
                ("cancelOrder", true.into()),
                ("fetchOpenOrders", true.into()),
                ("fetchClosedOrders", true.into()),
                ("fetchMyTrades", true.into()),
                ("fetchFundingRate", true.into()),
                ("ws", true.into()),
            ]),
        ),
        (
            "urls",
            Descriptor::map([
                ("logo", "https://xt.com/res/images/logo.png".into()),
                (
                    "api",
                    Descriptor::map([
                        ("spot", "https://sapi.xt.com".into()),
                        ("linear", "https://fapi.xt.com".into()),
                        ("inverse", "https://dapi.xt.com".into()),
                    ]),
                ),
                ("www", "https://xt.com".into()),
                ("doc", Descriptor::seq(["https://doc.xt.com".into()])),
            ]),
        ),
        (
            "fees",
            Descriptor::map([(
                "trading",
                Descriptor::map([
                    ("tierBased", true.into()),
                    ("percentage", true.into()),
                    ("maker", 0.002.into()),
                    ("taker", 0.002.into()),
                ]),
            )]),
        ),
        (
            "requiredCredentials",
            Descriptor::map([("apiKey", true.into()), ("secret", true.into())]),
        ),
        (
            "exceptions",
            Descriptor::map([
                ("AUTH_103", Descriptor::class("ccxt.base.errors.AuthenticationError")),
                ("ORDER_002", Descriptor::class("ccxt.base.errors.InsufficientFunds")),
                ("ORDER_004", Descriptor::class("ccxt.base.errors.InvalidOrder")),
            ]),
        ),
        (
            "options",
            Descriptor::map([("defaultType", "spot".into())]),
        ),
    ])
}

fn ws_descriptor() -> Descriptor {
    Descriptor::map([
        ("id", "xt".into()),
        ("name", "XT".into()),
        (
            "has",
            Descriptor::map([
                ("ws", true.into()),
                ("watchTicker", true.into()),
                ("watchTrades", true.into()),
                ("watchOrderBook", true.into()),
                ("watchBalance", true.into()),
            ]),
        ),
        (
            "urls",
            Descriptor::map([(
                "api",
                Descriptor::map([
                    ("spot", "wss://stream.xt.com/public".into()),
                    ("linear", "wss://fstream.xt.com/ws/market".into()),
                ]),
            )]),
        ),
        (
            "options",
            Descriptor::map([
                ("ping", Descriptor::bound_method("xt.ping", "ccxt.xt")),
                ("heartbeat", Descriptor::Int(20000)),
            ]),
        ),
    ])
}
