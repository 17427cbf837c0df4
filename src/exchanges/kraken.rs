//! Kraken descriptors

use anyhow::Result;

use super::Exchange;
use crate::descriptor::Descriptor;

pub struct Kraken;

impl Exchange for Kraken {
    fn id(&self) -> &'static str {
        "kraken"
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
        ("id", "kraken".into()),
        ("name", "Kraken".into()),
        ("countries", Descriptor::seq(["US".into()])),
        ("version", "0".into()),
        ("rateLimit", Descriptor::Int(3000)),
        ("certified", false.into()),
        ("pro", true.into()),
        (
            "has",
            Descriptor::map([
                ("spot", true.into()),
                ("margin", true.into()),
                ("swap", false.into()),
                ("future", false.into()),
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
                ("fetchDepositAddress", true.into()),
                ("fetchDeposits", true.into()),
                ("fetchWithdrawals", true.into()),
                ("fetchFundingRate", Descriptor::Null),
                ("ws", true.into()),
            ]),
        ),
        (
            "timeframes",
            Descriptor::map([
                ("1m", "1".into()),
                ("5m", "5".into()),
                ("15m", "15".into()),
                ("30m", "30".into()),
                ("1h", "60".into()),
                ("4h", "240".into()),
                ("1d", "1440".into()),
                ("1w", "10080".into()),
            ]),
        ),
        (
            "urls",
            Descriptor::map([
                (
                    "logo",
                    "https://user-images.githubusercontent.com/51840849/76173629-fc67fb00-61b1-11ea-84fe-f2de582f58a3.jpg".into(),
                ),
                (
                    "api",
                    Descriptor::map([
                        ("public", "https://api.kraken.com".into()),
                        ("private", "https://api.kraken.com".into()),
                        ("websockets", "wss://ws.kraken.com".into()),
                    ]),
                ),
                ("www", "https://www.kraken.com".into()),
                (
                    "doc",
                    Descriptor::seq([
                        "https://www.kraken.com/features/api".into(),
                        "https://support.kraken.com".into(),
                    ]),
                ),
            ]),
        ),
        (
            "api",
            Descriptor::map([
                (
                    "public",
                    Descriptor::map([(
                        "GET",
                        Descriptor::seq([
                            "0/public/Assets".into(),
                            "0/public/AssetPairs".into(),
                            "0/public/Ticker".into(),
                            "0/public/Depth".into(),
                            "0/public/Trades".into(),
                            "0/public/OHLC".into(),
                            "0/public/Time".into(),
                        ]),
                    )]),
                ),
                (
                    "private",
                    Descriptor::map([(
                        "POST",
                        Descriptor::seq([
                            "0/private/Balance".into(),
                            "0/private/TradeBalance".into(),
                            "0/private/OpenOrders".into(),
                            "0/private/ClosedOrders".into(),
                            "0/private/QueryOrders".into(),
                            "0/private/TradesHistory".into(),
                            "0/private/QueryTrades".into(),
                            "0/private/AddOrder".into(),
                            "0/private/CancelOrder".into(),
                        ]),
                    )]),
                ),
            ]),
        ),
        (
            "fees",
            Descriptor::map([(
                "trading",
                Descriptor::map([
                    ("tierBased", true.into()),
                    ("percentage", true.into()),
                    ("maker", 0.0016.into()),
                    ("taker", 0.0026.into()),
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
                (
                    "EOrder:Order minimum not met",
                    Descriptor::class("ccxt.base.errors.InvalidOrder"),
                ),
                (
                    "EGeneral:Invalid arguments",
                    Descriptor::class("ccxt.base.errors.BadRequest"),
                ),
                (
                    "EAPI:Rate limit exceeded",
                    Descriptor::class("ccxt.base.errors.RateLimitExceeded"),
                ),
                (
                    "EFunding:Unknown withdraw key",
                    Descriptor::class("ccxt.base.errors.InvalidAddress"),
                ),
            ]),
        ),
        (
            "options",
            Descriptor::map([
                ("delistedMarketsById", Descriptor::map::<String, _>([])),
                // exercises the documented quoting edge cases
                (
                    "comment_amount",
                    "Amount's precision follows the AssetPair's lot_decimals".into(),
                ),
                (
                    "comment_volume",
                    "volume must be a string, e.g. '123.456', we don't round it".into(),
                ),
            ]),
        ),
    ])
}

fn ws_descriptor() -> Descriptor {
    Descriptor::map([
        ("id", "kraken".into()),
        ("name", "Kraken".into()),
        (
            "has",
            Descriptor::map([
                ("ws", true.into()),
                ("watchTicker", true.into()),
                ("watchTrades", true.into()),
                ("watchOrderBook", true.into()),
                ("watchOHLCV", true.into()),
                ("watchBalance", false.into()),
            ]),
        ),
        (
            "urls",
            Descriptor::map([(
                "api",
                Descriptor::map([("ws", "wss://ws.kraken.com".into())]),
            )]),
        ),
        (
            "options",
            Descriptor::map([
                ("tradesLimit", Descriptor::Int(1000)),
                ("ordersLimit", Descriptor::Int(1000)),
                ("symbolsByOrderId", Descriptor::map::<String, _>([])),
            ]),
        ),
    ])
}
