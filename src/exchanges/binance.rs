//! Binance descriptors

use anyhow::Result;

use super::Exchange;
use crate::descriptor::Descriptor;

pub struct Binance;

impl Exchange for Binance {
    fn id(&self) -> &'static str {
        "binance"
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
        ("id", "binance".into()),
        ("name", "Binance".into()),
        ("countries", Descriptor::seq(["JP".into(), "MT".into()])),
        ("version", "v3".into()),
        ("rateLimit", Descriptor::Int(50)),
        ("certified", true.into()),
        ("pro", true.into()),
        (
            "has",
            Descriptor::map([
                ("spot", true.into()),
                ("margin", true.into()),
                ("swap", true.into()),
                ("future", true.into()),
                ("option", false.into()),
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
                ("cancelAllOrders", true.into()),
                ("fetchOpenOrders", true.into()),
                ("fetchClosedOrders", true.into()),
                ("fetchMyTrades", true.into()),
                ("fetchDepositAddress", true.into()),
                ("fetchDeposits", true.into()),
                ("fetchWithdrawals", true.into()),
                ("withdraw", true.into()),
                ("fetchFundingRate", true.into()),
                ("fetchFundingRateHistory", true.into()),
                ("setLeverage", true.into()),
                ("setMarginMode", true.into()),
                ("ws", true.into()),
            ]),
        ),
        (
            "timeframes",
            Descriptor::map([
                ("1m", "1m".into()),
                ("3m", "3m".into()),
                ("5m", "5m".into()),
                ("15m", "15m".into()),
                ("30m", "30m".into()),
                ("1h", "1h".into()),
                ("2h", "2h".into()),
                ("4h", "4h".into()),
                ("6h", "6h".into()),
                ("8h", "8h".into()),
                ("12h", "12h".into()),
                ("1d", "1d".into()),
                ("3d", "3d".into()),
                ("1w", "1w".into()),
                ("1M", "1M".into()),
            ]),
        ),
        (
            "urls",
            Descriptor::map([
                (
                    "logo",
                    "https://user-images.githubusercontent.com/1294454/29604020-d5483cdc-87ee-11e7-94c7-d1a8d9169293.jpg".into(),
                ),
                (
                    "api",
                    Descriptor::map([
                        ("public", "https://api.binance.com/api/v3".into()),
                        ("private", "https://api.binance.com/api/v3".into()),
                        ("sapi", "https://api.binance.com/sapi/v1".into()),
                        ("fapi", "https://fapi.binance.com/fapi/v1".into()),
                        ("dapi", "https://dapi.binance.com/dapi/v1".into()),
                    ]),
                ),
                ("www", "https://www.binance.com".into()),
                (
                    "doc",
                    Descriptor::seq([
                        "https://binance-docs.github.io/apidocs/spot/en".into(),
                    ]),
                ),
                ("fees", "https://www.binance.com/en/fee/schedule".into()),
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
                            "ping".into(),
                            "time".into(),
                            "exchangeInfo".into(),
                            "depth".into(),
                            "trades".into(),
                            "aggTrades".into(),
                            "klines".into(),
                            "ticker/24hr".into(),
                            "ticker/price".into(),
                            "ticker/bookTicker".into(),
                        ]),
                    )]),
                ),
                (
                    "private",
                    Descriptor::map([
                        (
                            "GET",
                            Descriptor::seq([
                                "account".into(),
                                "myTrades".into(),
                                "openOrders".into(),
                                "allOrders".into(),
                                "order".into(),
                            ]),
                        ),
                        (
                            "POST",
                            Descriptor::seq(["order".into(), "order/test".into()]),
                        ),
                        (
                            "DELETE",
                            Descriptor::seq(["order".into(), "openOrders".into()]),
                        ),
                    ]),
                ),
            ]),
        ),
        (
            "fees",
            Descriptor::map([(
                "trading",
                Descriptor::map([
                    ("tierBased", false.into()),
                    ("percentage", true.into()),
                    ("maker", 0.001.into()),
                    ("taker", 0.001.into()),
                ]),
            )]),
        ),
        ("precisionMode", Descriptor::Int(4)),
        (
            "requiredCredentials",
            Descriptor::map([("apiKey", true.into()), ("secret", true.into())]),
        ),
        (
            "exceptions",
            Descriptor::map([
                ("-1003", Descriptor::class("ccxt.base.errors.RateLimitExceeded")),
                ("-1013", Descriptor::class("ccxt.base.errors.InvalidOrder")),
                ("-1021", Descriptor::class("ccxt.base.errors.InvalidNonce")),
                ("-2010", Descriptor::class("ccxt.base.errors.InsufficientFunds")),
                ("-2011", Descriptor::class("ccxt.base.errors.OrderNotFound")),
            ]),
        ),
        (
            "options",
            Descriptor::map([
                ("adjustForTimeDifference", true.into()),
                ("recvWindow", Descriptor::Int(5000)),
                ("defaultType", "spot".into()),
                (
                    "warnOnFetchOpenOrdersWithoutSymbol",
                    // fetching all open orders costs 40x the weight; users
                    // who can't afford that should pass a symbol
                    true.into(),
                ),
                (
                    "timeDifferenceNote",
                    "we don't sync time by default; set adjustForTimeDifference if the user's clock drifts".into(),
                ),
            ]),
        ),
    ])
}

fn ws_descriptor() -> Descriptor {
    Descriptor::map([
        ("id", "binance".into()),
        ("name", "Binance".into()),
        (
            "has",
            Descriptor::map([
                ("ws", true.into()),
                ("watchTicker", true.into()),
                ("watchTickers", true.into()),
                ("watchTrades", true.into()),
                ("watchOrderBook", true.into()),
                ("watchOHLCV", true.into()),
                ("watchBalance", true.into()),
                ("watchOrders", true.into()),
            ]),
        ),
        (
            "urls",
            Descriptor::map([(
                "api",
                Descriptor::map([
                    ("ws", "wss://stream.binance.com:9443/ws".into()),
                    ("stream", "wss://stream.binance.com:9443/stream".into()),
                ]),
            )]),
        ),
        (
            "options",
            Descriptor::map([
                ("streamLimits", Descriptor::map([("spot", Descriptor::Int(50))])),
                ("watchOrderBookRate", Descriptor::Int(100)),
                ("listenKeyRefreshRate", Descriptor::Int(1200000)),
            ]),
        ),
    ])
}
