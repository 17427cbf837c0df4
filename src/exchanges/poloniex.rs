//! Poloniex descriptor (REST only)

use anyhow::Result;

use super::Exchange;
use crate::descriptor::Descriptor;

pub struct Poloniex;

impl Exchange for Poloniex {
    fn id(&self) -> &'static str {
        "poloniex"
    }

    fn describe(&self) -> Result<Descriptor> {
        Ok(rest_descriptor())
    }
}

fn rest_descriptor() -> Descriptor {
    Descriptor::map([
        ("id", "poloniex".into()),
        ("name", "Poloniex".into()),
        ("countries", Descriptor::seq(["US".into()])),
        ("version", "v1".into()),
        ("rateLimit", Descriptor::Int(1000)),
        ("certified", false.into()),
        ("pro", true.into()),
        (
            "has",
            Descriptor::map([
                ("spot", true.into()),
                ("margin", false.into()),
                ("swap", false.into()),
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
                ("fetchMyTrades", true.into()),
                ("withdraw", true.into()),
                ("ws", false.into()),
            ]),
        ),
        (
            "timeframes",
            Descriptor::map([
                ("1m", "MINUTE_1".into()),
                ("5m", "MINUTE_5".into()),
                ("15m", "MINUTE_15".into()),
                ("30m", "MINUTE_30".into()),
                ("1h", "HOUR_1".into()),
                ("2h", "HOUR_2".into()),
                ("4h", "HOUR_4".into()),
                ("6h", "HOUR_6".into()),
                ("12h", "HOUR_12".into()),
                ("1d", "DAY_1".into()),
            ]),
        ),
        (
            "urls",
            Descriptor::map([
                (
                    "logo",
                    "https://user-images.githubusercontent.com/1294454/27766817-e9456312-5ee6-11e7-9b3c-b628ca5626a5.jpg".into(),
                ),
                (
                    "api",
                    Descriptor::map([
                        ("public", "https://api.poloniex.com".into()),
                        ("private", "https://api.poloniex.com".into()),
                    ]),
                ),
                ("www", "https://poloniex.com".into()),
                (
                    "doc",
                    Descriptor::seq([
                        "https://docs.poloniex.com".into(),
                        "https://docs.poloniex.com/#http-api".into(),
                        "https://docs.poloniex.com/#websocket-api".into(),
                    ]),
                ),
                ("fees", "https://poloniex.com/fees".into()),
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
                            "markets".into(),
                            "markets/{symbol}".into(),
                            "markets/{symbol}/price".into(),
                            "markets/{symbol}/orderBook".into(),
                            "markets/{symbol}/candles".into(),
                            "markets/{symbol}/trades".into(),
                            "currencies".into(),
                            "timestamp".into(),
                        ]),
                    )]),
                ),
                (
                    "private",
                    Descriptor::map([
                        (
                            "GET",
                            Descriptor::seq([
                                "accounts/balances".into(),
                                "orders".into(),
                                "orders/{id}".into(),
                                "trades".into(),
                            ]),
                        ),
                        ("POST", Descriptor::seq(["orders".into()])),
                        (
                            "DELETE",
                            Descriptor::seq(["orders/{id}".into(), "orders".into()]),
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
                    ("tierBased", true.into()),
                    ("percentage", true.into()),
                    ("maker", 0.0009.into()),
                    ("taker", 0.0009.into()),
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
                    "Invalid order number, or you are not the person who placed the order.",
                    Descriptor::class("ccxt.base.errors.OrderNotFound"),
                ),
                (
                    "Permission denied",
                    Descriptor::class("ccxt.base.errors.PermissionDenied"),
                ),
                (
                    "Total must be at least 0.0001.",
                    Descriptor::class("ccxt.base.errors.InvalidOrder"),
                ),
            ]),
        ),
        (
            "options",
            Descriptor::map([
                ("createMarketBuyOrderRequiresPrice", true.into()),
                // legacy market ids were lowercase quote_base, e.g. 'usdt_btc'
                ("legacyMarketIdStyle", "quote_base, e.g. 'usdt_btc'".into()),
                (
                    "accountsByType",
                    Descriptor::map([("spot", "spot".into()), ("future", "futures".into())]),
                ),
            ]),
        ),
    ])
}
