//! Bitstamp descriptor (REST only; no streaming support in the catalog)

use anyhow::Result;

use super::Exchange;
use crate::descriptor::Descriptor;

pub struct Bitstamp;

impl Exchange for Bitstamp {
    fn id(&self) -> &'static str {
        "bitstamp"
    }

    fn describe(&self) -> Result<Descriptor> {
        Ok(rest_descriptor())
    }
}

fn rest_descriptor() -> Descriptor {
    Descriptor::map([
        ("id", "bitstamp".into()),
        ("name", "Bitstamp".into()),
        ("countries", Descriptor::seq(["GB".into()])),
        ("version", "v2".into()),
        ("rateLimit", Descriptor::Int(1000)),
        ("certified", false.into()),
        ("pro", false.into()),
        (
            "has",
            Descriptor::map([
                ("spot", true.into()),
                ("margin", false.into()),
                ("swap", false.into()),
                ("future", false.into()),
                ("fetchMarkets", true.into()),
                ("fetchCurrencies", true.into()),
                ("fetchTicker", true.into()),
                ("fetchOrderBook", true.into()),
                ("fetchOHLCV", true.into()),
                ("fetchTrades", true.into()),
                ("fetchBalance", true.into()),
                ("createOrder", true.into()),
                ("cancelOrder", true.into()),
                ("fetchOpenOrders", true.into()),
                ("fetchMyTrades", true.into()),
                ("withdraw", true.into()),
                ("fetchFundingRate", false.into()),
                ("ws", false.into()),
            ]),
        ),
        (
            "timeframes",
            Descriptor::map([
                ("1m", "60".into()),
                ("3m", "180".into()),
                ("5m", "300".into()),
                ("15m", "900".into()),
                ("30m", "1800".into()),
                ("1h", "3600".into()),
                ("2h", "7200".into()),
                ("4h", "14400".into()),
                ("6h", "21600".into()),
                ("12h", "43200".into()),
                ("1d", "86400".into()),
                ("3d", "259200".into()),
            ]),
        ),
        (
            "urls",
            Descriptor::map([
                (
                    "logo",
                    "https://user-images.githubusercontent.com/1294454/27786377-8c8ab57e-5fe9-11e7-8ea4-2b05b6bcceec.jpg".into(),
                ),
                (
                    "api",
                    Descriptor::map([
                        ("public", "https://www.bitstamp.net/api".into()),
                        ("private", "https://www.bitstamp.net/api".into()),
                        ("v1", "https://www.bitstamp.net/api/v1".into()),
                        ("v2", "https://www.bitstamp.net/api/v2".into()),
                    ]),
                ),
                ("www", "https://www.bitstamp.net".into()),
                (
                    "doc",
                    Descriptor::seq([
                        "https://www.bitstamp.net/api".into(),
                        "https://support.bitstamp.net/hc/en-us/articles/360024386139-API-Guide".into(),
                    ]),
                ),
                ("fees", "https://www.bitstamp.net/fee-schedule/".into()),
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
                            "v2/trading-pairs-info".into(),
                            "v2/ticker/{pair}".into(),
                            "v2/order_book/{pair}".into(),
                            "v2/transactions/{pair}".into(),
                            "v2/ohlc/{pair}".into(),
                        ]),
                    )]),
                ),
                (
                    "private",
                    Descriptor::map([(
                        "POST",
                        Descriptor::seq([
                            "v2/balance".into(),
                            "v2/open_orders/all".into(),
                            "v2/order_status".into(),
                            "v2/cancel_order".into(),
                            "v2/buy/{pair}".into(),
                            "v2/sell/{pair}".into(),
                            "v2/user_transactions".into(),
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
                    ("maker", 0.005.into()),
                    ("taker", 0.005.into()),
                ]),
            )]),
        ),
        (
            "requiredCredentials",
            Descriptor::map([
                ("apiKey", true.into()),
                ("secret", true.into()),
                ("uid", true.into()),
            ]),
        ),
        (
            "exceptions",
            Descriptor::map([
                (
                    "Order not found",
                    Descriptor::class("ccxt.base.errors.OrderNotFound"),
                ),
                (
                    "You have only 'available' balance",
                    Descriptor::class("ccxt.base.errors.InsufficientFunds"),
                ),
                (
                    "Can't find a matching order",
                    Descriptor::class("ccxt.base.errors.OrderNotFound"),
                ),
            ]),
        ),
        (
            "options",
            Descriptor::map([("adjustForTimeDifference", true.into())]),
        ),
    ])
}
