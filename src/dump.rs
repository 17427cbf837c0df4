//! Per-identifier dump pipeline and batch driver
//!
//! One identifier at a time: resolve, instantiate, describe, normalize,
//! persist. Failures never cross the per-identifier boundary; the batch
//! logs `<id> error: <message>` and keeps going.

use std::fs;
use std::path::PathBuf;

use tracing::error;

use crate::error::{DumpError, DumpResult};
use crate::normalizer;
use crate::registry::ExchangeRegistry;

/// Which descriptor a dump targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Synchronous request/response capabilities.
    Rest,
    /// Subscription/push capabilities.
    Ws,
}

impl Variant {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Rest => "_rest",
            Self::Ws => "_ws",
        }
    }
}

/// Where artifacts land.
///
/// `config_dir` must pre-exist; there is no creation step. A missing
/// directory surfaces as per-identifier persistence failures.
#[derive(Debug, Clone)]
pub struct DumpConfig {
    /// Directory for the transient raw-text artifact.
    pub scratch_dir: PathBuf,
    /// Directory for the final pretty-printed artifacts.
    pub config_dir: PathBuf,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            scratch_dir: PathBuf::from("."),
            config_dir: PathBuf::from("config"),
        }
    }
}

/// Batch outcome. The process exits 0 either way; the log stream is the
/// only per-identifier report.
#[derive(Debug, Default, Clone)]
pub struct DumpSummary {
    pub written: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

/// Removes the transient file when dropped, so the cleanup also runs on
/// the error paths between write and removal.
struct TransientGuard {
    path: PathBuf,
}

impl Drop for TransientGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Produce zero or one artifact for `id`/`variant`.
///
/// `Ok(false)` means the venue has no descriptor for this variant (no
/// streaming support); that is a skip, not a failure.
pub fn dump_one(
    registry: &ExchangeRegistry,
    config: &DumpConfig,
    id: &str,
    variant: Variant,
) -> DumpResult<bool> {
    let exchange = registry.resolve(id)?;
    let described = match variant {
        Variant::Rest => Some(exchange.describe()),
        Variant::Ws => exchange.describe_ws(),
    };
    let Some(described) = described else {
        return Ok(false);
    };
    let descriptor = described.map_err(|e| DumpError::Introspection(e.to_string()))?;

    let raw = descriptor.repr();
    let value = normalizer::normalize(&raw)?;
    let normalized = serde_json::to_string(&value)?;

    let file_name = format!("{id}{}.json", variant.suffix());
    let transient = config.scratch_dir.join(&file_name);
    fs::write(&transient, &normalized)?;
    let _guard = TransientGuard { path: transient };

    let pretty = serde_json::to_string_pretty(&value)?;
    fs::write(config.config_dir.join(&file_name), pretty)?;
    Ok(true)
}

/// Run the whole batch, strictly sequentially.
pub fn dump_all(registry: &ExchangeRegistry, config: &DumpConfig) -> DumpSummary {
    let mut summary = DumpSummary::default();
    for id in registry.ids() {
        for variant in [Variant::Rest, Variant::Ws] {
            match dump_one(registry, config, id, variant) {
                Ok(true) => summary.written += 1,
                Ok(false) => {}
                Err(e) => {
                    error!("{id} error: {e}");
                    summary.failed += 1;
                    summary.errors.push(format!("{id} error: {e}"));
                }
            }
        }
    }
    summary
}

/// True when no transient artifact for any known identifier is left in
/// `scratch_dir`.
pub fn scratch_is_clean(registry: &ExchangeRegistry, config: &DumpConfig) -> bool {
    registry.ids().all(|id| {
        [Variant::Rest, Variant::Ws].iter().all(|variant| {
            !transient_path(config, id, *variant).exists()
        })
    })
}

fn transient_path(config: &DumpConfig, id: &str, variant: Variant) -> PathBuf {
    config
        .scratch_dir
        .join(format!("{id}{}.json", variant.suffix()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Descriptor;
    use crate::exchanges::Exchange;
    use anyhow::{anyhow, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

    /// Fresh scratch/config directory pair per test.
    fn test_config() -> DumpConfig {
        let seq = DIR_SEQ.fetch_add(1, Ordering::SeqCst);
        let base = std::env::temp_dir().join(format!(
            "descriptor-dump-test-{}-{seq}",
            std::process::id()
        ));
        let config = DumpConfig {
            scratch_dir: base.clone(),
            config_dir: base.join("config"),
        };
        fs::create_dir_all(&config.config_dir).unwrap();
        config
    }

    struct Broken;

    impl Exchange for Broken {
        fn id(&self) -> &'static str {
            "broken"
        }

        fn describe(&self) -> Result<Descriptor> {
            Err(anyhow!("connection refused"))
        }
    }

    /// Embeds an angle-bracket construct the normalizer does not know.
    struct Experimental;

    impl Exchange for Experimental {
        fn id(&self) -> &'static str {
            "experimental"
        }

        fn describe(&self) -> Result<Descriptor> {
            Ok(Descriptor::map([
                ("id", "experimental".into()),
                (
                    "parseTicker",
                    Descriptor::Object("function experimental.parse_ticker at 0x7fd4".into()),
                ),
            ]))
        }
    }

    fn broken_factory() -> Box<dyn Exchange> {
        Box::new(Broken)
    }

    fn experimental_factory() -> Box<dyn Exchange> {
        Box::new(Experimental)
    }

    fn read_config_file(config: &DumpConfig, name: &str) -> String {
        fs::read_to_string(config.config_dir.join(name)).unwrap()
    }

    #[test]
    fn test_full_batch_over_builtin_catalog() {
        let registry = ExchangeRegistry::builtin();
        let config = test_config();
        let summary = dump_all(&registry, &config);
        assert_eq!(summary.failed, 0, "errors: {:?}", summary.errors);
        // 6 REST descriptors, 4 venues with streaming support
        assert_eq!(summary.written, 10);
        assert!(scratch_is_clean(&registry, &config));

        let kraken: serde_json::Value =
            serde_json::from_str(&read_config_file(&config, "kraken_rest.json")).unwrap();
        assert_eq!(kraken["id"], "kraken");
        assert_eq!(kraken["has"]["ws"], true);
        assert_eq!(kraken["has"]["fetchFundingRate"], serde_json::Value::Null);

        let blofin_ws: serde_json::Value =
            serde_json::from_str(&read_config_file(&config, "blofin_ws.json")).unwrap();
        assert_eq!(
            blofin_ws["options"]["ping"],
            "bound method blofin.ping of ccxt.blofin()"
        );
    }

    #[test]
    fn test_pretty_output_uses_two_space_indent() {
        let registry = ExchangeRegistry::builtin();
        let config = test_config();
        dump_one(&registry, &config, "bitstamp", Variant::Rest).unwrap();
        let text = read_config_file(&config, "bitstamp_rest.json");
        assert!(text.starts_with("{\n  \""));
    }

    #[test]
    fn test_unknown_identifier_is_skipped_and_logged() {
        let mut registry = ExchangeRegistry::new();
        registry.register("doesnotexist_placeholder", broken_factory);
        let config = test_config();
        let err = dump_one(&registry, &config, "doesnotexist", Variant::Rest).unwrap_err();
        assert!(matches!(err, DumpError::Resolution(_)));
        assert!(fs::read_dir(&config.config_dir).unwrap().next().is_none());
    }

    #[test]
    fn test_describe_failure_writes_nothing() {
        let mut registry = ExchangeRegistry::new();
        registry.register("broken", broken_factory);
        let config = test_config();
        let summary = dump_all(&registry, &config);
        assert_eq!(summary.written, 0);
        assert_eq!(summary.failed, 1);
        assert_eq!(
            summary.errors[0],
            "broken error: describe failed: connection refused"
        );
        assert!(fs::read_dir(&config.config_dir).unwrap().next().is_none());
        assert!(scratch_is_clean(&registry, &config));
    }

    #[test]
    fn test_unparseable_descriptor_is_dropped_whole() {
        let mut registry = ExchangeRegistry::new();
        registry.register("experimental", experimental_factory);
        let config = test_config();
        let summary = dump_all(&registry, &config);
        assert_eq!(summary.written, 0);
        assert_eq!(summary.failed, 1);
        assert!(summary.errors[0].starts_with("experimental error: normalization failed"));
        // not even a partial artifact
        assert!(fs::read_dir(&config.config_dir).unwrap().next().is_none());
        assert!(scratch_is_clean(&registry, &config));
    }

    #[test]
    fn test_missing_config_dir_fails_but_cleans_transient() {
        let registry = ExchangeRegistry::builtin();
        let mut config = test_config();
        config.config_dir = config.scratch_dir.join("nonexistent");
        let err = dump_one(&registry, &config, "kraken", Variant::Rest).unwrap_err();
        assert!(matches!(err, DumpError::Persistence(_)));
        assert!(scratch_is_clean(&registry, &config));
    }

    #[test]
    fn test_idempotent_artifacts() {
        let registry = ExchangeRegistry::builtin();
        let config = test_config();
        dump_all(&registry, &config);
        let first = read_config_file(&config, "binance_rest.json");
        dump_all(&registry, &config);
        let second = read_config_file(&config, "binance_rest.json");
        assert_eq!(first, second);
    }

    #[test]
    fn test_ws_skip_is_not_a_failure() {
        let registry = ExchangeRegistry::builtin();
        let config = test_config();
        // bitstamp has no streaming descriptor
        let written = dump_one(&registry, &config, "bitstamp", Variant::Ws).unwrap();
        assert!(!written);
        assert!(!config.config_dir.join("bitstamp_ws.json").exists());
    }
}
