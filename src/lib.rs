//! Exchange descriptor fixture regeneration
//!
//! Iterates the built-in exchange catalog, asks each venue for its
//! describe() tree, normalizes the tree's native textual representation
//! (Python repr syntax, as printed by the upstream trading library) into
//! JSON, and writes one pretty-printed artifact per venue and variant to
//! `config/<id>_rest.json` / `config/<id>_ws.json`.
//!
//! One bad venue never halts the batch: every failure is logged as
//! `<id> error: <message>` and the run continues.

pub mod descriptor;
pub mod dump;
pub mod error;
pub mod exchanges;
pub mod normalizer;
pub mod registry;

// Re-export main types for easy access
pub use descriptor::Descriptor;
pub use dump::{dump_all, dump_one, DumpConfig, DumpSummary, Variant};
pub use error::{DumpError, DumpResult};
pub use exchanges::Exchange;
pub use normalizer::{normalize, normalize_to_string, NormalizeError};
pub use registry::ExchangeRegistry;
