//! phoneiso-cli
//! ============
//!
//! Command-line interface for the `phoneiso-core` number classifier.
//!
//! This crate primarily provides a binary (`phoneiso-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! phoneiso-cli --help
//! phoneiso-cli number 14412921234
//! phoneiso-cli network 340 12
//! phoneiso-cli --dataset plan.json.gz stats
//! ```
//!
//! For programmatic access to the lookup tables, use the [`phoneiso-core`]
//! crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
