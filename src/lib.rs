//! # sercompat: Serialization Compatibility Kit
//!
//! Verifies that objects produced by the current codebase can still be
//! reconstructed from binary snapshots ("fixtures") written by earlier
//! released versions, guarding against silent data-compatibility
//! regressions across releases.
//!
//! ## Architecture Overview
//!
//! ```text
//! CompatCase (3 hooks)          FixtureStore
//!   target_object()  ──once──▶  target: T
//!   versions()       ──each──▶  load("<Simple>-<version>.ser")
//!   verify_match()   ◀──────── reconstructed: T
//! ```
//!
//! A run builds the canonical target once, then for every registered
//! version loads the fixture and checks the reconstruction is equivalent.
//! The first failure aborts the run. Fixtures are generated offline with
//! [`write_fixture`] when a version is cut and never regenerated by
//! automated runs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sercompat::{run_compat_checks, CompatCase, FixtureStore};
//!
//! struct TriggerCompat;
//!
//! impl CompatCase for TriggerCompat {
//!     type Target = Trigger;
//!
//!     fn target_object(&self) -> anyhow::Result<Trigger> {
//!         Ok(Trigger::builder().cron("0 0 3 * * ?").build())
//!     }
//!
//!     fn versions(&self) -> Vec<String> {
//!         vec!["1.0".into(), "1.1".into(), "2.0".into()]
//!     }
//!
//!     fn verify_match(&self, target: &Trigger, reconstructed: &Trigger)
//!         -> anyhow::Result<()>
//!     {
//!         anyhow::ensure!(target == reconstructed, "trigger drifted");
//!         Ok(())
//!     }
//! }
//!
//! #[test]
//! fn trigger_fixtures_still_load() {
//!     let store = FixtureStore::new("tests/fixtures");
//!     run_compat_checks(&store, &TriggerCompat).unwrap();
//! }
//! ```
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: naming is a pure function shared by both store paths
//! 2. **Loud failure**: every error is fatal; nothing is masked or retried
//! 3. **Codec explicit**: fixtures carry whatever bytes the configured codec
//!    produced; there is no implicit runtime serializer
//! 4. **Offline writes**: fixture generation is a manual, reviewed act

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Pluggable byte-level codecs for fixture artifacts
pub mod codec;

/// Fatal error taxonomy for store and harness failures
pub mod error;

/// CompatCase hooks, the verification orchestrator, and offline generation
pub mod harness;

/// The (type, version) -> file name convention
pub mod naming;

/// Fixture artifact storage over an explicit directory
pub mod store;

// Re-export commonly used types at crate root
pub use codec::{BincodeCodec, FixtureCodec, JsonCodec};
pub use error::CompatError;
pub use harness::{
    run_compat_checks, run_compat_checks_with, write_fixture, CompatCase, CompatReport,
};
pub use naming::{
    fixture_file_name, fixture_file_name_for, simple_name_of, simple_type_name,
    FIXTURE_EXTENSION,
};
pub use store::FixtureStore;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
