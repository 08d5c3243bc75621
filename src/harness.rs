//! Cross-version verification harness.
//!
//! Drives the load-and-compare protocol: build the canonical target object
//! once, then for each registered historical version load its fixture and
//! check the reconstruction matches. The first failure aborts the run; later
//! versions are not attempted and their status is unknown.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::FixtureCodec;
use crate::error::CompatError;
use crate::naming;
use crate::store::FixtureStore;

/// Capability set a compatibility test must supply.
///
/// Three hooks, not a base class: what to build, which versions to check,
/// and what "equivalent" means for the type under test. Tests that prefer
/// closures over a trait impl can use [`run_compat_checks_with`] instead.
pub trait CompatCase {
    /// Object type whose fixtures are being verified.
    type Target: Serialize + DeserializeOwned;

    /// Build the canonical current-version object.
    ///
    /// Called exactly once per run; the same instance is compared against
    /// every version's reconstruction. Failure is fatal to the run.
    fn target_object(&self) -> anyhow::Result<Self::Target>;

    /// Historical versions to verify, in the order they should run.
    ///
    /// Duplicates are checked again, not deduplicated. An empty list is a
    /// valid but vacuous pass.
    fn versions(&self) -> Vec<String>;

    /// Check semantic equivalence between the canonical object and a
    /// reconstruction. Equivalence, not identity: an `Err` describes the
    /// mismatch and aborts the run.
    fn verify_match(
        &self,
        target: &Self::Target,
        reconstructed: &Self::Target,
    ) -> anyhow::Result<()>;
}

/// Outcome of a successful verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatReport {
    /// Simple name of the verified type.
    pub type_name: String,
    /// Versions verified, in execution order.
    pub versions_checked: Vec<String>,
}

impl CompatReport {
    /// Number of versions verified by the run.
    pub fn versions_count(&self) -> usize {
        self.versions_checked.len()
    }
}

/// Verify every registered version's fixture against the case's target.
///
/// Versions run strictly sequentially in declared order. A load failure or
/// verification mismatch aborts immediately with an error naming the
/// version; versions after it were not attempted and their status is
/// unknown.
pub fn run_compat_checks<C, K>(
    store: &FixtureStore<C>,
    case: &K,
) -> Result<CompatReport, CompatError>
where
    C: FixtureCodec,
    K: CompatCase,
{
    let target = case
        .target_object()
        .map_err(CompatError::TargetConstruction)?;
    run_compat_checks_with(store, &target, case.versions(), |t, r| {
        case.verify_match(t, r)
    })
}

/// Closure form of [`run_compat_checks`].
///
/// Takes the already-built target and a verification closure instead of a
/// [`CompatCase`] impl; the iteration contract is identical.
pub fn run_compat_checks_with<C, T, F>(
    store: &FixtureStore<C>,
    target: &T,
    versions: Vec<String>,
    mut verify: F,
) -> Result<CompatReport, CompatError>
where
    C: FixtureCodec,
    T: Serialize + DeserializeOwned,
    F: FnMut(&T, &T) -> anyhow::Result<()>,
{
    let type_name = naming::simple_name_of::<T>();

    for version in &versions {
        let reconstructed: T = store.load(version)?;
        verify(target, &reconstructed).map_err(|e| CompatError::VerificationMismatch {
            version: version.clone(),
            detail: format!("{:#}", e),
        })?;
        log::debug!("Fixture {}-{} verified", type_name, version);
    }

    log::info!(
        "{}: {} version(s) verified against current shape",
        type_name,
        versions.len()
    );
    Ok(CompatReport {
        type_name: type_name.to_string(),
        versions_checked: versions,
    })
}

/// Generate the fixture artifact for a new version.
///
/// Builds the case's target object and saves it under `version`, replacing
/// any existing artifact of the same name. Offline use only: invoked
/// manually by a maintainer when cutting a release, never from automated
/// verification runs.
pub fn write_fixture<C, K>(
    store: &FixtureStore<C>,
    case: &K,
    version: &str,
) -> Result<PathBuf, CompatError>
where
    C: FixtureCodec,
    K: CompatCase,
{
    let target = case
        .target_object()
        .map_err(CompatError::TargetConstruction)?;
    let path = store.save(version, &target)?;
    log::info!("Generated fixture {}", path.display());
    Ok(path)
}
