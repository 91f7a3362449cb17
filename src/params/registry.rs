//! Active parameter registry
//!
//! Holds the single active [`ChainParams`] for the process. The network is
//! selected exactly once at startup, before any worker thread exists;
//! every other subsystem then reads the active set as shared read-only
//! state. Reading before selection is a programming error and fails fast:
//! consensus parameters must never silently default.
//!
//! [`ParamsRegistry`] is the explicit, instance-level form; the
//! module-level functions wrap one designated process-wide registry for
//! callers that follow the construct-once lifecycle.

use crate::params::{
    ChainParams, CheckpointData, Network, ParamsError, UnitTestParams,
};
use once_cell::sync::Lazy;
use std::ops::Deref;
use std::sync::{RwLock, RwLockReadGuard};

enum ActiveSet {
    Fixed(ChainParams),
    UnitTest(UnitTestParams),
}

impl ActiveSet {
    fn params(&self) -> &ChainParams {
        match self {
            ActiveSet::Fixed(params) => params,
            ActiveSet::UnitTest(params) => params.deref(),
        }
    }
}

/// Registry of the active chain parameter set
///
/// States: unselected (initial) then selected. `select` is the only
/// writer; it is expected to run once per process, though re-selection
/// overwrites rather than fails so test harnesses can switch networks.
#[derive(Default)]
pub struct ParamsRegistry {
    active: Option<ActiveSet>,
}

impl ParamsRegistry {
    /// Create an unselected registry
    pub const fn new() -> Self {
        ParamsRegistry { active: None }
    }

    /// Build and activate the parameter set for the given network
    ///
    /// A construction failure (genesis or table mismatch) is fatal for
    /// the caller; the registry keeps its previous state.
    pub fn select(&mut self, network: Network) -> Result<(), ParamsError> {
        let active = match network {
            Network::UnitTest => ActiveSet::UnitTest(UnitTestParams::build()?),
            _ => ActiveSet::Fixed(ChainParams::for_network(network)?),
        };
        self.active = Some(active);
        Ok(())
    }

    /// Best-effort selection from a user-supplied network id
    ///
    /// Returns `Ok(false)` and leaves the registry untouched when the id
    /// is unrecognized, so the caller can print guidance instead of
    /// crashing.
    pub fn select_from_id(&mut self, id: &str) -> Result<bool, ParamsError> {
        let Some(network) = Network::from_id(id) else {
            return Ok(false);
        };
        self.select(network)?;
        Ok(true)
    }

    /// The active parameter set
    ///
    /// # Panics
    /// Panics if no network has been selected.
    pub fn params(&self) -> &ChainParams {
        self.active
            .as_ref()
            .map(ActiveSet::params)
            .unwrap_or_else(|| panic!("{}", ParamsError::NoNetworkSelected))
    }

    /// The active parameter set, as a result for callers that can report
    pub fn try_params(&self) -> Result<&ChainParams, ParamsError> {
        self.active
            .as_ref()
            .map(ActiveSet::params)
            .ok_or(ParamsError::NoNetworkSelected)
    }

    /// The active network, if selected
    pub fn network(&self) -> Option<Network> {
        self.active.as_ref().map(|a| a.params().network)
    }

    /// Checkpoint table of the active network
    ///
    /// # Panics
    /// Panics if no network has been selected.
    pub fn checkpoints(&self) -> &CheckpointData {
        &self.params().checkpoints
    }

    /// Mutation interface, available only when the unit-test network is
    /// active
    pub fn modifiable(&mut self) -> Option<&mut UnitTestParams> {
        match self.active.as_mut() {
            Some(ActiveSet::UnitTest(params)) => Some(params),
            _ => None,
        }
    }
}

static REGISTRY: Lazy<RwLock<ParamsRegistry>> = Lazy::new(|| RwLock::new(ParamsRegistry::new()));

const LOCK_POISONED: &str = "params registry lock poisoned";

/// Read guard over the process-wide active parameter set
pub struct ActiveParams(RwLockReadGuard<'static, ParamsRegistry>);

impl Deref for ActiveParams {
    type Target = ChainParams;

    fn deref(&self) -> &ChainParams {
        self.0.params()
    }
}

/// Activate a network for the whole process
pub fn select_params(network: Network) -> Result<(), ParamsError> {
    REGISTRY.write().expect(LOCK_POISONED).select(network)
}

/// Best-effort process-wide selection from a network id string
pub fn select_params_from_id(id: &str) -> Result<bool, ParamsError> {
    REGISTRY.write().expect(LOCK_POISONED).select_from_id(id)
}

/// The process-wide active parameter set
///
/// # Panics
/// Panics if called before [`select_params`].
pub fn params() -> ActiveParams {
    let guard = REGISTRY.read().expect(LOCK_POISONED);
    // Fail fast at the access site, not on first field read
    guard.params();
    ActiveParams(guard)
}

/// Run `f` against the process-wide unit-test mutation interface
///
/// # Panics
/// Panics if the active network is not the unit-test network, mirroring
/// the fail-fast contract of [`params`].
pub fn modifiable_params<R>(f: impl FnOnce(&mut UnitTestParams) -> R) -> R {
    let mut guard = REGISTRY.write().expect(LOCK_POISONED);
    let params = guard
        .modifiable()
        .unwrap_or_else(|| panic!("modifiable params are only available on the unittest network"));
    f(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unselected_registry_reports_error() {
        let registry = ParamsRegistry::new();
        assert_eq!(
            registry.try_params().unwrap_err(),
            ParamsError::NoNetworkSelected
        );
        assert!(registry.network().is_none());
    }

    #[test]
    #[should_panic(expected = "before network selection")]
    fn test_unselected_registry_panics_on_read() {
        let registry = ParamsRegistry::new();
        let _ = registry.params();
    }

    #[test]
    fn test_select_main() {
        let mut registry = ParamsRegistry::new();
        registry.select(Network::Main).unwrap();
        assert_eq!(registry.network(), Some(Network::Main));
        assert_eq!(registry.params().default_port, 46130);
        assert!(registry.checkpoints().hash_at(0).is_some());
        // Main exposes no mutation interface
        assert!(registry.modifiable().is_none());
    }

    #[test]
    fn test_select_from_id_unknown_leaves_state() {
        let mut registry = ParamsRegistry::new();
        assert_eq!(registry.select_from_id("sidenet").unwrap(), false);
        assert!(registry.network().is_none());

        registry.select(Network::Test).unwrap();
        assert_eq!(registry.select_from_id("bogus").unwrap(), false);
        assert_eq!(registry.network(), Some(Network::Test));
    }

    #[test]
    fn test_select_from_id_known() {
        let mut registry = ParamsRegistry::new();
        assert!(registry.select_from_id("regtest").unwrap());
        assert_eq!(registry.network(), Some(Network::Regtest));
    }

    #[test]
    fn test_unittest_mutation_through_registry() {
        let mut registry = ParamsRegistry::new();
        registry.select(Network::UnitTest).unwrap();

        let modifiable = registry.modifiable().unwrap();
        modifiable.set_default_consistency_checks(false);
        modifiable.set_to_check_block_upgrade_majority(10);
        modifiable.set_reject_block_outdated_majority(9);
        modifiable.set_enforce_block_upgrade_majority(8);

        let params = registry.params();
        assert!(!params.default_consistency_checks);
        assert_eq!(params.to_check_block_upgrade_majority, 10);
    }

    #[test]
    fn test_repeated_reads_return_same_values() {
        let mut registry = ParamsRegistry::new();
        registry.select(Network::Main).unwrap();
        let first_hash = registry.params().genesis_hash;
        let first_magic = registry.params().message_start;
        assert_eq!(registry.params().genesis_hash, first_hash);
        assert_eq!(registry.params().message_start, first_magic);
    }

    // The process-wide registry is shared between tests running in the
    // same binary, so exactly one test exercises it.
    #[test]
    fn test_global_registry() {
        assert_eq!(select_params_from_id("nosuchnet").unwrap(), false);
        select_params(Network::Main).unwrap();
        assert_eq!(params().network, Network::Main);
        assert_eq!(params().network_id, "main");
    }
}
