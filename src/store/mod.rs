//! Record store - Process-lifetime state shared by every form and view.
//!
//! The store is an explicit object: construct it at startup, share it as a [`SharedStore`],
//! and drop it at shutdown. Every mutation happens under the write lock, so readers see
//! either the whole previous list or the whole next one.

/// Initial population after a simulated delay
pub mod loader;
/// Fail-fast access to a store that may not have been provided
pub mod provider;

use crate::{
    config::seed::Seed,
    core::records::RecordList,
    entities::{
        ActiveFlags, ExpeditionRecord, FieldValue, ReadyToEatRecord, Record, RecordKind, Region,
        RiceRecord, SpiceRecord, TelecomField, TelecomRecord, TenantRecord,
    },
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

pub use loader::{BuiltinSeed, LoadOutcome, SIMULATED_LOAD_DELAY, SeedFile, SeedSource, load_store, spawn_load};
pub use provider::StoreProvider;

/// Store handle shared between consumers.
pub type SharedStore = Arc<RwLock<RecordStore>>;

/// Where the store is in its initial load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Constructed, no load requested yet
    #[default]
    NotStarted,
    /// Waiting for the seed
    Loading,
    /// Lists populated
    Ready {
        /// When the lists were populated
        loaded_at: DateTime<Utc>,
    },
    /// The seed could not be produced
    Failed {
        /// Why the load failed
        message: String,
    },
}

/// All survey record lists plus the telecom active flags.
#[derive(Debug, Default)]
pub struct RecordStore {
    spice_makkah: RecordList<SpiceRecord>,
    spice_madinah: RecordList<SpiceRecord>,
    ready_to_eat: RecordList<ReadyToEatRecord>,
    tenants: RecordList<TenantRecord>,
    expeditions: RecordList<ExpeditionRecord>,
    telecom: RecordList<TelecomRecord>,
    telecom_active: ActiveFlags,
    rice: RecordList<RiceRecord>,
    load_state: LoadState,
}

impl RecordStore {
    /// Empty store that has not started loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store populated immediately from a seed, already `Ready`.
    #[must_use]
    pub fn from_seed(seed: Seed) -> Self {
        let mut store = Self::new();
        store.populate(seed);
        store
    }

    /// Wraps the store for sharing.
    #[must_use]
    pub fn shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// Current load state.
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Whether the lists have been populated.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.load_state, LoadState::Ready { .. })
    }

    /// Whether a load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    /// Clears every list; nothing is visible again until the load populates the store.
    pub(crate) fn begin_loading(&mut self) {
        debug!("Record store loading");
        *self = Self {
            load_state: LoadState::Loading,
            ..Self::default()
        };
    }

    pub(crate) fn fail_loading(&mut self, message: String) {
        warn!("Record store load failed: {}", message);
        self.load_state = LoadState::Failed { message };
    }

    /// Replaces every list with the seed's contents and marks the store ready.
    pub fn populate(&mut self, seed: Seed) {
        let count = seed.record_count();
        let flags = seed.active_flags();
        self.spice_makkah.replace(seed.spice_makkah);
        self.spice_madinah.replace(seed.spice_madinah);
        self.ready_to_eat.replace(seed.ready_to_eat);
        self.tenants.replace(seed.tenants);
        self.expeditions.replace(seed.expeditions);
        self.rice.replace(seed.rice);
        self.replace_telecom(seed.telecom);
        self.replace_telecom_active(flags);
        self.load_state = LoadState::Ready {
            loaded_at: Utc::now(),
        };
        info!("Record store ready with {} records", count);
    }

    /// Total records across all lists.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.spice_makkah.len()
            + self.spice_madinah.len()
            + self.ready_to_eat.len()
            + self.tenants.len()
            + self.expeditions.len()
            + self.telecom.len()
            + self.rice.len()
    }

    /// Spice list for one region.
    #[must_use]
    pub const fn spice(&self, region: Region) -> &RecordList<SpiceRecord> {
        match region {
            Region::Makkah => &self.spice_makkah,
            Region::Madinah => &self.spice_madinah,
        }
    }

    /// Editable spice list for one region.
    pub const fn spice_mut(&mut self, region: Region) -> &mut RecordList<SpiceRecord> {
        match region {
            Region::Makkah => &mut self.spice_makkah,
            Region::Madinah => &mut self.spice_madinah,
        }
    }

    /// Replaces the spice list for one region.
    pub fn replace_spice(&mut self, region: Region, records: Vec<SpiceRecord>) {
        self.spice_mut(region).replace(records);
    }

    /// Ready-to-eat list.
    #[must_use]
    pub const fn ready_to_eat(&self) -> &RecordList<ReadyToEatRecord> {
        &self.ready_to_eat
    }

    /// Editable ready-to-eat list.
    pub const fn ready_to_eat_mut(&mut self) -> &mut RecordList<ReadyToEatRecord> {
        &mut self.ready_to_eat
    }

    /// Replaces the ready-to-eat list.
    pub fn replace_ready_to_eat(&mut self, records: Vec<ReadyToEatRecord>) {
        self.ready_to_eat.replace(records);
    }

    /// Tenant list.
    #[must_use]
    pub const fn tenants(&self) -> &RecordList<TenantRecord> {
        &self.tenants
    }

    /// Editable tenant list.
    pub const fn tenants_mut(&mut self) -> &mut RecordList<TenantRecord> {
        &mut self.tenants
    }

    /// Replaces the tenant list.
    pub fn replace_tenants(&mut self, records: Vec<TenantRecord>) {
        self.tenants.replace(records);
    }

    /// Expedition list.
    #[must_use]
    pub const fn expeditions(&self) -> &RecordList<ExpeditionRecord> {
        &self.expeditions
    }

    /// Editable expedition list.
    pub const fn expeditions_mut(&mut self) -> &mut RecordList<ExpeditionRecord> {
        &mut self.expeditions
    }

    /// Replaces the expedition list.
    pub fn replace_expeditions(&mut self, records: Vec<ExpeditionRecord>) {
        self.expeditions.replace(records);
    }

    /// Rice list.
    #[must_use]
    pub const fn rice(&self) -> &RecordList<RiceRecord> {
        &self.rice
    }

    /// Editable rice list.
    pub const fn rice_mut(&mut self) -> &mut RecordList<RiceRecord> {
        &mut self.rice
    }

    /// Replaces the rice list.
    pub fn replace_rice(&mut self, records: Vec<RiceRecord>) {
        self.rice.replace(records);
    }

    // Telecom edits go through the store so provider removal can drop its flag too.

    /// Telecom provider list.
    #[must_use]
    pub const fn telecom(&self) -> &RecordList<TelecomRecord> {
        &self.telecom
    }

    /// Replaces the provider list, dropping flags of providers no longer listed.
    pub fn replace_telecom(&mut self, records: Vec<TelecomRecord>) {
        self.telecom.replace(records);
        self.prune_orphan_flags();
    }

    /// Appends a blank provider and returns its id. The new provider starts inactive.
    pub fn add_telecom(&mut self) -> i64 {
        self.telecom.add()
    }

    /// Removes a provider and its active flag, returning whether the provider existed.
    pub fn remove_telecom(&mut self, id: i64) -> bool {
        let removed = self.telecom.remove(id);
        if self.telecom_active.remove(id) {
            debug!("Dropped active flag for telecom provider {}", id);
        }
        removed
    }

    /// Replaces one field of a provider.
    ///
    /// # Errors
    /// See [`RecordList::update_field`].
    pub fn update_telecom_field(
        &mut self,
        id: i64,
        field: TelecomField,
        value: impl Into<FieldValue>,
    ) -> Result<()> {
        self.telecom.update_field(id, field, value)
    }

    /// Telecom active flags.
    #[must_use]
    pub const fn telecom_active(&self) -> &ActiveFlags {
        &self.telecom_active
    }

    /// Replaces the flag map, dropping entries for unknown providers.
    pub fn replace_telecom_active(&mut self, flags: ActiveFlags) {
        self.telecom_active = flags;
        self.prune_orphan_flags();
    }

    /// Flips a provider's flag and returns the new value.
    ///
    /// # Errors
    /// Returns [`Error::RecordNotFound`] if no provider has this id.
    pub fn toggle_telecom_active(&mut self, id: i64) -> Result<bool> {
        self.require_provider(id)?;
        Ok(self.telecom_active.toggle(id))
    }

    /// Sets a provider's flag.
    ///
    /// # Errors
    /// Returns [`Error::RecordNotFound`] if no provider has this id.
    pub fn set_telecom_active(&mut self, id: i64, active: bool) -> Result<()> {
        self.require_provider(id)?;
        self.telecom_active.set(id, active);
        Ok(())
    }

    fn require_provider(&self, id: i64) -> Result<()> {
        if self.telecom.contains(id) {
            Ok(())
        } else {
            Err(Error::RecordNotFound {
                kind: TelecomRecord::KIND,
                id,
            })
        }
    }

    fn prune_orphan_flags(&mut self) {
        let telecom = &self.telecom;
        let dropped = self.telecom_active.retain_ids(|id| telecom.contains(id));
        if dropped > 0 {
            warn!(
                "Dropped {} active flag(s) with no matching {} provider",
                dropped,
                RecordKind::Telecom
            );
        }
    }
}
