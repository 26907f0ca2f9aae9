//! Telecom entity - Roaming packages bought by pilgrims, per provider.
//!
//! Which providers are currently selected is tracked in [`ActiveFlags`], kept beside the
//! provider list rather than inside each record.

use super::{FieldValue, Record, RecordKind, Respondent, RespondentField, set_text};
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One telecom provider and the package a respondent bought.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelecomRecord {
    /// Identifier within the list
    pub id: i64,
    /// Provider name, e.g. "Telkomsel"
    pub provider_name: String,
    /// Roaming package bought, empty if none
    pub roaming_package: String,
    /// Who answered the survey
    pub respondent: Respondent,
}

/// Editable fields of [`TelecomRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelecomField {
    /// `provider_name`
    ProviderName,
    /// `roaming_package`
    RoamingPackage,
    /// A field of the respondent block
    Respondent(RespondentField),
}

impl Record for TelecomRecord {
    type Field = TelecomField;
    const KIND: RecordKind = RecordKind::Telecom;

    fn id(&self) -> i64 {
        self.id
    }

    fn blank(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn label(&self) -> &str {
        &self.provider_name
    }

    fn set_field(&mut self, field: TelecomField, value: FieldValue) -> Result<()> {
        match field {
            TelecomField::ProviderName => set_text(&mut self.provider_name, "provider_name", value),
            TelecomField::RoamingPackage => {
                set_text(&mut self.roaming_package, "roaming_package", value)
            }
            TelecomField::Respondent(respondent_field) => {
                self.respondent.set_field(respondent_field, value)
            }
        }
    }
}

/// Provider id to "currently selected" flag.
///
/// A missing entry reads as inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFlags {
    flags: BTreeMap<i64, bool>,
}

impl ActiveFlags {
    /// Empty map, every provider inactive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the provider is flagged active.
    #[must_use]
    pub fn is_active(&self, id: i64) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }

    /// Sets the flag for a provider.
    pub fn set(&mut self, id: i64, active: bool) {
        self.flags.insert(id, active);
    }

    /// Flips the flag for a provider and returns the new value.
    pub fn toggle(&mut self, id: i64) -> bool {
        let next = !self.is_active(id);
        self.flags.insert(id, next);
        next
    }

    /// Drops the entry for a provider, returning whether one existed.
    pub fn remove(&mut self, id: i64) -> bool {
        self.flags.remove(&id).is_some()
    }

    /// Keeps only entries whose id satisfies `keep`; returns how many were dropped.
    pub fn retain_ids(&mut self, mut keep: impl FnMut(i64) -> bool) -> usize {
        let before = self.flags.len();
        self.flags.retain(|id, _| keep(*id));
        before - self.flags.len()
    }

    /// All entries in id order, including explicit `false` entries.
    pub fn iter(&self) -> impl Iterator<Item = (i64, bool)> + '_ {
        self.flags.iter().map(|(id, active)| (*id, *active))
    }

    /// Number of entries, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether there are no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl FromIterator<(i64, bool)> for ActiveFlags {
    fn from_iter<I: IntoIterator<Item = (i64, bool)>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}
