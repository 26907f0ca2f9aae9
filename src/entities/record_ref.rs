//! Borrowed view over a record of any kind, for tables and search results that mix lists.

use super::{
    ExpeditionRecord, ReadyToEatRecord, Record, RecordKind, Region, RiceRecord, SpiceRecord,
    TelecomRecord, TenantRecord,
};

/// A record from any list, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef<'a> {
    /// Spice record and the region list it came from
    Spice(Region, &'a SpiceRecord),
    /// Ready-to-eat record
    ReadyToEat(&'a ReadyToEatRecord),
    /// Tenant record
    Tenant(&'a TenantRecord),
    /// Expedition record
    Expedition(&'a ExpeditionRecord),
    /// Telecom provider record
    Telecom(&'a TelecomRecord),
    /// Rice record
    Rice(&'a RiceRecord),
}

impl RecordRef<'_> {
    /// Kind of the underlying record.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Spice(..) => RecordKind::Spice,
            Self::ReadyToEat(_) => RecordKind::ReadyToEat,
            Self::Tenant(_) => RecordKind::Tenant,
            Self::Expedition(_) => RecordKind::Expedition,
            Self::Telecom(_) => RecordKind::Telecom,
            Self::Rice(_) => RecordKind::Rice,
        }
    }

    /// Id within the record's own list.
    #[must_use]
    pub fn id(&self) -> i64 {
        match self {
            Self::Spice(_, r) => r.id(),
            Self::ReadyToEat(r) => r.id(),
            Self::Tenant(r) => r.id(),
            Self::Expedition(r) => r.id(),
            Self::Telecom(r) => r.id(),
            Self::Rice(r) => r.id(),
        }
    }

    /// Display name of the record.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Spice(_, r) => r.label(),
            Self::ReadyToEat(r) => r.label(),
            Self::Tenant(r) => r.label(),
            Self::Expedition(r) => r.label(),
            Self::Telecom(r) => r.label(),
            Self::Rice(r) => r.label(),
        }
    }
}
