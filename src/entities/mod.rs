//! Entity module - Record types for every survey domain.
//!
//! Each record is a flat struct identified by an `i64` id that is unique within its own
//! list. Numeric-looking values are kept as strings; parsing them is an aggregate concern.
//! Field edits go through a per-record field enum so forms can only touch fields that exist.

pub mod expedition;
pub mod metadata;
pub mod ready_to_eat;
pub mod record_ref;
pub mod rice;
pub mod spice;
pub mod telecom;
pub mod tenant;

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use expedition::{ExpeditionField, ExpeditionRecord};
pub use metadata::{
    HotelSite, HotelSiteField, KitchenSite, KitchenSiteField, Respondent, RespondentField,
};
pub use ready_to_eat::{ReadyToEatField, ReadyToEatRecord};
pub use record_ref::RecordRef;
pub use rice::{RiceField, RiceRecord};
pub use spice::{Region, SPICE_CATALOG, SpiceField, SpiceRecord};
pub use telecom::{ActiveFlags, TelecomField, TelecomRecord};
pub use tenant::{TenantField, TenantRecord};

/// Tag naming the kind of a record, used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Kitchen spice usage, one list per region
    Spice,
    /// Ready-to-eat meal distribution
    ReadyToEat,
    /// Tenant / retail rent survey
    Tenant,
    /// Cargo expedition pricing
    Expedition,
    /// Telecom roaming packages
    Telecom,
    /// Rice monitoring
    Rice,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spice => "spice",
            Self::ReadyToEat => "ready-to-eat",
            Self::Tenant => "tenant",
            Self::Expedition => "expedition",
            Self::Telecom => "telecom",
            Self::Rice => "rice",
        };
        f.write_str(name)
    }
}

/// A value written into a record field by a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text, including numeric strings
    Text(String),
    /// Toggle such as `is_used`
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Common behaviour of every survey record.
pub trait Record: Clone + fmt::Debug {
    /// Editable fields of this record
    type Field: Copy + fmt::Debug;

    /// Kind tag for this record type
    const KIND: RecordKind;

    /// Identifier, unique within the owning list
    fn id(&self) -> i64;

    /// A record with the given id and every other field empty
    fn blank(id: i64) -> Self;

    /// Human-facing name of the record, used for search and chart labels
    fn label(&self) -> &str;

    /// Replaces one field.
    ///
    /// # Errors
    /// Returns [`Error::FieldType`] when the value kind does not match the field; the
    /// record is left untouched in that case.
    fn set_field(&mut self, field: Self::Field, value: FieldValue) -> Result<()>;
}

/// Records that track whether an item was used and in what volume.
pub trait UsageRecord: Record {
    /// Whether the item is marked as used
    fn is_used(&self) -> bool;
    /// Raw volume string as entered
    fn volume(&self) -> &str;
}

/// Assigns a text value, rejecting flags.
pub(crate) fn set_text(slot: &mut String, field: &'static str, value: FieldValue) -> Result<()> {
    match value {
        FieldValue::Text(text) => {
            *slot = text;
            Ok(())
        }
        FieldValue::Flag(_) => Err(Error::FieldType {
            field,
            expected: "text",
        }),
    }
}

/// Assigns a flag value, rejecting text.
pub(crate) fn set_flag(slot: &mut bool, field: &'static str, value: FieldValue) -> Result<()> {
    match value {
        FieldValue::Flag(flag) => {
            *slot = flag;
            Ok(())
        }
        FieldValue::Text(_) => Err(Error::FieldType {
            field,
            expected: "flag",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_rejects_flag() {
        let mut slot = "before".to_string();
        let result = set_text(&mut slot, "volume", FieldValue::Flag(true));
        assert!(matches!(
            result,
            Err(Error::FieldType {
                field: "volume",
                expected: "text"
            })
        ));
        assert_eq!(slot, "before");
    }

    #[test]
    fn test_set_flag_rejects_text() {
        let mut slot = false;
        let result = set_flag(&mut slot, "is_used", "yes".into());
        assert!(result.is_err());
        assert!(!slot);
    }

    #[test]
    fn test_record_kind_display() {
        assert_eq!(RecordKind::ReadyToEat.to_string(), "ready-to-eat");
        assert_eq!(RecordKind::Telecom.to_string(), "telecom");
    }
}
