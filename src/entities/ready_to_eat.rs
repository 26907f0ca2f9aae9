//! Ready-to-eat entity - Packaged meals distributed to pilgrims, per supplier company.

use super::{FieldValue, KitchenSite, KitchenSiteField, Record, RecordKind, UsageRecord, set_flag, set_text};
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// One supplier's ready-to-eat menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadyToEatRecord {
    /// Identifier within the list
    pub id: i64,
    /// Supplier company
    pub company_name: String,
    /// Menu served, e.g. "Rendang Daging"
    pub menu_description: String,
    /// Whether the menu was distributed
    pub is_used: bool,
    /// Number of portions
    pub volume: String,
    /// Price per portion
    pub price: String,
    /// Where and by whom it was surveyed
    pub site: KitchenSite,
}

/// Editable fields of [`ReadyToEatRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyToEatField {
    /// `company_name`
    CompanyName,
    /// `menu_description`
    MenuDescription,
    /// `is_used`
    IsUsed,
    /// `volume`
    Volume,
    /// `price`
    Price,
    /// A field of the kitchen identity block
    Site(KitchenSiteField),
}

impl Record for ReadyToEatRecord {
    type Field = ReadyToEatField;
    const KIND: RecordKind = RecordKind::ReadyToEat;

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
        &self.company_name
    }

    fn set_field(&mut self, field: ReadyToEatField, value: FieldValue) -> Result<()> {
        match field {
            ReadyToEatField::CompanyName => set_text(&mut self.company_name, "company_name", value),
            ReadyToEatField::MenuDescription => {
                set_text(&mut self.menu_description, "menu_description", value)
            }
            ReadyToEatField::IsUsed => set_flag(&mut self.is_used, "is_used", value),
            ReadyToEatField::Volume => set_text(&mut self.volume, "volume", value),
            ReadyToEatField::Price => set_text(&mut self.price, "price", value),
            ReadyToEatField::Site(site_field) => self.site.set_field(site_field, value),
        }
    }
}

impl UsageRecord for ReadyToEatRecord {
    fn is_used(&self) -> bool {
        self.is_used
    }

    fn volume(&self) -> &str {
        &self.volume
    }
}
