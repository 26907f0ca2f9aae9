//! Expedition entity - Cargo companies shipping pilgrim luggage home.

use super::{FieldValue, HotelSite, HotelSiteField, Record, RecordKind, set_text};
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// One cargo company's shipment from a hotel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpeditionRecord {
    /// Identifier within the list
    pub id: i64,
    /// Cargo company
    pub company_name: String,
    /// Tariff per kilogram, in SAR
    pub price_per_kg: String,
    /// Shipped weight in kilograms
    pub weight: String,
    /// Where and by whom it was surveyed
    pub site: HotelSite,
}

/// Editable fields of [`ExpeditionRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpeditionField {
    /// `company_name`
    CompanyName,
    /// `price_per_kg`
    PricePerKg,
    /// `weight`
    Weight,
    /// A field of the hotel identity block
    Site(HotelSiteField),
}

impl Record for ExpeditionRecord {
    type Field = ExpeditionField;
    const KIND: RecordKind = RecordKind::Expedition;

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

    fn set_field(&mut self, field: ExpeditionField, value: FieldValue) -> Result<()> {
        match field {
            ExpeditionField::CompanyName => set_text(&mut self.company_name, "company_name", value),
            ExpeditionField::PricePerKg => set_text(&mut self.price_per_kg, "price_per_kg", value),
            ExpeditionField::Weight => set_text(&mut self.weight, "weight", value),
            ExpeditionField::Site(site_field) => self.site.set_field(site_field, value),
        }
    }
}
