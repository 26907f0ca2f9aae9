//! Spice entity - Kitchen spice usage, surveyed separately for Makkah and Madinah.
//!
//! Both regions share the same catalog of spice names; each region keeps its own list so
//! usage and price can be compared side by side.

use super::{FieldValue, KitchenSite, KitchenSiteField, Record, RecordKind, UsageRecord, set_flag, set_text};
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spice blends surveyed in every kitchen, in form order.
pub const SPICE_CATALOG: [&str; 28] = [
    "Bumbu Nasi Kuning",
    "Bumbu Gulai",
    "Bumbu Tongseng",
    "Bumbu Nasi Goreng",
    "Bumbu Opor",
    "Bumbu Bistik/Teriyaki",
    "Bumbu Nasi Goreng Kampung",
    "Bumbu Kecap",
    "Bumbu Gepuk",
    "Bumbu Krengsengan",
    "Bumbu Nasi Uduk",
    "Bumbu Woku",
    "Bumbu Balado",
    "Bumbu Rica",
    "Bumbu Semur",
    "Bumbu Rajang",
    "Bumbu Bali",
    "Bumbu Saus Tiram",
    "Bumbu Tumis",
    "Bumbu Lada Hitam",
    "Bumbu Saus Mentega",
    "Bumbu Asam Manis",
    "Bumbu Rujak",
    "Bumbu Rendang",
    "Bumbu Kuning",
    "Bumbu Dabu-Dabu",
    "Bumbu Pesmol",
    "Bumbu Habang",
];

/// Survey region for spice usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Makkah kitchens
    Makkah,
    /// Madinah kitchens
    Madinah,
}

impl Region {
    /// Both regions, Makkah first.
    pub const ALL: [Self; 2] = [Self::Makkah, Self::Madinah];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Makkah => f.write_str("Makkah"),
            Self::Madinah => f.write_str("Madinah"),
        }
    }
}

/// One spice blend as used by one kitchen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiceRecord {
    /// Identifier within the region's list
    pub id: i64,
    /// Catalog name, see [`SPICE_CATALOG`]
    pub name: String,
    /// Whether the kitchen uses this blend
    pub is_used: bool,
    /// Volume in tons
    pub volume: String,
    /// Price in SAR
    pub price: String,
    /// Other ingredients mixed in
    pub other_ingredients: String,
    /// Origin of the product (e.g. Indonesian brand or local Arab)
    pub origin_product: String,
    /// Price of the origin product
    pub product_price: String,
    /// Supplier company
    pub company_name: String,
    /// Where and by whom it was surveyed
    pub site: KitchenSite,
}

/// Editable fields of [`SpiceRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiceField {
    /// `name`
    Name,
    /// `is_used`
    IsUsed,
    /// `volume`
    Volume,
    /// `price`
    Price,
    /// `other_ingredients`
    OtherIngredients,
    /// `origin_product`
    OriginProduct,
    /// `product_price`
    ProductPrice,
    /// `company_name`
    CompanyName,
    /// A field of the kitchen identity block
    Site(KitchenSiteField),
}

impl SpiceRecord {
    /// A catalog entry that has not been filled in yet.
    #[must_use]
    pub fn from_catalog(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            ..Self::default()
        }
    }
}

impl Record for SpiceRecord {
    type Field = SpiceField;
    const KIND: RecordKind = RecordKind::Spice;

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
        &self.name
    }

    fn set_field(&mut self, field: SpiceField, value: FieldValue) -> Result<()> {
        match field {
            SpiceField::Name => set_text(&mut self.name, "name", value),
            SpiceField::IsUsed => set_flag(&mut self.is_used, "is_used", value),
            SpiceField::Volume => set_text(&mut self.volume, "volume", value),
            SpiceField::Price => set_text(&mut self.price, "price", value),
            SpiceField::OtherIngredients => {
                set_text(&mut self.other_ingredients, "other_ingredients", value)
            }
            SpiceField::OriginProduct => set_text(&mut self.origin_product, "origin_product", value),
            SpiceField::ProductPrice => set_text(&mut self.product_price, "product_price", value),
            SpiceField::CompanyName => set_text(&mut self.company_name, "company_name", value),
            SpiceField::Site(site_field) => self.site.set_field(site_field, value),
        }
    }
}

impl UsageRecord for SpiceRecord {
    fn is_used(&self) -> bool {
        self.is_used
    }

    fn volume(&self) -> &str {
        &self.volume
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_catalog_has_no_duplicates() {
        let mut names = SPICE_CATALOG.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SPICE_CATALOG.len());
    }

    #[test]
    fn test_set_nested_site_field() {
        let mut record = SpiceRecord::from_catalog(1, "Bumbu Gulai");
        record
            .set_field(SpiceField::Site(KitchenSiteField::Surveyor), "Ahmad Faisal".into())
            .unwrap();
        assert_eq!(record.site.surveyor, "Ahmad Faisal");
        assert_eq!(record.name, "Bumbu Gulai");
    }

    #[test]
    fn test_is_used_requires_flag() {
        let mut record = SpiceRecord::blank(4);
        assert!(record.set_field(SpiceField::IsUsed, "true".into()).is_err());
        record.set_field(SpiceField::IsUsed, true.into()).unwrap();
        assert!(record.is_used);
    }

    #[test]
    fn test_region_display() {
        assert_eq!(Region::Makkah.to_string(), "Makkah");
        assert_eq!(Region::ALL[1].to_string(), "Madinah");
    }
}
