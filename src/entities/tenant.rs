//! Tenant entity - Shops renting space in pilgrim hotels.

use super::{FieldValue, HotelSite, HotelSiteField, Record, RecordKind, set_text};
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// One shop surveyed in a hotel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantRecord {
    /// Identifier within the list
    pub id: i64,
    /// Shop name
    pub shop_name: String,
    /// Product category, e.g. "Retail" or "Oleh-oleh"; may be empty
    pub product_type: String,
    /// Best-selling product
    pub best_seller: String,
    /// Rent paid, in SAR
    pub rent_cost: String,
    /// Where and by whom it was surveyed
    pub site: HotelSite,
}

/// Editable fields of [`TenantRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantField {
    /// `shop_name`
    ShopName,
    /// `product_type`
    ProductType,
    /// `best_seller`
    BestSeller,
    /// `rent_cost`
    RentCost,
    /// A field of the hotel identity block
    Site(HotelSiteField),
}

impl Record for TenantRecord {
    type Field = TenantField;
    const KIND: RecordKind = RecordKind::Tenant;

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
        &self.shop_name
    }

    fn set_field(&mut self, field: TenantField, value: FieldValue) -> Result<()> {
        match field {
            TenantField::ShopName => set_text(&mut self.shop_name, "shop_name", value),
            TenantField::ProductType => set_text(&mut self.product_type, "product_type", value),
            TenantField::BestSeller => set_text(&mut self.best_seller, "best_seller", value),
            TenantField::RentCost => set_text(&mut self.rent_cost, "rent_cost", value),
            TenantField::Site(site_field) => self.site.set_field(site_field, value),
        }
    }
}
