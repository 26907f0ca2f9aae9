//! Rice entity - Rice supplied to kitchens.

use super::{FieldValue, Record, RecordKind, UsageRecord, set_flag, set_text};
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// One rice supply line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiceRecord {
    /// Identifier within the list
    pub id: i64,
    /// Supplier company
    pub company_name: String,
    /// Rice variety
    pub rice_type: String,
    /// Whether this rice is in use
    pub is_used: bool,
    /// Volume in tons
    pub volume: String,
    /// Price in SAR
    pub price: String,
    /// Variety used instead, when not the listed one
    pub other_rice_type: String,
    /// Origin of the product
    pub origin_product: String,
    /// Price of the origin product
    pub product_price: String,
}

/// Editable fields of [`RiceRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiceField {
    /// `company_name`
    CompanyName,
    /// `rice_type`
    RiceType,
    /// `is_used`
    IsUsed,
    /// `volume`
    Volume,
    /// `price`
    Price,
    /// `other_rice_type`
    OtherRiceType,
    /// `origin_product`
    OriginProduct,
    /// `product_price`
    ProductPrice,
}

impl Record for RiceRecord {
    type Field = RiceField;
    const KIND: RecordKind = RecordKind::Rice;

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

    fn set_field(&mut self, field: RiceField, value: FieldValue) -> Result<()> {
        match field {
            RiceField::CompanyName => set_text(&mut self.company_name, "company_name", value),
            RiceField::RiceType => set_text(&mut self.rice_type, "rice_type", value),
            RiceField::IsUsed => set_flag(&mut self.is_used, "is_used", value),
            RiceField::Volume => set_text(&mut self.volume, "volume", value),
            RiceField::Price => set_text(&mut self.price, "price", value),
            RiceField::OtherRiceType => set_text(&mut self.other_rice_type, "other_rice_type", value),
            RiceField::OriginProduct => set_text(&mut self.origin_product, "origin_product", value),
            RiceField::ProductPrice => set_text(&mut self.product_price, "product_price", value),
        }
    }
}

impl UsageRecord for RiceRecord {
    fn is_used(&self) -> bool {
        self.is_used
    }

    fn volume(&self) -> &str {
        &self.volume
    }
}
