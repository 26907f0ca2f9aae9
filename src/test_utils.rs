//! Shared test utilities for the survey record store.
//!
//! Builders here fill only the fields a test cares about and leave the rest empty.

use crate::entities::{
    ExpeditionRecord, ReadyToEatRecord, RiceRecord, SpiceRecord, TelecomRecord, TenantRecord,
};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Spice record with name, usage, volume and price.
pub fn spice(id: i64, name: &str, is_used: bool, volume: &str, price: &str) -> SpiceRecord {
    SpiceRecord {
        id,
        name: name.to_string(),
        is_used,
        volume: volume.to_string(),
        price: price.to_string(),
        ..SpiceRecord::default()
    }
}

/// Ready-to-eat record with company, usage and volume.
pub fn rte(id: i64, company: &str, is_used: bool, volume: &str) -> ReadyToEatRecord {
    ReadyToEatRecord {
        id,
        company_name: company.to_string(),
        is_used,
        volume: volume.to_string(),
        ..ReadyToEatRecord::default()
    }
}

/// Tenant record named `Shop <id>` with product type and rent.
pub fn tenant(id: i64, product_type: &str, rent_cost: &str) -> TenantRecord {
    TenantRecord {
        id,
        shop_name: format!("Shop {id}"),
        product_type: product_type.to_string(),
        rent_cost: rent_cost.to_string(),
        ..TenantRecord::default()
    }
}

/// Expedition record with company, tariff and weight.
pub fn expedition(id: i64, company: &str, price_per_kg: &str, weight: &str) -> ExpeditionRecord {
    ExpeditionRecord {
        id,
        company_name: company.to_string(),
        price_per_kg: price_per_kg.to_string(),
        weight: weight.to_string(),
        ..ExpeditionRecord::default()
    }
}

/// Telecom provider with no package.
pub fn telecom(id: i64, provider: &str) -> TelecomRecord {
    TelecomRecord {
        id,
        provider_name: provider.to_string(),
        ..TelecomRecord::default()
    }
}

/// Rice record with company, usage and volume.
pub fn rice(id: i64, company: &str, is_used: bool, volume: &str) -> RiceRecord {
    RiceRecord {
        id,
        company_name: company.to_string(),
        is_used,
        volume: volume.to_string(),
        ..RiceRecord::default()
    }
}
