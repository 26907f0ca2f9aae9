//! Seed configuration loading from seed.toml
//!
//! A seed holds the initial contents of every record list. The file mirrors the store: one
//! array of tables per list plus `[[telecom_active]]` entries. When no file exists the
//! built-in sample survey data is used instead.

use crate::entities::{
    ActiveFlags, ExpeditionRecord, HotelSite, KitchenSite, ReadyToEatRecord, Record, RecordKind,
    Region, Respondent, RiceRecord, SPICE_CATALOG, SpiceRecord, TelecomRecord, TenantRecord,
};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Seed file used when `SEED_PATH` is not set.
pub const DEFAULT_SEED_PATH: &str = "seed.toml";

/// Initial contents of the record store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    /// Spice usage in Makkah kitchens
    pub spice_makkah: Vec<SpiceRecord>,
    /// Spice usage in Madinah kitchens
    pub spice_madinah: Vec<SpiceRecord>,
    /// Ready-to-eat menus
    pub ready_to_eat: Vec<ReadyToEatRecord>,
    /// Tenant survey rows
    pub tenants: Vec<TenantRecord>,
    /// Cargo expeditions
    pub expeditions: Vec<ExpeditionRecord>,
    /// Telecom providers
    pub telecom: Vec<TelecomRecord>,
    /// Which telecom providers start selected
    pub telecom_active: Vec<ActiveFlagEntry>,
    /// Rice supply rows
    pub rice: Vec<RiceRecord>,
}

/// One `[[telecom_active]]` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFlagEntry {
    /// Provider id
    pub id: i64,
    /// Whether it starts selected
    pub active: bool,
}

impl Seed {
    /// Total number of records across all lists.
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

    /// Checks that every record id is positive.
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the first record with an id of zero or below.
    pub fn validate(&self) -> Result<()> {
        check_ids(&self.spice_makkah)?;
        check_ids(&self.spice_madinah)?;
        check_ids(&self.ready_to_eat)?;
        check_ids(&self.tenants)?;
        check_ids(&self.expeditions)?;
        check_ids(&self.telecom)?;
        check_ids(&self.rice)
    }

    /// The telecom entries as a flag map.
    #[must_use]
    pub fn active_flags(&self) -> ActiveFlags {
        self.telecom_active.iter().map(|e| (e.id, e.active)).collect()
    }

    /// Sample survey data shipped with the dashboard.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            spice_makkah: builtin_spices(Region::Makkah, &[1500, 2000, 2500, 1800, 1200]),
            spice_madinah: builtin_spices(Region::Madinah, &[1400, 1800, 2300, 1750, 1100]),
            ready_to_eat: vec![
                builtin_rte(1, "PT. Halalan Thayyiban Indonesia", "Rendang Daging", "15000", "25000", "Sektor 3 Makkah", "Siti Aminah", "2026-06-14"),
                builtin_rte(2, "PT. Umara", "Ayam Kecap", "12000", "22000", "Sektor 5 Makkah", "Rudi Hartono", "2026-06-14"),
                builtin_rte(3, "Foodex", "Daging Lada Hitam", "8000", "24000", "Madinah Zone A", "Ahmad Faisal", "2026-06-15"),
            ],
            tenants: vec![
                builtin_tenant(1, "Toko Al-Barakah", "Oleh-oleh", "Kurma Ajwa", "15000", "Hotel Al-Kiswah", "Dewi Sartika", "2026-06-10"),
                builtin_tenant(2, "Bin Dawood Express", "Retail", "Coklat", "45000", "Hotel Royal Clock", "Budi Santoso", "2026-06-11"),
                builtin_tenant(3, "Resto Nusantara", "Makanan", "Bakso", "20000", "Hotel Rawda", "Rudi Hartono", "2026-06-12"),
            ],
            expeditions: vec![
                builtin_expedition(1, "Garuda Cargo", "25", "2400", "Hotel 101", "Ahmad Faisal", "2026-06-13"),
                builtin_expedition(2, "Saudia Cargo", "22", "3200", "Hotel 202", "Siti Aminah", "2026-06-13"),
                builtin_expedition(3, "Pos Indonesia", "18", "1500", "Hotel 303", "Dewi Sartika", "2026-06-14"),
            ],
            telecom: vec![
                builtin_telecom(1, "Telkomsel", "Paket Haji 30 Hari", "H. Abdullah", "JKG-01", "Budi Santoso"),
                builtin_telecom(2, "Indosat Ooredoo", "Paket Umrah Plus", "Hj. Fatimah", "SUB-12", "Siti Aminah"),
                builtin_telecom(3, "XL Axiata", "", "", "", ""),
                builtin_telecom(4, "Lainnya", "", "", "", ""),
            ],
            telecom_active: vec![
                ActiveFlagEntry { id: 1, active: true },
                ActiveFlagEntry { id: 2, active: true },
                ActiveFlagEntry { id: 3, active: false },
                ActiveFlagEntry { id: 4, active: false },
            ],
            rice: Vec::new(),
        }
    }
}

/// Volumes for the catalog entries marked used in the sample data.
const SAMPLE_SPICE_VOLUMES: [&str; 6] = ["45.20", "38.75", "52.10", "29.40", "61.80", "33.65"];

fn builtin_spices(region: Region, prices: &[u32]) -> Vec<SpiceRecord> {
    let kitchen_name = match region {
        Region::Makkah => "Dapur Al-Haram Sektor 1",
        Region::Madinah => "Dapur Madinah Al-Munawwarah",
    };
    (1_i64..)
        .zip(SPICE_CATALOG)
        .enumerate()
        .map(|(index, (id, name))| {
            let sample_volume = SAMPLE_SPICE_VOLUMES.get(index);
            let mut record = SpiceRecord::from_catalog(id, name);
            record.is_used = sample_volume.is_some();
            if let Some(volume) = sample_volume {
                record.volume = (*volume).to_string();
                record.price = prices[index % prices.len()].to_string();
            }
            record.origin_product = if index % 3 == 0 { "Indofood" } else { "Lokal Arab" }.to_string();
            record.site = KitchenSite {
                kitchen_name: kitchen_name.to_string(),
                surveyor: if index % 2 == 0 { "Ahmad Faisal" } else { "Budi Santoso" }.to_string(),
                date: "2026-06-15".to_string(),
                ..KitchenSite::default()
            };
            record
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn builtin_rte(
    id: i64,
    company: &str,
    menu: &str,
    volume: &str,
    price: &str,
    kitchen: &str,
    surveyor: &str,
    date: &str,
) -> ReadyToEatRecord {
    ReadyToEatRecord {
        id,
        company_name: company.to_string(),
        menu_description: menu.to_string(),
        is_used: true,
        volume: volume.to_string(),
        price: price.to_string(),
        site: KitchenSite {
            kitchen_name: kitchen.to_string(),
            surveyor: surveyor.to_string(),
            date: date.to_string(),
            ..KitchenSite::default()
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn builtin_tenant(
    id: i64,
    shop: &str,
    product_type: &str,
    best_seller: &str,
    rent: &str,
    hotel: &str,
    surveyor: &str,
    date: &str,
) -> TenantRecord {
    TenantRecord {
        id,
        shop_name: shop.to_string(),
        product_type: product_type.to_string(),
        best_seller: best_seller.to_string(),
        rent_cost: rent.to_string(),
        site: hotel_site(hotel, surveyor, date),
    }
}

fn builtin_expedition(
    id: i64,
    company: &str,
    price_per_kg: &str,
    weight: &str,
    hotel: &str,
    surveyor: &str,
    date: &str,
) -> ExpeditionRecord {
    ExpeditionRecord {
        id,
        company_name: company.to_string(),
        price_per_kg: price_per_kg.to_string(),
        weight: weight.to_string(),
        site: hotel_site(hotel, surveyor, date),
    }
}

fn builtin_telecom(
    id: i64,
    provider: &str,
    package: &str,
    respondent: &str,
    kloter: &str,
    surveyor: &str,
) -> TelecomRecord {
    TelecomRecord {
        id,
        provider_name: provider.to_string(),
        roaming_package: package.to_string(),
        respondent: Respondent {
            respondent_name: respondent.to_string(),
            kloter: kloter.to_string(),
            surveyor: surveyor.to_string(),
            ..Respondent::default()
        },
    }
}

fn hotel_site(hotel: &str, surveyor: &str, date: &str) -> HotelSite {
    HotelSite {
        hotel_name: hotel.to_string(),
        surveyor: surveyor.to_string(),
        date: date.to_string(),
        ..HotelSite::default()
    }
}

fn check_ids<T: Record>(records: &[T]) -> Result<()> {
    match records.iter().find(|r| r.id() <= 0) {
        Some(r) => Err(invalid_id(T::KIND, r.id())),
        None => Ok(()),
    }
}

fn invalid_id(kind: RecordKind, id: i64) -> Error {
    Error::Config {
        message: format!("Seed {kind} record has invalid id {id}; ids must be positive"),
    }
}

/// Gets the seed file path from `SEED_PATH`, falling back to [`DEFAULT_SEED_PATH`].
#[must_use]
pub fn get_seed_path() -> PathBuf {
    std::env::var("SEED_PATH").map_or_else(|_| PathBuf::from(DEFAULT_SEED_PATH), PathBuf::from)
}

/// Parses and validates seed TOML.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML is invalid, a field has the wrong type, or a record
/// id is not positive.
pub fn parse_seed(contents: &str) -> Result<Seed> {
    let seed: Seed = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed TOML: {e}"),
    })?;
    seed.validate()?;
    Ok(seed)
}

/// Loads a seed from a TOML file.
///
/// # Errors
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::Config`] if it cannot be parsed
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Seed> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load seed from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref)?;
    parse_seed(&contents)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_seed_with_sparse_rows() {
        let toml_str = r#"
            [[tenants]]
            id = 1
            shop_name = "Toko Al-Barakah"
            product_type = "Oleh-oleh"
            rent_cost = "15000"

            [tenants.site]
            hotel_name = "Hotel Al-Kiswah"

            [[telecom]]
            id = 1
            provider_name = "Telkomsel"

            [[telecom]]
            id = 2
            provider_name = "XL Axiata"

            [[telecom_active]]
            id = 1
            active = true

            [[telecom_active]]
            id = 2
            active = false
        "#;

        let seed = parse_seed(toml_str).unwrap();
        assert_eq!(seed.tenants.len(), 1);
        assert_eq!(seed.tenants[0].best_seller, "");
        assert_eq!(seed.tenants[0].site.hotel_name, "Hotel Al-Kiswah");
        assert_eq!(seed.telecom.len(), 2);
        assert!(seed.spice_makkah.is_empty());

        let flags = seed.active_flags();
        assert!(flags.is_active(1));
        assert!(!flags.is_active(2));
        assert_eq!(flags.len(), 2);
    }

    #[test]
    fn test_parse_seed_rejects_wrong_types() {
        let result = parse_seed("[[tenants]]\nid = \"one\"\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_seed_missing_file() {
        let result = load_seed("definitely/not/here/seed.toml");
        assert!(matches!(
            result,
            Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn test_parse_seed_rejects_non_positive_ids() {
        let result = parse_seed("[[expeditions]]\nid = 0\ncompany_name = \"Saudia Cargo\"\n");
        assert!(
            matches!(result, Err(Error::Config { ref message }) if message.contains("invalid id 0"))
        );
    }

    #[test]
    fn test_seed_with_max_id_adds_without_overflow() {
        let seed = parse_seed("[[tenants]]\nid = 9223372036854775807\nshop_name = \"Bin Dawood\"\n")
            .unwrap();
        let mut store = crate::store::RecordStore::from_seed(seed);
        assert_eq!(store.tenants_mut().add(), 1);
        assert_eq!(store.tenants().len(), 2);
    }

    #[test]
    fn test_builtin_seed_shape() {
        let seed = Seed::builtin();
        assert_eq!(seed.spice_makkah.len(), SPICE_CATALOG.len());
        assert_eq!(seed.spice_madinah.len(), SPICE_CATALOG.len());
        assert_eq!(seed.spice_makkah[0].id, 1);
        assert_eq!(seed.spice_makkah.iter().filter(|s| s.is_used).count(), 6);
        assert_eq!(seed.spice_makkah[0].price, "1500");
        assert_eq!(seed.spice_madinah[0].price, "1400");
        assert_eq!(seed.spice_makkah[3].origin_product, "Indofood");
        assert_eq!(seed.ready_to_eat.len(), 3);
        assert_eq!(seed.telecom.len(), 4);
        assert_eq!(seed.active_flags().len(), 4);
        assert_eq!(seed.record_count(), 2 * SPICE_CATALOG.len() + 13);
    }

    #[test]
    fn test_example_seed_file_parses() {
        let seed = parse_seed(include_str!("../../seed.example.toml")).unwrap();
        assert_eq!(seed.spice_makkah[0].site.kitchen_name, "Dapur Al-Haram Sektor 1");
        assert_eq!(seed.telecom[0].respondent.kloter, "JKG-01");
        assert!(seed.active_flags().is_active(1));
        assert_eq!(seed.rice.len(), 1);
    }
}
