//! Report generation business logic.
//!
//! Builds the dashboard summary, the chart data for the visualization page, and the row
//! sets behind each report tab. All functions read a store snapshot and return plain data
//! for the presentation layer to format.

use crate::{
    core::aggregates::{
        ChartPoint, PairedValue, RadarPoint, active_count, average_income, expedition_by_company,
        expedition_lots, price_comparison, rte_distribution, telecom_share, tenant_radar,
        total_rent_cost, total_used_volume, total_weight,
    },
    entities::{RecordRef, Region},
    store::RecordStore,
};
use std::fmt;

/// Headline figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Used spice volume, Makkah and Madinah combined (tons)
    pub total_spice_volume: f64,
    /// Distributed ready-to-eat portions
    pub total_rte_volume: f64,
    /// Used rice volume (tons)
    pub total_rice_volume: f64,
    /// Shipped cargo weight (kg)
    pub total_cargo_weight: f64,
    /// Rent collected from tenants (SAR)
    pub total_rent_cost: f64,
    /// Mean shipment income across expeditions (SAR)
    pub average_expedition_income: f64,
    /// Telecom providers currently selected
    pub active_providers: usize,
}

/// Chart series for the visualization page.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationData {
    /// Makkah vs Madinah spice prices
    pub price_comparison: Vec<PairedValue>,
    /// Active telecom providers
    pub telecom_share: Vec<ChartPoint>,
    /// Cargo weight per lot
    pub expedition_lots: Vec<ChartPoint>,
    /// Cargo weight per company
    pub expedition_by_company: Vec<ChartPoint>,
    /// Ready-to-eat volume per supplier
    pub rte_distribution: Vec<ChartPoint>,
    /// Tenant revenue per category
    pub tenant_radar: Vec<RadarPoint>,
}

/// Tabs of the report page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTab {
    /// Used spices, both regions
    Spice,
    /// Ready-to-eat menus
    ReadyToEat,
    /// Tenants
    Tenant,
    /// Expeditions
    Expedition,
    /// Telecom providers
    Telecom,
    /// Rice supply
    Rice,
}

/// Computes the dashboard figures from the current store contents.
#[must_use]
pub fn generate_dashboard_summary(store: &RecordStore) -> DashboardSummary {
    let total_spice_volume: f64 = Region::ALL
        .iter()
        .map(|region| total_used_volume(store.spice(*region).as_slice()))
        .sum();

    DashboardSummary {
        total_spice_volume,
        total_rte_volume: total_used_volume(store.ready_to_eat().as_slice()),
        total_rice_volume: total_used_volume(store.rice().as_slice()),
        total_cargo_weight: total_weight(store.expeditions().as_slice()),
        total_rent_cost: total_rent_cost(store.tenants().as_slice()),
        average_expedition_income: average_income(store.expeditions().as_slice()),
        active_providers: active_count(store.telecom_active()),
    }
}

/// Computes every chart series for the visualization page.
#[must_use]
pub fn generate_visualization(store: &RecordStore) -> VisualizationData {
    let expeditions = store.expeditions().as_slice();
    VisualizationData {
        price_comparison: price_comparison(
            store.spice(Region::Makkah).as_slice(),
            store.spice(Region::Madinah).as_slice(),
        ),
        telecom_share: telecom_share(store.telecom().as_slice(), store.telecom_active()),
        expedition_lots: expedition_lots(expeditions),
        expedition_by_company: expedition_by_company(expeditions),
        rte_distribution: rte_distribution(store.ready_to_eat().as_slice()),
        tenant_radar: tenant_radar(store.tenants().as_slice()),
    }
}

/// Rows shown on one report tab.
///
/// The spice tab lists only used spices, Makkah first; every other tab lists its whole list.
#[must_use]
pub fn report_rows(store: &RecordStore, tab: ReportTab) -> Vec<RecordRef<'_>> {
    match tab {
        ReportTab::Spice => Region::ALL
            .into_iter()
            .flat_map(|region| {
                store
                    .spice(region)
                    .iter()
                    .filter(|s| s.is_used)
                    .map(move |s| RecordRef::Spice(region, s))
            })
            .collect(),
        ReportTab::ReadyToEat => store.ready_to_eat().iter().map(RecordRef::ReadyToEat).collect(),
        ReportTab::Tenant => store.tenants().iter().map(RecordRef::Tenant).collect(),
        ReportTab::Expedition => store.expeditions().iter().map(RecordRef::Expedition).collect(),
        ReportTab::Telecom => store.telecom().iter().map(RecordRef::Telecom).collect(),
        ReportTab::Rice => store.rice().iter().map(RecordRef::Rice).collect(),
    }
}

/// Formats a volume in tons with one decimal, e.g. `"261.0 Ton"`.
#[must_use]
pub fn format_tonnage(volume: f64) -> String {
    format!("{volume:.1} Ton")
}

impl fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "spice {} | rte {:.0} portions | rice {} | cargo {:.0} kg | rent {:.0} SAR | avg expedition income {:.2} SAR | {} active provider(s)",
            format_tonnage(self.total_spice_volume),
            self.total_rte_volume,
            format_tonnage(self.total_rice_volume),
            self.total_cargo_weight,
            self.total_rent_cost,
            self.average_expedition_income,
            self.active_providers,
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::config::seed::Seed;
    use crate::entities::RecordKind;
    use crate::test_utils::*;

    #[test]
    fn test_empty_store_summary_is_zero() {
        let summary = generate_dashboard_summary(&RecordStore::new());
        assert_eq!(summary.total_spice_volume, 0.0);
        assert_eq!(summary.total_cargo_weight, 0.0);
        assert_eq!(summary.average_expedition_income, 0.0);
        assert_eq!(summary.active_providers, 0);
    }

    #[test]
    fn test_summary_sums_both_spice_regions() {
        let mut store = RecordStore::new();
        store.replace_spice(
            Region::Makkah,
            vec![
                spice(1, "A", true, "10.5", ""),
                spice(2, "B", false, "999", ""),
                spice(3, "C", true, "bad", ""),
            ],
        );
        store.replace_spice(Region::Madinah, vec![spice(1, "A", true, "4.5", "")]);
        let summary = generate_dashboard_summary(&store);
        assert_eq!(summary.total_spice_volume, 15.0);
    }

    #[test]
    fn test_builtin_summary() {
        let store = RecordStore::from_seed(Seed::builtin());
        let summary = generate_dashboard_summary(&store);
        assert_eq!(summary.total_rte_volume, 35000.0);
        assert_eq!(summary.total_cargo_weight, 7100.0);
        assert_eq!(summary.total_rent_cost, 80000.0);
        assert_eq!(summary.total_rice_volume, 0.0);
        assert_eq!(summary.active_providers, 2);
        assert!((summary.total_spice_volume - 2.0 * 260.9).abs() < 1e-9);
    }

    #[test]
    fn test_builtin_visualization() {
        let store = RecordStore::from_seed(Seed::builtin());
        let data = generate_visualization(&store);
        assert_eq!(data.price_comparison.len(), 5);
        assert_eq!(data.price_comparison[0].key, "Bumbu Nasi Kuning");
        assert_eq!(data.price_comparison[0].left, 1500.0);
        assert_eq!(data.price_comparison[0].right, 1400.0);
        assert_eq!(data.telecom_share.len(), 2);
        assert_eq!(data.expedition_lots.len(), 3);
        assert_eq!(data.expedition_by_company[1].label, "Saudia");
        assert_eq!(data.rte_distribution.len(), 3);
        assert_eq!(data.tenant_radar.len(), 3);
    }

    #[test]
    fn test_spice_report_lists_used_rows_makkah_first() {
        let mut store = RecordStore::new();
        store.replace_spice(
            Region::Makkah,
            vec![spice(1, "A", true, "1", ""), spice(2, "B", false, "1", "")],
        );
        store.replace_spice(Region::Madinah, vec![spice(1, "A", true, "1", "")]);

        let rows = report_rows(&store, ReportTab::Spice);
        assert_eq!(rows.len(), 2);
        assert!(matches!(rows[0], RecordRef::Spice(Region::Makkah, r) if r.id == 1));
        assert!(matches!(rows[1], RecordRef::Spice(Region::Madinah, _)));
    }

    #[test]
    fn test_other_report_tabs_list_everything() {
        let store = RecordStore::from_seed(Seed::builtin());
        let rows = report_rows(&store, ReportTab::Telecom);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.kind() == RecordKind::Telecom));
        assert!(report_rows(&store, ReportTab::Rice).is_empty());
    }

    #[test]
    fn test_format_tonnage() {
        assert_eq!(format_tonnage(261.04), "261.0 Ton");
        assert_eq!(format_tonnage(0.0), "0.0 Ton");
    }

    #[test]
    fn test_summary_display_mentions_every_figure() {
        let store = RecordStore::from_seed(Seed::builtin());
        let line = generate_dashboard_summary(&store).to_string();
        assert!(line.contains("cargo 7100 kg"));
        assert!(line.contains("rent 80000 SAR"));
        assert!(line.contains("2 active provider(s)"));
    }
}
