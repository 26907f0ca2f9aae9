//! Aggregate views - Pure reductions over record lists for dashboards and charts.
//!
//! Every function here is total: malformed or empty numeric strings count as zero, and the
//! same input always yields the same output.

use crate::entities::{
    ActiveFlags, ExpeditionRecord, ReadyToEatRecord, SpiceRecord, TelecomRecord, TenantRecord,
    UsageRecord,
};

/// Category used for tenants with no product type.
pub const UNCATEGORIZED: &str = "Lainnya";

/// Number of used Makkah spices shown in the price comparison.
pub const PRICE_COMPARISON_LIMIT: usize = 5;

/// Radar charts scale their outer ring to the largest value times this factor.
pub const RADAR_HEADROOM: f64 = 1.2;

/// A labelled value for a bar, pie, or line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Axis or slice label
    pub label: String,
    /// Plotted value
    pub value: f64,
}

/// Sum of one category in a group-by.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    /// Category key
    pub category: String,
    /// Sum of values in this category
    pub total: f64,
}

/// Two values joined on a shared key.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedValue {
    /// Shared key, e.g. the spice name
    pub key: String,
    /// Value from the left list
    pub left: f64,
    /// Value from the right list, 0 when the key had no match
    pub right: f64,
}

/// One spoke of a radar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarPoint {
    /// Spoke label
    pub subject: String,
    /// Value on this spoke
    pub value: f64,
    /// Outer ring value shared by every spoke
    pub full_mark: f64,
}

/// Parses a user-entered number.
///
/// Reads the longest leading decimal number (`"12kg"` → 12, `" 3.5e2"` → 350). Empty,
/// non-numeric, or non-finite input yields 0.
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return 0.0;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Sums a derived value over every record.
pub fn sum_by<T>(records: &[T], value: impl Fn(&T) -> f64) -> f64 {
    records.iter().map(value).sum()
}

/// Sum of `volume` over records marked used.
#[must_use]
pub fn total_used_volume<T: UsageRecord>(records: &[T]) -> f64 {
    records
        .iter()
        .filter(|r| r.is_used())
        .map(|r| parse_amount(r.volume()))
        .sum()
}

/// Total shipped cargo weight.
#[must_use]
pub fn total_weight(expeditions: &[ExpeditionRecord]) -> f64 {
    sum_by(expeditions, |e| parse_amount(&e.weight))
}

/// Total rent paid by all tenants.
#[must_use]
pub fn total_rent_cost(tenants: &[TenantRecord]) -> f64 {
    sum_by(tenants, |t| parse_amount(&t.rent_cost))
}

/// Groups records by a derived key and sums a derived value per group.
///
/// Groups appear in the order their key was first seen.
pub fn grouped_total<T>(
    records: &[T],
    key: impl Fn(&T) -> String,
    value: impl Fn(&T) -> f64,
) -> Vec<GroupTotal> {
    let mut groups: Vec<GroupTotal> = Vec::new();
    for record in records {
        let category = key(record);
        let amount = value(record);
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.total += amount,
            None => groups.push(GroupTotal {
                category,
                total: amount,
            }),
        }
    }
    groups
}

/// Tenant category, falling back to [`UNCATEGORIZED`] when empty.
#[must_use]
pub fn tenant_category(tenant: &TenantRecord) -> &str {
    if tenant.product_type.is_empty() {
        UNCATEGORIZED
    } else {
        &tenant.product_type
    }
}

/// Rent revenue per tenant category.
#[must_use]
pub fn tenant_revenue_by_category(tenants: &[TenantRecord]) -> Vec<GroupTotal> {
    grouped_total(
        tenants,
        |t| tenant_category(t).to_string(),
        |t| parse_amount(&t.rent_cost),
    )
}

/// Joins `left` against `right` on a shared key.
///
/// Each left record yields one pair; the first right record with the same key supplies the
/// right value, or 0 if none matches.
pub fn pair_by_name<'a, T, K, V>(
    left: impl IntoIterator<Item = &'a T>,
    right: &[T],
    key: K,
    value: V,
) -> Vec<PairedValue>
where
    T: 'a,
    K: Fn(&T) -> &str,
    V: Fn(&T) -> f64,
{
    left.into_iter()
        .map(|l| {
            let name = key(l);
            let right_value = right.iter().find(|&r| key(r) == name).map_or(0.0, &value);
            PairedValue {
                key: name.to_string(),
                left: value(l),
                right: right_value,
            }
        })
        .collect()
}

/// Price of the first used Makkah spices next to the Madinah price of the same blend.
#[must_use]
pub fn price_comparison(makkah: &[SpiceRecord], madinah: &[SpiceRecord]) -> Vec<PairedValue> {
    pair_by_name(
        makkah
            .iter()
            .filter(|s| s.is_used)
            .take(PRICE_COMPARISON_LIMIT),
        madinah,
        |s| s.name.as_str(),
        |s| parse_amount(&s.price),
    )
}

/// Number of providers flagged active.
#[must_use]
pub fn active_count(flags: &ActiveFlags) -> usize {
    flags.iter().filter(|(_, active)| *active).count()
}

/// Mean shipment income (price per kg × weight) across expeditions.
///
/// An empty list averages to 0.
#[must_use]
pub fn average_income(expeditions: &[ExpeditionRecord]) -> f64 {
    let total = sum_by(expeditions, |e| {
        parse_amount(&e.price_per_kg) * parse_amount(&e.weight)
    });
    // Lists are a few dozen rows; precision loss would need 2^52 records.
    #[allow(clippy::cast_precision_loss)]
    let count = expeditions.len().max(1) as f64;
    total / count
}

/// Volume per supplier for used ready-to-eat menus with a company name.
#[must_use]
pub fn rte_distribution(records: &[ReadyToEatRecord]) -> Vec<ChartPoint> {
    records
        .iter()
        .filter(|r| r.is_used && !r.company_name.is_empty())
        .map(|r| ChartPoint {
            label: r.company_name.clone(),
            value: parse_amount(&r.volume),
        })
        .collect()
}

/// Weight per expedition, labelled with the first word of the company name.
#[must_use]
pub fn expedition_by_company(expeditions: &[ExpeditionRecord]) -> Vec<ChartPoint> {
    expeditions
        .iter()
        .map(|e| ChartPoint {
            label: e.company_name.split(' ').next().unwrap_or_default().to_string(),
            value: parse_amount(&e.weight),
        })
        .collect()
}

/// Weight per expedition, labelled `Lot-1`, `Lot-2`, … in list order.
#[must_use]
pub fn expedition_lots(expeditions: &[ExpeditionRecord]) -> Vec<ChartPoint> {
    expeditions
        .iter()
        .enumerate()
        .map(|(i, e)| ChartPoint {
            label: format!("Lot-{}", i + 1),
            value: parse_amount(&e.weight),
        })
        .collect()
}

/// One equal slice per active provider, in list order.
#[must_use]
pub fn telecom_share(providers: &[TelecomRecord], flags: &ActiveFlags) -> Vec<ChartPoint> {
    providers
        .iter()
        .filter(|p| flags.is_active(p.id))
        .map(|p| ChartPoint {
            label: p.provider_name.clone(),
            value: 1.0,
        })
        .collect()
}

/// Tenant revenue per category as radar spokes sharing one outer ring.
#[must_use]
pub fn tenant_radar(tenants: &[TenantRecord]) -> Vec<RadarPoint> {
    let groups = tenant_revenue_by_category(tenants);
    let max = groups.iter().map(|g| g.total).fold(f64::NEG_INFINITY, f64::max);
    let full_mark = max * RADAR_HEADROOM;
    groups
        .into_iter()
        .map(|g| RadarPoint {
            subject: g.category,
            value: g.total,
            full_mark,
        })
        .collect()
}
