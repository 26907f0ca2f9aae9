//! Cross-list search by record name.

use crate::{
    entities::{RecordRef, Region},
    store::RecordStore,
};

/// Every record whose label contains `term`, ignoring case.
///
/// Results are grouped by list (Makkah spice, Madinah spice, ready-to-eat, tenant,
/// expedition, telecom, rice) and keep each list's order. An empty term matches everything.
#[must_use]
pub fn search<'a>(store: &'a RecordStore, term: &str) -> Vec<RecordRef<'a>> {
    let mut results = Vec::new();
    for region in Region::ALL {
        results.extend(
            store
                .spice(region)
                .filter_by_name(term)
                .into_iter()
                .map(|r| RecordRef::Spice(region, r)),
        );
    }
    results.extend(
        store
            .ready_to_eat()
            .filter_by_name(term)
            .into_iter()
            .map(RecordRef::ReadyToEat),
    );
    results.extend(
        store
            .tenants()
            .filter_by_name(term)
            .into_iter()
            .map(RecordRef::Tenant),
    );
    results.extend(
        store
            .expeditions()
            .filter_by_name(term)
            .into_iter()
            .map(RecordRef::Expedition),
    );
    results.extend(
        store
            .telecom()
            .filter_by_name(term)
            .into_iter()
            .map(RecordRef::Telecom),
    );
    results.extend(store.rice().filter_by_name(term).into_iter().map(RecordRef::Rice));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::seed::Seed;
    use crate::entities::RecordKind;
    use crate::test_utils::*;

    #[test]
    fn test_search_spans_lists_and_tags_region() {
        let mut store = RecordStore::new();
        store.replace_spice(Region::Madinah, vec![spice(4, "Bumbu Rendang", true, "1", "1")]);
        store.replace_ready_to_eat(vec![rte(1, "Rendang Nusantara", true, "10")]);
        store.replace_tenants(vec![tenant(1, "Retail", "10")]);

        let results = search(&store, "rendang");
        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], RecordRef::Spice(Region::Madinah, r) if r.id == 4));
        assert_eq!(results[1].kind(), RecordKind::ReadyToEat);
        assert_eq!(results[1].label(), "Rendang Nusantara");
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let store = RecordStore::from_seed(Seed::builtin());
        assert_eq!(search(&store, "").len(), store.record_count());
    }

    #[test]
    fn test_no_match_is_empty() {
        let store = RecordStore::from_seed(Seed::builtin());
        assert!(search(&store, "zzz-not-a-name").is_empty());
    }
}
