//! Record list business logic - Ordered, id-keyed lists and their edit operations.
//!
//! A [`RecordList`] keeps records in insertion order. New ids are derived from the current
//! maximum id, so deleting the highest record and adding again reissues that id.

use crate::{
    entities::{FieldValue, Record},
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Ordered list of one kind of record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordList<T> {
    records: Vec<T>,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> RecordList<T> {
    /// Empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing records, keeping their order.
    #[must_use]
    pub fn from_records(records: Vec<T>) -> Self {
        warn_on_duplicate_ids(&records);
        Self { records }
    }

    /// Current snapshot, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds a record by id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Whether a record with this id exists.
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    /// Id the next added record will receive: max existing id + 1, or 1 when empty.
    ///
    /// When the max id is `i64::MAX`, the smallest unused positive id is issued instead.
    #[must_use]
    pub fn next_id(&self) -> i64 {
        match self.records.iter().map(Record::id).max() {
            None => 1,
            Some(max) => max.checked_add(1).unwrap_or_else(|| self.smallest_unused_id()),
        }
    }

    fn smallest_unused_id(&self) -> i64 {
        let used: HashSet<i64> = self.records.iter().map(Record::id).collect();
        (1..).find(|id| !used.contains(id)).unwrap_or(1)
    }

    /// Appends a blank record and returns its id.
    pub fn add(&mut self) -> i64 {
        let id = self.next_id();
        self.records.push(T::blank(id));
        debug!("Added {} record {}", T::KIND, id);
        id
    }

    /// Removes the record with this id, returning whether one was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        let removed = self.records.len() != before;
        if removed {
            debug!("Removed {} record {}", T::KIND, id);
        }
        removed
    }

    /// Replaces one field of the record with this id.
    ///
    /// # Errors
    /// - [`Error::RecordNotFound`] if no record has this id; the list is unchanged
    /// - [`Error::FieldType`] if the value kind does not fit the field; the record is unchanged
    pub fn update_field(
        &mut self,
        id: i64,
        field: T::Field,
        value: impl Into<FieldValue>,
    ) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(Error::RecordNotFound { kind: T::KIND, id })?;
        record.set_field(field, value.into())?;
        debug!("Updated {:?} on {} record {}", field, T::KIND, id);
        Ok(())
    }

    /// Replaces the whole list.
    pub fn replace(&mut self, records: Vec<T>) {
        warn_on_duplicate_ids(&records);
        self.records = records;
    }

    /// Case-insensitive substring match on each record's label; an empty term keeps all.
    #[must_use]
    pub fn filter_by_name(&self, term: &str) -> Vec<&T> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.label().to_lowercase().contains(&needle))
            .collect()
    }
}

impl<T: Record> From<Vec<T>> for RecordList<T> {
    fn from(records: Vec<T>) -> Self {
        Self::from_records(records)
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn warn_on_duplicate_ids<T: Record>(records: &[T]) {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            warn!("{} list contains duplicate id {}", T::KIND, record.id());
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{
        HotelSiteField, RecordKind, SpiceField, SpiceRecord, TenantField, TenantRecord,
    };
    use crate::test_utils::*;

    fn ids<T: Record>(list: &RecordList<T>) -> Vec<i64> {
        list.iter().map(Record::id).collect()
    }

    #[test]
    fn test_add_to_empty_list_starts_at_one() {
        let mut list: RecordList<TenantRecord> = RecordList::new();
        assert_eq!(list.add(), 1);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(1).unwrap().shop_name, "");
    }

    #[test]
    fn test_add_uses_max_id_not_length() {
        let mut list = RecordList::from_records(vec![
            tenant(3, "Retail", "10"),
            tenant(9, "Retail", "10"),
            tenant(4, "Retail", "10"),
        ]);
        let id = list.add();
        assert_eq!(id, 10);
        assert_eq!(ids(&list), vec![3, 9, 4, 10]);
    }

    #[test]
    fn test_add_after_max_id_reuses_smallest_free_id() {
        let mut list = RecordList::from_records(vec![
            tenant(1, "Retail", "10"),
            tenant(i64::MAX, "Retail", "10"),
            tenant(3, "Retail", "10"),
        ]);
        assert_eq!(list.add(), 2);
        assert_eq!(list.add(), 4);
        assert_eq!(ids(&list), vec![1, i64::MAX, 3, 2, 4]);
    }

    #[test]
    fn test_remove_drops_only_matching_id() {
        let mut list = RecordList::from_records(vec![
            tenant(1, "A", "1"),
            tenant(2, "B", "2"),
            tenant(3, "C", "3"),
        ]);
        assert!(list.remove(2));
        assert_eq!(ids(&list), vec![1, 3]);
        assert!(!list.contains(2));
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut list = RecordList::from_records(vec![tenant(1, "A", "1")]);
        let before = list.clone();
        assert!(!list.remove(42));
        assert_eq!(list, before);
    }

    #[test]
    fn test_removing_highest_then_adding_reissues_id() {
        let mut list = RecordList::from_records(vec![tenant(1, "A", "1"), tenant(2, "B", "2")]);
        list.remove(2);
        assert_eq!(list.add(), 2);
    }

    #[test]
    fn test_update_field_missing_id_leaves_list_unchanged() {
        let mut list = RecordList::from_records(vec![tenant(1, "Retail", "100")]);
        let before = list.clone();
        let result = list.update_field(5, TenantField::RentCost, "999");
        assert!(matches!(
            result,
            Err(Error::RecordNotFound {
                kind: RecordKind::Tenant,
                id: 5
            })
        ));
        assert_eq!(list, before);
    }

    #[test]
    fn test_update_field_changes_only_target_record() {
        let mut list = RecordList::from_records(vec![
            tenant(1, "Retail", "100"),
            tenant(2, "Makanan", "50"),
        ]);
        list.update_field(2, TenantField::RentCost, "75").unwrap();
        list.update_field(2, TenantField::Site(HotelSiteField::HotelName), "Hotel Rawda")
            .unwrap();
        assert_eq!(list.get(1).unwrap().rent_cost, "100");
        assert_eq!(list.get(2).unwrap().rent_cost, "75");
        assert_eq!(list.get(2).unwrap().site.hotel_name, "Hotel Rawda");
    }

    #[test]
    fn test_update_field_type_mismatch_keeps_record() {
        let mut list = RecordList::from_records(vec![spice(1, "Bumbu Gulai", true, "10", "5")]);
        let result = list.update_field(1, SpiceField::IsUsed, "no");
        assert!(matches!(result, Err(Error::FieldType { .. })));
        assert!(list.get(1).unwrap().is_used);
    }

    #[test]
    fn test_filter_by_name_is_case_insensitive() {
        let list: RecordList<SpiceRecord> = RecordList::from_records(vec![
            spice(1, "Bumbu Nasi Kuning", false, "", ""),
            spice(2, "Bumbu Gulai", false, "", ""),
            spice(3, "Bumbu Nasi Goreng", false, "", ""),
        ]);
        let found: Vec<i64> = list.filter_by_name("NASI").iter().map(|r| r.id).collect();
        assert_eq!(found, vec![1, 3]);
        assert_eq!(list.filter_by_name("").len(), 3);
    }

    #[test]
    fn test_replace_swaps_whole_list() {
        let mut list = RecordList::from_records(vec![tenant(1, "A", "1")]);
        list.replace(vec![tenant(7, "B", "2"), tenant(8, "C", "3")]);
        assert_eq!(ids(&list), vec![7, 8]);
        assert_eq!(list.next_id(), 9);
    }
}
