//! Core business logic - framework-agnostic record editing, aggregation, search and reports.

/// Pure reductions over record lists
pub mod aggregates;
/// Ordered, id-keyed record lists
pub mod records;
/// Dashboard, visualization and report-tab data
pub mod report;
/// Cross-list search by record name
pub mod search;
