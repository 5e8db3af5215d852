//! Filtering, facets and pagination over classified records
//!
//! Facets are always computed from the unfiltered set so a client can offer
//! every valid filter value regardless of the current selection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::record::{year_of, FilingRecord};

/// Filter value that disables a filter
pub const MATCH_ALL: &str = "All";

/// A validated, 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
}

impl PageRequest {
    /// Clamp raw values: `page >= 1`, `per_page >= 1`, and
    /// `per_page <= max_per_page` when a cap is configured
    pub fn new(page: i64, per_page: i64, max_per_page: Option<usize>) -> Self {
        let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
        let per_page = usize::try_from(per_page.max(1)).unwrap_or(usize::MAX);
        let per_page = match max_per_page {
            Some(max) => per_page.min(max.max(1)),
            None => per_page,
        };
        Self { page, per_page }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Half-open index range of this page within `total` items
    pub fn bounds(&self, total: usize) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.per_page).min(total);
        let end = start.saturating_add(self.per_page).min(total);
        (start, end)
    }

    /// ceil(total / per_page)
    pub fn pages_total(&self, total: usize) -> usize {
        total.div_ceil(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: crate::config::DEFAULT_PER_PAGE,
        }
    }
}

/// Optional filters plus the requested page
#[derive(Debug, Clone, Default)]
pub struct FilingQuery {
    pub group: Option<String>,
    pub year: Option<String>,
    pub page: PageRequest,
}

impl FilingQuery {
    pub fn new(page: PageRequest) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Active group filter, if any
    pub fn group_filter(&self) -> Option<&str> {
        active_filter(self.group.as_deref())
    }

    /// Active year filter, if any
    pub fn year_filter(&self) -> Option<&str> {
        active_filter(self.year.as_deref())
    }

    pub fn matches(&self, record: &FilingRecord) -> bool {
        self.group_filter().map_or(true, |g| record.group == g)
            && self.year_filter().map_or(true, |y| record.year() == y)
    }
}

fn active_filter(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != MATCH_ALL)
}

/// One page of filtered filings plus facet metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub data: Vec<FilingRecord>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub pages_total: usize,
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(rename = "availableYears")]
    pub available_years: Vec<String>,
    #[serde(rename = "availableGroups")]
    pub available_groups: Vec<String>,
}

/// Response when the company reports no recent filings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResult {
    pub data: Vec<FilingRecord>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

impl EmptyResult {
    pub fn new(page: PageRequest) -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page: page.page(),
            per_page: page.per_page(),
        }
    }
}

/// Successful `/api/filings` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilingsResponse {
    Page(QueryResult),
    Empty(EmptyResult),
}

/// Distinct years, newest first
pub fn available_years(records: &[FilingRecord]) -> Vec<String> {
    let years: BTreeSet<&str> = records.iter().map(|r| year_of(&r.date)).collect();
    years.into_iter().rev().map(str::to_string).collect()
}

/// Distinct groups present in the records, sorted
pub fn available_groups(records: &[FilingRecord]) -> Vec<String> {
    let groups: BTreeSet<&str> = records.iter().map(|r| r.group.as_str()).collect();
    groups.into_iter().map(str::to_string).collect()
}

/// Filter, paginate and attach facets computed from the full record set
pub fn apply_query(
    records: Vec<FilingRecord>,
    query: &FilingQuery,
    company_name: impl Into<String>,
) -> QueryResult {
    let available_years = available_years(&records);
    let available_groups = available_groups(&records);

    let filtered: Vec<FilingRecord> = records.into_iter().filter(|r| query.matches(r)).collect();

    let total = filtered.len();
    let (start, end) = query.page.bounds(total);
    let data = filtered
        .into_iter()
        .skip(start)
        .take(end - start)
        .collect();

    QueryResult {
        data,
        total,
        page: query.page.page(),
        per_page: query.page.per_page(),
        pages_total: query.page.pages_total(total),
        company_name: company_name.into(),
        available_years,
        available_groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(date: &str, group: &str, accession: &str) -> FilingRecord {
        FilingRecord {
            date: date.to_string(),
            form: "8-K".to_string(),
            group: group.to_string(),
            accession_number: accession.to_string(),
            primary_document: "doc.htm".to_string(),
            description: String::new(),
            link: String::new(),
            details_link: String::new(),
        }
    }

    fn numbered(count: usize) -> Vec<FilingRecord> {
        (0..count)
            .map(|i| {
                let year = 2020 + (i % 3);
                let group = if i % 2 == 0 {
                    "Current Reports"
                } else {
                    "Annual Filings"
                };
                record(&format!("{year}-01-15"), group, &format!("acc-{i}"))
            })
            .collect()
    }

    #[test]
    fn test_page_request_clamps() {
        assert_eq!(PageRequest::new(0, 10, None).page(), 1);
        assert_eq!(PageRequest::new(-3, 10, None).page(), 1);
        assert_eq!(PageRequest::new(1, 0, None).per_page(), 1);
        assert_eq!(PageRequest::new(1, -5, None).per_page(), 1);
        assert_eq!(PageRequest::new(1, 5000, Some(100)).per_page(), 100);
        assert_eq!(PageRequest::new(1, 5, Some(0)).per_page(), 1);
    }

    #[test]
    fn test_large_per_page_kept_without_cap() {
        let records: Vec<_> = (0..300)
            .map(|i| record("2024-03-01", "Current Reports", &format!("acc-{i}")))
            .collect();
        let query = FilingQuery::new(PageRequest::new(1, 250, None));
        let result = apply_query(records, &query, "Acme");

        assert_eq!(result.per_page, 250);
        assert_eq!(result.data.len(), 250);
        assert_eq!(result.pages_total, 2);
    }

    #[test]
    fn test_page_bounds_out_of_range() {
        let page = PageRequest::new(10, 10, None);
        assert_eq!(page.bounds(25), (25, 25));
        let huge = PageRequest::new(i64::MAX, 100, None);
        assert_eq!(huge.bounds(25), (25, 25));
    }

    #[test]
    fn test_twenty_five_records_three_pages() {
        let records: Vec<_> = (0..25)
            .map(|i| record("2024-03-01", "Current Reports", &format!("acc-{i}")))
            .collect();

        let sizes: Vec<usize> = (1..=4)
            .map(|page| {
                let query = FilingQuery::new(PageRequest::new(page, 10, None));
                let result = apply_query(records.clone(), &query, "Acme");
                assert_eq!(result.total, 25);
                assert_eq!(result.pages_total, 3);
                result.data.len()
            })
            .collect();

        assert_eq!(sizes, vec![10, 10, 5, 0]);
    }

    #[test]
    fn test_group_filter() {
        let query = FilingQuery::default().with_group("Annual Filings");
        let result = apply_query(numbered(10), &query, "Acme");

        assert_eq!(result.total, 5);
        assert!(result.data.iter().all(|r| r.group == "Annual Filings"));
    }

    #[test]
    fn test_year_filter_is_exact() {
        let records = vec![
            record("2024-01-01", "Current Reports", "a"),
            record("2023-06-30", "Current Reports", "b"),
            record("2024-12-31", "Annual Filings", "c"),
        ];

        let result = apply_query(records.clone(), &FilingQuery::default().with_year("2024"), "Acme");
        assert_eq!(result.total, 2);
        assert!(result.data.iter().all(|r| r.date.starts_with("2024")));

        // A partial year is not a 4-character match
        let result = apply_query(records, &FilingQuery::default().with_year("202"), "Acme");
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_match_all_sentinel_and_blank_disable_filters() {
        let records = numbered(7);
        for value in [MATCH_ALL, "", "  "] {
            let query = FilingQuery::default().with_group(value).with_year(value);
            assert_eq!(apply_query(records.clone(), &query, "Acme").total, 7);
        }
    }

    #[test]
    fn test_filters_compose_with_and() {
        let query = FilingQuery::default()
            .with_group("Current Reports")
            .with_year("2020");
        let result = apply_query(numbered(12), &query, "Acme");

        assert!(result.total > 0);
        assert!(result
            .data
            .iter()
            .all(|r| r.group == "Current Reports" && r.date.starts_with("2020")));
    }

    #[test]
    fn test_facets_ignore_active_filters() {
        let records = numbered(9);
        let unfiltered = apply_query(records.clone(), &FilingQuery::default(), "Acme");
        let filtered = apply_query(
            records,
            &FilingQuery::default()
                .with_group("Annual Filings")
                .with_year("2021"),
            "Acme",
        );

        assert_eq!(unfiltered.available_years, vec!["2022", "2021", "2020"]);
        assert_eq!(
            unfiltered.available_groups,
            vec!["Annual Filings", "Current Reports"]
        );
        assert_eq!(filtered.available_years, unfiltered.available_years);
        assert_eq!(filtered.available_groups, unfiltered.available_groups);
    }

    #[test]
    fn test_empty_result_shape() {
        let value = serde_json::to_value(FilingsResponse::Empty(EmptyResult::new(
            PageRequest::default(),
        )))
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "data": [], "total": 0, "page": 1, "per_page": 10 })
        );
    }

    #[test]
    fn test_query_result_field_names() {
        let result = apply_query(numbered(3), &FilingQuery::default(), "Acme Corp");
        let value = serde_json::to_value(FilingsResponse::Page(result)).unwrap();

        assert_eq!(value["companyName"], "Acme Corp");
        assert_eq!(value["pages_total"], 1);
        assert!(value["availableYears"].is_array());
        assert!(value["availableGroups"].is_array());
    }

    proptest! {
        #[test]
        fn pages_reassemble_filtered_set(count in 0usize..60, per_page in 1i64..15) {
            let records = numbered(count);
            let base = FilingQuery::default().with_group("Current Reports");
            let expected: Vec<_> = records.iter().filter(|r| base.matches(r)).cloned().collect();

            let first = apply_query(
                records.clone(),
                &FilingQuery { page: PageRequest::new(1, per_page, None), ..base.clone() },
                "Acme",
            );
            prop_assert_eq!(first.pages_total, expected.len().div_ceil(per_page as usize));

            let mut collected = Vec::new();
            for page in 1..=first.pages_total {
                let query = FilingQuery { page: PageRequest::new(page as i64, per_page, None), ..base.clone() };
                collected.extend(apply_query(records.clone(), &query, "Acme").data);
            }
            prop_assert_eq!(collected, expected);

            let beyond = FilingQuery {
                page: PageRequest::new(first.pages_total as i64 + 1, per_page, None),
                ..base.clone()
            };
            let result = apply_query(records, &beyond, "Acme");
            prop_assert!(result.data.is_empty());
            prop_assert_eq!(result.total, first.total);
        }
    }
}
