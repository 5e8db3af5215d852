//! Fetch → classify → filter → paginate
//!
//! One call issues exactly one upstream fetch; nothing is cached between
//! calls.

use std::sync::Arc;

use super::query::{apply_query, EmptyResult, FilingQuery, FilingsResponse};
use super::record::{ArchiveLinks, FilingRecord};
use super::taxonomy::FormTaxonomy;
use crate::error::FilingsError;
use crate::sec_edgar::FilingSource;

pub struct FilingsService {
    source: Arc<dyn FilingSource>,
    taxonomy: &'static FormTaxonomy,
    links: ArchiveLinks,
}

impl FilingsService {
    pub fn new(source: Arc<dyn FilingSource>, links: ArchiveLinks) -> Self {
        Self {
            source,
            taxonomy: FormTaxonomy::sec(),
            links,
        }
    }

    /// Build the filings view for one company
    pub async fn browse(
        &self,
        cik: &str,
        query: &FilingQuery,
    ) -> Result<FilingsResponse, FilingsError> {
        let company = self.source.fetch_filings(cik).await?;

        if company.filings.is_empty() {
            tracing::info!(
                source = self.source.source_id(),
                cik,
                "No recent filings reported"
            );
            return Ok(FilingsResponse::Empty(EmptyResult::new(query.page)));
        }

        let records: Vec<FilingRecord> = company
            .filings
            .into_iter()
            .map(|raw| FilingRecord::classify(raw, cik, self.taxonomy, &self.links))
            .collect();

        let result = apply_query(records, query, company.company_name);
        tracing::info!(
            source = self.source.source_id(),
            cik,
            group = query.group_filter().unwrap_or("All"),
            year = query.year_filter().unwrap_or("All"),
            total = result.total,
            page = result.page,
            pages_total = result.pages_total,
            "Served filings page"
        );

        Ok(FilingsResponse::Page(result))
    }
}
