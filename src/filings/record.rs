//! Classified filing records and derived archive links

use serde::{Deserialize, Serialize};

use super::taxonomy::FormTaxonomy;
use crate::config::DEFAULT_SEC_ARCHIVES_BASE;
use crate::sec_edgar::RawFiling;

/// A single classified filing, as served to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingRecord {
    pub date: String,
    pub form: String,
    pub group: String,
    pub accession_number: String,
    pub primary_document: String,
    pub description: String,
    pub link: String,
    pub details_link: String,
}

impl FilingRecord {
    /// Build a record from an upstream row, classifying its form type and
    /// deriving the archive links for `cik`.
    pub fn classify(
        raw: RawFiling,
        cik: &str,
        taxonomy: &FormTaxonomy,
        links: &ArchiveLinks,
    ) -> Self {
        let group = taxonomy.classify(&raw.form).to_string();
        let link = links.document_url(cik, &raw.accession_number, &raw.primary_document);
        let details_link = links.index_url(cik, &raw.accession_number);

        Self {
            date: raw.filing_date,
            form: raw.form,
            group,
            accession_number: raw.accession_number,
            primary_document: raw.primary_document,
            description: raw.description,
            link,
            details_link,
        }
    }

    /// First four characters of the filing date
    pub fn year(&self) -> &str {
        year_of(&self.date)
    }
}

/// Leading four characters of an ISO-8601 date, or the whole string if shorter
pub fn year_of(date: &str) -> &str {
    match date.char_indices().nth(4) {
        Some((idx, _)) => &date[..idx],
        None => date,
    }
}

/// Builder for EDGAR archive URLs
#[derive(Debug, Clone)]
pub struct ArchiveLinks {
    base: String,
}

impl ArchiveLinks {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/{cik}/{accession without dashes}/{document}`
    pub fn document_url(&self, cik: &str, accession_number: &str, document: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base,
            cik.trim(),
            accession_number.replace('-', ""),
            document
        )
    }

    /// `{base}/{cik}/{accession without dashes}/{accession}-index.html`
    pub fn index_url(&self, cik: &str, accession_number: &str) -> String {
        format!(
            "{}/{}/{}/{}-index.html",
            self.base,
            cik.trim(),
            accession_number.replace('-', ""),
            accession_number
        )
    }
}

impl Default for ArchiveLinks {
    fn default() -> Self {
        Self::new(DEFAULT_SEC_ARCHIVES_BASE)
    }
}
