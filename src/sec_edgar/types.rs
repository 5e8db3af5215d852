//! SEC EDGAR submissions response types
//!
//! Reference: https://data.sec.gov/submissions/CIK##########.json
//!
//! The `filings.recent` block is column-oriented: one array per field, all
//! indexed by filing position. Only the columns we surface are mapped.

use serde::{Deserialize, Serialize};

use crate::error::FilingsError;

/// Company name reported when the upstream document omits one
pub const UNKNOWN_COMPANY: &str = "Unknown";

/// Top-level submissions document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SecCompanySubmissions {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub filings: Option<SecFilings>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SecFilings {
    #[serde(default)]
    pub recent: Option<SecRecentFilings>,
}

/// Parallel arrays of the most recent filings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecRecentFilings {
    #[serde(default)]
    pub filing_date: Vec<String>,
    #[serde(default)]
    pub form: Vec<String>,
    #[serde(default)]
    pub accession_number: Vec<String>,
    #[serde(default)]
    pub primary_document: Vec<String>,
    #[serde(default)]
    pub primary_doc_description: Vec<String>,
}

/// One filing row, before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFiling {
    pub filing_date: String,
    pub form: String,
    pub accession_number: String,
    pub primary_document: String,
    pub description: String,
}

/// Successful fetch result: company name plus row-oriented filings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyFilings {
    pub company_name: String,
    pub filings: Vec<RawFiling>,
}

impl SecRecentFilings {
    /// Transpose the column arrays into rows.
    ///
    /// `filingDate` drives the row count. Form, accession and document
    /// columns must cover every date; descriptions may be short and are
    /// padded with empty strings.
    pub fn into_rows(self) -> Result<Vec<RawFiling>, FilingsError> {
        let expected = self.filing_date.len();
        for (column, found) in [
            ("form", self.form.len()),
            ("accessionNumber", self.accession_number.len()),
            ("primaryDocument", self.primary_document.len()),
        ] {
            if found < expected {
                return Err(FilingsError::MalformedColumns {
                    column,
                    expected,
                    found,
                });
            }
        }

        let descriptions = self
            .primary_doc_description
            .into_iter()
            .chain(std::iter::repeat_with(String::new));

        let rows = self
            .filing_date
            .into_iter()
            .zip(self.form)
            .zip(self.accession_number)
            .zip(self.primary_document)
            .zip(descriptions)
            .map(
                |((((filing_date, form), accession_number), primary_document), description)| {
                    RawFiling {
                        filing_date,
                        form,
                        accession_number,
                        primary_document,
                        description,
                    }
                },
            )
            .collect();

        Ok(rows)
    }
}

impl SecCompanySubmissions {
    pub fn company_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_COMPANY)
    }

    /// Reshape into row-oriented filings. A missing `filings.recent` block
    /// yields an empty filing list.
    pub fn into_company_filings(self) -> Result<CompanyFilings, FilingsError> {
        let company_name = self.company_name().to_string();
        let filings = match self.filings.and_then(|f| f.recent) {
            Some(recent) => recent.into_rows()?,
            None => Vec::new(),
        };

        Ok(CompanyFilings {
            company_name,
            filings,
        })
    }
}
