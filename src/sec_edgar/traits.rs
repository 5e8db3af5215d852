//! FilingSource trait
//!
//! The abstraction the query pipeline uses to obtain a company's filings.
//! [`SecEdgarClient`](super::SecEdgarClient) is the production source.

use async_trait::async_trait;

use super::types::CompanyFilings;
use crate::error::FilingsError;

#[async_trait]
pub trait FilingSource: Send + Sync {
    /// Short identifier for logs
    fn source_id(&self) -> &'static str;

    /// Fetch the full recent-filing index for one company.
    ///
    /// Every failure (bad status, transport, parse) is returned as a
    /// [`FilingsError`]; implementations never panic on upstream data.
    async fn fetch_filings(&self, cik: &str) -> Result<CompanyFilings, FilingsError>;
}
