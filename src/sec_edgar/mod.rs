//! SEC EDGAR integration
//!
//! This module provides:
//! - API types for the `submissions` document (column-oriented recent filings)
//! - The column-to-row reshape into [`RawFiling`] rows
//! - A client that fetches one company's filing index per call
//! - The [`FilingSource`] seam the HTTP layer depends on

pub mod client;
pub mod traits;
pub mod types;

pub use client::{pad_cik, validate_cik, SecEdgarClient};
pub use traits::FilingSource;
pub use types::{CompanyFilings, RawFiling, SecCompanySubmissions, SecRecentFilings};
