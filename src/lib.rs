//! SEC filings browser
//!
//! Fetches a company's recent filing index from SEC EDGAR, classifies each
//! filing into a form group, and serves a filtered, paginated view of it.
//!
//! - [`sec_edgar`]: upstream client and the column-to-row reshape
//! - [`filings`]: taxonomy, record construction, filtering and pagination
//! - [`api`]: axum router for `/api/filings` and the static UI

pub mod config;
pub mod error;
pub mod filings;
pub mod sec_edgar;

#[cfg(feature = "server")]
pub mod api;

pub use config::FilingsConfig;
pub use error::{ConfigError, FilingsError};
pub use filings::{FilingQuery, FilingRecord, FilingsResponse, FilingsService, QueryResult};
pub use sec_edgar::{FilingSource, SecEdgarClient};
