//! SEC EDGAR API client
//!
//! HTTP client for the `submissions` endpoint of data.sec.gov.
//!
//! # Important
//!
//! SEC EDGAR requires a User-Agent header with contact info. Each call to
//! [`SecEdgarClient::get_company`] issues exactly one request; there is no
//! retry and no caching.

use async_trait::async_trait;
use reqwest::Client;

use super::traits::FilingSource;
use super::types::{CompanyFilings, SecCompanySubmissions};
use crate::config::SecEdgarConfig;
use crate::error::FilingsError;

/// SEC EDGAR API client
#[derive(Debug, Clone)]
pub struct SecEdgarClient {
    http: Client,
    api_base: String,
}

impl SecEdgarClient {
    /// Create a new client
    pub fn new(config: &SecEdgarConfig) -> Result<Self, FilingsError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Submissions document URL for a CIK
    pub fn submissions_url(&self, cik: &str) -> String {
        format!("{}/submissions/CIK{}.json", self.api_base, pad_cik(cik))
    }

    /// Get company submissions by CIK
    pub async fn get_company(&self, cik: &str) -> Result<SecCompanySubmissions, FilingsError> {
        if !validate_cik(cik) {
            return Err(FilingsError::InvalidCik(cik.trim().to_string()));
        }

        let url = self.submissions_url(cik);
        tracing::debug!(source = "sec-edgar", cik, %url, "Fetching SEC submissions");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                source = "sec-edgar",
                cik,
                status = status.as_u16(),
                "SEC EDGAR returned non-success status"
            );
            return Err(FilingsError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        let submissions: SecCompanySubmissions = serde_json::from_slice(&body)?;
        Ok(submissions)
    }
}

#[async_trait]
impl FilingSource for SecEdgarClient {
    fn source_id(&self) -> &'static str {
        "sec-edgar"
    }

    async fn fetch_filings(&self, cik: &str) -> Result<CompanyFilings, FilingsError> {
        let submissions = self.get_company(cik).await?;
        let company = submissions.into_company_filings()?;
        tracing::debug!(
            source = "sec-edgar",
            cik,
            company = %company.company_name,
            filings = company.filings.len(),
            "Unpacked recent filings"
        );
        Ok(company)
    }
}

/// Pad CIK to 10 digits
pub fn pad_cik(cik: &str) -> String {
    let digits_only = cik.trim().trim_start_matches('0');
    format!("{:0>10}", digits_only)
}

/// CIK is 1 to 10 digits, not all zeros
pub fn validate_cik(cik: &str) -> bool {
    let digits_only = cik.trim().trim_start_matches('0');
    !digits_only.is_empty()
        && digits_only.len() <= 10
        && digits_only.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_cik() {
        assert_eq!(pad_cik("320193"), "0000320193");
        assert_eq!(pad_cik("0000320193"), "0000320193");
        assert_eq!(pad_cik("1234567890"), "1234567890");
        assert_eq!(pad_cik("1"), "0000000001");
        assert_eq!(pad_cik(" 1601830 "), "0001601830");
    }

    #[test]
    fn test_validate_cik() {
        // Valid CIKs
        assert!(validate_cik("320193"));
        assert!(validate_cik("0000320193"));
        assert!(validate_cik("1"));
        assert!(validate_cik("1234567890"));

        // Invalid CIKs
        assert!(!validate_cik("")); // Empty
        assert!(!validate_cik("0000000000")); // All zeros
        assert!(!validate_cik("12345678901")); // Too long
        assert!(!validate_cik("AAPL")); // Not numeric
    }

    #[test]
    fn test_submissions_url_uses_padded_cik() {
        let config = SecEdgarConfig {
            api_base: "http://localhost:1234/".to_string(),
            ..SecEdgarConfig::default()
        };
        let client = SecEdgarClient::new(&config).unwrap();
        assert_eq!(
            client.submissions_url("320193"),
            "http://localhost:1234/submissions/CIK0000320193.json"
        );
    }

    #[tokio::test]
    async fn test_invalid_cik_short_circuits() {
        let client = SecEdgarClient::new(&SecEdgarConfig::default()).unwrap();
        let err = client.fetch_filings("AAPL").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid CIK: AAPL");
    }
}
