//! Filing classification, filtering and pagination

pub mod query;
pub mod record;
pub mod service;
pub mod taxonomy;

pub use query::{
    apply_query, EmptyResult, FilingQuery, FilingsResponse, PageRequest, QueryResult, MATCH_ALL,
};
pub use record::{ArchiveLinks, FilingRecord};
pub use service::FilingsService;
pub use taxonomy::{FormGroup, FormTaxonomy, FALLBACK_GROUP, SEC_FORM_TAXONOMY};
