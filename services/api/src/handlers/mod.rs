pub mod auth;
pub mod category;
pub mod comment;
pub mod genre;
pub mod review;
pub mod title;
pub mod user;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use critica_domain::pagination::PageRequest;

use crate::error::ApiServiceError;

/// Parses a raw query string with serde_qs; a malformed query is a client
/// error, an absent one yields the defaults.
pub(crate) fn parse_query<T>(raw: Option<&str>) -> Result<T, ApiServiceError>
where
    T: DeserializeOwned + Default,
{
    raw.map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ApiServiceError::MissingData)
        .map(Option::unwrap_or_default)
}

/// Common `page` / `per-page` query parameters.
#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct PageQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl PageQuery {
    pub(crate) fn to_page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest {
            per_page: self.per_page.unwrap_or(defaults.per_page),
            page: self.page.unwrap_or(defaults.page),
        }
    }
}
