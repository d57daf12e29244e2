use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::domain::models::{
    SearchResponse, Season, SeasonsResponse, Series, SeriesResponse, Weapon, WeaponsResponse,
};
use crate::infra::pagination::merge_pages;

pub const STAPI_API_BASE: &str = "http://stapi.co/api/v1/rest/";

#[derive(Debug, Error)]
pub enum StapiError {
    #[error("invalid endpoint {endpoint} for base {base}: {source}")]
    Url {
        base: String,
        endpoint: String,
        source: url::ParseError,
    },
    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },
    #[error("STAPI {endpoint} search failed: HTTP {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },
    #[error("malformed {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct StapiClient {
    http: reqwest::Client,
    base_url: Url,
    page_size: Option<u32>,
}

impl StapiClient {
    pub fn new(base_url: Url, page_size: Option<u32>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            page_size,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// One `GET <base>/<endpoint>/search` call.
    pub async fn search<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        sort: &str,
        page_number: Option<u32>,
    ) -> Result<R, StapiError> {
        let path = format!("{endpoint}/search");
        let mut url = self.base_url.join(&path).map_err(|source| StapiError::Url {
            base: self.base_url.to_string(),
            endpoint: endpoint.to_string(),
            source,
        })?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("sort", sort);
            if let Some(page_number) = page_number {
                query.append_pair("pageNumber", &page_number.to_string());
            }
            if let Some(page_size) = self.page_size {
                query.append_pair("pageSize", &page_size.to_string());
            }
        }

        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| StapiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StapiError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| StapiError::Transport {
                url: url.to_string(),
                source,
            })?;
        serde_json::from_str(&body).map_err(|source| StapiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Every record of a search, pages merged in order.
    pub async fn search_all<R>(&self, endpoint: &str, sort: &str) -> Result<Vec<R::Item>, StapiError>
    where
        R: SearchResponse + DeserializeOwned,
    {
        let first: R = self.search(endpoint, sort, None).await?;
        if let Some(page) = first.page() {
            tracing::info!(
                endpoint,
                total = page.total_elements,
                pages = page.total_pages,
                "search results"
            );
        }
        merge_pages(first, |page_number| {
            self.search::<R>(endpoint, sort, Some(page_number))
        })
        .await
    }

    pub async fn fetch_seasons(&self) -> Result<Vec<Season>, StapiError> {
        self.search_all::<SeasonsResponse>("season", "title,ASC").await
    }

    pub async fn fetch_series(&self) -> Result<Vec<Series>, StapiError> {
        self.search_all::<SeriesResponse>("series", "title,ASC").await
    }

    pub async fn fetch_weapons(&self) -> Result<Vec<Weapon>, StapiError> {
        self.search_all::<WeaponsResponse>("weapon", "uid,ASC").await
    }
}
