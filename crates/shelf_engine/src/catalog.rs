use std::time::Duration;

use bytes::BytesMut;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use shelf_logging::shelf_debug;
use url::Url;

use crate::decode::decode_volumes;
use crate::{CatalogError, FailureKind, VolumeRecord};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1";

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string()],
        }
    }
}

#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    async fn query(&self, term: &str, max_results: u32)
        -> Result<Vec<VolumeRecord>, CatalogError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalogClient {
    settings: CatalogSettings,
    client: reqwest::Client,
}

impl ReqwestCatalogClient {
    pub fn new(settings: CatalogSettings) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| CatalogError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// `{base}/volumes?q=<term>&maxResults=<n>[&key=<key>]`
    pub fn volumes_url(&self, term: &str, max_results: u32) -> Result<Url, CatalogError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/volumes"))
            .map_err(|err| CatalogError::new(FailureKind::InvalidUrl, err.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", term);
            pairs.append_pair("maxResults", &max_results.to_string());
            if let Some(key) = self.settings.api_key.as_deref() {
                pairs.append_pair("key", key);
            }
        }
        Ok(url)
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn too_large(&self, actual: u64) -> CatalogError {
        CatalogError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl CatalogClient for ReqwestCatalogClient {
    async fn query(
        &self,
        term: &str,
        max_results: u32,
    ) -> Result<Vec<VolumeRecord>, CatalogError> {
        let url = self.volumes_url(term, max_results)?;
        shelf_debug!("Catalog query term_len={} max_results={}", term.len(), max_results);

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        if let Some(ct) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            if !self.is_content_type_allowed(ct) {
                return Err(CatalogError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            body.extend_from_slice(&chunk);
        }

        decode_volumes(&body)
            .map_err(|err| CatalogError::new(FailureKind::MalformedBody, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> CatalogError {
    if err.is_timeout() {
        return CatalogError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return CatalogError::new(FailureKind::MalformedBody, err.to_string());
    }
    CatalogError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: Option<&str>) -> ReqwestCatalogClient {
        ReqwestCatalogClient::new(CatalogSettings {
            base_url: "https://catalog.example.com/books/v1/".to_string(),
            api_key: api_key.map(ToOwned::to_owned),
            ..CatalogSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn volumes_url_encodes_term_and_key() {
        let url = client(Some("k3y")).volumes_url("desert memoir & more", 12).unwrap();
        assert_eq!(
            url.as_str(),
            "https://catalog.example.com/books/v1/volumes?q=desert+memoir+%26+more&maxResults=12&key=k3y"
        );
    }

    #[test]
    fn volumes_url_omits_missing_key() {
        let url = client(None).volumes_url("dune", 3).unwrap();
        assert_eq!(
            url.as_str(),
            "https://catalog.example.com/books/v1/volumes?q=dune&maxResults=3"
        );
    }

    #[test]
    fn content_type_parameters_are_ignored() {
        let client = client(None);
        assert!(client.is_content_type_allowed("application/json; charset=UTF-8"));
        assert!(!client.is_content_type_allowed("text/html"));
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let client = ReqwestCatalogClient::new(CatalogSettings {
            base_url: "not a url".to_string(),
            ..CatalogSettings::default()
        })
        .unwrap();
        let err = client.volumes_url("dune", 1).unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
