use std::fmt;

pub type RequestId = u64;

/// One catalog volume, flattened from the nested `volumeInfo` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VolumeRecord {
    pub id: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub published_date: Option<String>,
    pub page_count: Option<u32>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub preview_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    QueryCompleted {
        request_id: RequestId,
        term: String,
        result: Result<Vec<VolumeRecord>, CatalogError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogError {
    pub kind: FailureKind,
    pub message: String,
}

impl CatalogError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    MalformedBody,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::MalformedBody => write!(f, "malformed response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
