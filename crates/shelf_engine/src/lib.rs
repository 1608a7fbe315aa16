//! Shelf engine: catalog HTTP client and effect execution.
mod catalog;
mod decode;
mod engine;
mod types;

pub use catalog::{CatalogClient, CatalogSettings, ReqwestCatalogClient, DEFAULT_BASE_URL};
pub use decode::{decode_volumes, secure_cover_url, DecodeError};
pub use engine::EngineHandle;
pub use types::{CatalogError, CatalogEvent, FailureKind, RequestId, VolumeRecord};
