use serde::Deserialize;

use crate::VolumeRecord;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to parse catalog response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct VolumesPayload {
    #[serde(default)]
    items: Option<Vec<Volume>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    #[serde(default)]
    id: String,
    #[serde(default)]
    volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    #[serde(default)]
    authors: Option<Vec<String>>,
    published_date: Option<String>,
    page_count: Option<u32>,
    #[serde(default)]
    categories: Option<Vec<String>>,
    image_links: Option<ImageLinks>,
    description: Option<String>,
    preview_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
}

/// Decode a `/volumes` response body into flat records, keeping catalog order.
///
/// A payload without `items` is an empty result, not an error.
pub fn decode_volumes(bytes: &[u8]) -> Result<Vec<VolumeRecord>, DecodeError> {
    let payload: VolumesPayload = serde_json::from_slice(bytes)?;
    Ok(payload
        .items
        .unwrap_or_default()
        .into_iter()
        .map(into_record)
        .collect())
}

/// Rewrite an insecure `http:` thumbnail link to `https:`.
pub fn secure_cover_url(url: &str) -> String {
    match url.strip_prefix("http:") {
        Some(rest) => format!("https:{rest}"),
        None => url.to_string(),
    }
}

fn into_record(volume: Volume) -> VolumeRecord {
    let info = volume.volume_info.unwrap_or_default();
    VolumeRecord {
        id: volume.id,
        title: present(info.title),
        authors: info.authors.unwrap_or_default(),
        published_date: present(info.published_date),
        page_count: info.page_count,
        category: info
            .categories
            .and_then(|categories| categories.into_iter().next())
            .and_then(|category| present(Some(category))),
        thumbnail: info
            .image_links
            .and_then(|links| present(links.thumbnail))
            .map(|thumb| secure_cover_url(&thumb)),
        description: present(info.description),
        preview_link: present(info.preview_link),
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
