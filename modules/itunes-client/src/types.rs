use serde::Deserialize;

/// Response envelope from the iTunes Search API.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "resultCount", default)]
    pub result_count: u32,
    #[serde(default)]
    pub results: Vec<PodcastResult>,
}

/// One item from the `results` array. Every field is optional on the wire;
/// callers decide which ones they require.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastResult {
    #[serde(default)]
    pub collection_name: Option<String>,
    #[serde(default)]
    pub track_name: Option<String>,
    #[serde(default)]
    pub track_view_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
