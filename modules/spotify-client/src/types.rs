use serde::Deserialize;

/// Envelope of a `/search?type=show` response.
#[derive(Debug, Deserialize)]
pub struct SearchShowsResponse {
    pub shows: ShowPage,
}

#[derive(Debug, Deserialize)]
pub struct ShowPage {
    #[serde(default)]
    pub items: Vec<Show>,
}

/// A show (podcast) object. Only the fields the aggregation needs.
#[derive(Debug, Clone, Deserialize)]
pub struct Show {
    pub id: String,
    pub name: String,
}

/// Envelope of a `/shows/{id}/episodes` response.
#[derive(Debug, Deserialize)]
pub struct EpisodesResponse {
    #[serde(default)]
    pub items: Vec<Episode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}
