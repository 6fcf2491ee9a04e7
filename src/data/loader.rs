use crate::data::geojson::FeatureCollection;
use crate::{MapError, Result};
use once_cell::sync::Lazy;
use reqwest::Client;

/// Shared HTTP client with a custom User-Agent so that plain static hosts
/// and CDNs don't reject the request. Building the client once avoids the
/// cost of TLS and connection pool setup for every asset.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(concat!("travelmap/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build reqwest client")
});

/// Fetches and parses the remote journey document.
///
/// A non-success status or a document that is not a FeatureCollection is an
/// error; per-feature oddities are not checked here (the pipeline skips
/// non-conforming features instead of failing).
pub async fn load_feature_collection(url: &str) -> Result<FeatureCollection> {
    log::debug!("fetching geojson document from {}", url);

    let response = HTTP_CLIENT.get(url).send().await?;
    if !response.status().is_success() {
        return Err(MapError::Http {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    let collection: FeatureCollection = serde_json::from_str(&body)
        .map_err(|e| MapError::Parse(format!("invalid geojson: {}", e)))?;

    log::info!("loaded {} features from {}", collection.features.len(), url);
    Ok(collection)
}

/// Fetches raw bytes, used by backends that manage their own image decode.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let response = HTTP_CLIENT.get(url).send().await?;
    if !response.status().is_success() {
        return Err(MapError::Http {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response.bytes().await?.to_vec())
}
