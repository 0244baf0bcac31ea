/// Anime catalog loader
///
/// This module performs the one-shot fetch against the Kitsu API and
/// maps each raw record into the `Anime` shape the UI works with.
/// The fetch happens once per session; there is no retry and no
/// pagination past the first page.

use serde::Deserialize;
use thiserror::Error;

use crate::state::data::Anime;

/// The Kitsu anime catalog endpoint
const CATALOG_ENDPOINT: &str = "https://kitsu.io/api/edge/anime";

/// How many records to request (the first page only)
const PAGE_LIMIT: u32 = 20;

/// Why a catalog load failed
///
/// Everything the transport or the parser can throw is folded into this
/// enum at the fetch boundary, so the rest of the app only ever sees a
/// `FetchError`. The variants carry the underlying cause as text because
/// the error travels inside a UI message and has to be cloneable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Transport-level failure: no connectivity, DNS, timeout
    #[error("network error: {0}")]
    Network(String),
    /// The endpoint answered with a non-success status code
    #[error("catalog endpoint returned HTTP {0}")]
    HttpStatus(u16),
    /// The response body did not have the expected shape
    #[error("malformed catalog response: {0}")]
    MalformedResponse(String),
}

/// Top-level shape of a Kitsu catalog response
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    data: Vec<ApiRecord>,
}

/// One raw record from the API; everything we don't map is discarded
#[derive(Debug, Deserialize)]
struct ApiRecord {
    attributes: Attributes,
}

/// The attribute paths we map. All three are required: a record missing
/// any of them fails the whole load rather than producing a partial item.
#[derive(Debug, Deserialize)]
struct Attributes {
    #[serde(rename = "canonicalTitle")]
    canonical_title: String,
    synopsis: String,
    #[serde(rename = "posterImage")]
    poster_image: PosterImage,
}

#[derive(Debug, Deserialize)]
struct PosterImage {
    small: String,
}

/// Fetch the first page of the anime catalog.
///
/// Issues a single HTTP GET for at most `PAGE_LIMIT` records and
/// normalizes the response. Runs on the async executor so the UI event
/// loop never blocks on the network.
///
/// # Returns
/// * `Ok(animes)` - The normalized catalog, in API response order
/// * `Err(FetchError)` - Transport, status, or shape failure
pub async fn load_catalog() -> Result<Vec<Anime>, FetchError> {
    load_catalog_from(CATALOG_ENDPOINT).await
}

/// Fetch the catalog from an explicit endpoint.
///
/// Same operation as `load_catalog`, with the endpoint as a parameter
/// so tests can point it at an unreachable address.
pub async fn load_catalog_from(endpoint: &str) -> Result<Vec<Anime>, FetchError> {
    let client = reqwest::Client::builder()
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let response = client
        .get(endpoint)
        .query(&[("page[limit]", PAGE_LIMIT)])
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    parse_catalog(&body)
}

/// Normalize a raw response body into the catalog list.
///
/// Mapping is total and order-preserving: record `i` becomes anime `i`,
/// and no record is ever dropped. A body that doesn't deserialize into
/// the expected shape fails the load as `MalformedResponse`.
pub fn parse_catalog(body: &str) -> Result<Vec<Anime>, FetchError> {
    let response: CatalogResponse =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    let animes = response
        .data
        .into_iter()
        .map(|record| Anime {
            name: record.attributes.canonical_title,
            synopsis: record.attributes.synopsis,
            poster_url: record.attributes.poster_image.small,
        })
        .collect();

    Ok(animes)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A well-formed two-record response, trimmed to the fields we map
    /// plus a few extras the API actually sends
    const WELL_FORMED: &str = r#"{
        "data": [
            {
                "id": "1",
                "type": "anime",
                "attributes": {
                    "canonicalTitle": "Naruto",
                    "synopsis": "A young ninja.",
                    "averageRating": "79.9",
                    "posterImage": {
                        "tiny": "https://media.kitsu.io/1/tiny.jpg",
                        "small": "https://media.kitsu.io/1/small.jpg"
                    }
                }
            },
            {
                "id": "2",
                "type": "anime",
                "attributes": {
                    "canonicalTitle": "Bleach",
                    "synopsis": "",
                    "posterImage": {
                        "small": "https://media.kitsu.io/2/small.jpg"
                    }
                }
            }
        ],
        "meta": { "count": 2 }
    }"#;

    #[test]
    fn maps_every_record_in_order() {
        let animes = parse_catalog(WELL_FORMED).unwrap();

        assert_eq!(animes.len(), 2);
        assert_eq!(animes[0].name, "Naruto");
        assert_eq!(animes[0].synopsis, "A young ninja.");
        assert_eq!(animes[0].poster_url, "https://media.kitsu.io/1/small.jpg");
        assert_eq!(animes[1].name, "Bleach");
        assert_eq!(animes[1].synopsis, "");
    }

    #[test]
    fn empty_page_maps_to_empty_catalog() {
        let animes = parse_catalog(r#"{ "data": [] }"#).unwrap();

        assert!(animes.is_empty());
    }

    #[test]
    fn record_missing_poster_image_fails_the_whole_load() {
        let body = r#"{
            "data": [
                {
                    "attributes": {
                        "canonicalTitle": "Naruto",
                        "synopsis": "A young ninja.",
                        "posterImage": { "small": "https://media.kitsu.io/1/small.jpg" }
                    }
                },
                {
                    "attributes": {
                        "canonicalTitle": "Bleach",
                        "synopsis": "A substitute soul reaper."
                    }
                }
            ]
        }"#;

        let result = parse_catalog(body);

        // No partial list: the good first record is not returned either
        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let result = parse_catalog("<html>rate limited</html>");

        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[test]
    fn missing_data_array_is_malformed() {
        let result = parse_catalog(r#"{ "errors": [{ "status": "500" }] }"#);

        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_reports_a_network_error() {
        // Port 9 (discard) is not listening, so the connection fails fast
        let result = load_catalog_from("http://127.0.0.1:9/api/edge/anime").await;

        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
