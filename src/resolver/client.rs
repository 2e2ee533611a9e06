//! Client for the three remote JSON services the pipeline consumes:
//! article search, per-article media listing, and file resolution.
//!
//! All three speak the MediaWiki Action API. Search and media listing go to
//! the origin site; file resolution walks an ordered list of hosting
//! backends (the shared media host first, then the origin site) and the
//! first backend that knows the file wins.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::error::FetchError;
use super::types::{plain_text_snippet, MediaReference, ResolvedMedia, SearchHit};

const ORIGIN_API: &str = "https://en.wikipedia.org/w/api.php";
const SHARED_MEDIA_API: &str = "https://commons.wikimedia.org/w/api.php";

// Short per-request timeouts keep one slow hosting backend from stalling a
// whole fan-out batch before the fallback gets its turn.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// A hosting backend that can resolve a media title to a direct URL.
/// Backends are tried in declaration order; adding a third is a data change.
#[derive(Clone, Debug)]
struct FileBackend {
    name: &'static str,
    api_url: String,
}

/// Shared client over the remote services. Cheap to clone.
#[derive(Clone)]
pub struct WikiClient {
    http: Arc<Client>,
    origin_api: String,
    file_backends: Arc<Vec<FileBackend>>,
}

impl WikiClient {
    pub fn new() -> Self {
        Self::with_endpoints(ORIGIN_API, SHARED_MEDIA_API)
    }

    /// Build a client against alternate endpoints. The shared-media backend
    /// stays first in the fallback order, the origin site second.
    pub fn with_endpoints(origin_api: &str, shared_media_api: &str) -> Self {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http: Arc::new(http),
            origin_api: origin_api.to_string(),
            file_backends: Arc::new(vec![
                FileBackend {
                    name: "shared-media",
                    api_url: shared_media_api.to_string(),
                },
                FileBackend {
                    name: "origin",
                    api_url: origin_api.to_string(),
                },
            ]),
        }
    }

    /// Search the corpus, returning hits in the service's ranking order.
    /// Snippets are reduced to plain text before they leave this layer.
    pub async fn search_articles(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<SearchHit>, FetchError> {
        let response = self
            .http
            .get(&self.origin_api)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("format", "json"),
                ("srsearch", query),
            ])
            .query(&[("srlimit", limit)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let envelope: SearchEnvelope = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(format!("search response: {e}")))?;

        let body = envelope
            .query
            .ok_or_else(|| FetchError::Malformed("search response missing query object".into()))?;

        Ok(body
            .search
            .into_iter()
            .map(|raw| SearchHit {
                page_id: raw.pageid,
                title: raw.title,
                snippet: raw
                    .snippet
                    .as_deref()
                    .map(plain_text_snippet)
                    .filter(|s| !s.is_empty()),
            })
            .collect())
    }

    /// List the media references attached to one article, in listing order.
    pub async fn list_article_media(
        &self,
        page_id: u64,
    ) -> Result<Vec<MediaReference>, FetchError> {
        let response = self
            .http
            .get(&self.origin_api)
            .query(&[
                ("action", "query"),
                ("prop", "images"),
                ("format", "json"),
                ("imlimit", "max"),
            ])
            .query(&[("pageids", page_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let envelope: ImagesEnvelope = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(format!("images response: {e}")))?;

        let body = envelope
            .query
            .ok_or_else(|| FetchError::Malformed("images response missing query object".into()))?;

        // A single page was requested, so the pages map holds one entry.
        let mut references = Vec::new();
        for page in body.pages.into_values() {
            if let Some(images) = page.images {
                references.extend(images.into_iter().map(|i| MediaReference { title: i.title }));
            }
        }
        Ok(references)
    }

    /// Resolve a media title to a direct URL and mime type, trying each
    /// hosting backend in priority order. `None` means no backend knows the
    /// file; per-backend failures fall through to the next backend and never
    /// surface to the caller.
    pub async fn resolve_file(&self, media_title: &str) -> Option<ResolvedMedia> {
        for backend in self.file_backends.iter() {
            match self.fetch_file_info(backend, media_title).await {
                Ok(Some(media)) => {
                    tracing::trace!(backend = backend.name, title = media_title, "file resolved");
                    return Some(media);
                }
                Ok(None) => {
                    tracing::trace!(backend = backend.name, title = media_title, "file not found");
                }
                Err(e) => {
                    tracing::debug!(
                        backend = backend.name,
                        title = media_title,
                        error = %e,
                        "file resolution failed"
                    );
                }
            }
        }
        None
    }

    async fn fetch_file_info(
        &self,
        backend: &FileBackend,
        media_title: &str,
    ) -> Result<Option<ResolvedMedia>, FetchError> {
        let response = self
            .http
            .get(&backend.api_url)
            .query(&[
                ("action", "query"),
                ("prop", "imageinfo"),
                ("iiprop", "url|mime"),
                ("format", "json"),
                ("titles", media_title),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let envelope: ImageInfoEnvelope = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(format!("imageinfo response: {e}")))?;

        let body = envelope.query.ok_or_else(|| {
            FetchError::Malformed("imageinfo response missing query object".into())
        })?;

        // Missing files come back as a page without an imageinfo array.
        for page in body.pages.into_values() {
            if let Some(info) = page.imageinfo.and_then(|mut infos| {
                if infos.is_empty() {
                    None
                } else {
                    Some(infos.remove(0))
                }
            }) {
                return Ok(Some(ResolvedMedia {
                    title: media_title.to_string(),
                    url: info.url,
                    mime_type: info.mime,
                }));
            }
        }
        Ok(None)
    }
}

impl Default for WikiClient {
    fn default() -> Self {
        Self::new()
    }
}

// Wire shapes. Unknown fields are ignored, which tracks the services'
// habit of adding keys over time.

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    query: Option<SearchBody>,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    search: Vec<RawSearchHit>,
}

#[derive(Debug, Deserialize)]
struct RawSearchHit {
    pageid: u64,
    title: String,
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImagesEnvelope {
    query: Option<ImagesBody>,
}

#[derive(Debug, Deserialize)]
struct ImagesBody {
    pages: HashMap<String, ImagesPage>,
}

#[derive(Debug, Deserialize)]
struct ImagesPage {
    images: Option<Vec<RawImageRef>>,
}

#[derive(Debug, Deserialize)]
struct RawImageRef {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ImageInfoEnvelope {
    query: Option<ImageInfoBody>,
}

#[derive(Debug, Deserialize)]
struct ImageInfoBody {
    pages: HashMap<String, ImageInfoPage>,
}

#[derive(Debug, Deserialize)]
struct ImageInfoPage {
    imageinfo: Option<Vec<RawImageInfo>>,
}

#[derive(Debug, Deserialize)]
struct RawImageInfo {
    url: String,
    mime: Option<String>,
}
