//! The query-to-playable-audio resolution pipeline.
//!
//! Three chained lookups: search the corpus, list each hit's media, resolve
//! each audio-looking candidate to a direct URL through the backend chain.
//! The stages after search fan out concurrently and rejoin in original
//! order, so output order never depends on completion order.

use futures::future::join_all;
use futures::StreamExt;

use super::client::WikiClient;
use super::error::ResolveError;
use super::types::{has_audio_extension, MediaReference, ResultEntry, SearchHit};

/// How many articles have their media listed and resolved at once.
const MAX_PARALLEL_ARTICLES: usize = 8;

#[derive(Clone)]
pub struct Resolver {
    client: WikiClient,
    file_cap: Option<usize>,
}

impl Resolver {
    pub fn new(client: WikiClient) -> Self {
        Self {
            client,
            file_cap: None,
        }
    }

    /// Cap the number of audio candidates resolved per article.
    /// Unlimited by default.
    pub fn with_file_cap(mut self, cap: usize) -> Self {
        self.file_cap = Some(cap);
        self
    }

    /// Resolve a free-text query to articles with playable audio clips.
    ///
    /// Entries follow the search service's ranking order and each entry's
    /// clips follow the media listing order. Articles for which no clip
    /// survives resolution are omitted, so an empty result after a
    /// successful search means "no articles with playable audio". A blank
    /// query short-circuits to an empty result without any network traffic.
    pub async fn resolve(
        &self,
        query: &str,
        max_hits: u32,
    ) -> Result<Vec<ResultEntry>, ResolveError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(query, max_hits, "resolving query");

        let hits = self
            .client
            .search_articles(query, max_hits)
            .await
            .map_err(|e| {
                tracing::error!(query, error = %e, "search request failed");
                ResolveError::SearchUnavailable(e)
            })?;

        tracing::debug!(query, hits = hits.len(), "search completed");

        // buffered() preserves input order while bounding the fan-out.
        let entries: Vec<Option<ResultEntry>> = futures::stream::iter(hits)
            .map(|hit| self.resolve_hit(hit))
            .buffered(MAX_PARALLEL_ARTICLES)
            .collect()
            .await;

        let entries: Vec<ResultEntry> = entries.into_iter().flatten().collect();
        tracing::info!(query, entries = entries.len(), "resolution completed");
        Ok(entries)
    }

    /// Resolve one search hit to its playable clips. Never fails: listing
    /// or resolution problems degrade to fewer (or zero) clips, and a hit
    /// left with zero clips resolves to `None`.
    async fn resolve_hit(&self, hit: SearchHit) -> Option<ResultEntry> {
        let references = match self.client.list_article_media(hit.page_id).await {
            Ok(references) => references,
            Err(e) => {
                tracing::debug!(
                    page_id = hit.page_id,
                    title = %hit.title,
                    error = %e,
                    "media listing failed, treating as empty"
                );
                Vec::new()
            }
        };

        let candidates: Vec<MediaReference> = references
            .into_iter()
            .filter(|r| has_audio_extension(&r.title))
            .take(self.file_cap.unwrap_or(usize::MAX))
            .collect();

        // All of a hit's candidates resolve in parallel; join_all keeps
        // listing order.
        let resolved = join_all(
            candidates
                .iter()
                .map(|candidate| self.client.resolve_file(&candidate.title)),
        )
        .await;

        let audio_files: Vec<_> = resolved
            .into_iter()
            .flatten()
            .filter(|media| {
                let keep = media.is_audio();
                if !keep {
                    tracing::debug!(
                        title = %media.title,
                        url = %media.url,
                        "resolved file is not audio, dropping"
                    );
                }
                keep
            })
            .collect();

        if audio_files.is_empty() {
            tracing::debug!(
                page_id = hit.page_id,
                title = %hit.title,
                "no playable audio for article"
            );
            return None;
        }

        Some(ResultEntry { hit, audio_files })
    }
}
