//! Search submission and featured-clip loading

use crate::model::{ActiveSection, FeaturedItem};
use crate::resolver::ResultEntry;

use super::AppController;

pub const SEARCH_LIMIT: u32 = 10;

/// Well-known song articles resolved at startup for the sidebar.
const FEATURED_PAGES: &[&str] = &[
    "Viva la Vida",
    "Bohemian Rhapsody",
    "Yesterday (Beatles song)",
    "Imagine (John Lennon song)",
    "Billie Jean",
    "Hotel California",
    "Smells Like Teen Spirit",
    "Like a Rolling Stone",
];

impl AppController {
    /// Run one user-initiated search. Invoked once per explicit submit; a
    /// submit while a search is in flight is ignored, and the generation
    /// token makes sure a superseded search can never commit late results.
    pub async fn perform_search(&self, query: &str) {
        let query = query.trim().to_string();
        if query.is_empty() {
            return;
        }

        let generation = {
            let model = self.model.lock().await;
            if model.is_loading().await {
                tracing::debug!(query = %query, "search already in flight, ignoring submit");
                return;
            }
            model.begin_search().await
        };

        tracing::debug!(query = %query, generation, "performing search");

        match self.resolver.resolve(&query, SEARCH_LIMIT).await {
            Ok(entries) => {
                tracing::info!(
                    query = %query,
                    entries = entries.len(),
                    "search completed successfully"
                );
                let model = self.model.lock().await;
                if model.commit_results(generation, query, entries).await {
                    // Switch to the results section so the list is usable
                    // immediately
                    model.set_active_section(ActiveSection::Results).await;
                }
            }
            Err(e) => {
                tracing::error!(query = %query, error = %e, "search failed");
                let model = self.model.lock().await;
                model
                    .commit_failure(generation, Self::format_error(&e))
                    .await;
            }
        }
    }

    /// Resolve the fixed set of trending pages for the sidebar, keeping the
    /// first playable clip of each. Pages that fail to resolve or have no
    /// audio are skipped; the sidebar just ends up shorter.
    pub async fn load_featured(&self) {
        {
            let model = self.model.lock().await;
            model.set_featured_loading(true).await;
        }

        let results = futures::future::join_all(FEATURED_PAGES.iter().map(|title| async move {
            (*title, self.resolver.resolve(title, 1).await)
        }))
        .await;

        let mut items = Vec::new();
        for (title, result) in results {
            match result {
                Ok(entries) => {
                    if let Some(ResultEntry { hit, audio_files }) = entries.into_iter().next() {
                        if let Some(media) = audio_files.into_iter().next() {
                            items.push(FeaturedItem {
                                article: hit.title,
                                media,
                            });
                        }
                    }
                }
                Err(e) => {
                    tracing::debug!(title, error = %e, "featured page skipped");
                }
            }
        }

        tracing::info!(count = items.len(), "featured clips loaded");
        let model = self.model.lock().await;
        model.set_featured(items).await;
    }
}
