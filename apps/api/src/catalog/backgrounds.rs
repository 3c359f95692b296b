//! Hobby → background image lookup for life tools.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::builtin::builtin_backgrounds;
use super::row_store::{BackgroundRow, RowStoreError};

/// Hobby whose images stand in for any hobby without its own entry.
pub const DEFAULT_HOBBY: &str = "fitness";

/// Last resort when even the default hobby has no images.
pub const DEFAULT_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=800&q=80";

/// Immutable after construction; shared read-only across requests.
#[derive(Debug, Clone, Default)]
pub struct BackgroundTable {
    entries: HashMap<String, Vec<String>>,
}

impl BackgroundTable {
    pub fn new(entries: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_backgrounds())
    }

    /// Groups rows by hobby, each list ordered by ascending priority. Rows
    /// with a blank URL are skipped.
    pub fn from_rows(mut rows: Vec<BackgroundRow>) -> Self {
        rows.sort_by_key(|row| row.priority);
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        for row in rows {
            let url = row.image_url.trim();
            if url.is_empty() {
                continue;
            }
            entries
                .entry(row.hobby.trim().to_lowercase())
                .or_default()
                .push(url.to_string());
        }
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    /// Images configured for `hobby`, or the default hobby's images when the
    /// hobby is unknown or has an empty list. May still be empty.
    pub fn images_for(&self, hobby: &str) -> &[String] {
        match self.entries.get(hobby) {
            Some(urls) if !urls.is_empty() => urls,
            _ => self
                .entries
                .get(DEFAULT_HOBBY)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }

    /// Always yields a URL. `index` wraps modulo the list length, so images
    /// repeat once it runs past the end of the table.
    pub fn background_for(&self, hobby: &str, index: usize) -> &str {
        let images = self.images_for(hobby);
        if images.is_empty() {
            return DEFAULT_BACKGROUND;
        }
        &images[index % images.len()]
    }

    /// Every (hobby, images) pair, hobby-sorted. Used when seeding the row store.
    pub fn entries(&self) -> Vec<(&str, &[String])> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(hobby, urls)| (hobby.as_str(), urls.as_slice()))
            .collect();
        entries.sort_by_key(|(hobby, _)| *hobby);
        entries
    }
}

/// Remote provider of the background table. Implemented by the row-store
/// client; tests substitute fixed or failing sources.
#[async_trait]
pub trait BackgroundSource: Send + Sync {
    async fn fetch_backgrounds(&self) -> Result<BackgroundTable, RowStoreError>;
}

/// Read-only background handle shared by every request, mirroring
/// [`super::Catalog`]: remote first, built-in table on any failure.
#[derive(Clone)]
pub struct Backgrounds {
    local: Arc<BackgroundTable>,
    remote: Option<Arc<dyn BackgroundSource>>,
}

impl Backgrounds {
    pub fn new(local: BackgroundTable) -> Self {
        Self {
            local: Arc::new(local),
            remote: None,
        }
    }

    pub fn builtin() -> Self {
        Self::new(BackgroundTable::builtin())
    }

    pub fn with_remote(mut self, remote: Arc<dyn BackgroundSource>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn local_only(&self) -> Self {
        Self {
            local: Arc::clone(&self.local),
            remote: None,
        }
    }

    /// Never fails: a remote error or an empty remote table falls back to the
    /// built-in table for this call.
    pub async fn table(&self) -> Arc<BackgroundTable> {
        let Some(remote) = &self.remote else {
            return Arc::clone(&self.local);
        };

        match remote.fetch_backgrounds().await {
            Ok(table) if !table.is_empty() => {
                debug!(hobbies = table.entries.len(), "Backgrounds served from row store");
                Arc::new(table)
            }
            Ok(_) => {
                warn!("Row store returned no backgrounds, using built-in table");
                Arc::clone(&self.local)
            }
            Err(e) => {
                warn!(error = %e, "Row store unavailable, using built-in backgrounds");
                Arc::clone(&self.local)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) struct FixedBackgrounds(pub Vec<BackgroundRow>);

    #[async_trait]
    impl BackgroundSource for FixedBackgrounds {
        async fn fetch_backgrounds(&self) -> Result<BackgroundTable, RowStoreError> {
            Ok(BackgroundTable::from_rows(self.0.clone()))
        }
    }

    struct FailingBackgrounds;

    #[async_trait]
    impl BackgroundSource for FailingBackgrounds {
        async fn fetch_backgrounds(&self) -> Result<BackgroundTable, RowStoreError> {
            Err(RowStoreError::Api {
                status: 503,
                message: "unavailable".to_string(),
            })
        }
    }

    pub(crate) fn row(hobby: &str, image_url: &str, priority: u32) -> BackgroundRow {
        BackgroundRow {
            hobby: hobby.to_string(),
            image_url: image_url.to_string(),
            priority,
        }
    }

    #[test]
    fn test_from_rows_groups_by_hobby_in_priority_order() {
        let table = BackgroundTable::from_rows(vec![
            row("hiking", "https://img.example/h2.jpg", 2),
            row("chess", "https://img.example/c0.jpg", 0),
            row("hiking", "https://img.example/h0.jpg", 0),
            row("hiking", "  ", 1),
        ]);
        assert_eq!(
            table.images_for("hiking"),
            ["https://img.example/h0.jpg", "https://img.example/h2.jpg"]
        );
        assert_eq!(table.background_for("chess", 5), "https://img.example/c0.jpg");
        assert!(BackgroundTable::from_rows(vec![row("chess", "", 0)]).is_empty());
    }

    #[tokio::test]
    async fn test_remote_backgrounds_are_used() {
        let backgrounds = Backgrounds::builtin().with_remote(Arc::new(FixedBackgrounds(vec![
            row("hiking", "https://img.example/remote.jpg", 0),
        ])));
        let table = backgrounds.table().await;
        assert_eq!(table.background_for("hiking", 3), "https://img.example/remote.jpg");
    }

    #[tokio::test]
    async fn test_failing_remote_falls_back_to_builtin() {
        let backgrounds = Backgrounds::builtin().with_remote(Arc::new(FailingBackgrounds));
        let table = backgrounds.table().await;
        assert_eq!(
            table.background_for("hiking", 0),
            BackgroundTable::builtin().background_for("hiking", 0)
        );
    }

    #[tokio::test]
    async fn test_empty_remote_falls_back_to_builtin() {
        let backgrounds = Backgrounds::builtin().with_remote(Arc::new(FixedBackgrounds(vec![])));
        let table = backgrounds.table().await;
        assert_eq!(table.images_for("gaming"), BackgroundTable::builtin().images_for("gaming"));
    }

    #[tokio::test]
    async fn test_local_only_ignores_remote() {
        let backgrounds = Backgrounds::builtin().with_remote(Arc::new(FixedBackgrounds(vec![
            row("hiking", "https://img.example/remote.jpg", 0),
        ])));
        let table = backgrounds.local_only().table().await;
        assert_ne!(table.background_for("hiking", 0), "https://img.example/remote.jpg");
    }

    #[test]
    fn test_known_hobby_uses_own_images() {
        let table = BackgroundTable::builtin();
        let first = table.background_for("hiking", 0);
        assert!(first.contains("photo-1551632811"));
    }

    #[test]
    fn test_index_wraps_modulo_length() {
        let table = BackgroundTable::builtin();
        let len = table.images_for("hiking").len();
        assert_eq!(
            table.background_for("hiking", 0),
            table.background_for("hiking", len)
        );
    }

    #[test]
    fn test_unknown_hobby_falls_back_to_default_hobby() {
        let table = BackgroundTable::builtin();
        assert_eq!(
            table.background_for("underwater-basket-weaving", 1),
            table.background_for(DEFAULT_HOBBY, 1)
        );
    }

    #[test]
    fn test_always_non_empty_for_any_index() {
        let table = BackgroundTable::builtin();
        for i in 0..50 {
            assert!(!table.background_for("unknown-abc", i).is_empty());
            assert!(!table.background_for("gaming", i).is_empty());
        }
    }

    #[test]
    fn test_empty_table_uses_hardcoded_default() {
        let table = BackgroundTable::default();
        assert_eq!(table.background_for("hiking", 7), DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_empty_entry_falls_back_to_default_hobby() {
        let table = BackgroundTable::new([
            ("chess".to_string(), vec![]),
            (DEFAULT_HOBBY.to_string(), vec!["https://img.example/fit.jpg".to_string()]),
        ]);
        assert_eq!(table.background_for("chess", 3), "https://img.example/fit.jpg");
    }
}
