//! Incremental merge store for paginated sub-resources
//!
//! Accumulates pages keyed by a parent identifier ("load more reviews")
//! without discarding pages already loaded. Pages merge strictly in
//! ascending order: only `current_page + 1` appends. A page at or below
//! `current_page` refreshes the page count but leaves items alone, and a
//! page further ahead is dropped outright rather than buffered, so items
//! grow monotonically within a session and never reorder.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Accumulated page-ordered state for one parent entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedResource<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl<T> PagedResource<T> {
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Store of paginated sub-resources keyed by parent identifier
pub struct PagedStore<T> {
    entries: RwLock<HashMap<String, PagedResource<T>>>,
}

impl<T> Default for PagedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PagedStore<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Clone + Send + Sync> PagedStore<T> {
    /// Merge one fetched page into the resource for `parent_key`
    ///
    /// First merge creates the resource as-is. Afterwards only the next
    /// sequential page appends; a page already merged refreshes
    /// `total_pages` only, and a page past the next one is a no-op.
    /// Returns the resource state after the merge.
    pub async fn merge_page(
        &self,
        parent_key: &str,
        page: u32,
        items: Vec<T>,
        total_pages: u32,
    ) -> PagedResource<T> {
        let mut entries = self.entries.write().await;
        match entries.entry(parent_key.to_string()) {
            Entry::Vacant(slot) => {
                let resource = PagedResource {
                    items,
                    current_page: page,
                    total_pages,
                };
                slot.insert(resource.clone());
                resource
            }
            Entry::Occupied(mut slot) => {
                let resource = slot.get_mut();
                if page == resource.current_page + 1 {
                    resource.items.extend(items);
                    resource.current_page = page;
                    resource.total_pages = total_pages;
                } else if page <= resource.current_page {
                    log::debug!("page {page} for {parent_key} already merged");
                    resource.total_pages = total_pages;
                } else {
                    log::debug!(
                        "dropping out-of-sequence page {page} for {parent_key} (at {})",
                        resource.current_page
                    );
                }
                resource.clone()
            }
        }
    }

    /// Whether more pages remain for `parent_key` (false when nothing loaded)
    pub async fn has_more(&self, parent_key: &str) -> bool {
        self.entries
            .read()
            .await
            .get(parent_key)
            .map(PagedResource::has_more)
            .unwrap_or(false)
    }

    pub async fn get(&self, parent_key: &str) -> Option<PagedResource<T>> {
        self.entries.read().await.get(parent_key).cloned()
    }

    /// Drop the resource for `parent_key` entirely
    pub async fn reset(&self, parent_key: &str) {
        self.entries.write().await.remove(parent_key);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
