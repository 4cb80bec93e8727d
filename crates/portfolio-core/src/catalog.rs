//! In-memory catalog and page load state.
//!
//! The catalog is loaded once per page and owned by the top-level page
//! controller. Session edits ([`Catalog::add_video`], [`Catalog::remove_entry`])
//! only touch this in-memory copy and are gone after a reload.

use crate::error::{CatalogError, CatalogResult, LoadFailure};
use crate::types::{CatalogEntry, EntryId, EntryKind};

/// Ordered list of catalog entries, in the order the resource listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Wrap a loaded entry list verbatim.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries of the given kind.
    pub fn count(&self, kind: &EntryKind) -> usize {
        self.entries.iter().filter(|e| &e.kind == kind).count()
    }

    /// Look up the first entry with this id.
    pub fn get(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Append an entry as-is.
    pub fn push(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    /// Add a video for the rest of this session.
    ///
    /// The new entry gets the next numeric id (one past the highest numeric
    /// id in the catalog) so it sorts as the most recent video.
    pub fn add_video(
        &mut self,
        title: &str,
        description: &str,
        embed_id: &str,
    ) -> CatalogResult<EntryId> {
        let embed_id = embed_id.trim();
        if embed_id.is_empty() {
            return Err(CatalogError::InvalidEntry(
                "embed id must not be empty".to_string(),
            ));
        }

        let id = self.next_id();
        self.entries.push(CatalogEntry::new(
            id.clone(),
            EntryKind::Video,
            title,
            description,
            embed_id,
        ));
        tracing::info!(id = %id, "Added video for this session");
        Ok(id)
    }

    /// Remove the first entry with this id and kind.
    ///
    /// Ids are only unique within a kind in practice (a video and a short
    /// may both be `1`), so the kind is part of the match.
    pub fn remove_entry(&mut self, id: &EntryId, kind: &EntryKind) -> CatalogResult<CatalogEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| &e.id == id && &e.kind == kind)
            .ok_or_else(|| CatalogError::EntryNotFound(format!("{} {}", kind, id)))?;
        let removed = self.entries.remove(index);
        tracing::info!(id = %id, kind = %kind, "Removed entry for this session");
        Ok(removed)
    }

    fn next_id(&self) -> EntryId {
        let max = self
            .entries
            .iter()
            .filter_map(|e| e.id.numeric())
            .fold(0.0_f64, f64::max);
        EntryId::Number(max.floor() + 1.0)
    }
}

/// Where the one catalog load of this page stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Catalog),
    Failed(LoadFailure),
}

impl LoadState {
    pub fn from_result(result: Result<Catalog, LoadFailure>) -> Self {
        match result {
            Ok(catalog) => LoadState::Ready(catalog),
            Err(failure) => LoadState::Failed(failure),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            LoadState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Mutable access for session edits; `None` until the load succeeded.
    pub fn catalog_mut(&mut self) -> Option<&mut Catalog> {
        match self {
            LoadState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            LoadState::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
