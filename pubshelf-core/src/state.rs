use pubshelf_model::{Publication, SortCriteria};

use crate::{page, sort};

/// Enabled state of the four navigation controls, a pure function of
/// `(page, total_pages)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub first: bool,
    pub prev: bool,
    pub next: bool,
    pub last: bool,
}

impl PageControls {
    pub fn derive(page: usize, total_pages: usize) -> Self {
        let back = page > 1;
        let forward = page < total_pages;
        PageControls {
            first: back,
            prev: back,
            next: forward,
            last: forward,
        }
    }
}

/// Session state for the publication view.
///
/// The fetched collection is held for the lifetime of the session; the
/// sorted order is re-derived from it (never mutated in place) when the
/// criteria change. Every transition keeps `page` within
/// `[1, total_pages()]` except [`ViewState::go_to_page`], whose callers
/// supply a valid page by construction.
#[derive(Debug, Clone)]
pub struct ViewState {
    publications: Vec<Publication>,
    sorted: Vec<Publication>,
    criteria: SortCriteria,
    page: usize,
    page_size: usize,
}

impl ViewState {
    /// Start a session on page 1 with the collection sorted per `criteria`.
    /// Page sizes are floored at 1.
    pub fn new(
        publications: Vec<Publication>,
        criteria: SortCriteria,
        page_size: usize,
    ) -> Self {
        let sorted = sort::sort_publications(&publications, criteria);
        ViewState {
            publications,
            sorted,
            criteria,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn criteria(&self) -> SortCriteria {
        self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The full collection in the current sort order.
    pub fn sorted(&self) -> &[Publication] {
        &self.sorted
    }

    pub fn total_pages(&self) -> usize {
        page::total_pages(self.sorted.len(), self.page_size)
    }

    /// Publications on the current page.
    pub fn visible(&self) -> &[Publication] {
        page::paginate(&self.sorted, self.page, self.page_size)
    }

    pub fn controls(&self) -> PageControls {
        PageControls::derive(self.page, self.total_pages())
    }

    /// Re-derive the sorted order under `criteria` and return to page 1.
    pub fn set_sort_criteria(&mut self, criteria: SortCriteria) {
        tracing::debug!(criteria = %criteria, "re-sorting publication list");
        self.criteria = criteria;
        self.sorted = sort::sort_publications(&self.publications, criteria);
        self.page = 1;
    }

    /// Change the page size and return to page 1. Sizes are floored at 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Jump straight to `page`, unclamped. Callers pass 1 or
    /// [`ViewState::total_pages`].
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Move `delta` pages, clamped to `[1, total_pages()]`.
    pub fn shift_page(&mut self, delta: isize) {
        let total = self.total_pages() as isize;
        let shifted = (self.page as isize).saturating_add(delta);
        self.page = shifted.clamp(1, total) as usize;
    }
}
