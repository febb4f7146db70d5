/// Extract the 1-based `page` window of `page_size` items.
///
/// The window is `[(page - 1) * page_size, page * page_size)` clipped to the
/// slice bounds; pages past the end are empty. The pager does not clamp —
/// callers keep page numbers valid (see [`crate::ViewState`]).
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages the collection spans.
///
/// An empty collection still renders one (empty) page, so the result is
/// always at least 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}
