pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the `page`-th window (1-based) of `items`, at most
/// [`QUESTIONS_PER_PAGE`] long. Pages past the end and pages below 1 are empty.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    let Some(index) = page.checked_sub(1).and_then(|i| usize::try_from(i).ok()) else {
        return &[];
    };
    let start = index.saturating_mul(QUESTIONS_PER_PAGE).min(items.len());
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
