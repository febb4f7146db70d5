use std::cmp::Ordering;

use pubshelf_model::{Publication, SortCriteria};

/// Compare two publications under the given criteria.
///
/// Records missing the sorted-on field compare after records that have it,
/// regardless of direction. Ties are left to the caller's stable sort; there
/// is no secondary key.
pub fn compare_publications(
    a: &Publication,
    b: &Publication,
    criteria: SortCriteria,
) -> Ordering {
    match criteria {
        SortCriteria::Latest => compare_optional(a.year, b.year, true),
        SortCriteria::Oldest => compare_optional(a.year, b.year, false),
        SortCriteria::Popular => compare_optional(a.citations, b.citations, true),
    }
}

/// Return a sorted copy; the source collection is never reordered.
pub fn sort_publications(
    publications: &[Publication],
    criteria: SortCriteria,
) -> Vec<Publication> {
    let mut sorted = publications.to_vec();
    sort_publications_in_place(&mut sorted, criteria);
    sorted
}

/// Sort a publication slice in place with a stable sort.
pub fn sort_publications_in_place(
    publications: &mut [Publication],
    criteria: SortCriteria,
) {
    publications.sort_by(|a, b| compare_publications(a, b, criteria));
}

/// Compare optional sort keys, pushing unknowns to the tail regardless of
/// the requested direction.
fn compare_optional<T: Ord>(a: Option<T>, b: Option<T>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            if descending {
                b.cmp(&a)
            } else {
                a.cmp(&b)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
