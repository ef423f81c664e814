//! Priority ordering by category.

use faq_core::FaqRecord;

use crate::entries::distinct_categories;

/// Group `entries` by category, listed categories first.
///
/// Categories named in `priority` come first, in that order. The remaining
/// categories follow in first-seen order. Within a category, entries keep
/// their original order. Repeated or unknown slugs in `priority` are ignored,
/// so the result is always a permutation of `entries`.
#[must_use]
pub fn order_by_priority<'a, T, S>(entries: &'a [T], priority: &[S]) -> Vec<&'a T>
where
    T: FaqRecord,
    S: AsRef<str>,
{
    let mut sequence: Vec<&str> = Vec::new();
    for slug in priority {
        let slug: &str = slug.as_ref();
        if !sequence.contains(&slug) {
            sequence.push(slug);
        }
    }
    for category in distinct_categories(entries) {
        if !sequence.contains(&category) {
            sequence.push(category);
        }
    }

    let mut ordered = Vec::with_capacity(entries.len());
    for category in sequence {
        ordered.extend(entries.iter().filter(|entry| entry.category() == category));
    }
    ordered
}
