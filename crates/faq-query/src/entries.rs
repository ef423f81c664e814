//! Read-only queries over one materialized entry list.
//!
//! [`Entries`] works for any [`FaqRecord`]. When the record is also a
//! [`JourneyRecord`], the ordered and id-based queries become available.

use faq_core::{FaqRecord, JourneyRecord};

/// Lowercased needle for a free-text query, or `None` when the query is blank.
///
/// A blank query matches everything. Otherwise the query is matched as
/// typed, surrounding whitespace included.
pub(crate) fn search_needle(query: &str) -> Option<String> {
    (!query.trim().is_empty()).then(|| query.to_lowercase())
}

pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Distinct categories of `records`, first-seen order.
pub(crate) fn distinct_categories<'a, T: FaqRecord + 'a>(
    records: impl IntoIterator<Item = &'a T>,
) -> Vec<&'a str> {
    let mut categories: Vec<&str> = Vec::new();
    for record in records {
        let category = record.category();
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

/// An immutable list of entries held for the lifetime of a service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entries<T> {
    items: Vec<T>,
}

impl<T> Entries<T> {
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Every entry, in generation order.
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

impl<T> From<Vec<T>> for Entries<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: FaqRecord> Entries<T> {
    /// Entries whose category equals `category` exactly (case-sensitive).
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&T> {
        self.items
            .iter()
            .filter(|entry| entry.category() == category)
            .collect()
    }

    /// Case-insensitive substring match on question or answer.
    ///
    /// A blank query returns every entry.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&T> {
        let Some(needle) = search_needle(query) else {
            return self.items.iter().collect();
        };
        self.items
            .iter()
            .filter(|entry| {
                contains_folded(entry.question(), &needle) || contains_folded(entry.answer(), &needle)
            })
            .collect()
    }

    /// Distinct categories, first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        distinct_categories(&self.items)
    }
}

impl<T: JourneyRecord> Entries<T> {
    /// Every entry sorted ascending by `order`.
    #[must_use]
    pub fn all_ordered(&self) -> Vec<&T> {
        let mut ordered: Vec<&T> = self.items.iter().collect();
        ordered.sort_by_key(|entry| entry.order());
        ordered
    }

    #[must_use]
    pub fn by_category_ordered(&self, category: &str) -> Vec<&T> {
        let mut ordered = self.by_category(category);
        ordered.sort_by_key(|entry| entry.order());
        ordered
    }

    /// Same matching rules as [`Entries::search`].
    #[must_use]
    pub fn search_journey(&self, query: &str) -> Vec<&T> {
        self.search(query)
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|entry| entry.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use faq_content::{RawRow, generate_journey_entries_from};
    use faq_core::{Audience, FaqEntry, JourneyEntry};
    use pretty_assertions::assert_eq;

    use super::*;

    fn journey(order: u32, category: &str, question: &str) -> JourneyEntry {
        JourneyEntry {
            id: format!("presta-{category}-{order}"),
            order,
            question: question.to_string(),
            answer: String::new(),
            category: category.to_string(),
        }
    }

    fn sample() -> Entries<FaqEntry> {
        Entries::new(vec![
            FaqEntry::new("Comment payer ?", "Par carte bancaire.", "paiement"),
            FaqEntry::new("Comment réserver ?", "Choisissez un créneau.", "reservation"),
            FaqEntry::new("Quand suis-je débité ?", "Après la mission.", "paiement"),
        ])
    }

    #[test]
    fn by_category_is_exact_and_case_sensitive() {
        let entries = sample();
        assert_eq!(entries.by_category("paiement").len(), 2);
        assert!(entries.by_category("Paiement").is_empty());
        assert!(entries.by_category("non-existent").is_empty());
    }

    #[test]
    fn search_ignores_case_and_checks_answer() {
        let entries = sample();
        let hits = entries.search("CARTE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "Comment payer ?");

        let hits = entries.search("comment");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn search_does_not_match_category() {
        assert!(sample().search("reservation").is_empty());
    }

    #[test]
    fn blank_query_returns_everything() {
        let entries = sample();
        assert_eq!(entries.search("").len(), entries.count());
        assert_eq!(entries.search("   \t").len(), entries.count());
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_query() {
        let entries = Entries::new(vec![
            FaqEntry::new("Quelles cartes acceptez-vous ?", "Visa et Mastercard.", "paiement"),
            FaqEntry::new("Puis-je payer par carte ?", "Oui, par carte bancaire.", "paiement"),
        ]);

        let hits = entries.search("carte ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "Puis-je payer par carte ?");
        assert_eq!(entries.search("carte").len(), 2);
    }

    #[test]
    fn categories_are_first_seen_and_distinct() {
        assert_eq!(sample().categories(), vec!["paiement", "reservation"]);
    }

    #[test]
    fn ordered_queries_sort_by_order() {
        let entries = Entries::new(vec![
            journey(3, "avis", "c"),
            journey(1, "inscription", "a"),
            journey(2, "avis", "b"),
        ]);

        let orders: Vec<u32> = entries.all_ordered().iter().map(|e| e.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);

        let orders: Vec<u32> = entries
            .by_category_ordered("avis")
            .iter()
            .map(|e| e.order)
            .collect();
        assert_eq!(orders, vec![2, 3]);
    }

    #[test]
    fn generated_fixture_keeps_category_orders() {
        let row = |category: &str, question: String| RawRow {
            question: Some(question),
            answer: Some(String::from("Réponse.")),
            category: Some(category.to_string()),
            ..RawRow::default()
        };
        let mut rows = Vec::new();
        rows.extend((1..=3).map(|i| row("Inscription", format!("i{i}"))));
        rows.extend((1..=2).map(|i| row("Profil et compte", format!("p{i}"))));
        rows.extend((1..=8).map(|i| row("Services et tarifs", format!("s{i}"))));

        let entries = Entries::new(
            generate_journey_entries_from(Audience::Provider, &rows).expect("rows generate"),
        );
        assert_eq!(entries.count(), 13);

        let orders = |category: &str| -> Vec<u32> {
            entries
                .by_category_ordered(category)
                .iter()
                .map(|e| e.order)
                .collect()
        };
        assert_eq!(orders("Inscription"), vec![1, 2, 3]);
        assert_eq!(orders("Profil et compte"), vec![4, 5]);
        assert_eq!(orders("Services et tarifs"), (6..=13).collect::<Vec<_>>());

        let ids: Vec<&str> = entries
            .by_category_ordered("Profil et compte")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["presta-profil-4", "presta-profil-5"]);
    }

    #[test]
    fn by_id_finds_exact_match_only() {
        let entries = Entries::new(vec![journey(1, "inscription", "a")]);
        assert_eq!(
            entries.by_id("presta-inscription-1").map(|e| e.order),
            Some(1)
        );
        assert!(entries.by_id("presta-inscription").is_none());
        assert!(entries.by_id("nonexistent").is_none());
    }
}
