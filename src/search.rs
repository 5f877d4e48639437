use crate::content::PAGES;

/// One searchable page of the hub
#[derive(Debug, Clone, PartialEq)]
pub struct SearchEntry {
    pub title: String,
    pub page: String,
    pub keywords: String,
}

/// Keyword index over the hub's pages. Matching is conjunctive: every
/// whitespace-separated word of the query must occur somewhere in the
/// entry's title or keywords.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    /// Index over the full page registry
    pub fn from_pages() -> Self {
        Self::new(
            PAGES
                .iter()
                .map(|p| SearchEntry {
                    title: p.title.to_string(),
                    page: p.page.to_string(),
                    keywords: p.keywords.to_string(),
                })
                .collect(),
        )
    }

    pub fn query(&self, query: &str) -> Vec<&SearchEntry> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let words: Vec<&str> = needle.split_whitespace().collect();

        self.entries
            .iter()
            .filter(|entry| {
                let haystack = format!("{} {}", entry.title, entry.keywords).to_lowercase();
                words.iter().all(|w| haystack.contains(w))
            })
            .collect()
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::from_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> SearchIndex {
        SearchIndex::new(vec![
            SearchEntry {
                title: "Unit III - Data Structures".into(),
                page: "unit3.html".into(),
                keywords: "list tuple set dictionary comprehension".into(),
            },
            SearchEntry {
                title: "Common Errors".into(),
                page: "errors.html".into(),
                keywords: "error exception syntax runtime name type value index key".into(),
            },
        ])
    }

    #[test]
    fn test_single_word_match() {
        let idx = index();
        let hits = idx.query("tuple");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].page, "unit3.html");
    }

    #[test]
    fn test_all_words_must_match() {
        let idx = index();
        // both words occur in the errors entry, only one in unit3
        assert_eq!(idx.query("syntax error").len(), 1);
        // no entry carries both words
        assert!(idx.query("tuple syntax").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let idx = index();
        assert_eq!(idx.query("TUPLE").len(), 1);
        assert_eq!(idx.query("Data STRUCTURES").len(), 1);
    }

    #[test]
    fn test_title_words_match_too() {
        let idx = index();
        assert_eq!(idx.query("common").len(), 1);
    }

    #[test]
    fn test_blank_query_yields_nothing() {
        let idx = index();
        assert!(idx.query("").is_empty());
        assert!(idx.query("   ").is_empty());
    }

    #[test]
    fn test_no_results() {
        let idx = index();
        assert!(idx.query("quantum").is_empty());
    }

    #[test]
    fn test_from_pages_covers_registry() {
        let idx = SearchIndex::from_pages();
        // "mcq" appears only on the question-bank page
        let hits = idx.query("mcq");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].page, "mcq.html");
    }
}
