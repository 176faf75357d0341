// src/models/criteria.rs

//! Interest and mute criteria.
//!
//! Every fresh listing is evaluated against these sets: inclusion comes
//! from an author, topic or domain hit, and any mute hit vetoes the result.

use super::Item;

/// User-supplied filter terms, immutable after startup.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// Accepted author handles (exact match)
    pub authors: Vec<String>,

    /// Interesting topic terms, matched against titles (substring)
    pub topics: Vec<String>,

    /// Interesting link domains (substring)
    pub domains: Vec<String>,

    /// Muted terms: exact against authors, substring against titles/domains
    pub muted: Vec<String>,
}

impl Criteria {
    /// Build criteria from raw term lists, trimming whitespace and dropping
    /// empty entries so that an empty term can never match everything.
    pub fn new(
        authors: Vec<String>,
        topics: Vec<String>,
        domains: Vec<String>,
        muted: Vec<String>,
    ) -> Self {
        Self {
            authors: clean_terms(authors),
            topics: clean_terms(topics),
            domains: clean_terms(domains),
            muted: clean_terms(muted),
        }
    }

    /// Whether any inclusion set carries at least one term.
    pub fn has_filters(&self) -> bool {
        !self.authors.is_empty() || !self.topics.is_empty() || !self.domains.is_empty()
    }

    /// Decide whether a listing should be surfaced.
    ///
    /// All comparisons are case-insensitive. Author terms match exactly;
    /// topic and domain terms match as substrings in either direction.
    /// A mute hit on any field wins over every inclusion hit.
    pub fn is_match(&self, item: &Item) -> bool {
        let included = exact_match(&item.author, &self.authors)
            || loose_match(&item.title, &self.topics)
            || loose_match(&item.domain, &self.domains);

        let muted = exact_match(&item.author, &self.muted)
            || loose_match(&item.title, &self.muted)
            || loose_match(&item.domain, &self.muted);

        included && !muted
    }
}

fn clean_terms(terms: Vec<String>) -> Vec<String> {
    terms
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Case-insensitive equality against a term list. Empty lists never match.
fn exact_match(value: &str, terms: &[String]) -> bool {
    if terms.is_empty() {
        return false;
    }
    let value = value.to_lowercase();
    terms.iter().any(|term| term.to_lowercase() == value)
}

/// Case-insensitive substring test in both directions: the term inside the
/// value, or the value inside the term. Empty lists and empty values never
/// match.
fn loose_match(value: &str, terms: &[String]) -> bool {
    if value.is_empty() || terms.is_empty() {
        return false;
    }
    let value = value.to_lowercase();
    terms.iter().any(|term| {
        let term = term.to_lowercase();
        value.contains(&term) || term.contains(&value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(author: &str, title: &str, domain: &str) -> Item {
        Item {
            author: author.to_string(),
            published_at: Some(chrono::Utc::now().fixed_offset()),
            title: title.to_string(),
            path: "/items/1".to_string(),
            domain: domain.to_string(),
        }
    }

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_criteria_never_match() {
        let criteria = Criteria::default();
        assert!(!criteria.is_match(&item("alice", "hello", "example.com")));
    }

    #[test]
    fn author_match_is_exact_and_case_insensitive() {
        let criteria = Criteria::new(terms(&["alice"]), vec![], vec![], vec![]);
        assert!(criteria.is_match(&item("Alice", "hello", "")));
        assert!(!criteria.is_match(&item("alice2", "hello", "")));
        assert!(!criteria.is_match(&item("alic", "hello", "")));
    }

    #[test]
    fn topic_match_is_substring_both_directions() {
        let criteria = Criteria::new(vec![], terms(&["bitcoin"]), vec![], vec![]);
        assert!(criteria.is_match(&item("", "Why Bitcoin matters", "")));
        // title contained in the term
        assert!(criteria.is_match(&item("", "coin", "")));
        assert!(!criteria.is_match(&item("", "fiat news", "")));
    }

    #[test]
    fn domain_match_is_substring() {
        let criteria = Criteria::new(vec![], vec![], terms(&["github.com"]), vec![]);
        assert!(criteria.is_match(&item("", "t", "https://github.com/foo/bar")));
        assert!(!criteria.is_match(&item("", "t", "https://example.org/x")));
    }

    #[test]
    fn empty_domain_never_matches_even_with_empty_term() {
        let criteria = Criteria::new(vec![], vec![], terms(&["", "  "]), vec![]);
        assert!(!criteria.is_match(&item("alice", "hello", "")));
    }

    #[test]
    fn mute_wins_over_topic_hit() {
        let criteria = Criteria::new(vec![], terms(&["hello"]), vec![], terms(&["spam"]));
        assert!(criteria.is_match(&item("", "hello world", "")));
        assert!(!criteria.is_match(&item("", "hello spam world", "")));
    }

    #[test]
    fn mute_wins_across_fields() {
        // included by author, muted by domain
        let criteria = Criteria::new(
            terms(&["alice"]),
            vec![],
            vec![],
            terms(&["tracker.example"]),
        );
        assert!(!criteria.is_match(&item("alice", "t", "https://tracker.example/p")));
    }

    #[test]
    fn author_mute_is_exact() {
        let criteria = Criteria::new(vec![], terms(&["hello"]), vec![], terms(&["bob"]));
        // "bobby" is not an exact author mute hit
        assert!(criteria.is_match(&item("bobby", "hello", "")));
        assert!(!criteria.is_match(&item("Bob", "hello", "")));
    }

    #[test]
    fn terms_are_trimmed() {
        let criteria = Criteria::new(terms(&[" alice "]), vec![], vec![], vec![]);
        assert!(criteria.is_match(&item("alice", "", "")));
    }
}
