//! Search-text and tag filtering shared by the gallery and KB pages.

use crate::data::{Article, ROOT_FOLDER_ID};
use std::collections::BTreeSet;

/// Local filter state: free-text search plus a selected tag set.
///
/// An item passes when the search text (if any) is a case-insensitive
/// substring of its title AND its tags contain every selected tag.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// Current search text; empty means no text filtering.
    pub query: String,
    /// Selected tags; empty means no tag filtering.
    pub selected_tags: BTreeSet<String>,
}

impl Filter {
    /// True when neither search text nor tags are active.
    pub fn is_inactive(&self) -> bool {
        self.query.is_empty() && self.selected_tags.is_empty()
    }

    /// Toggle one tag in or out of the selected set.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }

    /// Check an item against the filter.
    pub fn matches(&self, title: &str, tags: &[String]) -> bool {
        matches(title, tags, &self.query, &self.selected_tags)
    }
}

/// Predicate form of [`Filter::matches`].
pub fn matches(title: &str, tags: &[String], query: &str, selected: &BTreeSet<String>) -> bool {
    if !query.is_empty() {
        let title_lower = title.to_lowercase();
        if !title_lower.contains(&query.to_lowercase()) {
            return false;
        }
    }
    selected.iter().all(|tag| tags.iter().any(|t| t == tag))
}

/// Collect the unique tags across a set of tag lists, sorted by name.
pub fn collect_tags<'a, I>(tag_lists: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut unique: BTreeSet<&str> = BTreeSet::new();
    for tags in tag_lists {
        for tag in tags {
            unique.insert(tag);
        }
    }
    unique.into_iter().map(ToString::to_string).collect()
}

/// Knowledge-base article filtering: folder scope plus [`Filter`].
#[derive(Debug, Clone, Copy)]
pub struct ArticleQuery<'a> {
    /// Active folder id; [`ROOT_FOLDER_ID`] matches every article.
    pub folder_id: &'a str,
    /// Text and tag filter.
    pub filter: &'a Filter,
}

impl ArticleQuery<'_> {
    /// Check one article against folder scope, search text, and tags.
    pub fn passes(&self, article: &Article) -> bool {
        if self.folder_id != ROOT_FOLDER_ID && article.folder_id != self.folder_id {
            return false;
        }
        self.filter.matches(&article.title, &article.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let filter = Filter::default();
        assert!(filter.matches("Anything", &tags(&["a"])));
        assert!(filter.matches("", &[]));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filter = Filter {
            query: "SUN".into(),
            ..Filter::default()
        };
        assert!(filter.matches("Sunset over the bay", &[]));
        assert!(filter.matches("a sunny day", &[]));
        assert!(!filter.matches("Moonrise", &[]));
    }

    #[test]
    fn test_selected_tags_must_all_be_present() {
        let mut filter = Filter::default();
        filter.toggle_tag("nature");
        filter.toggle_tag("evening");
        assert!(filter.matches("x", &tags(&["evening", "nature", "extra"])));
        assert!(!filter.matches("x", &tags(&["nature"])));
    }

    #[test]
    fn test_toggle_tag_roundtrip() {
        let mut filter = Filter::default();
        filter.toggle_tag("a");
        assert!(!filter.is_inactive());
        filter.toggle_tag("a");
        assert!(filter.is_inactive());
    }

    #[test]
    fn test_collect_tags_unique_sorted() {
        let lists = [tags(&["b", "a"]), tags(&["a", "c"])];
        let collected = collect_tags(lists.iter().map(Vec::as_slice));
        assert_eq!(collected, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_article_query_folder_scope() {
        let filter = Filter::default();
        let article = Article {
            id: "a1".into(),
            folder_id: "f1".into(),
            title: "First steps".into(),
            tags: Vec::new(),
            preview: String::new(),
            updated_at: String::new(),
            content_html: String::new(),
        };
        let root = ArticleQuery {
            folder_id: ROOT_FOLDER_ID,
            filter: &filter,
        };
        assert!(root.passes(&article));
        let other = ArticleQuery {
            folder_id: "f2",
            filter: &filter,
        };
        assert!(!other.passes(&article));
    }
}
