//! Requirement list - the ordered output of requirement extraction

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of requirement strings
///
/// Order matches extraction order and duplicates are kept. An empty list is
/// how the extractor reports that it could not reach the model, so callers
/// must treat it as "extraction failed" rather than "nothing to check".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementList(Vec<String>);

impl RequirementList {
    /// Create a list from already-extracted requirement strings
    ///
    /// # Examples
    ///
    /// ```
    /// use checkmate_domain::RequirementList;
    ///
    /// let list = RequirementList::new(vec!["Cite 5 sources".into(), "Cite 5 sources".into()]);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    /// Number of requirements
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when extraction produced nothing
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the requirements in extraction order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Borrow the requirements as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Render as a 1-based numbered list, one requirement per line
    ///
    /// # Examples
    ///
    /// ```
    /// use checkmate_domain::RequirementList;
    ///
    /// let list = RequirementList::new(vec!["a".into(), "b".into()]);
    /// assert_eq!(list.numbered(), "1. a\n2. b");
    /// ```
    pub fn numbered(&self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(i, req)| format!("{}. {}", i + 1, req))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Consume the list, returning the inner vector
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for RequirementList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl<'a> IntoIterator for &'a RequirementList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RequirementList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numbered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let list = RequirementList::new(vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
        ]);
        assert_eq!(list.as_slice(), &["b", "a", "b"]);
    }

    #[test]
    fn test_numbered_empty() {
        assert_eq!(RequirementList::default().numbered(), "");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let list = RequirementList::new(vec!["one".to_string()]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["one"]"#);
    }
}
