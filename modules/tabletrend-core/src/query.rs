//! Fluent builder for the post-search query string.

/// Builds a search query from keyword groups and place/geo operators.
/// Fragments are appended in call order, space separated.
#[derive(Debug, Default)]
pub struct SearchQueryBuilder {
    query: String,
}

impl SearchQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> String {
        self.query.trim_end().to_string()
    }

    /// Match posts containing every one of `keywords`.
    pub fn all_keywords<S: AsRef<str>>(mut self, keywords: &[S]) -> Self {
        let joined = keywords
            .iter()
            .map(|kw| kw.as_ref())
            .collect::<Vec<_>>()
            .join(" AND ");
        self.query.push_str(&format!("({joined}) "));
        self
    }

    /// Match posts containing any of `keywords`.
    pub fn any_keywords<S: AsRef<str>>(mut self, keywords: &[S]) -> Self {
        let joined = keywords
            .iter()
            .map(|kw| kw.as_ref())
            .collect::<Vec<_>>()
            .join(" OR ");
        self.query.push_str(&format!("({joined}) "));
        self
    }

    pub fn hashtag(mut self, tag: &str) -> Self {
        self.query.push_str(&format!("#{tag} "));
        self
    }

    /// Restrict to geo-tagged posts.
    pub fn with_geo(mut self) -> Self {
        self.query.push_str("has:geo ");
        self
    }

    pub fn place(mut self, place: &str) -> Self {
        self.query.push_str(&format!("place:\"{place}\" "));
        self
    }
}
