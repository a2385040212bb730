/// Live, case-insensitive substring filter over record titles.
#[derive(Clone, Debug, Default)]
pub struct SearchFilter {
    query: String,
}

impl SearchFilter {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Results are only shown while there is something to search for.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn matches(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.query.to_lowercase())
    }

    /// Recomputed from scratch on every call, in list order.
    pub fn filter<'a, T>(&self, items: &'a [T], title: impl Fn(&T) -> &str) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| self.matches(title(item)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/picker/search_tests.rs"]
mod tests;
