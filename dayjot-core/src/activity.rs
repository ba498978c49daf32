/// Fallback candidates when the config file lists none.
pub const DEFAULT_ACTIVITIES: &[&str] = &["Activity1", "Activity2", "Activity3", "Activity4"];

/// The fixed list of labels a user may choose from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCatalog {
    labels: Vec<String>,
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITIES.iter().map(|s| s.to_string()).collect())
    }
}

impl ActivityCatalog {
    /// Builds a catalog, dropping blank and repeated labels.
    pub fn new(labels: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label.trim();
            if !label.is_empty() && !unique.iter().any(|l| l == label) {
                unique.push(label.to_string());
            }
        }
        Self { labels: unique }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Case-insensitive exact lookup; returns the catalog's spelling.
    pub fn find(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        self.labels
            .iter()
            .find(|l| l.eq_ignore_ascii_case(input))
            .map(String::as_str)
    }

    /// Labels containing `query`, case-insensitively, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        self.labels
            .iter()
            .filter(|l| l.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }

    /// Resolves free input to a single label: an exact match first, then a
    /// unique search hit. Anything ambiguous or unknown is `None`.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        if let Some(label) = self.find(input) {
            return Some(label);
        }
        match self.search(input).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// Activities chosen for the entry being viewed. Lives only as long as the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySelection {
    labels: Vec<String>,
}

impl ActivitySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `label` unless it is `None` or already selected.
    ///
    /// Returns `true` when the selection changed.
    pub fn select(&mut self, label: Option<&str>) -> bool {
        match label {
            Some(label) if !self.contains(label) => {
                self.labels.push(label.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
