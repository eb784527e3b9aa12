use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Known route segments and the label shown for them in the breadcrumb trail.
const BUILTIN_LABELS: &[(&str, &str)] = &[
    ("dashboard", "Dashboard"),
    ("cronjobs", "Cronjobs"),
    ("cronjobs-dashboard", "Cronjobs Dashboard"),
    ("health", "Health"),
    ("health-dashboard", "Health Dashboard"),
    ("search", "Search"),
    ("billing", "Billing"),
    ("profile", "Profile"),
    ("settings", "Settings"),
    ("projects", "Projects"),
    ("new", "New"),
    ("edit", "Edit"),
];

pub static BUILTIN: Lazy<RouteLabels> = Lazy::new(RouteLabels::builtin);

/// Immutable segment -> label table used by the breadcrumb resolver.
///
/// Built once at startup (builtin entries plus anything configured) and only
/// read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLabels {
    labels: HashMap<String, String>,
}

impl RouteLabels {
    pub fn empty() -> Self {
        Self { labels: HashMap::new() }
    }

    pub fn builtin() -> Self {
        Self::empty().with_entries(BUILTIN_LABELS.iter().copied())
    }

    /// Add (or replace) a single entry.
    pub fn with_label(mut self, segment: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(segment.into(), label.into());
        self
    }

    pub fn with_entries<I, S, L>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: Into<String>,
    {
        self.labels
            .extend(entries.into_iter().map(|(s, l)| (s.into(), l.into())));
        self
    }

    pub fn get(&self, segment: &str) -> Option<&str> {
        self.labels.get(segment).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Entries sorted by segment, for stable listings.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .labels
            .iter()
            .map(|(s, l)| (s.as_str(), l.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Default for RouteLabels {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Parse `segment=Label` pairs separated by commas.
///
/// Blank pairs are skipped; pairs without `=` or with an empty segment are
/// skipped with a warning rather than failing startup.
pub fn parse_label_pairs(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| match pair.split_once('=') {
            Some((segment, label)) if !segment.trim().is_empty() => {
                Some((segment.trim().to_string(), label.trim().to_string()))
            }
            _ => {
                tracing::warn!("Ignoring malformed navigation label entry: {}", pair);
                None
            }
        })
        .collect()
}
