use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::labels::{RouteLabels, BUILTIN};

/// Segment that, when it is the only one in the path, names the landing page.
pub const ROOT_SEGMENT: &str = "dashboard";
pub const ROOT_LABEL: &str = "Master Dashboard";
/// Shown instead of raw identifiers.
pub const DETAILS_LABEL: &str = "Details";

static UUID_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{12}$")
        .expect("static uuid pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: String,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Resolve `path` against the builtin label table.
pub fn resolve(path: &str) -> Vec<BreadcrumbItem> {
    BUILTIN.resolve(path)
}

pub fn is_uuid_like(segment: &str) -> bool {
    UUID_LIKE.is_match(segment)
}

/// `cron-job-runs` -> `Cron Job Runs`. Empty words stay empty.
pub fn title_case(segment: &str) -> String {
    segment
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

impl RouteLabels {
    /// Label for a single segment: table entry, then identifier placeholder,
    /// then title-cased segment text.
    pub fn label_for(&self, segment: &str) -> String {
        if let Some(label) = self.get(segment) {
            return label.to_string();
        }
        if is_uuid_like(segment) {
            return DETAILS_LABEL.to_string();
        }
        title_case(segment)
    }

    /// Turn a pathname into its breadcrumb trail.
    ///
    /// Empty segments are dropped, so leading, trailing and repeated slashes
    /// are ignored. Total over all inputs.
    pub fn resolve(&self, path: &str) -> Vec<BreadcrumbItem> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if let [only] = segments.as_slice() {
            if *only == ROOT_SEGMENT {
                return vec![BreadcrumbItem::new(ROOT_LABEL, format!("/{}", ROOT_SEGMENT))];
            }
        }

        let mut href = String::with_capacity(path.len());
        segments
            .iter()
            .map(|segment| {
                href.push('/');
                href.push_str(segment);
                BreadcrumbItem::new(self.label_for(segment), href.clone())
            })
            .collect()
    }
}
