use maud::{html, Markup};
use serde::Serialize;

use super::labels::RouteLabels;
use super::resolve::BreadcrumbItem;

/// One rendered position in the trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Crumb<'a> {
    Link { label: &'a str, href: &'a str },
    Current { label: &'a str },
}

/// A breadcrumb trail ready for display.
///
/// Either resolved from a pathname or supplied directly by the caller, in
/// which case resolution is skipped entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumbs {
    items: Vec<BreadcrumbItem>,
}

impl Breadcrumbs {
    pub fn for_path(path: &str, labels: &RouteLabels) -> Self {
        Self {
            items: labels.resolve(path),
        }
    }

    /// Use `overrides` when present, otherwise resolve `path`.
    pub fn for_path_or(path: &str, labels: &RouteLabels, overrides: Option<Vec<BreadcrumbItem>>) -> Self {
        match overrides {
            Some(items) => Self::from_items(items),
            None => Self::for_path(path, labels),
        }
    }

    pub fn from_items(items: Vec<BreadcrumbItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items but the last are links; the last marks the current page.
    pub fn crumbs(&self) -> Vec<Crumb<'_>> {
        let last = self.items.len().saturating_sub(1);
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == last {
                    Crumb::Current { label: &item.label }
                } else {
                    Crumb::Link {
                        label: &item.label,
                        href: &item.href,
                    }
                }
            })
            .collect()
    }

    pub fn markup(&self) -> Markup {
        if self.is_empty() {
            return html! {};
        }
        let crumbs = self.crumbs();
        html! {
            nav aria-label="breadcrumb" {
                ol class="breadcrumb" {
                    @for crumb in &crumbs {
                        @match crumb {
                            Crumb::Link { label, href } => {
                                li class="breadcrumb-item" { a href=(href) { (label) } }
                                li class="breadcrumb-separator" aria-hidden="true" { "/" }
                            }
                            Crumb::Current { label } => {
                                li class="breadcrumb-item" {
                                    span aria-current="page" { (label) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.markup().into_string()
    }

    /// `Dashboard / Cronjobs Dashboard`
    pub fn to_text(&self) -> String {
        self.items
            .iter()
            .map(|item| item.label.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}
