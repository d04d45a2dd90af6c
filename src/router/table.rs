//! Static route table
//!
//! Maps URL paths to top-level views by exact match. The table is built once
//! and has no registration API afterwards.

use serde::Serialize;
use std::collections::BTreeMap;

/// Top-level views of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Weather card and agenda
    Home,
    /// Full event list
    CalendarList,
}

impl View {
    /// Get all views for iteration
    pub fn all() -> &'static [View] {
        &[View::Home, View::CalendarList]
    }

    /// Page title
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::CalendarList => "Calendar",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Home => write!(f, "home"),
            View::CalendarList => write!(f, "calendar_list"),
        }
    }
}

/// Immutable path → view mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<&'static str, View>,
}

impl RouteTable {
    /// The dashboard's routes: `/` and `/calendarlist`
    pub fn new() -> Self {
        let routes = BTreeMap::from([("/", View::Home), ("/calendarlist", View::CalendarList)]);
        Self { routes }
    }

    /// Exact-match lookup. Unknown paths are not an error, just no match.
    pub fn resolve(&self, path: &str) -> Option<View> {
        self.routes.get(path).copied()
    }

    /// Path of a view, for building links
    pub fn path_of(&self, view: View) -> Option<&'static str> {
        self.routes
            .iter()
            .find(|(_, v)| **v == view)
            .map(|(path, _)| *path)
    }

    /// All entries in path order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, View)> + '_ {
        self.routes.iter().map(|(path, view)| (*path, *view))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
