//! Views
//!
//! Each routed view pulls its data from the [`Snapshot`] and hands it to the
//! presenters. A [`Page`] is the presented result; [`render_document`] wraps
//! it in a full HTML document with navigation built from the route table.

use askama::Template;

use crate::presenter::{present_agenda, present_weather, Agenda, Render, WeatherCard};
use crate::router::{RouteTable, View};
use crate::snapshot::Snapshot;

/// How many agenda items the home view shows, first in list order
pub const HOME_AGENDA_LIMIT: usize = 5;

/// Shown on the home view when the snapshot has no weather reading
pub const NO_WEATHER_TEXT: &str = "No weather data";

/// One block of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Weather(WeatherCard),
    Agenda(Agenda),
    Notice(String),
}

impl Render for Section {
    fn render_text(&self) -> String {
        match self {
            Section::Weather(card) => card.render_text(),
            Section::Agenda(agenda) => agenda.render_text(),
            Section::Notice(text) => text.clone(),
        }
    }

    fn render_html(&self) -> askama::Result<String> {
        match self {
            Section::Weather(card) => card.render_html(),
            Section::Agenda(agenda) => agenda.render_html(),
            Section::Notice(text) => NoticeTemplate { text }.render(),
        }
    }
}

#[derive(Template)]
#[template(path = "notice.html")]
struct NoticeTemplate<'a> {
    text: &'a str,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    view: View,
    title: &'a str,
    /// Already rendered, escaped section fragments
    sections: Vec<String>,
}

#[derive(Template)]
#[template(path = "document.html")]
struct DocumentTemplate<'a> {
    title: &'a str,
    nav: Vec<NavLink<'a>>,
    body: String,
}

struct NavLink<'a> {
    class: &'static str,
    href: &'a str,
    title: &'static str,
}

/// A presented view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub view: View,
    pub sections: Vec<Section>,
}

impl Page {
    pub fn title(&self) -> &'static str {
        self.view.title()
    }
}

impl Render for Page {
    fn render_text(&self) -> String {
        let mut blocks = vec![self.title().to_string()];
        blocks.extend(self.sections.iter().map(Render::render_text));
        blocks.join("\n\n")
    }

    fn render_html(&self) -> askama::Result<String> {
        let sections = self
            .sections
            .iter()
            .map(Render::render_html)
            .collect::<askama::Result<Vec<_>>>()?;

        PageTemplate {
            view: self.view,
            title: self.title(),
            sections,
        }
        .render()
    }
}

/// Present a view from the snapshot
pub fn render_view(view: View, snapshot: &Snapshot) -> Page {
    let sections = match view {
        View::Home => {
            let weather = match &snapshot.weather {
                Some(reading) => Section::Weather(present_weather(reading)),
                None => Section::Notice(NO_WEATHER_TEXT.to_string()),
            };

            let mut agenda = present_agenda(&snapshot.events);
            agenda.items.truncate(HOME_AGENDA_LIMIT);

            vec![weather, Section::Agenda(agenda)]
        }
        View::CalendarList => {
            let count = snapshot.events.len();
            let noun = if count == 1 { "event" } else { "events" };
            vec![
                Section::Notice(format!("{} {}", count, noun)),
                Section::Agenda(present_agenda(&snapshot.events)),
            ]
        }
    };

    Page { view, sections }
}

/// Full HTML document for a page, with a navigation bar
pub fn render_document(page: &Page, routes: &RouteTable) -> askama::Result<String> {
    let nav = routes
        .entries()
        .map(|(path, view)| NavLink {
            class: if view == page.view {
                "nav-link active"
            } else {
                "nav-link"
            },
            href: path,
            title: view.title(),
        })
        .collect();

    DocumentTemplate {
        title: page.title(),
        nav,
        body: page.render_html()?,
    }
    .render()
}
