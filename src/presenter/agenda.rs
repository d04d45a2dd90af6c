//! Agenda presenter
//!
//! Turns calendar events into summary lines. The summary is always rendered
//! in its own node, even when empty, so consumers can locate it. Lists keep
//! the order they were given.

use askama::Template;
use chrono::{DateTime, Utc};

use super::format::{format_instant, machine_instant};
use super::Render;
use crate::domain::{Event, EventList};

/// Shown when an agenda has no items
pub const EMPTY_AGENDA_TEXT: &str = "No upcoming events";

/// A presented event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaItem {
    pub id: String,
    /// Literal event summary
    pub summary: String,
    /// Start time in the display format
    pub when: String,
    pub start: DateTime<Utc>,
}

impl AgendaItem {
    /// Start instant for `<time datetime>`
    pub fn start_iso(&self) -> String {
        machine_instant(&self.start)
    }
}

#[derive(Template)]
#[template(path = "agenda_item.html")]
struct AgendaItemTemplate<'a> {
    item: &'a AgendaItem,
}

/// Present a single event
pub fn present_event(event: &Event) -> AgendaItem {
    let start = event.start.instant();
    AgendaItem {
        id: event.id.clone(),
        summary: event.summary.clone(),
        when: format_instant(&start),
        start,
    }
}

impl Render for AgendaItem {
    fn render_text(&self) -> String {
        format!("{} - {}", self.when, self.summary)
    }

    fn render_html(&self) -> askama::Result<String> {
        AgendaItemTemplate { item: self }.render()
    }
}

/// A presented event list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Agenda {
    pub items: Vec<AgendaItem>,
}

/// Present every event in list order
pub fn present_agenda(events: &EventList) -> Agenda {
    Agenda {
        items: events.iter().map(present_event).collect(),
    }
}

#[derive(Template)]
#[template(path = "agenda.html")]
struct AgendaTemplate<'a> {
    agenda: &'a Agenda,
    empty_text: &'a str,
}

impl Agenda {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Render for Agenda {
    fn render_text(&self) -> String {
        if self.items.is_empty() {
            return EMPTY_AGENDA_TEXT.to_string();
        }
        self.items
            .iter()
            .map(Render::render_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_html(&self) -> askama::Result<String> {
        AgendaTemplate {
            agenda: self,
            empty_text: EMPTY_AGENDA_TEXT,
        }
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 2, 1, 1, 0, 0).unwrap()
    }

    #[test]
    fn test_summary_is_locatable() {
        let item = present_event(&Event::new("1", "do a thing", start()));

        assert!(item.render_text().contains("do a thing"));
        assert!(item
            .render_html()
            .unwrap()
            .contains(r#"<span class="summary">do a thing</span>"#));
    }

    #[test]
    fn test_empty_summary_keeps_node() {
        let item = present_event(&Event::new("1", "", start()));

        assert_eq!(item.render_text(), "2022-02-01 01:00 UTC - ");
        assert!(item
            .render_html()
            .unwrap()
            .contains(r#"<span class="summary"></span>"#));
    }

    #[test]
    fn test_summary_text_is_verbatim() {
        let summary = r#"Lunch <with> "Sam" & co"#;
        let item = present_event(&Event::new("x", summary, start()));

        assert!(item.render_text().contains(summary));

        let html = item.render_html().unwrap();
        assert!(html.contains("Lunch &lt;with&gt;"));
        assert!(html.contains("&amp; co"));
        assert!(!html.contains("<with>"));
        assert!(!html.contains(r#""Sam""#));
    }

    #[test]
    fn test_start_uses_display_format() {
        let item = present_event(&Event::new("1", "standup", start()));

        assert_eq!(item.when, "2022-02-01 01:00 UTC");
        assert!(item
            .render_html()
            .unwrap()
            .contains(r#"<time datetime="2022-02-01T01:00:00Z">2022-02-01 01:00 UTC</time>"#));
    }

    #[test]
    fn test_agenda_preserves_input_order() {
        let events = EventList::new(vec![
            Event::new("3", "third by time", start() + chrono::Duration::days(2)),
            Event::new("1", "first by time", start()),
            Event::new("2", "second by time", start() + chrono::Duration::days(1)),
        ])
        .unwrap();

        let agenda = present_agenda(&events);
        let ids: Vec<_> = agenda.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);

        let text = agenda.render_text();
        let third = text.find("third by time").unwrap();
        let first = text.find("first by time").unwrap();
        assert!(third < first);
    }

    #[test]
    fn test_empty_agenda() {
        let agenda = present_agenda(&EventList::empty());

        assert!(agenda.is_empty());
        assert_eq!(agenda.render_text(), EMPTY_AGENDA_TEXT);
        assert_eq!(
            agenda.render_html().unwrap(),
            r#"<p class="agenda-empty">No upcoming events</p>"#
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let event = Event::new("1", "repeat me", start());
        let first = present_event(&event).render_html().unwrap();

        for _ in 0..5 {
            assert_eq!(present_event(&event).render_html().unwrap(), first);
        }
    }

    #[test]
    fn test_agenda_html_lists_items_in_order() {
        let events = EventList::new(vec![
            Event::new("b", "second", start()),
            Event::new("a", "first", start()),
        ])
        .unwrap();

        let html = present_agenda(&events).render_html().unwrap();
        assert!(html.starts_with(r#"<ul class="agenda">"#));
        assert!(html.ends_with("</ul>"));
        assert_eq!(html.matches(r#"<li class="agenda-item""#).count(), 2);
        let b = html.find(r#"data-event-id="b""#).unwrap();
        let a = html.find(r#"data-event-id="a""#).unwrap();
        assert!(b < a);
    }
}
