//! Presenters
//!
//! Pure transformations from domain values to display fragments:
//!
//! - **weather**: `WeatherReading` → `WeatherCard`
//! - **agenda**: `Event` → `AgendaItem`, `EventList` → `Agenda`
//! - **format**: the shared number and time formats
//!
//! HTML fragments come from the askama templates under `templates/`, which
//! escape all user text.
//!
//! Presenters borrow their input and hold no state. Presenting the same value
//! twice yields byte-identical output.

pub mod agenda;
pub mod format;
pub mod weather;

pub use agenda::{present_agenda, present_event, Agenda, AgendaItem};
pub use format::{format_instant, DISPLAY_TIME_FORMAT};
pub use weather::{present_weather, Label, LabelKind, WeatherCard};

/// A presented fragment that can be written out for a host
pub trait Render {
    /// Plain text, one line per label or item
    fn render_text(&self) -> String;

    /// HTML fragment with all user text escaped
    fn render_html(&self) -> askama::Result<String>;
}
