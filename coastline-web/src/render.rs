use coastline_booking::ViewCommand;
use coastline_shared::{Section, SummaryField};
use std::fmt::Display;
use std::time::Duration;

/// The display the booking flow and contact form draw on.
///
/// The browser implementation writes to the DOM; tests record calls.
pub trait Surface {
    fn set_visible(&mut self, section: Section, visible: bool);
    fn scroll_to(&mut self, section: Section, after: Duration);
    fn set_text(&mut self, field: SummaryField, text: &str);
    fn highlight_summary(&mut self);
    fn mark_transport(&mut self, key: &str, selected: bool);
    /// Modal message to the visitor
    fn notify(&mut self, message: &str);
    fn reload(&mut self);
}

/// Apply wizard output in order
pub fn apply(surface: &mut impl Surface, commands: Vec<ViewCommand>) {
    for command in commands {
        match command {
            ViewCommand::Reveal(section) => surface.set_visible(section, true),
            ViewCommand::Hide(section) => surface.set_visible(section, false),
            ViewCommand::ScrollTo { section, after } => surface.scroll_to(section, after),
            ViewCommand::RenderSummary(view) => {
                for (field, text) in view.fields() {
                    surface.set_text(field, &text);
                }
            }
            ViewCommand::HighlightSummary => surface.highlight_summary(),
            ViewCommand::MarkTransport { key, selected } => surface.mark_transport(&key, selected),
            ViewCommand::Reload => surface.reload(),
        }
    }
}

/// Apply a transition's commands, or show its rejection to the visitor.
/// Returns whether the transition happened.
pub fn apply_outcome<E: Display>(
    surface: &mut impl Surface,
    outcome: Result<Vec<ViewCommand>, E>,
) -> bool {
    match outcome {
        Ok(commands) => {
            apply(surface, commands);
            true
        }
        Err(rejection) => {
            surface.notify(&rejection.to_string());
            false
        }
    }
}
