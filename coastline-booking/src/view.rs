use crate::summary::SummaryView;
use coastline_shared::Section;
use std::time::Duration;

/// A change to the page produced by a wizard transition.
///
/// The wizard never touches the document; the host applies these in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    Reveal(Section),
    Hide(Section),
    /// Smooth-scroll to a section once `after` has elapsed, giving a freshly
    /// revealed section time to lay out.
    ScrollTo { section: Section, after: Duration },
    RenderSummary(SummaryView),
    HighlightSummary,
    /// Sync a transport option's "selected" class with the session.
    MarkTransport { key: String, selected: bool },
    Reload,
}

impl ViewCommand {
    pub fn is_reveal_of(&self, section: Section) -> bool {
        matches!(self, ViewCommand::Reveal(s) if *s == section)
    }
}
