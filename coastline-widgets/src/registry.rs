use coastline_shared::markup::{by_id, id, selector};

/// The independently initialized widgets a page can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    GridCarousel,
    HeroCarousel,
    BookingWizard,
    ContactForm,
    FaqAccordion,
}

/// Read-only view of the document used to decide which widgets to wire.
pub trait PageProbe {
    /// Whether any element matches `selector`
    fn exists(&self, selector: &str) -> bool;

    /// Number of elements matching `selector`
    fn count(&self, selector: &str) -> usize;

    /// Number of child elements of the first match, 0 when nothing matches
    fn child_count(&self, selector: &str) -> usize;
}

const BOOKING_TRIGGERS: [&str; 7] = [
    id::START_BOOKING,
    id::SEARCH_LODGING,
    id::COMPLETE_BOOKING,
    id::RETURN_HOME,
    id::CHECK_IN,
    id::CHECK_OUT,
    id::GUESTS,
];

/// Check once, at page start, which widgets have the markup they need.
///
/// A missing element is not an error: the widget is simply left out.
pub fn detect_widgets(probe: &impl PageProbe) -> Vec<WidgetKind> {
    let mut widgets = Vec::new();

    if probe.exists(selector::GRID_TRACK)
        && probe.exists(selector::GRID_DOTS)
        && probe.child_count(selector::GRID_TRACK) > 0
    {
        widgets.push(WidgetKind::GridCarousel);
    }

    if probe.child_count(selector::HERO_TRACK) > 0 {
        widgets.push(WidgetKind::HeroCarousel);
    }

    let has_booking_trigger = BOOKING_TRIGGERS
        .iter()
        .any(|trigger| probe.exists(&by_id(trigger)))
        || probe.count(selector::LODGING_CARD) > 0
        || probe.count(selector::TRANSPORT_OPTION) > 0;
    if has_booking_trigger {
        widgets.push(WidgetKind::BookingWizard);
    }

    if probe.exists(&by_id(id::CONTACT_FORM)) {
        widgets.push(WidgetKind::ContactForm);
    }

    if probe.count(selector::FAQ_ITEM) > 0 {
        widgets.push(WidgetKind::FaqAccordion);
    }

    tracing::info!(?widgets, "Detected page widgets");
    widgets
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Probe over a fixed selector → (match count, child count) table
    #[derive(Default)]
    struct FakePage {
        elements: HashMap<String, (usize, usize)>,
    }

    impl FakePage {
        fn with(mut self, selector: &str, count: usize, children: usize) -> Self {
            self.elements.insert(selector.to_string(), (count, children));
            self
        }
    }

    impl PageProbe for FakePage {
        fn exists(&self, selector: &str) -> bool {
            self.count(selector) > 0
        }

        fn count(&self, selector: &str) -> usize {
            self.elements.get(selector).map(|(count, _)| *count).unwrap_or(0)
        }

        fn child_count(&self, selector: &str) -> usize {
            self.elements.get(selector).map(|(_, children)| *children).unwrap_or(0)
        }
    }

    #[test]
    fn test_empty_page_has_no_widgets() {
        assert!(detect_widgets(&FakePage::default()).is_empty());
    }

    #[test]
    fn test_page_without_contact_form() {
        let page = FakePage::default()
            .with(selector::FAQ_ITEM, 4, 2)
            .with("#search-lodging", 1, 0);

        let widgets = detect_widgets(&page);
        assert!(!widgets.contains(&WidgetKind::ContactForm));
        assert_eq!(widgets, vec![WidgetKind::BookingWizard, WidgetKind::FaqAccordion]);
    }

    #[test]
    fn test_grid_needs_track_dots_and_slides() {
        let no_dots = FakePage::default().with(selector::GRID_TRACK, 1, 5);
        assert!(detect_widgets(&no_dots).is_empty());

        let empty_track = FakePage::default()
            .with(selector::GRID_TRACK, 1, 0)
            .with(selector::GRID_DOTS, 1, 0);
        assert!(detect_widgets(&empty_track).is_empty());

        let full = FakePage::default()
            .with(selector::GRID_TRACK, 1, 5)
            .with(selector::GRID_DOTS, 1, 0);
        assert_eq!(detect_widgets(&full), vec![WidgetKind::GridCarousel]);
    }

    #[test]
    fn test_every_widget_detected() {
        let page = FakePage::default()
            .with(selector::GRID_TRACK, 1, 6)
            .with(selector::GRID_DOTS, 1, 0)
            .with(selector::HERO_TRACK, 1, 3)
            .with(selector::TRANSPORT_OPTION, 3, 0)
            .with("#contactForm", 1, 3)
            .with(selector::FAQ_ITEM, 2, 2);

        assert_eq!(detect_widgets(&page).len(), 5);
    }
}
