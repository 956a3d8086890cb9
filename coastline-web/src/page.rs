use crate::booking::init_booking;
use crate::carousel::{init_grid, init_hero};
use crate::contact::init_contact;
use crate::dom::{DomProbe, DomSurface};
use crate::error::PageError;
use crate::faq::init_faq;
use crate::state::PageState;
use coastline_core::SiteConfig;
use coastline_shared::markup::id;
use coastline_widgets::{detect_widgets, WidgetKind};

/// Detect and wire every widget the current page carries.
///
/// A widget that fails to initialize is logged and skipped; the others still run.
pub fn boot() -> Result<PageState, PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;

    let inline = document
        .get_element_by_id(id::SITE_CONFIG)
        .and_then(|element| element.text_content());
    let config = SiteConfig::load_or_default(inline.as_deref());

    let mut state = PageState::new(config);
    for kind in detect_widgets(&DomProbe::new(&document)) {
        let result = match kind {
            WidgetKind::GridCarousel => init_grid(&document, &state.config.carousel),
            WidgetKind::HeroCarousel => init_hero(&document, &state.config.carousel),
            WidgetKind::BookingWizard => init_booking(
                &document,
                &state.config.booking,
                DomSurface::new(window.clone(), document.clone()),
            ),
            WidgetKind::ContactForm => {
                init_contact(&document, DomSurface::new(window.clone(), document.clone()))
            }
            WidgetKind::FaqAccordion => init_faq(&document),
        };
        if let Err(e) = &result {
            tracing::warn!(?kind, "Widget failed to initialize: {}", e);
        }
        state.record(kind, result.is_ok());
    }

    tracing::info!(
        active = state.widgets.len(),
        failed = state.failed.len(),
        "Page ready"
    );
    Ok(state)
}
