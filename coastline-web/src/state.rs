use coastline_core::SiteConfig;
use coastline_widgets::WidgetKind;

/// What was wired when the page booted
#[derive(Debug, Clone)]
pub struct PageState {
    pub config: SiteConfig,
    pub widgets: Vec<WidgetKind>,
    pub failed: Vec<WidgetKind>,
}

impl PageState {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            widgets: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Record a widget's initialization result
    pub fn record(&mut self, kind: WidgetKind, ok: bool) {
        if ok {
            self.widgets.push(kind);
        } else {
            self.failed.push(kind);
        }
    }

    pub fn is_active(&self, kind: WidgetKind) -> bool {
        self.widgets.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_splits_active_and_failed() {
        let mut state = PageState::new(SiteConfig::default());
        state.record(WidgetKind::FaqAccordion, true);
        state.record(WidgetKind::HeroCarousel, false);

        assert!(state.is_active(WidgetKind::FaqAccordion));
        assert!(!state.is_active(WidgetKind::HeroCarousel));
        assert_eq!(state.failed, vec![WidgetKind::HeroCarousel]);
    }
}
