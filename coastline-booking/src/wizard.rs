use crate::models::{BookingSession, WizardStage};
use crate::summary::{compute_summary, SummaryView};
use crate::view::ViewCommand;
use coastline_catalog::{PriceCatalog, PricingRules, RoomTier, TransportOption};
use coastline_core::app_config::BookingConfig;
use coastline_core::TripSearch;
use coastline_shared::Section;
use std::time::Duration;

/// Drives the booking flow for one page view.
///
/// ```text
/// Idle --search(valid)--> LodgingVisible --complete(valid)--> Confirmed
///                          (pick room / toggle transport)        |
/// Idle <------------------------ return (page reload) -----------+
/// ```
///
/// Every operation returns the view commands the page should apply. A
/// rejected transition returns a [`BookingError`] whose message is shown to
/// the visitor as-is.
#[derive(Debug)]
pub struct BookingWizard {
    session: BookingSession,
    stage: WizardStage,
    catalog: PriceCatalog,
    rules: PricingRules,
    scroll_delay: Duration,
}

impl BookingWizard {
    pub fn new(catalog: PriceCatalog, rules: PricingRules, scroll_delay: Duration) -> Self {
        Self {
            session: BookingSession::default(),
            stage: WizardStage::Idle,
            catalog,
            rules,
            scroll_delay,
        }
    }

    /// Build from site configuration plus the transport options found in markup
    pub fn from_config<I>(config: &BookingConfig, transport: I) -> Self
    where
        I: IntoIterator<Item = TransportOption>,
    {
        let mut catalog = PriceCatalog::with_room_rates(
            config.room_rates.iter().map(|(key, rate)| (key.as_str(), *rate)),
        );
        for option in transport {
            catalog.add_transport(option);
        }
        let rules = PricingRules {
            tax_rate: config.tax_rate,
            currency_symbol: config.currency_symbol.clone(),
        };
        Self::new(catalog, rules, Duration::from_millis(u64::from(config.scroll_delay_ms)))
    }

    pub fn session(&self) -> &BookingSession {
        &self.session
    }

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    pub fn summary(&self) -> SummaryView {
        compute_summary(&self.session, &self.catalog, &self.rules)
    }

    /// "Start booking" only brings the form into view
    pub fn start_booking(&self) -> Vec<ViewCommand> {
        vec![self.scroll_to(Section::BookingForm)]
    }

    /// Record the trip fields and, if they are valid, reveal the next steps.
    ///
    /// The entered values stay on the session even when validation fails.
    pub fn search(&mut self, trip: TripSearch) -> Result<Vec<ViewCommand>, BookingError> {
        self.session.record_trip(trip);
        Self::validate_search(&self.session.trip())?;

        self.stage = WizardStage::LodgingVisible;
        tracing::debug!(
            check_in = %self.session.check_in,
            check_out = %self.session.check_out,
            guests = self.session.guests,
            "Lodging search accepted"
        );

        Ok(vec![
            ViewCommand::Reveal(Section::Lodging),
            ViewCommand::Reveal(Section::Transportation),
            ViewCommand::Reveal(Section::Summary),
            ViewCommand::RenderSummary(self.summary()),
            self.scroll_to(Section::Lodging),
        ])
    }

    /// Choose a room, replacing any earlier choice
    pub fn select_room(&mut self, tier: RoomTier) -> Vec<ViewCommand> {
        self.session.selected_room = Some(tier);
        tracing::debug!(room = %tier, "Room selected");

        vec![
            ViewCommand::RenderSummary(self.summary()),
            ViewCommand::HighlightSummary,
            self.scroll_to(Section::Summary),
        ]
    }

    /// Add or remove a transport option
    pub fn toggle_transport(&mut self, key: &str) -> Vec<ViewCommand> {
        let selected = self.session.selected_transport.toggle(key);
        tracing::debug!(key, selected, "Transport toggled");

        vec![
            ViewCommand::MarkTransport {
                key: key.to_string(),
                selected,
            },
            ViewCommand::RenderSummary(self.summary()),
        ]
    }

    /// A trip field changed outside of a search: update and re-price without validating
    pub fn edit_trip(&mut self, trip: TripSearch) -> Vec<ViewCommand> {
        self.session.record_trip(trip);
        vec![ViewCommand::RenderSummary(self.summary())]
    }

    /// Transition: LodgingVisible → Confirmed, once a room and transport are chosen
    pub fn complete(&mut self) -> Result<Vec<ViewCommand>, BookingError> {
        if self.session.selected_room.is_none() {
            return Err(BookingError::NoRoomSelected);
        }
        if self.session.selected_transport.is_empty() {
            return Err(BookingError::NoTransportSelected);
        }

        self.stage = WizardStage::Confirmed;
        tracing::debug!(total = self.summary().total.cents(), "Booking confirmed");

        Ok(vec![
            ViewCommand::Hide(Section::Summary),
            ViewCommand::Reveal(Section::Confirmation),
            self.scroll_to(Section::Confirmation),
        ])
    }

    /// Discard the session and reload the page
    pub fn return_home(&mut self) -> Vec<ViewCommand> {
        self.session = BookingSession::default();
        self.stage = WizardStage::Idle;
        vec![ViewCommand::Reload]
    }

    fn validate_search(trip: &TripSearch) -> Result<(), BookingError> {
        if !trip.is_complete() {
            return Err(BookingError::IncompleteSearch);
        }
        if trip.stay_days() <= 0 {
            return Err(BookingError::InvalidStay);
        }
        Ok(())
    }

    fn scroll_to(&self, section: Section) -> ViewCommand {
        ViewCommand::ScrollTo {
            section,
            after: self.scroll_delay,
        }
    }
}

/// Rejected wizard transitions. The message is shown to the visitor verbatim.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Please select check-in, check-out, and guests.")]
    IncompleteSearch,

    #[error("Check-out date must be after check-in date.")]
    InvalidStay,

    #[error("Please select a hotel room before continuing.")]
    NoRoomSelected,

    #[error("Please select at least one transportation option.")]
    NoTransportSelected,
}
