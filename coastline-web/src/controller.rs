use crate::render::{apply, apply_outcome, Surface};
use coastline_booking::BookingWizard;
use coastline_catalog::RoomTier;
use coastline_core::TripSearch;
use coastline_widgets::ContactSubmission;

/// The booking controls a page can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingTrigger {
    StartBooking,
    SearchLodging,
    BookRoom,
    TransportOption,
    CompleteBooking,
    ReturnHome,
}

impl BookingTrigger {
    /// Whether the browser's own click action is cancelled. Only the search
    /// button does, since it submits the booking form.
    pub fn suppresses_default(&self) -> bool {
        matches!(self, BookingTrigger::SearchLodging)
    }
}

/// Owns the booking session for the page and routes every handler through the wizard.
#[derive(Debug)]
pub struct BookingController<S: Surface> {
    wizard: BookingWizard,
    surface: S,
}

impl<S: Surface> BookingController<S> {
    pub fn new(wizard: BookingWizard, surface: S) -> Self {
        Self { wizard, surface }
    }

    pub fn wizard(&self) -> &BookingWizard {
        &self.wizard
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn start_booking(&mut self) {
        apply(&mut self.surface, self.wizard.start_booking());
    }

    pub fn search(&mut self, trip: TripSearch) -> bool {
        apply_outcome(&mut self.surface, self.wizard.search(trip))
    }

    /// Select the room named by a card's `data-type`. Unknown tiers are ignored.
    pub fn select_room(&mut self, room_type: &str) {
        match room_type.parse::<RoomTier>() {
            Ok(tier) => apply(&mut self.surface, self.wizard.select_room(tier)),
            Err(e) => tracing::warn!("Ignoring lodging card: {}", e),
        }
    }

    pub fn toggle_transport(&mut self, key: &str) {
        apply(&mut self.surface, self.wizard.toggle_transport(key));
    }

    pub fn edit_trip(&mut self, trip: TripSearch) {
        apply(&mut self.surface, self.wizard.edit_trip(trip));
    }

    pub fn complete(&mut self) -> bool {
        apply_outcome(&mut self.surface, self.wizard.complete())
    }

    pub fn return_home(&mut self) {
        apply(&mut self.surface, self.wizard.return_home());
    }
}

/// Validate a contact form submission and tell the visitor how it went.
/// Returns whether the form should be cleared.
pub fn submit_contact(surface: &mut impl Surface, name: &str, email: &str, message: &str) -> bool {
    match ContactSubmission::from_fields(name, email, message) {
        Ok(submission) => {
            tracing::info!(name = %submission.name, email = %submission.email, "Contact message accepted");
            surface.notify(submission.notice());
            true
        }
        Err(e) => {
            tracing::debug!(?e, "Contact message rejected");
            surface.notify(&e.to_string());
            false
        }
    }
}
