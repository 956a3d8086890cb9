//! The markup contract the widgets bind to.
//!
//! Every id, selector, class and data attribute the site script reads lives
//! here. All of them are optional at runtime: a page that omits an element
//! simply does not get the behavior attached to it.

pub mod selector {
    pub const GRID_TRACK: &str = ".carousel-track";
    pub const GRID_DOTS: &str = ".carousel-dots";
    pub const HERO_TRACK: &str = ".about-carousel-track";

    pub const LODGING_CARD: &str = ".lodging-grid .card";
    pub const LODGING_BOOK_BUTTON: &str = ".book";
    pub const TRANSPORT_OPTION: &str = ".transport.card-option";
    pub const SUMMARY_CARD: &str = "#summary .summary-card";

    pub const CONTACT_NAME: &str = "input[name='name']";
    pub const CONTACT_EMAIL: &str = "input[name='email']";
    pub const CONTACT_MESSAGE: &str = "textarea[name='message']";

    pub const FAQ_ITEM: &str = ".faq-item";
    pub const FAQ_QUESTION: &str = ".faq-question";
}

pub mod id {
    pub const START_BOOKING: &str = "start-booking";
    pub const SEARCH_LODGING: &str = "search-lodging";
    pub const COMPLETE_BOOKING: &str = "complete-booking";
    pub const RETURN_HOME: &str = "return-home";

    pub const CHECK_IN: &str = "checkin";
    pub const CHECK_OUT: &str = "checkout";
    pub const GUESTS: &str = "guests";

    pub const CONTACT_FORM: &str = "contactForm";
    pub const SITE_CONFIG: &str = "site-config";
}

pub mod class {
    pub const HIDDEN: &str = "hidden";
    pub const ACTIVE: &str = "active";
    pub const SELECTED: &str = "selected";
    pub const HIGHLIGHT: &str = "highlight";
}

pub mod data {
    /// Room tier key on a lodging card.
    pub const ROOM_TYPE: &str = "type";
    /// Transport option key.
    pub const TRANSPORT_KEY: &str = "key";
    /// Transport option flat price in major units.
    pub const TRANSPORT_PRICE: &str = "price";
}

/// CSS selector for an element id
pub fn by_id(id: &str) -> String {
    format!("#{}", id)
}

/// Page regions the booking flow reveals, hides or scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    BookingForm,
    Lodging,
    Transportation,
    Summary,
    Confirmation,
}

impl Section {
    pub fn element_id(&self) -> &'static str {
        match self {
            Section::BookingForm => "booking-form",
            Section::Lodging => "lodging-options",
            Section::Transportation => "transportation",
            Section::Summary => "summary",
            Section::Confirmation => "confirmation",
        }
    }
}

/// The eight text fields of the booking summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryField {
    CheckIn,
    CheckOut,
    Guests,
    Room,
    Transport,
    Subtotal,
    Tax,
    Total,
}

impl SummaryField {
    pub const ALL: [SummaryField; 8] = [
        SummaryField::CheckIn,
        SummaryField::CheckOut,
        SummaryField::Guests,
        SummaryField::Room,
        SummaryField::Transport,
        SummaryField::Subtotal,
        SummaryField::Tax,
        SummaryField::Total,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            SummaryField::CheckIn => "sum-checkin",
            SummaryField::CheckOut => "sum-checkout",
            SummaryField::Guests => "sum-guests",
            SummaryField::Room => "sum-room",
            SummaryField::Transport => "sum-transport",
            SummaryField::Subtotal => "sum-sub",
            SummaryField::Tax => "sum-tax",
            SummaryField::Total => "sum-total",
        }
    }
}
