use crate::models::BookingSession;
use coastline_catalog::{PriceCatalog, PricingRules};
use coastline_shared::{Money, SummaryField};
use serde::Serialize;

const NOT_SELECTED: &str = "Not selected";

/// Everything the summary card shows, derived from a session.
///
/// Nothing here is stored on the session; the view is rebuilt after every
/// change so it cannot drift from the visitor's choices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
    pub room: String,
    pub transport: String,
    pub nights: u32,
    pub room_cost: Money,
    pub transport_cost: Money,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    currency_symbol: String,
}

impl SummaryView {
    pub fn format_money(&self, amount: Money) -> String {
        amount.format(&self.currency_symbol)
    }

    /// Text for one of the summary card fields
    pub fn text(&self, field: SummaryField) -> String {
        match field {
            SummaryField::CheckIn => self.check_in.clone(),
            SummaryField::CheckOut => self.check_out.clone(),
            SummaryField::Guests => self.guests.clone(),
            SummaryField::Room => self.room.clone(),
            SummaryField::Transport => self.transport.clone(),
            SummaryField::Subtotal => self.format_money(self.subtotal),
            SummaryField::Tax => self.format_money(self.tax),
            SummaryField::Total => self.format_money(self.total),
        }
    }

    pub fn fields(&self) -> Vec<(SummaryField, String)> {
        SummaryField::ALL
            .into_iter()
            .map(|field| (field, self.text(field)))
            .collect()
    }
}

/// Price a session against the catalog
pub fn compute_summary(
    session: &BookingSession,
    catalog: &PriceCatalog,
    rules: &PricingRules,
) -> SummaryView {
    let nights = session.nights();

    let room_cost = session
        .selected_room
        .map(|tier| catalog.room_rate(tier) * nights)
        .unwrap_or(Money::ZERO);

    let transport_cost: Money = session
        .selected_transport
        .keys()
        .iter()
        .map(|key| catalog.transport_price(key))
        .sum();

    let subtotal = room_cost + transport_cost;
    let tax = rules.tax_on(subtotal);
    let total = subtotal + tax;

    SummaryView {
        check_in: or_not_selected(&session.check_in),
        check_out: or_not_selected(&session.check_out),
        guests: guest_label(session.guests),
        room: session
            .selected_room
            .map(|tier| tier.display_name().to_string())
            .unwrap_or_else(|| NOT_SELECTED.to_string()),
        transport: match session.selected_transport.len() {
            0 => "None".to_string(),
            n => format!("{} selected", n),
        },
        nights,
        room_cost,
        transport_cost,
        subtotal,
        tax,
        total,
        currency_symbol: rules.currency_symbol.clone(),
    }
}

fn or_not_selected(value: &str) -> String {
    if value.is_empty() {
        NOT_SELECTED.to_string()
    } else {
        value.to_string()
    }
}

fn guest_label(guests: u32) -> String {
    if guests > 1 {
        format!("{} Guests", guests)
    } else {
        format!("{} Guest", guests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coastline_catalog::{RoomTier, TransportOption};
    use coastline_core::TripSearch;

    fn catalog() -> PriceCatalog {
        let mut catalog = PriceCatalog::default();
        catalog.add_transport(TransportOption::new("shuttle", Money::from_major(25.0)));
        catalog.add_transport(TransportOption::new("car", Money::from_major(40.0)));
        catalog
    }

    #[test]
    fn test_oceanfront_two_nights_with_transport() {
        let mut session = BookingSession::default();
        session.record_trip(TripSearch::new("2025-01-10", "2025-01-12", 2));
        session.selected_room = Some(RoomTier::Oceanfront);
        session.selected_transport.toggle("shuttle");
        session.selected_transport.toggle("car");

        let view = compute_summary(&session, &catalog(), &PricingRules::default());

        assert_eq!(view.nights, 2);
        assert_eq!(view.format_money(view.room_cost), "$598.00");
        assert_eq!(view.format_money(view.transport_cost), "$65.00");
        assert_eq!(view.text(SummaryField::Subtotal), "$663.00");
        assert_eq!(view.text(SummaryField::Tax), "$99.45");
        assert_eq!(view.text(SummaryField::Total), "$762.45");
        assert_eq!(view.room, "Oceanfront Resort");
        assert_eq!(view.transport, "2 selected");
        assert_eq!(view.guests, "2 Guests");
    }

    #[test]
    fn test_empty_session_renders_placeholders() {
        let view = compute_summary(&BookingSession::default(), &catalog(), &PricingRules::default());

        assert_eq!(view.check_in, "Not selected");
        assert_eq!(view.check_out, "Not selected");
        assert_eq!(view.guests, "1 Guest");
        assert_eq!(view.room, "Not selected");
        assert_eq!(view.transport, "None");
        assert_eq!(view.text(SummaryField::Total), "$0.00");
    }

    #[test]
    fn test_room_before_search_bills_one_night() {
        let mut session = BookingSession::default();
        session.selected_room = Some(RoomTier::Family);

        let view = compute_summary(&session, &catalog(), &PricingRules::default());
        assert_eq!(view.nights, 1);
        assert_eq!(view.room_cost, Money::from_major(149.0));
    }

    #[test]
    fn test_unpriced_transport_counts_as_zero() {
        let mut session = BookingSession::default();
        session.selected_transport.toggle("helicopter");

        let view = compute_summary(&session, &catalog(), &PricingRules::default());
        assert_eq!(view.transport_cost, Money::ZERO);
        assert_eq!(view.transport, "1 selected");
    }

    #[test]
    fn test_fields_cover_every_summary_slot() {
        let view = compute_summary(&BookingSession::default(), &catalog(), &PricingRules::default());
        let fields = view.fields();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[2], (SummaryField::Guests, "1 Guest".to_string()));
    }

    #[test]
    fn test_currency_symbol_follows_rules() {
        let rules = PricingRules {
            tax_rate: 0.0,
            currency_symbol: "€".to_string(),
        };
        let mut session = BookingSession::default();
        session.selected_room = Some(RoomTier::Hostel);

        let view = compute_summary(&session, &catalog(), &rules);
        assert_eq!(view.text(SummaryField::Total), "€59.00");
    }
}
