use coastline_catalog::RoomTier;
use coastline_core::{date_diff_days, TripSearch};
use serde::{Deserialize, Serialize};

/// Where the visitor is in the booking flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardStage {
    Idle,
    LodgingVisible,
    Confirmed,
}

/// Transport add-ons chosen by the visitor, in the order they were picked.
/// Each key appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportSelection {
    keys: Vec<String>,
}

impl TransportSelection {
    /// Flip membership of `key`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, key: &str) -> bool {
        match self.keys.iter().position(|k| k == key) {
            Some(index) => {
                self.keys.remove(index);
                false
            }
            None => {
                self.keys.push(key.to_string());
                true
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// The visitor's booking choices for one page view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSession {
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    pub selected_room: Option<RoomTier>,
    pub selected_transport: TransportSelection,
}

impl Default for BookingSession {
    fn default() -> Self {
        Self {
            check_in: String::new(),
            check_out: String::new(),
            guests: 1,
            selected_room: None,
            selected_transport: TransportSelection::default(),
        }
    }
}

impl BookingSession {
    /// Overwrite the trip fields from a form read
    pub fn record_trip(&mut self, trip: TripSearch) {
        self.check_in = trip.check_in;
        self.check_out = trip.check_out;
        self.guests = trip.guests;
    }

    pub fn trip(&self) -> TripSearch {
        TripSearch::new(self.check_in.clone(), self.check_out.clone(), self.guests)
    }

    /// Nights billed: the stay length, never less than one
    pub fn nights(&self) -> u32 {
        let days = date_diff_days(&self.check_in, &self.check_out);
        u32::try_from(days).unwrap_or(u32::MAX).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut selection = TransportSelection::default();
        selection.toggle("car");

        assert!(selection.toggle("shuttle"));
        assert!(!selection.toggle("shuttle"));

        assert_eq!(selection.keys(), ["car".to_string()]);
    }

    #[test]
    fn test_toggle_keeps_insertion_order() {
        let mut selection = TransportSelection::default();
        selection.toggle("shuttle");
        selection.toggle("car");
        selection.toggle("ferry");
        selection.toggle("car");

        assert_eq!(selection.keys(), ["shuttle".to_string(), "ferry".to_string()]);
        assert!(selection.contains("ferry"));
        assert!(!selection.contains("car"));
    }

    #[test]
    fn test_new_session_defaults() {
        let session = BookingSession::default();
        assert_eq!(session.guests, 1);
        assert!(session.selected_room.is_none());
        assert!(session.selected_transport.is_empty());
        assert_eq!(session.nights(), 1);
    }

    #[test]
    fn test_nights_floor_of_one() {
        let mut session = BookingSession::default();
        session.record_trip(TripSearch::new("2025-01-12", "2025-01-10", 2));
        assert_eq!(session.nights(), 1);

        session.record_trip(TripSearch::new("2025-01-10", "2025-01-14", 2));
        assert_eq!(session.nights(), 4);
    }
}
