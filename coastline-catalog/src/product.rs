use coastline_shared::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lodging tiers offered on the booking page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RoomTier {
    Oceanfront,
    Family,
    Hostel,
}

impl RoomTier {
    pub const ALL: [RoomTier; 3] = [RoomTier::Oceanfront, RoomTier::Family, RoomTier::Hostel];

    /// Key used in `data-type` attributes and configuration
    pub fn key(&self) -> &'static str {
        match self {
            RoomTier::Oceanfront => "oceanfront",
            RoomTier::Family => "family",
            RoomTier::Hostel => "hostel",
        }
    }

    /// Name shown in the booking summary
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomTier::Oceanfront => "Oceanfront Resort",
            RoomTier::Family => "Family-Owned Hotel",
            RoomTier::Hostel => "Budget Hostel",
        }
    }

    /// Nightly rate used when configuration does not override it
    pub fn default_rate(&self) -> Money {
        match self {
            RoomTier::Oceanfront => Money::from_major(299.0),
            RoomTier::Family => Money::from_major(149.0),
            RoomTier::Hostel => Money::from_major(59.0),
        }
    }
}

impl fmt::Display for RoomTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RoomTier {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomTier::ALL
            .into_iter()
            .find(|tier| tier.key() == s.trim())
            .ok_or_else(|| CatalogError::UnknownRoom(s.to_string()))
    }
}

/// A transport add-on as declared by a `.transport.card-option` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportOption {
    pub key: String,
    pub price: Money,
}

impl TransportOption {
    pub fn new(key: impl Into<String>, price: Money) -> Self {
        Self {
            key: key.into(),
            price,
        }
    }

    /// Build from the raw `data-key` / `data-price` attribute values.
    pub fn from_attributes(key: Option<String>, price: Option<String>) -> Result<Self, CatalogError> {
        let key = key
            .filter(|k| !k.trim().is_empty())
            .ok_or(CatalogError::MissingTransportKey)?;
        let price = price.as_deref().map(Money::parse_major).unwrap_or(Money::ZERO);
        Ok(Self::new(key, price))
    }
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown room type: {0}")]
    UnknownRoom(String),

    #[error("Transport option has no key")]
    MissingTransportKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_tier_parsing() {
        assert_eq!("oceanfront".parse::<RoomTier>(), Ok(RoomTier::Oceanfront));
        assert_eq!(" hostel ".parse::<RoomTier>(), Ok(RoomTier::Hostel));
        assert_eq!(
            "penthouse".parse::<RoomTier>(),
            Err(CatalogError::UnknownRoom("penthouse".to_string()))
        );
    }

    #[test]
    fn test_room_tier_serde_uses_markup_keys() {
        let json = serde_json::to_string(&RoomTier::Family).unwrap();
        assert_eq!(json, "\"family\"");
    }

    #[test]
    fn test_transport_from_attributes() {
        let option =
            TransportOption::from_attributes(Some("shuttle".into()), Some("25".into())).unwrap();
        assert_eq!(option.price, Money::from_major(25.0));

        // Missing price is free, missing key is unusable
        let option = TransportOption::from_attributes(Some("walk".into()), None).unwrap();
        assert_eq!(option.price, Money::ZERO);
        assert!(TransportOption::from_attributes(None, Some("10".into())).is_err());
    }
}
