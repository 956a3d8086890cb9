use crate::product::{RoomTier, TransportOption};
use coastline_shared::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tax and display rules applied on top of catalog prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Fraction of the subtotal charged as tax
    pub tax_rate: f64,

    /// Prefix rendered before every amount
    pub currency_symbol: String,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            tax_rate: 0.15,
            currency_symbol: "$".to_string(),
        }
    }
}

impl PricingRules {
    pub fn tax_on(&self, subtotal: Money) -> Money {
        subtotal.scale(self.tax_rate)
    }

    pub fn format(&self, amount: Money) -> String {
        amount.format(&self.currency_symbol)
    }
}

/// Read-only price table for one page view.
///
/// Lookups never fail: an unknown room or transport key prices at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCatalog {
    room_rates: HashMap<RoomTier, Money>,
    transport_prices: HashMap<String, Money>,
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self {
            room_rates: RoomTier::ALL
                .into_iter()
                .map(|tier| (tier, tier.default_rate()))
                .collect(),
            transport_prices: HashMap::new(),
        }
    }
}

impl PriceCatalog {
    /// Start from the built-in rates and apply overrides keyed by tier name.
    /// Keys that name no tier are skipped.
    pub fn with_room_rates<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut catalog = Self::default();
        for (key, rate) in overrides {
            match key.parse::<RoomTier>() {
                Ok(tier) => {
                    catalog.room_rates.insert(tier, Money::from_major(rate));
                }
                Err(e) => tracing::warn!("Ignoring room rate override: {}", e),
            }
        }
        catalog
    }

    /// Register a transport option read from markup. A repeated key keeps the
    /// price of its first occurrence in document order.
    pub fn add_transport(&mut self, option: TransportOption) {
        self.transport_prices.entry(option.key).or_insert(option.price);
    }

    pub fn room_rate(&self, tier: RoomTier) -> Money {
        self.room_rates.get(&tier).copied().unwrap_or(Money::ZERO)
    }

    pub fn transport_price(&self, key: &str) -> Money {
        self.transport_prices.get(key).copied().unwrap_or(Money::ZERO)
    }

    pub fn transport_count(&self) -> usize {
        self.transport_prices.len()
    }
}
