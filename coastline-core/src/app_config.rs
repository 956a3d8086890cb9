use crate::CoreResult;
use serde::Deserialize;
use std::collections::HashMap;

const GRID_INTERVAL_MS: u32 = 3000;
const HERO_INTERVAL_MS: u32 = 2000;
const GRID_VISIBLE_SLIDES: usize = 3;
const TAX_RATE: f64 = 0.15;
const CURRENCY_SYMBOL: &str = "$";
const SCROLL_DELAY_MS: u32 = 120;
const ROOM_RATES: [(&str, f64); 3] = [("oceanfront", 299.0), ("family", 149.0), ("hostel", 59.0)];

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub booking: BookingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CarouselConfig {
    pub grid_interval_ms: u32,
    pub hero_interval_ms: u32,
    /// Slides visible side by side in the grid strip
    pub grid_visible_slides: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BookingConfig {
    pub tax_rate: f64,
    pub currency_symbol: String,
    /// Delay before scrolling to a section that was just revealed
    pub scroll_delay_ms: u32,
    /// Nightly rate per room tier key
    pub room_rates: HashMap<String, f64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig {
                grid_interval_ms: GRID_INTERVAL_MS,
                hero_interval_ms: HERO_INTERVAL_MS,
                grid_visible_slides: GRID_VISIBLE_SLIDES,
            },
            booking: BookingConfig {
                tax_rate: TAX_RATE,
                currency_symbol: CURRENCY_SYMBOL.to_string(),
                scroll_delay_ms: SCROLL_DELAY_MS,
                room_rates: ROOM_RATES
                    .iter()
                    .map(|(key, rate)| (key.to_string(), *rate))
                    .collect(),
            },
        }
    }
}

impl SiteConfig {
    /// Build the configuration from compiled defaults, then merge the page's
    /// inline JSON overrides (the `#site-config` script block) when present.
    pub fn load(inline_json: Option<&str>) -> CoreResult<Self> {
        let mut builder = config::Config::builder()
            .set_default("carousel.grid_interval_ms", i64::from(GRID_INTERVAL_MS))?
            .set_default("carousel.hero_interval_ms", i64::from(HERO_INTERVAL_MS))?
            .set_default("carousel.grid_visible_slides", GRID_VISIBLE_SLIDES as i64)?
            .set_default("booking.tax_rate", TAX_RATE)?
            .set_default("booking.currency_symbol", CURRENCY_SYMBOL)?
            .set_default("booking.scroll_delay_ms", i64::from(SCROLL_DELAY_MS))?;

        for (key, rate) in ROOM_RATES {
            builder = builder.set_default(format!("booking.room_rates.{}", key), rate)?;
        }

        if let Some(json) = inline_json.filter(|s| !s.trim().is_empty()) {
            builder = builder.add_source(config::File::from_str(json, config::FileFormat::Json));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Like [`SiteConfig::load`], but a malformed override block falls back to defaults.
    pub fn load_or_default(inline_json: Option<&str>) -> Self {
        Self::load(inline_json).unwrap_or_else(|e| {
            tracing::warn!("Ignoring site configuration overrides: {}", e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_overrides_matches_default() {
        let config = SiteConfig::load(None).expect("defaults should load");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.carousel.hero_interval_ms, 2000);
        assert_eq!(config.booking.room_rates["oceanfront"], 299.0);
    }

    #[test]
    fn test_inline_overrides_merge_with_defaults() {
        let overrides = serde_json::json!({
            "booking": { "tax_rate": 0.2, "room_rates": { "hostel": 65.0 } },
            "carousel": { "grid_interval_ms": 5000 }
        })
        .to_string();

        let config = SiteConfig::load(Some(&overrides)).expect("overrides should load");
        assert_eq!(config.booking.tax_rate, 0.2);
        assert_eq!(config.booking.room_rates["hostel"], 65.0);
        assert_eq!(config.booking.room_rates["family"], 149.0);
        assert_eq!(config.booking.currency_symbol, "$");
        assert_eq!(config.carousel.grid_interval_ms, 5000);
        assert_eq!(config.carousel.hero_interval_ms, 2000);
    }

    #[test]
    fn test_malformed_overrides_fall_back() {
        assert!(SiteConfig::load(Some("{ not json")).is_err());
        assert_eq!(SiteConfig::load_or_default(Some("{ not json")), SiteConfig::default());
    }
}
