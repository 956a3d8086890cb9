pub mod pricing;
pub mod product;

pub use pricing::{PriceCatalog, PricingRules};
pub use product::{CatalogError, RoomTier, TransportOption};
