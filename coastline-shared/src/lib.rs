pub mod markup;
pub mod money;
pub mod pii;

pub use markup::{Section, SummaryField};
pub use money::Money;
pub use pii::Masked;
