pub mod carousel;
pub mod contact;
pub mod faq;
pub mod registry;

pub use carousel::{GridCarousel, HeroCarousel, HeroStep};
pub use contact::{ContactError, ContactSubmission};
pub use faq::FaqAccordion;
pub use registry::{detect_widgets, PageProbe, WidgetKind};
