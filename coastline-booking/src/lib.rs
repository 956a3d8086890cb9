pub mod models;
pub mod summary;
pub mod view;
pub mod wizard;

pub use models::{BookingSession, TransportSelection, WizardStage};
pub use summary::{compute_summary, SummaryView};
pub use view::ViewCommand;
pub use wizard::{BookingError, BookingWizard};
