// Presentation layer
// Form state and actions behind the tracker window

pub mod controller;
pub mod error;
pub mod state;

pub use controller::FormController;
pub use error::{FormError, FormResult, SelectionAction, Severity};
pub use state::{FormFields, FormInput, FormMode, FormView};
