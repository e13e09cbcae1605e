// Contact form service
// A single page: five fields, validated server-side on submit, outcome
// rendered back into the page as a status line plus a field highlight.

pub mod config;
pub mod form;
pub mod form_context;
pub mod page;
pub mod server;
pub mod validation;

pub use config::Config;
pub use form::{ContactForm, FieldName, InquiryType};
pub use form_context::FormContext;
pub use server::app;
pub use validation::{validate, FieldError, ValidationOutcome, SUCCESS_MESSAGE};
