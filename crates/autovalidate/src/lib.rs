//! # autovalidate
//!
//! Validates forms on submit and works out the error feedback: which
//! elements and labels get the error class, which message containers show,
//! what an alert says and whether the form may be submitted.
//!
//! Everything here is headless. The plan is data ([`Feedback`]); a browser
//! binding applies it to the DOM.
//!
//! ```rust
//! use autovalidate::{AutoValidator, Settings};
//! use autovalidate::validation::Element;
//!
//! let form = Element::new("form")
//!     .attr("data-validation", "alert")
//!     .child(Element::input("text", "EMAIL").attr("data-validation", "epost").value("me@epost.de"))
//!     .child(
//!         Element::new("div")
//!             .class("customErrorContainer")
//!             .attr("data-for", "EMAIL")
//!             .attr("data-errortype", "epost")
//!             .text("epost addresses are not accepted"),
//!     );
//!
//! let outcome = AutoValidator::new(Settings::default()).on_submit(&form);
//! assert!(!outcome.allow_submit);
//! assert_eq!(outcome.feedback.alert.as_deref(), Some("epost addresses are not accepted"));
//! ```

pub mod config;
pub mod facts;
pub mod feedback;
pub mod submit;

pub use autovalidate_core as validation;

pub use config::Settings;
pub use facts::{ErrorContainer, FormFacts};
pub use feedback::{plan_feedback, ErrorTarget, Feedback, MessageMode, SubmitGate};
pub use submit::{AutoValidator, CallbackRegistry, CallbackResolver, SubmitCallback, SubmitOutcome};
