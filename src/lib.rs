// Client Onboarding - Core Library
// Exposes the validation schema, prefill parser and submission pieces
// for use in the CLI and embedding form layers

pub mod form;
pub mod prefill;
pub mod schema;
pub mod submission;

// Re-export commonly used types
pub use form::{success_summary, FormState};
pub use prefill::{parse_query, parse_service_prefills};
pub use schema::{
    FieldError, FieldErrors, OnboardingCandidate, OnboardingRecord, OnboardingValidator, Service,
    ValidationResult,
};
pub use submission::{SubmissionError, ENDPOINT_VAR, SUBMISSION_FAILED_MESSAGE};

#[cfg(feature = "client")]
pub use submission::Submitter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
