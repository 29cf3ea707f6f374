// 📤 Submission - POST Validated Records to the Onboarding Endpoint
// One attempt per call, no retry; failures collapse to a single user-facing message

#[cfg(feature = "client")]
use crate::schema::OnboardingRecord;

/// Environment variable naming the submission endpoint
pub const ENDPOINT_VAR: &str = "ONBOARD_URL";

/// The one message shown to the user for any submission failure
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Could not submit your details at the moment. Please check your connection and try again.";

/// Opaque submission failure: transport errors, non-2xx responses and
/// missing configuration all land here. The user sees the generic
/// message; `detail` keeps the cause for diagnostics.
#[derive(Debug, Clone)]
pub struct SubmissionError {
    detail: String,
}

impl SubmissionError {
    pub fn new(detail: impl Into<String>) -> Self {
        SubmissionError {
            detail: detail.into(),
        }
    }

    pub fn user_message(&self) -> &'static str {
        SUBMISSION_FAILED_MESSAGE
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(SUBMISSION_FAILED_MESSAGE)
    }
}

impl std::error::Error for SubmissionError {}

// ============================================================================
// HTTP SUBMITTER (client feature)
// ============================================================================

/// POSTs validated records as JSON to the configured endpoint
#[cfg(feature = "client")]
pub struct Submitter {
    endpoint: String,
    client: reqwest::Client,
}

#[cfg(feature = "client")]
impl Submitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Submitter {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Read the endpoint from the environment. Absence is a submission
    /// error like any other: the form has no startup phase to fail in.
    pub fn from_env() -> Result<Self, SubmissionError> {
        let endpoint = std::env::var(ENDPOINT_VAR)
            .map_err(|_| SubmissionError::new(format!("{} is not set", ENDPOINT_VAR)))?;
        Ok(Submitter::new(endpoint))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one record. Any non-2xx status or transport failure maps
    /// to a `SubmissionError`; the caller decides whether to re-trigger.
    pub async fn submit(&self, record: &OnboardingRecord) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(|e| SubmissionError::new(format!("transport error: {}", e)))?;

        if !response.status().is_success() {
            return Err(SubmissionError::new(format!(
                "request failed with {}",
                response.status()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_displays_generic_message() {
        let err = SubmissionError::new("connection refused");
        assert_eq!(err.to_string(), SUBMISSION_FAILED_MESSAGE);
        assert_eq!(err.detail(), "connection refused");
    }

    #[test]
    fn test_user_message_is_uniform() {
        let transport = SubmissionError::new("transport error: timed out");
        let status = SubmissionError::new("request failed with 500 Internal Server Error");
        assert_eq!(transport.user_message(), status.user_message());
    }

    #[cfg(feature = "client")]
    #[test]
    fn test_from_env_requires_endpoint() {
        std::env::remove_var(ENDPOINT_VAR);
        let result = Submitter::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().detail().contains(ENDPOINT_VAR));
    }
}
