// 📝 Form State - Candidate Construction
// Default values, raw edits, and input normalization for one submission attempt

use chrono::NaiveDate;
use serde_json::Number;

use crate::schema::{OnboardingCandidate, OnboardingRecord, Service};

/// Mutable field state backing the onboarding form.
///
/// Each submission attempt snapshots a fresh candidate from this state;
/// the candidate has no identity beyond the attempt.
#[derive(Debug, Clone)]
pub struct FormState {
    candidate: OnboardingCandidate,
}

impl FormState {
    /// Build the default state: empty text fields, prefilled services,
    /// start date set to today, terms unchecked.
    pub fn new(today: NaiveDate, prefills: &[Service]) -> Self {
        FormState {
            candidate: OnboardingCandidate {
                full_name: String::new(),
                email: String::new(),
                company_name: String::new(),
                services: prefills.iter().map(|s| s.as_str().to_string()).collect(),
                budget_usd: None,
                project_start_date: today.format("%Y-%m-%d").to_string(),
                accept_terms: false,
            },
        }
    }

    pub fn set_full_name(&mut self, value: &str) {
        self.candidate.full_name = value.to_string();
    }

    pub fn set_email(&mut self, value: &str) {
        self.candidate.email = value.to_string();
    }

    pub fn set_company_name(&mut self, value: &str) {
        self.candidate.company_name = value.to_string();
    }

    /// Check or uncheck a service, keeping first-selection order
    pub fn toggle_service(&mut self, service: Service) {
        let literal = service.as_str();
        if let Some(pos) = self.candidate.services.iter().position(|s| s == literal) {
            self.candidate.services.remove(pos);
        } else {
            self.candidate.services.push(literal.to_string());
        }
    }

    pub fn set_start_date(&mut self, value: &str) {
        self.candidate.project_start_date = value.to_string();
    }

    pub fn set_accept_terms(&mut self, value: bool) {
        self.candidate.accept_terms = value;
    }

    /// Normalize the raw budget input before it reaches the validator.
    ///
    /// Empty or non-numeric input becomes "absent" (a valid state); a
    /// numeric string becomes a JSON number, integer-form when integral.
    /// The validator only ever sees a number or nothing.
    pub fn set_budget_input(&mut self, raw: &str) {
        self.candidate.budget_usd = normalize_budget_input(raw);
    }

    /// Snapshot the candidate for a validation/submission attempt
    pub fn candidate(&self) -> OnboardingCandidate {
        self.candidate.clone()
    }
}

fn normalize_budget_input(raw: &str) -> Option<Number> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(integer) = trimmed.parse::<i64>() {
        return Some(Number::from(integer));
    }

    match trimmed.parse::<f64>() {
        Ok(float) if float.is_finite() => Number::from_f64(float),
        _ => None,
    }
}

/// Render the plain-text summary shown after a successful submission
pub fn success_summary(record: &OnboardingRecord) -> String {
    let services = record
        .services
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut summary = String::from("Submitted successfully!\n");
    summary.push_str(&format!("Name: {}\n", record.full_name));
    summary.push_str(&format!("Email: {}\n", record.email));
    summary.push_str(&format!("Company: {}\n", record.company_name));
    summary.push_str(&format!("Services: {}\n", services));
    if let Some(budget) = record.budget_usd {
        summary.push_str(&format!("Budget (USD): {}\n", budget));
    }
    summary.push_str(&format!("Start Date: {}", record.project_start_date));
    summary
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::OnboardingValidator;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_default_state_uses_today_and_prefills() {
        let state = FormState::new(today(), &[Service::WebDev, Service::Branding]);
        let candidate = state.candidate();

        assert_eq!(candidate.project_start_date, "2025-06-15");
        assert_eq!(candidate.services, vec!["Web Dev", "Branding"]);
        assert!(!candidate.accept_terms);
        assert!(candidate.budget_usd.is_none());
    }

    #[test]
    fn test_toggle_service_adds_then_removes() {
        let mut state = FormState::new(today(), &[]);

        state.toggle_service(Service::UiUx);
        assert_eq!(state.candidate().services, vec!["UI/UX"]);

        state.toggle_service(Service::UiUx);
        assert!(state.candidate().services.is_empty());
    }

    #[test]
    fn test_budget_input_empty_is_absent() {
        let mut state = FormState::new(today(), &[]);
        state.set_budget_input("   ");
        assert!(state.candidate().budget_usd.is_none());
    }

    #[test]
    fn test_budget_input_non_numeric_is_absent() {
        let mut state = FormState::new(today(), &[]);
        state.set_budget_input("lots");
        assert!(state.candidate().budget_usd.is_none());
    }

    #[test]
    fn test_budget_input_integer_string() {
        let mut state = FormState::new(today(), &[]);
        state.set_budget_input("50000");
        assert_eq!(state.candidate().budget_usd, Some(Number::from(50_000)));
    }

    #[test]
    fn test_budget_input_fractional_reaches_validator() {
        // Normalization keeps 100.5 as a number; the integer rule rejects it
        let mut state = FormState::new(today(), &[]);
        state.set_full_name("Ada Lovelace");
        state.set_email("ada@example.com");
        state.set_company_name("Analytical Engines Ltd");
        state.toggle_service(Service::UiUx);
        state.set_accept_terms(true);
        state.set_budget_input("100.5");

        let validator = OnboardingValidator::new();
        let errors = validator.validate(&state.candidate(), today()).unwrap_err();
        assert_eq!(errors.message_for("budgetUsd"), Some("Must be an integer"));
    }

    #[test]
    fn test_filled_form_validates() {
        let mut state = FormState::new(today(), &[Service::MobileApp]);
        state.set_full_name("Ada Lovelace");
        state.set_email("ada@example.com");
        state.set_company_name("Analytical Engines Ltd");
        state.set_accept_terms(true);

        let validator = OnboardingValidator::new();
        let record = validator.validate(&state.candidate(), today()).unwrap();
        assert_eq!(record.services, vec![Service::MobileApp]);
    }

    #[test]
    fn test_success_summary_includes_budget_when_present() {
        let record = OnboardingRecord {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company_name: "Analytical Engines Ltd".to_string(),
            services: vec![Service::UiUx, Service::WebDev],
            budget_usd: Some(50_000),
            project_start_date: "2025-06-15".to_string(),
            accept_terms: true,
        };

        let summary = success_summary(&record);
        assert!(summary.contains("Services: UI/UX, Web Dev"));
        assert!(summary.contains("Budget (USD): 50000"));
    }

    #[test]
    fn test_success_summary_omits_absent_budget() {
        let record = OnboardingRecord {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company_name: "Analytical Engines Ltd".to_string(),
            services: vec![Service::Branding],
            budget_usd: None,
            project_start_date: "2025-06-15".to_string(),
            accept_terms: true,
        };

        assert!(!success_summary(&record).contains("Budget"));
    }
}
