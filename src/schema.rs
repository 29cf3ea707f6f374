// 📋 Schema Validation - Onboarding Record
// Field-level rules for the client onboarding form

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Number;

// ============================================================================
// SERVICE ENUM
// ============================================================================

/// The closed set of services a client can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Branding")]
    Branding,
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "Mobile App")]
    MobileApp,
}

impl Service {
    /// All services, in display order
    pub const ALL: [Service; 4] = [
        Service::UiUx,
        Service::Branding,
        Service::WebDev,
        Service::MobileApp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::UiUx => "UI/UX",
            Service::Branding => "Branding",
            Service::WebDev => "Web Dev",
            Service::MobileApp => "Mobile App",
        }
    }

    /// Parse the exact display literal (case-sensitive); anything else is None
    pub fn parse(raw: &str) -> Option<Service> {
        Service::ALL.iter().copied().find(|s| s.as_str() == raw)
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CANDIDATE & RECORD
// ============================================================================

/// Raw form state as submitted, before any rule has run.
/// Services arrive as plain strings and the budget as an arbitrary JSON
/// number; the validator narrows both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingCandidate {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_usd: Option<Number>,
    #[serde(default)]
    pub project_start_date: String,
    #[serde(default)]
    pub accept_terms: bool,
}

/// A fully validated onboarding record.
/// Serializes to the wire shape the submission endpoint expects:
/// camelCase keys, `budgetUsd` omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub services: Vec<Service>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_usd: Option<i64>,
    pub project_start_date: String,
    pub accept_terms: bool,
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// One error per failing field, in field declaration order.
/// A field never appears twice: rules within a field short-circuit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        FieldErrors { errors: Vec::new() }
    }

    fn push(&mut self, field: &str, message: String) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message,
        });
    }

    /// Look up the message for a field, if it failed
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

pub type ValidationResult = Result<OnboardingRecord, FieldErrors>;

// ============================================================================
// ONBOARDING VALIDATOR
// ============================================================================

const NAME_PATTERN: &str = r"^[A-Za-z\s'-]+$";
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";

/// Stateless validator for onboarding submissions.
/// Holds only the compiled patterns; safe to share and call concurrently.
pub struct OnboardingValidator {
    name_pattern: Regex,
    email_pattern: Regex,
}

impl OnboardingValidator {
    pub fn new() -> Self {
        OnboardingValidator {
            name_pattern: Regex::new(NAME_PATTERN).expect("name pattern compiles"),
            email_pattern: Regex::new(EMAIL_PATTERN).expect("email pattern compiles"),
        }
    }

    /// Validate a candidate against the clock-injected "today".
    ///
    /// Every field is checked; the error set carries one entry per
    /// failing field (the first rule that fails for that field).
    pub fn validate(&self, candidate: &OnboardingCandidate, today: NaiveDate) -> ValidationResult {
        let mut errors = FieldErrors::new();

        if let Err(message) = self.check_full_name(&candidate.full_name) {
            errors.push("fullName", message);
        }

        if let Err(message) = self.check_email(&candidate.email) {
            errors.push("email", message);
        }

        if let Err(message) = check_company_name(&candidate.company_name) {
            errors.push("companyName", message);
        }

        let services = match check_services(&candidate.services) {
            Ok(parsed) => parsed,
            Err(message) => {
                errors.push("services", message);
                Vec::new()
            }
        };

        let budget_usd = match &candidate.budget_usd {
            Some(number) => match check_budget(number) {
                Ok(value) => Some(value),
                Err(message) => {
                    errors.push("budgetUsd", message);
                    None
                }
            },
            None => None,
        };

        if let Err(message) = check_start_date(&candidate.project_start_date, today) {
            errors.push("projectStartDate", message);
        }

        if !candidate.accept_terms {
            errors.push("acceptTerms", "You must accept the terms".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(OnboardingRecord {
            full_name: candidate.full_name.clone(),
            email: candidate.email.clone(),
            company_name: candidate.company_name.clone(),
            services,
            budget_usd,
            project_start_date: candidate.project_start_date.clone(),
            accept_terms: true,
        })
    }

    /// Convenience entry point: validate against the local calendar date
    pub fn validate_now(&self, candidate: &OnboardingCandidate) -> ValidationResult {
        self.validate(candidate, Local::now().date_naive())
    }

    fn check_full_name(&self, value: &str) -> Result<(), String> {
        let length = value.chars().count();
        if length < 2 {
            return Err("Full name must be at least 2 characters".to_string());
        }
        if length > 80 {
            return Err("Full name must be at most 80 characters".to_string());
        }
        if !self.name_pattern.is_match(value) {
            return Err("Only letters, spaces, ' and - allowed".to_string());
        }
        Ok(())
    }

    fn check_email(&self, value: &str) -> Result<(), String> {
        if !self.email_pattern.is_match(value) {
            return Err("Invalid email address".to_string());
        }
        Ok(())
    }
}

impl Default for OnboardingValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_company_name(value: &str) -> Result<(), String> {
    let length = value.chars().count();
    if length < 2 {
        return Err("Company name must be at least 2 characters".to_string());
    }
    if length > 100 {
        return Err("Company name must be at most 100 characters".to_string());
    }
    Ok(())
}

fn check_services(values: &[String]) -> Result<Vec<Service>, String> {
    let mut parsed = Vec::with_capacity(values.len());
    for raw in values {
        match Service::parse(raw) {
            Some(service) => parsed.push(service),
            None => return Err("Invalid service selection".to_string()),
        }
    }
    if parsed.is_empty() {
        return Err("Please select at least one service".to_string());
    }
    Ok(parsed)
}

fn check_budget(number: &Number) -> Result<i64, String> {
    if let Some(value) = number.as_i64() {
        if value < 100 {
            return Err("Minimum budget is 100".to_string());
        }
        if value > 1_000_000 {
            return Err("Maximum budget is 1,000,000".to_string());
        }
        return Ok(value);
    }

    // Integers outside i64 range are still integers, just far past the cap
    if number.as_u64().is_some() {
        return Err("Maximum budget is 1,000,000".to_string());
    }

    match number.as_f64() {
        Some(float) if float.fract() == 0.0 => {
            if float < 100.0 {
                Err("Minimum budget is 100".to_string())
            } else {
                Err("Maximum budget is 1,000,000".to_string())
            }
        }
        _ => Err("Must be an integer".to_string()),
    }
}

fn check_start_date(value: &str, today: NaiveDate) -> Result<(), String> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) if date >= today => Ok(()),
        // Unparseable input fails the same way a past date does
        _ => Err("Date must be today or later".to_string()),
    }
}

// ============================================================================
// TESTS
// ============================================================================
