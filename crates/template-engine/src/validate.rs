//! Document-level validation
//!
//! Decides whether form data is sufficient to generate a document. Findings
//! come back as data, never as errors: the caller renders them inline and the
//! user retries with corrected input. Unknown document types get only the
//! common checks; the not-found error belongs to generation.

use shared_types::{FieldValues, ValidationResult};

use crate::patterns;
use crate::registry::DocumentKind;

pub fn validate(document_type: &str, form: &FieldValues) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if form
        .filled("fullName")
        .map(|name| name.trim().chars().count() < 2)
        .unwrap_or(true)
    {
        errors.push("Full name is required and must be at least 2 characters".to_string());
    }

    if form
        .filled("email")
        .map(|email| !patterns::is_valid_email(email))
        .unwrap_or(true)
    {
        errors.push("Valid email address is required".to_string());
    }

    match DocumentKind::from_key(document_type) {
        Some(DocumentKind::BusinessContract) => {
            if form.filled("companyName").is_none() {
                errors.push("Company name is required for business contracts".to_string());
            }
            if !has_currency(form, "contractValue") {
                errors.push("Valid contract value is required".to_string());
            }
        }
        Some(DocumentKind::RentalAgreement) => {
            if form.filled("propertyAddress").is_none() {
                errors.push("Property address is required".to_string());
            }
            if !has_currency(form, "rentAmount") {
                errors.push("Valid rent amount is required".to_string());
            }
            if !form
                .filled("leaseStart")
                .map(patterns::is_valid_date)
                .unwrap_or(false)
            {
                errors.push("Valid lease start date is required".to_string());
            }
        }
        Some(DocumentKind::Nda) => {
            if form.filled("disclosingParty").is_none() {
                errors.push("Disclosing party name is required".to_string());
            }
            if form.filled("receivingParty").is_none() {
                errors.push("Receiving party name is required".to_string());
            }
        }
        _ => {}
    }

    if form.filled("phone").is_none() {
        warnings.push("Phone number is recommended for contact purposes".to_string());
    }

    ValidationResult::from_findings(errors, warnings)
}

fn has_currency(form: &FieldValues, name: &str) -> bool {
    form.filled(name)
        .map(patterns::is_valid_currency)
        .unwrap_or(false)
}
