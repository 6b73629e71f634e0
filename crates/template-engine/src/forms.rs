//! Form-field and clause-option catalogs for wizard collaborators
//!
//! Pure data and per-field checks; no rendering or storage here. The
//! `leaseStart` check is deliberately stricter than the document-level
//! validator: field entry demands a future date, generation only demands a
//! parseable one.

use chrono::NaiveDate;

use crate::patterns;
use crate::registry::DocumentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    TextArea,
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// One input a wizard should render for a document kind
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
    pub help: Option<&'static str>,
    pub tooltip: Option<&'static str>,
    pub options: &'static [SelectOption],
    pub rows: Option<u8>,
}

const BLANK: FieldSpec = FieldSpec {
    name: "",
    label: "",
    kind: FieldKind::Text,
    required: false,
    placeholder: None,
    help: None,
    tooltip: None,
    options: &[],
    rows: None,
};

/// A clause toggle a wizard should offer for a document kind.
///
/// Some ids intentionally have no registered fragment yet (force-majeure,
/// subletting, residual-knowledge); the renderer skips them silently.
#[derive(Debug, Clone, Copy)]
pub struct ClauseOption {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
}

const COMMON_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: "fullName",
        label: "Full Legal Name",
        required: true,
        placeholder: Some("Enter your full legal name"),
        help: Some("Enter your name exactly as it appears on legal documents"),
        tooltip: Some("This should match your government-issued ID"),
        ..BLANK
    },
    FieldSpec {
        name: "email",
        label: "Email Address",
        kind: FieldKind::Email,
        required: true,
        placeholder: Some("your@email.com"),
        help: Some("We'll use this for document delivery and updates"),
        ..BLANK
    },
    FieldSpec {
        name: "phone",
        label: "Phone Number",
        kind: FieldKind::Tel,
        placeholder: Some("(555) 123-4567"),
        help: Some("Optional but recommended for urgent communications"),
        ..BLANK
    },
];

const BUSINESS_CONTRACT_FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "companyName",
        label: "Company Name",
        required: true,
        help: Some("Legal name of your business entity"),
        ..BLANK
    },
    FieldSpec {
        name: "contractType",
        label: "Contract Type",
        kind: FieldKind::Select,
        required: true,
        options: &[
            SelectOption { value: "service", label: "Service Agreement" },
            SelectOption { value: "supply", label: "Supply Agreement" },
            SelectOption { value: "partnership", label: "Partnership Agreement" },
            SelectOption { value: "consulting", label: "Consulting Agreement" },
            SelectOption { value: "maintenance", label: "Maintenance Agreement" },
        ],
        help: Some("Select the type that best describes your business relationship"),
        ..BLANK
    },
    FieldSpec {
        name: "contractValue",
        label: "Contract Value",
        required: true,
        placeholder: Some("$10,000.00"),
        help: Some("Total value of the contract (use format: $X,XXX.XX)"),
        ..BLANK
    },
    FieldSpec {
        name: "duration",
        label: "Contract Duration",
        required: true,
        placeholder: Some("12 months"),
        help: Some("How long will this contract be in effect?"),
        ..BLANK
    },
    FieldSpec {
        name: "serviceDescription",
        label: "Service Description",
        kind: FieldKind::TextArea,
        required: true,
        placeholder: Some("Describe the services to be provided..."),
        help: Some("Detailed description of services, deliverables, or products"),
        rows: Some(4),
        ..BLANK
    },
];

const RENTAL_AGREEMENT_FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        name: "propertyAddress",
        label: "Property Address",
        kind: FieldKind::TextArea,
        required: true,
        placeholder: Some("123 Main Street\nAnytown, ST 12345"),
        help: Some("Complete address including unit number if applicable"),
        rows: Some(3),
        ..BLANK
    },
    FieldSpec {
        name: "rentAmount",
        label: "Monthly Rent",
        required: true,
        placeholder: Some("$1,500.00"),
        help: Some("Monthly rent amount (format: $X,XXX.XX)"),
        ..BLANK
    },
    FieldSpec {
        name: "securityDeposit",
        label: "Security Deposit",
        required: true,
        placeholder: Some("$1,500.00"),
        help: Some("Security deposit amount (typically equal to one month's rent)"),
        ..BLANK
    },
    FieldSpec {
        name: "leaseStart",
        label: "Lease Start Date",
        kind: FieldKind::Date,
        required: true,
        help: Some("When does the lease period begin?"),
        ..BLANK
    },
    FieldSpec {
        name: "leaseTerm",
        label: "Lease Term",
        kind: FieldKind::Select,
        required: true,
        options: &[
            SelectOption { value: "6", label: "6 months" },
            SelectOption { value: "12", label: "12 months" },
            SelectOption { value: "18", label: "18 months" },
            SelectOption { value: "24", label: "24 months" },
        ],
        help: Some("Length of the lease agreement"),
        ..BLANK
    },
    FieldSpec {
        name: "landlordName",
        label: "Landlord Name",
        required: true,
        placeholder: Some("Property owner or management company"),
        help: Some("Legal name of the property owner or authorized agent"),
        ..BLANK
    },
];

const NDA_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "disclosingParty",
        label: "Disclosing Party",
        required: true,
        placeholder: Some("Company or individual sharing information"),
        help: Some("Party that will be sharing confidential information"),
        ..BLANK
    },
    FieldSpec {
        name: "receivingParty",
        label: "Receiving Party",
        required: true,
        placeholder: Some("Company or individual receiving information"),
        help: Some("Party that will receive confidential information"),
        ..BLANK
    },
    FieldSpec {
        name: "ndaType",
        label: "NDA Type",
        kind: FieldKind::Select,
        required: true,
        options: &[
            SelectOption {
                value: "mutual",
                label: "Mutual NDA (both parties share information)",
            },
            SelectOption {
                value: "unilateral",
                label: "Unilateral NDA (one party shares information)",
            },
        ],
        help: Some(
            "Choose based on whether one or both parties will share confidential information",
        ),
        ..BLANK
    },
    FieldSpec {
        name: "duration",
        label: "Duration",
        kind: FieldKind::Select,
        required: true,
        options: &[
            SelectOption { value: "1", label: "1 year" },
            SelectOption { value: "2", label: "2 years" },
            SelectOption { value: "3", label: "3 years" },
            SelectOption { value: "5", label: "5 years" },
            SelectOption {
                value: "indefinite",
                label: "Indefinite (until information becomes public)",
            },
        ],
        help: Some("How long should the confidentiality obligations last?"),
        ..BLANK
    },
];

const BUSINESS_CONTRACT_CLAUSES: [ClauseOption; 4] = [
    ClauseOption {
        id: "termination",
        title: "Early Termination Clause",
        description: "Allows either party to terminate the contract with proper notice",
        impact: "Provides flexibility but may reduce contract security",
    },
    ClauseOption {
        id: "confidentiality",
        title: "Confidentiality Provisions",
        description: "Protects sensitive business information shared during the contract",
        impact: "Essential for protecting trade secrets and proprietary information",
    },
    ClauseOption {
        id: "dispute-resolution",
        title: "Dispute Resolution",
        description: "Specifies mediation and arbitration procedures for conflicts",
        impact: "Can save time and money compared to court litigation",
    },
    ClauseOption {
        id: "force-majeure",
        title: "Force Majeure Clause",
        description: "Protects parties from liability due to extraordinary circumstances",
        impact: "Important protection against unforeseeable events",
    },
];

const RENTAL_AGREEMENT_CLAUSES: [ClauseOption; 4] = [
    ClauseOption {
        id: "pet-policy",
        title: "Pet Policy",
        description: "Includes provisions for pets on the property",
        impact: "Clarifies pet rules and associated fees or deposits",
    },
    ClauseOption {
        id: "maintenance",
        title: "Maintenance Responsibilities",
        description: "Clearly defines landlord and tenant maintenance duties",
        impact: "Prevents disputes over repair responsibilities",
    },
    ClauseOption {
        id: "utilities",
        title: "Utility Arrangements",
        description: "Specifies which utilities are included in rent",
        impact: "Clarifies utility payment responsibilities",
    },
    ClauseOption {
        id: "subletting",
        title: "Subletting Policy",
        description: "Rules regarding tenant's ability to sublet the property",
        impact: "Controls who can occupy the property",
    },
];

const NDA_CLAUSES: [ClauseOption; 3] = [
    ClauseOption {
        id: "return-clause",
        title: "Information Return Clause",
        description: "Requires return of confidential materials upon request",
        impact: "Ensures confidential materials don't remain with receiving party",
    },
    ClauseOption {
        id: "injunctive-relief",
        title: "Injunctive Relief",
        description: "Allows for immediate court action in case of breach",
        impact: "Provides stronger enforcement mechanism for violations",
    },
    ClauseOption {
        id: "residual-knowledge",
        title: "Residual Knowledge Exception",
        description: "Allows use of general knowledge retained in memory",
        impact: "Balances protection with practical business needs",
    },
];

/// Ordered fields a wizard should present: common ones, then kind-specific
pub fn form_fields(kind: DocumentKind) -> Vec<FieldSpec> {
    let mut fields = COMMON_FIELDS.to_vec();
    fields.extend_from_slice(specific_fields(kind));
    fields
}

fn specific_fields(kind: DocumentKind) -> &'static [FieldSpec] {
    match kind {
        DocumentKind::BusinessContract => &BUSINESS_CONTRACT_FIELDS,
        DocumentKind::RentalAgreement => &RENTAL_AGREEMENT_FIELDS,
        DocumentKind::Nda => &NDA_FIELDS,
        _ => &[],
    }
}

pub fn clause_options(kind: DocumentKind) -> &'static [ClauseOption] {
    match kind {
        DocumentKind::BusinessContract => &BUSINESS_CONTRACT_CLAUSES,
        DocumentKind::RentalAgreement => &RENTAL_AGREEMENT_CLAUSES,
        DocumentKind::Nda => &NDA_CLAUSES,
        _ => &[],
    }
}

/// Field-level verdict with a UI-grade message.
///
/// Empty input is fine here; required-ness comes from the catalog.
pub fn check_field(name: &str, value: &str, today: NaiveDate) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }

    match name {
        "email" if !patterns::is_valid_email(value) => Err("Please enter a valid email address"),
        "phone" if !patterns::is_valid_phone(value) => Err("Please enter a valid phone number"),
        "contractValue" | "rentAmount" | "securityDeposit"
            if !patterns::is_strict_currency(value) =>
        {
            Err("Please enter a valid amount (e.g., $1,000.00)")
        }
        "leaseStart" if !patterns::is_future_date(value, today) => {
            Err("Please enter a valid date")
        }
        _ => Ok(()),
    }
}

/// Normalize a money-ish input into `$X,XXX.XX`; None when nothing numeric
pub fn format_currency(input: &str) -> Option<String> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let amount: f64 = cleaned.parse().ok()?;

    let fixed = format!("{:.2}", amount);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    Some(format!("${}.{}", grouped, cents))
}

/// Group phone digits into `(XXX) XXX-XXXX` as the user types
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        0..=2 => digits,
        3..=5 => format!("({}) {}", &digits[..3], &digits[3..]),
        // Mid-entry lengths (6-9 digits) pass through ungrouped
        6..=9 => digits,
        _ => format!(
            "({}) {}-{}{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..10],
            &digits[10..]
        ),
    }
}
