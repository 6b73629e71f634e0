//! Static catalog of supported document kinds

use shared_types::FieldValues;

use crate::templates;

/// Supported document kinds, keyed by their stable string ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocumentKind {
    BusinessContract,
    RentalAgreement,
    Nda,
    WillTrust,
    LlcFormation,
    EmploymentContract,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 6] = [
        DocumentKind::BusinessContract,
        DocumentKind::RentalAgreement,
        DocumentKind::Nda,
        DocumentKind::WillTrust,
        DocumentKind::LlcFormation,
        DocumentKind::EmploymentContract,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "business-contract" => Some(DocumentKind::BusinessContract),
            "rental-agreement" => Some(DocumentKind::RentalAgreement),
            "nda" => Some(DocumentKind::Nda),
            "will-trust" => Some(DocumentKind::WillTrust),
            "llc-formation" => Some(DocumentKind::LlcFormation),
            "employment-contract" => Some(DocumentKind::EmploymentContract),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            DocumentKind::BusinessContract => "business-contract",
            DocumentKind::RentalAgreement => "rental-agreement",
            DocumentKind::Nda => "nda",
            DocumentKind::WillTrust => "will-trust",
            DocumentKind::LlcFormation => "llc-formation",
            DocumentKind::EmploymentContract => "employment-contract",
        }
    }
}

/// Inputs available to section renderers.
///
/// Some sections interpolate the generation date, so the injected clock's
/// output travels alongside the field values.
pub struct RenderContext<'a> {
    pub form: &'a FieldValues,
    /// Locale-style generation date, e.g. `3/1/2024`
    pub generated_on: &'a str,
}

pub type SectionRenderer = fn(&RenderContext<'_>) -> String;

/// One numbered block of a document, with a pure render function
pub struct Section {
    pub title: &'static str,
    pub render: SectionRenderer,
}

/// An optional HTML fragment a user may opt into
pub struct Clause {
    pub id: &'static str,
    pub body: &'static str,
}

/// Fixed blueprint for one document kind
pub struct Template {
    pub kind: DocumentKind,
    pub title: &'static str,
    pub sections: Vec<Section>,
    pub clauses: Vec<Clause>,
}

impl Template {
    pub fn clause_body(&self, id: &str) -> Option<&'static str> {
        self.clauses.iter().find(|c| c.id == id).map(|c| c.body)
    }
}

/// Read-only template catalog, built once per engine
pub struct Registry {
    templates: Vec<Template>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            templates: vec![
                templates::business_contract::template(),
                templates::rental_agreement::template(),
                templates::nda::template(),
                templates::will_trust::template(),
                templates::llc_formation::template(),
                templates::employment_contract::template(),
            ],
        }
    }

    /// Lookup by string key; an unknown key is a normal outcome, not an error
    pub fn get(&self, document_type: &str) -> Option<&Template> {
        let kind = DocumentKind::from_key(document_type)?;
        self.get_kind(kind)
    }

    pub fn get_kind(&self, kind: DocumentKind) -> Option<&Template> {
        self.templates.iter().find(|t| t.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
