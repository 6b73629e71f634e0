//! Descriptive template facts for display
//!
//! Non-authoritative: counts plus canned page-length and complexity labels.
//! Types not listed in the tables fall back to "2-4 pages" / "Moderate".

use shared_types::DocumentMetadata;

use crate::registry::Template;

pub fn describe(template: &Template) -> DocumentMetadata {
    DocumentMetadata {
        title: template.title.to_string(),
        sections: template.sections.len(),
        custom_clauses: template.clauses.len(),
        estimated_length: estimated_length(template.kind.key()).to_string(),
        complexity: complexity(template.kind.key()).to_string(),
    }
}

pub fn estimated_length(document_type: &str) -> &'static str {
    match document_type {
        "business-contract" => "2-3 pages",
        "rental-agreement" => "3-4 pages",
        "will-trust" => "4-6 pages",
        "llc-formation" => "5-8 pages",
        "nda" => "2-3 pages",
        "employment-contract" => "3-5 pages",
        _ => "2-4 pages",
    }
}

pub fn complexity(document_type: &str) -> &'static str {
    match document_type {
        "nda" => "Simple",
        "rental-agreement" => "Moderate",
        "business-contract" => "Moderate",
        "employment-contract" => "Moderate",
        "will-trust" => "Complex",
        "llc-formation" => "Complex",
        _ => "Moderate",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nda_metadata() {
        let registry = Registry::new();
        let meta = describe(registry.get("nda").unwrap());
        assert_eq!(meta.title, "Non-Disclosure Agreement");
        assert_eq!(meta.sections, 4);
        assert_eq!(meta.custom_clauses, 2);
        assert_eq!(meta.estimated_length, "2-3 pages");
        assert_eq!(meta.complexity, "Simple");
    }

    #[test]
    fn test_clause_free_kind_reports_zero() {
        let registry = Registry::new();
        let meta = describe(registry.get("llc-formation").unwrap());
        assert_eq!(meta.custom_clauses, 0);
        assert_eq!(meta.complexity, "Complex");
    }

    #[test]
    fn test_unlisted_type_falls_back() {
        assert_eq!(estimated_length("prenup"), "2-4 pages");
        assert_eq!(complexity("prenup"), "Moderate");
    }
}
