//! Legal document template engine
//!
//! Owns a fixed registry of document templates and renders a filled HTML
//! document from (document type, field values, selected clauses). Everything
//! around it — wizard step UI, storage, exports — calls in with plain data
//! and gets back a rendered string or a validation verdict.

pub mod error;
pub mod forms;
pub mod ident;
pub mod metadata;
pub mod patterns;
pub mod registry;
pub mod render;
pub mod templates;
pub mod validate;

pub use error::TemplateError;
pub use registry::{Clause, DocumentKind, Registry, RenderContext, Section, Template};

use ident::{Clock, IdSource, SystemClock, UuidIdSource};
use shared_types::{
    Customizations, DocumentMetadata, FieldValues, GeneratedDocument, ValidationResult,
};

/// TemplateEngine entry point
pub struct TemplateEngine {
    registry: Registry,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self::with_sources(Box::new(SystemClock), Box::new(UuidIdSource))
    }

    /// Pin the clock and id source; tests use this for deterministic output
    pub fn with_sources(clock: Box<dyn Clock>, ids: Box<dyn IdSource>) -> Self {
        Self {
            registry: Registry::new(),
            clock,
            ids,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render a filled document. The one failure path is an unknown type;
    /// missing field values degrade to placeholders instead.
    pub fn generate_document(
        &self,
        document_type: &str,
        form: &FieldValues,
        customizations: &Customizations,
    ) -> Result<GeneratedDocument, TemplateError> {
        let template = self
            .registry
            .get(document_type)
            .ok_or_else(|| TemplateError::TemplateNotFound(document_type.to_string()))?;

        let now = self.clock.now();
        let document_id = ident::document_id(now, self.ids.as_ref());
        let generated_on = now.format("%-m/%-d/%Y").to_string();
        let html =
            render::render_document(template, form, customizations, &generated_on, &document_id);

        Ok(GeneratedDocument {
            document_id,
            document_type: document_type.to_string(),
            html,
            generated_at: now.to_rfc3339(),
        })
    }

    /// Check whether form data is sufficient to generate; findings come back
    /// as data so the caller can render them inline and retry
    pub fn validate_document(&self, document_type: &str, form: &FieldValues) -> ValidationResult {
        validate::validate(document_type, form)
    }

    /// Descriptive facts for display; None for unknown types
    pub fn document_metadata(&self, document_type: &str) -> Option<DocumentMetadata> {
        self.registry.get(document_type).map(metadata::describe)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    struct FixedIds(&'static str);

    impl IdSource for FixedIds {
        fn random_suffix(&self) -> String {
            self.0.to_string()
        }
    }

    fn fixed_engine() -> TemplateEngine {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        TemplateEngine::with_sources(Box::new(FixedClock(now)), Box::new(FixedIds("abc123")))
    }

    #[test]
    fn test_empty_form_renders_every_section_with_placeholders() {
        let engine = fixed_engine();
        for kind in DocumentKind::ALL {
            let doc = engine
                .generate_document(kind.key(), &FieldValues::new(), &Customizations::new())
                .unwrap();
            let template = engine.registry().get(kind.key()).unwrap();
            for section in &template.sections {
                assert!(
                    doc.html.contains(section.title),
                    "{} output missing section {}",
                    kind.key(),
                    section.title
                );
            }
            assert!(doc.html.contains("[Your Name]"));
        }
    }

    #[test]
    fn test_unknown_type_is_the_only_failure() {
        let engine = fixed_engine();
        let result =
            engine.generate_document("prenup", &FieldValues::new(), &Customizations::new());
        assert!(matches!(result, Err(TemplateError::TemplateNotFound(_))));
    }

    #[test]
    fn test_identical_inputs_yield_identical_documents_under_fixed_sources() {
        let engine = fixed_engine();
        let form: FieldValues = [("fullName", "Jane Doe"), ("email", "a@b.com")]
            .into_iter()
            .collect();
        let customizations: Customizations =
            [("return-clause".to_string(), true)].into_iter().collect();

        let a = engine.generate_document("nda", &form, &customizations).unwrap();
        let b = engine.generate_document("nda", &form, &customizations).unwrap();
        assert_eq!(a.html, b.html);
        assert_eq!(a.document_id, b.document_id);
    }

    #[test]
    fn test_document_id_shape() {
        let engine = TemplateEngine::new();
        let doc = engine
            .generate_document("nda", &FieldValues::new(), &Customizations::new())
            .unwrap();
        let re = regex::Regex::new(r"^LA-[0-9A-Z]+-[0-9A-Z]{6}$").unwrap();
        assert!(re.is_match(&doc.document_id), "bad id: {}", doc.document_id);
        assert!(doc.html.contains(&doc.document_id));
    }

    #[test]
    fn test_system_sources_vary_id_across_calls() {
        let engine = TemplateEngine::new();
        let a = engine
            .generate_document("nda", &FieldValues::new(), &Customizations::new())
            .unwrap();
        let b = engine
            .generate_document("nda", &FieldValues::new(), &Customizations::new())
            .unwrap();
        assert_ne!(a.document_id, b.document_id);
    }

    #[test]
    fn test_validation_and_generation_are_decoupled() {
        // Validation findings never block the render path itself.
        let engine = fixed_engine();
        let form = FieldValues::new();
        let verdict = engine.validate_document("nda", &form);
        assert!(!verdict.is_valid);

        let doc = engine
            .generate_document("nda", &form, &Customizations::new())
            .unwrap();
        assert!(doc.html.contains("[Disclosing Party]"));
    }

    #[test]
    fn test_metadata_for_known_and_unknown_types() {
        let engine = fixed_engine();
        let meta = engine.document_metadata("business-contract").unwrap();
        assert_eq!(meta.title, "Business Service Agreement");
        assert_eq!(meta.sections, 4);
        assert_eq!(meta.custom_clauses, 3);
        assert!(engine.document_metadata("prenup").is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn kind_strategy() -> impl Strategy<Value = DocumentKind> {
        prop::sample::select(DocumentKind::ALL.to_vec())
    }

    proptest! {
        /// Property: generation never panics and never fails for registered
        /// kinds, whatever the form data
        #[test]
        fn generation_total_over_form_data(
            kind in kind_strategy(),
            entries in prop::collection::btree_map("[a-zA-Z]{1,15}", ".{0,40}", 0..8),
        ) {
            let engine = TemplateEngine::new();
            let form: FieldValues = entries.into_iter().collect();
            let doc = engine
                .generate_document(kind.key(), &form, &Customizations::new())
                .unwrap();
            prop_assert!(doc.html.contains("Legal Disclaimer"));
        }

        /// Property: unknown clause ids never leak into the output
        #[test]
        fn unknown_clause_ids_never_leak(
            kind in kind_strategy(),
            flags in prop::collection::btree_map("bogus-[a-z]{4,8}", any::<bool>(), 1..5),
        ) {
            let engine = TemplateEngine::new();
            let ids: Vec<String> = flags.keys().cloned().collect();
            let doc = engine
                .generate_document(kind.key(), &FieldValues::new(), &flags)
                .unwrap();
            for id in ids {
                prop_assert!(!doc.html.contains(&id));
            }
        }

        /// Property: every generated id matches the published format
        #[test]
        fn ids_always_well_formed(kind in kind_strategy()) {
            let engine = TemplateEngine::new();
            let doc = engine
                .generate_document(kind.key(), &FieldValues::new(), &Customizations::new())
                .unwrap();
            let re = regex::Regex::new(r"^LA-[0-9A-Z]+-[0-9A-Z]{6}$").unwrap();
            prop_assert!(re.is_match(&doc.document_id));
        }
    }
}
