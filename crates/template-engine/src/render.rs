//! Document composition
//!
//! Assembles the final HTML in fixed order: header, numbered sections,
//! optional "Additional Provisions", signatures, footer. Sections are
//! numbered 1..N; if any customization flag is set the provisions block takes
//! N+1 and signatures N+2, otherwise signatures take N+1.

use shared_types::{Customizations, FieldValues};

use crate::registry::{DocumentKind, RenderContext, Template};

const DISCLAIMER: &str = "<strong>IMPORTANT:</strong> This document is provided as a \
    template and is not a substitute for legal advice. You should consult with a \
    qualified attorney before using this document for any legal purpose. Legal Ally \
    makes no warranties regarding the legal sufficiency or enforceability of this \
    document.";

pub fn render_document(
    template: &Template,
    form: &FieldValues,
    customizations: &Customizations,
    generated_on: &str,
    document_id: &str,
) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"generated-document\">\n");
    html.push_str("<header class=\"document-header\">\n");
    html.push_str(&format!(
        "<h1 class=\"document-title\">{}</h1>\n",
        template.title
    ));
    html.push_str("<div class=\"document-meta\">\n");
    html.push_str(&format!(
        "<p><strong>Generated:</strong> {}</p>\n",
        generated_on
    ));
    html.push_str(&format!(
        "<p><strong>Document ID:</strong> {}</p>\n",
        document_id
    ));
    html.push_str("</div>\n</header>\n");
    html.push_str("<main class=\"document-body\">\n");

    let ctx = RenderContext { form, generated_on };
    for (index, section) in template.sections.iter().enumerate() {
        push_section(&mut html, index + 1, section.title, &(section.render)(&ctx));
    }

    // Selections are counted before filtering against the clause library:
    // a set flag naming no registered clause still produces the provisions
    // header and bumps the signature number, just with nothing in the body.
    let selected: Vec<&str> = customizations
        .iter()
        .filter(|(_, &included)| included)
        .map(|(id, _)| id.as_str())
        .collect();

    let mut next_number = template.sections.len() + 1;
    if !selected.is_empty() {
        let body: String = selected
            .iter()
            .filter_map(|id| template.clause_body(id))
            .collect::<Vec<_>>()
            .join("\n");
        push_section(&mut html, next_number, "Additional Provisions", &body);
        next_number += 1;
    }

    push_signatures(&mut html, next_number, template.kind, form);

    html.push_str("</main>\n");
    html.push_str("<footer class=\"document-footer\">\n");
    html.push_str("<div class=\"legal-disclaimer\">\n<h3>Legal Disclaimer</h3>\n");
    html.push_str(&format!("<p>{}</p>\n</div>\n", DISCLAIMER));
    html.push_str("<div class=\"document-info\">\n");
    html.push_str("<p>Generated by Legal Ally - Professional Legal Document Automation</p>\n");
    html.push_str("<p>For support, visit: support@legalally.com</p>\n");
    html.push_str("</div>\n</footer>\n</div>\n");

    html
}

fn push_section(html: &mut String, number: usize, title: &str, body: &str) {
    html.push_str("<section class=\"document-section\">\n");
    html.push_str(&format!("<h2>{}. {}</h2>\n", number, title));
    html.push_str(&format!(
        "<div class=\"section-content\">\n{}\n</div>\n",
        body
    ));
    html.push_str("</section>\n");
}

fn push_signatures(html: &mut String, number: usize, kind: DocumentKind, form: &FieldValues) {
    html.push_str("<section class=\"document-section signature-section\">\n");
    html.push_str(&format!("<h2>{}. Signatures</h2>\n", number));
    html.push_str("<div class=\"section-content\">\n");
    html.push_str(
        "<p>By signing below, all parties agree to the terms and conditions outlined \
         in this document.</p>\n",
    );

    push_signature_block(html, &form.or_placeholder("fullName", "Your Name"));
    for label in counterparty_labels(kind, form) {
        push_signature_block(html, &label);
    }

    html.push_str("</div>\n</section>\n");
}

/// Counterparty signature lines, determined purely by document kind
fn counterparty_labels(kind: DocumentKind, form: &FieldValues) -> Vec<String> {
    match kind {
        DocumentKind::BusinessContract => {
            vec![form.or_placeholder("companyName", "Company Representative")]
        }
        DocumentKind::RentalAgreement => {
            vec![form.or_placeholder("landlordName", "Landlord Name")]
        }
        DocumentKind::Nda => vec![
            form.or_placeholder("disclosingParty", "Disclosing Party"),
            form.or_placeholder("receivingParty", "Receiving Party"),
        ],
        DocumentKind::EmploymentContract => {
            vec![form.or_placeholder("companyName", "Company Name")]
        }
        DocumentKind::WillTrust | DocumentKind::LlcFormation => {
            vec!["[Other Party]".to_string()]
        }
    }
}

fn push_signature_block(html: &mut String, label: &str) {
    html.push_str("<div class=\"signature-block\">\n<div class=\"signature-line\">\n");
    html.push_str("<div class=\"signature-space\">_________________________________</div>\n");
    html.push_str(&format!(
        "<div class=\"signature-label\">{}</div>\n",
        label
    ));
    html.push_str("<div class=\"signature-date\">Date: _________________</div>\n");
    html.push_str("</div>\n</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    fn render(key: &str, form: &FieldValues, customizations: &Customizations) -> String {
        let registry = Registry::new();
        let template = registry.get(key).unwrap();
        render_document(template, form, customizations, "3/1/2024", "LA-TEST-ABC123")
    }

    #[test]
    fn test_sections_numbered_in_declaration_order() {
        let html = render("nda", &FieldValues::new(), &Customizations::new());
        assert!(html.contains("<h2>1. Parties</h2>"));
        assert!(html.contains("<h2>2. Definition of Confidential Information</h2>"));
        assert!(html.contains("<h2>3. Obligations</h2>"));
        assert!(html.contains("<h2>4. Term</h2>"));
        assert!(html.contains("<h2>5. Signatures</h2>"));
        assert!(!html.contains("Additional Provisions"));
    }

    #[test]
    fn test_included_clause_shifts_signature_number() {
        let customizations: Customizations =
            [("return-clause".to_string(), true)].into_iter().collect();
        let html = render("nda", &FieldValues::new(), &customizations);
        assert!(html.contains("<h2>5. Additional Provisions</h2>"));
        assert!(html.contains("<h2>6. Signatures</h2>"));
        assert!(html.contains("Return of Information"));
    }

    #[test]
    fn test_flag_set_false_is_ignored() {
        let customizations: Customizations =
            [("return-clause".to_string(), false)].into_iter().collect();
        let html = render("nda", &FieldValues::new(), &customizations);
        assert!(!html.contains("Additional Provisions"));
        assert!(html.contains("<h2>5. Signatures</h2>"));
    }

    #[test]
    fn test_bogus_only_flag_still_bumps_numbering() {
        let customizations: Customizations =
            [("bogus-id".to_string(), true)].into_iter().collect();
        let html = render("nda", &FieldValues::new(), &customizations);
        assert!(html.contains("<h2>5. Additional Provisions</h2>"));
        assert!(html.contains("<h2>6. Signatures</h2>"));
        assert!(!html.contains("bogus-id"));
    }

    #[test]
    fn test_unknown_clause_id_skipped_silently() {
        let customizations: Customizations = [
            ("return-clause".to_string(), true),
            ("bogus-id".to_string(), true),
        ]
        .into_iter()
        .collect();
        let html = render("nda", &FieldValues::new(), &customizations);
        assert_eq!(html.matches("Return of Information").count(), 1);
        assert!(!html.contains("bogus-id"));
    }

    #[test]
    fn test_nda_emits_two_counterparty_lines() {
        let html = render("nda", &FieldValues::new(), &Customizations::new());
        assert!(html.contains("[Your Name]"));
        assert!(html.contains("[Disclosing Party]"));
        assert!(html.contains("[Receiving Party]"));
        assert_eq!(html.matches("signature-block").count(), 3);
    }

    #[test]
    fn test_will_emits_default_counterparty() {
        let html = render("will-trust", &FieldValues::new(), &Customizations::new());
        assert!(html.contains("[Other Party]"));
        assert_eq!(html.matches("signature-block").count(), 2);
    }

    #[test]
    fn test_provided_names_appear_on_signature_lines() {
        let form: FieldValues = [
            ("fullName", "Jane Doe"),
            ("disclosingParty", "Acme Corp"),
            ("receivingParty", "Widget LLC"),
        ]
        .into_iter()
        .collect();
        let html = render("nda", &form, &Customizations::new());
        assert!(html.contains("<div class=\"signature-label\">Jane Doe</div>"));
        assert!(html.contains("<div class=\"signature-label\">Acme Corp</div>"));
        assert!(html.contains("<div class=\"signature-label\">Widget LLC</div>"));
    }

    #[test]
    fn test_footer_identical_for_every_kind() {
        let registry = Registry::new();
        for template in registry.iter() {
            let html = render_document(
                template,
                &FieldValues::new(),
                &Customizations::new(),
                "3/1/2024",
                "LA-TEST-ABC123",
            );
            assert!(html.contains("Legal Disclaimer"));
            assert!(html.contains("Generated by Legal Ally"));
            assert!(html.contains("support@legalally.com"));
        }
    }

    #[test]
    fn test_header_carries_date_and_id() {
        let html = render("business-contract", &FieldValues::new(), &Customizations::new());
        assert!(html.contains("<p><strong>Generated:</strong> 3/1/2024</p>"));
        assert!(html.contains("<p><strong>Document ID:</strong> LA-TEST-ABC123</p>"));
        // The Parties section interpolates the same generation date
        assert!(html.contains("entered into on 3/1/2024"));
    }
}
