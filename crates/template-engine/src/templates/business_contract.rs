//! Business Service Agreement

use crate::registry::{Clause, DocumentKind, RenderContext, Section, Template};

pub fn template() -> Template {
    Template {
        kind: DocumentKind::BusinessContract,
        title: "Business Service Agreement",
        sections: vec![
            Section {
                title: "Parties",
                render: parties,
            },
            Section {
                title: "Services",
                render: services,
            },
            Section {
                title: "Compensation",
                render: compensation,
            },
            Section {
                title: "Term",
                render: term,
            },
        ],
        clauses: vec![
            Clause {
                id: "termination",
                body: "<h3>Early Termination</h3>\n<p>Either party may terminate this \
                       Agreement with thirty (30) days written notice to the other party.</p>",
            },
            Clause {
                id: "confidentiality",
                body: "<h3>Confidentiality</h3>\n<p>Both parties agree to maintain the \
                       confidentiality of any proprietary information shared during the \
                       course of this Agreement.</p>",
            },
            Clause {
                id: "dispute-resolution",
                body: "<h3>Dispute Resolution</h3>\n<p>Any disputes arising under this \
                       Agreement shall be resolved through binding arbitration in \
                       accordance with the rules of the American Arbitration \
                       Association.</p>",
            },
        ],
    }
}

fn parties(ctx: &RenderContext<'_>) -> String {
    format!(
        "This Business Service Agreement (\"Agreement\") is entered into on {} \
         between {} (\"Client\") and {} (\"Provider\").",
        ctx.generated_on,
        ctx.form.or_placeholder("fullName", "Client Name"),
        ctx.form.or_placeholder("companyName", "Service Provider"),
    )
}

fn services(ctx: &RenderContext<'_>) -> String {
    format!(
        "Provider agrees to provide the following services: {}.\n\
         The contract type is: {}.",
        ctx.form.or_placeholder("serviceDescription", "Service Description"),
        ctx.form.or_placeholder("contractType", "Contract Type"),
    )
}

fn compensation(ctx: &RenderContext<'_>) -> String {
    format!(
        "Client agrees to pay Provider {} for the services described herein.\n\
         Payment terms: {}.",
        ctx.form.or_placeholder("contractValue", "Amount"),
        ctx.form.filled("paymentTerms").unwrap_or("Net 30 days"),
    )
}

fn term(ctx: &RenderContext<'_>) -> String {
    format!(
        "This Agreement shall commence on {} and shall continue for {} unless \
         terminated earlier in accordance with the terms herein.",
        ctx.form.or_placeholder("startDate", "Start Date"),
        ctx.form.or_placeholder("duration", "Duration"),
    )
}
