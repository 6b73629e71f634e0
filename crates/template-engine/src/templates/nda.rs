//! Non-Disclosure Agreement

use crate::registry::{Clause, DocumentKind, RenderContext, Section, Template};

pub fn template() -> Template {
    Template {
        kind: DocumentKind::Nda,
        title: "Non-Disclosure Agreement",
        sections: vec![
            Section {
                title: "Parties",
                render: parties,
            },
            Section {
                title: "Definition of Confidential Information",
                render: definition,
            },
            Section {
                title: "Obligations",
                render: obligations,
            },
            Section {
                title: "Term",
                render: term,
            },
        ],
        clauses: vec![
            Clause {
                id: "return-clause",
                body: "<h3>Return of Information</h3>\n<p>Upon termination of this \
                       Agreement or upon request by the Disclosing Party, the Receiving \
                       Party shall promptly return or destroy all materials containing \
                       Confidential Information.</p>",
            },
            Clause {
                id: "injunctive-relief",
                body: "<h3>Injunctive Relief</h3>\n<p>The Receiving Party acknowledges \
                       that any breach of this Agreement may cause irreparable harm to \
                       the Disclosing Party, and that monetary damages may be \
                       inadequate. Therefore, the Disclosing Party shall be entitled to \
                       seek injunctive relief without posting bond.</p>",
            },
        ],
    }
}

fn parties(ctx: &RenderContext<'_>) -> String {
    format!(
        "This Non-Disclosure Agreement (\"Agreement\") is entered into between:\n\
         Disclosing Party: {}\nReceiving Party: {}\nContact: {} ({})",
        ctx.form.or_placeholder("disclosingParty", "Disclosing Party"),
        ctx.form.or_placeholder("receivingParty", "Receiving Party"),
        ctx.form.or_placeholder("fullName", "Contact Name"),
        ctx.form.or_placeholder("email", "Email"),
    )
}

fn definition(_ctx: &RenderContext<'_>) -> String {
    "\"Confidential Information\" means any and all non-public, proprietary, or \
     confidential information disclosed by the Disclosing Party to the Receiving \
     Party, whether orally, in writing, or in any other form."
        .to_string()
}

fn obligations(_ctx: &RenderContext<'_>) -> String {
    "The Receiving Party agrees to:\n\
     1. Hold all Confidential Information in strict confidence\n\
     2. Not disclose Confidential Information to any third parties\n\
     3. Use Confidential Information solely for the purpose of evaluating potential \
     business relationships\n\
     4. Take reasonable precautions to protect the confidentiality of the information"
        .to_string()
}

fn term(ctx: &RenderContext<'_>) -> String {
    format!(
        "This Agreement shall remain in effect for {} from the date of execution, or \
         until terminated by mutual written consent of both parties.",
        ctx.form.or_placeholder("duration", "Duration"),
    )
}
