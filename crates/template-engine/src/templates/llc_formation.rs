//! Limited Liability Company Operating Agreement

use crate::registry::{DocumentKind, RenderContext, Section, Template};

pub fn template() -> Template {
    Template {
        kind: DocumentKind::LlcFormation,
        title: "Limited Liability Company Operating Agreement",
        sections: vec![
            Section {
                title: "Formation",
                render: formation,
            },
            Section {
                title: "Members",
                render: members,
            },
            Section {
                title: "Management",
                render: management,
            },
            Section {
                title: "Distributions",
                render: distributions,
            },
        ],
        clauses: vec![],
    }
}

fn formation(ctx: &RenderContext<'_>) -> String {
    format!(
        "This Operating Agreement is entered into by the members of {}, a Limited \
         Liability Company formed under the laws of {}.",
        ctx.form.or_placeholder("companyName", "LLC Name"),
        ctx.form.or_placeholder("state", "State"),
    )
}

fn members(ctx: &RenderContext<'_>) -> String {
    format!(
        "The initial member(s) of the LLC are:\nName: {}\nAddress: {}\nEmail: {}\n\
         Initial Contribution: {}",
        ctx.form.or_placeholder("fullName", "Member Name"),
        ctx.form.or_placeholder("address", "Address"),
        ctx.form.or_placeholder("email", "Email"),
        ctx.form.or_placeholder("initialContribution", "Amount"),
    )
}

fn management(ctx: &RenderContext<'_>) -> String {
    format!(
        "The LLC shall be managed by {}. All major business decisions require {} \
         approval of the members.",
        ctx.form.filled("managementType").unwrap_or("its members"),
        ctx.form.filled("votingThreshold").unwrap_or("majority"),
    )
}

fn distributions(_ctx: &RenderContext<'_>) -> String {
    "Distributions shall be made to members in proportion to their ownership \
     interests, as determined by the members from time to time."
        .to_string()
}
