//! Last Will and Testament

use crate::registry::{DocumentKind, RenderContext, Section, Template};

pub fn template() -> Template {
    Template {
        kind: DocumentKind::WillTrust,
        title: "Last Will and Testament",
        sections: vec![
            Section {
                title: "Declaration",
                render: declaration,
            },
            Section {
                title: "Executor",
                render: executor,
            },
            Section {
                title: "Beneficiaries",
                render: beneficiaries,
            },
            Section {
                title: "Guardian",
                render: guardian,
            },
        ],
        clauses: vec![],
    }
}

fn declaration(ctx: &RenderContext<'_>) -> String {
    format!(
        "I, {}, of {}, being of sound mind and disposing memory, do hereby make, \
         publish, and declare this to be my Last Will and Testament, hereby revoking \
         all former wills and codicils by me made.",
        ctx.form.or_placeholder("fullName", "Full Name"),
        ctx.form.or_placeholder("address", "Address"),
    )
}

fn executor(ctx: &RenderContext<'_>) -> String {
    let executor = ctx.form.or_placeholder("executorName", "Executor Name");
    format!(
        "I hereby nominate and appoint {} as the Executor of this Will. If {} is \
         unable or unwilling to serve, I nominate {} as alternate Executor.",
        executor,
        executor,
        ctx.form.or_placeholder("alternateExecutor", "Alternate Executor"),
    )
}

fn beneficiaries(_ctx: &RenderContext<'_>) -> String {
    "I give, devise, and bequeath all of my property, both real and personal, to my \
     beneficiaries as follows:\n[Beneficiary details to be specified based on user input]"
        .to_string()
}

fn guardian(ctx: &RenderContext<'_>) -> String {
    format!(
        "If I have minor children at the time of my death, I nominate {} as guardian \
         of the person and property of my minor children.",
        ctx.form.or_placeholder("guardianName", "Guardian Name"),
    )
}
