//! Employment Agreement

use crate::registry::{DocumentKind, RenderContext, Section, Template};

pub fn template() -> Template {
    Template {
        kind: DocumentKind::EmploymentContract,
        title: "Employment Agreement",
        sections: vec![
            Section {
                title: "Parties",
                render: parties,
            },
            Section {
                title: "Position and Duties",
                render: position,
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
        clauses: vec![],
    }
}

fn parties(ctx: &RenderContext<'_>) -> String {
    format!(
        "This Employment Agreement is between {} (\"Company\") and {} (\"Employee\").",
        ctx.form.or_placeholder("companyName", "Company Name"),
        ctx.form.or_placeholder("fullName", "Employee Name"),
    )
}

fn position(ctx: &RenderContext<'_>) -> String {
    format!(
        "Employee is hired as {} and agrees to perform duties as assigned by the \
         Company.\nEmployee will report to {}.",
        ctx.form.or_placeholder("jobTitle", "Job Title"),
        ctx.form.or_placeholder("supervisor", "Supervisor Name"),
    )
}

fn compensation(ctx: &RenderContext<'_>) -> String {
    format!(
        "Employee will receive an annual salary of {}, paid in accordance with \
         Company's regular payroll schedule.\nEmployee is eligible for {}.",
        ctx.form.or_placeholder("salary", "Salary Amount"),
        ctx.form.filled("benefits").unwrap_or("standard company benefits"),
    )
}

fn term(ctx: &RenderContext<'_>) -> String {
    format!(
        "This agreement begins on {} and continues until terminated by either party \
         in accordance with the terms herein.",
        ctx.form.or_placeholder("startDate", "Start Date"),
    )
}
