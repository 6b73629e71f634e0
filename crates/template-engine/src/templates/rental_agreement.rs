//! Residential Lease Agreement

use crate::registry::{Clause, DocumentKind, RenderContext, Section, Template};

pub fn template() -> Template {
    Template {
        kind: DocumentKind::RentalAgreement,
        title: "Residential Lease Agreement",
        sections: vec![
            Section {
                title: "Property",
                render: property,
            },
            Section {
                title: "Parties",
                render: parties,
            },
            Section {
                title: "Lease Terms",
                render: lease_terms,
            },
            Section {
                title: "Payment Terms",
                render: payment_terms,
            },
        ],
        clauses: vec![
            Clause {
                id: "pet-policy",
                body: "<h3>Pet Policy</h3>\n<p>Tenant may keep pets on the premises with \
                       prior written consent from Landlord. Additional pet deposit of \
                       $200 per pet is required.</p>",
            },
            Clause {
                id: "maintenance",
                body: "<h3>Maintenance Responsibilities</h3>\n<p>Landlord is responsible \
                       for major repairs and maintenance. Tenant is responsible for \
                       routine maintenance and minor repairs under $100.</p>",
            },
            Clause {
                id: "utilities",
                body: "<h3>Utilities</h3>\n<p>Tenant is responsible for all utilities \
                       including electricity, gas, water, sewer, trash, and internet \
                       services.</p>",
            },
        ],
    }
}

fn property(ctx: &RenderContext<'_>) -> String {
    format!(
        "This Residential Lease Agreement is for the property located at: {}.",
        ctx.form.or_placeholder("propertyAddress", "Property Address"),
    )
}

fn parties(ctx: &RenderContext<'_>) -> String {
    format!(
        "Landlord: {}\nTenant: {}\nEmail: {}\nPhone: {}",
        ctx.form.or_placeholder("landlordName", "Landlord Name"),
        ctx.form.or_placeholder("fullName", "Tenant Name"),
        ctx.form.or_placeholder("email", "Email Address"),
        ctx.form.or_placeholder("phone", "Phone Number"),
    )
}

fn lease_terms(ctx: &RenderContext<'_>) -> String {
    format!(
        "Lease Start Date: {}\nLease Term: {} months\nMonthly Rent: {}\nSecurity Deposit: {}",
        ctx.form.or_placeholder("leaseStart", "Start Date"),
        ctx.form.or_placeholder("leaseTerm", "Term"),
        ctx.form.or_placeholder("rentAmount", "Rent Amount"),
        ctx.form.or_placeholder("securityDeposit", "Security Deposit"),
    )
}

fn payment_terms(_ctx: &RenderContext<'_>) -> String {
    "Rent is due on the first day of each month. Late fees of $50 will be charged for \
     payments received after the 5th of the month.\nSecurity deposit will be held in \
     accordance with state law and returned within 30 days of lease termination, less \
     any deductions for damages."
        .to_string()
}
