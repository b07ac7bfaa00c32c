//! Shared test fixtures: a small CRM-flavored corpus and its field schema.

#![allow(dead_code)]

use riffle::FieldSpec;

/// A client record the way a UI-facing filter sees one: a couple of text
/// fields plus a numeric field that searches as display text.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub name: String,
    pub company: String,
    pub email: String,
    pub balance: f64,
}

pub fn client(name: &str, company: &str, email: &str, balance: f64) -> Client {
    Client {
        name: name.to_string(),
        company: company.to_string(),
        email: email.to_string(),
        balance,
    }
}

/// The default corpus used across the ranking tests.
pub fn sample_clients() -> Vec<Client> {
    vec![
        client(
            "John Smith",
            "Elite Construction Co.",
            "john.smith@eliteconstruction.com",
            1250.50,
        ),
        client(
            "Jane Doe",
            "Budget Plumbing",
            "jane@budgetplumbing.com",
            89.00,
        ),
        client(
            "Carlos Rivera",
            "Rivera Roofing & Siding",
            "carlos@riveraroofing.com",
            4420.75,
        ),
        client(
            "Amelia Chen",
            "Chen Electrical",
            "amelia.chen@chenelectrical.com",
            310.25,
        ),
    ]
}

/// The weighted schema the tests rank against: names matter most, the
/// formatted balance least.
pub fn client_fields() -> Vec<FieldSpec<Client>> {
    vec![
        FieldSpec::weighted("name", 2.0, |c: &Client| c.name.clone()),
        FieldSpec::weighted("company", 1.5, |c: &Client| c.company.clone()),
        FieldSpec::new("email", |c: &Client| c.email.clone()),
        FieldSpec::weighted("balance", 0.5, |c: &Client| format!("{:.2}", c.balance)),
    ]
}

/// Unit-weight schema over a plain string collection.
pub fn name_only() -> Vec<FieldSpec<String>> {
    vec![FieldSpec::new("name", |s: &String| s.clone())]
}
