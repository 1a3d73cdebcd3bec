//! Validates a signup form with one chain per field.
//!
//! Run with `RUST_LOG=rulechain_validator=trace` to see each step.

use std::time::Duration;

use rulechain_validator::prelude::*;
use tracing_subscriber::EnvFilter;

struct Signup<'a> {
    username: &'a str,
    email: &'a str,
    phone: &'a str,
    age: u32,
    tags: Vec<&'a str>,
    session: Duration,
}

fn validate(form: &Signup<'_>) -> Vec<(&'static str, ValidationResult)> {
    let username = Chain::new()
        .and(non_empty(form.username))
        .and(len_between(form.username, 3, 20))
        .and(is_alnum(form.username));

    let email = Chain::new()
        .and(email_valid(form.email))
        .and(email_domain_blocklist(form.email, vec!["spam.io".into()]));

    // Either a local number or any E.164 number is fine.
    let phone = Chain::new()
        .and(phone_with_country_code(form.phone, "+251"))
        .or(phone_e164(form.phone));

    let age = in_range(form.age, 13, 120).and(non_zero(form.age));

    let tags = Chain::new()
        .and(size_between(form.tags.len(), 1, 5))
        .and(unique(form.tags.clone()));

    let session = duration_min(form.session, Duration::from_secs(60))
        .and(duration_max(form.session, Duration::from_secs(8 * 3600)));

    vec![
        ("username", username.evaluate()),
        ("email", email.evaluate()),
        ("phone", phone.evaluate()),
        ("age", age.evaluate()),
        ("tags", tags.evaluate()),
        ("session", session.evaluate()),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let form = Signup {
        username: "bob!",
        email: "bob@spam.io",
        phone: "+15551234567",
        age: 12,
        tags: vec!["rust", "rust"],
        session: Duration::from_secs(30),
    };

    for (field, result) in validate(&form) {
        if result.is_valid() {
            println!("{field}: ok");
        } else {
            println!("{field}: {}", result.messages().join("; "));
        }
    }
}
