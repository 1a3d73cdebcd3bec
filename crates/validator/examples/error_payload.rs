//! Turns a failed chain into the two boundary error shapes.

use rulechain_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let card = "4539-1488-0343-6467";
    let result = Chain::new()
        .and(non_empty(card))
        .and(luhn_valid(card))
        .or(is_uuid_v4(card))
        .evaluate();

    if let Some(err) = json_error(result.messages()) {
        println!("json:   {err}");
    }
    if let Some(err) = joined_error(result.messages()) {
        println!("joined: {}", err.to_string().replace('\n', " | "));
    }

    // The same failure as an ordinary `Result`, ready for `?`.
    result.into_result()?;
    Ok(())
}
