use std::io::{self, BufRead, Write};

use anyhow::Context;
use colored::Colorize;

use crate::domain::ports::population::{LookupError, PopulationLookup};

/// Looks up one code taken from `code`, or from stdin when absent.
///
/// # Errors
///
/// Returns an error only if stdin cannot be read. Lookup failures are
/// printed, not returned.
pub async fn run_population(
    lookup: &dyn PopulationLookup,
    code: Option<String>,
) -> anyhow::Result<()> {
    let raw = match code {
        Some(code) => code,
        None => prompt_code(&mut io::stdin().lock())?,
    };

    let Some(code) = parse_code(&raw) else {
        eprintln!(
            "{} '{}' is not an integer code",
            "error:".red().bold(),
            raw.trim()
        );
        return Ok(());
    };

    tracing::debug!("Looking up population for {code}");
    let outcome = lookup.population(code).await;
    match outcome {
        Ok(_) => println!("{}", describe(&outcome).green()),
        Err(_) => println!("{}", describe(&outcome).red()),
    }
    Ok(())
}

fn prompt_code(input: &mut impl BufRead) -> anyhow::Result<String> {
    print!("Commune or department code: ");
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read code")?;
    Ok(line)
}

/// Integer value of the trimmed input, if any.
#[must_use]
pub fn parse_code(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// One-line outcome shown to the user.
#[must_use]
pub fn describe(outcome: &Result<u64, LookupError>) -> String {
    match outcome {
        Ok(population) => format!("Population: {population}"),
        Err(e) => {
            let mut sentence = e.to_string();
            if let Some(first) = sentence.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            sentence
        }
    }
}
