use std::io::Write;

use api_types::{amount::AmountParsed, date::DateParsed, entry::EntryParsed};
use chrono::NaiveDate;
use engine::{Currency, DateNormalizer, MinorUnits};
use serde::Serialize;

use crate::{
    error::{AppError, Result},
    settings::{Cli, Command, Settings},
};

pub fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    match &cli.command {
        Command::Amount(args) => {
            let input = args.text.join(" ");
            let amount = engine::normalize_amount(&input)?;
            let parsed = amount_view(input, amount, settings.currency);
            let text = format!("{}\t{}", parsed.plain, parsed.display);
            emit(cli.json, &parsed, &text)
        }
        Command::Date(args) => {
            let input = args.text.join(" ");
            let reference = settings.reference_date(args.reference);
            let date = settings.date_normalizer().parse(&input, reference)?;
            let parsed = DateParsed {
                input,
                reference,
                date,
            };
            emit(cli.json, &parsed, &date.to_string())
        }
        Command::Entry(args) => {
            let reference = settings.reference_date(args.reference);
            let entry = parse_entry(
                &args.what,
                &args.when,
                &args.how_much,
                reference,
                settings.date_normalizer(),
                settings.currency,
            )?;
            let text = format!(
                "{}\t{}\t{}",
                entry.date, entry.amount.display, entry.description
            );
            emit(cli.json, &entry, &text)
        }
    }
}

/// Prints a user-facing failure: JSON on stdout, or the message on stderr.
pub fn report(err: &AppError, json: bool) {
    match err.to_failure() {
        Some(failure) if json => match serde_json::to_string(&failure) {
            Ok(body) => println!("{body}"),
            Err(err) => tracing::error!("failed to serialize failure: {err}"),
        },
        Some(failure) => {
            if let Some(reason) = &failure.reason {
                tracing::debug!("rejected: {reason}");
            }
            match &failure.field {
                Some(field) => eprintln!("{field}: {}", failure.message),
                None => eprintln!("{}", failure.message),
            }
        }
        None => tracing::error!("{err}"),
    }
}

/// Validates a complete entry the way the capture screen does before saving:
/// description first, then date, then amount, which must be above zero.
pub fn parse_entry(
    what: &str,
    when: &str,
    how_much: &str,
    reference: NaiveDate,
    dates: DateNormalizer,
    currency: Currency,
) -> Result<EntryParsed> {
    let description = what.trim();
    if description.is_empty() {
        return Err(AppError::EmptyDescription);
    }

    let date = dates
        .parse(when, reference)
        .map_err(|source| AppError::Field {
            field: "when",
            source,
        })?;
    let amount = engine::normalize_amount(how_much).map_err(|source| AppError::Field {
        field: "how_much",
        source,
    })?;
    if !amount.is_positive() {
        return Err(AppError::AmountNotPositive);
    }

    tracing::info!(%date, minor = amount.minor(), "entry ready");
    Ok(EntryParsed {
        description: description.to_string(),
        date,
        amount: amount_view(how_much.to_string(), amount, currency),
    })
}

fn amount_view(input: String, amount: MinorUnits, currency: Currency) -> AmountParsed {
    AmountParsed {
        input,
        currency: match currency {
            Currency::Mad => api_types::Currency::Mad,
        },
        minor: amount.minor(),
        plain: amount.to_string(),
        display: amount.format_with_currency(currency),
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer(&mut out, value)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{text}")?;
    }
    Ok(())
}
