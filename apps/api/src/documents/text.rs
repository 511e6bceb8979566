// Text helpers shared by every document: address cleanup, issue dates and
// the fixed descriptions of parties and vehicles.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::documents::clauses::GRANTEE_SEPARATOR;
use crate::documents::spec::{CompanyRecord, PersonRecord, VehicleDescriptor};

fn postal_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i),?\s*CEP:?\s*\d{5}-?\d{3}\.?").expect("postal code pattern is valid")
    })
}

fn iso_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("ISO date pattern is valid")
    })
}

fn comma_run_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r",(?:\s*,)+").expect("comma run pattern is valid"))
}

fn trailing_comma_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r",\s*$").expect("trailing comma pattern is valid"))
}

/// Strips Brazilian postal codes (`CEP 12345-678`, `CEP: 12345678.` and the
/// like, with an optional leading comma) from an address, then tidies the
/// punctuation the removal leaves behind.
///
/// Removal repeats until nothing matches, so `normalize_address` is idempotent.
pub fn normalize_address(text: &str) -> String {
    let mut cleaned = text.to_string();
    while postal_code_pattern().is_match(&cleaned) {
        cleaned = postal_code_pattern().replace_all(&cleaned, "").into_owned();
    }
    let cleaned = comma_run_pattern().replace_all(&cleaned, ",");
    let cleaned = trailing_comma_pattern().replace(&cleaned, "");
    cleaned.trim().to_string()
}

/// `YYYY-MM-DD` becomes `DD/MM/YYYY`. Anything else is kept as sent.
pub fn format_issue_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    // chrono alone accepts short years, signs and padding.
    if !iso_date_pattern().is_match(raw) {
        debug!(raw, "Issue date is not ISO, keeping it verbatim");
        return raw.to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(e) => {
            debug!(raw, error = %e, "Issue date is not ISO, keeping it verbatim");
            raw.to_string()
        }
    }
}

fn describe_person(person: &PersonRecord) -> String {
    format!(
        "{}, {}, maior, inscrito sob o CPF: {}, residente e domiciliado em {}",
        person.name,
        person.nationality,
        person.cpf,
        normalize_address(&person.address)
    )
}

/// Joins grantees in order with `", e/ou: "` and closes the sentence.
/// An empty list yields an empty description.
pub fn compose_grantees(grantees: &[PersonRecord]) -> String {
    if grantees.is_empty() {
        return String::new();
    }
    let joined = grantees
        .iter()
        .map(describe_person)
        .collect::<Vec<_>>()
        .join(GRANTEE_SEPARATOR);
    format!("{joined}.")
}

/// Description of a single individual, grantor or grantee.
pub fn describe_individual(person: &PersonRecord) -> String {
    compose_grantees(std::slice::from_ref(person))
}

pub fn describe_company(company: &CompanyRecord) -> String {
    format!(
        "{}, inscrito sob o CNPJ: {}, estabelecida em {}.",
        company.corporate_name,
        company.cnpj,
        normalize_address(&company.address)
    )
}

/// Vehicle identification as it appears in the scope line.
pub fn describe_vehicle(vehicle: &VehicleDescriptor, with_year_model: bool) -> String {
    let mut text = format!(
        "{}, Placa: {}, RENAVAM: {}, CHASSI: {}",
        vehicle.name, vehicle.plate, vehicle.renavam, vehicle.chassis
    );
    if with_year_model {
        text.push_str(", ANO/MODELO ");
        text.push_str(&vehicle.year_model);
    }
    text.push_str(", cor ");
    text.push_str(&vehicle.color);
    text.push('.');
    text
}
