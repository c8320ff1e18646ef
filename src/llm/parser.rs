use crate::error::{Error, Result};
use crate::models::CompanyName;

const NO_COMPANIES: &str = "NONE";

/// Turns the model's reply into normalized company names.
///
/// A missing reply, or one containing `NONE` anywhere, means no companies.
/// Entries are separated by commas or line breaks. Bullet or numbered lists
/// are rejected instead of being split best-effort.
pub fn parse_company_list(reply: Option<&str>) -> Result<Vec<CompanyName>> {
    let Some(reply) = reply else {
        return Ok(Vec::new());
    };

    if reply.contains(NO_COMPANIES) {
        return Ok(Vec::new());
    }

    let entries: Vec<&str> = reply.split([',', '\n']).collect();
    if let Some(entry) = entries.iter().find(|e| starts_with_list_marker(e)) {
        return Err(Error::ParseError(format!(
            "Unexpected list marker in entry {:?}",
            entry.trim()
        )));
    }

    Ok(entries.into_iter().filter_map(CompanyName::normalize).collect())
}

fn starts_with_list_marker(entry: &str) -> bool {
    let entry = entry.trim_start();
    if entry.starts_with(['-', '*', '•']) {
        return true;
    }

    let digits = entry.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && entry[digits..].starts_with(['.', ')'])
}
