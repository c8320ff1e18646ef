use crate::models::GitHubUser;

pub const COMPANY_PROMPT: &str = "Comma separated list of mentioned names of companies. \
If it sounds like a bot do not include. Clean output. Say \"NONE\" if none";

/// Builds the extraction prompt for one profile. Field text is embedded
/// as-is inside quotes; a missing field shows up as the text `"null"`.
pub fn company_prompt(user: &GitHubUser) -> String {
    format!(
        "{}\n\n{{\"bio\": \"{}\", \"company\": \"{}\"}}",
        COMPANY_PROMPT,
        user.bio.as_deref().unwrap_or("null"),
        user.company.as_deref().unwrap_or("null"),
    )
}
