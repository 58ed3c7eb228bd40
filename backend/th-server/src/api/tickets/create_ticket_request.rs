use serde::Deserialize;

/// POST body for a new ticket. Status, id and date are not client-settable.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTicketRequest {
    pub name: String,
    pub problem_description: String,

    /// Defaults to "Medium"
    pub priority: Option<String>,
}
