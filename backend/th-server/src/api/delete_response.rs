use serde::Serialize;

/// Body returned by a successful delete
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_id: i64,
}
