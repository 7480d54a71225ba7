use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    /// Zero-based position of the chosen option
    pub option_index: i64,
}
