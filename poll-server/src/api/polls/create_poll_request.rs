use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePollRequest {
    /// Poll question (required, 5-200 characters after trimming)
    pub title: String,

    /// Option texts in display order (2-10 entries, each 1-100 characters)
    pub options: Vec<String>,
}
