use serde::{Deserialize, Serialize};

/// One entry of the static event dataset.
///
/// Dates stay in their `YYYY-MM-DD` text form: the dataset is not
/// validated, and a malformed date must degrade into a mis-grouped or
/// mis-labeled card rather than a failed decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub title: String,

    pub date_start: String,

    pub date_end: String,

    pub image: String,

    #[serde(default)]
    pub document_url: Option<String>,

    pub active: bool,
}
