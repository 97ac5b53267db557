//! Wire models for the invitation inbox endpoints.
//!
//! The invitation service identifies records by `uuid` and names by
//! `full_name`; deserialization also accepts the `id` / `displayName`
//! aliases so both shapes of the listing payload parse.

use serde::{Deserialize, Serialize};

/// One candidate/invitation record as returned by the listing endpoints.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InboxItem {
    #[serde(rename = "uuid", alias = "id")]
    pub id: String,
    #[serde(rename = "full_name", alias = "displayName")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Success body of all four listing endpoints.
///
/// A body that omits `items` entirely parses as an empty list.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct InboxListResponse {
    #[serde(default)]
    pub items: Vec<InboxItem>,
}

/// Optional failure body of a non-2xx listing response.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
