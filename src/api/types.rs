//! API response type definitions.

use serde::Deserialize;
use std::collections::HashMap;

/// Body of an `appdetails` response, keyed by the requested app ID.
pub type AppDetailsResponse = HashMap<String, AppDetailsEntry>;

/// Per-app entry of an `appdetails` response.
#[derive(Debug, Clone, Deserialize)]
pub struct AppDetailsEntry {
    pub success: bool,
    #[serde(default)]
    pub data: Option<AppData>,
}

/// Store data for an app. Only the fields we read are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct AppData {
    pub name: String,
}
