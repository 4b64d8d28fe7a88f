//! The signed-in user record.

use serde::{Deserialize, Serialize};

/// Current user as returned by the account endpoint.
///
/// Only the fields shopkit reads are modelled; everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Right-to-left interface language. Absent on records fetched before
    /// locale settings load.
    #[serde(rename = "isRTL", default, skip_serializing_if = "Option::is_none")]
    pub is_rtl: Option<bool>,
}
