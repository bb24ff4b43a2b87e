use serde::{Deserialize, Serialize};

use super::{Keyed, Lenient};

wire_enum! {
    pub enum Gender("gender") {
        Male => "M", "남성";
        Female => "F", "여성";
    }
}

/// Body of customer registration and update calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub name: String,
    pub email: String,
    /// Phone number, hyphens kept as entered
    pub contact: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_group: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Lenient<Gender>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_group: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Keyed for Customer {
    fn key(&self) -> i64 {
        self.id
    }
}
