use serde::{Deserialize, Serialize};

use super::{contract::Contract, customer::Customer, Keyed, Lenient};

wire_enum! {
    pub enum PropertyType("property type") {
        Apartment => "APARTMENT", "아파트";
        Villa => "VILLA", "빌라";
        Officetel => "OFFICETEL", "오피스텔";
        Commercial => "COMMERCIAL", "상가";
        OneRoom => "ONE_ROOM", "원룸";
        TwoRoom => "TWO_ROOM", "투룸";
    }
}

/// Body of property registration and update calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRequest {
    pub customer_id: i64,
    pub property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub road_address: String,
    pub jibun_address: String,
    pub detail_address: String,
}

/// Property row as listed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub property_type: Lenient<PropertyType>,
    #[serde(default)]
    pub detail_address: String,
    #[serde(default)]
    pub road_address: String,
    #[serde(default)]
    pub jibun_address: String,
    /// Open for new contracts
    #[serde(default)]
    pub active: bool,
}

impl Keyed for Property {
    fn key(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    pub id: i64,
    pub property_type: Lenient<PropertyType>,
    pub customer: Customer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub dong: String,
    #[serde(default)]
    pub detail_address: String,
    #[serde(default)]
    pub road_address: String,
    #[serde(default)]
    pub jibun_address: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub contract_list: Vec<Contract>,
    #[serde(default)]
    pub active: bool,
}
