use serde::{Deserialize, Serialize};

use super::{customer::Customer, Keyed, Lenient};

wire_enum! {
    /// Kind of deal a contract covers
    pub enum ContractType("contract type") {
        Sale => "SALE", "매매";
        Jeonse => "JEONSE", "전세";
        MonthlyRent => "MONTHLY_RENT", "월세";
    }
}

wire_enum! {
    /// Progress of a contract
    pub enum ContractStatus("contract status") {
        Available => "AVAILABLE", "거래 가능";
        InProgress => "IN_PROGRESS", "계약 진행 중";
        Completed => "COMPLETED", "계약 완료";
    }
}

/// Body of contract registration and update calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRequest {
    pub property_id: i64,
    pub customer_id: i64,
    pub contract_type: ContractType,
    pub contract_status: ContractStatus,
    /// Required for sale contracts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<i64>,
    /// Required for jeonse contracts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jeonse_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_rent_fee: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_rent_deposit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Same as `expired_at` for sale contracts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired_at: Option<String>,
}

/// Contract as listed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: i64,
    pub property_id: i64,
    #[serde(default)]
    pub property_address: String,
    pub customer_id: i64,
    #[serde(default)]
    pub customer_name: String,
    pub contract_type: Lenient<ContractType>,
    pub contract_status: Lenient<ContractStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jeonse_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_rent_fee: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_rent_deposit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Contract {
    /// Headline price for the contract's deal type, if known
    pub fn price_summary(&self) -> Option<String> {
        match self.contract_type.known()? {
            ContractType::Sale => self.sale_price.map(|p| format!("매매 {}", p)),
            ContractType::Jeonse => self.jeonse_price.map(|p| format!("전세 {}", p)),
            ContractType::MonthlyRent => match (self.monthly_rent_deposit, self.monthly_rent_fee) {
                (Some(deposit), Some(fee)) => Some(format!("보증금 {} / 월 {}", deposit, fee)),
                (None, Some(fee)) => Some(format!("월 {}", fee)),
                _ => None,
            },
        }
    }
}

impl Keyed for Contract {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Property block embedded in a contract detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractProperty {
    pub id: i64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub detail_address: String,
    #[serde(default)]
    pub property_type: String,
}

/// Contract with its property and customer expanded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDetail {
    #[serde(flatten)]
    pub contract: Contract,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<ContractProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}
