use serde::{Deserialize, Serialize};

use super::{Keyed, Lenient};

wire_enum! {
    pub enum ConsultationType("consultation type") {
        Phone => "PHONE", "전화";
        Visit => "VISIT", "방문";
    }
}

wire_enum! {
    /// Unknown statuses from the API read as `Reserved`
    pub enum ConsultationStatus("consultation status", fallback = Reserved) {
        Reserved => "RESERVED", "예약";
        Completed => "COMPLETED", "완료";
        Canceled => "CANCELED", "취소";
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    pub agent_id: i64,
    pub customer_id: i64,
    pub consultation_type: ConsultationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// ISO 8601
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultation_date: Option<String>,
    pub status: ConsultationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationCustomer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: i64,
    pub agent_id: i64,
    pub customer: ConsultationCustomer,
    pub consultation_type: Lenient<ConsultationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultation_date: Option<String>,
    pub status: ConsultationStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

impl Keyed for Consultation {
    fn key(&self) -> i64 {
        self.id
    }
}
