use serde::{Deserialize, Serialize};

use super::Keyed;

wire_enum! {
    pub enum MessageType("message type") {
        Sms => "SMS", "단문";
        Lms => "LMS", "장문";
        Mms => "MMS", "그림";
    }
}

wire_enum! {
    /// Delivery result; anything the API does not report as success is a failure
    pub enum SmsStatus("sms status", fallback = Fail) {
        Success => "SUCCESS", "성공";
        Fail => "FAIL", "실패";
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsRequest {
    pub receiver: String,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg_type: Option<MessageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Reservation date, `YYYYMMDD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rdate: Option<String>,
    /// Reservation time, `HH:mm`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtime: Option<String>,
}

/// A sent (or reserved) message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsRecord {
    pub id: i64,
    #[serde(default)]
    pub sender: String,
    pub receiver: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg_type: Option<MessageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub rdate: String,
    #[serde(default)]
    pub rtime: String,
    pub status: SmsStatus,
    #[serde(default)]
    pub created_at: String,
}

impl Keyed for SmsRecord {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Entry of the SMS provider's sending history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsHistoryEntry {
    pub mid: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub sms_count: u32,
    #[serde(default)]
    pub reserve_state: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub fail_count: u32,
    #[serde(default)]
    pub reg_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserve: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Keyed for Template {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Success and failure counts over a set of messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeliverySummary {
    pub success: usize,
    pub fail: usize,
}

impl DeliverySummary {
    pub fn of(records: &[SmsRecord]) -> Self {
        records
            .iter()
            .fold(DeliverySummary::default(), |mut summary, record| {
                match record.status {
                    SmsStatus::Success => summary.success += 1,
                    SmsStatus::Fail => summary.fail += 1,
                }
                summary
            })
    }
}
