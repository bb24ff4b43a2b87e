use serde::{Deserialize, Serialize};

wire_enum! {
    /// What an e-mail verification code is issued for
    pub enum VerificationType("verification type") {
        SignUp => "SIGNUP", "회원가입";
        PasswordReset => "PASSWORD_RESET", "비밀번호 재설정";
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendVerificationEmailRequest {
    pub email: String,
    #[serde(rename = "type")]
    pub kind: VerificationType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationEmailSent {
    /// ISO 8601 expiry of the issued code
    pub expires_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyEmailCodeRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSignUp {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    pub email: String,
    pub password: String,
    pub contact: String,
    #[serde(default)]
    pub email_verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateSignUp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_registration_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// Agent registration, optionally with the agent's office
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub agent: AgentSignUp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_estate: Option<RealEstateSignUp>,
}
