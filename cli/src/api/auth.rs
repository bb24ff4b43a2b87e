use broker_core::{
    models::auth::{
        SendVerificationEmailRequest, SignUpRequest, VerificationEmailSent, VerificationType,
        VerifyEmailCodeRequest,
    },
    ApiResponse,
};

use super::ApiClient;
use crate::messages;

impl ApiClient {
    pub fn send_verification_email(
        &self,
        email: &str,
        kind: VerificationType,
    ) -> ApiResponse<VerificationEmailSent> {
        let request = SendVerificationEmailRequest {
            email: email.to_string(),
            kind,
        };
        self.post("/auth/email/send", &request, messages::AUTH_SEND_EMAIL)
    }

    pub fn verify_email_code(&self, email: &str, code: &str) -> ApiResponse<()> {
        let request = VerifyEmailCodeRequest {
            email: email.to_string(),
            code: code.to_string(),
        };
        self.post_unit("/auth/email/verify", &request, messages::AUTH_VERIFY_CODE)
    }

    pub fn sign_up(&self, request: &SignUpRequest) -> ApiResponse<()> {
        self.post_unit("/auth/signup", request, messages::AUTH_SIGN_UP)
    }
}
