use broker_core::{
    models::auth::{SignUpRequest, VerificationType},
    Notifier, Severity,
};

use super::{read_payload, settle};
use crate::{api::ApiClient, args::AuthCommand, messages};

pub fn auth_cmd(api: &ApiClient, subcommand: AuthCommand, notifier: &dyn Notifier) -> anyhow::Result<()> {
    match subcommand {
        AuthCommand::SendCode { email, kind } => {
            let kind: VerificationType = kind.parse()?;
            let sent = settle(
                api.send_verification_email(&email, kind),
                messages::AUTH_SEND_EMAIL,
                notifier,
            )?;

            notifier.show_toast("인증 메일이 발송되었습니다.", Severity::Success);
            println!("expires at {}", sent.expires_at);
        }
        AuthCommand::Verify { email, code } => {
            settle(api.verify_email_code(&email, &code), messages::AUTH_VERIFY_CODE, notifier)?;
            notifier.show_toast("이메일 인증이 완료되었습니다.", Severity::Success);
        }
        AuthCommand::Signup(payload) => {
            let request: SignUpRequest = read_payload(&payload.file)?;
            settle(api.sign_up(&request), messages::AUTH_SIGN_UP, notifier)?;
            notifier.show_toast("회원가입이 완료되었습니다.", Severity::Success);
        }
    }

    Ok(())
}
