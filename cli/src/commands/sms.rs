use std::io::Write;

use broker_core::{
    models::sms::{MessageType, SendSmsRequest, TemplateRequest},
    ListFilter, Notifier, Severity, SmsHistoryQuery,
};

use super::{resource, settle};
use crate::{
    api::ApiClient,
    app_config::AppConfig,
    args::{OutputFormat, SendSmsArgs, SmsCommand, SmsHistoryArgs, TemplateArgs, TemplateCommand},
    formatters::{self, print_record, ListFormatter},
    listing::SmsMessages,
    messages,
};

pub fn sms_cmd(
    api: &ApiClient,
    config: &AppConfig,
    subcommand: SmsCommand,
    notifier: &dyn Notifier,
) -> anyhow::Result<()> {
    match subcommand {
        SmsCommand::List(args) => resource::list_cmd::<SmsMessages>(api, config, args, notifier),
        SmsCommand::Browse(args) => resource::browse_cmd::<SmsMessages>(api, config, args, notifier),
        SmsCommand::Show { id } => resource::show_cmd::<SmsMessages>(api, id, notifier),
        SmsCommand::Send(args) => send_cmd(api, args, notifier),
        SmsCommand::History(args) => history_cmd(api, config, args, notifier),
        SmsCommand::Template(subcommand) => template_cmd(api, subcommand, notifier),
    }
}

fn send_cmd(api: &ApiClient, args: SendSmsArgs, notifier: &dyn Notifier) -> anyhow::Result<()> {
    let msg_type = args
        .msg_type
        .as_deref()
        .map(str::parse::<MessageType>)
        .transpose()?;

    let request = SendSmsRequest {
        receiver: args.receiver.chars().filter(char::is_ascii_digit).collect(),
        msg: args.msg,
        msg_type,
        title: args.title,
        rdate: args.rdate,
        rtime: args.rtime,
    };

    let record = settle(api.send_sms(&request), messages::SMS_SEND, notifier)?;

    notifier.show_toast("문자가 발송되었습니다.", Severity::Success);
    print_record(&mut formatters::stdout(), &record)?;

    Ok(())
}

fn history_cmd(
    api: &ApiClient,
    config: &AppConfig,
    args: SmsHistoryArgs,
    notifier: &dyn Notifier,
) -> anyhow::Result<()> {
    let mut query = SmsHistoryQuery::with_size(args.size.filter(|s| *s > 0).unwrap_or(config.page_size));
    query.set_page(args.page.max(1));
    query.start_date = args.start_date;
    query.limit_day = args.limit_day;

    let entries = settle(api.get_sms_histories(&query), messages::SMS_HISTORY, notifier)?;

    let mut stdout = formatters::stdout();
    match args.output {
        OutputFormat::Json => print_record(&mut stdout, &entries)?,
        OutputFormat::Plain | OutputFormat::Pretty => {
            if entries.is_empty() {
                writeln!(stdout, "문자 발송 이력이 없습니다.")?;
            }
            for entry in &entries {
                writeln!(
                    stdout,
                    "{}\t{}\t{}\t{}건 (실패 {}건)\t{}",
                    entry.mid,
                    entry.reg_date,
                    entry.kind,
                    entry.sms_count,
                    entry.fail_count,
                    entry.msg.replace('\n', " ")
                )?;
            }
        }
    }

    Ok(())
}

fn template_cmd(api: &ApiClient, subcommand: TemplateCommand, notifier: &dyn Notifier) -> anyhow::Result<()> {
    let mut stdout = formatters::stdout();

    match subcommand {
        TemplateCommand::List { output } => {
            let templates = settle(api.get_all_templates(), messages::TEMPLATE_LIST, notifier)?;
            ListFormatter::new(output).print_all(&mut stdout, &templates, "등록된 템플릿이 없습니다.")?;
        }
        TemplateCommand::Show { id } => {
            let template = settle(api.get_template(id), messages::TEMPLATE_DETAIL, notifier)?;
            print_record(&mut stdout, &template)?;
        }
        TemplateCommand::Create(args) => {
            let template = settle(
                api.create_template(&template_request(args)),
                messages::TEMPLATE_CREATE,
                notifier,
            )?;
            notifier.show_toast("템플릿이 생성되었습니다.", Severity::Success);
            print_record(&mut stdout, &template)?;
        }
        TemplateCommand::Update { id, template } => {
            let template = settle(
                api.update_template(id, &template_request(template)),
                messages::TEMPLATE_UPDATE,
                notifier,
            )?;
            notifier.show_toast("템플릿이 수정되었습니다.", Severity::Success);
            print_record(&mut stdout, &template)?;
        }
        TemplateCommand::Delete { id } => {
            settle(api.delete_template(id), messages::TEMPLATE_DELETE, notifier)?;
            notifier.show_toast("템플릿이 삭제되었습니다.", Severity::Success);
        }
    }

    Ok(())
}

fn template_request(args: TemplateArgs) -> TemplateRequest {
    TemplateRequest {
        title: args.title,
        content: args.content,
    }
}
