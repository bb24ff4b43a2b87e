use std::io::{self, Write};

use broker_core::{FetchOutcome, ListController, ListFilter, Notifier, Severity};
use tracing::info;

use super::{read_payload, settle, AlreadyReported};
use crate::{
    api::ApiClient,
    app_config::AppConfig,
    args::{ListArgs, ResourceCommand},
    browse::BrowseSession,
    formatters::{self, print_record, ListFormatter},
    listing::{Editable, Resource},
};

/// Builds a controller for `R` with the flag-supplied filter and page
pub(crate) fn controller_for<R: Resource>(
    config: &AppConfig,
    args: &ListArgs,
) -> anyhow::Result<ListController<R::Filter, R::Item>> {
    let size = args.size.filter(|s| *s > 0).unwrap_or(config.page_size);

    let mut controller = ListController::new(R::Filter::with_size(size))
        .with_policy(config.policy())
        .with_failure_message(R::LIST_FAILED);

    for (field, value) in &args.filters {
        controller.set_filter_field(field, Some(value))?;
    }
    if args.page > 1 {
        controller.change_page(args.page);
    }

    Ok(controller)
}

/// One fetch, printed once
pub fn list_cmd<R: Resource>(
    api: &ApiClient,
    config: &AppConfig,
    args: ListArgs,
    notifier: &dyn Notifier,
) -> anyhow::Result<()> {
    let mut controller = controller_for::<R>(config, &args)?;

    let outcome = controller.fetch_with(|filter| R::fetch_page(api, filter), notifier);

    let mut stdout = formatters::stdout();
    ListFormatter::new(args.output).print_page(
        &mut stdout,
        controller.items(),
        controller.pagination(),
        R::empty_text(controller.filter()),
    )?;

    match outcome {
        Some(FetchOutcome::Failed { .. }) => Err(AlreadyReported.into()),
        _ => Ok(()),
    }
}

pub fn browse_cmd<R: Resource>(
    api: &ApiClient,
    config: &AppConfig,
    args: ListArgs,
    notifier: &dyn Notifier,
) -> anyhow::Result<()> {
    let controller = controller_for::<R>(config, &args)?;
    let mut session = BrowseSession::<R>::new(api, controller, ListFormatter::new(args.output));

    let mut stdout = formatters::stdout();
    session.run(io::stdin().lock(), &mut stdout, notifier)?;
    stdout.flush()?;

    Ok(())
}

pub fn show_cmd<R: Resource>(api: &ApiClient, id: i64, notifier: &dyn Notifier) -> anyhow::Result<()> {
    let detail = settle(R::fetch_detail(api, id), R::DETAIL_FAILED, notifier)?;
    print_record(&mut formatters::stdout(), &detail)?;

    Ok(())
}

/// Dispatches a resource subcommand with register/update/delete support
pub fn resource_cmd<R: Editable>(
    api: &ApiClient,
    config: &AppConfig,
    subcommand: ResourceCommand,
    notifier: &dyn Notifier,
) -> anyhow::Result<()> {
    match subcommand {
        ResourceCommand::List(args) => list_cmd::<R>(api, config, args, notifier)?,
        ResourceCommand::Browse(args) => browse_cmd::<R>(api, config, args, notifier)?,
        ResourceCommand::Show { id } => show_cmd::<R>(api, id, notifier)?,
        ResourceCommand::Create(payload) => {
            let request: R::Request = read_payload(&payload.file)?;
            let created = settle(R::create(api, &request), R::CREATE_FAILED, notifier)?;

            info!("record created");
            notifier.show_toast(R::CREATED, Severity::Success);
            print_record(&mut formatters::stdout(), &created)?;
        }
        ResourceCommand::Update { id, payload } => {
            let request: R::Request = read_payload(&payload.file)?;
            settle(R::update(api, id, &request), R::UPDATE_FAILED, notifier)?;

            info!(id, "record updated");
            notifier.show_toast(R::UPDATED, Severity::Success);
        }
        ResourceCommand::Delete { id } => {
            settle(R::delete(api, id), R::DELETE_FAILED, notifier)?;

            info!(id, "record deleted");
            notifier.show_toast(R::DELETED, Severity::Success);
        }
    }

    Ok(())
}
