//! Add and edit relay keys from the command line
//!
//! The command line acts as the dialog host: arguments are replayed into the
//! form as edits followed by blurs, and the save only runs when the form's
//! save gate is open.

use anyhow::{Context, Result, anyhow, bail};
use std::path::PathBuf;

use relaykey::config::Config;
use relaykey::form::{DialogVariant, FormController};
use relaykey::gateway::RelayKeyClient;
use relaykey::host::DialogHost;
use relaykey::{RelayField, RelayRecord};

/// Field values passed on the command line
#[derive(Debug, Default)]
pub struct FieldArgs {
    pub name: Option<String>,
    pub public_key: Option<String>,
    pub description: Option<String>,
}

impl FieldArgs {
    fn get(&self, field: RelayField) -> Option<&str> {
        match field {
            RelayField::Name => self.name.as_deref(),
            RelayField::PublicKey => self.public_key.as_deref(),
            RelayField::Description => self.description.as_deref(),
        }
    }
}

/// Prints the saved record and keeps the notification for the caller
#[derive(Debug, Default)]
struct CliHost {
    closed: bool,
    notification: Option<String>,
}

impl DialogHost for CliHost {
    fn on_submit_success(&mut self, record: &RelayRecord) {
        match serde_json::to_string_pretty(record) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!("Failed to format saved record: {}", e),
        }
    }

    fn close_modal(&mut self) {
        self.closed = true;
    }

    fn notify_error(&mut self, message: &str) {
        self.notification = Some(message.to_string());
    }
}

/// Replay arguments as user input: every editable field is edited (when
/// given) and then blurred, in display order.
fn fill_form(form: &mut FormController, args: &FieldArgs) {
    for field in RelayField::ALL {
        if form.is_field_disabled(field) {
            continue;
        }
        if let Some(value) = args.get(field) {
            form.on_field_change(field, value);
        }
        form.on_field_blur(field);
    }
}

/// Field errors formatted for the terminal
fn field_errors(form: &FormController) -> Vec<String> {
    form.state()
        .errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field.label(), message))
        .collect()
}

/// Load the config and resolve the organization, then build the client
fn connect(config_path: Option<PathBuf>, org: Option<String>) -> Result<RelayKeyClient> {
    let config = match config_path {
        Some(path) => Config::from_file(&path)?,
        None => Config::load()?,
    };
    let org_slug = config
        .org_slug(org.as_deref())
        .context("No organization given: pass --org or set defaults.org_slug in the config")?;

    Ok(RelayKeyClient::new(&config.api, org_slug))
}

async fn run_dialog(
    variant: DialogVariant,
    args: &FieldArgs,
    client: &RelayKeyClient,
) -> Result<()> {
    let mut form = FormController::initialize(variant);
    tracing::debug!("{} for organization {}", form.title(), client.org_slug());
    fill_form(&mut form, args);

    if form.is_save_disabled() {
        bail!("Cannot save:\n  {}", field_errors(&form).join("\n  "));
    }

    let mut host = CliHost::default();

    match form.submit(client, &mut host).await {
        Ok(_) => {
            tracing::debug!("Save complete, dialog closed: {}", host.closed);
            Ok(())
        }
        Err(e) => Err(anyhow!(host.notification.unwrap_or_else(|| e.to_string()))),
    }
}

/// Register a new relay key
pub async fn add_command(
    args: FieldArgs,
    config_path: Option<PathBuf>,
    org: Option<String>,
) -> Result<()> {
    let client = connect(config_path, org)?;
    run_dialog(DialogVariant::add(), &args, &client).await
}

/// Update the name and description of an existing relay key.
///
/// The dialog starts from the stored record, so fields not passed on the
/// command line keep their current values.
pub async fn edit_command(
    public_key: String,
    args: FieldArgs,
    config_path: Option<PathBuf>,
    org: Option<String>,
) -> Result<()> {
    let client = connect(config_path, org)?;
    let existing = client
        .fetch(&public_key)
        .await
        .with_context(|| format!("Failed to load relay key {}", public_key))?;

    run_dialog(DialogVariant::edit(&existing), &args, &client).await
}
