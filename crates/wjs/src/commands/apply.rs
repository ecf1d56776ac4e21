//! `wjs apply` command implementation.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use wjs_client::WikiJsClient;
use wjs_config::{CliSettings, Config};
use wjs_reconcile::{Outcome, Params, Reconciler, State};

use crate::error::CliError;
use crate::output::Output;
use crate::report;

/// Arguments for the apply command.
#[derive(Args)]
pub(crate) struct ApplyArgs {
    /// Path to the JSON parameter document (stdin when omitted or "-").
    params: Option<PathBuf>,

    /// Wiki.js GraphQL endpoint URL (overrides document and config).
    #[arg(long, env = "WJS_API_URL")]
    api_url: Option<String>,

    /// API key (overrides document and config).
    #[arg(long, env = "WJS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Path to configuration file (default: auto-discover wjs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ApplyArgs {
    /// Execute the apply command.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, configuration is
    /// incomplete, or reconciliation fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let params = self.read_params(&output)?;
        params.validate()?;

        // Endpoint and key: CLI flag wins, then the parameter document,
        // then wjs.toml.
        let cli_settings = CliSettings {
            api_url: self.api_url.clone().or_else(|| params.api_url.clone()),
            api_key: self.api_key.clone().or_else(|| params.api_key.clone()),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let api = config.require_api()?;

        let desired = params.normalize()?;
        let client = WikiJsClient::new(&api.url, &api.key);
        let reconciler = Reconciler::new(&client);

        let outcome = match params.state {
            State::Present => reconciler.apply(&desired),
            State::Absent => reconciler.delete(&desired),
        };

        report::write(std::io::stdout(), &outcome)?;

        match outcome {
            Outcome::Failed { msg, .. } => Err(CliError::Reconcile(msg)),
            outcome => {
                output.success(&report::summary(&outcome));
                Ok(())
            }
        }
    }

    fn read_params(&self, output: &Output) -> Result<Params, CliError> {
        let text = match &self.params {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
            _ => {
                output.info("reading parameters from stdin");
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        Ok(serde_json::from_str(&text)?)
    }
}
