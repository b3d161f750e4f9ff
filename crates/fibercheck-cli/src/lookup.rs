//! `lookup` command: fills the form from flags, submits it and prints the
//! rendered results.

use clap::Args;
use fibercheck_client::{CoverageClient, SearchController, SearchState};
use fibercheck_core::{results_view, AppConfig, CoverageResponse, Field, Locale};

use crate::output::render_text;

#[derive(Debug, Args)]
pub struct LookupArgs {
    #[arg(long, default_value = "IT")]
    pub country: String,

    #[arg(long, default_value = "")]
    pub city: String,

    #[arg(long, default_value = "")]
    pub postal_code: String,

    #[arg(long, default_value = "")]
    pub street: String,

    /// House number
    #[arg(long, default_value = "")]
    pub civic: String,

    /// Coverage service base URL (defaults to `FIBERCHECK_ENDPOINT_URL`)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Output language: `it` or `en` (defaults to `FIBERCHECK_LOCALE`)
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Print the raw query and results as JSON
    #[arg(long)]
    pub json: bool,
}

impl LookupArgs {
    fn fill(&self, controller: &mut SearchController) {
        controller.set_field(Field::Country, self.country.as_str());
        controller.set_field(Field::City, self.city.as_str());
        controller.set_field(Field::PostalCode, self.postal_code.as_str());
        controller.set_field(Field::Street, self.street.as_str());
        controller.set_field(Field::Civic, self.civic.as_str());
    }
}

/// Runs one lookup and prints the outcome to stdout.
///
/// An incomplete address prints the form hint and succeeds without a
/// request.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the lookup fails, or the
/// JSON output cannot be serialized.
pub async fn run_lookup(args: &LookupArgs, config: &AppConfig) -> anyhow::Result<()> {
    let locale = args.locale.unwrap_or(config.locale);
    let endpoint = args.endpoint.as_deref().unwrap_or(&config.endpoint_url);
    let client = CoverageClient::new(endpoint, config.request_timeout_secs, &config.user_agent)?;

    let mut controller = SearchController::new(locale);
    args.fill(&mut controller);

    if !controller.submit(&client).await {
        println!("{}", locale.form_hint());
        return Ok(());
    }

    print!("{}", render_state(controller.state(), locale, args.json)?);
    Ok(())
}

/// Output for a finished lookup: rendered text, or pretty JSON with `json`.
///
/// # Errors
///
/// Returns an error carrying the localized message when the lookup failed,
/// or when the state is not a finished lookup.
pub(crate) fn render_state(
    state: &SearchState,
    locale: Locale,
    json: bool,
) -> anyhow::Result<String> {
    match state {
        SearchState::Loaded { query, results } => {
            if json {
                let payload = CoverageResponse {
                    query: Some(query.clone()),
                    results: Some(results.clone()),
                };
                Ok(format!("{}\n", serde_json::to_string_pretty(&payload)?))
            } else {
                Ok(render_text(&results_view(query, results, locale)))
            }
        }
        SearchState::Error(message) => {
            anyhow::bail!("{} {message}", locale.error_prefix())
        }
        SearchState::Idle | SearchState::Loading => {
            anyhow::bail!("lookup finished without a result")
        }
    }
}
