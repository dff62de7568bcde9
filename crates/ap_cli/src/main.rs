mod logging;

use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::Parser;
use tracing::{info, warn};

use ap_arxiv::{ArxivClient, SearchParams};
use ap_core::{Error, Language, Result};
use ap_slack::SlackNotifier;
use ap_translate::{create_backend, Config, Mode, Translator};

/// Search recent arXiv articles, translate them and post them to Slack.
#[derive(Parser, Debug)]
#[command(name = "arxiv-post", version, about)]
struct Cli {
    /// arXiv categories to match, comma-separated
    #[arg(long, value_delimiter = ',', default_value = "astro-ph.*")]
    categories: Vec<String>,

    /// Keywords to match in abstracts, comma-separated
    #[arg(long, value_delimiter = ',')]
    keywords: Vec<String>,

    /// Start of the search window, inclusive (YYYY-MM-DD or
    /// YYYY-MM-DDTHH:MM:SS, UTC; default: 3 days ago at midnight)
    #[arg(long)]
    start_date: Option<String>,

    /// End of the search window, exclusive (default: 2 days ago at midnight)
    #[arg(long)]
    end_date: Option<String>,

    /// Language of the original text
    #[arg(long, default_value = "en")]
    source_lang: Language,

    /// Language to translate into
    #[arg(long, default_value = "ja")]
    target_lang: Language,

    /// Translation mode: auto, api or browser
    #[arg(long, default_value = "auto")]
    mode: Mode,

    /// DeepL API key, required for API mode
    #[arg(long, env = "DEEPL_API_KEY")]
    api_key: Option<String>,

    /// WebDriver endpoint for the browser backend
    #[arg(long, default_value = "http://localhost:4444")]
    webdriver_url: String,

    /// Number of translation requests in flight at once
    #[arg(long, default_value_t = 2)]
    n_concurrent: usize,

    /// Per-request translation timeout in seconds
    #[arg(long, default_value_t = 30.0)]
    timeout: f64,

    /// Slack incoming webhook URL
    #[arg(long, env = "SLACK_WEBHOOK_URL")]
    webhook_url: Option<String>,

    /// Build message payloads but do not post them
    #[arg(long)]
    dry_run: bool,

    /// Show debug-level log messages
    #[arg(long)]
    debug: bool,
}

/// Parse a UTC date or datetime in the two accepted formats.
fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }

    Err(Error::InvalidDate(format!(
        "Could not parse {:?}; expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
        s
    )))
}

fn search_params(cli: &Cli) -> Result<SearchParams> {
    let mut params = SearchParams {
        categories: cli.categories.clone(),
        keywords: cli.keywords.clone(),
        ..SearchParams::default()
    };

    if let Some(start) = &cli.start_date {
        params.start_date = parse_date(start)?;
    }

    if let Some(end) = &cli.end_date {
        params.end_date = parse_date(end)?;
    }

    if params.start_date >= params.end_date {
        return Err(Error::InvalidDate(format!(
            "Start date {} is not before end date {}",
            params.start_date, params.end_date
        )));
    }

    Ok(params)
}

async fn run(cli: Cli) -> Result<()> {
    let webhook_url = match (&cli.webhook_url, cli.dry_run) {
        (Some(url), _) => url.clone(),
        (None, true) => String::new(),
        (None, false) => {
            return Err(Error::Config(
                "A webhook URL is required unless --dry-run is set".to_string(),
            ));
        }
    };

    let config = Config {
        mode: cli.mode,
        api_key: cli.api_key.clone(),
        webdriver_url: cli.webdriver_url.clone(),
        source_lang: cli.source_lang,
        target_lang: cli.target_lang,
        n_concurrent: cli.n_concurrent,
        timeout: Duration::from_secs_f64(cli.timeout),
    };
    // Resolve the backend up front so a missing credential fails before
    // any network activity.
    let backend = create_backend(&config)?;

    let params = search_params(&cli)?;
    let articles = ArxivClient::new().search(&params).await?;
    info!(count = articles.len(), "articles found");

    if articles.is_empty() {
        return Ok(());
    }

    let translator = Translator::new(backend, &config);
    let translated = translator.translate_articles(articles).await;

    let notifier = SlackNotifier::new(webhook_url, cli.dry_run);
    let report = notifier.post(&translated).await;
    info!(
        delivered = report.delivered,
        failed = report.failed.len(),
        "delivery finished"
    );

    for (url, error) in &report.failed {
        warn!(url = %url, error = %error, "message was not delivered");
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    if let Err(e) = run(cli).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2021-01-01").unwrap(),
            Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_date("2021-01-01T12:30:00").unwrap(),
            Utc.with_ymd_and_hms(2021, 1, 1, 12, 30, 0).unwrap()
        );
        assert!(matches!(
            parse_date("yesterday"),
            Err(Error::InvalidDate(_))
        ));
    }

    #[test]
    fn test_search_params_rejects_inverted_window() {
        let cli = Cli::parse_from([
            "arxiv-post",
            "--start-date",
            "2021-01-02",
            "--end-date",
            "2021-01-01",
            "--dry-run",
        ]);
        assert!(matches!(search_params(&cli), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["arxiv-post", "--dry-run"]);
        assert_eq!(cli.categories, vec!["astro-ph.*"]);
        assert!(cli.keywords.is_empty());
        assert_eq!(cli.source_lang, Language::En);
        assert_eq!(cli.target_lang, Language::Ja);
        assert_eq!(cli.mode, Mode::Auto);
        assert_eq!(cli.n_concurrent, 2);
        assert_eq!(cli.timeout, 30.0);
        assert!(cli.dry_run);
    }

    #[test]
    fn test_cli_comma_separated_lists() {
        let cli = Cli::parse_from([
            "arxiv-post",
            "--categories",
            "astro-ph.GA,astro-ph.CO",
            "--keywords",
            "galaxy,cosmology",
        ]);
        assert_eq!(cli.categories, vec!["astro-ph.GA", "astro-ph.CO"]);
        assert_eq!(cli.keywords, vec!["galaxy", "cosmology"]);
    }
}
