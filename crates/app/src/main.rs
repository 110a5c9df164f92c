use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ApiConfig, HistoryService, HttpBackend, LogObserver, QuizBackend, QuizService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_service: Arc<QuizService>,
    history_service: Arc<HistoryService>,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn history_service(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history_service)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", services::config::DEFAULT_API_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  WIKIQUIZ_API_URL, WIKIQUIZ_API_TIMEOUT_SECS, RUST_LOG");
}

enum Parsed {
    Run(ApiConfig),
    Help,
}

fn parse_args(args: &mut impl Iterator<Item = String>) -> Result<Parsed, Box<dyn std::error::Error>> {
    let mut config = ApiConfig::from_env()?;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api-url" => {
                let value = require_value(args, "--api-url")?;
                let timeout = config.timeout();
                config = ApiConfig::new(value.clone())
                    .map_err(|_| ArgsError::InvalidApiUrl { raw: value })?
                    .with_timeout(timeout);
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg).into()),
        }
    }

    Ok(Parsed::Run(config))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config = match parse_args(&mut args).inspect_err(|_| print_usage())? {
        Parsed::Run(config) => config,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    log::info!(
        "using quiz backend at {} (timeout {:?})",
        config.base_url(),
        config.timeout()
    );
    let backend: Arc<dyn QuizBackend> =
        Arc::new(HttpBackend::new(config)?.with_observer(Arc::new(LogObserver)));

    match backend.health().await {
        Ok(true) => log::info!("quiz backend is healthy"),
        Ok(false) => log::warn!("quiz backend reports an unhealthy status"),
        Err(err) => log::warn!("quiz backend unreachable: {}", err.user_message()),
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_service: Arc::new(QuizService::new(Arc::clone(&backend))),
        history_service: Arc::new(HistoryService::new(backend)),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("WikiQuiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
