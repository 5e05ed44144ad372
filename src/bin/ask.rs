use clap::Parser;
use dotenv::dotenv;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use legal_advisor_web::client::console::{ConsoleNotifier, ConsoleView};
use legal_advisor_web::client::http::HttpTransport;
use legal_advisor_web::client::{FormInput, SubmissionHandler, SubmitOutcome};

/// Ask the legal advisor server a question from the terminal
#[derive(Parser, Debug)]
#[command(name = "ask", version)]
struct Cli {
    /// The question, in plain language
    question: Vec<String>,

    /// Jurisdiction, e.g. a country or state
    #[arg(short, long, default_value = "")]
    jurisdiction: String,

    /// High-level topic such as contracts or employment
    #[arg(short, long, default_value = "")]
    topic: String,

    /// Answer mode
    #[arg(short, long, default_value = "concise")]
    mode: String,

    /// Base URL of the advisor server
    #[arg(long, env = "ADVISOR_URL", default_value = "http://127.0.0.1:8080")]
    url: String,

    /// Give up after this many seconds (waits indefinitely if unset)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    let transport = match HttpTransport::new(&cli.url, cli.timeout_secs.map(Duration::from_secs)) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let handler = SubmissionHandler::new(
        Arc::new(transport),
        Arc::new(ConsoleView::stdout()),
        Arc::new(ConsoleNotifier),
    );

    let form = FormInput {
        question: cli.question.join(" "),
        jurisdiction: cli.jurisdiction,
        topic: cli.topic,
        mode: cli.mode,
    };

    match handler.submit(form).await {
        SubmitOutcome::Answered(_) => ExitCode::SUCCESS,
        SubmitOutcome::Rejected | SubmitOutcome::Failed(_) => ExitCode::FAILURE,
    }
}
