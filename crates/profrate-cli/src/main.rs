use std::io::{self, IsTerminal};

use clap::Parser;
use dotenvy::dotenv;
use profrate_cli::{ApiClient, DEFAULT_BASE_URL, DialoguerPrompter, Prompter, Session, StreamPrompter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "profrate-cli")]
#[command(about = "Interactive client for the professor rating service", long_about = None)]
struct Cli {
    /// Server to talk to before the first `login <url>`
    #[arg(long, env = "PROFRATE_URL", default_value = DEFAULT_BASE_URL)]
    url: String,
}

fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    let client = match ApiClient::new(cli.url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let result = if io::stdin().is_terminal() {
        run(client, DialoguerPrompter)
    } else {
        run(client, StreamPrompter)
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run<P: Prompter>(client: ApiClient, prompter: P) -> io::Result<()> {
    Session::new(client, prompter).run(io::stdin().lock(), io::stdout())
}
