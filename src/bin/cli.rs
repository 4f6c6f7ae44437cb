use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chconnect::{format_result, ConnectionConfig, Connector, InteractiveRepl, Result};

#[derive(Parser)]
#[command(
    name = "chconnect",
    about = "Run ad-hoc SQL against a ClickHouse-compatible HTTP endpoint",
    version
)]
struct Cli {
    /// Server host
    #[arg(long, default_value = "127.0.0.1", env = "CHCONNECT_HOST")]
    host: String,

    /// HTTP port
    #[arg(long, default_value_t = 8123, env = "CHCONNECT_PORT")]
    port: u16,

    #[arg(long, default_value = "root", env = "CHCONNECT_USER")]
    user: String,

    #[arg(long, default_value = "", env = "CHCONNECT_PASSWORD")]
    password: String,

    #[arg(long, default_value = "default", env = "CHCONNECT_DATABASE")]
    database: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Execute statements in order over one session and print the rows
    Query {
        #[arg(required = true)]
        statements: Vec<String>,
    },
    /// Interactive shell
    Repl,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ConnectionConfig::new(cli.host, cli.port)
        .with_user(cli.user)
        .with_password(cli.password)
        .with_database(cli.database);

    let mut connector = Connector::http();
    connector.connect(&config)?;

    match cli.command {
        Command::Query { statements } => {
            for statement in &statements {
                let rows = connector.fetch_all(statement).await?;
                print!("{}", format_result(&rows));
            }
            connector.reset_session().await
        }
        Command::Repl => InteractiveRepl::new(connector).run().await,
    }
}
