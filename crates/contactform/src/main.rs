mod app;
mod config;
mod handlers;
mod state;
mod storage;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use contactform_core::invocation::InvocationResponse;
use tokio::{
    io::{AsyncRead, AsyncReadExt},
    net::TcpListener,
    signal,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

/// contactform - Save and list contact-form submissions
#[derive(Parser, Debug)]
#[command(name = "contactform")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST", global = true)]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT", global = true)]
    port: u16,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON", global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Run one handler against an event read from stdin and print the response
    Invoke {
        #[arg(value_enum)]
        handler: HandlerName,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum HandlerName {
    /// The submission writer
    Submit,
    /// The submission reader
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_json);

    let config = Config::from_env();
    let state = AppState::from_config(&config).await;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(state, &cli.host, cli.port).await,
        Command::Invoke { handler } => invoke(state, handler).await,
    }
}

/// Logs go to stderr so `invoke` output on stdout stays clean.
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "contactform=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", host, port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn invoke(state: AppState, handler: HandlerName) -> Result<()> {
    let response = run_handler(&state, handler, tokio::io::stdin()).await;

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

/// Run one handler against an event read from `input`. Always yields an
/// envelope, even when the event cannot be read.
async fn run_handler<R>(state: &AppState, handler: HandlerName, mut input: R) -> InvocationResponse
where
    R: AsyncRead + Unpin,
{
    match handler {
        HandlerName::Submit => {
            let mut raw_event = Vec::new();
            match input.read_to_end(&mut raw_event).await {
                Ok(_) => handlers::invoke::run_submit(state, &raw_event).await,
                Err(err) => handlers::reject_event("submit", err),
            }
        }
        HandlerName::List => handlers::list_submissions(state.submissions.as_ref()).await,
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
