use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use study_buddy::{
    client::StudyClient,
    config::ServerConfig,
    dispatcher::{Action, Outcome, RequestDispatcher},
    routes,
    services::completion::GroqCompleter,
    state::AppState,
    view::TerminalView,
};

#[derive(Parser)]
#[command(name = "study-buddy")]
#[command(about = "AI study buddy: questions, note summaries and quizzes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the backend server
    Serve,

    /// Ask a question
    Ask {
        question: String,
        /// Extra context or notes to go with the question
        #[arg(short, long, default_value = "")]
        extra: String,
        #[command(flatten)]
        backend: Backend,
    },

    /// Summarize lecture notes
    Summarize {
        notes: String,
        #[command(flatten)]
        backend: Backend,
    },

    /// Generate a quiz from notes or a topic
    Quiz {
        notes: String,
        #[command(flatten)]
        backend: Backend,
    },
}

#[derive(clap::Args)]
struct Backend {
    /// Base URL of the backend
    #[arg(long, env = "STUDY_BUDDY_URL", default_value = "http://localhost:5000")]
    url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("study_buddy=info,tower_http=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve => serve().await,
        Commands::Ask {
            question,
            extra,
            backend,
        } => run(Action::Ask, TerminalView::ask(question, extra), &backend).await,
        Commands::Summarize { notes, backend } => {
            run(Action::Summarize, TerminalView::notes(notes), &backend).await
        }
        Commands::Quiz { notes, backend } => {
            run(Action::Quiz, TerminalView::notes(notes), &backend).await
        }
    }
}

async fn serve() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    let completer = GroqCompleter::from_config(&config).context("cannot start the backend")?;
    let state = Arc::new(AppState::new(completer));

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("📚 study buddy running at http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn run(action: Action, view: TerminalView, backend: &Backend) -> anyhow::Result<()> {
    let client = StudyClient::new(&backend.url);
    let base_url = client.base_url().to_string();
    let dispatcher = RequestDispatcher::new(view, client);
    match dispatcher.dispatch(action).await {
        Outcome::Failed => anyhow::bail!("could not reach {base_url}"),
        _ => Ok(()),
    }
}
