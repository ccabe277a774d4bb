use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod architect;
pub mod auth;
pub mod chat;
pub mod learning_path;
pub mod render;
pub mod templates;

use crate::api::RagBackend;
use crate::app::App;
use crate::core::ClientConfig;
use crate::router::Route;

#[derive(Subcommand)]
enum Command {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        username: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign out and forget the session
    Logout {},
    /// Show the signed in user and remaining daily usage
    Whoami {},
    /// Ask the documentation assistant. Starts an interactive session
    /// when no question is given.
    Ask { question: Option<String> },
    /// Generate a LangGraph architecture for a business challenge
    Architect {
        challenge: String,
        #[arg(long)]
        industry: Option<String>,
        /// May be repeated
        #[arg(long = "constraint")]
        constraints: Vec<String>,
    },
    /// Browse the curriculum and track progress
    #[command(name = "learning-path", subcommand)]
    LearningPath(learning_path::LearningPathCommand),
    /// Browse ready made graph templates
    #[command(subcommand)]
    Templates(templates::TemplatesCommand),
    /// Check that the retrieval backend is up
    Health {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Overrides CATALYST_API_BASE_URL
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Overrides CATALYST_STORAGE_PATH
    #[arg(long, global = true)]
    storage_path: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();

    let defaults = ClientConfig::default();
    let config = ClientConfig::new(
        args.api_base_url.as_deref().unwrap_or(&defaults.api_base_url),
        args.storage_path.as_deref().unwrap_or(&defaults.storage_path),
        defaults.timeout,
    );
    let app = App::new(config)?;

    // Handle each sub command
    match args.command {
        Some(Command::Login { username, password }) => {
            auth::login(&app, &username, password).await?;
        }
        Some(Command::Logout {}) => {
            auth::logout(&app).await;
        }
        Some(Command::Whoami {}) => {
            auth::whoami(&app).await?;
        }
        Some(Command::Ask { question }) => {
            enter(&app, Route::Rag)?;
            chat::run(&app, question).await?;
        }
        Some(Command::Architect {
            challenge,
            industry,
            constraints,
        }) => {
            enter(&app, Route::Architect)?;
            architect::run(&app, challenge, industry, constraints).await?;
        }
        Some(Command::LearningPath(cmd)) => {
            enter(&app, Route::LearningPath)?;
            learning_path::run(&app, cmd).await?;
        }
        Some(Command::Templates(cmd)) => {
            enter(&app, Route::Templates)?;
            templates::run(&app, cmd).await?;
        }
        Some(Command::Health {}) => {
            let health = app.client.health().await?;
            println!(
                "{} (vector store connected: {}, {} documents)",
                health.status, health.vectorstore_connected, health.document_count
            );
        }
        None => {}
    }

    Ok(())
}

/// Visit `route` through the guard. Fails when it bounces to sign in.
fn enter(app: &App, route: Route) -> Result<()> {
    let rendered = app.visit(route.path());
    if rendered != route {
        bail!(
            "{} requires signing in first. Run `catalyst login --username <name>`.",
            route
        );
    }
    Ok(())
}

/// A failed page action becomes the command's error
pub(crate) fn fail(message: String) -> Result<()> {
    bail!(message)
}
