// src/main.rs
// TaskFlow Pro server and account administration

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use taskflow::api::create_router;
use taskflow::auth::UserStore;
use taskflow::auth::validation::validate_credentials;
use taskflow::config::CONFIG;
use taskflow::db;
use taskflow::state::create_app_state;

#[derive(Parser)]
#[command(name = "taskflow")]
#[command(about = "Project, task, Kanban and Gantt dashboard server")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Interface to bind (overrides TASKFLOW_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides TASKFLOW_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Manage accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create an account
    Create {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
    /// Delete an account and its password
    Delete {
        #[arg(long)]
        email: String,
    },
}

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

async fn run_server(host: Option<String>, port: Option<u16>) -> Result<()> {
    CONFIG.validate()?;

    let mut server = CONFIG.server.clone();
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }

    info!("Starting TaskFlow Pro");
    let state = create_app_state(&CONFIG).await?;
    info!("Schema version: {}", db::get_schema_version(&state.pool).await?);

    let app = create_router(state);
    let bind_address = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Listening on http://{}", bind_address);
    info!("Health endpoints: /health, /live");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn run_user_action(action: UserAction) -> Result<()> {
    let pool = db::create_pool(&CONFIG.database).await?;
    db::run_migrations(&pool).await?;
    let users = UserStore::new(pool);

    match action {
        UserAction::Create { email, password } => {
            let (email, password) =
                validate_credentials(Some(email.as_str()), Some(password.as_str())).map_err(
                    |rejected| {
                        let errors = rejected.errors;
                        anyhow::anyhow!("{}", errors.email.or(errors.password).unwrap_or_default())
                    },
                )?;
            let user = users.create_user(email, password).await?;
            println!("Created user {} ({})", user.email, user.id);
        }
        UserAction::Delete { email } => {
            if users.delete_user_by_email(&email).await? {
                println!("Deleted user {}", email);
            } else {
                println!("No user with email {}", email);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&CONFIG.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        None => run_server(None, None).await,
        Some(Commands::Serve { host, port }) => run_server(host, port).await,
        Some(Commands::User { action }) => run_user_action(action).await,
    }
}
