//! Bizportal server binary.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use bizportal::adapters::auth::{Argon2PasswordHasher, JwtSessionService};
use bizportal::adapters::email::{LoggingEmailSender, ResendEmailSender};
use bizportal::adapters::http::{AppState, HttpSettings, Stores};
use bizportal::adapters::postgres::{
    self, PostgresBlogPostRepository, PostgresPackageRepository, PostgresPaymentMethodRepository,
    PostgresTransactionRepository, PostgresUserRepository,
};
use bizportal::build_app;
use bizportal::config::AppConfig;
use bizportal::ports::EmailSender;

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "server terminated");
        eprintln!("bizportal: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let stores = open_stores(&config).await?;
    let sessions = Arc::new(JwtSessionService::new(
        &config.auth.session_secret,
        config.auth.session_ttl_secs,
    ));
    let email_sender = email_sender(&config)?;

    let state = AppState::new(
        stores,
        Arc::new(Argon2PasswordHasher::new()),
        sessions.clone(),
        sessions,
        email_sender,
        HttpSettings::from_config(&config),
    );
    let app = build_app(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn open_stores(config: &AppConfig) -> Result<Stores, BoxError> {
    if config.database.is_memory() {
        tracing::warn!("using in-memory store; data is lost on restart");
        return Ok(Stores::in_memory());
    }

    let pool = postgres::connect(&config.database).await?;
    if config.database.run_migrations {
        postgres::run_migrations(&pool).await?;
    }

    Ok(Stores {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        packages: Arc::new(PostgresPackageRepository::new(pool.clone())),
        payment_methods: Arc::new(PostgresPaymentMethodRepository::new(pool.clone())),
        transactions: Arc::new(PostgresTransactionRepository::new(pool.clone())),
        blog_posts: Arc::new(PostgresBlogPostRepository::new(pool)),
    })
}

fn email_sender(config: &AppConfig) -> Result<Arc<dyn EmailSender>, BoxError> {
    let sender: Arc<dyn EmailSender> = match &config.email.resend_api_key {
        Some(key) => Arc::new(ResendEmailSender::new(key.clone(), config.email.from_header())?),
        None => {
            tracing::warn!("no Resend API key configured; emails are logged instead of sent");
            Arc::new(LoggingEmailSender)
        }
    };
    Ok(sender)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
