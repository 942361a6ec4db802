use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use codevalley::application::{SessionUseCase, UserRepository};
use codevalley::domain::{AuthResult, Session, TokenResponse, TokenStoragePort};
use codevalley::infrastructure::config::{Command, TwoFactorCommand};
use codevalley::infrastructure::{
    AppConfig, CliArgs, ClientFactory, ConfigManager, KeyringTokenStorage, MemoryTokenStorage,
    RestAuthApi,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let manager = ConfigManager::new().wrap_err("failed to locate config directory")?;
    let mut config = manager
        .load_config(args.config.as_deref())
        .wrap_err("failed to load configuration")?;
    config.merge_with_args(args);
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn commit(sessions: &SessionUseCase, result: AuthResult<TokenResponse>) -> Result<()> {
    let response = result.into_result()?;
    sessions.commit(&response, true).await?;
    print_json(&serde_json::json!({
        "state": format!("{:?}", response.session_state()),
    }))
}

async fn run(args: CliArgs, config: AppConfig) -> Result<()> {
    let session = Session::new();
    let factory = ClientFactory::new(&config.http_config())?;
    let repository = UserRepository::new(Arc::new(RestAuthApi::new(&factory, &session)));
    let storage: Arc<dyn TokenStoragePort> = if config.remember_token {
        Arc::new(KeyringTokenStorage::new())
    } else {
        Arc::new(MemoryTokenStorage::new())
    };
    let sessions = SessionUseCase::new(session, storage);

    if let Some(source) = sessions.restore(args.token).await? {
        debug!(%source, "Session restored");
    }

    match args.command {
        Command::Login { email, password } => {
            let result = repository.login(&email, &password).await;
            commit(&sessions, result).await
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let result = repository.register(&username, &email, &password).await;
            commit(&sessions, result).await
        }
        Command::Me => print_json(&repository.me().await?),
        Command::Profile { id } => print_json(&repository.profile(id).await?),
        Command::Search { username } => print_json(&repository.search_users(&username).await?),
        Command::Avatar { user_id, file } => {
            let avatar_url = repository.upload_avatar(user_id, &file).await?;
            print_json(&serde_json::json!({ "avatarUrl": avatar_url }))
        }
        Command::TwoFactor(TwoFactorCommand::Generate) => {
            print_json(&repository.generate_two_factor().await?)
        }
        Command::TwoFactor(TwoFactorCommand::On) => {
            repository.turn_on_two_factor().await?;
            print_json(&serde_json::json!({ "twoFactor": true }))
        }
        Command::TwoFactor(TwoFactorCommand::Off) => {
            repository.turn_off_two_factor().await?;
            print_json(&serde_json::json!({ "twoFactor": false }))
        }
        Command::TwoFactor(TwoFactorCommand::Authenticate { code }) => {
            let response = repository.authenticate_two_factor(&code).await?;
            commit(&sessions, AuthResult::Success(response)).await
        }
        Command::Logout => {
            sessions.sign_out(&repository).await?;
            print_json(&serde_json::json!({ "state": "Unauthenticated" }))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = codevalley::VERSION, base_url = %config.base_url, "Starting CodeValley client");

    run(args, config).await
}
