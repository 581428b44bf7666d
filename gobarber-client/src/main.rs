use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use env_logger::{Builder, Target};
use gobarber_client::app::{AppConfig, AppServices};
use gobarber_client::domains::dashboard::DashboardState;
use gobarber_client::domains::profile::{AvatarOutcome, SubmissionPhase};
use gobarber_client::infra::services::{
    AvatarUpload, InMemorySession, LogNavigator, LogNotifier, SessionStore,
};
use gobarber_core::profile::ProfileField;
use log::{LevelFilter, info};

#[derive(Debug, Parser)]
#[command(name = "gobarber-client", version, about = "GoBarber profile tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Update name and email, optionally changing the password
    Profile(ProfileArgs),
    /// Replace the avatar with an image file
    Avatar {
        /// Image to upload
        file: PathBuf,
    },
}

#[derive(Debug, Args)]
struct ProfileArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    /// Current password; leave empty to keep the password unchanged
    #[arg(
        long,
        env = "GOBARBER_OLD_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    old_password: String,
    #[arg(
        long,
        env = "GOBARBER_NEW_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    password: String,
    #[arg(
        long,
        env = "GOBARBER_PASSWORD_CONFIRMATION",
        default_value = "",
        hide_env_values = true
    )]
    password_confirmation: String,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("gobarber_client", LevelFilter::Debug)
        .filter_module("gobarber_core", LevelFilter::Debug)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();
    let config =
        AppConfig::from_environment().context("invalid configuration")?;

    let session = Arc::new(InMemorySession::new());
    let services = AppServices::build(
        &config,
        session.clone(),
        Arc::new(LogNotifier),
        Arc::new(LogNavigator),
    )
    .await
    .context("failed to create API client")?;

    match cli.command {
        Command::Profile(args) => {
            let mut form = services.profile.initial_form();
            form.set_field(ProfileField::Name, args.name);
            form.set_field(ProfileField::Email, args.email);
            form.set_field(ProfileField::OldPassword, args.old_password);
            form.set_field(ProfileField::Password, args.password);
            form.set_field(
                ProfileField::PasswordConfirmation,
                args.password_confirmation,
            );

            let phase = services.profile.submit(&mut form).await;
            for (field, message) in form.errors.iter() {
                eprintln!("{field}: {message}");
            }
            if phase != SubmissionPhase::Succeeded {
                bail!("profile update did not succeed ({phase:?})");
            }

            let dashboard = DashboardState::from_session(
                session.as_ref(),
                Local::now().date_naive(),
            );
            let heading = dashboard.schedule_heading();
            info!(
                "{}, {} | {} {}",
                dashboard.greeting(),
                dashboard.user_name.as_deref().unwrap_or_default(),
                heading.day,
                heading.weekday
            );
        }
        Command::Avatar { file } => {
            let upload = AvatarUpload::from_path(&file)
                .await
                .with_context(|| format!("failed to read {}", file.display()))?;
            if services.profile.change_avatar(Some(upload)).await
                != AvatarOutcome::Updated
            {
                bail!("avatar update did not succeed");
            }
        }
    }

    if let Some(user) = session.current_user() {
        println!("{}", serde_json::to_string_pretty(&user)?);
    }
    Ok(())
}
