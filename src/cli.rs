use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// CronApp client: session, onboarding and navigation from the terminal.
#[derive(Parser, Debug)]
#[command(name = "cronapp", version, about)]
pub struct Cli {
    /// Config file (default: <data dir>/cronapp/config.toml)
    #[arg(long, global = true, env = "CRONAPP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Probe the stored session and print who is signed in
    Status,

    /// Resolve the view for a path, applying the onboarding redirect
    Visit {
        /// e.g. /dashboard, /onboarding, /reset-password/<token>
        path: String,
    },

    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "CRONAPP_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Exchange a Google identity for a session
    GoogleLogin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        google_id: String,
        #[arg(long, default_value = "")]
        given_name: String,
        #[arg(long, default_value = "")]
        family_name: String,
        #[arg(long)]
        birth_date: Option<NaiveDate>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Ask for a password-recovery link
    ForgotPassword {
        #[arg(long)]
        email: String,
    },

    /// Set a new password with a recovery token
    ResetPassword {
        #[arg(long)]
        token: String,
        #[arg(long, env = "CRONAPP_NEW_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Show whether the onboarding questionnaire is completed
    OnboardingStatus,

    /// Submit the onboarding questionnaire from a JSON file
    SubmitOnboarding {
        file: PathBuf,
    },

    /// Update name, email and birth date
    UpdateProfile {
        #[arg(long)]
        given_name: String,
        #[arg(long)]
        family_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        birth_date: Option<NaiveDate>,
    },

    /// List the sign-in methods the backend offers
    AuthMethods,

    /// Compute a body mass index
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
        /// Height in centimetres
        #[arg(long)]
        height: f64,
    },

    /// Stay signed in and print navigation until Ctrl-C
    Watch,
}

impl Command {
    /// Subcommand name for logs. Arguments may carry passwords.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Status => "status",
            Command::Visit { .. } => "visit",
            Command::Login { .. } => "login",
            Command::GoogleLogin { .. } => "google-login",
            Command::Logout => "logout",
            Command::ForgotPassword { .. } => "forgot-password",
            Command::ResetPassword { .. } => "reset-password",
            Command::OnboardingStatus => "onboarding-status",
            Command::SubmitOnboarding { .. } => "submit-onboarding",
            Command::UpdateProfile { .. } => "update-profile",
            Command::AuthMethods => "auth-methods",
            Command::Bmi { .. } => "bmi",
            Command::Watch => "watch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_visit_and_update_profile() {
        let cli = Cli::parse_from(["cronapp", "visit", "/dashboard"]);
        assert_eq!(cli.command.name(), "visit");
        assert!(matches!(cli.command, Command::Visit { path } if path == "/dashboard"));

        let cli = Cli::parse_from([
            "cronapp",
            "--config",
            "/tmp/c.toml",
            "update-profile",
            "--given-name",
            "Ana",
            "--family-name",
            "Pérez",
            "--email",
            "ana@example.com",
            "--birth-date",
            "1980-05-17",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        match cli.command {
            Command::UpdateProfile { birth_date, .. } => {
                assert_eq!(birth_date, NaiveDate::from_ymd_opt(1980, 5, 17));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
