//! Command dispatch for the `cronapp` binary.

use anyhow::{bail, Context};
use ca_core::config::AppConfig;
use ca_core::health::{self, BmiCategory};
use ca_core::ports::AppDirsPort;
use ca_core::user::{
    ForgotPasswordRequest, GoogleLoginData, LoginCredentials, PasswordRecoveryOutcome,
    ProfileUpdate, ResetPasswordRequest,
};
use ca_core::{OnboardingPayload, Route, Session, View};
use ca_infra::DirsAppDirsAdapter;
use tracing::{info, info_span, Instrument};

use super::config::{load_config_or_empty, resolve_config, API_BASE_URL_ENV};
use super::wiring::{wire_app, WiredApp};
use crate::cli::{Cli, Command};

pub async fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let command = match cli.command {
        Command::Bmi { weight, height } => return print_bmi(weight, height),
        command => command,
    };

    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application directories")?;
    let config_path = cli.config.unwrap_or_else(|| app_dirs.config_file());
    let loaded = load_config_or_empty(&config_path)?;
    let config = resolve_config(
        loaded,
        AppConfig::with_system_defaults(app_dirs.app_data_root.clone()),
        std::env::var(API_BASE_URL_ENV).ok(),
    );

    let wired = wire_app(&config, Route::Login).context("Failed to wire application")?;
    let span = info_span!("cli.command", command = command.name());
    let result = execute(&wired, command).instrument(span).await;
    wired.runtime.shutdown();
    result
}

async fn execute(app: &WiredApp, command: Command) -> anyhow::Result<()> {
    let runtime = &app.runtime;
    let auth = runtime.auth();

    match command {
        Command::Status => {
            let state = auth.initialize().await;
            print_session(&state.session);
        }

        Command::Visit { path } => {
            auth.initialize().await;
            let route = Route::parse(&path);
            let view = runtime.resolve_view().execute(&route).await;
            println!("{}", describe_view(&view));
            if !app.navigator.history().is_empty() {
                println!("redirected to {}", app.navigator.current());
            }
        }

        Command::Login { email, password } => {
            auth.initialize().await;
            let user = auth
                .login(LoginCredentials::new(email, password))
                .await
                .context("Sign-in failed")?;
            info!(user_id = %user.id, "signed in");
            auth.wait_pending_navigation().await;
            println!("now at {}", app.navigator.current());
        }

        Command::GoogleLogin {
            email,
            google_id,
            given_name,
            family_name,
            birth_date,
        } => {
            auth.initialize().await;
            auth.login_with_google(GoogleLoginData {
                email,
                given_name,
                family_name,
                google_id,
                profile_picture: None,
                birth_date,
            })
            .await
            .context("Google sign-in failed")?;
            auth.wait_pending_navigation().await;
            println!("now at {}", app.navigator.current());
        }

        Command::Logout => {
            auth.initialize().await;
            auth.logout().await;
            println!("signed out");
        }

        Command::ForgotPassword { email } => {
            match auth.forgot_password(ForgotPasswordRequest { email }).await {
                PasswordRecoveryOutcome::Requested {
                    reset_url: Some(url),
                    ..
                } => println!("reset link: {url}"),
                PasswordRecoveryOutcome::Requested { .. } => {}
                PasswordRecoveryOutcome::Failed { message } => bail!(message),
            }
        }

        Command::ResetPassword { token, password } => {
            auth.reset_password(&token, ResetPasswordRequest::new(password))
                .await
                .context("Password reset failed")?;
        }

        Command::OnboardingStatus => {
            require_signed_in(auth.initialize().await.session)?;
            let status = runtime.get_onboarding_status().execute().await;
            println!(
                "onboarding {}",
                if status.completed {
                    "completed"
                } else {
                    "pending"
                }
            );
        }

        Command::SubmitOnboarding { file } => {
            let content = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let payload: OnboardingPayload = serde_json::from_str(&content)
                .with_context(|| format!("Invalid questionnaire in {}", file.display()))?;
            require_signed_in(auth.initialize().await.session)?;
            runtime
                .submit_onboarding()
                .execute(payload)
                .await
                .context("Onboarding submission failed")?;
        }

        Command::UpdateProfile {
            given_name,
            family_name,
            email,
            birth_date,
        } => {
            require_signed_in(auth.initialize().await.session)?;
            runtime
                .update_profile()
                .execute(ProfileUpdate {
                    given_name,
                    family_name,
                    email,
                    birth_date,
                })
                .await
                .context("Profile update failed")?;
            print_session(&auth.session().await);
        }

        Command::AuthMethods => {
            let methods = runtime.get_auth_methods().execute().await;
            println!("password: yes");
            println!(
                "google: {}",
                if methods.google_auth_available {
                    "yes"
                } else {
                    "no"
                }
            );
        }

        Command::Bmi { weight, height } => print_bmi(weight, height)?,

        Command::Watch => {
            require_signed_in(auth.initialize().await.session)?;
            let mut routes = app.navigator.subscribe();
            println!("watching session, Ctrl-C to stop");
            loop {
                tokio::select! {
                    changed = routes.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let route = routes.borrow_and_update().clone();
                        println!("→ {route}");
                        if !auth.session().await.is_authenticated() {
                            println!("session ended");
                            break;
                        }
                    }
                    _ = tokio::signal::ctrl_c() => break,
                }
            }
        }
    }
    Ok(())
}

fn require_signed_in(session: Session) -> anyhow::Result<()> {
    if !session.is_authenticated() {
        bail!("Not signed in. Run `cronapp login` first.");
    }
    Ok(())
}

fn print_session(session: &Session) {
    match session {
        Session::Authenticated { user } => {
            println!("signed in as {} <{}> (id {})", user.display_name(), user.email, user.id);
            let today = chrono::Local::now().date_naive();
            if let Some(age) = user.age_on(today) {
                println!("age: {age}");
            }
        }
        Session::Anonymous => println!("not signed in"),
        Session::Initializing => println!("session unknown"),
    }
}

fn describe_view(view: &View) -> String {
    match view {
        View::Requested { route } => format!("render {route}"),
        View::Login => "render login".to_string(),
        View::Onboarding => "render onboarding".to_string(),
    }
}

fn print_bmi(weight: f64, height: f64) -> anyhow::Result<()> {
    let Some(bmi) = health::body_mass_index(weight, height) else {
        bail!("Weight and height must be positive numbers");
    };
    println!("BMI {bmi:.1} ({})", BmiCategory::from_bmi(bmi).label());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_view_names_the_screen() {
        assert_eq!(
            describe_view(&View::Requested {
                route: Route::Dashboard
            }),
            "render /dashboard"
        );
        assert_eq!(describe_view(&View::Login), "render login");
    }

    #[test]
    fn bmi_rejects_non_positive_input() {
        assert!(print_bmi(70.0, 0.0).is_err());
        assert!(print_bmi(70.0, 170.0).is_ok());
    }

    #[test]
    fn signed_out_session_is_refused() {
        assert!(require_signed_in(Session::Anonymous).is_err());
    }
}
