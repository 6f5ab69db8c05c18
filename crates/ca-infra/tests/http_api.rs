use std::sync::Arc;
use std::time::Duration;

use ca_core::ports::{AuthApiPort, OnboardingApiPort, SessionStorePort, SettingsApiPort};
use ca_core::user::{ForgotPasswordRequest, LoginCredentials, ProfileUpdate};
use ca_core::{ApiError, OnboardingPayload, SessionCookies};
use ca_infra::http::CSRF_HEADER;
use ca_infra::{HttpApiClient, HttpAuthApi, HttpOnboardingApi, HttpSettingsApi, InMemorySessionStore};
use mockito::{Matcher, Server};
use serde_json::json;

fn client(base_url: String, store: Arc<InMemorySessionStore>) -> Arc<HttpApiClient> {
    Arc::new(HttpApiClient::new(base_url, Duration::from_secs(5), store).unwrap())
}

async fn store_with_session() -> Arc<InMemorySessionStore> {
    let store = Arc::new(InMemorySessionStore::new());
    let mut cookies = SessionCookies::new();
    cookies.insert("access_token_cookie", "jwt");
    cookies.insert("csrf_access_token", "csrf-1");
    store.save(&cookies).await.unwrap();
    store
}

#[tokio::test]
async fn validate_replays_cookies_and_decodes_user() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/auth/validate")
        .match_header(
            "cookie",
            "access_token_cookie=jwt; csrf_access_token=csrf-1",
        )
        .match_header(CSRF_HEADER, Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "msg": "Operación exitosa",
                "data": {
                    "valid": true,
                    "user": {
                        "id": 7,
                        "nombre": "Ana",
                        "apellido": "Pérez",
                        "email": "ana@example.com",
                        "fecha_nacimiento": "1980-05-17"
                    },
                    "session": null
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let api = HttpAuthApi::new(client(server.url(), store_with_session().await));
    let user = api.validate().await.unwrap();

    mock.assert_async().await;
    assert_eq!(user.id.as_str(), "7");
    assert_eq!(user.given_name, "Ana");
    assert!(user.birth_date.is_some());
}

#[tokio::test]
async fn validate_401_carries_backend_message() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/auth/validate")
        .with_status(401)
        .with_body(r#"{"success": false, "msg": "Sesión inválida o expirada", "data": []}"#)
        .create_async()
        .await;

    let api = HttpAuthApi::new(client(server.url(), Arc::new(InMemorySessionStore::new())));
    let err = api.validate().await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            message: "Sesión inválida o expirada".to_string()
        }
    );
}

#[tokio::test]
async fn success_false_with_200_is_rejected() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/auth/validate")
        .with_status(200)
        .with_body(r#"{"success": false, "message": "Sesión revocada"}"#)
        .create_async()
        .await;

    let api = HttpAuthApi::new(client(server.url(), Arc::new(InMemorySessionStore::new())));

    assert_eq!(
        api.validate().await.unwrap_err(),
        ApiError::Rejected("Sesión revocada".to_string())
    );
}

#[tokio::test]
async fn login_stores_set_cookie_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::PartialJson(json!({
            "email": "ana@example.com",
            "password": "Val1d$Password"
        })))
        .with_status(200)
        .with_header("set-cookie", "access_token_cookie=jwt-new; HttpOnly; Path=/")
        .with_header("set-cookie", "csrf_access_token=csrf-new; Path=/")
        .with_body(
            json!({
                "success": true,
                "data": {
                    "user_id": 3,
                    "user_nombre": "Luis",
                    "user_apellido": "Gómez",
                    "user_email": "luis@example.com",
                    "session_id": "sess-9"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let store = Arc::new(InMemorySessionStore::new());
    let api = HttpAuthApi::new(client(server.url(), store.clone()));
    let receipt = api
        .login(&LoginCredentials::new("ana@example.com", "Val1d$Password"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(receipt.user.email, "luis@example.com");
    assert_eq!(receipt.session_id.as_deref(), Some("sess-9"));
    let cookies = store.load().await.unwrap();
    assert_eq!(cookies.get("access_token_cookie"), Some("jwt-new"));
    assert_eq!(cookies.get("csrf_access_token"), Some("csrf-new"));
}

#[tokio::test]
async fn logout_sends_csrf_token_and_clears_unset_cookies() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/logout")
        .match_header(CSRF_HEADER, "csrf-1")
        .with_status(200)
        .with_header(
            "set-cookie",
            "access_token_cookie=; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0; Path=/",
        )
        .with_header(
            "set-cookie",
            "csrf_access_token=; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0; Path=/",
        )
        .with_body(r#"{"success": true, "msg": "Operación exitosa", "data": "Logout exitoso"}"#)
        .create_async()
        .await;

    let store = store_with_session().await;
    let api = HttpAuthApi::new(client(server.url(), store.clone()));
    api.logout().await.unwrap();

    mock.assert_async().await;
    assert!(!store.has_session().await.unwrap());
}

#[tokio::test]
async fn password_recovery_returns_direct_link() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/recover/solicitar_recuperacion")
        .match_body(Matcher::PartialJson(json!({"email": "ana@example.com"})))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "msg": "Enlace de recuperación generado",
                "data": {"resetUrl": "/reset-password/tok", "token": "tok"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let api = HttpAuthApi::new(client(server.url(), Arc::new(InMemorySessionStore::new())));
    let receipt = api
        .request_password_recovery(&ForgotPasswordRequest {
            email: "ana@example.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(receipt.reset_url.as_deref(), Some("/reset-password/tok"));
    assert_eq!(
        receipt.message.as_deref(),
        Some("Enlace de recuperación generado")
    );
}

#[tokio::test]
async fn onboarding_status_and_submit() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/onboarding/status")
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "data": {"has_completed_onboarding": false, "onboarding_data": null}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let submit = server
        .mock("POST", "/api/settings/onboarding")
        .match_body(Matcher::PartialJson(json!({"diasVerdurasEmana": 3})))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "message": "Información de onboarding guardada correctamente",
                "data": {"user": {"id": 7, "has_completed_onboarding": true}}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let api = HttpOnboardingApi::new(client(server.url(), store_with_session().await));

    let status = api.fetch_status().await.unwrap();
    assert!(!status.completed);

    let mut payload = OnboardingPayload::with_defaults(None);
    payload.diet.vegetable_days_per_week = 3;
    let echoed = api.submit(&payload).await.unwrap();

    submit.assert_async().await;
    assert!(echoed.is_some_and(|patch| patch.is_empty()));
}

#[tokio::test]
async fn settings_update_returns_stored_user() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/settings")
        .match_header(CSRF_HEADER, "csrf-1")
        .match_body(Matcher::PartialJson(json!({
            "nombre": "Ana",
            "apellido": "Pérez Soto",
            "email": "ana@example.com"
        })))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "data": {
                    "id": 7,
                    "nombre": "Ana",
                    "apellido": "Pérez Soto",
                    "email": "ana@example.com",
                    "fecha_nacimiento": null
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let api = HttpSettingsApi::new(client(server.url(), store_with_session().await));
    let stored = api
        .update_profile(&ProfileUpdate {
            given_name: "Ana".to_string(),
            family_name: "Pérez Soto".to_string(),
            email: "ana@example.com".to_string(),
            birth_date: None,
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(stored.family_name, "Pérez Soto");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let api = HttpAuthApi::new(client(
        "http://127.0.0.1:1".to_string(),
        Arc::new(InMemorySessionStore::new()),
    ));

    assert!(matches!(
        api.validate().await.unwrap_err(),
        ApiError::Transport(_)
    ));
}
