//! Session refresh.

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use tracing::error;

use super::state::AuthState;
use super::types::{TokenRefreshRequest, TokenRefreshResponse};

/// Exchange a refresh credential for a fresh access credential.
#[utoipa::path(
    post,
    path = "/v1/auth/token/refresh",
    request_body = TokenRefreshRequest,
    responses(
        (status = 200, description = "New access credential", body = TokenRefreshResponse),
        (status = 400, description = "Missing payload", body = String),
        (status = 401, description = "Invalid refresh credential", body = String)
    ),
    tag = "auth"
)]
pub async fn refresh_token(
    auth_state: Extension<AuthState>,
    payload: Option<Json<TokenRefreshRequest>>,
) -> impl IntoResponse {
    let request: TokenRefreshRequest = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    match auth_state.tokens().refresh_access(&request.refresh_token) {
        Ok(access_token) => (
            StatusCode::OK,
            Json(TokenRefreshResponse { access_token }),
        )
            .into_response(),
        Err(err) => {
            error!("Rejected refresh credential: {err}");
            (
                StatusCode::UNAUTHORIZED,
                "Invalid refresh token".to_string(),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::test_support::test_state;
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn refresh_rejects_missing_payload() {
        let (state, _store, _notifier) = test_state();
        let response = refresh_token(Extension(state), None).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn refresh_rejects_garbage_token() {
        let (state, _store, _notifier) = test_state();
        let response = refresh_token(
            Extension(state),
            Some(Json(TokenRefreshRequest {
                refresh_token: "garbage".to_string(),
            })),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn refresh_rejects_access_token() -> anyhow::Result<()> {
        let (state, _store, _notifier) = test_state();
        let pair = state
            .tokens()
            .mint_pair(Uuid::new_v4(), "patient", "jane@example.com")?;

        let response = refresh_token(
            Extension(state),
            Some(Json(TokenRefreshRequest {
                refresh_token: pair.access_token,
            })),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        Ok(())
    }

    #[tokio::test]
    async fn refresh_accepts_refresh_token() -> anyhow::Result<()> {
        let (state, _store, _notifier) = test_state();
        let pair = state
            .tokens()
            .mint_pair(Uuid::new_v4(), "staff", "s@example.com")?;

        let response = refresh_token(
            Extension(state),
            Some(Json(TokenRefreshRequest {
                refresh_token: pair.refresh_token,
            })),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }
}
