//! Mail API route.

use axum::{Json, extract::State, http::StatusCode};
use core_types::{DeliveryError, MailDraft};
use tracing::{info, warn};
use web_types::{ApiError, SendMailRequest, SendMailResponse};

use crate::state::AppState;

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// POST /api/mail - Hand a draft to the configured delivery backend.
pub async fn send_mail(
    State(state): State<AppState>,
    Json(req): Json<SendMailRequest>,
) -> ApiResult<(StatusCode, Json<SendMailResponse>)> {
    let draft = MailDraft::from(req);

    // Providers may block on network I/O.
    let delivery = state.delivery.clone();
    let outcome = {
        let draft = draft.clone();
        tokio::task::spawn_blocking(move || delivery.deliver(&draft))
            .await
            .map_err(|e| {
                warn!(error = %e, "delivery task failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiError::with_code("Delivery task failed", "INTERNAL")),
                )
            })?
    };

    match outcome {
        Ok(receipt) => {
            info!(
                provider = %receipt.provider.name,
                recipients = draft.recipients.len(),
                "mail sent"
            );
            Ok((
                StatusCode::CREATED,
                Json(SendMailResponse {
                    mail: draft,
                    receipt,
                }),
            ))
        }
        Err(DeliveryError::NotImplemented) => Err((
            StatusCode::NOT_IMPLEMENTED,
            Json(ApiError::with_code(
                DeliveryError::NotImplemented.to_string(),
                "NOT_IMPLEMENTED",
            )),
        )),
        Err(err) => {
            warn!(error = %err, "failed to send mail");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ApiError::with_code(err.to_string(), "DELIVERY_FAILED")),
            ))
        }
    }
}
