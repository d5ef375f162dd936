use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::SellerApplication;
use super::partners::{BusinessLoansService, ConfidentialInvoiceService, SelectInvoiceService};
use super::service::{ApplicationServiceError, ProductApplicationService};

/// Outcome payload returned to intake callers. The code keeps the partner
/// contract intact: a negative value on the normalized paths means declined,
/// while the select-invoice path carries the partner's own convention.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionView {
    pub product: &'static str,
    pub code: i32,
}

/// Router builder exposing the HTTP intake endpoint.
pub fn application_router<S, C, B>(
    service: Arc<ProductApplicationService<S, C, B>>,
) -> Router
where
    S: SelectInvoiceService + 'static,
    C: ConfidentialInvoiceService + 'static,
    B: BusinessLoansService + 'static,
{
    Router::new()
        .route("/api/v1/applications", post(submit_handler::<S, C, B>))
        .with_state(service)
}

pub(crate) async fn submit_handler<S, C, B>(
    State(service): State<Arc<ProductApplicationService<S, C, B>>>,
    axum::Json(application): axum::Json<SellerApplication>,
) -> Response
where
    S: SelectInvoiceService + 'static,
    C: ConfidentialInvoiceService + 'static,
    B: BusinessLoansService + 'static,
{
    let product = application.product.label();
    match service.submit_application_for(&application) {
        Ok(code) => {
            let view = SubmissionView { product, code };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error @ ApplicationServiceError::UnsupportedProduct) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ApplicationServiceError::Partner(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}
