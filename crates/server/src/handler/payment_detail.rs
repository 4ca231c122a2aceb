use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::payment_detail::service::{
        command::DynPaymentDetailCommandService, query::DynPaymentDetailQueryService,
    },
    domain::{requests::PaymentDetailRequest, responses::PaymentDetailResponse},
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/payment-detail",
    tag = "PaymentDetail",
    responses(
        (status = 200, description = "List all stored payment details", body = Vec<PaymentDetailResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_payment_details(
    Extension(service): Extension<DynPaymentDetailQueryService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let details = service.find_all().await?;

    Ok(Json(details))
}

#[utoipa::path(
    get,
    path = "/payment-detail/{id}",
    tag = "PaymentDetail",
    params(("id" = i32, Path, description = "Payment detail ID")),
    responses(
        (status = 200, description = "Payment detail found", body = PaymentDetailResponse),
        (status = 404, description = "Payment detail not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_payment_detail(
    Extension(service): Extension<DynPaymentDetailQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let detail = service.find_by_id(id).await?;

    Ok(Json(detail))
}

#[utoipa::path(
    post,
    path = "/payment-detail",
    tag = "PaymentDetail",
    request_body = PaymentDetailRequest,
    responses(
        (status = 201, description = "Payment detail created", body = PaymentDetailResponse),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_payment_detail(
    Extension(service): Extension<DynPaymentDetailCommandService>,
    Json(body): Json<PaymentDetailRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let detail = service.create(&body).await?;
    let location = format!("/payment-detail/{}", detail.payment_details_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(detail),
    ))
}

#[utoipa::path(
    put,
    path = "/payment-detail/{id}",
    tag = "PaymentDetail",
    params(("id" = i32, Path, description = "Payment detail ID")),
    request_body = PaymentDetailRequest,
    responses(
        (status = 200, description = "Payment detail updated", body = PaymentDetailResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Payment detail not found"),
        (status = 409, description = "Concurrent modification detected"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_payment_detail(
    Extension(service): Extension<DynPaymentDetailCommandService>,
    Path(id): Path<i32>,
    Json(body): Json<PaymentDetailRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let detail = service.update(id, &body).await?;

    Ok(Json(detail))
}

#[utoipa::path(
    delete,
    path = "/payment-detail/{id}",
    tag = "PaymentDetail",
    params(("id" = i32, Path, description = "Payment detail ID")),
    responses(
        (status = 204, description = "Payment detail deleted"),
        (status = 404, description = "Payment detail not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_payment_detail(
    Extension(service): Extension<DynPaymentDetailCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn payment_detail_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/payment-detail",
            get(get_payment_details).post(create_payment_detail),
        )
        .route(
            "/payment-detail/{id}",
            get(get_payment_detail)
                .put(update_payment_detail)
                .delete(delete_payment_detail),
        )
        .layer(Extension(
            app_state.di_container.payment_detail_query.clone(),
        ))
        .layer(Extension(
            app_state.di_container.payment_detail_command.clone(),
        ))
}
