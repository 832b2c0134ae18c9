//! Current customer handler

use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use super::dto::CustomerResponse;
use crate::application::AccountService;
use crate::interfaces::http::common::{ApiResponse, ApiResult};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct CustomerState {
    pub accounts: Arc<AccountService>,
}

#[utoipa::path(
    get,
    path = "/rest/customer",
    tag = "Customer",
    security(("principal" = [])),
    responses(
        (status = 200, description = "Account of the caller", body = ApiResponse<CustomerResponse>),
        (status = 404, description = "No account for the principal")
    )
)]
pub async fn get_customer(
    State(state): State<CustomerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<CustomerResponse> {
    let account = state.accounts.get_by_email(&user.email).await?;
    Ok(Json(ApiResponse::success(account.into())))
}
