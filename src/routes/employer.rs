use axum::{
    extract::State,
    response::Json,
};

use crate::{
    dto::employer_dto::EmployerDetailView,
    error::ApiResult,
    middleware::{extract::ApiPath, language::RequestLanguage},
    models::EmployerId,
    services::get_employer_by_id::EmployerByIdDto,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/employers/{id}",
    params(
        ("id" = Uuid, Path, description = "Employer ID"),
        ("Accept-Language" = Option<String>, Header, description = "ru, en or fr")
    ),
    responses(
        (status = 200, description = "Employer found", body = EmployerDetailView),
        (status = 404, description = "Employer not found")
    )
)]
#[axum::debug_handler]
pub async fn get_employer(
    State(state): State<AppState>,
    RequestLanguage(language): RequestLanguage,
    ApiPath(employer_id): ApiPath<EmployerId>,
) -> ApiResult<Json<EmployerDetailView>> {
    let employer = state
        .get_employer_by_id()
        .execute(EmployerByIdDto {
            employer_id,
            language,
        })
        .await
        .map_err(|e| e.localized(language))?;
    Ok(Json(employer))
}
