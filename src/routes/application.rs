use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::application_dto::{
        ApplicationDetailView, ApplicationIdResponse, ApplicationListQuery, ApplicationPage,
        CreateApplicationPayload, UpdateApplicationPayload,
    },
    error::ApiResult,
    middleware::{
        auth::CurrentUser,
        extract::{ApiJson, ApiPath, ApiQuery},
        language::RequestLanguage,
    },
    models::{ApplicationId, VacancyId},
    services::{
        apply_for_vacancy::ApplyForVacancyDto,
        get_user_application_for_vacancy::UserApplicationForVacancyDto,
        get_user_applications::UserApplicationsDto, update_application::UpdateApplicationDto,
    },
    utils::validation::validate,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = CreateApplicationPayload,
    responses(
        (status = 201, description = "Application created", body = ApplicationIdResponse),
        (status = 400, description = "Invalid payload or application already exists"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn apply_for_vacancy(
    State(state): State<AppState>,
    RequestLanguage(language): RequestLanguage,
    CurrentUser(user_id): CurrentUser,
    ApiJson(payload): ApiJson<CreateApplicationPayload>,
) -> ApiResult<impl IntoResponse> {
    validate(&payload).map_err(|e| e.localized(language))?;
    let id = state
        .apply_for_vacancy()
        .execute(ApplyForVacancyDto {
            vacancy_id: payload.vacancy_id,
            user_id,
            cover_letter: payload.cover_letter,
        })
        .await
        .map_err(|e| e.localized(language))?;
    Ok((StatusCode::CREATED, Json(ApplicationIdResponse { id })))
}

#[utoipa::path(
    patch,
    path = "/api/applications/{id}",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationPayload,
    responses(
        (status = 200, description = "Application updated", body = ApplicationIdResponse),
        (status = 400, description = "Invalid payload or application already viewed"),
        (status = 403, description = "Application belongs to another user"),
        (status = 404, description = "Application not found")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn update_application(
    State(state): State<AppState>,
    RequestLanguage(language): RequestLanguage,
    CurrentUser(user_id): CurrentUser,
    ApiPath(application_id): ApiPath<ApplicationId>,
    ApiJson(payload): ApiJson<UpdateApplicationPayload>,
) -> ApiResult<Json<ApplicationIdResponse>> {
    validate(&payload).map_err(|e| e.localized(language))?;
    let id = state
        .update_application()
        .execute(UpdateApplicationDto {
            application_id,
            user_id,
            new_cover_letter: payload.cover_letter,
        })
        .await
        .map_err(|e| e.localized(language))?;
    Ok(Json(ApplicationIdResponse { id }))
}

#[utoipa::path(
    get,
    path = "/api/applications",
    params(
        ("page" = Option<i64>, Query, description = "Page number, starting at 1"),
        ("page_size" = Option<i64>, Query, description = "Items per page, at most 500")
    ),
    responses(
        (status = 200, description = "Caller's applications, newest first", body = ApplicationPage),
        (status = 400, description = "Incorrect pagination")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn list_user_applications(
    State(state): State<AppState>,
    RequestLanguage(language): RequestLanguage,
    CurrentUser(user_id): CurrentUser,
    ApiQuery(query): ApiQuery<ApplicationListQuery>,
) -> ApiResult<Json<ApplicationPage>> {
    let page = state
        .get_user_applications()
        .execute(UserApplicationsDto {
            user_id,
            page: query.page(),
            page_size: query.page_size(),
            language,
        })
        .await
        .map_err(|e| e.localized(language))?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/vacancies/{id}/application",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Caller's application for the vacancy", body = ApplicationDetailView),
        (status = 404, description = "No application for this vacancy")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn get_user_application_for_vacancy(
    State(state): State<AppState>,
    RequestLanguage(language): RequestLanguage,
    CurrentUser(user_id): CurrentUser,
    ApiPath(vacancy_id): ApiPath<VacancyId>,
) -> ApiResult<Json<ApplicationDetailView>> {
    let application = state
        .get_user_application_for_vacancy()
        .execute(UserApplicationForVacancyDto {
            vacancy_id,
            user_id,
            language,
        })
        .await
        .map_err(|e| e.localized(language))?;
    Ok(Json(application))
}
