use axum::{
    extract::State,
    response::Json,
};

use crate::{
    dto::vacancy_dto::{VacancyDetailView, VacancyListQuery, VacancyPage},
    error::ApiResult,
    middleware::{
        extract::{ApiPath, ApiQuery},
        language::RequestLanguage,
    },
    models::VacancyId,
    services::{
        get_vacancies_by_filters::VacancyByFiltersDto, get_vacancy_by_id::VacancyByIdDto,
    },
    utils::validation::validate,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/vacancies",
    params(
        ("page" = Option<i64>, Query, description = "Page number, starting at 1"),
        ("page_size" = Option<i64>, Query, description = "Items per page, at most 500"),
        ("search" = Option<String>, Query, description = "Matches title, employer name or key skills"),
        ("salary_from" = Option<i32>, Query, description = "Minimal lower salary bound"),
        ("work_format" = Option<String>, Query, description = "remote, onsite or hybrid"),
        ("employment_type" = Option<String>, Query, description = "full-time, part-time, internship or temporary"),
        ("employer_id" = Option<Uuid>, Query, description = "Filter by employer"),
        ("Accept-Language" = Option<String>, Header, description = "ru, en or fr")
    ),
    responses(
        (status = 200, description = "Page of vacancies", body = VacancyPage),
        (status = 400, description = "Incorrect pagination or filters")
    )
)]
#[axum::debug_handler]
pub async fn list_vacancies(
    State(state): State<AppState>,
    RequestLanguage(language): RequestLanguage,
    ApiQuery(query): ApiQuery<VacancyListQuery>,
) -> ApiResult<Json<VacancyPage>> {
    validate(&query).map_err(|e| e.localized(language))?;
    let page = state
        .get_vacancies_by_filters()
        .execute(VacancyByFiltersDto {
            page: query.page(),
            page_size: query.page_size(),
            filters: query.filters(),
            language,
        })
        .await
        .map_err(|e| e.localized(language))?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/vacancies/{id}",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID"),
        ("Accept-Language" = Option<String>, Header, description = "ru, en or fr")
    ),
    responses(
        (status = 200, description = "Vacancy found", body = VacancyDetailView),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    RequestLanguage(language): RequestLanguage,
    ApiPath(vacancy_id): ApiPath<VacancyId>,
) -> ApiResult<Json<VacancyDetailView>> {
    let vacancy = state
        .get_vacancy_by_id()
        .execute(VacancyByIdDto {
            vacancy_id,
            language,
        })
        .await
        .map_err(|e| e.localized(language))?;
    Ok(Json(vacancy))
}
