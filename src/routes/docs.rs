use axum::response::Json;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    dto::{
        application_dto::{
            ApplicationDetailView, ApplicationIdResponse, ApplicationPage, ApplicationSummaryView,
            CreateApplicationPayload, UpdateApplicationPayload,
        },
        employer_dto::{EmployerDetailView, EmployerSummaryView},
        vacancy_dto::{VacancyDetailView, VacancyPage, VacancySummaryView},
    },
    models::{
        ApplicationId, ApplicationStatus, EmployerId, EmploymentType, UserId, VacancyId,
        WorkFormat,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Job board API"),
    paths(
        crate::routes::health::health,
        crate::routes::employer::get_employer,
        crate::routes::vacancy::list_vacancies,
        crate::routes::vacancy::get_vacancy,
        crate::routes::application::apply_for_vacancy,
        crate::routes::application::update_application,
        crate::routes::application::list_user_applications,
        crate::routes::application::get_user_application_for_vacancy,
    ),
    components(schemas(
        ApplicationDetailView,
        ApplicationIdResponse,
        ApplicationPage,
        ApplicationSummaryView,
        CreateApplicationPayload,
        UpdateApplicationPayload,
        EmployerDetailView,
        EmployerSummaryView,
        VacancyDetailView,
        VacancyPage,
        VacancySummaryView,
        ApplicationId,
        ApplicationStatus,
        EmployerId,
        EmploymentType,
        UserId,
        VacancyId,
        WorkFormat,
    )),
    modifiers(&BearerAuth)
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
