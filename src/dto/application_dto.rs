use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use super::vacancy_dto::VacancySummaryView;
use crate::models::{ApplicationId, ApplicationStatus, UserId, VacancyId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationSummaryView {
    pub id: ApplicationId,
    pub user_id: UserId,
    pub vacancy: VacancySummaryView,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationDetailView {
    pub id: ApplicationId,
    pub user_id: UserId,
    pub vacancy: VacancySummaryView,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub cover_letter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationPage {
    pub total: i64,
    pub total_pages: i64,
    pub result: Vec<ApplicationSummaryView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateApplicationPayload {
    pub vacancy_id: VacancyId,
    #[validate(length(min = 1, max = 2000))]
    pub cover_letter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateApplicationPayload {
    #[validate(length(min = 1, max = 2000))]
    pub cover_letter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicationIdResponse {
    pub id: ApplicationId,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApplicationListQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ApplicationListQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
