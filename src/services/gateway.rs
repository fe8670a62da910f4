//! Storage ports consumed by the interactors.
//!
//! Reads that return view models take the caller's [`Language`] so the
//! storage side can resolve localized columns in one pass.

use async_trait::async_trait;

use crate::dto::application_dto::{ApplicationDetailView, ApplicationSummaryView};
use crate::dto::employer_dto::EmployerDetailView;
use crate::dto::pagination::Pagination;
use crate::dto::vacancy_dto::{VacancyDetailView, VacancyFilters, VacancySummaryView};
use crate::error::Result;
use crate::models::{Application, ApplicationId, EmployerId, Language, UserId, VacancyId};

#[async_trait]
pub trait VacancyReader: Send + Sync {
    async fn count_by_filters(&self, filters: &VacancyFilters) -> Result<i64>;
}

#[async_trait]
pub trait VacancyViewReader: Send + Sync {
    async fn get_views_by_filters(
        &self,
        pagination: Pagination,
        filters: &VacancyFilters,
        language: Language,
    ) -> Result<Vec<VacancySummaryView>>;

    async fn get_view_by_id(
        &self,
        id: VacancyId,
        language: Language,
    ) -> Result<Option<VacancyDetailView>>;
}

#[async_trait]
pub trait EmployerViewReader: Send + Sync {
    async fn get_view_by_id(
        &self,
        id: EmployerId,
        language: Language,
    ) -> Result<Option<EmployerDetailView>>;
}

#[async_trait]
pub trait ApplicationReader: Send + Sync {
    async fn get_by_id(&self, id: ApplicationId) -> Result<Option<Application>>;

    async fn get_user_application_by_vacancy_id(
        &self,
        user_id: UserId,
        vacancy_id: VacancyId,
    ) -> Result<Option<Application>>;

    async fn count_user_applications(&self, user_id: UserId) -> Result<i64>;
}

#[async_trait]
pub trait ApplicationViewReader: Send + Sync {
    /// Newest first.
    async fn get_user_application_views(
        &self,
        user_id: UserId,
        pagination: Pagination,
        language: Language,
    ) -> Result<Vec<ApplicationSummaryView>>;

    async fn get_user_application_view_by_vacancy_id(
        &self,
        user_id: UserId,
        vacancy_id: VacancyId,
        language: Language,
    ) -> Result<Option<ApplicationDetailView>>;
}

#[async_trait]
pub trait ApplicationWriter: Send + Sync {
    async fn add(&self, application: &Application) -> Result<()>;

    async fn update(&self, application: &Application) -> Result<()>;

    async fn delete(&self, application: &Application) -> Result<()>;
}
