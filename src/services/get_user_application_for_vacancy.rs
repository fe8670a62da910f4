use crate::dto::application_dto::ApplicationDetailView;
use crate::error::Result;
use crate::models::{DomainError, Language, UserId, VacancyId};
use crate::services::gateway::ApplicationViewReader;

#[derive(Debug, Clone, Copy)]
pub struct UserApplicationForVacancyDto {
    pub vacancy_id: VacancyId,
    pub user_id: UserId,
    pub language: Language,
}

pub struct GetUserApplicationForVacancy<G> {
    application_gateway: G,
}

impl<G: ApplicationViewReader> GetUserApplicationForVacancy<G> {
    pub fn new(application_gateway: G) -> Self {
        Self {
            application_gateway,
        }
    }

    pub async fn execute(
        &self,
        data: UserApplicationForVacancyDto,
    ) -> Result<ApplicationDetailView> {
        self.application_gateway
            .get_user_application_view_by_vacancy_id(data.user_id, data.vacancy_id, data.language)
            .await?
            .ok_or_else(|| {
                DomainError::UserApplicationForVacancyNotFound {
                    vacancy_id: data.vacancy_id,
                    user_id: data.user_id,
                }
                .into()
            })
    }
}
