use crate::dto::vacancy_dto::VacancyDetailView;
use crate::error::Result;
use crate::models::{DomainError, Language, VacancyId};
use crate::services::gateway::VacancyViewReader;

#[derive(Debug, Clone, Copy)]
pub struct VacancyByIdDto {
    pub vacancy_id: VacancyId,
    pub language: Language,
}

pub struct GetVacancyById<G> {
    vacancy_gateway: G,
}

impl<G: VacancyViewReader> GetVacancyById<G> {
    pub fn new(vacancy_gateway: G) -> Self {
        Self { vacancy_gateway }
    }

    pub async fn execute(&self, data: VacancyByIdDto) -> Result<VacancyDetailView> {
        tracing::debug!(vacancy_id = %data.vacancy_id, language = %data.language, "fetching vacancy");
        self.vacancy_gateway
            .get_view_by_id(data.vacancy_id, data.language)
            .await?
            .ok_or_else(|| {
                DomainError::VacancyNotFound {
                    vacancy_id: data.vacancy_id,
                }
                .into()
            })
    }
}
