use crate::dto::employer_dto::EmployerDetailView;
use crate::error::Result;
use crate::models::{DomainError, EmployerId, Language};
use crate::services::gateway::EmployerViewReader;

#[derive(Debug, Clone, Copy)]
pub struct EmployerByIdDto {
    pub employer_id: EmployerId,
    pub language: Language,
}

pub struct GetEmployerById<G> {
    employer_gateway: G,
}

impl<G: EmployerViewReader> GetEmployerById<G> {
    pub fn new(employer_gateway: G) -> Self {
        Self { employer_gateway }
    }

    pub async fn execute(&self, data: EmployerByIdDto) -> Result<EmployerDetailView> {
        tracing::debug!(employer_id = %data.employer_id, language = %data.language, "fetching employer");
        self.employer_gateway
            .get_view_by_id(data.employer_id, data.language)
            .await?
            .ok_or_else(|| {
                DomainError::EmployerNotFound {
                    employer_id: data.employer_id,
                }
                .into()
            })
    }
}
