use crate::dto::pagination::Pagination;
use crate::dto::vacancy_dto::{VacancyFilters, VacancyPage};
use crate::error::Result;
use crate::models::Language;
use crate::services::gateway::{VacancyReader, VacancyViewReader};

#[derive(Debug, Clone)]
pub struct VacancyByFiltersDto {
    pub page: i64,
    pub page_size: i64,
    pub filters: VacancyFilters,
    pub language: Language,
}

pub struct GetVacanciesByFilters<G> {
    vacancy_gateway: G,
}

impl<G> GetVacanciesByFilters<G>
where
    G: VacancyReader + VacancyViewReader,
{
    pub fn new(vacancy_gateway: G) -> Self {
        Self { vacancy_gateway }
    }

    pub async fn execute(&self, data: VacancyByFiltersDto) -> Result<VacancyPage> {
        let pagination = Pagination::new(data.page, data.page_size)?;

        let total = self.vacancy_gateway.count_by_filters(&data.filters).await?;
        let result = self
            .vacancy_gateway
            .get_views_by_filters(pagination, &data.filters, data.language)
            .await?;

        tracing::debug!(
            total,
            page = pagination.page(),
            returned = result.len(),
            "vacancies listed"
        );
        Ok(VacancyPage {
            total,
            total_pages: pagination.total_pages(total),
            result,
        })
    }
}
