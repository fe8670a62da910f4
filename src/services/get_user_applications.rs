use crate::dto::application_dto::ApplicationPage;
use crate::dto::pagination::Pagination;
use crate::error::Result;
use crate::models::{Language, UserId};
use crate::services::gateway::{ApplicationReader, ApplicationViewReader};

#[derive(Debug, Clone, Copy)]
pub struct UserApplicationsDto {
    pub user_id: UserId,
    pub page: i64,
    pub page_size: i64,
    pub language: Language,
}

pub struct GetUserApplications<G> {
    application_gateway: G,
}

impl<G> GetUserApplications<G>
where
    G: ApplicationReader + ApplicationViewReader,
{
    pub fn new(application_gateway: G) -> Self {
        Self {
            application_gateway,
        }
    }

    pub async fn execute(&self, data: UserApplicationsDto) -> Result<ApplicationPage> {
        let pagination = Pagination::new(data.page, data.page_size)?;

        let total = self
            .application_gateway
            .count_user_applications(data.user_id)
            .await?;
        let result = self
            .application_gateway
            .get_user_application_views(data.user_id, pagination, data.language)
            .await?;

        Ok(ApplicationPage {
            total,
            total_pages: pagination.total_pages(total),
            result,
        })
    }
}
