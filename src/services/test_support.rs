use async_trait::async_trait;
use mockall::mock;

use crate::error::Result;
use crate::models::{Application, ApplicationId, UserId, VacancyId};
use crate::services::gateway::{ApplicationReader, ApplicationWriter};
use crate::services::transaction::TransactionManager;

mock! {
    pub Applications {}

    #[async_trait]
    impl ApplicationReader for Applications {
        async fn get_by_id(&self, id: ApplicationId) -> Result<Option<Application>>;
        async fn get_user_application_by_vacancy_id(
            &self,
            user_id: UserId,
            vacancy_id: VacancyId,
        ) -> Result<Option<Application>>;
        async fn count_user_applications(&self, user_id: UserId) -> Result<i64>;
    }

    #[async_trait]
    impl ApplicationWriter for Applications {
        async fn add(&self, application: &Application) -> Result<()>;
        async fn update(&self, application: &Application) -> Result<()>;
        async fn delete(&self, application: &Application) -> Result<()>;
    }
}

mock! {
    pub Transactions {}

    #[async_trait]
    impl TransactionManager for Transactions {
        async fn commit(&self) -> Result<()>;
        async fn flush(&self) -> Result<()>;
        async fn rollback(&self) -> Result<()>;
    }
}
