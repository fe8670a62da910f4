use crate::error::Result;
use crate::models::{Application, ApplicationId, DomainError, UserId, VacancyId};
use crate::services::gateway::{ApplicationReader, ApplicationWriter};
use crate::services::transaction::TransactionManager;

#[derive(Debug, Clone)]
pub struct ApplyForVacancyDto {
    pub vacancy_id: VacancyId,
    pub user_id: UserId,
    pub cover_letter: String,
}

/// Creates a pending application. A user may apply to a vacancy only once.
pub struct ApplyForVacancy<T, G> {
    transaction_manager: T,
    application_gateway: G,
}

impl<T, G> ApplyForVacancy<T, G>
where
    T: TransactionManager,
    G: ApplicationReader + ApplicationWriter,
{
    pub fn new(transaction_manager: T, application_gateway: G) -> Self {
        Self {
            transaction_manager,
            application_gateway,
        }
    }

    pub async fn execute(&self, data: ApplyForVacancyDto) -> Result<ApplicationId> {
        let existing = self
            .application_gateway
            .get_user_application_by_vacancy_id(data.user_id, data.vacancy_id)
            .await?;
        if existing.is_some() {
            tracing::warn!(
                user_id = %data.user_id,
                vacancy_id = %data.vacancy_id,
                "duplicate application rejected"
            );
            return Err(DomainError::DuplicateApplication {
                vacancy_id: data.vacancy_id,
                user_id: data.user_id,
            }
            .into());
        }

        let application = Application::new(data.user_id, data.vacancy_id, data.cover_letter);
        self.application_gateway.add(&application).await?;
        self.transaction_manager.commit().await?;

        tracing::info!(
            application_id = %application.id,
            user_id = %application.user_id,
            vacancy_id = %application.vacancy_id,
            "application created"
        );
        Ok(application.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::ApplicationStatus;
    use crate::services::test_support::{MockApplications, MockTransactions};

    fn dto() -> ApplyForVacancyDto {
        ApplyForVacancyDto {
            vacancy_id: VacancyId::new(),
            user_id: UserId::new(),
            cover_letter: "Hire me".into(),
        }
    }

    #[tokio::test]
    async fn creates_pending_application_and_commits() {
        let data = dto();
        let (user_id, vacancy_id) = (data.user_id, data.vacancy_id);

        let mut applications = MockApplications::new();
        applications
            .expect_get_user_application_by_vacancy_id()
            .times(1)
            .returning(|_, _| Ok(None));
        applications
            .expect_add()
            .withf(move |application: &Application| {
                application.user_id == user_id
                    && application.vacancy_id == vacancy_id
                    && application.status == ApplicationStatus::Pending
                    && application.cover_letter == "Hire me"
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut transactions = MockTransactions::new();
        transactions.expect_commit().times(1).returning(|| Ok(()));

        let interactor = ApplyForVacancy::new(transactions, applications);
        assert!(interactor.execute(data).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_second_application_without_writing() {
        let data = dto();
        let existing = Application::new(data.user_id, data.vacancy_id, "First".into());

        let mut applications = MockApplications::new();
        applications
            .expect_get_user_application_by_vacancy_id()
            .returning(move |_, _| Ok(Some(existing.clone())));
        applications.expect_add().never();
        let mut transactions = MockTransactions::new();
        transactions.expect_commit().never();

        let interactor = ApplyForVacancy::new(transactions, applications);
        let err = interactor.execute(data.clone()).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Domain(DomainError::DuplicateApplication { vacancy_id, user_id })
                if vacancy_id == data.vacancy_id && user_id == data.user_id
        ));
    }

    #[tokio::test]
    async fn storage_failure_skips_commit() {
        let mut applications = MockApplications::new();
        applications
            .expect_get_user_application_by_vacancy_id()
            .returning(|_, _| Ok(None));
        applications
            .expect_add()
            .returning(|_| Err(Error::Internal("disk full".into())));
        let mut transactions = MockTransactions::new();
        transactions.expect_commit().never();

        let interactor = ApplyForVacancy::new(transactions, applications);
        assert!(matches!(
            interactor.execute(dto()).await,
            Err(Error::Internal(_))
        ));
    }
}
