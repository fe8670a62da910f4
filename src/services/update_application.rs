use crate::error::Result;
use crate::models::{ApplicationId, DomainError, UserId};
use crate::services::gateway::{ApplicationReader, ApplicationWriter};
use crate::services::transaction::TransactionManager;

#[derive(Debug, Clone)]
pub struct UpdateApplicationDto {
    pub application_id: ApplicationId,
    pub user_id: UserId,
    pub new_cover_letter: String,
}

/// Rewrites the cover letter of a pending application owned by the caller.
/// The status is left untouched.
pub struct UpdateApplication<T, G> {
    transaction_manager: T,
    application_gateway: G,
}

impl<T, G> UpdateApplication<T, G>
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

    pub async fn execute(&self, data: UpdateApplicationDto) -> Result<ApplicationId> {
        let Some(mut application) = self
            .application_gateway
            .get_by_id(data.application_id)
            .await?
        else {
            return Err(DomainError::ApplicationNotFound {
                application_id: data.application_id,
            }
            .into());
        };

        if application.user_id != data.user_id {
            tracing::warn!(
                application_id = %data.application_id,
                user_id = %data.user_id,
                "update of foreign application rejected"
            );
            return Err(DomainError::Forbidden {
                application_id: data.application_id,
                user_id: data.user_id,
            }
            .into());
        }
        if !application.is_pending() {
            return Err(DomainError::AlreadyViewed {
                application_id: data.application_id,
            }
            .into());
        }

        application.cover_letter = data.new_cover_letter;
        self.application_gateway.update(&application).await?;
        self.transaction_manager.commit().await?;

        tracing::info!(application_id = %application.id, "application updated");
        Ok(application.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{Application, ApplicationStatus, VacancyId};
    use crate::services::test_support::{MockApplications, MockTransactions};

    fn stored(owner: UserId, status: ApplicationStatus) -> Application {
        let mut application = Application::new(owner, VacancyId::new(), "Original".into());
        application.status = status;
        application
    }

    fn reader_returning(application: Option<Application>) -> MockApplications {
        let mut applications = MockApplications::new();
        applications
            .expect_get_by_id()
            .returning(move |_| Ok(application.clone()));
        applications
    }

    #[tokio::test]
    async fn owner_updates_pending_application() {
        let owner = UserId::new();
        let application = stored(owner, ApplicationStatus::Pending);
        let application_id = application.id;

        let mut applications = reader_returning(Some(application));
        applications
            .expect_update()
            .withf(|updated: &Application| {
                updated.cover_letter == "new text" && updated.status == ApplicationStatus::Pending
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut transactions = MockTransactions::new();
        transactions.expect_commit().times(1).returning(|| Ok(()));

        let interactor = UpdateApplication::new(transactions, applications);
        let id = interactor
            .execute(UpdateApplicationDto {
                application_id,
                user_id: owner,
                new_cover_letter: "new text".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, application_id);
    }

    #[tokio::test]
    async fn missing_application_is_not_found() {
        let mut applications = reader_returning(None);
        applications.expect_update().never();
        let interactor = UpdateApplication::new(MockTransactions::new(), applications);

        let application_id = ApplicationId::new();
        let err = interactor
            .execute(UpdateApplicationDto {
                application_id,
                user_id: UserId::new(),
                new_cover_letter: "x".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Domain(DomainError::ApplicationNotFound { application_id: id }) if id == application_id
        ));
    }

    #[tokio::test]
    async fn other_users_are_forbidden_whatever_the_text() {
        for text in ["", "polite request", "Original"] {
            let application = stored(UserId::new(), ApplicationStatus::Pending);
            let application_id = application.id;
            let mut applications = reader_returning(Some(application));
            applications.expect_update().never();
            let mut transactions = MockTransactions::new();
            transactions.expect_commit().never();

            let intruder = UserId::new();
            let err = UpdateApplication::new(transactions, applications)
                .execute(UpdateApplicationDto {
                    application_id,
                    user_id: intruder,
                    new_cover_letter: text.into(),
                })
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                Error::Domain(DomainError::Forbidden { user_id, .. }) if user_id == intruder
            ));
        }
    }

    #[tokio::test]
    async fn owner_cannot_edit_viewed_application() {
        for status in [
            ApplicationStatus::Review,
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
        ] {
            let owner = UserId::new();
            let application = stored(owner, status);
            let application_id = application.id;
            let mut applications = reader_returning(Some(application));
            applications.expect_update().never();

            let err = UpdateApplication::new(MockTransactions::new(), applications)
                .execute(UpdateApplicationDto {
                    application_id,
                    user_id: owner,
                    new_cover_letter: "too late".into(),
                })
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                Error::Domain(DomainError::AlreadyViewed { .. })
            ));
        }
    }
}
