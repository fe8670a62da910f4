use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::session::{connection, PgSession};
use super::vacancy_gateway::{VacancyRow, VACANCY_COLUMNS};
use crate::dto::application_dto::{ApplicationDetailView, ApplicationSummaryView};
use crate::dto::pagination::Pagination;
use crate::error::{Error, Result};
use crate::models::{Application, ApplicationId, DomainError, Language, UserId, VacancyId};
use crate::services::gateway::{ApplicationReader, ApplicationViewReader, ApplicationWriter};

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

const APPLICATION_VIEW_FROM: &str = r#"
    FROM applications a
    JOIN vacancies v ON v.id = a.vacancy_id
    JOIN employers e ON e.id = v.employer_id
"#;

#[derive(Debug, Clone, FromRow)]
struct ApplicationRow {
    id: ApplicationId,
    user_id: UserId,
    vacancy_id: VacancyId,
    cover_letter: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ApplicationRow> for Application {
    type Error = Error;

    fn try_from(row: ApplicationRow) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            vacancy_id: row.vacancy_id,
            cover_letter: row.cover_letter,
            status: row.status.parse()?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, FromRow)]
struct ApplicationViewRow {
    application_id: ApplicationId,
    user_id: UserId,
    status: String,
    cover_letter: String,
    created_at: DateTime<Utc>,
    #[sqlx(flatten)]
    vacancy: VacancyRow,
}

impl ApplicationViewRow {
    fn into_summary(self, language: Language) -> Result<ApplicationSummaryView> {
        Ok(ApplicationSummaryView {
            id: self.application_id,
            user_id: self.user_id,
            status: self.status.parse()?,
            created_at: self.created_at,
            vacancy: self.vacancy.into_summary(language)?,
        })
    }

    fn into_detail(self, language: Language) -> Result<ApplicationDetailView> {
        Ok(ApplicationDetailView {
            id: self.application_id,
            user_id: self.user_id,
            status: self.status.parse()?,
            created_at: self.created_at,
            cover_letter: self.cover_letter,
            vacancy: self.vacancy.into_summary(language)?,
        })
    }
}

fn view_select(condition: &str) -> String {
    format!(
        "SELECT a.id AS application_id, a.user_id, a.status, a.cover_letter, a.created_at, {}{} WHERE {}",
        VACANCY_COLUMNS, APPLICATION_VIEW_FROM, condition
    )
}

/// Turns constraint violations on insert into the matching business error.
fn map_insert_error(err: sqlx::Error, application: &Application) -> Error {
    let code = err
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.into_owned());

    match code.as_deref() {
        Some(UNIQUE_VIOLATION) => DomainError::DuplicateApplication {
            vacancy_id: application.vacancy_id,
            user_id: application.user_id,
        }
        .into(),
        Some(FOREIGN_KEY_VIOLATION) => DomainError::VacancyNotFound {
            vacancy_id: application.vacancy_id,
        }
        .into(),
        _ => Error::Database(err),
    }
}

#[derive(Clone)]
pub struct PgApplicationGateway {
    session: PgSession,
}

impl PgApplicationGateway {
    pub fn new(session: PgSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ApplicationReader for PgApplicationGateway {
    async fn get_by_id(&self, id: ApplicationId) -> Result<Option<Application>> {
        let mut slot = self.session.lock().await?;
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, user_id, vacancy_id, cover_letter, status, created_at
            FROM applications
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(connection(&mut slot)?)
        .await?;

        row.map(Application::try_from).transpose()
    }

    async fn get_user_application_by_vacancy_id(
        &self,
        user_id: UserId,
        vacancy_id: VacancyId,
    ) -> Result<Option<Application>> {
        let mut slot = self.session.lock().await?;
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, user_id, vacancy_id, cover_letter, status, created_at
            FROM applications
            WHERE user_id = $1 AND vacancy_id = $2
            "#,
        )
        .bind(user_id)
        .bind(vacancy_id)
        .fetch_optional(connection(&mut slot)?)
        .await?;

        row.map(Application::try_from).transpose()
    }

    async fn count_user_applications(&self, user_id: UserId) -> Result<i64> {
        let mut slot = self.session.lock().await?;
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM applications WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(connection(&mut slot)?)
        .await?;
        Ok(total)
    }
}

#[async_trait]
impl ApplicationViewReader for PgApplicationGateway {
    async fn get_user_application_views(
        &self,
        user_id: UserId,
        pagination: Pagination,
        language: Language,
    ) -> Result<Vec<ApplicationSummaryView>> {
        let sql = format!(
            "{} ORDER BY a.created_at DESC, a.id LIMIT $2 OFFSET $3",
            view_select("a.user_id = $1")
        );

        let mut slot = self.session.lock().await?;
        let rows = sqlx::query_as::<_, ApplicationViewRow>(&sql)
            .bind(user_id)
            .bind(pagination.page_size())
            .bind(pagination.offset())
            .fetch_all(connection(&mut slot)?)
            .await?;

        rows.into_iter()
            .map(|row| row.into_summary(language))
            .collect()
    }

    async fn get_user_application_view_by_vacancy_id(
        &self,
        user_id: UserId,
        vacancy_id: VacancyId,
        language: Language,
    ) -> Result<Option<ApplicationDetailView>> {
        let sql = view_select("a.user_id = $1 AND a.vacancy_id = $2");

        let mut slot = self.session.lock().await?;
        let row = sqlx::query_as::<_, ApplicationViewRow>(&sql)
            .bind(user_id)
            .bind(vacancy_id)
            .fetch_optional(connection(&mut slot)?)
            .await?;

        row.map(|row| row.into_detail(language)).transpose()
    }
}

#[async_trait]
impl ApplicationWriter for PgApplicationGateway {
    async fn add(&self, application: &Application) -> Result<()> {
        let mut slot = self.session.lock().await?;
        sqlx::query(
            r#"
            INSERT INTO applications (id, user_id, vacancy_id, cover_letter, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(application.id)
        .bind(application.user_id)
        .bind(application.vacancy_id)
        .bind(&application.cover_letter)
        .bind(application.status.as_str())
        .bind(application.created_at)
        .execute(connection(&mut slot)?)
        .await
        .map_err(|err| map_insert_error(err, application))?;
        Ok(())
    }

    async fn update(&self, application: &Application) -> Result<()> {
        let mut slot = self.session.lock().await?;
        sqlx::query(
            r#"
            UPDATE applications
            SET cover_letter = $2, status = $3
            WHERE id = $1
            "#,
        )
        .bind(application.id)
        .bind(&application.cover_letter)
        .bind(application.status.as_str())
        .execute(connection(&mut slot)?)
        .await?;
        Ok(())
    }

    async fn delete(&self, application: &Application) -> Result<()> {
        let mut slot = self.session.lock().await?;
        sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(application.id)
            .execute(connection(&mut slot)?)
            .await?;
        Ok(())
    }
}
