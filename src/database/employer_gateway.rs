use async_trait::async_trait;
use sqlx::FromRow;

use super::session::{connection, PgSession};
use crate::dto::employer_dto::EmployerDetailView;
use crate::error::Result;
use crate::models::{Employer, EmployerId, Language, LocalizedString};
use crate::services::gateway::EmployerViewReader;

#[derive(Debug, Clone, FromRow)]
struct EmployerRow {
    id: EmployerId,
    name_en: String,
    name_ru: String,
    name_fr: String,
    description_en: Option<String>,
    description_ru: Option<String>,
    description_fr: Option<String>,
    avatar_url: Option<String>,
}

impl From<EmployerRow> for Employer {
    fn from(row: EmployerRow) -> Self {
        Self {
            id: row.id,
            name: LocalizedString::new(row.name_en, row.name_ru, row.name_fr),
            description: LocalizedString::new(
                row.description_en,
                row.description_ru,
                row.description_fr,
            ),
            avatar_url: row.avatar_url,
        }
    }
}

#[derive(Clone)]
pub struct PgEmployerGateway {
    session: PgSession,
}

impl PgEmployerGateway {
    pub fn new(session: PgSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl EmployerViewReader for PgEmployerGateway {
    async fn get_view_by_id(
        &self,
        id: EmployerId,
        language: Language,
    ) -> Result<Option<EmployerDetailView>> {
        let mut slot = self.session.lock().await?;
        let row = sqlx::query_as::<_, EmployerRow>(
            r#"
            SELECT id, name_en, name_ru, name_fr,
                   description_en, description_ru, description_fr, avatar_url
            FROM employers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(connection(&mut slot)?)
        .await?;

        Ok(row.map(|row| EmployerDetailView::project(&Employer::from(row), language)))
    }
}
