use async_trait::async_trait;
use sqlx::{FromRow, Postgres, QueryBuilder};

use super::session::{connection, PgSession};
use crate::dto::pagination::Pagination;
use crate::dto::vacancy_dto::{VacancyDetailView, VacancyFilters, VacancySummaryView};
use crate::error::Result;
use crate::models::vacancy::parse_key_skills;
use crate::models::{Employer, EmployerId, Language, LocalizedString, Vacancy, VacancyId};
use crate::services::gateway::{VacancyReader, VacancyViewReader};

pub(crate) const VACANCY_COLUMNS: &str = r#"
    v.id, v.title_en, v.title_ru, v.title_fr,
    v.description_en, v.description_ru, v.description_fr,
    v.location_en, v.location_ru, v.location_fr,
    v.salary_from, v.salary_to, v.key_skills, v.work_format, v.employment_type, v.employer_id,
    e.name_en AS employer_name_en, e.name_ru AS employer_name_ru, e.name_fr AS employer_name_fr,
    e.description_en AS employer_description_en,
    e.description_ru AS employer_description_ru,
    e.description_fr AS employer_description_fr,
    e.avatar_url AS employer_avatar_url
"#;

const VACANCY_FROM: &str = " FROM vacancies v JOIN employers e ON e.id = v.employer_id";

const SEARCH_COLUMNS: [&str; 7] = [
    "v.title_en",
    "v.title_ru",
    "v.title_fr",
    "e.name_en",
    "e.name_ru",
    "e.name_fr",
    "v.key_skills",
];

/// A vacancy joined with its employer, one column per language.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct VacancyRow {
    pub id: VacancyId,
    pub title_en: String,
    pub title_ru: String,
    pub title_fr: String,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub description_fr: Option<String>,
    pub location_en: String,
    pub location_ru: String,
    pub location_fr: String,
    pub salary_from: Option<i32>,
    pub salary_to: Option<i32>,
    pub key_skills: Option<String>,
    pub work_format: String,
    pub employment_type: String,
    pub employer_id: EmployerId,
    pub employer_name_en: String,
    pub employer_name_ru: String,
    pub employer_name_fr: String,
    pub employer_description_en: Option<String>,
    pub employer_description_ru: Option<String>,
    pub employer_description_fr: Option<String>,
    pub employer_avatar_url: Option<String>,
}

impl VacancyRow {
    pub(crate) fn into_entities(self) -> Result<(Vacancy, Employer)> {
        let employer = Employer {
            id: self.employer_id,
            name: LocalizedString::new(
                self.employer_name_en,
                self.employer_name_ru,
                self.employer_name_fr,
            ),
            description: LocalizedString::new(
                self.employer_description_en,
                self.employer_description_ru,
                self.employer_description_fr,
            ),
            avatar_url: self.employer_avatar_url,
        };
        let vacancy = Vacancy {
            id: self.id,
            title: LocalizedString::new(self.title_en, self.title_ru, self.title_fr),
            description: LocalizedString::new(
                self.description_en,
                self.description_ru,
                self.description_fr,
            ),
            location: LocalizedString::new(self.location_en, self.location_ru, self.location_fr),
            salary_from: self.salary_from,
            salary_to: self.salary_to,
            key_skills: parse_key_skills(self.key_skills.as_deref()),
            work_format: self.work_format.parse()?,
            employment_type: self.employment_type.parse()?,
            employer_id: self.employer_id,
        };
        Ok((vacancy, employer))
    }

    pub(crate) fn into_summary(self, language: Language) -> Result<VacancySummaryView> {
        let (vacancy, employer) = self.into_entities()?;
        Ok(VacancySummaryView::project(&vacancy, &employer, language))
    }
}

/// Escapes LIKE metacharacters and wraps the term for substring matching.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filters: &VacancyFilters) {
    builder.push(" WHERE TRUE");

    if let Some(search) = &filters.search {
        let pattern = like_pattern(search);
        builder.push(" AND (");
        for (i, column) in SEARCH_COLUMNS.iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            builder.push(*column).push(" ILIKE ").push_bind(pattern.clone());
        }
        builder.push(")");
    }
    if let Some(salary_from) = filters.salary_from {
        builder.push(" AND v.salary_from >= ").push_bind(salary_from);
    }
    if let Some(work_format) = filters.work_format {
        builder
            .push(" AND v.work_format = ")
            .push_bind(work_format.as_str());
    }
    if let Some(employment_type) = filters.employment_type {
        builder
            .push(" AND v.employment_type = ")
            .push_bind(employment_type.as_str());
    }
    if let Some(employer_id) = filters.employer_id {
        builder.push(" AND v.employer_id = ").push_bind(employer_id);
    }
}

#[derive(Clone)]
pub struct PgVacancyGateway {
    session: PgSession,
}

impl PgVacancyGateway {
    pub fn new(session: PgSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl VacancyReader for PgVacancyGateway {
    async fn count_by_filters(&self, filters: &VacancyFilters) -> Result<i64> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*)");
        builder.push(VACANCY_FROM);
        push_filters(&mut builder, filters);

        let mut slot = self.session.lock().await?;
        let (total,) = builder
            .build_query_as::<(i64,)>()
            .fetch_one(connection(&mut slot)?)
            .await?;
        Ok(total)
    }
}

#[async_trait]
impl VacancyViewReader for PgVacancyGateway {
    async fn get_views_by_filters(
        &self,
        pagination: Pagination,
        filters: &VacancyFilters,
        language: Language,
    ) -> Result<Vec<VacancySummaryView>> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT");
        builder.push(VACANCY_COLUMNS).push(VACANCY_FROM);
        push_filters(&mut builder, filters);
        builder
            .push(" ORDER BY v.id LIMIT ")
            .push_bind(pagination.page_size())
            .push(" OFFSET ")
            .push_bind(pagination.offset());

        let mut slot = self.session.lock().await?;
        let rows = builder
            .build_query_as::<VacancyRow>()
            .fetch_all(connection(&mut slot)?)
            .await?;

        rows.into_iter()
            .map(|row| row.into_summary(language))
            .collect()
    }

    async fn get_view_by_id(
        &self,
        id: VacancyId,
        language: Language,
    ) -> Result<Option<VacancyDetailView>> {
        let sql = format!("SELECT {}{} WHERE v.id = $1", VACANCY_COLUMNS, VACANCY_FROM);

        let mut slot = self.session.lock().await?;
        let row = sqlx::query_as::<_, VacancyRow>(&sql)
            .bind(id)
            .fetch_optional(connection(&mut slot)?)
            .await?;

        row.map(|row| {
            let (vacancy, employer) = row.into_entities()?;
            Ok(VacancyDetailView::project(&vacancy, &employer, language))
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmploymentType, WorkFormat};

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("rust"), "%rust%");
        assert_eq!(like_pattern("100%_\\"), "%100\\%\\_\\\\%");
    }

    #[test]
    fn filters_are_anded_in_order() {
        let filters = VacancyFilters {
            search: Some("python".into()),
            salary_from: Some(90_000),
            work_format: Some(WorkFormat::Remote),
            employment_type: Some(EmploymentType::Internship),
            employer_id: Some(EmployerId::new()),
        };
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*)");
        builder.push(VACANCY_FROM);
        push_filters(&mut builder, &filters);
        let sql = builder.sql();

        assert!(sql.contains("v.title_en ILIKE $1 OR"));
        assert!(sql.contains("v.key_skills ILIKE $7)"));
        assert!(sql.contains("AND v.salary_from >= $8"));
        assert!(sql.contains("AND v.work_format = $9"));
        assert!(sql.contains("AND v.employment_type = $10"));
        assert!(sql.contains("AND v.employer_id = $11"));
    }

    #[test]
    fn absent_filters_add_no_constraints() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*)");
        builder.push(VACANCY_FROM);
        push_filters(&mut builder, &VacancyFilters::default());
        assert!(builder.sql().ends_with("WHERE TRUE"));
    }

    #[test]
    fn row_maps_to_localized_detail() {
        let row = VacancyRow {
            id: VacancyId::new(),
            title_en: "Data analyst".into(),
            title_ru: "Аналитик данных".into(),
            title_fr: "Analyste de données".into(),
            description_en: None,
            description_ru: None,
            description_fr: None,
            location_en: "Paris".into(),
            location_ru: "Париж".into(),
            location_fr: "Paris".into(),
            salary_from: Some(80_000),
            salary_to: Some(120_000),
            key_skills: Some("Python, Django,, REST API".into()),
            work_format: "remote".into(),
            employment_type: "part-time".into(),
            employer_id: EmployerId::new(),
            employer_name_en: "Acme".into(),
            employer_name_ru: "Акме".into(),
            employer_name_fr: "Acmé".into(),
            employer_description_en: None,
            employer_description_ru: None,
            employer_description_fr: None,
            employer_avatar_url: None,
        };
        let (vacancy, employer) = row.into_entities().unwrap();
        let view = VacancyDetailView::project(&vacancy, &employer, Language::Ru);
        assert_eq!(view.title, "Аналитик данных");
        assert_eq!(view.key_skills, vec!["Python", "Django", "REST API"]);
        assert_eq!(view.work_format, WorkFormat::Remote);
        assert_eq!(view.employment_type, EmploymentType::PartTime);
        assert_eq!(view.employer.name, "Акме");
    }
}
