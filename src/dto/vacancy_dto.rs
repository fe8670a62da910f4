use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::employer_dto::EmployerSummaryView;
use super::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::models::{Employer, EmployerId, EmploymentType, Language, Vacancy, VacancyId, WorkFormat};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VacancySummaryView {
    pub id: VacancyId,
    pub title: String,
    pub salary_from: Option<i32>,
    pub salary_to: Option<i32>,
    pub employer: EmployerSummaryView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VacancyDetailView {
    pub id: VacancyId,
    pub title: String,
    pub salary_from: Option<i32>,
    pub salary_to: Option<i32>,
    pub employer: EmployerSummaryView,
    pub key_skills: Vec<String>,
    pub work_format: WorkFormat,
    pub employment_type: EmploymentType,
    pub description: Option<String>,
    pub location: String,
}

impl VacancySummaryView {
    pub fn project(vacancy: &Vacancy, employer: &Employer, language: Language) -> Self {
        Self {
            id: vacancy.id,
            title: vacancy.title.resolve(language),
            salary_from: vacancy.salary_from,
            salary_to: vacancy.salary_to,
            employer: EmployerSummaryView::project(employer, language),
        }
    }
}

impl VacancyDetailView {
    pub fn project(vacancy: &Vacancy, employer: &Employer, language: Language) -> Self {
        Self {
            id: vacancy.id,
            title: vacancy.title.resolve(language),
            salary_from: vacancy.salary_from,
            salary_to: vacancy.salary_to,
            employer: EmployerSummaryView::project(employer, language),
            key_skills: vacancy.key_skills.clone(),
            work_format: vacancy.work_format,
            employment_type: vacancy.employment_type,
            description: vacancy.description.resolve(language),
            location: vacancy.location.resolve(language),
        }
    }
}

/// Listing constraints; every present field must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancyFilters {
    pub search: Option<String>,
    pub salary_from: Option<i32>,
    pub work_format: Option<WorkFormat>,
    pub employment_type: Option<EmploymentType>,
    pub employer_id: Option<EmployerId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VacancyPage {
    pub total: i64,
    pub total_pages: i64,
    pub result: Vec<VacancySummaryView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(default)]
pub struct VacancyListQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub search: Option<String>,
    #[validate(range(min = 0))]
    pub salary_from: Option<i32>,
    pub work_format: Option<WorkFormat>,
    pub employment_type: Option<EmploymentType>,
    pub employer_id: Option<EmployerId>,
}

impl VacancyListQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn filters(&self) -> VacancyFilters {
        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string);

        VacancyFilters {
            search,
            salary_from: self.salary_from,
            work_format: self.work_format,
            employment_type: self.employment_type,
            employer_id: self.employer_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalizedString;

    fn employer() -> Employer {
        Employer {
            id: EmployerId::new(),
            name: LocalizedString::new("Acme".into(), "Акме".into(), "Acmé".into()),
            description: LocalizedString::new(None, None, None),
            avatar_url: Some("https://cdn.example.com/acme.png".into()),
        }
    }

    fn vacancy(employer_id: EmployerId) -> Vacancy {
        Vacancy {
            id: VacancyId::new(),
            title: LocalizedString::new("Backend developer".into(), "Бэкенд-разработчик".into(), "Développeur backend".into()),
            description: LocalizedString::new(Some("Build APIs".into()), Some("Делать API".into()), None),
            location: LocalizedString::new("Moscow".into(), "Москва".into(), "Moscou".into()),
            salary_from: Some(80_000),
            salary_to: None,
            key_skills: vec!["Rust".into(), "SQL".into()],
            work_format: WorkFormat::Hybrid,
            employment_type: EmploymentType::FullTime,
            employer_id,
        }
    }

    #[test]
    fn detail_view_resolves_every_text_field() {
        let employer = employer();
        let vacancy = vacancy(employer.id);
        let view = VacancyDetailView::project(&vacancy, &employer, Language::Ru);
        assert_eq!(view.title, "Бэкенд-разработчик");
        assert_eq!(view.location, "Москва");
        assert_eq!(view.description.as_deref(), Some("Делать API"));
        assert_eq!(view.employer.name, "Акме");
        assert_eq!(view.key_skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn summary_view_keeps_salary_bounds() {
        let employer = employer();
        let vacancy = vacancy(employer.id);
        let view = VacancySummaryView::project(&vacancy, &employer, Language::Fr);
        assert_eq!(view.title, "Développeur backend");
        assert_eq!(view.salary_from, Some(80_000));
        assert_eq!(view.salary_to, None);
    }

    #[test]
    fn blank_search_is_ignored() {
        let query = VacancyListQuery {
            search: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(query.filters().search, None);
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), 10);
    }

    #[test]
    fn negative_salary_floor_fails_validation() {
        let query = VacancyListQuery {
            salary_from: Some(-1),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }
}
