use axum::http::StatusCode;
use serde_json::{json, Map, Value as JsonValue};

use super::ids::{ApplicationId, EmployerId, UserId, VacancyId};
use super::language::Language;

/// Business rule violations raised by the interactors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("There is no vacancy with id {vacancy_id}!")]
    VacancyNotFound { vacancy_id: VacancyId },

    #[error("There is no employer with id {employer_id}!")]
    EmployerNotFound { employer_id: EmployerId },

    #[error("Application with id {application_id} not found!")]
    ApplicationNotFound { application_id: ApplicationId },

    #[error("There is no application for vacancy {vacancy_id} from user {user_id}!")]
    UserApplicationForVacancyNotFound {
        vacancy_id: VacancyId,
        user_id: UserId,
    },

    #[error("Application for vacancy {vacancy_id} from user {user_id} already exists!")]
    DuplicateApplication {
        vacancy_id: VacancyId,
        user_id: UserId,
    },

    #[error("Student {user_id} can't change application with id {application_id}!")]
    Forbidden {
        application_id: ApplicationId,
        user_id: UserId,
    },

    #[error("Application with id {application_id} is already viewed!")]
    AlreadyViewed { application_id: ApplicationId },

    #[error("Page must be >= 1 and page_size must be between 1 and 500")]
    IncorrectPagination { page: i64, page_size: i64 },
}

impl DomainError {
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::VacancyNotFound { .. } => "VacancyNotFound",
            DomainError::EmployerNotFound { .. } => "EmployerNotFound",
            DomainError::ApplicationNotFound { .. } => "ApplicationNotFound",
            DomainError::UserApplicationForVacancyNotFound { .. } => {
                "UserApplicationForVacancyNotFound"
            }
            DomainError::DuplicateApplication { .. } => "DuplicateApplication",
            DomainError::Forbidden { .. } => "Forbidden",
            DomainError::AlreadyViewed { .. } => "AlreadyViewed",
            DomainError::IncorrectPagination { .. } => "IncorrectPagination",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            DomainError::VacancyNotFound { .. }
            | DomainError::EmployerNotFound { .. }
            | DomainError::ApplicationNotFound { .. }
            | DomainError::UserApplicationForVacancyNotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::DuplicateApplication { .. }
            | DomainError::AlreadyViewed { .. }
            | DomainError::IncorrectPagination { .. } => StatusCode::BAD_REQUEST,
            DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
        }
    }

    pub fn title(&self, language: Language) -> &'static str {
        let (en, ru, fr) = match self {
            DomainError::VacancyNotFound { .. } => (
                "Vacancy not found",
                "Вакансия не найдена",
                "Offre d'emploi introuvable",
            ),
            DomainError::EmployerNotFound { .. } => (
                "Employer not found",
                "Работодатель не найден",
                "Employeur introuvable",
            ),
            DomainError::ApplicationNotFound { .. }
            | DomainError::UserApplicationForVacancyNotFound { .. } => (
                "Application not found",
                "Отклик не найден",
                "Candidature introuvable",
            ),
            DomainError::DuplicateApplication { .. } => (
                "Application already exists",
                "Отклик уже существует",
                "Candidature déjà existante",
            ),
            DomainError::Forbidden { .. } => ("Access denied", "Доступ запрещён", "Accès refusé"),
            DomainError::AlreadyViewed { .. } => (
                "Application already viewed",
                "Отклик уже просмотрен",
                "Candidature déjà consultée",
            ),
            DomainError::IncorrectPagination { .. } => (
                "Incorrect pagination params",
                "Некорректные параметры пагинации",
                "Paramètres de pagination incorrects",
            ),
        };
        match language {
            Language::Ru => ru,
            Language::Fr => fr,
            Language::En => en,
        }
    }

    pub fn detail(&self, language: Language) -> String {
        match language {
            Language::En => self.to_string(),
            Language::Ru => self.detail_ru(),
            Language::Fr => self.detail_fr(),
        }
    }

    fn detail_ru(&self) -> String {
        match self {
            DomainError::VacancyNotFound { vacancy_id } => {
                format!("Вакансии с id {} не существует!", vacancy_id)
            }
            DomainError::EmployerNotFound { employer_id } => {
                format!("Работодателя с id {} не существует!", employer_id)
            }
            DomainError::ApplicationNotFound { application_id } => {
                format!("Отклик с id {} не найден!", application_id)
            }
            DomainError::UserApplicationForVacancyNotFound { vacancy_id, user_id } => format!(
                "Отклика пользователя {} на вакансию {} не существует!",
                user_id, vacancy_id
            ),
            DomainError::DuplicateApplication { vacancy_id, user_id } => format!(
                "Отклик пользователя {} на вакансию {} уже существует!",
                user_id, vacancy_id
            ),
            DomainError::Forbidden {
                application_id,
                user_id,
            } => format!(
                "Студент {} не может изменить отклик с id {}!",
                user_id, application_id
            ),
            DomainError::AlreadyViewed { application_id } => {
                format!("Отклик с id {} уже просмотрен!", application_id)
            }
            DomainError::IncorrectPagination { .. } => {
                "Номер страницы должен быть >= 1, а размер страницы от 1 до 500".to_string()
            }
        }
    }

    fn detail_fr(&self) -> String {
        match self {
            DomainError::VacancyNotFound { vacancy_id } => {
                format!("Aucune offre d'emploi avec l'identifiant {} !", vacancy_id)
            }
            DomainError::EmployerNotFound { employer_id } => {
                format!("Aucun employeur avec l'identifiant {} !", employer_id)
            }
            DomainError::ApplicationNotFound { application_id } => {
                format!("Candidature avec l'identifiant {} introuvable !", application_id)
            }
            DomainError::UserApplicationForVacancyNotFound { vacancy_id, user_id } => format!(
                "Aucune candidature de l'utilisateur {} pour l'offre {} !",
                user_id, vacancy_id
            ),
            DomainError::DuplicateApplication { vacancy_id, user_id } => format!(
                "La candidature de l'utilisateur {} pour l'offre {} existe déjà !",
                user_id, vacancy_id
            ),
            DomainError::Forbidden {
                application_id,
                user_id,
            } => format!(
                "L'étudiant {} ne peut pas modifier la candidature {} !",
                user_id, application_id
            ),
            DomainError::AlreadyViewed { application_id } => {
                format!("La candidature {} a déjà été consultée !", application_id)
            }
            DomainError::IncorrectPagination { .. } => {
                "La page doit être >= 1 et la taille de page comprise entre 1 et 500".to_string()
            }
        }
    }

    /// Identifiers carried by the error, exposed next to the problem fields.
    pub fn extensions(&self) -> Map<String, JsonValue> {
        let value = match self {
            DomainError::VacancyNotFound { vacancy_id } => json!({ "vacancy_id": vacancy_id }),
            DomainError::EmployerNotFound { employer_id } => {
                json!({ "employer_id": employer_id })
            }
            DomainError::ApplicationNotFound { application_id }
            | DomainError::AlreadyViewed { application_id } => {
                json!({ "application_id": application_id })
            }
            DomainError::UserApplicationForVacancyNotFound { vacancy_id, user_id }
            | DomainError::DuplicateApplication { vacancy_id, user_id } => {
                json!({ "vacancy_id": vacancy_id, "user_id": user_id })
            }
            DomainError::Forbidden {
                application_id,
                user_id,
            } => json!({ "application_id": application_id, "user_id": user_id }),
            DomainError::IncorrectPagination { page, page_size } => {
                json!({ "page": page, "page_size": page_size })
            }
        };
        match value {
            JsonValue::Object(map) => map,
            _ => Map::new(),
        }
    }
}
