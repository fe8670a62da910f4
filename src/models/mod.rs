pub mod application;
pub mod domain_error;
pub mod employer;
pub mod ids;
pub mod language;
pub mod localized;
pub mod vacancy;

pub use application::{Application, ApplicationStatus};
pub use domain_error::DomainError;
pub use employer::Employer;
pub use ids::{ApplicationId, EmployerId, UserId, VacancyId};
pub use language::Language;
pub use localized::LocalizedString;
pub use vacancy::{EmploymentType, Vacancy, WorkFormat};
