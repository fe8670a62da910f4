pub mod application_dto;
pub mod employer_dto;
pub mod pagination;
pub mod vacancy_dto;
