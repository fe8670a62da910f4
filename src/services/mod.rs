pub mod apply_for_vacancy;
pub mod gateway;
pub mod get_employer_by_id;
pub mod get_user_application_for_vacancy;
pub mod get_user_applications;
pub mod get_vacancies_by_filters;
pub mod get_vacancy_by_id;
pub mod transaction;
pub mod update_application;

#[cfg(test)]
pub(crate) mod test_support;
