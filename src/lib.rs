pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::Config,
    database::{
        PgApplicationGateway, PgEmployerGateway, PgSession, PgTransactionManager,
        PgVacancyGateway,
    },
    services::{
        apply_for_vacancy::ApplyForVacancy, get_employer_by_id::GetEmployerById,
        get_user_application_for_vacancy::GetUserApplicationForVacancy,
        get_user_applications::GetUserApplications,
        get_vacancies_by_filters::GetVacanciesByFilters, get_vacancy_by_id::GetVacancyById,
        update_application::UpdateApplication,
    },
};

pub use routes::router;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

// Every interactor gets a fresh session, so gateways built for one request
// share a single lazily opened transaction.
impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    fn session(&self) -> PgSession {
        PgSession::new(self.pool.clone())
    }

    pub fn get_vacancy_by_id(&self) -> GetVacancyById<PgVacancyGateway> {
        GetVacancyById::new(PgVacancyGateway::new(self.session()))
    }

    pub fn get_vacancies_by_filters(&self) -> GetVacanciesByFilters<PgVacancyGateway> {
        GetVacanciesByFilters::new(PgVacancyGateway::new(self.session()))
    }

    pub fn get_employer_by_id(&self) -> GetEmployerById<PgEmployerGateway> {
        GetEmployerById::new(PgEmployerGateway::new(self.session()))
    }

    pub fn get_user_applications(&self) -> GetUserApplications<PgApplicationGateway> {
        GetUserApplications::new(PgApplicationGateway::new(self.session()))
    }

    pub fn get_user_application_for_vacancy(
        &self,
    ) -> GetUserApplicationForVacancy<PgApplicationGateway> {
        GetUserApplicationForVacancy::new(PgApplicationGateway::new(self.session()))
    }

    pub fn apply_for_vacancy(&self) -> ApplyForVacancy<PgTransactionManager, PgApplicationGateway> {
        let session = self.session();
        ApplyForVacancy::new(
            PgTransactionManager::new(session.clone()),
            PgApplicationGateway::new(session),
        )
    }

    pub fn update_application(
        &self,
    ) -> UpdateApplication<PgTransactionManager, PgApplicationGateway> {
        let session = self.session();
        UpdateApplication::new(
            PgTransactionManager::new(session.clone()),
            PgApplicationGateway::new(session),
        )
    }
}
