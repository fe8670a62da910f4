pub mod application_gateway;
pub mod employer_gateway;
pub mod pool;
pub mod session;
pub mod vacancy_gateway;

pub use application_gateway::PgApplicationGateway;
pub use employer_gateway::PgEmployerGateway;
pub use session::{PgSession, PgTransactionManager};
pub use vacancy_gateway::PgVacancyGateway;
