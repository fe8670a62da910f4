use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Employer, EmployerId, Language};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployerSummaryView {
    pub id: EmployerId,
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployerDetailView {
    pub id: EmployerId,
    pub name: String,
    pub avatar_url: Option<String>,
    pub description: Option<String>,
}

impl EmployerSummaryView {
    pub fn project(employer: &Employer, language: Language) -> Self {
        Self {
            id: employer.id,
            name: employer.name.resolve(language),
            avatar_url: employer.avatar_url.clone(),
        }
    }
}

impl EmployerDetailView {
    pub fn project(employer: &Employer, language: Language) -> Self {
        Self {
            id: employer.id,
            name: employer.name.resolve(language),
            avatar_url: employer.avatar_url.clone(),
            description: employer.description.resolve(language),
        }
    }
}
