use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use super::ids::{EmployerId, VacancyId};
use super::localized::LocalizedString;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WorkFormat {
    Remote,
    Onsite,
    Hybrid,
}

impl WorkFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkFormat::Remote => "remote",
            WorkFormat::Onsite => "onsite",
            WorkFormat::Hybrid => "hybrid",
        }
    }
}

impl FromStr for WorkFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remote" => Ok(WorkFormat::Remote),
            "onsite" => Ok(WorkFormat::Onsite),
            "hybrid" => Ok(WorkFormat::Hybrid),
            other => Err(Error::Internal(format!("Unknown work format: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Internship,
    Temporary,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Internship => "internship",
            EmploymentType::Temporary => "temporary",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-time" => Ok(EmploymentType::FullTime),
            "part-time" => Ok(EmploymentType::PartTime),
            "internship" => Ok(EmploymentType::Internship),
            "temporary" => Ok(EmploymentType::Temporary),
            other => Err(Error::Internal(format!("Unknown employment type: {}", other))),
        }
    }
}

/// Vacancies are created by the back office; the API only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Vacancy {
    pub id: VacancyId,
    pub title: LocalizedString,
    pub description: LocalizedString<Option<String>>,
    pub location: LocalizedString,
    pub salary_from: Option<i32>,
    pub salary_to: Option<i32>,
    pub key_skills: Vec<String>,
    pub work_format: WorkFormat,
    pub employment_type: EmploymentType,
    pub employer_id: EmployerId,
}

/// Splits the stored comma separated skill list, dropping blank entries.
pub fn parse_key_skills(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}
