use super::ids::EmployerId;
use super::localized::LocalizedString;

#[derive(Debug, Clone, PartialEq)]
pub struct Employer {
    pub id: EmployerId,
    pub name: LocalizedString,
    pub description: LocalizedString<Option<String>>,
    pub avatar_url: Option<String>,
}
