use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    pub vacation_days_left: u32,
}

impl Employee {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Only admins and moderators may process vacation requests.
    pub fn can_approve_vacations(&self) -> bool {
        self.roles.iter().any(|role| role.can_approve())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Moderator,
    User,
}

impl Role {
    pub fn can_approve(self) -> bool {
        matches!(self, Role::Admin | Role::Moderator)
    }
}
