use serde::{Deserialize, Serialize};

/// Учётная запись пользователя админ-панели
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// true для администраторов службы охраны труда
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}
