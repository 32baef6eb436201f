//! Employee model matching the frontend Employee interface.

use serde::{Deserialize, Serialize};

/// Valid shift group numbers.
pub const GROUPS: std::ops::RangeInclusive<u8> = 1..=7;

/// Job role of an employee. Wire values keep the original app's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeRole {
    #[serde(rename = "Auxiliar")]
    Auxiliar,
    #[serde(rename = "Operador")]
    Operador,
    #[serde(rename = "Assistente")]
    Assistente,
    #[serde(rename = "Supervisor")]
    Supervisor,
}

/// Current working situation of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    #[serde(rename = "Trabalhando")]
    Working,
    #[serde(rename = "Férias")]
    Vacation,
    #[serde(rename = "Afastado")]
    Away,
    #[serde(rename = "Aviso Prévio")]
    Notice,
    #[serde(rename = "Licença")]
    Leave,
}

/// Optional contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
}

/// A rostered employee within a sector.
///
/// The registration number is unique within a sector, not globally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub group: u8,
    pub registration: String,
    pub name: String,
    pub role: EmployeeRole,
    pub status: EmployeeStatus,
    /// When the current status was last changed.
    pub status_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
    pub created_at: String,
}

/// Request body for creating a new employee.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub registration: String,
    pub name: String,
    #[serde(default = "default_group")]
    pub group: u8,
    pub role: EmployeeRole,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub contact: Option<ContactInfo>,
}

fn default_group() -> u8 {
    1
}

/// Request body for updating an existing employee.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[serde(default)]
    pub registration: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub group: Option<u8>,
    #[serde(default)]
    pub role: Option<EmployeeRole>,
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
    #[serde(default)]
    pub contact: Option<ContactInfo>,
}

/// Request body for a bulk import, replacing the whole roster of a sector.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEmployeesRequest {
    pub employees: Vec<CreateEmployeeRequest>,
}
