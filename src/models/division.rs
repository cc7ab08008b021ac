use serde::{Deserialize, Serialize};

/// An organizational division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub id: i64,
    #[serde(rename = "nama")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewDivision {
    #[serde(rename = "nama")]
    pub name: String,
}

/// A division-side account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionUser {
    pub id: i64,
    pub username: String,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "namaDivisi", default)]
    pub division_name: String,
}

/// Create payload; the password is write-only and never echoed back.
#[derive(Debug, Clone, Serialize)]
pub struct NewDivisionUser {
    pub username: String,
    pub password: String,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "namaDivisi")]
    pub division_name: String,
}

/// Update payload; omitting the password keeps the current one.
#[derive(Debug, Clone, Serialize)]
pub struct DivisionUserUpdate {
    pub username: String,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "namaDivisi")]
    pub division_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
