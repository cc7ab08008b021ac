use serde::{Deserialize, Serialize};

/// A supplier record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    #[serde(rename = "namaSupplier")]
    pub name: String,
    #[serde(rename = "alamat", default)]
    pub address: String,
    #[serde(rename = "telepon", default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// Create/update payload for a supplier.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewSupplier {
    #[serde(rename = "namaSupplier")]
    pub name: String,
    #[serde(rename = "alamat")]
    pub address: String,
    #[serde(rename = "telepon")]
    pub phone: String,
    pub email: String,
}
