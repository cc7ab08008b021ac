//! Endpoint paths consumed by the client, relative to the configured base
//! URL. The outgoing-stock controller is mounted without the `/api` prefix
//! on the server; that asymmetry is preserved here.

pub const AUTH_LOGIN: &str = "/api/Auth/login";
pub const AUTH_LOGOUT: &str = "/api/Auth/logout";

pub const ITEMS: &str = "/api/Barang";
pub const ITEMS_BULK: &str = "/api/Barang/bulk";

pub fn item(id: i64) -> String {
    format!("{}/{}", ITEMS, id)
}

pub const SUPPLIERS: &str = "/api/Supplier";
pub const SUPPLIERS_BULK: &str = "/api/Supplier/bulk";

pub fn supplier(id: i64) -> String {
    format!("{}/{}", SUPPLIERS, id)
}

pub const INCOMING_STOCK: &str = "/api/BarangMasuk";
pub const INCOMING_STOCK_BULK: &str = "/api/BarangMasuk/bulk";

pub fn incoming_stock(id: i64) -> String {
    format!("{}/{}", INCOMING_STOCK, id)
}

pub const REQUESTS: &str = "/api/PermintaanBarang";

pub fn requests_by_status(status: i32) -> String {
    format!("{}?status={}", REQUESTS, status)
}

pub fn request_status(id: i64) -> String {
    format!("{}/{}/status", REQUESTS, id)
}

pub const OUTGOING_STOCK: &str = "/BarangKeluar";

pub fn outgoing_stock(id: i64) -> String {
    format!("{}/{}", OUTGOING_STOCK, id)
}

pub fn outgoing_stock_by_request(request_id: i64) -> String {
    format!("{}/by-permintaan/{}", OUTGOING_STOCK, request_id)
}

pub fn outgoing_stock_by_item(item_id: i64) -> String {
    format!("{}/by-barang/{}", OUTGOING_STOCK, item_id)
}

pub const PROCUREMENT: &str = "/api/Pengadaan";
pub const PROCUREMENT_BULK: &str = "/api/Pengadaan/bulk";

pub fn procurement(id: i64) -> String {
    format!("{}/{}", PROCUREMENT, id)
}

pub const PAYMENTS: &str = "/api/Payment";

pub fn payment(id: i64) -> String {
    format!("{}/{}", PAYMENTS, id)
}

pub fn payment_status(id: i64) -> String {
    format!("{}/{}/status", PAYMENTS, id)
}

pub fn payment_upload_proof(id: i64) -> String {
    format!("{}/{}/upload-bukti", PAYMENTS, id)
}

pub const DIVISIONS: &str = "/api/Divisi";

pub fn division(id: i64) -> String {
    format!("{}/{}", DIVISIONS, id)
}

pub const DIVISION_USERS: &str = "/api/UserDivisi";

pub fn division_user(id: i64) -> String {
    format!("{}/{}", DIVISION_USERS, id)
}

pub const ADMIN_DASHBOARD: &str = "/api/AdminDashboard";
