use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One compensation observation as stored in the `salary_history` table.
///
/// `id` and `created_at` are assigned by the store on creation; entries are
/// immutable once created. The band edges `range_min`/`range_max` may be
/// absent, but the midpoint is always present. The model does not enforce
/// `range_min <= range_mid <= range_max`; bands may be asymmetric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryEntry {
    pub id: Uuid,
    pub role: String,
    pub year: i32,
    pub salary: Decimal,
    pub range_min: Option<Decimal>,
    pub range_mid: Decimal,
    pub range_max: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// A validated submission, ready to be inserted into the store.
///
/// Identical to `SalaryEntry` minus the store-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPayload {
    pub role: String,
    pub year: i32,
    pub salary: Decimal,
    pub range_min: Option<Decimal>,
    pub range_mid: Decimal,
    pub range_max: Option<Decimal>,
}
