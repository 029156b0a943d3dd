use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::analytics::DateRange;

// Query de /api/dashboard/expirations
#[derive(Debug, Deserialize, Validate)]
pub struct ExpirationQuery {
    #[validate(range(min = 0, max = 3650))]
    pub window_days: Option<i64>,
}

// Query de /api/dashboard/costs
#[derive(Debug, Default, Deserialize)]
pub struct CostQuery {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub vehicle_id: Option<Uuid>,
}

impl CostQuery {
    pub fn range(&self) -> DateRange {
        DateRange {
            from: self.from,
            to: self.to,
        }
    }
}

// Query de listados filtrables por vehículo
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilterQuery {
    pub vehicle_id: Option<Uuid>,
}
