//! Operaciones administrativas y dashboards

use validator::Validate;

use crate::dto::dashboard_dto::{CostQuery, ExpirationQuery};
use crate::dto::ApiResponse;
use crate::models::analytics::{CostSummary, ExpirationSummary};
use crate::models::EntityKind;
use crate::services::{DashboardService, RecordService, RefreshReport, RefreshService};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub struct AdminController {
    records: RecordService,
    default_window_days: i64,
}

impl AdminController {
    pub fn new(state: &AppState) -> Self {
        Self {
            records: state.records(),
            default_window_days: state.config.alert_window_days,
        }
    }

    /// `entity` acepta `documents`, `document`, `insurance`, `policies`...
    pub async fn refresh(&self, entity: &str) -> AppResult<ApiResponse<RefreshReport>> {
        let kind: EntityKind = entity.parse().map_err(AppError::BadRequest)?;
        let report = RefreshService::new(self.records.clone()).refresh_all_statuses(kind).await?;

        let message = if report.is_partial_failure() {
            format!(
                "{} registros procesados, {} con error",
                report.attempted,
                report.failed.len()
            )
        } else {
            format!("{} registros procesados", report.attempted)
        };
        Ok(ApiResponse::success_with_message(report, message))
    }

    pub async fn expirations(&self, query: ExpirationQuery) -> AppResult<ExpirationSummary> {
        query.validate()?;
        DashboardService::new(self.records.clone())
            .expiration_summary(query.window_days.unwrap_or(self.default_window_days))
            .await
    }

    pub async fn costs(&self, query: CostQuery) -> AppResult<CostSummary> {
        DashboardService::new(self.records.clone())
            .cost_summary(query.range(), query.vehicle_id)
            .await
    }
}
