//! Mantenimientos y su efecto sobre el vehículo
//!
//! | entra en      | vehículo                                        |
//! |---------------|-------------------------------------------------|
//! | `in_progress` | `in_maintenance`                                |
//! | `completed`   | `available`, odómetro = `odometer_at_service`   |
//! | `cancelled`   | `available`, solo si venía de `in_progress`     |

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::record_service::RecordService;
use crate::models::{MaintenanceJob, Vehicle, VehicleStatus, WorkStatus};
use crate::repositories::WriteBatch;
use crate::utils::errors::{invalid_state_error, AppResult};

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceOutcome {
    pub job: MaintenanceJob,
    pub vehicle: Option<Vehicle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceCompletion {
    pub job: MaintenanceJob,
    pub vehicle: Vehicle,
}

pub struct MaintenanceService {
    records: RecordService,
}

impl MaintenanceService {
    pub fn new(records: RecordService) -> Self {
        Self { records }
    }

    pub async fn create_job(&self, mut job: MaintenanceJob) -> AppResult<MaintenanceOutcome> {
        let mut vehicle = self.records.get::<Vehicle>(job.vehicle_id).await?;
        let now = self.records.now();
        let changed = apply_transition(&mut job, None, &mut vehicle, now);

        self.commit(job, changed.then_some(vehicle), now).await
    }

    /// Guarda la versión completa de un trabajo existente
    pub async fn update_job(&self, mut job: MaintenanceJob) -> AppResult<MaintenanceOutcome> {
        let previous = self.records.get::<MaintenanceJob>(job.id).await?;
        job.status = previous.status.transition_to(job.status)?;
        job.created_at = previous.created_at;

        let now = self.records.now();
        if job.status == previous.status {
            return self.commit(job, None, now).await;
        }

        let mut vehicle = self.records.get::<Vehicle>(job.vehicle_id).await?;
        let changed = apply_transition(&mut job, Some(previous.status), &mut vehicle, now);
        self.commit(job, changed.then_some(vehicle), now).await
    }

    pub async fn complete_maintenance_job(&self, job_id: Uuid) -> AppResult<MaintenanceCompletion> {
        let mut job = self.records.get::<MaintenanceJob>(job_id).await?;
        if job.status == WorkStatus::Completed {
            return Err(invalid_state_error(
                "Maintenance job",
                &job_id.to_string(),
                "already completed",
            ));
        }
        let previous = job.status;
        job.status = previous.transition_to(WorkStatus::Completed)?;

        let mut vehicle = self.records.get::<Vehicle>(job.vehicle_id).await?;
        let now = self.records.now();
        apply_transition(&mut job, Some(previous), &mut vehicle, now);

        let mut batch = WriteBatch::new();
        self.records.stage(&mut batch, &mut job, now)?;
        self.records.stage(&mut batch, &mut vehicle, now)?;
        self.records.commit(batch).await?;

        info!(
            "🔧 Mantenimiento {} completado → vehículo {} disponible en {} km",
            job_id, vehicle.id, vehicle.odometer
        );
        Ok(MaintenanceCompletion { job, vehicle })
    }

    async fn commit(
        &self,
        mut job: MaintenanceJob,
        mut vehicle: Option<Vehicle>,
        now: DateTime<Utc>,
    ) -> AppResult<MaintenanceOutcome> {
        let mut batch = WriteBatch::new();
        self.records.stage(&mut batch, &mut job, now)?;
        if let Some(v) = vehicle.as_mut() {
            self.records.stage(&mut batch, v, now)?;
        }
        self.records.commit(batch).await?;

        if let Some(v) = vehicle.as_ref() {
            info!("🔧 Mantenimiento {} ({}) → vehículo {} {}", job.id, job.status, v.id, v.status);
        }
        Ok(MaintenanceOutcome { job, vehicle })
    }
}

/// Aplica el efecto de entrar en `job.status` desde `previous` (`None` al
/// crear). Devuelve `true` si el vehículo cambió.
fn apply_transition(
    job: &mut MaintenanceJob,
    previous: Option<WorkStatus>,
    vehicle: &mut Vehicle,
    now: DateTime<Utc>,
) -> bool {
    match job.status {
        WorkStatus::Planned => false,
        WorkStatus::InProgress => {
            vehicle.status = VehicleStatus::InMaintenance;
            true
        }
        WorkStatus::Completed => {
            vehicle.status = VehicleStatus::Available;
            vehicle.odometer = job.odometer_at_service;
            if job.completed_date.is_none() {
                job.completed_date = Some(now);
            }
            true
        }
        WorkStatus::Cancelled => {
            if previous == Some(WorkStatus::InProgress) && vehicle.status == VehicleStatus::InMaintenance {
                vehicle.status = VehicleStatus::Available;
                true
            } else {
                false
            }
        }
    }
}
