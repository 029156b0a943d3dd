//! Viajes y su efecto sobre el vehículo
//!
//! - Crear un viaje pone el vehículo en servicio.
//! - Completar un viaje con odómetro final deja el vehículo disponible y
//!   actualiza su kilometraje.
//! - Sin odómetro final no se toca el vehículo; el efecto se aplica cuando
//!   llegue el odómetro, por `update_trip` o `complete_trip`.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::record_service::RecordService;
use crate::models::{Trip, Vehicle, VehicleStatus, WorkStatus};
use crate::repositories::WriteBatch;
use crate::utils::errors::{bad_request_error, invalid_state_error, AppResult};

#[derive(Debug, Clone, Serialize)]
pub struct TripOutcome {
    pub trip: Trip,
    /// Vehículo, si el guardado lo modificó
    pub vehicle: Option<Vehicle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TripCompletion {
    pub trip: Trip,
    pub vehicle: Vehicle,
}

pub struct TripService {
    records: RecordService,
}

impl TripService {
    pub fn new(records: RecordService) -> Self {
        Self { records }
    }

    pub async fn create_trip(&self, mut trip: Trip) -> AppResult<TripOutcome> {
        check_odometers(&trip)?;
        let mut vehicle = self.records.get::<Vehicle>(trip.vehicle_id).await?;

        let touches_vehicle = match trip.status {
            WorkStatus::Cancelled => false,
            WorkStatus::Completed => match trip.odometer_end {
                Some(end) => {
                    apply_completion(&mut vehicle, end);
                    true
                }
                None => false,
            },
            WorkStatus::Planned | WorkStatus::InProgress => {
                vehicle.status = VehicleStatus::InService;
                true
            }
        };

        let now = self.records.now();
        if trip.status == WorkStatus::Completed && trip.end_date.is_none() {
            trip.end_date = Some(now);
        }

        let mut batch = WriteBatch::new();
        self.records.stage(&mut batch, &mut trip, now)?;
        if touches_vehicle {
            self.records.stage(&mut batch, &mut vehicle, now)?;
        }
        self.records.commit(batch).await?;

        info!("🛣️ Viaje {} creado para el vehículo {} ({})", trip.id, vehicle.id, trip.status);
        Ok(TripOutcome {
            trip,
            vehicle: touches_vehicle.then_some(vehicle),
        })
    }

    /// Guarda la versión completa de un viaje existente
    pub async fn update_trip(&self, mut trip: Trip) -> AppResult<TripOutcome> {
        let previous = self.records.get::<Trip>(trip.id).await?;
        trip.status = previous.status.transition_to(trip.status)?;
        trip.created_at = previous.created_at;
        check_odometers(&trip)?;

        let completing = trip.status == WorkStatus::Completed && previous.status != WorkStatus::Completed;
        let odometer_arrived = trip.status == WorkStatus::Completed
            && trip.odometer_end.is_some()
            && trip.odometer_end != previous.odometer_end;
        let now = self.records.now();

        let mut vehicle = match (completing || odometer_arrived, trip.odometer_end) {
            (true, Some(end)) => {
                let mut vehicle = self.records.get::<Vehicle>(trip.vehicle_id).await?;
                apply_completion(&mut vehicle, end);
                Some(vehicle)
            }
            _ => None,
        };
        if completing && trip.end_date.is_none() {
            trip.end_date = Some(now);
        }

        let mut batch = WriteBatch::new();
        self.records.stage(&mut batch, &mut trip, now)?;
        if let Some(v) = vehicle.as_mut() {
            self.records.stage(&mut batch, v, now)?;
        }
        self.records.commit(batch).await?;

        Ok(TripOutcome { trip, vehicle })
    }

    pub async fn complete_trip(&self, trip_id: Uuid, end_odometer: i64) -> AppResult<TripCompletion> {
        let mut trip = self.records.get::<Trip>(trip_id).await?;
        // Un viaje completado sin odómetro final todavía puede cerrarse
        if trip.status == WorkStatus::Completed && trip.odometer_end.is_some() {
            return Err(invalid_state_error("Trip", &trip_id.to_string(), "already completed"));
        }
        trip.status = trip.status.transition_to(WorkStatus::Completed)?;
        trip.odometer_end = Some(end_odometer);
        check_odometers(&trip)?;

        let mut vehicle = self.records.get::<Vehicle>(trip.vehicle_id).await?;
        apply_completion(&mut vehicle, end_odometer);

        let now = self.records.now();
        if trip.end_date.is_none() {
            trip.end_date = Some(now);
        }

        let mut batch = WriteBatch::new();
        self.records.stage(&mut batch, &mut trip, now)?;
        self.records.stage(&mut batch, &mut vehicle, now)?;
        self.records.commit(batch).await?;

        info!(
            "🏁 Viaje {} completado: {} km, vehículo {} en {} km",
            trip_id,
            trip.distance.unwrap_or_default(),
            vehicle.id,
            vehicle.odometer
        );
        Ok(TripCompletion { trip, vehicle })
    }
}

fn apply_completion(vehicle: &mut Vehicle, end_odometer: i64) {
    vehicle.status = VehicleStatus::Available;
    vehicle.odometer = end_odometer;
}

fn check_odometers(trip: &Trip) -> AppResult<()> {
    match trip.odometer_end {
        Some(end) if end < trip.odometer_start => Err(bad_request_error(
            "odometer_end cannot be lower than odometer_start",
        )),
        _ => Ok(()),
    }
}
