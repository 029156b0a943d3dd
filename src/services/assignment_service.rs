//! Asignación de conductores a vehículos
//!
//! Único punto que modifica el vínculo vehículo↔conductor. Cada operación
//! resuelve primero todas las filas afectadas, libera los vínculos
//! obsoletos y confirma todas las escrituras en un solo lote, en este
//! orden: vehículo, conductor, vehículo anterior, conductor anterior.

use futures::try_join;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::record_service::RecordService;
use crate::models::{Driver, Vehicle, VehicleStatus};
use crate::repositories::{self, WriteBatch};
use crate::utils::errors::AppResult;

/// Resultado de una asignación
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    pub vehicle: Vehicle,
    pub driver: Driver,
    /// Conductor que ocupaba el vehículo y fue liberado
    pub released_driver: Option<Driver>,
    /// Vehículo que ocupaba el conductor y fue liberado
    pub released_vehicle: Option<Vehicle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Release {
    pub vehicle: Vehicle,
    pub driver: Option<Driver>,
}

pub struct AssignmentService {
    records: RecordService,
}

impl AssignmentService {
    pub fn new(records: RecordService) -> Self {
        Self { records }
    }

    pub async fn assign_driver_to_vehicle(&self, vehicle_id: Uuid, driver_id: Uuid) -> AppResult<Assignment> {
        let (mut vehicle, mut driver) = try_join!(
            self.records.get::<Vehicle>(vehicle_id),
            self.records.get::<Driver>(driver_id),
        )?;

        let mut released_driver = match vehicle.assigned_driver_id {
            Some(previous) if previous != driver_id => self.resolve_stale::<Driver>(previous).await?,
            _ => None,
        };
        let mut released_vehicle = match driver.assigned_vehicle_id {
            Some(previous) if previous != vehicle_id => self.resolve_stale::<Vehicle>(previous).await?,
            _ => None,
        };

        vehicle.assigned_driver_id = Some(driver_id);
        vehicle.status = VehicleStatus::InService;
        driver.assigned_vehicle_id = Some(vehicle_id);

        // Solo se limpia el lado que aún apunta a este vínculo
        if let Some(old_driver) = released_driver.as_mut() {
            if old_driver.assigned_vehicle_id == Some(vehicle_id) {
                old_driver.assigned_vehicle_id = None;
            }
        }
        if let Some(old_vehicle) = released_vehicle.as_mut() {
            if old_vehicle.assigned_driver_id == Some(driver_id) {
                old_vehicle.release_driver();
            }
        }

        let now = self.records.now();
        let mut batch = WriteBatch::new();
        self.records.stage(&mut batch, &mut vehicle, now)?;
        self.records.stage(&mut batch, &mut driver, now)?;
        if let Some(old_vehicle) = released_vehicle.as_mut() {
            self.records.stage(&mut batch, old_vehicle, now)?;
        }
        if let Some(old_driver) = released_driver.as_mut() {
            self.records.stage(&mut batch, old_driver, now)?;
        }
        self.records.commit(batch).await?;

        info!(
            "🚗 Conductor {} asignado al vehículo {} ({})",
            driver_id, vehicle_id, vehicle.license_plate
        );

        Ok(Assignment {
            vehicle,
            driver,
            released_driver,
            released_vehicle,
        })
    }

    /// Libera al conductor asignado a un vehículo, si lo hay
    pub async fn release_driver(&self, vehicle_id: Uuid) -> AppResult<Release> {
        let mut vehicle = self.records.get::<Vehicle>(vehicle_id).await?;
        let Some(driver_id) = vehicle.assigned_driver_id else {
            return Ok(Release { vehicle, driver: None });
        };

        let mut driver = self.resolve_stale::<Driver>(driver_id).await?;
        vehicle.release_driver();
        if let Some(d) = driver.as_mut() {
            if d.assigned_vehicle_id == Some(vehicle_id) {
                d.assigned_vehicle_id = None;
            }
        }

        let now = self.records.now();
        let mut batch = WriteBatch::new();
        self.records.stage(&mut batch, &mut vehicle, now)?;
        if let Some(d) = driver.as_mut() {
            self.records.stage(&mut batch, d, now)?;
        }
        self.records.commit(batch).await?;

        info!("🔓 Vehículo {} liberado de su conductor {}", vehicle_id, driver_id);
        Ok(Release { vehicle, driver })
    }

    /// Elimina un vehículo, liberando antes a su conductor
    pub async fn delete_vehicle(&self, vehicle_id: Uuid) -> AppResult<()> {
        let vehicle = self.records.get::<Vehicle>(vehicle_id).await?;
        let mut batch = WriteBatch::new();

        if let Some(driver_id) = vehicle.assigned_driver_id {
            if let Some(mut driver) = self.resolve_stale::<Driver>(driver_id).await? {
                if driver.assigned_vehicle_id == Some(vehicle_id) {
                    driver.assigned_vehicle_id = None;
                    self.records.stage(&mut batch, &mut driver, self.records.now())?;
                }
            }
        }
        batch.push(repositories::remove::<Vehicle>(vehicle_id));
        self.records.commit(batch).await?;

        info!("🗑️ Vehículo {} eliminado", vehicle_id);
        Ok(())
    }

    /// Elimina un conductor, liberando antes su vehículo
    pub async fn delete_driver(&self, driver_id: Uuid) -> AppResult<()> {
        let driver = self.records.get::<Driver>(driver_id).await?;
        let mut batch = WriteBatch::new();

        if let Some(vehicle_id) = driver.assigned_vehicle_id {
            if let Some(mut vehicle) = self.resolve_stale::<Vehicle>(vehicle_id).await? {
                if vehicle.assigned_driver_id == Some(driver_id) {
                    vehicle.release_driver();
                    self.records.stage(&mut batch, &mut vehicle, self.records.now())?;
                }
            }
        }
        batch.push(repositories::remove::<Driver>(driver_id));
        self.records.commit(batch).await?;

        info!("🗑️ Conductor {} eliminado", driver_id);
        Ok(())
    }

    /// Un vínculo antiguo que ya no resuelve se ignora: no es el objetivo
    /// de la operación y no debe bloquearla.
    async fn resolve_stale<T: crate::models::Record>(&self, id: Uuid) -> AppResult<Option<T>> {
        let found = self.records.find_by_id::<T>(id).await?;
        if found.is_none() {
            warn!("⚠️ Referencia obsoleta a {} {} ignorada", T::KIND, id);
        }
        Ok(found)
    }
}
