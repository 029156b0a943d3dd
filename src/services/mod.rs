//! Servicios de la aplicación
//!
//! Este módulo contiene la lógica de negocio: reglas de estado temporal,
//! consistencia entre entidades y métricas derivadas.

pub mod assignment_service;
pub mod dashboard_service;
pub mod insurance_service;
pub mod maintenance_service;
pub mod metrics;
pub mod recompute;
pub mod record_service;
pub mod refresh_service;
pub mod status_rules;
pub mod trip_service;

pub use assignment_service::{Assignment, AssignmentService, Release};
pub use dashboard_service::DashboardService;
pub use insurance_service::InsuranceService;
pub use maintenance_service::{MaintenanceCompletion, MaintenanceOutcome, MaintenanceService};
pub use recompute::{recompute_status, Recompute};
pub use record_service::RecordService;
pub use refresh_service::{RefreshReport, RefreshService, SweepFailure};
pub use trip_service::{TripCompletion, TripOutcome, TripService};
