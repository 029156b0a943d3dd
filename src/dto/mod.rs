pub mod common;
pub mod dashboard_dto;
pub mod document_dto;
pub mod driver_dto;
pub mod fuel_dto;
pub mod insurance_dto;
pub mod maintenance_dto;
pub mod trip_dto;
pub mod vehicle_dto;

pub use common::ApiResponse;
