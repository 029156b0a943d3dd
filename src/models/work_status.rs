//! Máquina de estados de trabajos y viajes
//!
//! Mantenimientos y viajes comparten el mismo ciclo de vida:
//!
//! ```text
//! Planned ──▶ InProgress ──▶ Completed
//!    │            │
//!    ├────────────┴────────▶ Cancelled
//!    └──────────────────────▶ Completed
//! ```
//!
//! `Completed` y `Cancelled` son terminales. Volver a guardar el mismo
//! estado no es una transición y siempre se acepta.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

/// Tabla de transiciones permitidas (origen, destino)
const TRANSITIONS: &[(WorkStatus, WorkStatus)] = &[
    (WorkStatus::Planned, WorkStatus::InProgress),
    (WorkStatus::Planned, WorkStatus::Completed),
    (WorkStatus::Planned, WorkStatus::Cancelled),
    (WorkStatus::InProgress, WorkStatus::Completed),
    (WorkStatus::InProgress, WorkStatus::Cancelled),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid status transition: {from} -> {to}")]
pub struct TransitionError {
    pub from: WorkStatus,
    pub to: WorkStatus,
}

impl WorkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::Planned => "planned",
            WorkStatus::InProgress => "in_progress",
            WorkStatus::Completed => "completed",
            WorkStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkStatus::Completed | WorkStatus::Cancelled)
    }

    pub fn can_transition_to(&self, next: WorkStatus) -> bool {
        *self == next || TRANSITIONS.contains(&(*self, next))
    }

    /// Valida la transición y devuelve el nuevo estado
    pub fn transition_to(self, next: WorkStatus) -> Result<WorkStatus, TransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(TransitionError { from: self, to: next })
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
