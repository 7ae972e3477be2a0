/// Error taxonomy for front-desk operations.
///
/// Every variant is recoverable: the console prints the message and
/// returns to the menu.

use crate::models::{PatientId, SlotKey};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HospitalError {
    #[error("No patients registered")]
    EmptyRegistry,

    #[error("Patient {0} not found")]
    PatientNotFound(PatientId),

    #[error("No doctor covers specialization '{0}'")]
    NoMatchingSpecialization(String),

    #[error("Slot {0} is not available")]
    SlotUnavailable(SlotKey),

    #[error("No emergencies in queue")]
    QueueEmpty,

    #[error("Invalid input: {0}")]
    InputError(String),
}
