//! Domain layer for HR voice guidance
//!
//! Contains the guidance vocabulary shared by every layer: application
//! modules, device classes, voices, utterance settings and the authored
//! guidance content. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
