//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the record identifiers that flow through the
//! tariff engine. These prevent accidental identifier confusion — you
//! cannot pass a `FineId` where a `VignetteId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a registered vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub Uuid);

/// Unique identifier for an issued traffic fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FineId(pub Uuid);

/// Unique identifier for a purchased vignette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VignetteId(pub Uuid);

impl VehicleId {
    /// Generate a new random vehicle identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FineId {
    /// Generate a new random fine identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl VignetteId {
    /// Generate a new random vignette identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for VehicleId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for FineId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for VignetteId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vehicle:{}", self.0)
    }
}

impl std::fmt::Display for FineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fine:{}", self.0)
    }
}

impl std::fmt::Display for VignetteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vignette:{}", self.0)
    }
}
