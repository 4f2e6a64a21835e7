use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a [`Hospital`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HospitalId(u64);

impl HospitalId {
    /// Marker for a record the server has not assigned an id to yet. Only ever sent in create
    /// requests.
    pub const UNASSIGNED: Self = Self(0);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_assigned(self) -> bool {
        self != Self::UNASSIGNED
    }
}

/// A hospital as exchanged with the API.
///
/// The resource speaks Spanish on the wire (`nombre`, `direccion`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: HospitalId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
}

impl Hospital {
    pub fn new(id: u64, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: HospitalId::new(id),
            name: name.into(),
            address: address.into(),
        }
    }
}
