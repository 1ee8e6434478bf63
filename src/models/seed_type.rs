use serde::{Deserialize, Serialize};

/// Entidad de catálogo, solo lectura desde el cliente
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SeedType {
    pub id: u64,
    pub name: String,
}
