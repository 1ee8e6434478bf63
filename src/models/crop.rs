use serde::{Deserialize, Serialize};

use crate::models::seed_type::SeedType;
use crate::models::terrain::ImageSource;

/// Cultivo plantado en un terreno
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: u64,
    pub seed_type: SeedType,
    pub area: String,
    pub photo: String,
    pub harvest_date: String,
    pub for_sale: bool,
}

/// Payload de creación/actualización de un cultivo.
///
/// La pertenencia viaja en `terrainId`: el cultivo hereda el dueño del
/// terreno y no lleva identidad propia.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CropRequest {
    pub terrain_id: u64,
    pub seed_type_id: u64,
    pub area: String,
    pub photo: String,
    pub harvest_date: String,
    pub for_sale: bool,
}

/// Estado local del formulario de cultivo
#[derive(Clone, PartialEq, Debug)]
pub struct CropForm {
    pub seed_type_id: String,
    pub area: String,
    pub photo: Option<ImageSource>,
    pub harvest_date: String,
    pub for_sale: bool,
}

impl Default for CropForm {
    fn default() -> Self {
        Self {
            seed_type_id: String::new(),
            area: "1".to_string(),
            photo: None,
            harvest_date: String::new(),
            for_sale: true,
        }
    }
}

impl CropForm {
    /// Precarga el formulario con un cultivo existente (modo edición)
    pub fn from_crop(crop: &Crop) -> Self {
        Self {
            seed_type_id: crop.seed_type.id.to_string(),
            area: crop.area.clone(),
            photo: Some(ImageSource::Url(crop.photo.clone())),
            harvest_date: crop.harvest_date.clone(),
            for_sale: crop.for_sale,
        }
    }
}
