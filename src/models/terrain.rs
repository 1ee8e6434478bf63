use serde::{Deserialize, Serialize};

use crate::models::crop::Crop;

/// Tipos de suelo aceptados por el backend
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum SoilType {
    Arenoso,
    Mixto,
    #[serde(rename = "Ácido")]
    Acido,
    Calizo,
    Supresivo,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Arenoso,
        SoilType::Mixto,
        SoilType::Acido,
        SoilType::Calizo,
        SoilType::Supresivo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Arenoso => "Arenoso",
            SoilType::Mixto => "Mixto",
            SoilType::Acido => "Ácido",
            SoilType::Calizo => "Calizo",
            SoilType::Supresivo => "Supresivo",
        }
    }

    pub fn parse(value: &str) -> Option<SoilType> {
        SoilType::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terreno tal como lo entrega el backend.
///
/// `area` viaja como string numérico (en hectáreas); se valida al parsear
/// en el límite del formulario, no aquí.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Terrain {
    pub id: u64,
    pub name: String,
    pub area: String,
    pub soil_type: SoilType,
    pub photo: String,
    pub email: String,
    pub full_name: String,
    pub for_sale: bool,
    pub location: String,
    #[serde(default)]
    pub harvest_date: Option<String>,
    #[serde(default)]
    pub crops: Vec<Crop>,
}

/// Página de terrenos del backend
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerrainPage {
    pub content: Vec<Terrain>,
    pub page_number: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
}

/// Payload de creación/actualización de un terreno.
///
/// El email y el nombre completo salen del token decodificado, nunca del
/// formulario; la foto ya viene resuelta a una URL permanente.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerrainRequest {
    pub name: String,
    pub area: String,
    pub soil_type: SoilType,
    pub photo: String,
    pub email: String,
    pub full_name: String,
    pub for_sale: bool,
    pub location: String,
    pub harvest_date: String,
}

/// Imagen adjunta a un formulario: archivo por subir o URL ya resuelta
#[derive(Clone, PartialEq, Debug)]
pub enum ImageSource {
    File(web_sys::File),
    Url(String),
}

/// Estado local del formulario de terreno
#[derive(Clone, PartialEq, Debug)]
pub struct TerrainForm {
    pub name: String,
    pub area: String,
    pub soil_type: SoilType,
    pub photo: Option<ImageSource>,
    pub harvest_date: String,
    pub for_sale: bool,
    pub location: String,
}

impl Default for TerrainForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            area: "1".to_string(),
            soil_type: SoilType::Mixto,
            photo: None,
            harvest_date: String::new(),
            for_sale: true,
            location: String::new(),
        }
    }
}

impl TerrainForm {
    /// Precarga el formulario con un terreno existente (modo edición)
    pub fn from_terrain(terrain: &Terrain) -> Self {
        Self {
            name: terrain.name.clone(),
            area: terrain.area.clone(),
            soil_type: terrain.soil_type,
            photo: Some(ImageSource::Url(terrain.photo.clone())),
            harvest_date: terrain.harvest_date.clone().unwrap_or_default(),
            for_sale: terrain.for_sale,
            location: terrain.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagina_del_backend_deserializa_completa() {
        let json = r#"{
            "content": [{
                "id": 42,
                "name": "Lote 1",
                "area": "10",
                "soilType": "Mixto",
                "photo": "https://cdn/img.jpg",
                "email": "marcial.diaz@gestorverde.cl",
                "fullName": "Marcial Díaz",
                "forSale": true,
                "location": "Valle",
                "crops": [{
                    "id": 7,
                    "seedType": {"id": 3, "name": "Zanahoria"},
                    "area": "2",
                    "photo": "https://cdn/crop.jpg",
                    "harvestDate": "2024-09-01",
                    "forSale": false
                }]
            }],
            "pageNumber": 0,
            "totalPages": 3,
            "totalElements": 14
        }"#;

        let page: TerrainPage = serde_json::from_str(json).expect("página válida");
        assert_eq!(page.total_pages, 3);
        let terrain = &page.content[0];
        assert_eq!(terrain.id, 42);
        assert_eq!(terrain.soil_type, SoilType::Mixto);
        assert!(terrain.for_sale);
        assert_eq!(terrain.crops.len(), 1);
        assert_eq!(terrain.crops[0].seed_type.name, "Zanahoria");
        assert!(!terrain.crops[0].for_sale);
    }

    #[test]
    fn soil_type_acido_conserva_la_tilde_en_el_wire() {
        let json = serde_json::to_string(&SoilType::Acido).unwrap();
        assert_eq!(json, "\"Ácido\"");
        assert_eq!(SoilType::parse("Ácido"), Some(SoilType::Acido));
        assert_eq!(SoilType::parse("Pedregoso"), None);
    }

    #[test]
    fn el_request_serializa_en_camel_case() {
        let request = TerrainRequest {
            name: "Lote 1".to_string(),
            area: "10".to_string(),
            soil_type: SoilType::Mixto,
            photo: "https://cdn/img.jpg".to_string(),
            email: "a@b.com".to_string(),
            full_name: "Ana Pérez".to_string(),
            for_sale: false,
            location: "Valle".to_string(),
            harvest_date: "2024-09-01".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["soilType"], "Mixto");
        assert_eq!(value["fullName"], "Ana Pérez");
        // forSale es booleano de verdad, nunca el string "false"
        assert_eq!(value["forSale"], serde_json::Value::Bool(false));
        assert_eq!(value["harvestDate"], "2024-09-01");
    }
}
