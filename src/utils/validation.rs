use chrono::NaiveDate;

use crate::models::crop::CropForm;
use crate::models::terrain::TerrainForm;
use crate::utils::constants::MAX_AREA;

// ============================================================================
// VALIDACIÓN DE FORMULARIOS - Local, por campo, antes de tocar la red
// ============================================================================
// Los errores bloquean el envío: ninguna petición sale con un formulario
// inválido. Los filtros de entrada (digits_only / letters_only) descartan
// caracteres al tipear y el submit re-valida de todas formas.
// ============================================================================

/// Errores por campo del formulario de terreno
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TerrainFormErrors {
    pub name: Option<String>,
    pub area: Option<String>,
    pub photo: Option<String>,
    pub harvest_date: Option<String>,
    pub location: Option<String>,
}

impl TerrainFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.area.is_none()
            && self.photo.is_none()
            && self.harvest_date.is_none()
            && self.location.is_none()
    }
}

/// Errores por campo del formulario de cultivo
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CropFormErrors {
    pub seed_type: Option<String>,
    pub area: Option<String>,
    pub photo: Option<String>,
    pub harvest_date: Option<String>,
}

impl CropFormErrors {
    pub fn is_empty(&self) -> bool {
        self.seed_type.is_none()
            && self.area.is_none()
            && self.photo.is_none()
            && self.harvest_date.is_none()
    }
}

pub fn validate_terrain_form(form: &TerrainForm, today: NaiveDate) -> TerrainFormErrors {
    TerrainFormErrors {
        name: required(&form.name, "Nombre es requerido"),
        area: validate_area(&form.area),
        photo: if form.photo.is_none() {
            Some("La imagen es requerida".to_string())
        } else {
            None
        },
        harvest_date: validate_harvest_date(&form.harvest_date, today),
        location: required(&form.location, "Ubicación es requerido"),
    }
}

pub fn validate_crop_form(form: &CropForm, today: NaiveDate) -> CropFormErrors {
    CropFormErrors {
        seed_type: required(&form.seed_type_id, "El tipo de semilla es obligatorio"),
        area: validate_area(&form.area),
        photo: if form.photo.is_none() {
            Some("La imagen es requerida".to_string())
        } else {
            None
        },
        harvest_date: validate_harvest_date(&form.harvest_date, today),
    }
}

/// Área en hectáreas: entero estrictamente positivo y acotado
pub fn validate_area(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        return Some("Este campo es obligatorio".to_string());
    }
    match input.trim().parse::<u32>() {
        Ok(0) | Err(_) => Some("El valor debe ser un número positivo".to_string()),
        Ok(area) if area > MAX_AREA => {
            Some(format!("El valor debe ser menor o igual a {}", MAX_AREA))
        }
        Ok(_) => None,
    }
}

/// La fecha de cosecha no puede ser un día anterior a la fecha actual
pub fn validate_harvest_date(input: &str, today: NaiveDate) -> Option<String> {
    if input.trim().is_empty() {
        return Some("Este campo es obligatorio".to_string());
    }
    match NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
        Err(_) => Some("La fecha no es válida".to_string()),
        Ok(date) if date < today => Some(
            "La fecha de cosecha no puede ser un día anterior a la fecha actual.".to_string(),
        ),
        Ok(_) => None,
    }
}

/// Formato de email: local@dominio.tld, con tld alfabético de 2+ caracteres
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    local_ok && host_ok && tld_ok
}

/// Filtro de entrada numérica: descarta todo lo que no sea dígito
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Filtro de nombres: solo letras, máximo 14 caracteres
pub fn letters_only(value: &str) -> String {
    value.chars().filter(|c| c.is_alphabetic()).take(14).collect()
}

fn required(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(message.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::terrain::{ImageSource, SoilType};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn valid_terrain_form() -> TerrainForm {
        TerrainForm {
            name: "Lote 1".to_string(),
            area: "10".to_string(),
            soil_type: SoilType::Mixto,
            photo: Some(ImageSource::Url("https://cdn/img.jpg".to_string())),
            harvest_date: "2024-07-01".to_string(),
            for_sale: true,
            location: "Valle".to_string(),
        }
    }

    #[test]
    fn formulario_valido_no_tiene_errores() {
        let errors = validate_terrain_form(&valid_terrain_form(), today());
        assert!(errors.is_empty());
    }

    #[test]
    fn area_cero_se_rechaza() {
        assert!(validate_area("0").is_some());
    }

    #[test]
    fn area_sobre_el_maximo_se_rechaza() {
        assert!(validate_area("51").is_some());
        assert!(validate_area("50").is_none());
        assert!(validate_area("1").is_none());
    }

    #[test]
    fn area_no_numerica_se_rechaza_en_el_submit() {
        // El filtro de entrada ya descarta letras; esto cubre el segundo nivel
        assert!(validate_area("diez").is_some());
        assert!(validate_area("").is_some());
        assert!(validate_area("-3").is_some());
    }

    #[test]
    fn fecha_de_cosecha_pasada_se_rechaza() {
        assert!(validate_harvest_date("2024-06-14", today()).is_some());
        assert!(validate_harvest_date("2024-06-15", today()).is_none());
        assert!(validate_harvest_date("2025-01-01", today()).is_none());
    }

    #[test]
    fn formulario_sin_imagen_bloquea_el_envio() {
        let form = TerrainForm {
            photo: None,
            ..valid_terrain_form()
        };
        let errors = validate_terrain_form(&form, today());
        assert!(errors.photo.is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn cultivo_sin_tipo_de_semilla_se_rechaza() {
        let form = CropForm {
            area: "5".to_string(),
            photo: Some(ImageSource::Url("https://cdn/crop.jpg".to_string())),
            harvest_date: "2024-08-01".to_string(),
            ..CropForm::default()
        };
        let errors = validate_crop_form(&form, today());
        assert_eq!(
            errors.seed_type.as_deref(),
            Some("El tipo de semilla es obligatorio")
        );
        assert!(errors.area.is_none());
    }

    #[test]
    fn emails_validos_e_invalidos() {
        assert!(is_valid_email("marcial.diaz@gestorverde.cl"));
        assert!(is_valid_email("a+b@sub.dominio.com"));
        assert!(!is_valid_email("sin-arroba"));
        assert!(!is_valid_email("@dominio.cl"));
        assert!(!is_valid_email("usuario@dominio"));
        assert!(!is_valid_email("usuario@dominio.c"));
        assert!(!is_valid_email("usuario@dominio.c0m"));
    }

    #[test]
    fn filtros_de_entrada() {
        assert_eq!(digits_only("12a3,4"), "1234");
        assert_eq!(letters_only("María-José 99"), "MaríaJosé");
        assert_eq!(letters_only("abcdefghijklmnopqrst"), "abcdefghijklmn");
    }
}
