use serde::{Deserialize, Serialize};

/// Configuración de la aplicación, resuelta en tiempo de compilación.
///
/// Los valores vienen de variables de entorno (cargadas desde `.env` por
/// build.rs). El backend y las credenciales de Cloudinary son entradas
/// opacas: el cliente no las valida, solo las usa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
    pub cloudinary_cloud_name: String,
    pub cloudinary_upload_preset: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: "http://localhost:8080/api".to_string(),
            api_url_production: "https://api.gestorverde.cl/api".to_string(),
            environment: "development".to_string(),
            cloudinary_cloud_name: String::new(),
            cloudinary_upload_preset: String::new(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_url_development: option_env!("API_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:8080/api")
                .to_string(),
            api_url_production: option_env!("API_URL_PRODUCTION")
                .unwrap_or("https://api.gestorverde.cl/api")
                .to_string(),
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
            cloudinary_cloud_name: option_env!("CLOUDINARY_CLOUD_NAME")
                .unwrap_or("")
                .to_string(),
            cloudinary_upload_preset: option_env!("CLOUDINARY_UPLOAD_PRESET")
                .unwrap_or("")
                .to_string(),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn api_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_url_production,
            _ => &self.api_url_development,
        }
    }

    /// Endpoint de subida de imágenes de Cloudinary
    pub fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloudinary_cloud_name
        )
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_sigue_al_entorno() {
        let mut config = AppConfig::default();
        assert_eq!(config.api_url(), "http://localhost:8080/api");

        config.environment = "production".to_string();
        assert_eq!(config.api_url(), "https://api.gestorverde.cl/api");
    }

    #[test]
    fn upload_url_incluye_el_cloud_name() {
        let config = AppConfig {
            cloudinary_cloud_name: "gestorverde".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(
            config.upload_url(),
            "https://api.cloudinary.com/v1_1/gestorverde/image/upload"
        );
    }
}
