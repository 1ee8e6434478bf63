use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::{File, FormData};

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::terrain::ImageSource;

/// Cliente del host de imágenes (Cloudinary, preset sin firma).
///
/// Un fallo de subida es fatal para el envío que la contenía: el flujo de
/// formularios nunca manda el create/update si la imagen no quedó resuelta
/// a una URL permanente.
#[derive(Clone, PartialEq)]
pub struct UploadClient {
    url: String,
    upload_preset: String,
}

impl Default for UploadClient {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadClient {
    pub fn new() -> Self {
        Self {
            url: CONFIG.upload_url(),
            upload_preset: CONFIG.cloudinary_upload_preset.clone(),
        }
    }

    /// Resuelve la imagen del formulario a una URL permanente:
    /// los archivos se suben, las URLs ya resueltas pasan tal cual.
    pub async fn resolve_image(&self, source: &ImageSource) -> Result<String, ApiError> {
        match source {
            ImageSource::Url(url) => Ok(url.clone()),
            ImageSource::File(file) => self.upload_file(file).await,
        }
    }

    async fn upload_file(&self, file: &File) -> Result<String, ApiError> {
        log::info!("📤 Subiendo imagen: {}", file.name());

        let form = FormData::new()
            .map_err(|e| ApiError::Upload(format!("No se pudo construir el formulario: {:?}", e)))?;
        form.append_with_blob("file", file)
            .map_err(|e| ApiError::Upload(format!("No se pudo adjuntar el archivo: {:?}", e)))?;
        form.append_with_str("upload_preset", &self.upload_preset)
            .map_err(|e| ApiError::Upload(format!("No se pudo adjuntar el preset: {:?}", e)))?;

        let response = Request::post(&self.url)
            .body(form)
            .map_err(|e| ApiError::Upload(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Upload(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Upload(format!("HTTP {}", response.status())));
        }

        let body = response
            .json::<UploadResponse>()
            .await
            .map_err(|e| ApiError::Upload(e.to_string()))?;

        log::info!("✅ Imagen subida: {}", body.secure_url);
        Ok(body.secure_url)
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
}
