// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP. El token viaja como
// credencial bearer en cada llamada autenticada; el cliente no lo retiene.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::auth::{AuthResponse, BackendErrorBody, SignInData, SignUpData};
use crate::models::crop::CropRequest;
use crate::models::seed_type::SeedType;
use crate::models::terrain::{Terrain, TerrainPage, TerrainRequest};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_url().to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Iniciar sesión
    pub async fn sign_in(&self, data: &SignInData) -> Result<String, ApiError> {
        let url = format!("{}/auth/sign-in", self.base_url);
        log::info!("🔐 Iniciando sesión para: {}", data.email);
        self.post_credentials(&url, data).await
    }

    /// Registrar usuario nuevo
    pub async fn sign_up(&self, data: &SignUpData) -> Result<String, ApiError> {
        let url = format!("{}/auth/sign-up", self.base_url);
        log::info!("📝 Registrando usuario: {}", data.email);
        self.post_credentials(&url, data).await
    }

    async fn post_credentials<T: serde::Serialize>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<String, ApiError> {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(auth_error(response).await);
        }

        let auth = response
            .json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(auth.token)
    }

    /// Listado público de terrenos en venta
    pub async fn fetch_terrains(&self, page: u32, size: u32) -> Result<TerrainPage, ApiError> {
        let url = format!("{}/terrain/all?page={}&size={}", self.base_url, page, size);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        json_body(response).await
    }

    /// Terrenos del usuario autenticado
    pub async fn fetch_my_terrains(
        &self,
        token: &str,
        email: &str,
        page: u32,
        size: u32,
    ) -> Result<TerrainPage, ApiError> {
        let url = format!(
            "{}/terrain/my?email={}&page={}&size={}",
            self.base_url, email, page, size
        );
        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        json_body(response).await
    }

    /// Detalle de un terreno con sus cultivos
    pub async fn fetch_terrain(&self, id: u64) -> Result<Terrain, ApiError> {
        let url = format!("{}/terrain/{}", self.base_url, id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        json_body(response).await
    }

    pub async fn create_terrain(
        &self,
        token: &str,
        request: &TerrainRequest,
    ) -> Result<(), ApiError> {
        let url = format!("{}/terrain/crud/create", self.base_url);
        log::info!("🌱 Creando terreno: {}", request.name);
        self.send_json(Request::post(&url), token, request).await
    }

    pub async fn update_terrain(
        &self,
        token: &str,
        id: u64,
        request: &TerrainRequest,
    ) -> Result<(), ApiError> {
        let url = format!("{}/terrain/crud/update/{}", self.base_url, id);
        log::info!("✏️ Actualizando terreno {}: {}", id, request.name);
        self.send_json(Request::put(&url), token, request).await
    }

    pub async fn delete_terrain(&self, token: &str, id: u64) -> Result<(), ApiError> {
        let url = format!("{}/terrain/crud/delete/{}", self.base_url, id);
        log::info!("🗑️ Eliminando terreno: {}", id);
        let response = Request::delete(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        expect_ok(response).await
    }

    /// Catálogo de tipos de semilla
    pub async fn fetch_seed_types(&self, token: &str) -> Result<Vec<SeedType>, ApiError> {
        let url = format!("{}/seed-types", self.base_url);
        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        json_body(response).await
    }

    pub async fn create_crop(&self, token: &str, request: &CropRequest) -> Result<(), ApiError> {
        let url = format!("{}/crops", self.base_url);
        log::info!("🌾 Agregando cultivo al terreno {}", request.terrain_id);
        self.send_json(Request::post(&url), token, request).await
    }

    pub async fn update_crop(
        &self,
        token: &str,
        id: u64,
        request: &CropRequest,
    ) -> Result<(), ApiError> {
        let url = format!("{}/crops/{}", self.base_url, id);
        log::info!("✏️ Actualizando cultivo: {}", id);
        self.send_json(Request::put(&url), token, request).await
    }

    pub async fn delete_crop(&self, token: &str, id: u64) -> Result<(), ApiError> {
        let url = format!("{}/crops/{}", self.base_url, id);
        log::info!("🗑️ Eliminando cultivo: {}", id);
        let response = Request::delete(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        expect_ok(response).await
    }

    /// Eliminar la cuenta del usuario autenticado
    pub async fn delete_account(&self, token: &str, email: &str) -> Result<(), ApiError> {
        let url = format!("{}/auth/delete-user", self.base_url);
        log::info!("🗑️ Eliminando cuenta: {}", email);
        let response = Request::delete(&url)
            .header("Authorization", &bearer(token))
            .json(&serde_json::json!({ "token": token, "email": email }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        expect_ok(response).await
    }

    async fn send_json<T: serde::Serialize>(
        &self,
        builder: gloo_net::http::RequestBuilder,
        token: &str,
        body: &T,
    ) -> Result<(), ApiError> {
        let response = builder
            .header("Authorization", &bearer(token))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        expect_ok(response).await
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(ApiError::server(status, format!("HTTP {}: {}", status, text)));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

async fn expect_ok(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Error desconocido".to_string());
        Err(ApiError::server(status, format!("HTTP {}: {}", status, text)))
    }
}

/// El backend de auth responde `{error}` con mensaje legible; si no hay
/// cuerpo estructurado se usa un mensaje genérico.
async fn auth_error(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<BackendErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| "Ocurrió un error inesperado".to_string());
    ApiError::server(status, message)
}
