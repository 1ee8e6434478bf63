use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct SignInData {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignUpData {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

/// Respuesta de los endpoints de autenticación
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
}

/// Cuerpo de error estructurado que puede devolver el backend
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Claims decodificados del token de sesión.
///
/// Derivados, nunca persistidos: un token que no decodifica a esta forma
/// exacta se trata como "sin identidad".
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    /// Email del usuario autenticado
    pub sub: String,
    pub first_name: String,
    pub last_name: String,
}

impl TokenPayload {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            email: self.sub.clone(),
            full_name: self.full_name(),
        }
    }
}

/// Identidad que el flujo de envío mezcla en los payloads de terreno
#[derive(Clone, PartialEq, Debug)]
pub struct UserIdentity {
    pub email: String,
    pub full_name: String,
}
