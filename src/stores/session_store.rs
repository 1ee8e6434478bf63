// ============================================================================
// SESSION STORE - Fuente única de verdad de la autenticación
// ============================================================================
// Transiciones: Idle → Loading → {Idle, Failed}. Logout es alcanzable desde
// cualquier estado y vuelve a Idle sin token. El token es propiedad exclusiva
// del store: los componentes lo leen, nunca lo mutan directamente.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::error::ApiError;
use crate::models::auth::UserIdentity;
use crate::utils::jwt::decode_token_payload;
use crate::utils::storage;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Failed,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct SessionStore {
    pub token: Option<String>,
    pub status: SessionStatus,
    pub error: Option<ApiError>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum SessionAction {
    /// Hay un sign-in o sign-up en vuelo
    Pending,
    /// El backend emitió un token
    Success(String),
    /// El intento falló; un token ya válido no se pierde
    Failure(ApiError),
    /// Cierre de sesión local, nunca toca la red
    Logout,
    Clear,
}

impl SessionStore {
    /// Estado inicial al cargar la aplicación: si hay un token persistido lo
    /// adopta sin contactar la red ni validar expiración (las llamadas a la
    /// API fallando después se encargan de eso).
    pub fn rehydrated() -> Self {
        Self {
            token: storage::load_token(),
            status: SessionStatus::Idle,
            error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Identidad derivada del token. Falla cerrado: cualquier token que no
    /// decodifique a los claims esperados equivale a anónimo.
    pub fn identity(&self) -> Option<UserIdentity> {
        let token = self.token.as_deref()?;
        Some(decode_token_payload(token)?.identity())
    }

    /// Transición pura: no persiste nada. La persistencia del token vive en
    /// el hook de sesión, que solo escribe en el camino de éxito.
    fn apply(&self, action: SessionAction) -> Self {
        match action {
            SessionAction::Pending => Self {
                token: self.token.clone(),
                status: SessionStatus::Loading,
                error: None,
            },
            SessionAction::Success(token) => Self {
                token: Some(token),
                status: SessionStatus::Idle,
                error: None,
            },
            SessionAction::Failure(error) => Self {
                token: self.token.clone(),
                status: SessionStatus::Failed,
                error: Some(error),
            },
            SessionAction::Logout => Self::default(),
            SessionAction::Clear => Self {
                token: self.token.clone(),
                status: self.status,
                error: None,
            },
        }
    }
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> ApiError {
        ApiError::server(401, "Credenciales inválidas")
    }

    #[test]
    fn sign_in_exitoso_termina_en_idle_con_token() {
        let store = SessionStore::default()
            .apply(SessionAction::Pending)
            .apply(SessionAction::Success("tok123".to_string()));
        assert_eq!(store.token.as_deref(), Some("tok123"));
        assert_eq!(store.status, SessionStatus::Idle);
        assert_eq!(store.error, None);
    }

    #[test]
    fn sign_in_fallido_termina_en_failed_sin_token() {
        let store = SessionStore::default()
            .apply(SessionAction::Pending)
            .apply(SessionAction::Failure(failure()));
        assert_eq!(store.token, None);
        assert_eq!(store.status, SessionStatus::Failed);
        assert_eq!(store.error, Some(failure()));
    }

    #[test]
    fn mientras_esta_en_vuelo_el_estado_es_loading() {
        let store = SessionStore::default().apply(SessionAction::Pending);
        assert_eq!(store.status, SessionStatus::Loading);
        assert_eq!(store.error, None);
    }

    #[test]
    fn un_reintento_fallido_no_desloguea_una_sesion_valida() {
        let store = SessionStore {
            token: Some("tok-vigente".to_string()),
            status: SessionStatus::Idle,
            error: None,
        }
        .apply(SessionAction::Pending)
        .apply(SessionAction::Failure(failure()));

        assert_eq!(store.token.as_deref(), Some("tok-vigente"));
        assert_eq!(store.status, SessionStatus::Failed);
    }

    #[test]
    fn logout_resetea_desde_cualquier_estado() {
        for store in [
            SessionStore::default(),
            SessionStore {
                token: Some("tok123".to_string()),
                status: SessionStatus::Idle,
                error: None,
            },
            SessionStore {
                token: Some("tok123".to_string()),
                status: SessionStatus::Failed,
                error: Some(failure()),
            },
        ] {
            let after = store.apply(SessionAction::Logout);
            assert_eq!(after, SessionStore::default());
        }
    }

    #[test]
    fn clear_borra_el_error_sin_tocar_el_token() {
        let store = SessionStore {
            token: Some("tok123".to_string()),
            status: SessionStatus::Failed,
            error: Some(failure()),
        }
        .apply(SessionAction::Clear);
        assert_eq!(store.token.as_deref(), Some("tok123"));
        assert_eq!(store.error, None);
        assert_eq!(store.status, SessionStatus::Failed);
    }

    #[test]
    fn identidad_sin_token_es_anonima() {
        assert!(SessionStore::default().identity().is_none());

        let store = SessionStore {
            token: Some("token-corrupto".to_string()),
            status: SessionStatus::Idle,
            error: None,
        };
        assert!(store.identity().is_none());
    }
}
