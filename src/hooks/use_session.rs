// ============================================================================
// USE SESSION - Acciones de autenticación sobre el SessionStore
// ============================================================================
// El reducer es puro; los efectos (red, localStorage) viven acá. El token
// solo se persiste en el camino de éxito, y logout lo borra sin tocar la red.
// ============================================================================

use yew::prelude::*;

use crate::error::ApiError;
use crate::models::auth::{SignInData, SignUpData, UserIdentity};
use crate::services::ApiClient;
use crate::stores::{SessionAction, SessionStatus, SessionStore};
use crate::utils::storage;

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    store: UseReducerHandle<SessionStore>,
    pub sign_in: Callback<SignInData>,
    pub sign_up: Callback<SignUpData>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
}

impl UseSessionHandle {
    pub fn token(&self) -> Option<String> {
        self.store.token.clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.store.status
    }

    pub fn error(&self) -> Option<ApiError> {
        self.store.error.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.store.status == SessionStatus::Loading
    }

    pub fn identity(&self) -> Option<UserIdentity> {
        self.store.identity()
    }
}

/// Crea el store de sesión. Se invoca UNA vez, en el provider; el resto de
/// la app lo consume vía contexto (ver `session_context`).
#[hook]
pub fn use_session_store() -> UseSessionHandle {
    let store = use_reducer(SessionStore::rehydrated);

    let sign_in = {
        let store = store.clone();
        Callback::from(move |data: SignInData| {
            let store = store.clone();
            store.dispatch(SessionAction::Pending);
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().sign_in(&data).await {
                    Ok(token) => {
                        if let Err(e) = storage::save_token(&token) {
                            log::error!("❌ No se pudo persistir el token: {}", e);
                        }
                        log::info!("✅ Sesión iniciada: {}", data.email);
                        store.dispatch(SessionAction::Success(token));
                    }
                    Err(error) => {
                        log::error!("❌ Error en sign-in: {}", error);
                        store.dispatch(SessionAction::Failure(error));
                    }
                }
            });
        })
    };

    let sign_up = {
        let store = store.clone();
        Callback::from(move |data: SignUpData| {
            let store = store.clone();
            store.dispatch(SessionAction::Pending);
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().sign_up(&data).await {
                    Ok(token) => {
                        if let Err(e) = storage::save_token(&token) {
                            log::error!("❌ No se pudo persistir el token: {}", e);
                        }
                        log::info!("✅ Cuenta creada: {}", data.email);
                        store.dispatch(SessionAction::Success(token));
                    }
                    Err(error) => {
                        log::error!("❌ Error en sign-up: {}", error);
                        store.dispatch(SessionAction::Failure(error));
                    }
                }
            });
        })
    };

    let logout = {
        let store = store.clone();
        Callback::from(move |_| {
            let _ = storage::remove_token();
            log::info!("👋 Sesión cerrada");
            store.dispatch(SessionAction::Logout);
        })
    };

    let clear_error = {
        let store = store.clone();
        Callback::from(move |_| {
            store.dispatch(SessionAction::Clear);
        })
    };

    UseSessionHandle {
        store,
        sign_in,
        sign_up,
        logout,
        clear_error,
    }
}
