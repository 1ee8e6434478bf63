// ============================================================================
// SESSION CONTEXT - Compartir estado de sesión entre componentes
// ============================================================================
// Usa Context API de Yew para compartir el SessionStore globalmente
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session_store, UseSessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y proporciona el estado de sesión
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_session_store();

    html! {
        <ContextProvider<UseSessionHandle> context={session}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

/// Acceso al estado de sesión desde cualquier componente bajo el provider
#[hook]
pub fn use_session() -> UseSessionHandle {
    use_context::<UseSessionHandle>()
        .expect("use_session debe usarse dentro de un SessionProvider")
}
