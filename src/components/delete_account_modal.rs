use yew::prelude::*;

use crate::hooks::use_session;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DeleteAccountModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Eliminación de cuenta: confirmación explícita, DELETE con bearer y
/// logout local al terminar.
#[function_component(DeleteAccountModal)]
pub fn delete_account_modal(props: &DeleteAccountModalProps) -> Html {
    let session = use_session();
    let deleting = use_state(|| false);
    let error = use_state(|| None::<String>);

    if !props.open {
        return html! {};
    }

    let close_click = {
        let cb = props.on_close.clone();
        let error = error.clone();
        Callback::from(move |_e: MouseEvent| {
            error.set(None);
            cb.emit(());
        })
    };

    let confirm_click = {
        let session = session.clone();
        let deleting = deleting.clone();
        let error = error.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_e: MouseEvent| {
            let (Some(token), Some(identity)) = (session.token(), session.identity()) else {
                return;
            };

            deleting.set(true);
            let logout = session.logout.clone();
            let deleting = deleting.clone();
            let error = error.clone();
            let on_close = on_close.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().delete_account(&token, &identity.email).await {
                    Ok(()) => {
                        log::info!("✅ Cuenta eliminada: {}", identity.email);
                        on_close.emit(());
                        logout.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando la cuenta: {}", e);
                        error.set(Some("No se pudo eliminar la cuenta".to_string()));
                    }
                }
                deleting.set(false);
            });
        })
    };

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={close_click.clone()}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{"Eliminar mi cuenta"}</h2>
                </div>
                <div class="modal-body">
                    <p>{"Esta acción es permanente: se eliminarán tu cuenta y tus terrenos. ¿Continuar?"}</p>
                    if let Some(message) = (*error).clone() {
                        <p class="field-error">{message}</p>
                    }
                </div>
                <div class="modal-footer">
                    <button class="btn-secondary" onclick={close_click}>{"Cancelar"}</button>
                    <button class="btn-danger" onclick={confirm_click} disabled={*deleting}>
                        { if *deleting { "Eliminando..." } else { "Eliminar" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
