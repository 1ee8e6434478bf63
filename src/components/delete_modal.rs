use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DeleteModalProps {
    pub open: bool,
    /// Nombre visible de lo que se va a eliminar
    pub name: String,
    pub on_close: Callback<()>,
    pub on_confirm: Callback<()>,
}

/// Confirmación previa a cualquier DELETE: sin confirmar, no hay petición
#[function_component(DeleteModal)]
pub fn delete_modal(props: &DeleteModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let confirm_click = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={close_click.clone()}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{"Confirmar eliminación"}</h2>
                </div>
                <div class="modal-body">
                    <p>{format!("¿Estás seguro de que quieres eliminar \"{}\"?", props.name)}</p>
                </div>
                <div class="modal-footer">
                    <button class="btn-secondary" onclick={close_click}>{"Cancelar"}</button>
                    <button class="btn-danger" onclick={confirm_click}>{"Eliminar"}</button>
                </div>
            </div>
        </div>
    }
}
