use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ImageModalProps {
    pub open: bool,
    pub image_url: String,
    pub on_close: Callback<()>,
}

#[function_component(ImageModal)]
pub fn image_modal(props: &ImageModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={close_click.clone()}></div>
            <div class="modal-content modal-image" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="btn-close" onclick={close_click}>{"✕"}</button>
                <img src={props.image_url.clone()} alt="Imagen ampliada" />
            </div>
        </div>
    }
}
