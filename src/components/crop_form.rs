use chrono::Utc;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::snackbar::{Notification, Snackbar};
use crate::hooks::{use_seed_types, use_session};
use crate::models::crop::{Crop, CropForm, CropRequest};
use crate::models::terrain::ImageSource;
use crate::services::{ApiClient, UploadClient};
use crate::utils::validation::{digits_only, validate_crop_form, CropFormErrors};

#[derive(Properties, PartialEq)]
pub struct CropFormProps {
    /// Terreno dueño: el cultivo hereda su propiedad vía este id
    pub terrain_id: u64,
    /// `Some` edita un cultivo existente
    #[prop_or_default]
    pub crop: Option<Crop>,
    pub on_done: Callback<()>,
}

#[function_component(CropFormView)]
pub fn crop_form_view(props: &CropFormProps) -> Html {
    let session = use_session();
    let seed_types = use_seed_types(session.token());
    let form = use_state({
        let crop = props.crop.clone();
        move || match crop {
            Some(crop) => CropForm::from_crop(&crop),
            None => CropForm::default(),
        }
    });
    let errors = use_state(CropFormErrors::default);
    let submitting = use_state(|| false);
    let notification = use_state(|| None::<Notification>);

    let on_seed_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*form).clone();
                next.seed_type_id = select.value();
                form.set(next);
            }
        })
    };
    let on_area = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.area = digits_only(&input.value());
                form.set(next);
            }
        })
    };
    let on_photo = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    let mut next = (*form).clone();
                    next.photo = Some(ImageSource::File(file));
                    form.set(next);
                }
            }
        })
    };
    let on_harvest_date = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.harvest_date = input.value();
                form.set(next);
            }
        })
    };
    let on_for_sale = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.for_sale = input.value() == "true";
                form.set(next);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let notification = notification.clone();
        let session = session.clone();
        let terrain_id = props.terrain_id;
        let crop_id = props.crop.as_ref().map(|c| c.id);
        let on_done = props.on_done.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current = (*form).clone();
            let today = Utc::now().date_naive();
            let validation = validate_crop_form(&current, today);
            if !validation.is_empty() {
                errors.set(validation);
                return;
            }
            let Ok(seed_type_id) = current.seed_type_id.parse::<u64>() else {
                errors.set(CropFormErrors {
                    seed_type: Some("El tipo de semilla es obligatorio".to_string()),
                    ..CropFormErrors::default()
                });
                return;
            };
            errors.set(CropFormErrors::default());

            let Some(token) = session.token() else {
                notification.set(Some(Notification::error(
                    "La sesión expiró, vuelve a iniciar sesión",
                )));
                return;
            };
            let Some(photo_source) = current.photo.clone() else {
                return;
            };

            submitting.set(true);
            let form = form.clone();
            let submitting = submitting.clone();
            let notification = notification.clone();
            let on_done = on_done.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let photo = match UploadClient::new().resolve_image(&photo_source).await {
                    Ok(url) => url,
                    Err(e) => {
                        log::error!("❌ {}", e);
                        notification.set(Some(Notification::error(e.to_string())));
                        submitting.set(false);
                        return;
                    }
                };

                let request = CropRequest {
                    terrain_id,
                    seed_type_id,
                    area: current.area.clone(),
                    photo,
                    harvest_date: current.harvest_date.clone(),
                    for_sale: current.for_sale,
                };

                let api = ApiClient::new();
                let result = match crop_id {
                    Some(id) => api.update_crop(&token, id, &request).await,
                    None => api.create_crop(&token, &request).await,
                };

                match result {
                    Ok(()) => {
                        if crop_id.is_some() {
                            notification.set(Some(Notification::success("Actualizado con éxito")));
                            Timeout::new(1_000, move || on_done.emit(())).forget();
                        } else {
                            notification.set(Some(Notification::success("Agregado con éxito")));
                            form.set(CropForm::default());
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando el cultivo: {}", e);
                        notification.set(Some(Notification::error(e.to_string())));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let cancel_click = {
        let on_done = props.on_done.clone();
        Callback::from(move |_e: MouseEvent| on_done.emit(()))
    };
    let close_notification = {
        let notification = notification.clone();
        Callback::from(move |_| notification.set(None))
    };

    let editing = props.crop.is_some();
    let title = if editing { "Actualizar Cultivo" } else { "Agregar Cultivo" };
    let submit_label = if *submitting {
        if editing { "Actualizando..." } else { "Agregando..." }
    } else if editing {
        "Actualizar"
    } else {
        "Agregar"
    };

    let field_error = |error: &Option<String>| match error {
        Some(message) => html! { <span class="field-error">{message.clone()}</span> },
        None => html! {},
    };

    let seed_options = seed_types.seed_types.iter().map(|seed| {
        let value = seed.id.to_string();
        html! {
            <option
                key={seed.id.to_string()}
                value={value.clone()}
                selected={value == form.seed_type_id}
            >
                {&seed.name}
            </option>
        }
    });

    let current_photo = match &form.photo {
        Some(ImageSource::Url(url)) => html! {
            <p class="photo-hint">{format!("Imagen actual: {}", url)}</p>
        },
        _ => html! {},
    };

    html! {
        <div class="form-screen">
            <h2>{title}</h2>
            <form class="entity-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="seed-type">{"Tipo de Semilla"}</label>
                    <select id="seed-type" onchange={on_seed_type} disabled={seed_types.loading}>
                        <option value="" selected={form.seed_type_id.is_empty()}>
                            {"Selecciona un tipo"}
                        </option>
                        { for seed_options }
                    </select>
                    { field_error(&errors.seed_type) }
                </div>

                <div class="form-group">
                    <label for="crop-area">{"Área en hectáreas"}</label>
                    <input
                        type="text"
                        id="crop-area"
                        inputmode="numeric"
                        placeholder="Ej: 10"
                        value={form.area.clone()}
                        oninput={on_area}
                        required=true
                    />
                    { field_error(&errors.area) }
                </div>

                <div class="form-group">
                    <label for="crop-photo">{"Cargar imagen"}</label>
                    <input type="file" id="crop-photo" accept="image/*" onchange={on_photo} />
                    { current_photo }
                    { field_error(&errors.photo) }
                </div>

                <div class="form-group">
                    <label for="crop-harvest-date">{"Fecha de cosecha"}</label>
                    <input
                        type="date"
                        id="crop-harvest-date"
                        value={form.harvest_date.clone()}
                        oninput={on_harvest_date}
                        required=true
                    />
                    { field_error(&errors.harvest_date) }
                </div>

                <div class="form-group">
                    <span class="group-label">{"Disponible para la Venta"}</span>
                    <label class="radio-label">
                        <input
                            type="radio"
                            name="crop-for-sale"
                            value="true"
                            checked={form.for_sale}
                            onchange={on_for_sale.clone()}
                        />
                        {"Sí"}
                    </label>
                    <label class="radio-label">
                        <input
                            type="radio"
                            name="crop-for-sale"
                            value="false"
                            checked={!form.for_sale}
                            onchange={on_for_sale}
                        />
                        {"No"}
                    </label>
                </div>

                <div class="form-actions">
                    <button type="button" class="btn-secondary" onclick={cancel_click}>
                        {"Cancelar"}
                    </button>
                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        {submit_label}
                    </button>
                </div>
            </form>
            <Snackbar notification={(*notification).clone()} on_close={close_notification} />
        </div>
    }
}
