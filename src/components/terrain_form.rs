// ============================================================================
// FORMULARIO DE TERRENO - Crear / Actualizar
// ============================================================================
// Flujo de envío: validar localmente → resolver imagen (subida si es archivo)
// → mezclar identidad del token → POST/PUT con bearer → conciliar la UI.
// Una validación fallida o una subida fallida cortan el flujo sin tocar el
// backend; un envío fallido deja el formulario intacto para reintentar.
// ============================================================================

use chrono::Utc;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::snackbar::{Notification, Snackbar};
use crate::hooks::use_session;
use crate::models::terrain::{ImageSource, SoilType, TerrainForm, TerrainRequest};
use crate::services::{ApiClient, UploadClient};
use crate::utils::validation::{digits_only, validate_terrain_form, TerrainFormErrors};

#[derive(Properties, PartialEq)]
pub struct TerrainFormProps {
    /// `Some(id)` edita un terreno existente; `None` crea uno nuevo
    #[prop_or_default]
    pub terrain_id: Option<u64>,
    /// Volver al listado (cancelar, o tras actualizar con éxito)
    pub on_done: Callback<()>,
}

#[function_component(TerrainFormView)]
pub fn terrain_form_view(props: &TerrainFormProps) -> Html {
    let session = use_session();
    let form = use_state(TerrainForm::default);
    let errors = use_state(TerrainFormErrors::default);
    let submitting = use_state(|| false);
    let notification = use_state(|| None::<Notification>);
    let prefill_loading = use_state(|| props.terrain_id.is_some());

    // Modo edición: precargar el formulario con los datos existentes
    {
        let form = form.clone();
        let prefill_loading = prefill_loading.clone();
        use_effect_with(props.terrain_id, move |terrain_id| {
            if let Some(id) = *terrain_id {
                wasm_bindgen_futures::spawn_local(async move {
                    match ApiClient::new().fetch_terrain(id).await {
                        Ok(terrain) => form.set(TerrainForm::from_terrain(&terrain)),
                        Err(e) => {
                            log::error!("❌ Error cargando el terreno {}: {}", id, e);
                        }
                    }
                    prefill_loading.set(false);
                });
            }
            || ()
        });
    }

    let edit = |apply: fn(&mut TerrainForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                apply(&mut next, input.value());
                form.set(next);
            }
        })
    };
    let on_name = edit(|f, v| f.name = v);
    // Entrada de área: se descarta todo lo que no sea dígito; el submit
    // vuelve a validar el rango de todas formas
    let on_area = edit(|f, v| f.area = digits_only(&v));
    let on_harvest_date = edit(|f, v| f.harvest_date = v);
    let on_location = edit(|f, v| f.location = v);

    let on_soil_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(soil) = SoilType::parse(&select.value()) {
                    let mut next = (*form).clone();
                    next.soil_type = soil;
                    form.set(next);
                }
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

    // El radio serializa "true"/"false"; la conversión a bool ocurre acá y
    // el string no sale de este límite
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
        let on_done = props.on_done.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current = (*form).clone();
            let today = Utc::now().date_naive();
            let validation = validate_terrain_form(&current, today);
            if !validation.is_empty() {
                errors.set(validation);
                return;
            }
            errors.set(TerrainFormErrors::default());

            let (Some(token), Some(identity)) = (session.token(), session.identity()) else {
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
                // Sin URL de imagen no hay create/update: una subida fallida
                // aborta el envío completo
                let photo = match UploadClient::new().resolve_image(&photo_source).await {
                    Ok(url) => url,
                    Err(e) => {
                        log::error!("❌ {}", e);
                        notification.set(Some(Notification::error(e.to_string())));
                        submitting.set(false);
                        return;
                    }
                };

                let request = TerrainRequest {
                    name: current.name.clone(),
                    area: current.area.clone(),
                    soil_type: current.soil_type,
                    photo,
                    email: identity.email,
                    full_name: identity.full_name,
                    for_sale: current.for_sale,
                    location: current.location.clone(),
                    harvest_date: current.harvest_date.clone(),
                };

                let api = ApiClient::new();
                let result = match terrain_id {
                    Some(id) => api.update_terrain(&token, id, &request).await,
                    None => api.create_terrain(&token, &request).await,
                };

                match result {
                    Ok(()) => {
                        if terrain_id.is_some() {
                            notification.set(Some(Notification::success("Actualizado con éxito")));
                            Timeout::new(1_000, move || on_done.emit(())).forget();
                        } else {
                            notification.set(Some(Notification::success("Agregado con éxito")));
                            form.set(TerrainForm::default());
                        }
                    }
                    Err(e) => {
                        // El formulario queda intacto para reintentar
                        log::error!("❌ Error guardando el terreno: {}", e);
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

    if *prefill_loading {
        return html! { <div class="spinner" /> };
    }

    let editing = props.terrain_id.is_some();
    let title = if editing { "Actualizar Terreno" } else { "Agregar Terreno" };
    let submit_label = if *submitting {
        if editing { "Actualizando..." } else { "Agregando..." }
    } else {
        title
    };

    let field_error = |error: &Option<String>| match error {
        Some(message) => html! { <span class="field-error">{message.clone()}</span> },
        None => html! {},
    };

    let soil_options = SoilType::ALL.iter().map(|soil| {
        html! {
            <option
                key={soil.as_str()}
                value={soil.as_str()}
                selected={*soil == form.soil_type}
            >
                {soil.as_str()}
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
                    <label for="name">{"Nombre del terreno"}</label>
                    <input
                        type="text"
                        id="name"
                        value={form.name.clone()}
                        oninput={on_name}
                        required=true
                    />
                    { field_error(&errors.name) }
                </div>

                <div class="form-group">
                    <label for="area">{"Área en hectáreas"}</label>
                    <input
                        type="text"
                        id="area"
                        inputmode="numeric"
                        placeholder="Ej: 10"
                        value={form.area.clone()}
                        oninput={on_area}
                        required=true
                    />
                    { field_error(&errors.area) }
                </div>

                <div class="form-group">
                    <label for="soil-type">{"Tipo de Suelo"}</label>
                    <select id="soil-type" onchange={on_soil_type}>
                        { for soil_options }
                    </select>
                </div>

                <div class="form-group">
                    <label for="photo">{"Cargar imagen"}</label>
                    <input type="file" id="photo" accept="image/*" onchange={on_photo} />
                    { current_photo }
                    { field_error(&errors.photo) }
                </div>

                <div class="form-group">
                    <label for="harvest-date">{"Fecha de cosecha"}</label>
                    <input
                        type="date"
                        id="harvest-date"
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
                            name="for-sale"
                            value="true"
                            checked={form.for_sale}
                            onchange={on_for_sale.clone()}
                        />
                        {"Sí"}
                    </label>
                    <label class="radio-label">
                        <input
                            type="radio"
                            name="for-sale"
                            value="false"
                            checked={!form.for_sale}
                            onchange={on_for_sale}
                        />
                        {"No"}
                    </label>
                </div>

                <div class="form-group">
                    <label for="location">{"Ubicación del terreno"}</label>
                    <input
                        type="text"
                        id="location"
                        value={form.location.clone()}
                        oninput={on_location}
                        required=true
                    />
                    { field_error(&errors.location) }
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
