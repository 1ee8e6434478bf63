use yew::prelude::*;

use crate::components::app::View;
use crate::components::crop_card::CropCard;
use crate::components::delete_modal::DeleteModal;
use crate::components::image_modal::ImageModal;
use crate::components::snackbar::{Notification, Snackbar};
use crate::hooks::use_session;
use crate::models::crop::Crop;
use crate::models::terrain::Terrain;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct TerrainDetailProps {
    pub terrain_id: u64,
    pub on_navigate: Callback<View>,
}

/// Detalle público de un terreno con sus cultivos. El dueño (email del token
/// igual al email del terreno) además puede editar y eliminar cultivos.
#[function_component(TerrainDetail)]
pub fn terrain_detail(props: &TerrainDetailProps) -> Html {
    let session = use_session();
    let terrain = use_state(|| None::<Terrain>);
    // Contador de recargas: borrar un cultivo vuelve a pedir el terreno
    let reload = use_state(|| 0u32);
    let pending_delete = use_state(|| None::<Crop>);
    let notification = use_state(|| None::<Notification>);
    let lightbox = use_state(|| None::<String>);

    {
        let terrain = terrain.clone();
        use_effect_with((props.terrain_id, *reload), move |(id, _)| {
            let id = *id;
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().fetch_terrain(id).await {
                    Ok(fetched) => terrain.set(Some(fetched)),
                    Err(e) => {
                        log::error!("❌ Error cargando el terreno {}: {}", id, e);
                    }
                }
            });
            || ()
        });
    }

    let Some(current) = (*terrain).clone() else {
        return html! { <div class="spinner" /> };
    };

    let is_owner = session
        .identity()
        .map(|identity| identity.email == current.email)
        .unwrap_or(false);

    let open_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |url: String| lightbox.set(Some(url)))
    };
    let close_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set(None))
    };

    let on_edit_crop = {
        let on_navigate = props.on_navigate.clone();
        let terrain_id = props.terrain_id;
        Callback::from(move |crop: Crop| {
            on_navigate.emit(View::EditCrop { terrain_id, crop });
        })
    };
    let on_delete_crop = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |crop: Crop| pending_delete.set(Some(crop)))
    };
    let close_modal = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };
    let confirm_delete = {
        let pending_delete = pending_delete.clone();
        let notification = notification.clone();
        let reload = reload.clone();
        let session = session.clone();
        Callback::from(move |_| {
            let Some(crop) = (*pending_delete).clone() else {
                return;
            };
            pending_delete.set(None);
            let Some(token) = session.token() else {
                return;
            };

            let notification = notification.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().delete_crop(&token, crop.id).await {
                    Ok(()) => {
                        notification.set(Some(Notification::success("Cultivo eliminado")));
                        reload.set(*reload + 1);
                    }
                    Err(e) => {
                        log::error!("❌ Error al eliminar el cultivo: {}", e);
                        notification.set(Some(Notification::error("Error al eliminar el cultivo")));
                    }
                }
            });
        })
    };

    let add_crop_click = {
        let on_navigate = props.on_navigate.clone();
        let terrain_id = props.terrain_id;
        Callback::from(move |_e: MouseEvent| on_navigate.emit(View::AddCrop(terrain_id)))
    };
    let photo_click = {
        let open_lightbox = open_lightbox.clone();
        let url = current.photo.clone();
        Callback::from(move |_e: MouseEvent| open_lightbox.emit(url.clone()))
    };

    let area_label = if current.area == "1" { "Hectárea" } else { "Hectáreas" };
    let mailto = format!(
        "mailto:{}?subject={}&body={}",
        current.email,
        urlencode(&format!("Consulta sobre el terreno \"{}\"", current.name)),
        urlencode(&format!(
            "Buenos días señor/a {}, quiero cotizar los cultivos del terreno \"{}\".",
            current.full_name, current.name
        )),
    );

    let crops = current.crops.iter().map(|crop| {
        html! {
            <CropCard
                key={crop.id}
                crop={crop.clone()}
                is_owner={is_owner}
                on_edit={on_edit_crop.clone()}
                on_delete={on_delete_crop.clone()}
                on_photo_click={open_lightbox.clone()}
            />
        }
    });

    let (modal_open, modal_name) = match &*pending_delete {
        Some(crop) => (true, crop.seed_type.name.clone()),
        None => (false, String::new()),
    };
    let close_notification = {
        let notification = notification.clone();
        Callback::from(move |_| notification.set(None))
    };

    html! {
        <div class="page">
            <div class="terrain-info card">
                <img
                    class="terrain-photo"
                    src={current.photo.clone()}
                    alt="Terreno"
                    onclick={photo_click}
                />
                <h1>{format!("Nombre del Terreno: {}", current.name)}</h1>
                <p><strong>{"Nombre del agricultor: "}</strong>{&current.full_name}</p>
                <p><strong>{"Área de Cultivo: "}</strong>{format!("{} {}", current.area, area_label)}</p>
                <p><strong>{"Tipo de suelo: "}</strong>{current.soil_type.to_string()}</p>
                <p><strong>{"Ubicación: "}</strong>{&current.location}</p>
                <p><strong>{"Email: "}</strong>{&current.email}</p>
                <a class="btn-link" href={mailto}>{"Enviar Correo"}</a>
                if is_owner {
                    <button class="btn-primary" onclick={add_crop_click}>
                        {"Agregar Cultivo"}
                    </button>
                }
            </div>

            <div class="card-grid">
                { for crops }
            </div>

            <ImageModal
                open={lightbox.is_some()}
                image_url={(*lightbox).clone().unwrap_or_default()}
                on_close={close_lightbox}
            />
            <DeleteModal
                open={modal_open}
                name={modal_name}
                on_close={close_modal}
                on_confirm={confirm_delete}
            />
            <Snackbar notification={(*notification).clone()} on_close={close_notification} />
        </div>
    }
}

fn urlencode(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}
