use yew::prelude::*;

use crate::components::app::View;
use crate::components::delete_modal::DeleteModal;
use crate::components::pagination::Pagination;
use crate::components::snackbar::{Notification, Snackbar};
use crate::components::terrain_card::TerrainCard;
use crate::hooks::{use_session, use_terrains, TerrainScope};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct MyTerrainsProps {
    pub on_navigate: Callback<View>,
}

/// Terrenos del usuario autenticado, con acciones de edición y borrado.
/// El borrado pasa siempre por el modal de confirmación; tras un DELETE
/// exitoso la lista se vuelve a pedir al backend (nunca se parcha a mano).
#[function_component(MyTerrains)]
pub fn my_terrains(props: &MyTerrainsProps) -> Html {
    let session = use_session();
    // Los hooks corren siempre, aun sin identidad; el guard visual va después
    let email = session
        .identity()
        .map(|identity| identity.email)
        .unwrap_or_default();
    let token = session.token().unwrap_or_default();

    let terrains = use_terrains(TerrainScope::Mine {
        email,
        token: token.clone(),
    });
    let pending_delete = use_state(|| None::<(u64, String)>);
    let notification = use_state(|| None::<Notification>);

    if session.identity().is_none() {
        // El guard de App no debería dejar llegar acá sin sesión
        return html! { <div class="spinner" /> };
    }

    let on_select = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |id: u64| on_navigate.emit(View::TerrainDetail(id)))
    };

    let close_modal = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let confirm_delete = {
        let pending_delete = pending_delete.clone();
        let notification = notification.clone();
        let refresh = terrains.refresh.clone();
        let token = token.clone();
        Callback::from(move |_| {
            let Some((id, _)) = (*pending_delete).clone() else {
                return;
            };
            pending_delete.set(None);

            let notification = notification.clone();
            let refresh = refresh.clone();
            let token = token.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().delete_terrain(&token, id).await {
                    Ok(()) => {
                        notification.set(Some(Notification::success("Terreno eliminado")));
                        refresh.emit(());
                    }
                    Err(e) => {
                        // El terreno sigue visible: la lista no se toca
                        log::error!("❌ Error al eliminar el terreno: {}", e);
                        notification.set(Some(Notification::error("Error al eliminar el terreno")));
                    }
                }
            });
        })
    };

    let cards = terrains.terrains.iter().map(|terrain| {
        let edit_click = {
            let on_navigate = props.on_navigate.clone();
            let id = terrain.id;
            Callback::from(move |_e: MouseEvent| on_navigate.emit(View::EditTerrain(id)))
        };
        let add_crop_click = {
            let on_navigate = props.on_navigate.clone();
            let id = terrain.id;
            Callback::from(move |_e: MouseEvent| on_navigate.emit(View::AddCrop(id)))
        };
        let delete_click = {
            let pending_delete = pending_delete.clone();
            let id = terrain.id;
            let name = terrain.name.clone();
            Callback::from(move |_e: MouseEvent| {
                pending_delete.set(Some((id, name.clone())));
            })
        };

        html! {
            <TerrainCard
                key={terrain.id}
                terrain={terrain.clone()}
                on_select={on_select.clone()}
            >
                <button class="btn-warning" onclick={edit_click}>{"Editar"}</button>
                <button class="btn-primary" onclick={add_crop_click}>{"Agregar Cultivo"}</button>
                <button class="btn-danger" onclick={delete_click}>{"Eliminar"}</button>
            </TerrainCard>
        }
    });

    let content = if terrains.loading {
        html! { <div class="spinner" /> }
    } else if terrains.terrains.is_empty() {
        html! { <p class="empty-state">{"No hay terrenos disponibles"}</p> }
    } else {
        html! { <div class="card-grid">{ for cards }</div> }
    };

    let (modal_open, modal_name) = match &*pending_delete {
        Some((_, name)) => (true, name.clone()),
        None => (false, String::new()),
    };
    let close_notification = {
        let notification = notification.clone();
        Callback::from(move |_| notification.set(None))
    };

    html! {
        <div class="page">
            <h1 class="page-title">{"Mis Terrenos"}</h1>
            { content }
            if let Some(error) = &terrains.error {
                <p class="page-error">{error.to_string()}</p>
            }
            <Pagination
                current_page={terrains.current_page}
                total_pages={terrains.total_pages}
                on_change={terrains.fetch_page.clone()}
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
