use yew::prelude::*;

use crate::components::app::View;
use crate::components::pagination::Pagination;
use crate::components::terrain_card::TerrainCard;
use crate::hooks::{use_terrains, TerrainScope};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<View>,
}

/// Listado público de terrenos con cultivos en venta
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let terrains = use_terrains(TerrainScope::All);

    let on_select = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |id: u64| on_navigate.emit(View::TerrainDetail(id)))
    };

    let content = if terrains.loading {
        html! { <div class="spinner" /> }
    } else if terrains.terrains.is_empty() {
        html! { <p class="empty-state">{"No hay terrenos disponibles"}</p> }
    } else {
        html! {
            <div class="card-grid">
                { for terrains.terrains.iter().map(|terrain| html! {
                    <TerrainCard
                        key={terrain.id}
                        terrain={terrain.clone()}
                        on_select={on_select.clone()}
                    />
                }) }
            </div>
        }
    };

    html! {
        <div class="page">
            <h1 class="page-title">{"Cultivos disponibles para ventas"}</h1>
            { content }
            if let Some(error) = &terrains.error {
                <p class="page-error">{error.to_string()}</p>
            }
            <Pagination
                current_page={terrains.current_page}
                total_pages={terrains.total_pages}
                on_change={terrains.fetch_page.clone()}
            />
        </div>
    }
}
