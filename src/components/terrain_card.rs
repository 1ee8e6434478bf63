use yew::prelude::*;

use crate::models::terrain::Terrain;

#[derive(Properties, PartialEq)]
pub struct TerrainCardProps {
    pub terrain: Terrain,
    /// Click en la foto o el título del terreno
    pub on_select: Callback<u64>,
    /// Botones extra (editar/eliminar en "Mis Terrenos")
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TerrainCard)]
pub fn terrain_card(props: &TerrainCardProps) -> Html {
    let terrain = &props.terrain;
    let select_click = {
        let on_select = props.on_select.clone();
        let id = terrain.id;
        Callback::from(move |_e: MouseEvent| on_select.emit(id))
    };

    let for_sale = if terrain.for_sale {
        html! { <span class="for-sale yes">{"Sí"}</span> }
    } else {
        html! { <span class="for-sale no">{"No"}</span> }
    };

    html! {
        <div class="card terrain-card">
            <h3 class="card-title" onclick={select_click.clone()}>
                {format!("Cultivo de {}", terrain.name)}
            </h3>
            <img
                class="card-photo"
                src={terrain.photo.clone()}
                alt={terrain.name.clone()}
                onclick={select_click}
            />
            <p><strong>{"Agricultor: "}</strong>{&terrain.full_name}</p>
            <p><strong>{"Contacto: "}</strong>{&terrain.email}</p>
            <p><strong>{"Área de Cultivo: "}</strong>{format!("{} hectáreas", terrain.area)}</p>
            <p><strong>{"Tipo de Suelo: "}</strong>{terrain.soil_type.to_string()}</p>
            <p><strong>{"En Venta: "}</strong>{for_sale}</p>
            <p><strong>{"Ubicación: "}</strong>{&terrain.location}</p>
            <div class="card-actions">
                {props.children.clone()}
            </div>
        </div>
    }
}
