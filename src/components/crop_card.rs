use yew::prelude::*;

use crate::models::crop::Crop;

#[derive(Properties, PartialEq)]
pub struct CropCardProps {
    pub crop: Crop,
    /// Solo el dueño del terreno ve editar/eliminar
    pub is_owner: bool,
    pub on_edit: Callback<Crop>,
    pub on_delete: Callback<Crop>,
    pub on_photo_click: Callback<String>,
}

#[function_component(CropCard)]
pub fn crop_card(props: &CropCardProps) -> Html {
    let crop = &props.crop;

    let photo_click = {
        let cb = props.on_photo_click.clone();
        let url = crop.photo.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(url.clone()))
    };
    let edit_click = {
        let cb = props.on_edit.clone();
        let crop = crop.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(crop.clone()))
    };
    let delete_click = {
        let cb = props.on_delete.clone();
        let crop = crop.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(crop.clone()))
    };

    // "2024-09-01" → "01/09/2024"
    let harvest = crop
        .harvest_date
        .split('-')
        .rev()
        .collect::<Vec<_>>()
        .join("/");

    let area_label = if crop.area == "1" { "Hectárea" } else { "Hectáreas" };
    let sale_class = if crop.for_sale { "sale-status yes" } else { "sale-status no" };
    let sale_text = if crop.for_sale {
        "Disponible para venta"
    } else {
        "No disponible para venta"
    };

    html! {
        <div class="card crop-card">
            <img
                class="card-photo"
                src={crop.photo.clone()}
                alt={format!("Cultivo de {}", crop.seed_type.name)}
                onclick={photo_click}
            />
            <h3 class="card-title">{&crop.seed_type.name}</h3>
            <p>{format!("Área de Cultivo: {} {}", crop.area, area_label)}</p>
            <p>{format!("Fecha de Cosecha: {}", harvest)}</p>
            <p class={sale_class}><strong>{sale_text}</strong></p>
            if props.is_owner {
                <div class="card-actions">
                    <button class="btn-warning" onclick={edit_click}>{"Editar"}</button>
                    <button class="btn-danger" onclick={delete_click}>{"Eliminar"}</button>
                </div>
            }
        </div>
    }
}
