use yew::prelude::*;

use crate::components::crop_form::CropFormView;
use crate::components::home::Home;
use crate::components::my_terrains::MyTerrains;
use crate::components::navbar::Navbar;
use crate::components::sign_in::SignIn;
use crate::components::sign_up::SignUp;
use crate::components::terrain_detail::TerrainDetail;
use crate::components::terrain_form::TerrainFormView;
use crate::hooks::{use_session, SessionProvider};
use crate::models::crop::Crop;

/// Vistas de la aplicación. No hay router: la navegación es estado local,
/// igual que el renderizado condicional login/app.
#[derive(Clone, PartialEq)]
pub enum View {
    Home,
    SignIn,
    SignUp,
    MyTerrains,
    CreateTerrain,
    EditTerrain(u64),
    TerrainDetail(u64),
    AddCrop(u64),
    EditCrop { terrain_id: u64, crop: Crop },
}

impl View {
    fn is_public(&self) -> bool {
        matches!(self, View::Home | View::TerrainDetail(_))
    }

    fn is_auth_screen(&self) -> bool {
        matches!(self, View::SignIn | View::SignUp)
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let session = use_session();
    let view = use_state(|| View::Home);

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |next: View| view.set(next))
    };

    // Guard central: vistas protegidas sin sesión caen a SignIn; las
    // pantallas de auth con sesión ya iniciada caen a Home.
    let requested = (*view).clone();
    let effective = if requested.is_public() {
        requested
    } else if requested.is_auth_screen() {
        if session.is_authenticated() {
            View::Home
        } else {
            requested
        }
    } else if session.is_authenticated() {
        requested
    } else {
        View::SignIn
    };

    let back_to_my_terrains = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(View::MyTerrains))
    };
    let back_to_detail = |terrain_id: u64| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(View::TerrainDetail(terrain_id)))
    };

    let body = match effective.clone() {
        View::Home => html! { <Home on_navigate={on_navigate.clone()} /> },
        View::SignIn => html! { <SignIn on_navigate={on_navigate.clone()} /> },
        View::SignUp => html! { <SignUp on_navigate={on_navigate.clone()} /> },
        View::MyTerrains => html! { <MyTerrains on_navigate={on_navigate.clone()} /> },
        View::CreateTerrain => html! {
            <TerrainFormView on_done={back_to_my_terrains.clone()} />
        },
        View::EditTerrain(id) => html! {
            <TerrainFormView terrain_id={id} on_done={back_to_my_terrains.clone()} />
        },
        View::TerrainDetail(id) => html! {
            <TerrainDetail terrain_id={id} on_navigate={on_navigate.clone()} />
        },
        View::AddCrop(terrain_id) => html! {
            <CropFormView terrain_id={terrain_id} on_done={back_to_detail(terrain_id)} />
        },
        View::EditCrop { terrain_id, crop } => html! {
            <CropFormView
                terrain_id={terrain_id}
                crop={crop}
                on_done={back_to_detail(terrain_id)}
            />
        },
    };

    html! {
        <>
            if !effective.is_auth_screen() {
                <Navbar on_navigate={on_navigate.clone()} />
            }
            { body }
        </>
    }
}
