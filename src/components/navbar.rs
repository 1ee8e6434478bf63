use yew::prelude::*;

use crate::components::app::View;
use crate::components::delete_account_modal::DeleteAccountModal;
use crate::hooks::use_session;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_navigate: Callback<View>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let session = use_session();
    let menu_open = use_state(|| false);
    let show_delete_account = use_state(|| false);

    let nav = |view: View| {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_e: MouseEvent| {
            menu_open.set(false);
            on_navigate.emit(view.clone());
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_e: MouseEvent| menu_open.set(!*menu_open))
    };

    let logout_click = {
        let session = session.clone();
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_e: MouseEvent| {
            menu_open.set(false);
            session.logout.emit(());
            on_navigate.emit(View::SignIn);
        })
    };

    let open_delete_account = {
        let show_delete_account = show_delete_account.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_e: MouseEvent| {
            menu_open.set(false);
            show_delete_account.set(true);
        })
    };
    let close_delete_account = {
        let show_delete_account = show_delete_account.clone();
        Callback::from(move |_| show_delete_account.set(false))
    };

    let user_menu = if let Some(identity) = session.identity() {
        html! {
            <div class="user-menu">
                <button class="btn-avatar" onclick={toggle_menu}>
                    {identity.email.clone()}
                </button>
                if *menu_open {
                    <div class="menu-dropdown">
                        <button class="menu-item" onclick={logout_click}>
                            {"Cerrar Sesión"}
                        </button>
                        <button class="menu-item" onclick={open_delete_account}>
                            {"Eliminar mi cuenta"}
                        </button>
                    </div>
                }
            </div>
        }
    } else {
        html! {
            <button class="btn-primary" onclick={nav(View::SignIn)}>
                {"Iniciar Sesión"}
            </button>
        }
    };

    html! {
        <nav class="navbar">
            <button class="navbar-brand" onclick={nav(View::Home)}>
                {"🌱 GestorVerde"}
            </button>
            <div class="navbar-links">
                if session.is_authenticated() {
                    <button class="nav-link" onclick={nav(View::MyTerrains)}>
                        {"Mis Terrenos"}
                    </button>
                    <button class="nav-link" onclick={nav(View::CreateTerrain)}>
                        {"Agregar Terreno"}
                    </button>
                }
            </div>
            { user_menu }
            <DeleteAccountModal
                open={*show_delete_account}
                on_close={close_delete_account}
            />
        </nav>
    }
}
