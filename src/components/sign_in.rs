use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::app::View;
use crate::hooks::use_session;
use crate::models::auth::SignInData;
use crate::utils::validation::is_valid_email;

#[derive(Properties, PartialEq)]
pub struct SignInProps {
    pub on_navigate: Callback<View>,
}

#[function_component(SignIn)]
pub fn sign_in(props: &SignInProps) -> Html {
    let session = use_session();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let email_error = use_state(|| None::<String>);

    // Un error de un intento anterior no debe quedar pegado al entrar
    {
        let clear_error = session.clear_error.clone();
        use_effect_with((), move |_| {
            clear_error.emit(());
            || ()
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let email_error = email_error.clone();
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !is_valid_email(&email) {
                email_error.set(Some("El email no es valido!".to_string()));
                return;
            }
            if password.is_empty() {
                return;
            }
            email_error.set(None);

            session.sign_in.emit(SignInData {
                email: (*email).clone(),
                password: (*password).clone(),
            });
        })
    };

    let loading = session.is_loading();
    let go_sign_up = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(View::SignUp))
    };
    let go_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(View::Home))
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <h1>{"Iniciar Sesión"}</h1>
                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            value={(*email).clone()}
                            oninput={on_email}
                            required=true
                        />
                        if let Some(error) = (*email_error).clone() {
                            <span class="field-error">{error}</span>
                        }
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            maxlength="14"
                            value={(*password).clone()}
                            oninput={on_password}
                            required=true
                        />
                    </div>
                    <button type="submit" class="btn-primary" disabled={loading}>
                        { if loading { "Iniciando Sesión..." } else { "Iniciar Sesión" } }
                    </button>
                    if let Some(error) = session.error() {
                        <p class="auth-error">{error.to_string()}</p>
                    }
                </form>
                <div class="auth-links">
                    <button class="btn-link" onclick={go_sign_up}>
                        {"¿No tienes una cuenta? Creala aquí!"}
                    </button>
                    <button class="btn-link" onclick={go_home}>
                        {"Volver al inicio"}
                    </button>
                </div>
            </div>
        </div>
    }
}
