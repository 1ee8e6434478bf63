use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::app::View;
use crate::hooks::use_session;
use crate::models::auth::SignUpData;
use crate::utils::validation::{digits_only, is_valid_email, letters_only};

#[derive(Properties, PartialEq)]
pub struct SignUpProps {
    pub on_navigate: Callback<View>,
}

#[derive(Clone, PartialEq, Default)]
struct SignUpErrors {
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

fn validate(data: &SignUpData) -> SignUpErrors {
    let name_error = |value: &str| {
        if value.chars().count() < 3 {
            Some("El nombre debe tener al menos 3 caracteres.".to_string())
        } else {
            None
        }
    };
    SignUpErrors {
        first_name: name_error(&data.first_name),
        last_name: name_error(&data.last_name),
        phone: if data.phone.is_empty() {
            Some("El teléfono es requerido".to_string())
        } else {
            None
        },
        email: if is_valid_email(&data.email) {
            None
        } else {
            Some("El email no es valido!".to_string())
        },
        password: if data.password.is_empty() {
            Some("Password es requerido".to_string())
        } else {
            None
        },
    }
}

impl SignUpErrors {
    fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.password.is_none()
    }
}

#[function_component(SignUp)]
pub fn sign_up(props: &SignUpProps) -> Html {
    let session = use_session();
    let data = use_state(SignUpData::default);
    let errors = use_state(SignUpErrors::default);

    {
        let clear_error = session.clear_error.clone();
        use_effect_with((), move |_| {
            clear_error.emit(());
            || ()
        });
    }

    // Cada campo filtra su entrada al tipear; el submit vuelve a validar
    let edit = |apply: fn(&mut SignUpData, String)| {
        let data = data.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*data).clone();
                apply(&mut next, input.value());
                data.set(next);
            }
        })
    };
    let on_first_name = edit(|d, v| d.first_name = letters_only(&v));
    let on_last_name = edit(|d, v| d.last_name = letters_only(&v));
    let on_phone = edit(|d, v| d.phone = digits_only(&v));
    let on_email = edit(|d, v| d.email = v);
    let on_password = edit(|d, v| d.password = v);

    let on_submit = {
        let data = data.clone();
        let errors = errors.clone();
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let validation = validate(&data);
            if !validation.is_empty() {
                errors.set(validation);
                return;
            }
            errors.set(SignUpErrors::default());
            session.sign_up.emit((*data).clone());
        })
    };

    let loading = session.is_loading();
    let go_sign_in = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(View::SignIn))
    };

    let field_error = |error: &Option<String>| match error {
        Some(message) => html! { <span class="field-error">{message.clone()}</span> },
        None => html! {},
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <h1>{"Crear Cuenta"}</h1>
                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="first-name">{"Nombre"}</label>
                            <input
                                type="text"
                                id="first-name"
                                value={data.first_name.clone()}
                                oninput={on_first_name}
                                required=true
                            />
                            { field_error(&errors.first_name) }
                        </div>
                        <div class="form-group">
                            <label for="last-name">{"Apellido"}</label>
                            <input
                                type="text"
                                id="last-name"
                                value={data.last_name.clone()}
                                oninput={on_last_name}
                                required=true
                            />
                            { field_error(&errors.last_name) }
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="phone">{"Teléfono"}</label>
                        <input
                            type="tel"
                            id="phone"
                            value={data.phone.clone()}
                            oninput={on_phone}
                            required=true
                        />
                        { field_error(&errors.phone) }
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            value={data.email.clone()}
                            oninput={on_email}
                            required=true
                        />
                        { field_error(&errors.email) }
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            maxlength="14"
                            value={data.password.clone()}
                            oninput={on_password}
                            required=true
                        />
                        { field_error(&errors.password) }
                    </div>
                    <button type="submit" class="btn-primary" disabled={loading}>
                        { if loading { "Creando Cuenta..." } else { "Crear Cuenta" } }
                    </button>
                    if let Some(error) = session.error() {
                        <p class="auth-error">{error.to_string()}</p>
                    }
                </form>
                <div class="auth-links">
                    <button class="btn-link" onclick={go_sign_in}>
                        {"¿Ya tienes una cuenta? Inicia sesión"}
                    </button>
                </div>
            </div>
        </div>
    }
}
