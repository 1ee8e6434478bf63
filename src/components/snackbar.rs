use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Notificación transitoria de resultado de una operación CRUD
#[derive(Clone, PartialEq, Debug)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Error,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SnackbarProps {
    pub notification: Option<Notification>,
    pub on_close: Callback<()>,
}

#[function_component(Snackbar)]
pub fn snackbar(props: &SnackbarProps) -> Html {
    // Auto-descarte a los 5 segundos; cerrar un snackbar ya cerrado es no-op
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.notification.clone(), move |notification| {
            if notification.is_some() {
                Timeout::new(5_000, move || on_close.emit(())).forget();
            }
            || ()
        });
    }

    let Some(notification) = &props.notification else {
        return html! {};
    };

    let class = match notification.severity {
        Severity::Success => "snackbar snackbar-success",
        Severity::Error => "snackbar snackbar-error",
    };
    let close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    html! {
        <div class={class}>
            <span class="snackbar-message">{&notification.message}</span>
            <button class="btn-close" onclick={close_click}>{"✕"}</button>
        </div>
    }
}
