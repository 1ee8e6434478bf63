use yew::prelude::*;

use crate::models::seed_type::SeedType;
use crate::services::ApiClient;

#[derive(Clone, PartialEq)]
pub struct UseSeedTypesHandle {
    pub seed_types: Vec<SeedType>,
    pub loading: bool,
}

/// Catálogo de tipos de semilla, cargado una vez al montar
#[hook]
pub fn use_seed_types(token: Option<String>) -> UseSeedTypesHandle {
    let seed_types = use_state(Vec::<SeedType>::new);
    let loading = use_state(|| true);

    {
        let seed_types = seed_types.clone();
        let loading = loading.clone();
        use_effect_with(token, move |token| {
            if let Some(token) = token.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match ApiClient::new().fetch_seed_types(&token).await {
                        Ok(fetched) => {
                            log::info!("🌾 Tipos de semilla cargados: {}", fetched.len());
                            seed_types.set(fetched);
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando tipos de semilla: {}", e);
                        }
                    }
                    loading.set(false);
                });
            } else {
                loading.set(false);
            }
            || ()
        });
    }

    UseSeedTypesHandle {
        seed_types: (*seed_types).clone(),
        loading: *loading,
    }
}
