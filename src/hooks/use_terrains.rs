use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::error::ApiError;
use crate::models::terrain::Terrain;
use crate::services::ApiClient;
use crate::utils::constants::PAGE_SIZE;

/// Qué listado pedir: el público de terrenos en venta o el del dueño
#[derive(Clone, PartialEq)]
pub enum TerrainScope {
    All,
    Mine { email: String, token: String },
}

#[derive(Clone, PartialEq)]
pub struct UseTerrainsHandle {
    pub terrains: Vec<Terrain>,
    pub loading: bool,
    pub error: Option<ApiError>,
    /// Página visible, en base 1 (como la muestra la paginación)
    pub current_page: u32,
    pub total_pages: u32,
    pub fetch_page: Callback<u32>,
    pub refresh: Callback<()>,
}

/// Listado paginado de terrenos.
///
/// Cada petición lleva un número de secuencia; una respuesta que llega
/// cuando ya salió otra petición más nueva se descarta en vez de pisar la
/// página visible (las respuestas pueden llegar fuera de orden).
#[hook]
pub fn use_terrains(scope: TerrainScope) -> UseTerrainsHandle {
    let terrains = use_state(Vec::<Terrain>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<ApiError>);
    let page_info = use_state(|| (1u32, 1u32));
    let seq = use_mut_ref(|| 0u64);

    {
        let terrains = terrains.clone();
        let loading = loading.clone();
        let error = error.clone();
        let page_info = page_info.clone();
        let seq = seq.clone();
        use_effect_with(scope.clone(), move |scope| {
            spawn_fetch(scope.clone(), 0, terrains, loading, error, page_info, seq);
            || ()
        });
    }

    let fetch_page = {
        let scope = scope.clone();
        let terrains = terrains.clone();
        let loading = loading.clone();
        let error = error.clone();
        let page_info = page_info.clone();
        let seq = seq.clone();
        Callback::from(move |page: u32| {
            spawn_fetch(
                scope.clone(),
                page.saturating_sub(1),
                terrains.clone(),
                loading.clone(),
                error.clone(),
                page_info.clone(),
                seq.clone(),
            );
        })
    };

    let refresh = {
        let scope = scope.clone();
        let terrains = terrains.clone();
        let loading = loading.clone();
        let error = error.clone();
        let page_info = page_info.clone();
        let seq = seq.clone();
        Callback::from(move |_| {
            let current = page_info.0.saturating_sub(1);
            spawn_fetch(
                scope.clone(),
                current,
                terrains.clone(),
                loading.clone(),
                error.clone(),
                page_info.clone(),
                seq.clone(),
            );
        })
    };

    UseTerrainsHandle {
        terrains: (*terrains).clone(),
        loading: *loading,
        error: (*error).clone(),
        current_page: page_info.0,
        total_pages: page_info.1,
        fetch_page,
        refresh,
    }
}

fn spawn_fetch(
    scope: TerrainScope,
    page: u32,
    terrains: UseStateHandle<Vec<Terrain>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<ApiError>>,
    page_info: UseStateHandle<(u32, u32)>,
    seq: Rc<RefCell<u64>>,
) {
    let my_seq = {
        let mut latest = seq.borrow_mut();
        *latest += 1;
        *latest
    };
    loading.set(true);

    wasm_bindgen_futures::spawn_local(async move {
        let api = ApiClient::new();
        let result = match &scope {
            TerrainScope::All => api.fetch_terrains(page, PAGE_SIZE).await,
            TerrainScope::Mine { email, token } => {
                api.fetch_my_terrains(token, email, page, PAGE_SIZE).await
            }
        };

        // Llegó tarde: otra petición más nueva ya está en vuelo o resuelta
        if *seq.borrow() != my_seq {
            log::info!("⏭️ Respuesta de página obsoleta descartada");
            return;
        }

        match result {
            Ok(fetched) => {
                log::info!(
                    "📋 Terrenos obtenidos: {} (página {}/{})",
                    fetched.content.len(),
                    fetched.page_number + 1,
                    fetched.total_pages
                );
                page_info.set((fetched.page_number + 1, fetched.total_pages.max(1)));
                terrains.set(fetched.content);
                error.set(None);
            }
            Err(e) => {
                log::error!("❌ Error obteniendo terrenos: {}", e);
                error.set(Some(e));
            }
        }
        loading.set(false);
    });
}
