use web_sys::{window, Storage};

use crate::utils::constants::TOKEN_STORAGE_KEY;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Persiste el token crudo (sin serializar: es el único estado durable del cliente)
pub fn save_token(token: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(TOKEN_STORAGE_KEY, token)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn load_token() -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(TOKEN_STORAGE_KEY).ok()?
}

pub fn remove_token() -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(TOKEN_STORAGE_KEY)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}
