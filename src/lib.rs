// ============================================================================
// GESTOR VERDE - Cliente web de gestión de terrenos y cultivos (Rust/WASM)
// ============================================================================
// - components: vistas y formularios (Yew)
// - hooks: estado compartido (sesión, listados paginados, catálogos)
// - services: SOLO comunicación HTTP (backend y host de imágenes)
// - stores: máquina de estados de la sesión
// - models: estructuras compartidas con el backend
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
