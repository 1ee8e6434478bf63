/// Clave única de localStorage donde se persiste el token crudo.
/// Su presencia implica "posiblemente autenticado"; su ausencia, anónimo.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Tamaño de página usado en los listados de terrenos
pub const PAGE_SIZE: u32 = 6;

/// Área máxima aceptada para terrenos y cultivos, en hectáreas
pub const MAX_AREA: u32 = 50;
