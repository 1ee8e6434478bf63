use thiserror::Error;

/// Fallos asincrónicos del cliente, separados por origen.
///
/// Los errores de validación de formularios NO pasan por aquí: son locales,
/// por campo, y nunca llegan a la red (ver `utils::validation`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No se pudo enviar la petición o no hubo respuesta.
    #[error("Error de red: {0}")]
    Network(String),

    /// El servidor respondió con un error de aplicación.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// La respuesta llegó pero no tiene la forma esperada.
    #[error("Respuesta inválida del servidor: {0}")]
    Parse(String),

    /// Falló la subida de imagen al host de assets. Fatal para el envío
    /// que la contenía: nunca se crea una entidad parcial.
    #[error("Error al cargar la imagen: {0}")]
    Upload(String),
}

impl ApiError {
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }
}
