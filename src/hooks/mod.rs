pub mod session_context;
pub mod use_seed_types;
pub mod use_session;
pub mod use_terrains;

pub use session_context::{use_session, SessionProvider};
pub use use_seed_types::{use_seed_types, UseSeedTypesHandle};
pub use use_session::UseSessionHandle;
pub use use_terrains::{use_terrains, TerrainScope, UseTerrainsHandle};
