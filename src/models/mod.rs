pub mod auth;
pub mod crop;
pub mod seed_type;
pub mod terrain;

pub use auth::{AuthResponse, SignInData, SignUpData, TokenPayload, UserIdentity};
pub use crop::{Crop, CropForm, CropRequest};
pub use seed_type::SeedType;
pub use terrain::{ImageSource, SoilType, Terrain, TerrainForm, TerrainPage, TerrainRequest};
