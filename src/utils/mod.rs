pub mod constants;
pub mod jwt;
pub mod storage;
pub mod validation;

pub use constants::{MAX_AREA, PAGE_SIZE, TOKEN_STORAGE_KEY};
pub use jwt::decode_token_payload;
pub use storage::{load_token, remove_token, save_token};
