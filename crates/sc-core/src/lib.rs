pub mod models;

pub use models::session_state::{LoadPhase, SessionState};
pub use models::stored_user::StoredUser;
pub use models::tenant::Tenant;
