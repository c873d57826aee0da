pub mod session_state;
pub mod stored_user;
pub mod tenant;
