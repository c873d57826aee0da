//! Well-known keys for session data.

/// Presence of a non-empty value under this key means "authenticated".
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Cached user record, JSON-encoded.
pub const USER_KEY: &str = "user";

/// Cached tenant record, JSON-encoded.
pub const TENANT_KEY: &str = "tenant";
