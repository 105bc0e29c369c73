//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Whether the stores are loaded with the sample records at startup
pub const DEFAULT_SEED_DATA: bool = true;

// =============================================================================
// Entity kinds (used in not-found messages)
// =============================================================================

pub const KIND_PET: &str = "pet";
pub const KIND_ORDER: &str = "order";
pub const KIND_USER: &str = "user";

// =============================================================================
// Messages
// =============================================================================

/// Returned by a successful login
pub const LOGIN_SUCCESS: &str = "Logged in successfully";

/// Returned by logout (no session is tracked)
pub const LOGOUT_SUCCESS: &str = "Logged out successfully";

/// Request body could not be deserialized
pub const INVALID_REQUEST_BODY: &str = "Invalid object received on the request body";

/// Tag filter called without any tag names
pub const EMPTY_TAG_LIST: &str = "Tag names list must not be empty";

/// `type` field of form-update and upload responses
pub const API_RESPONSE_TYPE: &str = "unknown";

// =============================================================================
// Validation
// =============================================================================

/// Minimum length for names, usernames and tag/category names
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum length for names, usernames and tag/category names
pub const MAX_NAME_LENGTH: usize = 30;

/// Characters accepted as the mandatory special character of a password
pub const PASSWORD_SPECIAL_CHARS: &str = "@#$%^&+-=()!*";

/// Password length bounds (inclusive)
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 20;

/// Romanian landline, mobile and special-service numbers
pub const PHONE_PATTERN: &str =
    r"^(00|\+?40|0)(7\d{2}|\d{2}[13]|[2-37]\d|8[02-9]|9[0-2])\s?\d{3}\s?\d{3}$";
