//! Well-known principal and authority names.

/// Principal name used for unauthenticated work.
pub const ANONYMOUS_PRINCIPAL: &str = "anonymousUser";

/// Authority granted to the anonymous principal.
pub const ANONYMOUS_AUTHORITY: &str = "Anonymous";

/// Principal name used for fully privileged internal work.
pub const SYSTEM_PRINCIPAL: &str = "admin";

/// Authority that marks a platform administrator.
pub const ADMINISTRATOR_AUTHORITY: &str = "Administrator";

/// Authority every known user receives in addition to its own roles.
pub const AUTHENTICATED_AUTHORITY: &str = "Authenticated";
