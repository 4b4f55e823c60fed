//! API-wide constants.

/// Path prefix for all routes.
pub const API_PREFIX: &str = "/api";

/// Service identifier reported by the health endpoint.
pub const HEALTH_SERVICE_NAME: &str = "Health Service";

/// Multipart form overhead allowed on top of the raw file budget when
/// sizing the request body limit.
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;
