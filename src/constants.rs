/// Subsonic REST API version announced with every request
pub const API_VERSION: &str = "1.13.0";

/// Client name sent as the `c` parameter
pub const CLIENT_NAME: &str = "subsonic-plugin";

/// Path segment below which the REST methods live
pub const REST_PATH: &str = "rest";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Page size used when walking album lists
pub const ALBUM_LIST_PAGE_SIZE: u32 = 500;

/// Upper bound on the pages fetched for one album list walk
pub const ALBUM_LIST_MAX_PAGES: u32 = 40;

/// Label used when the server does not send a name or title
pub const UNKNOWN_LABEL: &str = "<Unknown>";
