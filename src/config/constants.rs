//! Configuration constants.
//!
//! This module defines the fixed portal endpoints and operational defaults
//! used throughout the crate. The portal is a single fixed host with a known
//! set of PHP pages; none of these values are discovered at runtime.

/// Base URL of the student portal.
pub const BASE_URL: &str = "https://my.tiu.edu.iq";

/// Login endpoint (form-encoded POST to the portal root).
pub const LOGIN_ENDPOINT: &str = "/";
/// Profile/home page endpoint.
pub const HOME_ENDPOINT: &str = "/pages/home.php";
/// Logout endpoint. The trailing slash is what the portal expects.
pub const LOGOUT_ENDPOINT: &str = "/pages/p999.php/";
/// Course data endpoint.
pub const COURSES_ENDPOINT: &str = "/pages/p103.php";
/// Personal info endpoint.
pub const PERSONAL_INFO_ENDPOINT: &str = "/pages/p201.php";

/// Name of the session cookie issued by the portal on login.
pub const SESSION_COOKIE: &str = "PHPSESSID";

/// URL prefix of student photos on the home page.
pub const PHOTO_URL_PREFIX: &str = "https://my.tiu.edu.iq/myresim/";

/// URL prefix of info-board announcement links on the home page.
pub const INFO_BOARD_URL_PREFIX: &str = "https://my.tiu.edu.iq/pages/p401.php?id=";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// User-Agent sent with every request.
///
/// The portal serves its full page set to desktop browsers, so a fixed Chrome
/// string is used rather than a crate identifier.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";
