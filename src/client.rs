//! Portal session client.

use std::time::Duration;

use log::debug;
use reqwest::{ClientBuilder, Method, Response, StatusCode};
use url::Url;

use crate::config::constants::{
    COURSES_ENDPOINT, HOME_ENDPOINT, LOGIN_ENDPOINT, LOGOUT_ENDPOINT, PERSONAL_INFO_ENDPOINT,
    SESSION_COOKIE,
};
use crate::config::headers::apply_session_headers;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{CourseData, PersonalInfo, UserProfile};
use crate::parse;

/// Authenticated session against the TIU student portal.
///
/// Holds the session token (the `PHPSESSID` cookie value) and the profile
/// parsed at login. Each instance owns its session exclusively; there is no
/// shared or global session state, so two clients never leak tokens into
/// each other.
///
/// Every operation issues exactly one HTTP round trip (login issues two:
/// authenticate, then fetch the profile) and fails with
/// [`ClientError::RequestFailed`] on any connection error or non-success
/// status. Nothing is retried.
pub struct TiuClient {
    base_url: Url,
    http: reqwest::Client,
    sid: Option<String>,
    profile: UserProfile,
}

impl TiuClient {
    /// Creates a client with the default configuration (production portal
    /// host, 60 second timeout, no proxy).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the configured base URL
    /// does not parse, or [`ClientError::ClientBuild`] if the HTTP client
    /// cannot be constructed (e.g. a malformed proxy URL).
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)?;

        // Redirects stay off so the login response's Set-Cookie is the one
        // we read, not that of some page it forwards to.
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .redirect(reqwest::redirect::Policy::none());

        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy).map_err(ClientError::ClientBuild)?);
        }

        let http = builder.build().map_err(ClientError::ClientBuild)?;

        Ok(Self {
            base_url,
            http,
            sid: None,
            profile: UserProfile::default(),
        })
    }

    /// Issues a request against a portal endpoint.
    ///
    /// This is the primitive every operation builds on. The fixed portal
    /// header set is always attached, plus the session cookie when a token
    /// is held.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestFailed`] on connection errors, timeouts,
    /// and non-success HTTP statuses. There is no retry.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        form: Option<&[(&str, &str)]>,
        query: Option<&[(&str, &str)]>,
    ) -> Result<Response, ClientError> {
        let url = self.base_url.join(endpoint)?;
        debug!("{} {}", method, url);

        let mut builder = self.http.request(method, url);
        builder = apply_session_headers(builder, self.sid.as_deref());
        if let Some(query) = query {
            builder = builder.query(&query);
        }
        if let Some(form) = form {
            builder = builder.form(&form);
        }

        let response = builder.send().await?.error_for_status()?;
        // error_for_status only covers 4xx/5xx; with redirects off, an
        // unfollowed 3xx must fail the same way.
        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus(response.status()));
        }
        Ok(response)
    }

    /// Logs in with portal credentials.
    ///
    /// Submits the login form, stores the session token from the response's
    /// cookies, then fetches and parses the home page into [`profile`].
    /// Returns the login response status.
    ///
    /// The portal returns no distinct "bad credentials" signal; a rejected
    /// login surfaces as the same [`ClientError::RequestFailed`] as any other
    /// HTTP failure. On failure the stored token is left unchanged.
    ///
    /// [`profile`]: TiuClient::profile
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<StatusCode, ClientError> {
        let form = [
            ("username", username),
            ("password", password),
            ("login.x", "0"),
            ("login.y", "0"),
        ];

        let response = self
            .request(Method::POST, LOGIN_ENDPOINT, Some(&form), None)
            .await?;
        let status = response.status();

        self.sid = response
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string());
        match &self.sid {
            Some(_) => debug!("Login succeeded, session cookie captured"),
            None => debug!("Login response carried no session cookie"),
        }

        self.refresh_profile().await?;
        Ok(status)
    }

    /// Resumes a session from a previously saved token.
    ///
    /// The token is stored without validation, then the profile is fetched
    /// and parsed the same way as after a credential login. An invalid token
    /// only surfaces on the first request the portal rejects.
    pub async fn login_with_sid(&mut self, sid: impl Into<String>) -> Result<(), ClientError> {
        self.sid = Some(sid.into());
        self.refresh_profile().await
    }

    /// Ends the session on the portal and clears the local token and profile.
    ///
    /// The logout response body is not parsed. If the request itself fails,
    /// the error propagates and the token is kept, so the caller can decide
    /// whether to retry or persist it.
    pub async fn logout(&mut self) -> Result<StatusCode, ClientError> {
        let response = self.request(Method::GET, LOGOUT_ENDPOINT, None, None).await?;

        self.sid = None;
        self.profile = UserProfile::default();

        Ok(response.status())
    }

    /// Fetches and parses the course/grade table.
    pub async fn fetch_courses(&self) -> Result<CourseData, ClientError> {
        let response = self.request(Method::GET, COURSES_ENDPOINT, None, None).await?;
        let html = response.text().await?;
        Ok(parse::parse_courses(&html))
    }

    /// Fetches and parses the personal-info page.
    ///
    /// The parsed record is also stored on the held profile's
    /// `personal_info` field.
    pub async fn fetch_personal_info(&mut self) -> Result<PersonalInfo, ClientError> {
        let response = self
            .request(Method::GET, PERSONAL_INFO_ENDPOINT, None, None)
            .await?;
        let html = response.text().await?;

        let info = parse::parse_personal_info(&html);
        self.profile.personal_info = Some(info.clone());
        Ok(info)
    }

    /// Re-fetches the home page and replaces the stored profile.
    pub async fn refresh_profile(&mut self) -> Result<(), ClientError> {
        let response = self.request(Method::GET, HOME_ENDPOINT, None, None).await?;
        let html = response.text().await?;
        self.profile = parse::parse_user_profile(&html);
        Ok(())
    }

    /// The profile parsed from the most recent home-page fetch.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// The current session token, if logged in.
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}
