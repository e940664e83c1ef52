use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use reqwest::{Client, Url};
use tokio::sync::Mutex;

use super::{RemoteError, SCOPE, check_response};
use crate::{
    config::{SpotifyEndpoints, SpotifySettings},
    report::Reporter,
    server::start_callback_server,
    types::{CallbackOutcome, PendingAuth, Session, TokenResponse},
    utils,
};

/// Longest time to wait for the user to finish the browser step.
pub const AUTH_TIMEOUT_SECS: u64 = 120;

/// Runs the authorization code flow and returns an authorized session.
///
/// 1. Generates a PKCE verifier/challenge pair and a random `state`
/// 2. Binds the callback server on the host and port of the redirect URL
/// 3. Opens the authorize page in the browser (or prints the URL)
/// 4. Waits for the callback, at most [`AUTH_TIMEOUT_SECS`]
/// 5. Exchanges the code for an access token
///
/// The callback server is stopped before returning, whatever the outcome.
///
/// # Errors
///
/// Any rejection along the way: an unusable redirect URL, a port that cannot
/// be bound, the user denying access, a forged callback, a timeout, or the
/// token endpoint refusing the credentials.
pub async fn authorize(
    http: &Client,
    endpoints: &SpotifyEndpoints,
    credentials: &SpotifySettings,
    reporter: &dyn Reporter,
) -> Result<Session, RemoteError> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let state = utils::generate_state();

    let redirect = Url::parse(&credentials.redirect_url)
        .map_err(|e| RemoteError::InvalidRedirect(format!("{}: {}", credentials.redirect_url, e)))?;
    let addr = utils::callback_addr(&redirect).map_err(RemoteError::InvalidRedirect)?;

    let shared_state = Arc::new(Mutex::new(PendingAuth::new(state.clone())));
    let server = start_callback_server(addr, redirect.path(), Arc::clone(&shared_state))
        .await
        .map_err(|e| RemoteError::Server(format!("cannot listen on {}: {}", addr, e)))?;

    let auth_url = authorize_url(endpoints, credentials, &code_challenge, &state)?;

    reporter.info("Waiting for Spotify authorization in the browser...");
    if webbrowser::open(auth_url.as_str()).is_err() {
        reporter.warning(&format!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        ));
    }

    let outcome = wait_for_callback(&shared_state, Duration::from_secs(AUTH_TIMEOUT_SECS)).await;
    server.abort();

    let code = match outcome {
        Some(CallbackOutcome::Code(code)) => code,
        Some(CallbackOutcome::Denied(reason)) => return Err(RemoteError::Denied(reason)),
        Some(CallbackOutcome::StateMismatch) => return Err(RemoteError::StateMismatch),
        None => return Err(RemoteError::Timeout(AUTH_TIMEOUT_SECS)),
    };

    let session = exchange_code(http, endpoints, credentials, &code, &code_verifier).await?;

    match session.expires_at() {
        Some(expires_at) => reporter.success(&format!(
            "Authenticated with scope '{}', valid until {}.",
            session.scope(),
            expires_at.format("%H:%M:%S UTC")
        )),
        None => reporter.success("Authentication successful!"),
    }

    Ok(session)
}

/// Builds the Spotify authorize URL with properly encoded parameters.
pub fn authorize_url(
    endpoints: &SpotifyEndpoints,
    credentials: &SpotifySettings,
    code_challenge: &str,
    state: &str,
) -> Result<Url, RemoteError> {
    Url::parse_with_params(
        &endpoints.auth_url,
        &[
            ("client_id", credentials.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", credentials.redirect_url.as_str()),
            ("code_challenge_method", "S256"),
            ("code_challenge", code_challenge),
            ("state", state),
            ("scope", SCOPE),
        ],
    )
    .map_err(|e| RemoteError::Server(format!("invalid authorize URL {}: {}", endpoints.auth_url, e)))
}

async fn wait_for_callback(
    shared_state: &Arc<Mutex<PendingAuth>>,
    max_wait: Duration,
) -> Option<CallbackOutcome> {
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(outcome) = &lock.outcome {
            return Some(outcome.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges the authorization code for an access token.
///
/// The client authenticates with its id and secret (HTTP basic auth) and
/// proves possession of the PKCE verifier.
pub async fn exchange_code(
    http: &Client,
    endpoints: &SpotifyEndpoints,
    credentials: &SpotifySettings,
    code: &str,
    verifier: &str,
) -> Result<Session, RemoteError> {
    let response = http
        .post(&endpoints.token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", credentials.redirect_url.as_str()),
            ("code_verifier", verifier),
        ])
        .send()
        .await?;

    let token = check_response(response)
        .await?
        .json::<TokenResponse>()
        .await?;

    Ok(Session::new(token.into()))
}
