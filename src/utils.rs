use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use reqwest::Url;
use sha2::{Digest, Sha256};

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn generate_code_verifier() -> String {
    random_alphanumeric(128)
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

pub fn generate_state() -> String {
    random_alphanumeric(32)
}

/// Socket address the OAuth callback server has to listen on for `redirect`.
///
/// Only literal IPs and `localhost` are accepted; the redirect has to land on
/// this machine.
pub fn callback_addr(redirect: &Url) -> Result<SocketAddr, String> {
    let host = redirect
        .host_str()
        .ok_or_else(|| format!("redirect URL {} has no host", redirect))?;

    let ip = if host.eq_ignore_ascii_case("localhost") {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    } else {
        host.trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .map_err(|_| format!("redirect host {} is not a local address", host))?
    };

    let port = redirect
        .port_or_known_default()
        .ok_or_else(|| format!("redirect URL {} has no port", redirect))?;

    Ok(SocketAddr::new(ip, port))
}
