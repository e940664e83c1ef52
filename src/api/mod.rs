//! # API Module
//!
//! HTTP endpoints served by the temporary callback server during Spotify
//! authorization.
//!
//! - [`callback`] - Receives the redirect from Spotify's authorize page and
//!   records the authorization code, a denial, or a `state` mismatch in the
//!   shared [`PendingAuth`](crate::types::PendingAuth). The token exchange
//!   itself happens in [`crate::spotify::auth`] once the flow sees the code.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use anghami2spotify::api::callback;
//!
//! let app = Router::new().route("/callback", get(callback));
//! ```

mod callback;

pub use callback::callback;
