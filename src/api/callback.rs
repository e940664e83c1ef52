use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::types::{CallbackOutcome, PendingAuth};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<PendingAuth>>>,
) -> Html<&'static str> {
    let mut pending = shared_state.lock().await;

    if pending.outcome.is_some() {
        return Html("<h4>Authorization already handled.</h4>");
    }

    if params.get("state") != Some(&pending.expected_state) {
        pending.outcome = Some(CallbackOutcome::StateMismatch);
        return Html("<h4>Login failed: state mismatch.</h4>");
    }

    if let Some(error) = params.get("error") {
        pending.outcome = Some(CallbackOutcome::Denied(error.clone()));
        return Html("<h4>Login failed.</h4>");
    }

    match params.get("code") {
        Some(code) => {
            pending.outcome = Some(CallbackOutcome::Code(code.clone()));
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        None => Html("<h4>Missing authorization code.</h4>"),
    }
}
