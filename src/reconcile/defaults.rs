//! Default-backend updates for the entry frontends.

use crate::proxy::{ProxyClient, ProxyError};

/// Set `backend` as the fallback target of both entry frontends.
///
/// Best-effort: a failure on one frontend is remembered but the other
/// is still attempted. Returns the last error encountered, if any.
pub fn set_default_backend(
    client: &mut dyn ProxyClient,
    entry_http: &str,
    entry_https: &str,
    backend: &str,
) -> Result<(), ProxyError> {
    let mut last_err = None;
    for name in [entry_http, entry_https] {
        let outcome = match client.get_frontend(name) {
            Ok(mut frontend) => {
                frontend.default_backend = backend.to_owned();
                client.update_frontend(frontend)
            }
            Err(err) => Err(err),
        };
        if let Err(err) = outcome {
            tracing::warn!(frontend = name, error = %err, "Failed to update default backend");
            last_err = Some(err);
        }
    }
    match last_err {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
