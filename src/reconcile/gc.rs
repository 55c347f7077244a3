//! Garbage collection of unreferenced backends.

use std::collections::HashSet;

use crate::proxy::ProxyClient;
use crate::reconcile::ReconcileError;

/// Delete every configured backend whose name is not in `active`.
///
/// Returns whether anything was deleted (a reload is then required).
/// A failed backend listing abandons collection for this pass.
pub fn clear_backends(
    client: &mut dyn ProxyClient,
    active: &HashSet<String>,
) -> Result<bool, ReconcileError> {
    let backends = match client.list_backends() {
        Ok(backends) => backends,
        Err(err) => {
            tracing::warn!(error = %err, "Listing backends failed, skipping backend cleanup");
            return Ok(false);
        }
    };

    let mut needs_reload = false;
    for backend in backends {
        if active.contains(&backend.name) {
            continue;
        }
        tracing::debug!(backend = %backend.name, "Deleting unreferenced backend");
        client
            .delete_backend(&backend.name)
            .map_err(|source| ReconcileError::BackendDelete {
                backend: backend.name.clone(),
                source,
            })?;
        needs_reload = true;
    }
    Ok(needs_reload)
}
