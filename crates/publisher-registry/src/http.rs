//! Shared HTTP response handling for the registry endpoints.
//!
//! Both endpoints read the whole body first so rejections can carry it
//! verbatim in [`RegistryError::Rejected`].

use crate::error::RegistryError;

/// Read a response body, failing with [`RegistryError::Rejected`] unless the
/// status is one of `accepted`.
pub async fn read_accepted(
    resp: reqwest::Response,
    accepted: &[u16],
) -> Result<Vec<u8>, RegistryError> {
    let status = resp.status().as_u16();
    let body = resp.bytes().await.map_err(RegistryError::Body)?;
    tracing::debug!(status, bytes = body.len(), "registry responded");

    if !accepted.contains(&status) {
        return Err(RegistryError::Rejected {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }
    Ok(body.to_vec())
}
