//! Loading `server.json` from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use publisher_core::ServerDescriptor;

use crate::error::CommandError;

/// Read and parse a `server.json` file.
///
/// No network access happens here; a failure is reported before any request.
pub fn load(path: &Path) -> Result<ServerDescriptor, CommandError> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            CommandError::DescriptorNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CommandError::DescriptorRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    ServerDescriptor::from_slice(&bytes).map_err(|source| CommandError::InvalidDescriptor {
        path: path.to_path_buf(),
        source,
    })
}
