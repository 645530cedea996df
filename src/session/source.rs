use std::path::{Path, PathBuf};

use crate::{
    description::model::VideoDescription,
    foundation::error::{RewindError, RewindResult},
    session::request::RewindRequest,
};

/// Where video descriptions come from.
///
/// `Ok(None)` means the backend answered without data (a JSON `null`); the session
/// composes that into the placeholder timeline. Transport failures should be
/// [`RewindError::Fetch`] so that [`fetch_with_retry`](crate::fetch_with_retry) retries them.
pub trait DescriptionSource {
    /// Fetch the description answering `request`.
    fn fetch(&mut self, request: &RewindRequest) -> RewindResult<Option<VideoDescription>>;
}

impl<F> DescriptionSource for F
where
    F: FnMut(&RewindRequest) -> RewindResult<Option<VideoDescription>>,
{
    fn fetch(&mut self, request: &RewindRequest) -> RewindResult<Option<VideoDescription>> {
        self(request)
    }
}

#[derive(Clone, Debug)]
/// Serves a description stored as JSON on disk, whatever the request.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source reading `path` on every fetch.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DescriptionSource for JsonFileSource {
    fn fetch(&mut self, request: &RewindRequest) -> RewindResult<Option<VideoDescription>> {
        tracing::debug!(path = %self.path.display(), game_id = %request.game_id, "reading description");
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            RewindError::fetch(format!("read '{}': {e}", self.path.display()))
        })?;
        serde_json::from_str(&text)
            .map_err(|e| RewindError::serde(format!("'{}': {e}", self.path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/source.rs"]
mod tests;
