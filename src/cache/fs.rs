use std::path::PathBuf;

/// Filesystem source lookup mapping a slug to `<root>/<slug>.gif`.
///
/// Slugs must be bare names: anything containing a path separator or `..`
/// is rejected so lookups cannot escape the store root. A missing file is
/// an expected outcome, not an error.
#[derive(Clone, Debug)]
pub struct GifStore {
    root: PathBuf,
}

impl GifStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Raw bytes for `slug`, or `None` when no such asset exists.
    #[tracing::instrument(skip(self))]
    pub fn bytes_for(&self, slug: &str) -> Option<Vec<u8>> {
        if slug.is_empty() || slug.contains(['/', '\\']) || slug.contains("..") {
            tracing::warn!(slug, "rejected gif store slug");
            return None;
        }
        std::fs::read(self.root.join(format!("{slug}.gif"))).ok()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cache/fs.rs"]
mod tests;
