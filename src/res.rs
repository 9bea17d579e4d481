use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

pub const ENTRY_DOCUMENT: &str = "index.html";

/// Files under `public_dir`, with the entry document served for any path that
/// is not a file so client-side routes such as `/mob/...` resolve.
pub fn assets(public_dir: impl AsRef<Path>) -> ServeDir<ServeFile> {
    let public_dir = public_dir.as_ref();
    ServeDir::new(public_dir)
        .fallback(ServeFile::new(public_dir.join(ENTRY_DOCUMENT)))
}
