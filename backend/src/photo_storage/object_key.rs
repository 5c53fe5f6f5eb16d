//! Object key generation for uploaded photos

use uuid::Uuid;

/// Folder holding supervisor photos
pub const SUPERVISOR_PHOTO_PREFIX: &str = "supervisors";

/// Returns the extension of `file_name`, including the leading dot.
///
/// Only the last path segment is inspected and leading dots are not treated
/// as separators, so `.bashrc` has no extension while `photo.` yields `"."`.
#[must_use]
pub fn file_extension(file_name: &str) -> &str {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let stem = base.trim_start_matches('.');

    stem.rfind('.').map_or("", |idx| &stem[idx..])
}

/// Builds a fresh key `<prefix>/<uuid><ext>` for an upload.
///
/// Nothing from the declared name except its extension reaches the key.
#[must_use]
pub fn generate_object_key(prefix: &str, declared_file_name: &str) -> String {
    format!(
        "{prefix}/{}{}",
        Uuid::new_v4(),
        file_extension(declared_file_name)
    )
}
