use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of the random token in generated object keys.
pub const TOKEN_LENGTH: usize = 16;

/// Build a collision-resistant object key inside `folder`.
///
/// The caller-supplied filename contributes only its extension; the stored
/// name is a random alphanumeric token, so two uploads of `lecture.pdf`
/// never collide.
pub fn generate_object_key(folder: &str, filename: &str) -> String {
    let token: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect();

    match file_extension(filename) {
        Some(ext) => format!("{folder}/{token}.{ext}"),
        None => format!("{folder}/{token}"),
    }
}

/// Lower-cased extension of `filename`, if it has a usable one.
pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
