use percent_encoding::percent_decode_str;

/// Decodes the percent-encoded service key issued by the open data portal.
///
/// The portal displays keys in both encoded and decoded form, and requests
/// must carry the decoded one. Decoding leaves an already-decoded key
/// unchanged, so callers may pass either form.
pub fn decode_service_key(key: &str) -> String {
    percent_decode_str(key).decode_utf8_lossy().into_owned()
}
