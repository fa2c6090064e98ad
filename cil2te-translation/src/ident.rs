//! Identifier normalization shared by every translation stage.

/// Strip the trailing versioning suffix from an identifier.
///
/// CIL emitted by the Android build system tags identifiers with one or more
/// `_<digits>` groups (`httpd_t_1_0`); TE sources use the bare name. The
/// suffix is anchored at the end of the token, so embedded digits survive
/// (`netd_v2ray` is untouched). Total over all strings and idempotent.
pub fn strip_version_suffix(name: &str) -> &str {
    let bytes = name.as_bytes();
    let mut end = name.len();
    loop {
        let mut cursor = end;
        while cursor > 0 && bytes[cursor - 1].is_ascii_digit() {
            cursor -= 1;
        }
        // Need at least one digit and a leading underscore to call it a suffix group.
        if cursor == end || cursor == 0 || bytes[cursor - 1] != b'_' {
            break;
        }
        end = cursor - 1;
    }
    &name[..end]
}
