//! Paths inside the Zellij plugin sandbox.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory for trace output: `/host/.local/share/zellij/holocron`.
///
/// `/host` is usually the user's home directory, since Zellij maps it to the
/// folder it was started from.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local")
        .join("share")
        .join("zellij")
        .join(env!("CARGO_PKG_NAME"))
}

/// Rewrites a leading `~` to `/host` so user-supplied paths resolve inside
/// the sandbox.
///
/// ```
/// use holocron::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
