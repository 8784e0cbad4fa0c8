use once_cell::sync::Lazy;
use pkg_constants::naming::{DISALLOWED_CHARS_PATTERN, PATH_SEPARATOR, SUFFIX_SEPARATOR};
use regex::Regex;
use tracing::trace;

use crate::kebab::kebab_case;

static DISALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DISALLOWED_CHARS_PATTERN).expect("disallowed-chars pattern is a valid regex")
});

/// Turn an arbitrary string (filename, hostname, identifier) into a
/// resource name: lowercase `[a-z0-9-]`, starting and ending with a letter.
///
/// The conversion is lossy and never fails. Inputs without any usable
/// letter come back empty; callers decide whether that is acceptable.
/// The result is not length-limited.
///
/// ```
/// use pkg_naming::sanitize_name;
///
/// assert_eq!(sanitize_name("/srv/apps/web_frontend.tar.gz"), "web-frontend");
/// assert_eq!(sanitize_name("123"), "");
/// ```
pub fn sanitize_name(name: &str) -> String {
    let stripped = strip_suffix(name);
    let base = basename(stripped);
    let lower = base.to_lowercase();
    let kebab = kebab_case(&lower);
    let allowed = DISALLOWED_CHARS.replace_all(&kebab, "");
    let sanitized = allowed.trim_matches(is_disallowed_start_end_char);

    trace!(input = name, output = sanitized, "sanitized name");
    sanitized.to_string()
}

/// Everything before the first `.`.
fn strip_suffix(name: &str) -> &str {
    name.split_once(SUFFIX_SEPARATOR)
        .map_or(name, |(head, _)| head)
}

/// Last `/`-separated segment, ignoring trailing separators.
fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(PATH_SEPARATOR);
    trimmed
        .rsplit_once(PATH_SEPARATOR)
        .map_or(trimmed, |(_, base)| base)
}

/// Names may neither start nor end with anything but a letter.
fn is_disallowed_start_end_char(c: char) -> bool {
    !c.is_alphabetic()
}
