//! Resource-name constants.

/// Maximum length of a resource name (DNS-1123 label).
pub const MAX_NAME_LEN: usize = 63;

/// Characters that never survive sanitization. Anything outside
/// lowercase ASCII letters, digits and the hyphen.
pub const DISALLOWED_CHARS_PATTERN: &str = "[^a-z0-9-]";

/// Separator placed between words by kebab-case conversion.
pub const WORD_DELIMITER: char = '-';

/// Separator of file-extension-like suffixes, stripped before anything else.
pub const SUFFIX_SEPARATOR: char = '.';

/// Path separator used when taking the basename of an input.
pub const PATH_SEPARATOR: char = '/';
