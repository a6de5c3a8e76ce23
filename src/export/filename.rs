//! Output filename generation.

use chrono::NaiveDateTime;
use unicode_normalization::UnicodeNormalization;

/// Default prefix for exported files.
pub const DEFAULT_PREFIX: &str = "netbox_contacts";

/// Timestamp layout embedded in filenames.
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Lowercase, hyphen-separated, filesystem and URL safe form of `value`.
///
/// Accented letters are folded to ASCII first (NFKD, then anything still
/// non-ASCII is dropped), so "Müller" keeps its letters as "muller". Runs of
/// anything other than ASCII letters and digits then collapse into a single
/// hyphen; leading and trailing hyphens are removed.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for c in value.nfkd().filter(char::is_ascii) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// `<prefix>_<slug>_<YYYYMMDD_HHMMSS>.vcf`
///
/// A group name with nothing slug-worthy in it is written as `group`.
pub fn generate_filename(prefix: &str, group_name: &str, at: NaiveDateTime) -> String {
    let slug = slugify(group_name);
    let slug = if slug.is_empty() { "group" } else { slug.as_str() };
    format!(
        "{}_{}_{}.vcf",
        prefix,
        slug,
        at.format(FILENAME_TIMESTAMP_FORMAT)
    )
}
