//! Project field catalogue, validation rules, and slug derivation.
//!
//! Every rule the store enforces on a project lives here so the admin
//! handlers, the seed fixtures, and the repository agree on one definition.

use serde::{Serialize, Serializer};

use crate::error::{CoreError, FieldError};

/// Entity name used in `NotFound` errors and log lines.
pub const ENTITY: &str = "Project";

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

pub const MAX_TITLE_LEN: usize = 120;
pub const MAX_SLUG_LEN: usize = 50;
pub const MAX_URL_LEN: usize = 200;
pub const MAX_IMAGE_LEN: usize = 100;
pub const MAX_TAGS_LEN: usize = 250;

/// Path namespace for uploaded project images.
pub const IMAGE_UPLOAD_DIR: &str = "projects/";

/// URL schemes accepted by [`validate_url`].
pub const URL_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

const REQUIRED: &str = "This field is required.";

// ---------------------------------------------------------------------------
// Field catalogue
// ---------------------------------------------------------------------------

/// Every stored attribute of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Id,
    Title,
    Slug,
    Description,
    Url,
    Image,
    Tags,
    Featured,
    CreatedAt,
}

impl ProjectField {
    /// Column name in the `projects` table, also the JSON key.
    pub const fn name(self) -> &'static str {
        match self {
            ProjectField::Id => "id",
            ProjectField::Title => "title",
            ProjectField::Slug => "slug",
            ProjectField::Description => "description",
            ProjectField::Url => "url",
            ProjectField::Image => "image",
            ProjectField::Tags => "tags",
            ProjectField::Featured => "featured",
            ProjectField::CreatedAt => "created_at",
        }
    }
}

/// Field order of the public read projection.
pub const SERIALIZED_FIELDS: &[ProjectField] = &[
    ProjectField::Id,
    ProjectField::Title,
    ProjectField::Slug,
    ProjectField::Description,
    ProjectField::Url,
    ProjectField::Image,
    ProjectField::Tags,
    ProjectField::Featured,
    ProjectField::CreatedAt,
];

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Sort order for project listings.
///
/// Parsed from the `-field` / `field` convention used by the admin `o=`
/// parameter and the read API `ordering=` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectOrdering {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl ProjectOrdering {
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.trim() {
            "" | "-created_at" => Ok(Self::Newest),
            "created_at" => Ok(Self::Oldest),
            "title" => Ok(Self::TitleAsc),
            "-title" => Ok(Self::TitleDesc),
            other => Err(CoreError::field(
                "ordering",
                format!(
                    "Unknown ordering '{other}'. Valid values: -created_at, created_at, title, -title"
                ),
            )),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "-created_at",
            Self::Oldest => "created_at",
            Self::TitleAsc => "title",
            Self::TitleDesc => "-title",
        }
    }

    /// SQL `ORDER BY` body. Ties always fall back to the rowid so results
    /// are stable when two rows share a timestamp.
    pub const fn sql(self) -> &'static str {
        match self {
            Self::Newest => "created_at DESC, id DESC",
            Self::Oldest => "created_at ASC, id ASC",
            Self::TitleAsc => "title ASC, id ASC",
            Self::TitleDesc => "title DESC, id DESC",
        }
    }
}

impl Serialize for ProjectOrdering {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Slug generation
// ---------------------------------------------------------------------------

/// Derive a URL-safe slug from a title.
///
/// Lowercases, folds common Latin accents to ASCII, replaces every other
/// non-alphanumeric run with a single hyphen, trims hyphens at both ends,
/// and cuts the result to [`MAX_SLUG_LEN`].
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut prev_hyphen = true;

    for c in title.to_lowercase().chars() {
        let folded = fold_accent(c);
        for fc in folded.chars() {
            if fc.is_ascii_alphanumeric() {
                slug.push(fc);
                prev_hyphen = false;
            } else if !prev_hyphen {
                slug.push('-');
                prev_hyphen = true;
            }
        }
    }

    slug.truncate(MAX_SLUG_LEN);
    slug.trim_end_matches('-').to_string()
}

fn fold_accent(c: char) -> String {
    let s = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        other => return other.to_string(),
    };
    s.to_string()
}

// ---------------------------------------------------------------------------
// Image references
// ---------------------------------------------------------------------------

/// Place a bare file name under [`IMAGE_UPLOAD_DIR`].
///
/// References that already carry a directory are kept as they are.
pub fn normalize_image_reference(reference: &str) -> String {
    let trimmed = reference.trim();
    if trimmed.contains('/') {
        trimmed.to_string()
    } else {
        format!("{IMAGE_UPLOAD_DIR}{trimmed}")
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Title: required, at most [`MAX_TITLE_LEN`] characters.
pub fn validate_title(title: &str) -> Result<(), FieldError> {
    if title.trim().is_empty() {
        return Err(FieldError::new("title", REQUIRED));
    }
    check_len("title", title, MAX_TITLE_LEN)
}

/// Slug: required, letters, digits, hyphens or underscores only.
pub fn validate_slug(slug: &str) -> Result<(), FieldError> {
    if slug.is_empty() {
        return Err(FieldError::new("slug", REQUIRED));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(FieldError::new(
            "slug",
            "Enter a valid slug consisting of letters, numbers, underscores or hyphens.",
        ));
    }
    check_len("slug", slug, MAX_SLUG_LEN)
}

/// URL: optional; when present it needs a known scheme and a host.
pub fn validate_url(url: &str) -> Result<(), FieldError> {
    if url.is_empty() {
        return Ok(());
    }
    check_len("url", url, MAX_URL_LEN)?;

    let invalid = || FieldError::new("url", "Enter a valid URL.");
    let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
    if !URL_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()) {
        return Err(invalid());
    }
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() || url.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    Ok(())
}

/// Image reference: optional, at most [`MAX_IMAGE_LEN`] characters.
pub fn validate_image(image: Option<&str>) -> Result<(), FieldError> {
    match image {
        Some(reference) => {
            if reference.trim().is_empty() {
                return Err(FieldError::new("image", "The image reference is empty."));
            }
            check_len("image", reference, MAX_IMAGE_LEN)
        }
        None => Ok(()),
    }
}

/// Tags: free text, at most [`MAX_TAGS_LEN`] characters.
pub fn validate_tags(tags: &str) -> Result<(), FieldError> {
    check_len("tags", tags, MAX_TAGS_LEN)
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len > max {
        return Err(FieldError::new(
            field,
            format!("Ensure this value has at most {max} characters (it has {len})."),
        ));
    }
    Ok(())
}

/// Collects field errors so a caller sees every problem at once.
#[derive(Debug, Default)]
pub struct FieldChecks {
    errors: Vec<FieldError>,
}

impl FieldChecks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, result: Result<(), FieldError>) -> &mut Self {
        if let Err(e) = result {
            self.errors.push(e);
        }
        self
    }

    pub fn finish(self) -> Result<(), CoreError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- generate_slug -------------------------------------------------------

    #[test]
    fn slug_from_simple_title() {
        assert_eq!(generate_slug("Rode Coffee"), "rode-coffee");
    }

    #[test]
    fn slug_collapses_and_trims_separators() {
        assert_eq!(generate_slug("  Hello,   World!! "), "hello-world");
    }

    #[test]
    fn slug_folds_accents() {
        assert_eq!(generate_slug("Café Crème Brûlée"), "cafe-creme-brulee");
    }

    #[test]
    fn slug_is_cut_to_max_len_without_trailing_hyphen() {
        let title = "word ".repeat(30);
        let slug = generate_slug(&title);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
        assert!(validate_slug(&slug).is_ok());
    }

    #[test]
    fn slug_of_symbols_only_is_empty() {
        assert_eq!(generate_slug("!!!"), "");
    }

    // -- validators ----------------------------------------------------------

    #[test]
    fn title_required_and_bounded() {
        assert!(validate_title("Scorefy").is_ok());
        assert_eq!(validate_title("   ").unwrap_err().message, REQUIRED);
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN)).is_ok());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN + 1)).is_err());
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        assert!(validate_title(&"é".repeat(MAX_TITLE_LEN)).is_ok());
    }

    #[test]
    fn slug_rules() {
        assert!(validate_slug("rode-coffee").is_ok());
        assert!(validate_slug("Rode_Coffee2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("rode coffee").is_err());
        assert!(validate_slug("café").is_err());
        assert!(validate_slug(&"a".repeat(MAX_SLUG_LEN + 1)).is_err());
    }

    #[test]
    fn url_rules() {
        assert!(validate_url("").is_ok());
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://example.com/path?q=1").is_ok());
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("mailto://someone").is_err());
        assert!(validate_url("https://").is_err());
        assert!(validate_url("https://exa mple.com").is_err());
    }

    #[test]
    fn tags_and_image_limits() {
        assert!(validate_tags("").is_ok());
        assert!(validate_tags(&"t".repeat(MAX_TAGS_LEN + 1)).is_err());
        assert!(validate_image(None).is_ok());
        assert!(validate_image(Some("projects/a.png")).is_ok());
        assert!(validate_image(Some(" ")).is_err());
    }

    #[test]
    fn field_checks_collect_all_errors() {
        let mut checks = FieldChecks::new();
        checks
            .check(validate_title(""))
            .check(validate_slug("bad slug"))
            .check(validate_tags("ok"));
        let err = checks.finish().unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "slug"]);
    }

    // -- images --------------------------------------------------------------

    #[test]
    fn image_reference_goes_under_upload_dir() {
        assert_eq!(normalize_image_reference("cover.png"), "projects/cover.png");
        assert_eq!(
            normalize_image_reference("projects/cover.png"),
            "projects/cover.png"
        );
    }

    // -- ordering ------------------------------------------------------------

    #[test]
    fn ordering_parses_known_values() {
        assert_eq!(ProjectOrdering::parse("").unwrap(), ProjectOrdering::Newest);
        assert_eq!(
            ProjectOrdering::parse("created_at").unwrap(),
            ProjectOrdering::Oldest
        );
        assert_eq!(
            ProjectOrdering::parse("-title").unwrap(),
            ProjectOrdering::TitleDesc
        );
        assert!(ProjectOrdering::parse("featured").is_err());
        for ordering in [
            ProjectOrdering::Newest,
            ProjectOrdering::Oldest,
            ProjectOrdering::TitleAsc,
            ProjectOrdering::TitleDesc,
        ] {
            assert_eq!(ProjectOrdering::parse(ordering.as_str()).unwrap(), ordering);
        }
    }

    #[test]
    fn serialized_fields_start_with_id_end_with_created_at() {
        assert_eq!(SERIALIZED_FIELDS.first(), Some(&ProjectField::Id));
        assert_eq!(SERIALIZED_FIELDS.last(), Some(&ProjectField::CreatedAt));
        assert_eq!(SERIALIZED_FIELDS.len(), 9);
    }
}
