/// Filesystem-safe slug for a movie title.
///
/// Lowercases, folds accented Latin letters to ASCII, drops everything that is
/// not `[a-z0-9]`, and joins the remaining words with single hyphens. Hyphens in
/// the input count as word separators, so a slug normalizes to itself.
pub fn normalize_title(title: &str) -> String {
    slugify(title, true)
}

/// `{slug}_{year}_review.txt`
pub fn review_filename(title: &str, year: &str) -> String {
    format!("{}_{year}_review.txt", normalize_title(title))
}

/// Filename the extractor writes. It drops hyphens instead of splitting on
/// them, so `"Spider-Man"` is saved as `spiderman`, not `spider-man`.
/// Identical to [`review_filename`] for titles without hyphens.
pub fn extractor_review_filename(title: &str, year: &str) -> String {
    format!("{}_{year}_review.txt", slugify(title, false))
}

fn slugify(title: &str, hyphen_separates: bool) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        let c = fold_accent(c);
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || (hyphen_separates && c == '-') {
            pending_separator = true;
        }
    }
    slug
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_between_words_does_not_leave_double_hyphens() {
        assert_eq!(normalize_title("Dune - Parte due"), "dune-parte-due");
        assert_eq!(normalize_title("  ...  "), "");
    }

    #[test]
    fn extractor_name_glues_hyphenated_words() {
        assert_eq!(
            extractor_review_filename("Spider-Man", "2002"),
            "spiderman_2002_review.txt"
        );
        assert_eq!(
            review_filename("Spider-Man", "2002"),
            "spider-man_2002_review.txt"
        );
        assert_eq!(
            extractor_review_filename("Dune - Parte due", "2024"),
            review_filename("Dune - Parte due", "2024")
        );
    }
}
