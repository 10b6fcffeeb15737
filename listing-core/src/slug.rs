/// URL-safe derivation of a listing title, used both for card links and for
/// the detail page's fallback lookup.
///
/// Lowercases, strips every character that is not ASCII alphanumeric,
/// underscore, whitespace, or hyphen, collapses separator runs into a single
/// hyphen, and trims hyphens at both ends. Idempotent, so applying it to a
/// value that is already a slug is harmless.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_sep = false;

    for c in title.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_sep = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(c);
        }
        // everything else is stripped without becoming a separator
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Sea View Villa"), "sea-view-villa");
    }

    #[test]
    fn strips_punctuation_and_collapses_runs() {
        assert_eq!(slugify("  Lakeside -- Retreat! #2 "), "lakeside-retreat-2");
    }

    #[test]
    fn treats_underscores_as_separators() {
        assert_eq!(slugify("Palm_Grove_Estate"), "palm-grove-estate");
    }

    #[test]
    fn drops_non_ascii_without_inserting_separators() {
        assert_eq!(slugify("Büyük Villa"), "byk-villa");
    }

    #[test]
    fn is_idempotent() {
        for title in ["Sea View Villa", "  Lakeside -- Retreat! #2 ", "Palm_Grove_Estate"] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn empty_and_symbol_only_titles_yield_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
