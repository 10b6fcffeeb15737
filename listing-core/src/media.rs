/// True when the path opens with a URL scheme (`alpha (alnum | + | - | .)* :`).
fn has_scheme(path: &str) -> bool {
    let mut chars = path.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    for c in chars {
        match c {
            ':' => return true,
            c if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.') => {}
            _ => return false,
        }
    }
    false
}

/// Resolve an image path from the feed against the configured storage base.
///
/// Absolute URLs pass through untouched; everything else is joined to the
/// base with exactly one `/` between them.
pub fn resolve_image_url(base: &str, path: &str) -> String {
    if path.is_empty() || has_scheme(path) {
        return path.to_string();
    }
    let base = base.strip_suffix('/').unwrap_or(base);
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://albadri-demo.s3.us-east-1.amazonaws.com/";

    #[test]
    fn absolute_urls_pass_through() {
        let url = "https://cdn.example.com/villa.jpg";
        assert_eq!(resolve_image_url(BASE, url), url);
        assert_eq!(
            resolve_image_url(BASE, "data:image/png;base64,AAAA"),
            "data:image/png;base64,AAAA"
        );
    }

    #[test]
    fn relative_paths_are_joined_with_one_slash() {
        let want = "https://albadri-demo.s3.us-east-1.amazonaws.com/img/villa.jpg";
        assert_eq!(resolve_image_url(BASE, "img/villa.jpg"), want);
        assert_eq!(resolve_image_url(BASE, "/img/villa.jpg"), want);
        assert_eq!(
            resolve_image_url(BASE.trim_end_matches('/'), "img/villa.jpg"),
            want
        );
    }

    #[test]
    fn leading_digit_is_not_a_scheme() {
        assert_eq!(
            resolve_image_url(BASE, "2024/villa.jpg"),
            "https://albadri-demo.s3.us-east-1.amazonaws.com/2024/villa.jpg"
        );
    }

    #[test]
    fn empty_path_stays_empty() {
        assert_eq!(resolve_image_url(BASE, ""), "");
    }
}
