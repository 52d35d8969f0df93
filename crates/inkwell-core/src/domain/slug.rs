//! URL slug derivation.

/// Derive a URL-safe slug from a post title.
///
/// Lower-cases the input, collapses every maximal run of characters outside
/// `[a-z0-9]` into a single hyphen, and strips leading/trailing hyphens.
/// Total and idempotent; returns an empty string when the title contains no
/// alphanumeric characters at all.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(slugify("My Awesome Blog Post! #1"), "my-awesome-blog-post-1");
    }

    #[test]
    fn test_collapses_symbol_runs() {
        assert_eq!(slugify("hello --- world"), "hello-world");
        assert_eq!(slugify("a!!!b"), "a-b");
    }

    #[test]
    fn test_strips_edge_hyphens() {
        assert_eq!(slugify("  spaced out  "), "spaced-out");
        assert_eq!(slugify("!leading and trailing!"), "leading-and-trailing");
    }

    #[test]
    fn test_no_alphanumerics_yields_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_non_ascii_becomes_separator() {
        assert_eq!(slugify("caffè latte"), "caff-latte");
    }

    #[test]
    fn test_idempotent() {
        let titles = [
            "My Awesome Blog Post! #1",
            "  spaced out  ",
            "!!!",
            "already-a-slug",
            "caffè latte 2024",
        ];
        for t in titles {
            let once = slugify(t);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_output_shape() {
        let titles = ["Hello, World!", "--a--b--", "123 GO", "ünïcödé"];
        for t in titles {
            let s = slugify(t);
            if s.is_empty() {
                continue;
            }
            assert!(!s.starts_with('-') && !s.ends_with('-'), "slug {s:?}");
            assert!(!s.contains("--"), "slug {s:?}");
            assert!(
                s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug {s:?}"
            );
        }
    }
}
