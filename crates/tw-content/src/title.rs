//! Page and section titles.
//!
//! Resolution order: `meta.yaml` title, first `# H1` heading, then a title
//! derived from the file or directory name.

use std::sync::LazyLock;

use regex::Regex;

static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[ \t]+(.+)$").expect("H1 pattern is valid"));

/// Extract the first H1 heading from markdown content.
///
/// Lines inside fenced code blocks are skipped.
pub(crate) fn extract_h1(content: &str) -> Option<String> {
    let mut fence: Option<&str> = None;
    for line in content.lines() {
        let trimmed = line.trim_start();
        if let Some(marker) = fence {
            if trimmed.starts_with(marker) {
                fence = None;
            }
            continue;
        }
        if let Some(marker) = ["```", "~~~"].into_iter().find(|m| trimmed.starts_with(m)) {
            fence = Some(marker);
            continue;
        }
        let Some(caps) = H1_REGEX.captures(line) else {
            continue;
        };
        let title = caps[1].trim().trim_end_matches('#').trim_end();
        if !title.is_empty() {
            return Some(title.to_owned());
        }
    }
    None
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
///
/// `setup-guide` becomes `Setup Guide`, `my_page` becomes `My Page`.
/// Non-ASCII names pass through unchanged.
pub(crate) fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_h1() {
        assert_eq!(extract_h1("# Volatile\n\nbody").as_deref(), Some("Volatile"));
        assert_eq!(
            extract_h1("---\ntitle: x\n---\n\n#  进程管理  \n").as_deref(),
            Some("进程管理")
        );
        assert_eq!(extract_h1("# Closed heading #\n").as_deref(), Some("Closed heading"));
    }

    #[test]
    fn test_extract_h1_ignores_lower_levels() {
        assert_eq!(extract_h1("## Section\n### Sub\n"), None);
        assert_eq!(extract_h1("text only"), None);
    }

    #[test]
    fn test_extract_h1_skips_fenced_code() {
        let content = "Intro\n\n```bash\n# install deps\nnpm i\n```\n\n\
                       ~~~\n# also code\n~~~\n# Setup\n";

        assert_eq!(extract_h1(content).as_deref(), Some("Setup"));
        assert_eq!(extract_h1("```\n# only code\n```\n"), None);
    }

    #[test]
    fn test_extract_h1_stays_on_one_line() {
        assert_eq!(extract_h1("#\n\nSome paragraph"), None);
        assert_eq!(extract_h1("#\n# Real title\n").as_deref(), Some("Real title"));
    }

    #[test]
    fn test_titlecase_from_slug() {
        assert_eq!(titlecase_from_slug("setup-guide"), "Setup Guide");
        assert_eq!(titlecase_from_slug("my_page"), "My Page");
        assert_eq!(titlecase_from_slug("Generics"), "Generics");
        assert_eq!(titlecase_from_slug("back-end"), "Back End");
        assert_eq!(titlecase_from_slug("操作系统"), "操作系统");
        assert_eq!(titlecase_from_slug(""), "");
    }
}
