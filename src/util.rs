use crate::error::{GitRankError, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Default `git log` date layout, e.g. `Mon Jan 2 15:04:05 2006 -0700`.
const GIT_DEFAULT_DATE: &str = "%a %b %d %H:%M:%S %Y %z";
/// `git log --date=iso` layout, e.g. `2020-03-15 10:00:00 +0100`.
const GIT_ISO_DATE: &str = "%Y-%m-%d %H:%M:%S %z";

/// Returns true when `changed_path` (repository-relative) lives at or below
/// `subtree_root`.
///
/// Both paths are rooted at `/` and compared lexically: a path is outside the
/// subtree when reaching it from the root needs a `..` segment.
pub fn is_within_subtree(changed_path: &str, subtree_root: &str) -> bool {
    let rooted = format!("/{changed_path}");
    let rel = relative_path(subtree_root, &rooted);
    !rel.iter().any(|segment| segment == "..")
}

fn relative_path(base: &str, target: &str) -> Vec<String> {
    let base = normalize(base);
    let target = normalize(target);

    let common = base
        .iter()
        .zip(target.iter())
        .take_while(|(b, t)| b == t)
        .count();

    let mut rel: Vec<String> = std::iter::repeat("..".to_string())
        .take(base.len() - common)
        .collect();
    rel.extend(target[common..].iter().map(|s| s.to_string()));
    rel
}

fn normalize(path: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            // `..` at the root stays at the root
            ".." => {
                parts.pop();
            }
            s => parts.push(s),
        }
    }
    parts
}

/// Parses the date half of a history header. Accepts RFC 3339, git's `iso`
/// layout and git's default layout; returns `None` for anything else.
pub fn parse_git_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    [GIT_ISO_DATE, GIT_DEFAULT_DATE]
        .iter()
        .find_map(|layout| DateTime::parse_from_str(&collapsed, layout).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parses a `YYYY-MM-DD` period boundary as midnight UTC.
pub fn parse_period_date(input: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| GitRankError::InvalidDate(format!("'{input}': {e}")))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| GitRankError::InvalidDate(format!("'{input}': no midnight")))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn relative_path_walks_up_from_base() {
        assert_eq!(relative_path("/src", "/src/a.rs"), vec!["a.rs"]);
        assert_eq!(relative_path("/src", "/docs/a.md"), vec!["..", "docs", "a.md"]);
        assert!(relative_path("/src", "/src").is_empty());
    }

    #[test]
    fn normalize_resolves_dot_segments() {
        assert_eq!(normalize("/a/./b/../c/"), vec!["a", "c"]);
        assert_eq!(normalize("/../a"), vec!["a"]);
    }

    #[test]
    fn parses_git_default_date_with_single_digit_day() {
        let dt = parse_git_date("Thu Mar 5 10:00:00 2020 +0100").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2020, 3, 5));
        assert_eq!(dt.to_rfc3339(), "2020-03-05T09:00:00+00:00");
    }

    #[test]
    fn parses_rfc3339_date() {
        let dt = parse_git_date("2021-07-01T12:00:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2021-07-01T10:00:00+00:00");
    }

    #[test]
    fn parses_git_iso_date() {
        let dt = parse_git_date("2020-03-15 10:00:00 +0100").unwrap();
        assert_eq!(dt.to_rfc3339(), "2020-03-15T09:00:00+00:00");
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(parse_git_date("yesterday-ish").is_none());
        assert!(parse_period_date("2020-13-01").is_err());
    }
}
