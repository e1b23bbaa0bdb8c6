//! Shared helpers for golden session fixtures.
//!
//! A fixture is a directory holding `session.toml` and `expected.txt`. The
//! expected file starts with `#` headers (`format` first, then optional
//! `status` and `reason`) followed by one trace line per step.

use std::collections::BTreeMap;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

pub const SESSION_TRACE_FORMAT_V1: &str = "hasir-session-trace-v1";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FixtureStatus {
    Active,
    Xfail,
    Skip,
}

#[derive(Clone, Debug)]
pub struct ExpectedTrace {
    pub status: FixtureStatus,
    pub reason: Option<String>,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct Fixture {
    pub name: String,
    pub dir: PathBuf,
    pub session: String,
    pub expected: ExpectedTrace,
}

/// Substring filter taken from an environment variable.
pub struct FixtureFilter {
    raw: Option<String>,
}

impl FixtureFilter {
    pub fn from_env(key: &str) -> Self {
        Self {
            raw: env::var(key).ok().filter(|value| !value.trim().is_empty()),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        let Some(filter) = &self.raw else {
            return true;
        };
        name.contains(filter.as_str())
    }
}

pub fn parse_u64(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(hex) = trimmed.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok()
    } else {
        trimmed.parse::<u64>().ok()
    }
}

pub fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| parse_u64(&value))
        .unwrap_or(default)
}

/// Load every fixture directory under `root`, sorted by name.
pub fn load_fixtures(root: &Path) -> Vec<Fixture> {
    let mut entries: Vec<_> = fs::read_dir(root)
        .unwrap_or_else(|err| panic!("failed to read fixture root {root:?}: {err}"))
        .filter_map(Result::ok)
        .collect();
    entries.sort_by_key(|entry| entry.file_name());

    let mut fixtures = Vec::new();
    for entry in entries {
        let dir = entry.path();
        if !dir.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name != name.trim() {
            panic!("fixture directory has leading/trailing whitespace: '{name}'");
        }
        if name.starts_with('.') {
            continue;
        }
        let session_path = dir.join("session.toml");
        let session = fs::read_to_string(&session_path)
            .unwrap_or_else(|err| panic!("failed to read session {session_path:?}: {err}"));
        let expected = parse_expected_trace(&dir.join("expected.txt"));
        fixtures.push(Fixture {
            name,
            dir,
            session,
            expected,
        });
    }
    fixtures
}

pub fn parse_expected_trace(path: &Path) -> ExpectedTrace {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read expected trace {path:?}: {err}"));
    let (headers, lines) = parse_headers_and_lines(&content, path);

    let format = headers.get("format").map(String::as_str);
    assert_eq!(
        format,
        Some(SESSION_TRACE_FORMAT_V1),
        "unsupported format in {path:?}"
    );
    let status = match headers.get("status").map(String::as_str) {
        None | Some("active") => FixtureStatus::Active,
        Some("xfail") => FixtureStatus::Xfail,
        Some("skip") => FixtureStatus::Skip,
        Some(other) => panic!("invalid status '{other}' in {path:?}"),
    };
    let reason = headers.get("reason").cloned();
    if status != FixtureStatus::Active {
        assert!(reason.is_some(), "non-active fixture {path:?} needs a reason");
    }
    if status == FixtureStatus::Active {
        assert!(!lines.is_empty(), "expected trace {path:?} has no lines");
    }

    ExpectedTrace {
        status,
        reason,
        lines,
    }
}

fn parse_headers_and_lines(content: &str, path: &Path) -> (BTreeMap<String, String>, Vec<String>) {
    const SUPPORTED: [&str; 3] = ["format", "status", "reason"];

    let mut headers = BTreeMap::<String, String>::new();
    let mut lines = Vec::new();
    for raw_line in content.lines() {
        let line = raw_line.trim_end();
        if line.is_empty() {
            continue;
        }
        let Some(stripped) = line.strip_prefix('#') else {
            lines.push(line.to_string());
            continue;
        };
        let header = stripped.trim();
        let Some((key, value)) = header.split_once(':') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        assert!(
            SUPPORTED.contains(&key.as_str()),
            "unsupported header '{key}' in {path:?}"
        );
        if headers.is_empty() {
            assert_eq!(
                key, "format",
                "first header must be 'format' in {path:?}, found '{key}'"
            );
        }
        if headers.insert(key.clone(), value.trim().to_string()).is_some() {
            panic!("duplicate header '{key}' in {path:?}");
        }
    }

    assert!(
        headers.contains_key("format"),
        "missing required 'format' header in {path:?}"
    );
    (headers, lines)
}

/// Render the first mismatch between two line lists with two lines of context.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    const MISSING: &str = "<missing>";

    let max = expected.len().max(actual.len());
    let line = |lines: &[String], idx: usize| -> String {
        lines.get(idx).cloned().unwrap_or_else(|| MISSING.to_string())
    };
    let mismatch = (0..max).find(|&i| line(expected, i) != line(actual, i));

    let mut out = String::new();
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at line {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for idx in start..end {
            let marker = if idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {}", idx + 1, line(expected, idx));
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {}", idx + 1, line(actual, idx));
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn diff_points_at_first_mismatch() {
        let diff = diff_lines(&lines(&["a", "b", "c"]), &lines(&["a", "x", "c"]));
        assert!(diff.starts_with("first mismatch at line 2"));
        assert!(diff.contains(">    2  expected: b"));
        assert!(diff.contains(">    2    actual: x"));
    }

    #[test]
    fn diff_reports_missing_tail() {
        let diff = diff_lines(&lines(&["a", "b"]), &lines(&["a"]));
        assert!(diff.contains("actual: <missing>"));
        assert!(diff.ends_with("expected 2 lines, actual 1 lines\n"));
    }

    #[test]
    fn parse_u64_accepts_hex() {
        assert_eq!(parse_u64("0xC0FFEE"), Some(0xC0FFEE));
        assert_eq!(parse_u64(" 42 "), Some(42));
        assert_eq!(parse_u64(""), None);
        assert_eq!(parse_u64("nope"), None);
    }

    #[test]
    fn headers_and_lines_are_split() {
        let src = "# format: hasir-session-trace-v1\n# status: xfail\n# reason: pending\n\nline one\nline two\n";
        let (headers, body) = parse_headers_and_lines(src, Path::new("inline"));
        assert_eq!(headers["status"], "xfail");
        assert_eq!(headers["reason"], "pending");
        assert_eq!(body, lines(&["line one", "line two"]));
    }

    #[test]
    #[should_panic(expected = "first header must be 'format'")]
    fn format_header_comes_first() {
        parse_headers_and_lines("# status: skip\n", Path::new("inline"));
    }
}
