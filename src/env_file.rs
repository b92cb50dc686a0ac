use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::env_file::EnvFileError;

/// Result of looking at one `.env` line against the configured variable names.
#[derive(Debug, PartialEq, Eq)]
pub struct LineMatch<'a> {
    pub key: Option<&'a str>,
    pub value: Option<&'a str>,
    /// Whatever follows the value, starting at its closing `=` if there is one.
    pub rest: &'a str,
    pub matched: bool,
}

impl LineMatch<'_> {
    /// Only the value segment changes; `rest` is written back as it was.
    pub fn with_value(&self, new_value: &str) -> Option<String> {
        let key = self.key?;
        Some(format!("{}={}{}", key, new_value, self.rest))
    }
}

/// Key is the text before the first `=`, value the segment up to the next `=`.
pub fn parse_line<'a>(line: &'a str, keys: &[String]) -> LineMatch<'a> {
    let Some((key, after)) = line.split_once('=') else {
        return LineMatch {
            key: None,
            value: None,
            rest: "",
            matched: false,
        };
    };

    let (value, rest) = match after.find('=') {
        Some(end) => after.split_at(end),
        None => (after, ""),
    };

    LineMatch {
        key: Some(key),
        value: Some(value),
        rest,
        matched: keys.iter().any(|name| name == key),
    }
}

pub fn rewrite_content(content: &str, keys: &[String], new_value: &str) -> (String, usize) {
    let mut replaced = 0;

    let lines: Vec<String> = content
        .split('\n')
        .map(|line| {
            let parsed = parse_line(line, keys);
            match parsed.with_value(new_value) {
                Some(updated) if parsed.matched => {
                    replaced += 1;
                    updated
                }
                _ => line.to_string(),
            }
        })
        .collect();

    (lines.join("\n"), replaced)
}

/// Overwrites the file in place; returns how many lines were rewritten.
pub fn rewrite(path: &Path, keys: &[String], new_value: &str) -> Result<usize, EnvFileError> {
    let content = fs::read_to_string(path).map_err(|source| EnvFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (output, replaced) = rewrite_content(&content, keys, new_value);

    fs::write(path, output).map_err(|source| EnvFileError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Rewrote {} line(s) in {}", replaced, path.display());
    Ok(replaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn keys() -> Vec<String> {
        vec!["APP_API_URL".to_string(), "SAPP_URL".to_string()]
    }

    #[test]
    fn parses_matching_line() {
        assert_eq!(
            parse_line("APP_API_URL=http://old", &keys()),
            LineMatch {
                key: Some("APP_API_URL"),
                value: Some("http://old"),
                rest: "",
                matched: true,
            }
        );
    }

    #[test]
    fn key_must_match_exactly() {
        let line = parse_line("APP_API_URL_V2=http://old", &keys());
        assert_eq!(line.key, Some("APP_API_URL_V2"));
        assert!(!line.matched);
    }

    #[test]
    fn lines_without_separator_never_match() {
        assert!(!parse_line("APP_API_URL", &keys()).matched);
        assert!(!parse_line("# comment", &keys()).matched);
        assert!(!parse_line("", &keys()).matched);
    }

    #[test]
    fn rewrites_only_matching_lines() {
        let (out, replaced) = rewrite_content(
            "APP_API_URL=http://old\nOTHER=1\n",
            &keys(),
            "http://new",
        );
        assert_eq!(out, "APP_API_URL=http://new\nOTHER=1\n");
        assert_eq!(replaced, 1);
    }

    #[test]
    fn keeps_comments_blank_lines_and_order() {
        let input = "# api\nSAPP_URL=a\n\nDEBUG=true\nAPP_API_URL=b\n# end";
        let (out, replaced) = rewrite_content(input, &keys(), "http://x");
        assert_eq!(
            out,
            "# api\nSAPP_URL=http://x\n\nDEBUG=true\nAPP_API_URL=http://x\n# end"
        );
        assert_eq!(replaced, 2);
    }

    #[test]
    fn unknown_keys_leave_content_untouched() {
        let input = "FOO=1\nBAR=2\n";
        let (out, replaced) = rewrite_content(input, &keys(), "http://x");
        assert_eq!(out, input);
        assert_eq!(replaced, 0);
    }

    #[test]
    fn only_first_value_segment_is_replaced() {
        let line = parse_line("APP_API_URL=http://old?a=b", &keys());
        assert_eq!(line.value, Some("http://old?a"));
        assert_eq!(line.rest, "=b");
        assert_eq!(
            line.with_value("http://new").unwrap(),
            "APP_API_URL=http://new=b"
        );

        let (out, _) = rewrite_content("SAPP_URL=a=b=c\n", &keys(), "n");
        assert_eq!(out, "SAPP_URL=n=b=c\n");
    }

    #[test]
    fn empty_value_is_filled() {
        let line = parse_line("APP_API_URL=", &keys());
        assert!(line.matched);
        assert_eq!(
            line.with_value("http://new").unwrap(),
            "APP_API_URL=http://new"
        );
    }

    #[test]
    fn lines_without_separator_cannot_take_a_value() {
        assert_eq!(parse_line("# comment", &keys()).with_value("x"), None);
    }

    #[test]
    fn rewrites_file_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "APP_API_URL=http://old\nOTHER=1\n").unwrap();

        let replaced = rewrite(&path, &keys(), "http://new").unwrap();

        assert_eq!(replaced, 1);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "APP_API_URL=http://new\nOTHER=1\n"
        );
    }

    #[test]
    fn read_only_file_is_a_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "APP_API_URL=http://old\n").unwrap();

        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&path, permissions).unwrap();

        // Privileged users write through the read-only bit.
        if fs::OpenOptions::new().write(true).open(&path).is_ok() {
            return;
        }

        let err = rewrite(&path, &keys(), "http://new").unwrap_err();
        assert!(matches!(err, EnvFileError::Write { .. }));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "APP_API_URL=http://old\n"
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn unwritable_file_is_a_write_error() {
        // Readable by anyone, writable by no one, root included.
        let path = Path::new("/proc/version");

        let err = rewrite(path, &keys(), "http://new").unwrap_err();
        assert!(matches!(err, EnvFileError::Write { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = rewrite(&dir.path().join(".env"), &keys(), "x").unwrap_err();
        assert!(matches!(err, EnvFileError::Read { .. }));
    }
}
