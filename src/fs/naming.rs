//! Screenshot filename parsing and folder-name sanitizing.

use chrono::NaiveDateTime;

/// Separator between the fields of a screenshot filename.
pub const FIELD_DELIMITER: char = '_';

/// Timestamp layout Steam uses in screenshot filenames.
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// A filename of the shape `<app_id>_<timestamp>_<sequence>`.
///
/// The sequence field keeps whatever follows the second delimiter,
/// including the extension (`1.png`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotName<'a> {
    pub app_id: &'a str,
    pub timestamp: &'a str,
    pub sequence: &'a str,
}

impl<'a> ScreenshotName<'a> {
    /// Split a filename into its three fields.
    ///
    /// Returns `None` unless there are exactly two delimiters. The timestamp
    /// and sequence fields may be empty; an empty app ID is rejected since
    /// there is nothing to look up.
    pub fn parse(filename: &'a str) -> Option<Self> {
        let mut fields = filename.split(FIELD_DELIMITER);
        let app_id = fields.next()?;
        let timestamp = fields.next()?;
        let sequence = fields.next()?;

        if fields.next().is_some() {
            return None;
        }

        if app_id.is_empty() {
            return None;
        }

        Some(Self {
            app_id,
            timestamp,
            sequence,
        })
    }

    /// Whether `filename` still begins with this record's app ID prefix.
    pub fn matches(&self, filename: &str) -> bool {
        filename
            .strip_prefix(self.app_id)
            .is_some_and(|rest| rest.starts_with(FIELD_DELIMITER))
    }

    /// Capture time, when the timestamp field uses Steam's layout.
    pub fn captured_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.timestamp, TIMESTAMP_FORMAT).ok()
    }
}

/// Strip characters that cannot appear in a folder name.
///
/// Colons and the other characters Windows rejects are removed, not
/// replaced. Path separators and control characters are removed too, so
/// the result is always a single path component.
pub fn sanitize_folder_name(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| !matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|' | '/' | '\\'))
        .filter(|c| !c.is_control())
        .collect();

    stripped.trim().trim_end_matches('.').trim_end().to_string()
}

/// Folder name for a resolved game, falling back to the app ID when
/// sanitizing leaves nothing usable.
pub fn game_folder_name(display_name: &str, app_id: &str) -> String {
    let sanitized = sanitize_folder_name(display_name);
    if sanitized.is_empty() {
        app_id.to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let name = ScreenshotName::parse("440_20240101120000_01").unwrap();
        assert_eq!(name.app_id, "440");
        assert_eq!(name.timestamp, "20240101120000");
        assert_eq!(name.sequence, "01");

        let name = ScreenshotName::parse("620_20231224083015_1.png").unwrap();
        assert_eq!(name.app_id, "620");
        assert_eq!(name.sequence, "1.png");
    }

    #[test]
    fn test_parse_wrong_field_count() {
        assert!(ScreenshotName::parse("12345_bad").is_none());
        assert!(ScreenshotName::parse("no-delimiters.png").is_none());
        assert!(ScreenshotName::parse("1_2_3_4").is_none());
        assert!(ScreenshotName::parse("desktop.ini").is_none());
    }

    #[test]
    fn test_parse_empty_fields() {
        let name = ScreenshotName::parse("440__01").unwrap();
        assert_eq!(name.app_id, "440");
        assert_eq!(name.timestamp, "");
        assert_eq!(name.sequence, "01");

        assert!(ScreenshotName::parse("440_20240101120000_").is_some());
        assert!(ScreenshotName::parse("_20240101120000_01").is_none());
    }

    #[test]
    fn test_matches_prefix() {
        let name = ScreenshotName::parse("440_20240101120000_01").unwrap();
        assert!(name.matches("440_20240101120000_01"));
        assert!(!name.matches("4400_20240101120000_01"));
        assert!(!name.matches("44_20240101120000_01"));
    }

    #[test]
    fn test_captured_at() {
        let name = ScreenshotName::parse("440_20240101120000_01").unwrap();
        let ts = name.captured_at().unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 12:00:00");

        let name = ScreenshotName::parse("400_ts_01").unwrap();
        assert!(name.captured_at().is_none());
    }

    #[test]
    fn test_sanitize_strips_colon() {
        assert_eq!(
            sanitize_folder_name("Half-Life 2: Episode One"),
            "Half-Life 2 Episode One"
        );
        assert_eq!(sanitize_folder_name("Team Fortress 2"), "Team Fortress 2");
    }

    #[test]
    fn test_sanitize_strips_separators_and_reserved() {
        assert_eq!(sanitize_folder_name("AC/DC <Live>?"), "ACDC Live");
        assert_eq!(sanitize_folder_name("a\\b|c*\"d\""), "abcd");
        assert_eq!(sanitize_folder_name("Tab\tName"), "TabName");
    }

    #[test]
    fn test_sanitize_trims_trailing_dots() {
        assert_eq!(sanitize_folder_name("Wait... "), "Wait");
        assert_eq!(sanitize_folder_name(".."), "");
    }

    #[test]
    fn test_game_folder_name_falls_back_to_app_id() {
        assert_eq!(game_folder_name(":::", "1234"), "1234");
        assert_eq!(game_folder_name("", "1234"), "1234");
        assert_eq!(game_folder_name("../", "1234"), "1234");
        assert_eq!(game_folder_name("Portal 2", "620"), "Portal 2");
    }
}
