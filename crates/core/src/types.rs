use std::path::PathBuf;

use serde::Deserialize;

/// Subset of the `yt-dlp -J` document we care about
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub formats: Vec<FormatDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatDescriptor {
    pub format_id: String,
    pub ext: String,
    #[serde(default)]
    pub resolution: Option<String>,
}

impl FormatDescriptor {
    pub fn new(
        format_id: impl Into<String>,
        ext: impl Into<String>,
        resolution: Option<&str>,
    ) -> Self {
        Self {
            format_id: format_id.into(),
            ext: ext.into(),
            resolution: resolution.map(str::to_string),
        }
    }
}

/// Which stream variant to download: a numeric index or any yt-dlp format id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSelector(String);

impl FormatSelector {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<i64> for FormatSelector {
    fn from(index: i64) -> Self {
        Self(index.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub url: String,
    pub format_selector: FormatSelector,
    pub output_directory: PathBuf,
}

/// What the resolver is told to do for a single download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    pub format_expression: String,
    pub output_template: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_info_ignores_unknown_fields() {
        let json = r#"{
            "id": "abc",
            "title": "Some video",
            "duration": 212,
            "formats": [
                {"format_id": "140", "ext": "m4a", "resolution": "audio only", "abr": 129.5},
                {"format_id": "22", "ext": "mp4", "resolution": "1280x720"},
                {"format_id": "sb0", "ext": "mhtml"}
            ]
        }"#;

        let info: MediaInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.title.as_deref(), Some("Some video"));
        assert_eq!(info.formats.len(), 3);
        assert_eq!(info.formats[1], FormatDescriptor::new("22", "mp4", Some("1280x720")));
        assert_eq!(info.formats[2].resolution, None);
    }

    #[test]
    fn media_info_without_formats_is_empty() {
        let info: MediaInfo = serde_json::from_str(r#"{"title": "live"}"#).unwrap();
        assert!(info.formats.is_empty());
    }

    #[test]
    fn null_resolution_is_none() {
        let format: FormatDescriptor =
            serde_json::from_str(r#"{"format_id": "1", "ext": "webm", "resolution": null}"#)
                .unwrap();
        assert_eq!(format.resolution, None);
    }

    #[test]
    fn selector_from_index() {
        assert_eq!(FormatSelector::from(22).as_str(), "22");
        assert_eq!(FormatSelector::from(-1).as_str(), "-1");
        assert!(FormatSelector::new("  ").is_empty());
    }
}
