use std::path::{Path, PathBuf};

use crate::types::{FormatDescriptor, FormatSelector};

/// Render one line of the format listing: `{id} - {ext} - {resolution}`
pub fn format_descriptor_line(format: &FormatDescriptor) -> String {
    format!(
        "{} - {} - {}",
        format.format_id,
        format.ext,
        format.resolution.as_deref().unwrap_or("N/A")
    )
}

/// Selected stream merged with the best audio, or whatever yt-dlp considers best.
pub fn build_format_expression(selector: &FormatSelector) -> String {
    format!("{}+bestaudio/best", selector.as_str())
}

/// yt-dlp output template naming the file after the media title
pub fn build_output_template(output_dir: &Path) -> PathBuf {
    output_dir.join("%(title)s.%(ext)s")
}
