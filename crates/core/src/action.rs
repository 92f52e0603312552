use std::io::Write;

use crate::{
    error::Result,
    orchestrator::Orchestrator,
    resolver::MediaResolver,
    types::FormatSelector,
};

pub const USAGE_MESSAGE: &str =
    "Invalid arguments. Use --get-formats or --download with --format-index.";
pub const DOWNLOAD_COMPLETE_MESSAGE: &str = "Download complete!";

/// What a single invocation of the tool does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListFormats { url: String },
    Download { url: String, format: FormatSelector },
    Usage,
}

impl Action {
    /// `--get-formats` wins over `--download`; `--download` needs a format index.
    pub fn from_flags(
        get_formats: Option<String>,
        download: Option<String>,
        format_index: Option<i64>,
    ) -> Self {
        match (get_formats, download, format_index) {
            (Some(url), _, _) => Action::ListFormats { url },
            (None, Some(url), Some(index)) => Action::Download {
                url,
                format: index.into(),
            },
            _ => Action::Usage,
        }
    }
}

/// Run the action and write its user-facing output to `out`.
///
/// Invalid input is returned as an error like any other failure; callers
/// decide whether it is fatal.
pub async fn run_action<R, W>(
    action: Action,
    orchestrator: &Orchestrator<R>,
    out: &mut W,
) -> Result<()>
where
    R: MediaResolver,
    W: Write,
{
    match action {
        Action::ListFormats { url } => {
            for line in orchestrator.list_formats(&url).await? {
                writeln!(out, "{}", line)?;
            }
        }
        Action::Download { url, format } => {
            orchestrator.download(&url, Some(format)).await?;
            writeln!(out, "{}", DOWNLOAD_COMPLETE_MESSAGE)?;
        }
        Action::Usage => {
            writeln!(out, "{}", USAGE_MESSAGE)?;
        }
    }

    Ok(())
}
