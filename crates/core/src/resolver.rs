//! Media Resolver: the external tool that knows how to talk to video sites.
//!
//! [`YtDlpResolver`] shells out to `yt-dlp`. Anything implementing
//! [`MediaResolver`] can stand in for it, which is how the tests run
//! without network access.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::{
    error::{Result, YtFetchError},
    types::{DownloadConfig, FormatDescriptor, MediaInfo},
};

#[async_trait]
pub trait MediaResolver: Send + Sync {
    /// Read the available formats without writing anything to disk
    async fn extract_metadata(&self, url: &str) -> Result<Vec<FormatDescriptor>>;

    /// Fetch, merge and write the media. Returns the final file path when known.
    async fn fetch_and_write(&self, url: &str, config: &DownloadConfig) -> Result<Option<PathBuf>>;
}

#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub binary: PathBuf,
    /// Passed to every invocation, before the per-call arguments
    pub extra_args: Vec<OsString>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("yt-dlp"),
            extra_args: vec![
                "--extractor-args".into(),
                "youtube:player_client=android,web".into(),
            ],
        }
    }
}

impl ResolverConfig {
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct YtDlpResolver {
    config: ResolverConfig,
}

impl YtDlpResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn binary(&self) -> &Path {
        &self.config.binary
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.config.binary);
        command.args(&self.config.extra_args);
        command
    }

    async fn run(&self, mut command: Command, url: &str) -> Result<Vec<u8>> {
        debug!(?command, "running yt-dlp");
        let output = command
            .output()
            .await
            .map_err(|source| YtFetchError::ResolverUnavailable {
                binary: self.config.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(YtFetchError::ResolverFailed {
                url: url.to_string(),
                reason: failure_reason(&output.stderr, output.status),
            });
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl MediaResolver for YtDlpResolver {
    async fn extract_metadata(&self, url: &str) -> Result<Vec<FormatDescriptor>> {
        let mut command = self.command();
        command
            .arg("--dump-single-json")
            .arg("--no-playlist")
            .arg("--")
            .arg(url);

        let stdout = self.run(command, url).await?;
        let info = parse_media_info(url, &stdout)?;
        debug!(
            title = info.title.as_deref().unwrap_or_default(),
            formats = info.formats.len(),
            "metadata extracted"
        );

        Ok(info.formats)
    }

    async fn fetch_and_write(&self, url: &str, config: &DownloadConfig) -> Result<Option<PathBuf>> {
        let mut command = self.command();
        command
            .arg("--no-playlist")
            .arg("--print")
            .arg("after_move:filepath")
            .arg("-f")
            .arg(&config.format_expression)
            .arg("-o")
            .arg(&config.output_template)
            .arg("--")
            .arg(url);

        let stdout = self.run(command, url).await?;
        Ok(parse_written_path(&stdout))
    }
}

pub fn parse_media_info(url: &str, stdout: &[u8]) -> Result<MediaInfo> {
    serde_json::from_slice(stdout).map_err(|source| YtFetchError::MetadataParse {
        url: url.to_string(),
        source,
    })
}

/// `--print after_move:filepath` writes the final path as the last line
pub fn parse_written_path(stdout: &[u8]) -> Option<PathBuf> {
    let stdout_str = String::from_utf8_lossy(stdout);
    stdout_str
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .map(PathBuf::from)
}

fn failure_reason(stderr: &[u8], status: std::process::ExitStatus) -> String {
    let stderr_str = String::from_utf8_lossy(stderr);
    let reason = stderr_str.trim();
    if reason.is_empty() {
        status.to_string()
    } else {
        reason.to_string()
    }
}
