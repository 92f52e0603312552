use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    error::{Result, YtFetchError},
    format::{build_format_expression, build_output_template, format_descriptor_line},
    paths::get_download_dir,
    resolver::MediaResolver,
    types::{DownloadConfig, DownloadRequest, FormatSelector},
};

/// Turns a URL and a format choice into a single call on the resolver.
pub struct Orchestrator<R> {
    resolver: R,
    output_dir: PathBuf,
}

impl<R: MediaResolver> Orchestrator<R> {
    /// Downloads go to the platform download directory
    pub fn new(resolver: R) -> Self {
        Self::with_output_dir(resolver, get_download_dir())
    }

    pub fn with_output_dir(resolver: R, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            resolver,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// One rendered line per format, in the order the resolver reports them
    pub async fn list_formats(&self, url: &str) -> Result<Vec<String>> {
        let url = require_url(url)?;
        let formats = self.resolver.extract_metadata(url).await?;
        debug!(url, count = formats.len(), "formats listed");

        Ok(formats.iter().map(format_descriptor_line).collect())
    }

    pub async fn download(
        &self,
        url: &str,
        format_selector: Option<FormatSelector>,
    ) -> Result<Option<PathBuf>> {
        let request = self.request(url, format_selector)?;
        let config = download_config(&request);
        info!(
            url = %request.url,
            format = %config.format_expression,
            output = %config.output_template.display(),
            "downloading"
        );

        let written = self
            .resolver
            .fetch_and_write(&request.url, &config)
            .await?;
        if let Some(path) = &written {
            info!(path = %path.display(), "download written");
        }

        Ok(written)
    }

    fn request(&self, url: &str, format_selector: Option<FormatSelector>) -> Result<DownloadRequest> {
        let url = require_url(url)?;
        let format_selector = format_selector
            .filter(|selector| !selector.is_empty())
            .ok_or_else(|| YtFetchError::invalid_input("a format selector is required"))?;

        Ok(DownloadRequest {
            url: url.to_string(),
            format_selector,
            output_directory: self.output_dir.clone(),
        })
    }
}

pub fn download_config(request: &DownloadRequest) -> DownloadConfig {
    DownloadConfig {
        format_expression: build_format_expression(&request.format_selector),
        output_template: build_output_template(&request.output_directory),
    }
}

fn require_url(url: &str) -> Result<&str> {
    let url = url.trim();
    if url.is_empty() {
        return Err(YtFetchError::invalid_input("URL must not be empty"));
    }
    Ok(url)
}
