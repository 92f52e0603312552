//! ytfetch Core Library
//!
//! Lists the formats a video is available in and downloads one of them,
//! delegating the actual extraction and muxing to yt-dlp.

pub mod action;
pub mod error;
pub mod format;
pub mod orchestrator;
pub mod paths;
pub mod resolver;
pub mod types;

pub use action::{Action, DOWNLOAD_COMPLETE_MESSAGE, USAGE_MESSAGE, run_action};
pub use error::{Result, YtFetchError};
pub use format::{build_format_expression, build_output_template, format_descriptor_line};
pub use orchestrator::{Orchestrator, download_config};
pub use paths::{OsFamily, download_dir_for, get_download_dir};
pub use resolver::{MediaResolver, ResolverConfig, YtDlpResolver};
pub use types::{DownloadConfig, DownloadRequest, FormatDescriptor, FormatSelector, MediaInfo};
