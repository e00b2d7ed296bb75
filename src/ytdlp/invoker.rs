//! The yt-dlp invoker and its download specification.
//!
//! One invocation fetches one remote video: the format filter asks for the
//! best video stream at or below the configured height (optionally pinned to
//! the AVC/H.264 codec family for player compatibility) merged with the best
//! audio stream, falling back to the best combined stream. The merged
//! container is always mp4, and yt-dlp appends the native extension through
//! the `%(ext)s` output template.

use crate::error::{Error, Result};
use crate::ytdlp::locate;

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Everything needed for one download, passed by value and discarded after
/// the invocation.
#[derive(Debug, Clone)]
pub struct DownloadSpec {
    /// Source video URL.
    pub url: String,
    /// Destination path, without extension.
    pub destination: PathBuf,
    /// Maximum vertical resolution to download.
    pub max_height: u32,
    /// Restrict the video stream to the AVC/H.264 codec family.
    pub prefer_avc: bool,
}

impl DownloadSpec {
    /// Create a new [`DownloadSpec`].
    pub fn new(
        url: impl Into<String>,
        destination: PathBuf,
        max_height: u32,
        prefer_avc: bool,
    ) -> Self {
        Self {
            url: url.into(),
            destination,
            max_height,
            prefer_avc,
        }
    }

    /// The yt-dlp format selection expression.
    pub fn format_filter(&self) -> String {
        let codec = if self.prefer_avc {
            "[vcodec~='^(?i)(avc|h264)']"
        } else {
            ""
        };
        format!("bv*[height<={}]{}+ba/best", self.max_height, codec)
    }

    /// The yt-dlp output template, appending the provider's native extension.
    pub fn output_template(&self) -> String {
        format!("{}.%(ext)s", self.destination.display())
    }

    /// Build the full argument vector for one invocation.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "--no-warnings".into(),
            "--no-progress".into(),
            "-f".into(),
            self.format_filter(),
            "--merge-output-format".into(),
            "mp4".into(),
            "--output".into(),
            self.output_template(),
            self.url.clone(),
        ]
    }
}

/// Invoker for the external yt-dlp executable.
#[derive(Debug, Clone)]
pub struct YtDlp {
    path: PathBuf,
}

impl YtDlp {
    /// Create an invoker, resolving the executable location once.
    ///
    /// See [`locate::resolve`] for the resolution order.
    pub fn new(configured: Option<&Path>) -> Self {
        Self {
            path: locate::resolve(configured),
        }
    }

    /// Create an invoker for an exact executable path, skipping resolution.
    pub fn with_executable(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The executable this invoker will spawn.
    pub fn executable(&self) -> &Path {
        &self.path
    }

    /// Run one download to completion.
    ///
    /// Standard output and standard error are drained concurrently with the
    /// wait for process exit; draining them sequentially after exit can
    /// deadlock once the child blocks on a full pipe buffer. A non-zero exit
    /// becomes [`Error::DownloadFailed`] carrying both captured streams; a
    /// spawn failure with `NotFound` becomes [`Error::ExecutableNotFound`].
    ///
    /// On cancellation the child receives a best-effort kill and
    /// [`Error::Canceled`] is returned.
    pub async fn download(&self, spec: &DownloadSpec, token: &CancellationToken) -> Result<()> {
        let args = spec.to_args();
        debug!(executable = %self.path.display(), ?args, "invoking yt-dlp");

        let mut child = Command::new(&self.path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    Error::ExecutableNotFound(self.path.display().to_string())
                }
                _ => Error::from(e),
            })?;

        let stdout_task = tokio::spawn(drain(child.stdout.take()));
        let stderr_task = tokio::spawn(drain(child.stderr.take()));

        let status = tokio::select! {
            status = child.wait() => status?,
            _ = token.cancelled() => {
                // Best effort: the child must not outlive the batch.
                let _ = child.start_kill();
                let _ = child.wait().await;
                return Err(Error::Canceled);
            }
        };

        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();

        if !status.success() {
            return Err(Error::DownloadFailed {
                code: status.code(),
                stdout,
                stderr,
            });
        }

        debug!(destination = %spec.destination.display(), "yt-dlp finished");
        Ok(())
    }
}

/// Read a child pipe to the end, tolerating a missing or broken pipe.
async fn drain<R: AsyncRead + Unpin>(pipe: Option<R>) -> String {
    let mut buffer = String::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_string(&mut buffer).await;
    }
    buffer
}
