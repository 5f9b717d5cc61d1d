use std::sync::Arc;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

use super::layout::{lay_out, SignatoryLayout};
use super::models::CertificateData;

/// Canonical document width, A4 landscape at 96 dpi
pub const CANONICAL_WIDTH: f64 = 1123.0;

/// Canonical document height, A4 landscape at 96 dpi
pub const CANONICAL_HEIGHT: f64 = 794.0;

/// Maximum on-screen width of the preview
pub const MAX_WIDTH: f64 = 1000.0;

/// Scale applied to the canonical document for a given container width.
///
/// Never upscales beyond 1x and never exceeds the maximum width.
pub fn scale_factor(container_width: f64) -> f64 {
    (container_width.min(MAX_WIDTH) / CANONICAL_WIDTH)
        .min(1.0)
        .max(0.0)
}

/// Fully resolved certificate document, ready for drawing
#[derive(Debug, Clone)]
pub struct CertificateView {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub recipient: String,
    pub message_lines: Vec<String>,
    pub issue_date: Option<String>,
    pub logo_url: String,
    pub signatories: SignatoryLayout,
}

/// Certificate preview renderer.
///
/// Holds the recipient data plus the current scale; `render` resolves all
/// fallbacks into a [`CertificateView`].
#[derive(Debug, Clone)]
pub struct CertificatePreview {
    data: CertificateData,
    logo_url: String,
    scale: f64,
}

impl CertificatePreview {
    pub fn new(data: CertificateData, logo_url: String) -> Self {
        Self {
            data,
            logo_url,
            scale: 1.0,
        }
    }

    /// Recompute the scale for a new container width
    pub fn resize(&mut self, container_width: f64) {
        self.scale = scale_factor(container_width);
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Resolve the preview into a drawable view
    pub fn render(&self) -> CertificateView {
        let message_lines = self
            .data
            .message_text()
            .split('\n')
            .map(str::to_string)
            .collect();

        CertificateView {
            width: CANONICAL_WIDTH * self.scale,
            height: CANONICAL_HEIGHT * self.scale,
            scale: self.scale,
            recipient: self.data.recipient_name().to_string(),
            message_lines,
            issue_date: self.data.issue_date_text(),
            logo_url: self.logo_url.clone(),
            signatories: lay_out(&self.data.signatories),
        }
    }
}

/// A preview mounted against a viewport-width channel.
///
/// While mounted, a background task recomputes the scale on every width
/// change; dropping the mount aborts the task, so no listener outlives the
/// component.
pub struct MountedPreview {
    preview: Arc<RwLock<CertificatePreview>>,
    watch_task: JoinHandle<()>,
}

impl MountedPreview {
    /// Mount the preview and start tracking viewport widths
    pub fn mount(preview: CertificatePreview, mut widths: watch::Receiver<f64>) -> Self {
        let preview = Arc::new(RwLock::new(preview));
        let task_preview = Arc::clone(&preview);

        let watch_task = tokio::spawn(async move {
            loop {
                // Apply the current width, then wait for the next change
                let width = *widths.borrow_and_update();
                task_preview.write().await.resize(width);
                if widths.changed().await.is_err() {
                    break;
                }
            }
        });

        Self {
            preview,
            watch_task,
        }
    }

    /// Render with the most recently observed scale
    pub async fn render(&self) -> CertificateView {
        self.preview.read().await.render()
    }

    pub async fn scale(&self) -> f64 {
        self.preview.read().await.scale()
    }

    /// Stop tracking the viewport and drop the preview
    pub fn unmount(self) {}
}

impl Drop for MountedPreview {
    fn drop(&mut self) {
        self.watch_task.abort();
    }
}
