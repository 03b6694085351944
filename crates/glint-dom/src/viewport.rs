//! Window size probe
//!
//! Best-effort viewport dimensions from whichever source the host fills in.

/// Client dimensions of a document-level box (body or documentElement).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientArea {
    pub width: u32,
    pub height: u32,
}

/// Raw sizing properties as the host reports them. Zero means "not filled
/// in" for every field, matching the loose host convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportMetrics {
    pub inner_width: u32,
    pub inner_height: u32,
    pub body: Option<ClientArea>,
    pub document_element: Option<ClientArea>,
}

/// Probe result. Either field may be `None` when no source had it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowSize {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

fn nonzero(value: u32) -> Option<u32> {
    if value > 0 { Some(value) } else { None }
}

/// Resolve the window dimensions.
///
/// Window inner size first, body client size as fallback; then, when the
/// documentElement reports both client dimensions, those override the lot.
/// The documentElement is the final, most-trusted source. Read-only.
pub fn window_size(metrics: &ViewportMetrics) -> WindowSize {
    let mut width = nonzero(metrics.inner_width)
        .or_else(|| metrics.body.and_then(|b| nonzero(b.width)));
    let mut height = nonzero(metrics.inner_height)
        .or_else(|| metrics.body.and_then(|b| nonzero(b.height)));

    if let Some(root) = metrics.document_element {
        if root.width > 0 && root.height > 0 {
            width = Some(root.width);
            height = Some(root.height);
        }
    }

    WindowSize { width, height }
}
