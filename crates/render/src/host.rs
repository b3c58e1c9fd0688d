//! Host capability: the small surface a UI layer provides to the renderer

use anyhow::Result;

use crate::commands::DrawList;
use crate::progress::CircleProgress;

/// Trait for anything that can show a [`CircleProgress`].
///
/// Implementations wrap the host framework's drawing region: they report
/// its size, schedule redraws and execute draw lists.
pub trait ProgressHost {
    /// Current drawing region size in pixels (width, height)
    fn drawing_region_size(&self) -> (u32, u32);

    /// Ask the host to render again soon
    fn request_redraw(&mut self);

    /// Execute one rendered frame
    fn issue_draw_calls(&mut self, draw_list: &DrawList) -> Result<()>;
}

/// Sync the region size, render and hand the result to the host
pub fn draw_on_host<H: ProgressHost + ?Sized>(
    progress: &mut CircleProgress,
    host: &mut H,
) -> Result<()> {
    let size = host.drawing_region_size();
    if size != progress.size() {
        progress.on_resize(size.0, size.1);
    }
    // This render satisfies any pending request
    progress.take_redraw_request();

    let draw_list = progress.render()?;
    host.issue_draw_calls(&draw_list)
}

/// Forward a pending redraw request to the host; returns whether one was sent
pub fn flush_redraw_request<H: ProgressHost + ?Sized>(
    progress: &mut CircleProgress,
    host: &mut H,
) -> bool {
    if progress.take_redraw_request() {
        host.request_redraw();
        true
    } else {
        false
    }
}
