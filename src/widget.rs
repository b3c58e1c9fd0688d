//! GTK4 widget showing a [`CircleProgress`]

use anyhow::{anyhow, Result};
use cairo::Context;
use gtk4::{glib, prelude::*, DrawingArea, Widget};
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use circle_progress_render::{
    draw_on_host, flush_redraw_request, render_draw_list, CircleProgress, DrawList, ProgressHost,
};

/// How often pending redraw requests are forwarded to GTK
const REDRAW_POLL: Duration = Duration::from_millis(16);

/// Host view over a drawing area; the Cairo context only exists while GTK
/// runs the draw function
struct AreaHost<'a> {
    area: &'a DrawingArea,
    cr: Option<&'a Context>,
    size: (u32, u32),
}

impl ProgressHost for AreaHost<'_> {
    fn drawing_region_size(&self) -> (u32, u32) {
        self.size
    }

    fn request_redraw(&mut self) {
        self.area.queue_draw();
    }

    fn issue_draw_calls(&mut self, draw_list: &DrawList) -> Result<()> {
        let cr = self
            .cr
            .ok_or_else(|| anyhow!("Draw calls issued outside the draw function"))?;
        render_draw_list(cr, draw_list)?;
        Ok(())
    }
}

fn area_size(area: &DrawingArea) -> (u32, u32) {
    (area.width().max(0) as u32, area.height().max(0) as u32)
}

/// A drawing area bound to a shared renderer
#[derive(Clone)]
pub struct ProgressWidget {
    drawing_area: DrawingArea,
    progress: Rc<RefCell<CircleProgress>>,
}

impl ProgressWidget {
    pub fn new(progress: CircleProgress) -> Self {
        let drawing_area = DrawingArea::new();
        drawing_area.set_size_request(100, 100);
        let progress = Rc::new(RefCell::new(progress));

        let progress_draw = progress.clone();
        drawing_area.set_draw_func(move |area, cr, width, height| {
            let mut host = AreaHost {
                area,
                cr: Some(cr),
                size: (width.max(0) as u32, height.max(0) as u32),
            };
            if let Err(e) = draw_on_host(&mut progress_draw.borrow_mut(), &mut host) {
                warn!("Failed to draw progress: {}", e);
            }
        });

        let progress_resize = progress.clone();
        drawing_area.connect_resize(move |_, width, height| {
            progress_resize
                .borrow_mut()
                .on_resize(width.max(0) as u32, height.max(0) as u32);
        });

        // Forward redraw requests recorded by setters
        glib::timeout_add_local(REDRAW_POLL, {
            let drawing_area_weak = drawing_area.downgrade();
            let progress_timer = progress.clone();
            move || {
                if let Some(drawing_area) = drawing_area_weak.upgrade() {
                    // Skip this tick if a draw is in progress
                    if let Ok(mut progress) = progress_timer.try_borrow_mut() {
                        let mut host = AreaHost {
                            area: &drawing_area,
                            cr: None,
                            size: area_size(&drawing_area),
                        };
                        flush_redraw_request(&mut progress, &mut host);
                    }
                    glib::ControlFlow::Continue
                } else {
                    glib::ControlFlow::Break
                }
            }
        });

        Self {
            drawing_area,
            progress,
        }
    }

    /// Shared handle to the renderer; mutations are picked up on the next tick
    pub fn progress(&self) -> Rc<RefCell<CircleProgress>> {
        self.progress.clone()
    }

    pub fn drawing_area(&self) -> &DrawingArea {
        &self.drawing_area
    }

    pub fn widget(&self) -> Widget {
        self.drawing_area.clone().upcast()
    }
}
