//! Offscreen host rendering into a Cairo image surface

use anyhow::{Context as _, Result};
use cairo::{Context, Format, ImageSurface};
use log::debug;
use std::path::Path;

use circle_progress_render::{render_draw_list, DrawList, ProgressHost};

/// ARGB32 drawing region, exported as PNG
pub struct ImageHost {
    surface: ImageSurface,
    width: u32,
    height: u32,
    redraw_requested: bool,
}

impl ImageHost {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let surface = ImageSurface::create(Format::ARgb32, width as i32, height as i32)
            .with_context(|| format!("Failed to create {}x{} surface", width, height))?;
        Ok(Self {
            surface,
            width,
            height,
            redraw_requested: false,
        })
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Whether the renderer asked for another frame since the last draw
    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Write the current frame to `path`
    pub fn write_png(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        self.surface
            .write_to_png(&mut file)
            .with_context(|| format!("Failed to encode PNG {}", path.display()))?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

impl ProgressHost for ImageHost {
    fn drawing_region_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn issue_draw_calls(&mut self, draw_list: &DrawList) -> Result<()> {
        let cr = Context::new(&self.surface)?;

        // Start every frame from a transparent surface
        cr.save()?;
        cr.set_operator(cairo::Operator::Clear);
        cr.paint()?;
        cr.restore()?;

        render_draw_list(&cr, draw_list)?;
        drop(cr);
        self.surface.flush();
        self.redraw_requested = false;
        Ok(())
    }
}
