//! Demo window with one ring per style and gradient

use anyhow::Result;
use gtk4::{glib, prelude::*, Application, ApplicationWindow, Grid, Label, Orientation};
use log::{info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use circle_progress_render::CircleProgress;
use circle_progress_types::{
    Color, ProgressConfig, ProgressStyle, SavedState, ShaderMode, StrokeCap,
};

use crate::config::state;
use crate::widget::ProgressWidget;

const COLUMNS: i32 = 4;
const RING_SIZE: i32 = 140;
/// Progress step interval; a full 0..=100 loop takes about four seconds
const ANIMATION_TICK: Duration = Duration::from_millis(40);

const GALLERY_FIRST: i32 = 50;
const GALLERY_SECOND: i32 = 60;

/// How a gallery ring labels itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    Percent,
    Fixed(&'static str),
    Hidden,
}

#[derive(Debug, Clone, Copy)]
pub struct GalleryItem {
    pub title: &'static str,
    pub config: ProgressConfig,
    pub label: LabelMode,
    pub animated: bool,
}

fn warm(config: ProgressConfig) -> ProgressConfig {
    config
        .with_first_colors(Color::from_argb(0xffff7f27), Color::from_argb(0xffffd700))
        .with_second_colors(Color::from_argb(0x66ff7f27), Color::from_argb(0x66ffd700))
}

fn cool(config: ProgressConfig) -> ProgressConfig {
    config
        .with_first_colors(Color::from_argb(0xff2196f3), Color::from_argb(0xff00e5ff))
        .with_second_colors(Color::from_argb(0x662196f3), Color::from_argb(0x6600e5ff))
}

/// Ring presets shown by the gallery, derived from `base`
pub fn gallery_items(base: &ProgressConfig) -> Vec<GalleryItem> {
    let arc = base
        .with_style(ProgressStyle::SolidLine)
        .with_stroke_width(8.0)
        .with_cap(StrokeCap::Round);

    vec![
        GalleryItem {
            title: "Line",
            config: *base,
            label: LabelMode::Percent,
            animated: false,
        },
        GalleryItem {
            title: "Solid",
            config: base.with_style(ProgressStyle::Solid),
            label: LabelMode::Percent,
            animated: false,
        },
        GalleryItem {
            title: "Sweep",
            config: warm(arc.with_shader_mode(ShaderMode::Sweep)),
            label: LabelMode::Percent,
            animated: false,
        },
        GalleryItem {
            title: "Linear",
            config: cool(arc.with_shader_mode(ShaderMode::Linear)),
            label: LabelMode::Percent,
            animated: false,
        },
        GalleryItem {
            title: "Radial",
            config: warm(arc.with_shader_mode(ShaderMode::Radial).with_cap(StrokeCap::Butt)),
            label: LabelMode::Percent,
            animated: false,
        },
        GalleryItem {
            title: "Custom label",
            config: cool(base.with_line_count(60).with_line_width(6.0))
                .with_shader_mode(ShaderMode::Sweep),
            label: LabelMode::Fixed("Hello 12"),
            animated: false,
        },
        GalleryItem {
            title: "No label",
            config: warm(arc).with_background_outside_progress(true),
            label: LabelMode::Hidden,
            animated: false,
        },
        GalleryItem {
            title: "Animated",
            config: cool(arc.with_shader_mode(ShaderMode::Sweep)),
            label: LabelMode::Percent,
            animated: true,
        },
    ]
}

/// Renderer configured for one gallery item
pub fn build_progress(item: &GalleryItem) -> Result<CircleProgress> {
    let mut progress = CircleProgress::with_config(item.config)?;
    match item.label {
        LabelMode::Percent => {}
        LabelMode::Fixed(text) => {
            progress.set_progress_formatter(Some(Box::new(move |_: i32, _: i32| {
                text.to_string()
            })));
        }
        LabelMode::Hidden => progress.set_progress_formatter(None),
    }
    progress.set_progress_first(GALLERY_FIRST);
    progress.set_progress_second(GALLERY_SECOND);
    Ok(progress)
}

/// Next animation value, wrapping back to zero past `max`
pub fn next_animation_value(current: i32, max: i32) -> i32 {
    if current >= max {
        0
    } else {
        current + 1
    }
}

/// Advance every ring whose drawing area is still alive; stops once none is
pub fn animation_tick<T: glib::object::ObjectType>(
    targets: &[(glib::WeakRef<T>, Rc<RefCell<CircleProgress>>)],
) -> glib::ControlFlow {
    let mut alive = false;
    for (area, progress) in targets {
        if area.upgrade().is_none() {
            continue;
        }
        alive = true;
        // Skip this tick if a draw is in progress
        if let Ok(mut progress) = progress.try_borrow_mut() {
            let next = next_animation_value(progress.progress(), progress.max());
            progress.set_progress_first(next);
        }
    }
    if alive {
        glib::ControlFlow::Continue
    } else {
        glib::ControlFlow::Break
    }
}

fn ring_cell(item: &GalleryItem) -> Result<(gtk4::Box, ProgressWidget)> {
    let widget = ProgressWidget::new(build_progress(item)?);
    widget.drawing_area().set_size_request(RING_SIZE, RING_SIZE);

    let cell = gtk4::Box::new(Orientation::Vertical, 4);
    cell.append(&widget.widget());
    cell.append(&Label::new(Some(item.title)));
    Ok((cell, widget))
}

/// Build and present the gallery window
pub fn build_window(app: &Application, base: &ProgressConfig) -> Result<ApplicationWindow> {
    let grid = Grid::builder()
        .row_spacing(12)
        .column_spacing(12)
        .margin_top(12)
        .margin_bottom(12)
        .margin_start(12)
        .margin_end(12)
        .build();

    let saved = match state::load_state() {
        Ok(saved) => saved,
        Err(e) => {
            warn!("Ignoring saved state: {:#}", e);
            None
        }
    };

    let mut animated = Vec::new();
    for (index, item) in gallery_items(base).iter().enumerate() {
        let (cell, widget) = ring_cell(item)?;
        let index = index as i32;
        grid.attach(&cell, index % COLUMNS, index / COLUMNS, 1, 1);
        if item.animated {
            if let Some(saved) = saved {
                widget.progress().borrow_mut().restore_state(saved);
            }
            animated.push(widget);
        }
    }

    let window = ApplicationWindow::builder()
        .application(app)
        .title("circle-progress")
        .child(&grid)
        .build();

    if !animated.is_empty() {
        let targets: Vec<_> = animated
            .iter()
            .map(|widget| (widget.drawing_area().downgrade(), widget.progress()))
            .collect();
        glib::timeout_add_local(ANIMATION_TICK, move || animation_tick(&targets));
    }

    window.connect_close_request(move |_| {
        if let Some(widget) = animated.first() {
            let saved: SavedState = widget.progress().borrow().save_state();
            match state::save_state(&saved) {
                Ok(()) => info!("Saved progress {}", saved.progress),
                Err(e) => warn!("Failed to save state: {:#}", e),
            }
        }
        glib::Propagation::Proceed
    });

    window.present();
    Ok(window)
}
