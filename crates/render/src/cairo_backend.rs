//! Cairo rendering of draw lists

use std::f64::consts::PI;

use cairo::{Context, LineCap, Matrix, Mesh, MeshCorner};
use circle_progress_types::{Color, PaintStyle, StrokeCap};

use crate::commands::{DrawCommand, DrawList, FrameRotation, Paint, TextCommand};
use crate::geometry::{Point, Rect, MAX_DEGREE};
use crate::gradient::{GradientDescriptor, GradientKind, TrackShader};
use crate::label::label_origin;
use crate::pango_text::{pango_show_text_at, pango_text_extents, LABEL_FONT_FAMILY};

/// Number of mesh patches used to approximate a sweep gradient
const SWEEP_PATCHES: usize = 64;

/// Render one frame: ring in the rotated frame, label unrotated
pub fn render_draw_list(cr: &Context, list: &DrawList) -> Result<(), cairo::Error> {
    cr.save()?;
    rotate_about(cr, &list.rotation);
    for command in &list.ring {
        render_command(cr, command)?;
    }
    cr.restore()?;

    if let Some(label) = &list.label {
        render_label(cr, label)?;
    }

    Ok(())
}

fn rotate_about(cr: &Context, rotation: &FrameRotation) {
    cr.translate(rotation.pivot.x, rotation.pivot.y);
    cr.rotate(rotation.degrees.to_radians());
    cr.translate(-rotation.pivot.x, -rotation.pivot.y);
}

fn line_cap(cap: StrokeCap) -> LineCap {
    match cap {
        StrokeCap::Butt => LineCap::Butt,
        StrokeCap::Round => LineCap::Round,
        StrokeCap::Square => LineCap::Square,
    }
}

fn render_command(cr: &Context, command: &DrawCommand) -> Result<(), cairo::Error> {
    match command {
        DrawCommand::Line {
            start, end, paint, ..
        } => render_line(cr, *start, *end, paint),
        DrawCommand::Arc {
            oval,
            start_degrees,
            sweep_degrees,
            use_center,
            paint,
            ..
        } => render_arc(cr, oval, *start_degrees, *sweep_degrees, *use_center, paint),
    }
}

/// Lines are always stroked, whatever the paint style
fn render_line(cr: &Context, start: Point, end: Point, paint: &Paint) -> Result<(), cairo::Error> {
    cr.save()?;
    apply_paint(cr, paint)?;
    cr.new_path();
    cr.move_to(start.x, start.y);
    cr.line_to(end.x, end.y);
    cr.stroke()?;
    cr.restore()?;
    Ok(())
}

/// Sweep actually drawn: nothing when not positive, at most a full circle
fn visible_sweep(sweep_degrees: f64) -> Option<f64> {
    if sweep_degrees > 0.0 {
        Some(sweep_degrees.min(MAX_DEGREE))
    } else {
        None
    }
}

fn render_arc(
    cr: &Context,
    oval: &Rect,
    start_degrees: f64,
    sweep_degrees: f64,
    use_center: bool,
    paint: &Paint,
) -> Result<(), cairo::Error> {
    let Some(sweep) = visible_sweep(sweep_degrees) else {
        return Ok(());
    };
    let center = oval.center();
    let radius = oval.width().min(oval.height()) / 2.0;
    if radius <= 0.0 {
        return Ok(());
    }

    let start_rad = start_degrees.to_radians();
    let end_rad = (start_degrees + sweep).to_radians();

    cr.save()?;
    apply_paint(cr, paint)?;
    cr.new_path();
    if use_center {
        cr.move_to(center.x, center.y);
        cr.arc(center.x, center.y, radius, start_rad, end_rad);
        cr.close_path();
    } else {
        cr.arc(center.x, center.y, radius, start_rad, end_rad);
    }
    match paint.style {
        PaintStyle::Fill => cr.fill()?,
        PaintStyle::Stroke => cr.stroke()?,
    }
    cr.restore()?;
    Ok(())
}

fn apply_paint(cr: &Context, paint: &Paint) -> Result<(), cairo::Error> {
    match &paint.shader {
        TrackShader::Flat(color) => color.apply_to_cairo(cr),
        TrackShader::Gradient(gradient) => apply_gradient(cr, gradient)?,
    }
    cr.set_line_width(paint.stroke_width);
    cr.set_line_cap(line_cap(paint.cap));
    Ok(())
}

/// Pattern matrix rotating the gradient clockwise by `degrees` about `pivot`
///
/// Cairo pattern matrices map user space to pattern space, so this is the
/// inverse of the visible rotation.
fn gradient_matrix(degrees: f64, pivot: Point) -> Matrix {
    let mut matrix = Matrix::identity();
    matrix.translate(pivot.x, pivot.y);
    matrix.rotate(-degrees.to_radians());
    matrix.translate(-pivot.x, -pivot.y);
    matrix
}

fn apply_gradient(cr: &Context, gradient: &GradientDescriptor) -> Result<(), cairo::Error> {
    let matrix = gradient_matrix(gradient.rotation_degrees, gradient.pivot);
    let (start, end) = (gradient.start, gradient.end);

    match gradient.kind {
        GradientKind::Linear { from, to } => {
            let pattern = cairo::LinearGradient::new(from.x, from.y, to.x, to.y);
            pattern.add_color_stop_rgba(0.0, start.r, start.g, start.b, start.a);
            pattern.add_color_stop_rgba(1.0, end.r, end.g, end.b, end.a);
            pattern.set_matrix(matrix);
            cr.set_source(&pattern)?;
        }
        GradientKind::Radial { center, radius } => {
            let pattern =
                cairo::RadialGradient::new(center.x, center.y, 0.0, center.x, center.y, radius);
            pattern.add_color_stop_rgba(0.0, start.r, start.g, start.b, start.a);
            pattern.add_color_stop_rgba(1.0, end.r, end.g, end.b, end.a);
            pattern.set_matrix(matrix);
            cr.set_source(&pattern)?;
        }
        GradientKind::Sweep { center } => {
            let reach = sweep_reach(cr, center)?;
            let pattern = sweep_mesh(gradient, center, reach);
            pattern.set_matrix(matrix);
            cr.set_source(&pattern)?;
        }
    }
    Ok(())
}

/// Distance from `center` to the farthest corner of the clip area
fn sweep_reach(cr: &Context, center: Point) -> Result<f64, cairo::Error> {
    let (x1, y1, x2, y2) = cr.clip_extents()?;
    let reach = [(x1, y1), (x2, y1), (x1, y2), (x2, y2)]
        .iter()
        .map(|(x, y)| (x - center.x).hypot(y - center.y))
        .fold(0.0, f64::max);
    Ok(reach.max(1.0))
}

fn set_corner(mesh: &Mesh, corner: MeshCorner, color: &Color) {
    mesh.set_corner_color_rgba(corner, color.r, color.g, color.b, color.a);
}

/// Conic gradient from angle 0 to a full turn, built from pie-shaped mesh
/// patches since Cairo has no native sweep gradient
fn sweep_mesh(gradient: &GradientDescriptor, center: Point, reach: f64) -> Mesh {
    let mesh = Mesh::new();
    let step = 2.0 * PI / SWEEP_PATCHES as f64;
    // Cubic Bezier handle length for a circular arc of `step` radians
    let handle = 4.0 / 3.0 * (step / 4.0).tan() * reach;

    for i in 0..SWEEP_PATCHES {
        let a0 = i as f64 * step;
        let a1 = a0 + step;
        let c0 = gradient.color_at(i as f64 / SWEEP_PATCHES as f64);
        let c1 = gradient.color_at((i + 1) as f64 / SWEEP_PATCHES as f64);

        let p0 = (center.x + reach * a0.cos(), center.y + reach * a0.sin());
        let p1 = (center.x + reach * a1.cos(), center.y + reach * a1.sin());

        mesh.begin_patch();
        mesh.move_to(center.x, center.y);
        mesh.line_to(p0.0, p0.1);
        mesh.curve_to(
            p0.0 - handle * a0.sin(),
            p0.1 + handle * a0.cos(),
            p1.0 + handle * a1.sin(),
            p1.1 - handle * a1.cos(),
            p1.0,
            p1.1,
        );
        mesh.line_to(center.x, center.y);
        set_corner(&mesh, MeshCorner::MeshCorner0, &c0);
        set_corner(&mesh, MeshCorner::MeshCorner1, &c0);
        set_corner(&mesh, MeshCorner::MeshCorner2, &c1);
        set_corner(&mesh, MeshCorner::MeshCorner3, &c1);
        mesh.end_patch();
    }

    mesh
}

fn render_label(cr: &Context, label: &TextCommand) -> Result<(), cairo::Error> {
    cr.save()?;
    label.color.apply_to_cairo(cr);
    let extents = pango_text_extents(cr, &label.text, LABEL_FONT_FAMILY, label.size);
    let origin = label_origin(label.center, &extents);
    pango_show_text_at(
        cr,
        origin.x,
        origin.y,
        &label.text,
        LABEL_FONT_FAMILY,
        label.size,
    );
    cr.restore()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::CircleProgress;
    use cairo::{Format, ImageSurface};
    use circle_progress_types::{ProgressStyle, ShaderMode};

    const SIZE: i32 = 100;

    fn render(progress: &CircleProgress) -> ImageSurface {
        let surface = ImageSurface::create(Format::ARgb32, SIZE, SIZE).unwrap();
        {
            let cr = Context::new(&surface).unwrap();
            render_draw_list(&cr, &progress.render().unwrap()).unwrap();
        }
        surface.flush();
        surface
    }

    fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> u32 {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y * stride + x * 4;
        u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ])
    }

    fn solid(first: i32) -> CircleProgress {
        let mut progress = CircleProgress::new();
        progress.on_resize(SIZE as u32, SIZE as u32);
        progress.set_style(ProgressStyle::Solid);
        progress.set_progress_start_color(Color::from_argb(0xffff0000));
        progress.set_progress_end_color(Color::from_argb(0xffff0000));
        progress.set_progress_formatter(None);
        progress.set_progress_first(first);
        progress
    }

    #[test]
    fn test_visible_sweep() {
        assert_eq!(visible_sweep(0.0), None);
        assert_eq!(visible_sweep(-45.0), None);
        assert_eq!(visible_sweep(180.0), Some(180.0));
        assert_eq!(visible_sweep(540.0), Some(360.0));
    }

    #[test]
    fn test_gradient_matrix_rotates_about_pivot() {
        let matrix = gradient_matrix(90.0, Point::new(10.0, 10.0));
        let (x, y) = matrix.transform_point(10.0, 10.0);
        assert!((x - 10.0).abs() < 1e-9 && (y - 10.0).abs() < 1e-9);

        // User-space point below the pivot samples pattern space to its right
        let (x, y) = matrix.transform_point(10.0, 20.0);
        assert!((x - 20.0).abs() < 1e-9);
        assert!((y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_solid_covers_center() {
        let mut surface = render(&solid(100));
        assert_eq!(pixel(&mut surface, 50, 50), 0xffff0000);
    }

    #[test]
    fn test_half_solid_starts_at_top() {
        // Start degree -90 turns the wedge onto the right half
        let mut surface = render(&solid(50));
        assert_eq!(pixel(&mut surface, 75, 50), 0xffff0000);
        assert_eq!(pixel(&mut surface, 25, 50), 0xffe3e3e5);
    }

    #[test]
    fn test_line_style_leaves_center_empty() {
        let mut progress = CircleProgress::new();
        progress.on_resize(SIZE as u32, SIZE as u32);
        progress.set_progress_formatter(None);
        progress.set_progress_first(60);

        let mut surface = render(&progress);
        assert_eq!(pixel(&mut surface, 50, 50) >> 24, 0);
    }

    #[test]
    fn test_gradients_render() {
        for mode in [ShaderMode::Linear, ShaderMode::Radial, ShaderMode::Sweep] {
            let mut progress = solid(100);
            progress.set_shader_mode(mode);
            progress.set_progress_end_color(Color::from_argb(0xff0000ff));

            let mut surface = render(&progress);
            assert_eq!(pixel(&mut surface, 70, 50) >> 24, 0xff);
        }
    }

    #[test]
    fn test_sweep_gradient_colors_follow_angle() {
        let mut progress = solid(100);
        progress.set_start_degree(0);
        progress.set_shader_mode(ShaderMode::Sweep);
        progress.set_progress_end_color(Color::from_argb(0xff0000ff));

        let mut surface = render(&progress);
        let red = |px: u32| (px >> 16) & 0xff;
        let blue = |px: u32| px & 0xff;

        // About ten degrees clockwise of 3 o'clock: near the start color
        let after_start = pixel(&mut surface, 79, 55);
        assert!(red(after_start) > 220, "{:08x}", after_start);
        assert!(blue(after_start) < 35, "{:08x}", after_start);

        // About ten degrees before a full turn: near the end color
        let before_end = pixel(&mut surface, 79, 44);
        assert!(blue(before_end) > 220, "{:08x}", before_end);
        assert!(red(before_end) < 35, "{:08x}", before_end);
    }

    fn label_only(start_degree: i32) -> CircleProgress {
        let mut progress = CircleProgress::new();
        progress.on_resize(SIZE as u32, SIZE as u32);
        progress.set_progress_start_color(Color::TRANSPARENT);
        progress.set_progress_end_color(Color::TRANSPARENT);
        progress.set_progress_background_color(Color::TRANSPARENT);
        progress.set_progress_text_color(Color::from_argb(0xff000000));
        progress.set_progress_text_size(20.0);
        progress.set_start_degree(start_degree);
        progress.set_progress_first(100);
        progress
    }

    /// Inclusive bounds (min_x, min_y, max_x, max_y) of non-transparent pixels
    fn ink_bounds(surface: &mut ImageSurface) -> Option<(usize, usize, usize, usize)> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for y in 0..SIZE as usize {
            for x in 0..SIZE as usize {
                if pixel(surface, x, y) >> 24 == 0 {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }

    #[test]
    fn test_label_ignores_start_degree() {
        let mut top = render(&label_only(-90));
        let mut tilted = render(&label_only(45));

        let top_bytes = top.data().unwrap().to_vec();
        let tilted_bytes = tilted.data().unwrap().to_vec();
        assert!(top_bytes.iter().any(|&b| b != 0));
        assert_eq!(top_bytes, tilted_bytes);
    }

    #[test]
    fn test_label_centered() {
        let progress = label_only(-90);
        let list = progress.render().unwrap();
        let label = list.label.clone().unwrap();
        assert_eq!(label.text, "100%");

        let mut surface = render(&progress);
        let (x0, y0, x1, y1) = ink_bounds(&mut surface).unwrap();
        let ink_center_x = (x0 + x1 + 1) as f64 / 2.0;
        let ink_center_y = (y0 + y1 + 1) as f64 / 2.0;

        // Baseline sits half the ink height below the center, so the ink
        // box center lands at center_y + height + y_bearing
        let extents = {
            let scratch = ImageSurface::create(Format::ARgb32, 1, 1).unwrap();
            let cr = Context::new(&scratch).unwrap();
            pango_text_extents(&cr, &label.text, LABEL_FONT_FAMILY, label.size)
        };
        let expected_y = 50.0 + extents.height + extents.y_bearing;

        assert!((ink_center_x - 50.0).abs() <= 1.0, "ink center x {}", ink_center_x);
        assert!(
            (ink_center_y - expected_y).abs() <= 1.0,
            "ink center y {} expected {}",
            ink_center_y,
            expected_y
        );
    }
}
