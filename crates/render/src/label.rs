//! Progress label formatting and placement

use crate::geometry::Point;

/// Turns a progress value into label text
pub trait ProgressFormatter {
    fn format(&self, progress: i32, max: i32) -> String;
}

impl<F> ProgressFormatter for F
where
    F: Fn(i32, i32) -> String,
{
    fn format(&self, progress: i32, max: i32) -> String {
        self(progress, max)
    }
}

/// Rounded percentage, e.g. `"42%"`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProgressFormatter;

impl ProgressFormatter for DefaultProgressFormatter {
    fn format(&self, progress: i32, max: i32) -> String {
        let percent = (progress as f64 / max as f64 * 100.0).round() as i64;
        format!("{}%", percent)
    }
}

/// Label text, or `None` when there is no formatter or it yields nothing
pub fn label_text(
    formatter: Option<&dyn ProgressFormatter>,
    progress: i32,
    max: i32,
) -> Option<String> {
    let text = formatter?.format(progress, max);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Measured ink box of a text run, Cairo conventions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
    pub x_bearing: f64,
    pub y_bearing: f64,
}

/// Origin (left end of the baseline) that centers the text horizontally on
/// `center` and puts the baseline half the text height below it
pub fn label_origin(center: Point, extents: &TextExtents) -> Point {
    Point::new(
        center.x - extents.width / 2.0 - extents.x_bearing,
        center.y + extents.height / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_formatter() {
        let formatter = DefaultProgressFormatter;
        assert_eq!(formatter.format(0, 100), "0%");
        assert_eq!(formatter.format(100, 100), "100%");
        assert_eq!(formatter.format(1, 3), "33%");
        assert_eq!(formatter.format(2, 3), "67%");
        assert_eq!(formatter.format(150, 100), "150%");
    }

    #[test]
    fn test_label_text() {
        assert_eq!(
            label_text(Some(&DefaultProgressFormatter), 0, 100),
            Some("0%".to_string())
        );
        assert_eq!(label_text(None, 50, 100), None);

        let empty = |_: i32, _: i32| String::new();
        assert_eq!(label_text(Some(&empty), 50, 100), None);

        let custom = |_: i32, _: i32| "Hello 12".to_string();
        assert_eq!(
            label_text(Some(&custom), 50, 100),
            Some("Hello 12".to_string())
        );
    }

    #[test]
    fn test_label_origin() {
        let extents = TextExtents {
            width: 20.0,
            height: 10.0,
            x_bearing: 1.0,
            y_bearing: -10.0,
        };
        let origin = label_origin(Point::new(50.0, 50.0), &extents);
        assert_eq!(origin, Point::new(39.0, 55.0));
    }
}
