use line_canvas::{Canvas, FOREGROUND, WIDTH};

const ON: char = '#';
const OFF: char = '.';

/// Terminal preview of the first `columns` columns, one text line per row.
pub(super) fn ascii(canvas: &Canvas, columns: usize) -> String {
    let columns = columns.clamp(1, WIDTH);
    let mut out = String::with_capacity((columns + 1) * canvas.rows().count());

    for row in canvas.rows() {
        out.extend(
            row[..columns]
                .iter()
                .map(|&px| if px == FOREGROUND { ON } else { OFF }),
        );
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use line_canvas::HEIGHT;

    use super::*;

    #[test]
    fn preview_marks_foreground_pixels() {
        let mut canvas = Canvas::new();
        canvas.set_pixel(1, 0, true).unwrap();

        let text = ascii(&canvas, 4);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), HEIGHT);
        assert_eq!(lines[0], ".#..");
        assert!(lines[1..].iter().all(|line| *line == "...."));
    }

    #[test]
    fn column_count_is_clamped() {
        let canvas = Canvas::new();

        assert_eq!(ascii(&canvas, 0).lines().next(), Some("."));
        assert_eq!(ascii(&canvas, 1000).lines().next().map(str::len), Some(WIDTH));
    }
}
