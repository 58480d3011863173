use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Rect of at most `width` x `height` centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}

/// `rect` moved by a signed cell offset, kept inside `bounds`.
pub fn shift_within(rect: Rect, dx: i16, dy: i16, bounds: Rect) -> Rect {
    let max_x = bounds.right().saturating_sub(rect.width);
    let max_y = bounds.bottom().saturating_sub(rect.height);
    let x = (i32::from(rect.x) + i32::from(dx))
        .clamp(i32::from(bounds.x), i32::from(max_x.max(bounds.x)));
    let y = (i32::from(rect.y) + i32::from(dy))
        .clamp(i32::from(bounds.y), i32::from(max_y.max(bounds.y)));
    Rect {
        x: x as u16,
        y: y as u16,
        ..rect
    }
    .intersection(bounds)
}

/// Hard-wrap `text` into rows of at most `width` chars. Keeps at least one
/// (possibly empty) row.
pub fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    for raw in text.lines() {
        let chars: Vec<char> = raw.chars().collect();
        if chars.is_empty() {
            out.push(String::new());
            continue;
        }
        out.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_split_header_body_footer() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header, Rect::new(0, 0, 80, 3));
        assert_eq!(body, Rect::new(0, 3, 80, 18));
        assert_eq!(footer, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn centered_rect_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect_by_size(area, 40, 10), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect_by_size(area, 200, 50), area);
    }

    #[test]
    fn shift_stays_inside_bounds() {
        let bounds = Rect::new(0, 0, 20, 10);
        let button = Rect::new(5, 5, 6, 1);
        assert_eq!(shift_within(button, 2, -1, bounds), Rect::new(7, 4, 6, 1));
        assert_eq!(shift_within(button, 50, 50, bounds), Rect::new(14, 9, 6, 1));
        assert_eq!(shift_within(button, -50, -50, bounds), Rect::new(0, 0, 6, 1));
    }

    #[test]
    fn wrap_counts_chars() {
        assert_eq!(wrap_chars("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_chars("ääää", 3), vec!["äää", "ä"]);
        assert_eq!(wrap_chars("", 4), vec![""]);
        assert!(wrap_chars("abc", 0).is_empty());
    }
}
