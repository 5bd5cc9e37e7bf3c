use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        body: chunks[0],
        status_bar: chunks[1],
    }
}

pub struct DashboardLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub stats: Rect,
    pub main: Rect,
    pub sidebar: Rect,
}

pub fn dashboard_layout(area: Rect) -> DashboardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title and description
            Constraint::Length(1), // Tabs
            Constraint::Length(4), // Stat cards
            Constraint::Min(5),    // Listings
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Min(40), Constraint::Length(30)])
        .split(rows[3]);

    DashboardLayout {
        header: rows[0],
        tabs: rows[1],
        stats: rows[2],
        main: columns[0],
        sidebar: columns[1],
    }
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_small_area() {
        let area = Rect::new(0, 0, 20, 10);
        let r = centered(area, 60, 30);
        assert_eq!(r, area);

        let r = centered(Rect::new(0, 0, 100, 40), 60, 20);
        assert_eq!(r, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_status_bar_is_last_row() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.body.height, 23);
    }
}
