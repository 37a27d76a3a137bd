use ratatui::{prelude::*, widgets::*};

use crate::models::{BalanceStatus, Network, NotificationKind};

/// Network selector rendered as tabs
pub fn render_network_tabs(networks: &[Network], selected: Network) -> Tabs<'static> {
    let titles: Vec<Line> = networks.iter().map(|n| Line::from(n.label())).collect();
    let index = networks.iter().position(|n| *n == selected).unwrap_or(0);

    Tabs::new(titles)
        .select(index)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

/// Bordered block, highlighted when focused
pub fn panel_block(title: String, is_focused: bool, is_editing: bool) -> Block<'static> {
    let border_style = if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

/// Action hint that greys out while its request is in flight
pub fn button_line(label: &str, loading_label: &str, loading: bool) -> Line<'static> {
    if loading {
        Line::from(Span::styled(
            format!("[ {} ]", loading_label),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            format!("[ {} ]", label),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ))
    }
}

/// Toast colors
pub fn notification_style(kind: NotificationKind) -> Style {
    match kind {
        NotificationKind::Success => Style::default().fg(Color::White).bg(Color::Green),
        NotificationKind::Error => Style::default().fg(Color::White).bg(Color::Red),
    }
}

/// Badge color for the reserve health
pub fn balance_status_color(status: BalanceStatus) -> Color {
    match status {
        BalanceStatus::High => Color::Green,
        BalanceStatus::Medium => Color::Yellow,
        BalanceStatus::Low => Color::Red,
    }
}

/// Shorten a long address to `head…tail` when it does not fit `width`
pub fn fit_address(address: &str, width: usize) -> String {
    let len = address.chars().count();
    if len <= width || width < 8 {
        return address.to_string();
    }
    let keep = (width - 1) / 2;
    let head: String = address.chars().take(keep).collect();
    let tail: String = address.chars().skip(len - keep).collect();
    format!("{}…{}", head, tail)
}

/// Terminal column of a byte cursor inside `text`
pub fn cursor_column(text: &str, cursor_position: usize) -> u16 {
    let column = match text.get(..cursor_position) {
        Some(prefix) => prefix.chars().count(),
        None => text.chars().count(),
    };
    u16::try_from(column).unwrap_or(u16::MAX)
}

/// Top-right toast area sized to the message, kept inside `area`
pub fn toast_rect(message: &str, area: Rect) -> Rect {
    let wanted = message.chars().count().saturating_add(4).min(u16::MAX as usize) as u16;
    let max_width = area.width.saturating_sub(2).max(20);
    let width = wanted.clamp(20, max_width).min(area.width);
    let toast = Rect {
        x: area.right().saturating_sub(width.saturating_add(1)),
        y: area.y.saturating_add(1),
        width,
        height: 3,
    };
    toast.intersection(area)
}

/// Auto-expiring toast in the top-right corner
pub fn render_toast(f: &mut Frame, message: &str, style: Style, area: Rect) {
    let toast_area = toast_rect(message, area);
    if toast_area.is_empty() {
        return;
    }

    let toast = Paragraph::new(message)
        .style(style)
        .block(Block::default().borders(Borders::ALL).style(style))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, toast_area);
    f.render_widget(toast, toast_area);
}

/// Centered rectangle for popups
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_address() {
        let addr = "0x7d20dcdb2bca4f508ea9613994683eb4e76e9c4ed371169677c1be02aaf0b58e";
        assert_eq!(fit_address(addr, 100), addr);
        let short = fit_address(addr, 21);
        assert_eq!(short, "0x7d20dcdb…02aaf0b58e");
        assert_eq!(short.chars().count(), 21);
    }

    #[test]
    fn test_cursor_column_counts_chars() {
        assert_eq!(cursor_column("0xabc", 3), 3);
        // "é" is two bytes wide
        assert_eq!(cursor_column("é0x", 2), 1);
        assert_eq!(cursor_column("é0x", 4), 3);
        // Off a char boundary falls back to the end
        assert_eq!(cursor_column("é", 1), 1);
    }

    #[test]
    fn test_toast_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = toast_rect("Sent 10 SUI", area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.right(), 79);

        let rect = toast_rect(&"x".repeat(70_000), area);
        assert_eq!(rect.width, 78);
        assert_eq!(area.intersection(rect), rect);

        let tiny = Rect::new(0, 0, 10, 2);
        let rect = toast_rect("Request failed", tiny);
        assert!(rect.width <= 10);
        assert_eq!(tiny.intersection(rect), rect);
    }

    #[test]
    fn test_render_toast_with_huge_message() {
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(80, 24)).unwrap();
        let message = "x".repeat(70_000);
        terminal
            .draw(|f| {
                let area = f.area();
                render_toast(f, &message, notification_style(NotificationKind::Error), area)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(79, 1)].symbol(), " ");
        assert_eq!(buffer[(2, 2)].symbol(), "x");
    }

    #[test]
    fn test_balance_colors() {
        assert_eq!(balance_status_color(BalanceStatus::High), Color::Green);
        assert_eq!(balance_status_color(BalanceStatus::Low), Color::Red);
    }
}
