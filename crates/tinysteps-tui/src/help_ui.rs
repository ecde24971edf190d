use crate::ui::rgb;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tinysteps_core::theme::ThemeColors;

/// Render keybindings help popup
pub fn render_help(frame: &mut Frame, colors: &ThemeColors, area: Rect) {
    let popup_area = centered_rect(70, 85, area);
    frame.render_widget(Clear, popup_area);

    let bg_color = rgb(colors.background);
    let fg_color = rgb(colors.foreground);
    let primary_color = rgb(colors.primary);

    let keybindings = get_keybindings_content(
        primary_color,
        rgb(colors.selected),
        fg_color,
        rgb(colors.muted),
        bg_color,
    );

    let help_text = Paragraph::new(keybindings)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keybindings Help ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(primary_color))
                .style(Style::default().bg(bg_color)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color))
        .alignment(Alignment::Left);

    frame.render_widget(help_text, popup_area);
}

/// Get all keybindings content as styled lines
fn get_keybindings_content(
    primary: Color,
    accent: Color,
    fg: Color,
    muted: Color,
    bg: Color,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let section = |title: &str| -> Line<'static> {
        Line::from(vec![Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(bg)
                .bg(primary)
                .add_modifier(Modifier::BOLD),
        )])
    };

    let key = |k: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:12}", k),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc.to_string(), Style::default().fg(fg)),
        ])
    };

    lines.push(section("Everywhere"));
    lines.push(key("m", "Open the menu"));
    lines.push(key("s", "Buy Items"));
    lines.push(key("B", "Curated Bundles"));
    lines.push(key("i", "The Science"));
    lines.push(key("p", "Our Philosophy"));
    lines.push(key("?", "Toggle this help"));
    lines.push(key("q", "Quit"));
    lines.push(Line::from(""));

    lines.push(section("Activities"));
    lines.push(key("j / k", "Move between activities"));
    lines.push(key("ENTER", "Open activity"));
    lines.push(key("/", "Search titles and objectives"));
    lines.push(key("a", "Choose an age"));
    lines.push(key("ESC", "Clear search"));
    lines.push(Line::from(""));

    lines.push(section("Activity Detail"));
    lines.push(key("j / k", "Scroll"));
    lines.push(key("n", "Up next"));
    lines.push(key("o", "Shop for the first material"));
    lines.push(key("y", "Share (copies the link when sharing is unavailable)"));
    lines.push(key("ESC", "Back to activities"));
    lines.push(Line::from(""));

    lines.push(section("Buy Items"));
    lines.push(key("← / →", "Change age"));
    lines.push(key("c", "Montessori classics only"));
    lines.push(key("ENTER", "Search the marketplace for the item"));
    lines.push(Line::from(""));

    lines.push(section("Bundles"));
    lines.push(key("ENTER", "Expand a bundle or open an activity"));
    lines.push(key("← / →", "Change bundle age"));
    lines.push(key("x", "Show all bundles"));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![Span::styled(
        "  Press ? or ESC to close",
        Style::default().fg(muted).add_modifier(Modifier::ITALIC),
    )]));

    lines
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
