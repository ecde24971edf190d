// UI rendering logic
use crate::app::BundleRow;
use crate::help_ui::{centered_rect, render_help};
use crate::{App, InputMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use tinysteps_core::bundles::bundle_age_label;
use tinysteps_core::models::{Activity, AgeBand, AgeSelector};
use tinysteps_core::science::{
    AFFILIATE_NOTE, BUNDLES_COMING_NEXT, PHILOSOPHY, SCIENCE, SHOPPING_NOTE,
};
use tinysteps_core::shopping::compact_age_label;
use tinysteps_core::theme::{self, ThemeColors};
use tinysteps_core::ViewMode;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    match app.mode() {
        ViewMode::Listing => render_listing(frame, app, chunks[1]),
        ViewMode::Detail => render_detail(frame, app, chunks[1]),
        ViewMode::ShoppingList => render_shopping(frame, app, chunks[1]),
        ViewMode::BundleBrowsing => render_bundles(frame, app, chunks[1]),
        ViewMode::ScienceInfo => render_science(frame, app, chunks[1]),
    }

    render_status_bar(frame, app, chunks[2]);

    // Overlays, last so they draw on top
    match app.input_mode {
        InputMode::AgePicker => render_age_picker(frame, app, area),
        InputMode::Menu => render_menu_drawer(frame, app, area),
        InputMode::Normal | InputMode::Searching => {}
    }
    if app.show_philosophy {
        render_philosophy(frame, app, area);
    }
    if app.show_help {
        render_help(frame, &app.theme.colors, area);
    }
}

/// Convert a theme color for ratatui
pub(crate) fn rgb(color: theme::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let title = Line::from(vec![
        Span::styled(
            "🌱 TinySteps",
            Style::default()
                .fg(rgb(colors.primary))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", app.mode().label()),
            Style::default().fg(rgb(colors.title)),
        ),
        Span::styled(
            format!("  |  {}", app.controller.selected_age().label()),
            Style::default().fg(rgb(colors.subtitle)),
        ),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(rgb(colors.border))),
    );
    frame.render_widget(header, area);
}

// --- Listing ---------------------------------------------------------------

fn render_listing(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_search_input(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_activity_list(frame, app, body[0]);
    render_activity_preview(frame, app, body[1]);
}

fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let input_style = match app.input_mode {
        InputMode::Searching => Style::default().fg(rgb(colors.border_focused)),
        _ => Style::default().fg(rgb(colors.border)),
    };

    let query = app.controller.search_query();
    let text = if query.is_empty() && app.input_mode != InputMode::Searching {
        Span::styled("Search activities...", Style::default().fg(rgb(colors.muted)))
    } else {
        Span::styled(query.to_string(), Style::default().fg(rgb(colors.foreground)))
    };

    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search (/ to type, ESC to clear) ")
            .border_style(input_style),
    );
    frame.render_widget(input, area);

    // Show cursor when in search mode
    if app.input_mode == InputMode::Searching {
        frame.set_cursor_position((
            area.x + query.chars().count() as u16 + 1,
            area.y + 1,
        ));
    }
}

fn age_badge(colors: &ThemeColors, tag: &str) -> Span<'static> {
    let color = colors.age_badge(AgeBand::from_tag(tag));
    Span::styled(
        format!(" {} ", tag),
        Style::default()
            .fg(rgb(colors.background))
            .bg(rgb(color))
            .add_modifier(Modifier::BOLD),
    )
}

fn activity_card(colors: &ThemeColors, activity: &Activity, selected: bool) -> ListItem<'static> {
    let title_style = if selected {
        Style::default()
            .fg(rgb(colors.selected))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(rgb(colors.title))
    };

    let lines = vec![
        Line::from(vec![
            age_badge(colors, &activity.filter_tag),
            Span::raw(" "),
            Span::raw(activity.category.icon()),
            Span::raw(" "),
            Span::styled(activity.title.clone(), title_style),
        ]),
        Line::from(Span::styled(
            format!("   {}", activity.objective),
            Style::default().fg(rgb(colors.subtitle)),
        )),
        Line::from(Span::styled(
            format!("   📦 {}", activity.material_summary()),
            Style::default().fg(rgb(colors.muted)),
        )),
        Line::from(""),
    ];

    ListItem::new(lines)
}

fn render_activity_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let colors = app.theme.colors.clone();
    let items: Vec<ListItem> = app
        .filtered()
        .iter()
        .enumerate()
        .map(|(i, a)| activity_card(&colors, a, i == app.selected_index))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Activities ({}) ", items.len()))
        .border_style(Style::default().fg(rgb(colors.border)));

    if items.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No activities found matching your criteria.",
                Style::default().fg(rgb(colors.muted)),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(rgb(colors.selected_bg)));
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_activity_preview(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let lines = match app.highlighted_activity() {
        Some(activity) => vec![
            Line::from(Span::styled(
                activity.title.clone(),
                Style::default()
                    .fg(rgb(colors.title))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} {}", activity.category.icon(), activity.category.label()),
                Style::default().fg(rgb(colors.subtitle)),
            )),
            Line::from(""),
            Line::from(Span::styled(
                activity.reassurance.clone(),
                Style::default()
                    .fg(rgb(colors.foreground))
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "ENTER to view the full activity",
                Style::default().fg(rgb(colors.muted)),
            )),
        ],
        None => vec![],
    };

    let preview = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Preview ")
                .border_style(Style::default().fg(rgb(colors.border))),
        );
    frame.render_widget(preview, area);
}

// --- Detail ----------------------------------------------------------------

fn section_heading(text: &str, color: theme::Color) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            text.to_uppercase(),
            Style::default().fg(rgb(color)).add_modifier(Modifier::BOLD),
        )),
    ]
}

fn body_line(colors: &ThemeColors, text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(rgb(colors.foreground)),
    ))
}

fn detail_lines(app: &App, activity: &Activity) -> Vec<Line<'static>> {
    let colors = &app.theme.colors;
    let mut lines = vec![
        Line::from(vec![
            age_badge(colors, &activity.filter_tag),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", activity.category.icon(), activity.category.label()),
                Style::default().fg(rgb(colors.subtitle)),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            activity.title.clone(),
            Style::default()
                .fg(rgb(colors.title))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            activity.reassurance.clone(),
            Style::default()
                .fg(rgb(colors.subtitle))
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    lines.extend(section_heading("Objective", colors.primary));
    lines.push(body_line(colors, &activity.objective));
    lines.extend(section_heading("Outcome", colors.primary));
    lines.push(body_line(colors, &activity.outcome));
    lines.extend(section_heading("Why it matters", colors.primary));
    lines.push(body_line(colors, &activity.why_matters));

    lines.extend(section_heading("Step by step", colors.primary));
    for (i, step) in activity.steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>2}. ", i + 1),
                Style::default().fg(rgb(colors.primary)),
            ),
            Span::styled(step.caption.clone(), Style::default().fg(rgb(colors.foreground))),
        ]));
    }

    lines.extend(section_heading("When to pause", colors.pause));
    lines.push(body_line(colors, &activity.when_to_pause));

    lines.extend(section_heading("Materials", colors.primary));
    if activity.materials.is_empty() {
        lines.push(Line::from(Span::styled(
            "No special materials needed.",
            Style::default().fg(rgb(colors.muted)),
        )));
    } else {
        for material in &activity.materials {
            let mut spans = vec![Span::styled(
                format!("  • {}", material),
                Style::default().fg(rgb(colors.foreground)),
            )];
            if app.controller.is_classic(material) {
                spans.push(Span::styled(
                    "  ✨ Classic",
                    Style::default().fg(rgb(colors.classic)),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(Span::styled(
            format!("  o: shop for {}", tinysteps_core::links::buy_query(activity)),
            Style::default().fg(rgb(colors.muted)),
        )));
    }

    lines.extend(section_heading("Safety", colors.safety));
    lines.push(body_line(colors, &activity.safety_notes));

    if let Some(next) = app.controller.next_activity() {
        lines.extend(section_heading("Up next", colors.subtitle));
        lines.push(Line::from(vec![
            age_badge(colors, &next.filter_tag),
            Span::raw(" "),
            Span::styled(
                next.title.clone(),
                Style::default().fg(rgb(colors.selected)),
            ),
            Span::styled("  (n)", Style::default().fg(rgb(colors.muted))),
        ]));
    }

    lines
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let lines = match app.controller.selected_activity() {
        Some(activity) => detail_lines(app, activity),
        None => vec![Line::from("No activity selected.")],
    };

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Activity (ESC back, n next, o buy, y share) ")
                .border_style(Style::default().fg(rgb(colors.border_focused))),
        );
    frame.render_widget(detail, area);
}

// --- Shopping list ---------------------------------------------------------

fn age_chips(colors: &ThemeColors, options: &[AgeSelector], current: &AgeSelector, label: impl Fn(&AgeSelector) -> String) -> Line<'static> {
    let mut spans = Vec::new();
    for option in options {
        let style = if option == current {
            Style::default()
                .fg(rgb(colors.background))
                .bg(rgb(colors.primary))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(rgb(colors.subtitle))
        };
        spans.push(Span::styled(format!(" {} ", label(option)), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_shopping(frame: &mut Frame, app: &mut App, area: Rect) {
    let colors = app.theme.colors.clone();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Age chips + classic toggle
            Constraint::Min(3),    // Items
            Constraint::Length(4), // Notes
        ])
        .split(area);

    let toggle = if app.classic_only {
        Span::styled("[x] Montessori classics only", Style::default().fg(rgb(colors.classic)))
    } else {
        Span::styled("[ ] Montessori classics only", Style::default().fg(rgb(colors.muted)))
    };
    let header = Paragraph::new(vec![
        age_chips(
            &colors,
            &AgeSelector::all_filters(),
            app.controller.selected_age(),
            compact_age_label,
        ),
        Line::from(vec![toggle, Span::styled("  (c)", Style::default().fg(rgb(colors.muted)))]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Buy Items (←/→ age) ")
            .border_style(Style::default().fg(rgb(colors.border))),
    );
    frame.render_widget(header, chunks[0]);

    let shopping = app.shopping_items();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} items ", shopping.len()))
        .border_style(Style::default().fg(rgb(colors.border)));

    if shopping.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No matches found in this category.",
            Style::default().fg(rgb(colors.muted)),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, chunks[1]);
    } else {
        let items: Vec<ListItem> = shopping
            .iter()
            .map(|name| {
                let mut spans = vec![Span::styled(
                    format!("🛒 {}", name),
                    Style::default().fg(rgb(colors.foreground)),
                )];
                if app.controller.is_classic(name) {
                    spans.push(Span::styled(
                        "  ✨ Classic",
                        Style::default().fg(rgb(colors.classic)),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();
        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(rgb(colors.selected_bg))
                .fg(rgb(colors.selected))
                .add_modifier(Modifier::BOLD),
        );
        frame.render_stateful_widget(list, chunks[1], &mut app.shopping_state);
    }

    render_footnotes(frame, &colors, &[SHOPPING_NOTE, AFFILIATE_NOTE], chunks[2]);
}

fn render_footnotes(frame: &mut Frame, colors: &ThemeColors, notes: &[&str], area: Rect) {
    let lines: Vec<Line> = notes
        .iter()
        .map(|n| Line::from(Span::styled(n.to_string(), Style::default().fg(rgb(colors.muted)))))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

// --- Bundles ---------------------------------------------------------------

fn render_bundles(frame: &mut Frame, app: &mut App, area: Rect) {
    let colors = app.theme.colors.clone();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Bundle age filter
            Constraint::Min(3),    // Rows
            Constraint::Length(3), // Notes
        ])
        .split(area);

    let chips = Paragraph::new(age_chips(
        &colors,
        &app.bundle_age_options(),
        &app.bundle_age,
        |age| bundle_age_label(age).to_string(),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Curated Bundles (←/→ age, x clear) ")
            .border_style(Style::default().fg(rgb(colors.border))),
    );
    frame.render_widget(chips, chunks[0]);

    let rows = app.bundle_rows();
    let catalog = app.controller.catalog();
    let items: Vec<ListItem> = rows
        .iter()
        .filter_map(|row| match row {
            BundleRow::Bundle { bundle_id } => {
                let bundle = catalog.bundle(bundle_id)?;
                let marker = if app.expanded_bundles.contains(bundle_id) { "▾" } else { "▸" };
                Some(ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!("{} {}", marker, bundle.name),
                            Style::default()
                                .fg(rgb(colors.title))
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        age_badge(&colors, &bundle.age_range),
                    ]),
                    Line::from(Span::styled(
                        format!("  {} ({} activities)", bundle.tagline, bundle.items.len()),
                        Style::default().fg(rgb(colors.subtitle)),
                    )),
                ]))
            }
            BundleRow::Activity { activity_id, .. } => {
                let activity = catalog.activity(activity_id)?;
                Some(ListItem::new(Line::from(vec![
                    Span::raw("    "),
                    Span::raw(activity.category.icon()),
                    Span::raw(" "),
                    Span::styled(activity.title.clone(), Style::default().fg(rgb(colors.foreground))),
                    Span::styled(
                        format!("  📦 {}", activity.material_summary()),
                        Style::default().fg(rgb(colors.muted)),
                    ),
                ])))
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(rgb(colors.border)));

    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No bundles for this age yet.",
            Style::default().fg(rgb(colors.muted)),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, chunks[1]);
    } else {
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(rgb(colors.selected_bg)));
        frame.render_stateful_widget(list, chunks[1], &mut app.bundle_state);
    }

    let coming_next = format!("Coming next: {}", BUNDLES_COMING_NEXT);
    render_footnotes(frame, &colors, &[coming_next.as_str(), AFFILIATE_NOTE], chunks[2]);
}

// --- Science ---------------------------------------------------------------

fn render_science(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let heading = |text: &str| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(rgb(colors.primary))
                .add_modifier(Modifier::BOLD),
        ))
    };
    let topic = |title: &str, body: &str| {
        vec![
            Line::from(Span::styled(
                title.to_string(),
                Style::default()
                    .fg(rgb(colors.title))
                    .add_modifier(Modifier::BOLD),
            )),
            body_line(colors, body),
            Line::from(""),
        ]
    };

    let mut lines = vec![
        Line::from(Span::styled(
            SCIENCE.heading,
            Style::default().fg(rgb(colors.subtitle)),
        )),
        Line::from(Span::styled(
            SCIENCE.title,
            Style::default()
                .fg(rgb(colors.title))
                .add_modifier(Modifier::BOLD),
        )),
        body_line(colors, SCIENCE.lede),
        Line::from(""),
        heading(SCIENCE.pillars_heading),
    ];
    for pillar in &SCIENCE.pillars {
        lines.extend(topic(pillar.title, pillar.body));
    }
    lines.push(heading(SCIENCE.comparison_heading));
    for item in &SCIENCE.comparison {
        lines.extend(topic(item.title, item.body));
    }
    lines.push(heading(SCIENCE.impact_kicker));
    lines.extend(topic(SCIENCE.impact.title, SCIENCE.impact.body));
    lines.push(Line::from(Span::styled(
        format!("[ENTER] {}", SCIENCE.call_to_action),
        Style::default()
            .fg(rgb(colors.selected))
            .add_modifier(Modifier::BOLD),
    )));

    let page = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.science_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(rgb(colors.border))),
        );
    frame.render_widget(page, area);
}

// --- Overlays --------------------------------------------------------------

fn render_age_picker(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let popup_area = centered_rect(30, 50, area);
    frame.render_widget(Clear, popup_area);

    let items: Vec<ListItem> = AgeSelector::all_filters()
        .iter()
        .enumerate()
        .map(|(i, age)| {
            let style = if i == app.age_cursor {
                Style::default()
                    .fg(rgb(colors.selected))
                    .bg(rgb(colors.selected_bg))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(rgb(colors.foreground))
            };
            ListItem::new(Line::from(Span::styled(format!(" {} ", age.label()), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Select age ")
            .border_style(Style::default().fg(rgb(colors.border_focused))),
    );
    frame.render_widget(list, popup_area);
}

fn render_menu_drawer(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let drawer = Rect {
        x: area.x,
        y: area.y,
        width: area.width.min(30),
        height: area.height,
    };
    frame.render_widget(Clear, drawer);

    let items: Vec<ListItem> = ViewMode::menu_entries()
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let style = if i == app.menu_cursor {
                Style::default()
                    .fg(rgb(colors.selected))
                    .bg(rgb(colors.selected_bg))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(rgb(colors.foreground))
            };
            ListItem::new(Line::from(Span::styled(format!(" {} ", mode.label()), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Menu ")
            .border_style(Style::default().fg(rgb(colors.border_focused))),
    );
    frame.render_widget(list, drawer);
}

fn render_philosophy(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let popup_area = centered_rect(50, 40, area);
    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", PHILOSOPHY.quote),
            Style::default()
                .fg(rgb(colors.foreground))
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(PHILOSOPHY.source, Style::default().fg(rgb(colors.muted)))),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ENTER] {}", PHILOSOPHY.dismiss),
            Style::default()
                .fg(rgb(colors.selected))
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let modal = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", PHILOSOPHY.title))
                .border_style(Style::default().fg(rgb(colors.border_focused))),
        );
    frame.render_widget(modal, popup_area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let status = if let Some(error) = &app.error_message {
        Span::styled(error.clone(), Style::default().fg(rgb(colors.error)))
    } else if let Some(message) = &app.status_message {
        Span::styled(message.clone(), Style::default().fg(rgb(colors.success)))
    } else {
        let hint = match app.input_mode {
            InputMode::Searching => "SEARCH | type to filter | ENTER/ESC: done",
            InputMode::AgePicker => "AGE | j/k: move | ENTER: select | ESC: close",
            InputMode::Menu => "MENU | j/k: move | ENTER: open | ESC: close",
            InputMode::Normal => match app.mode() {
                ViewMode::Listing => "j/k: move | ENTER: open | /: search | a: age | m: menu | s: shop | B: bundles | ?: help | q: quit",
                ViewMode::Detail => "j/k: scroll | n: next | o: buy | y: share | ESC: back | q: quit",
                ViewMode::ShoppingList => "j/k: move | ←/→: age | c: classics | ENTER: shop | ESC: back",
                ViewMode::BundleBrowsing => "j/k: move | ENTER: expand/open | ←/→: age | ESC: back",
                ViewMode::ScienceInfo => "j/k: scroll | ENTER: explore activities | ESC: back",
            },
        };
        Span::styled(hint, Style::default().fg(rgb(colors.muted)))
    };

    frame.render_widget(Paragraph::new(Line::from(status)), area);
}
