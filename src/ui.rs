use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span, Text},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders, Clear, List, ListItem, Paragraph, Wrap,
    },
    Frame,
};

use crate::app::{App, InputMode, Screen};
use crate::content::{self, Skill};
use crate::grid::{GridWave, FLARE_INTENSITY, FLARE_RADIUS};
use crate::link::{ChatRole, LinkState};

/// The signature purple of the whole site.
const ACCENT: Color = Color::Rgb(138, 43, 226);

/// Near-black page background the accent fades into.
const BG: (u8, u8, u8) = (5, 5, 5);
const ACCENT_RGB: (u8, u8, u8) = (138, 43, 226);

/// Logical pixels per braille dot. An 80x24 terminal becomes a 1280x768
/// logical viewport, which keeps the renderer's pixel-tuned constants
/// (pull radius, flare falloff) in their intended proportions.
const LOGICAL_SCALE: f64 = 8.0;

/// Map an opacity in [0,1] onto a terminal color by blending the accent
/// toward the page background.
fn glow(alpha: f64) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    let ch = |bg: u8, fg: u8| (bg as f64 + (fg as f64 - bg as f64) * a).round() as u8;
    Color::Rgb(
        ch(BG.0, ACCENT_RGB.0),
        ch(BG.1, ACCENT_RGB.1),
        ch(BG.2, ACCENT_RGB.2),
    )
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    app.frame_area = Some(area);

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);

    match app.screen {
        Screen::Home => render_home(app, frame, body_area),
        Screen::About => render_about(app, frame, body_area),
        Screen::Works => render_works(app, frame, body_area),
        Screen::Link => render_link(app, frame, body_area),
    }

    render_footer(app, frame, footer_area);

    // Popups over everything else
    if app.screen == Screen::Works && app.show_project_modal {
        render_project_modal(app, frame, area);
    }
    if app.show_model_picker {
        render_model_picker(app, frame, area);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let strings = content::strings(app.lang);
    let clock = Local::now().format("%H:%M:%S").to_string();

    let title = Line::from(vec![
        Span::styled(" DREAM // EDITED ", Style::default().fg(ACCENT).bold()),
        Span::styled(
            format!(" {} ", app.lang.as_str()),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
        Span::raw(" "),
        Span::styled(strings.footer_status, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(clock, Style::default().fg(ACCENT)),
        Span::raw(" "),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::Black));
    frame.render_widget(header, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(ACCENT).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };

    let mode_text = match app.screen {
        Screen::Home => " HOME ",
        Screen::About => " ABOUT ",
        Screen::Works => " WORKS ",
        Screen::Link => " LINK ",
    };

    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let hints: Vec<Span> = match (app.screen, app.input_mode) {
        (Screen::Link, InputMode::Editing) => vec![
            Span::styled(" Enter ", key_style),
            Span::styled(" send ", label_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" stop typing ", label_style),
        ],
        (Screen::Link, InputMode::Normal) => vec![
            Span::styled(" i ", key_style),
            Span::styled(" type ", label_style),
            Span::styled(" j/k ", key_style),
            Span::styled(" scroll ", label_style),
            Span::styled(" M ", key_style),
            Span::styled(" model ", label_style),
            Span::styled(" Tab ", key_style),
            Span::styled(" next ", label_style),
            Span::styled(" L ", key_style),
            Span::styled(" lang ", label_style),
            Span::styled(" q ", key_style),
            Span::styled(" quit ", label_style),
        ],
        (Screen::Works, _) => {
            let mut hints = vec![
                Span::styled(" j/k ", key_style),
                Span::styled(" nav ", label_style),
            ];
            if app.show_project_modal {
                hints.extend(vec![
                    Span::styled(" Esc ", key_style),
                    Span::styled(" close ", label_style),
                ]);
            } else {
                hints.extend(vec![
                    Span::styled(" Enter ", key_style),
                    Span::styled(" details ", label_style),
                ]);
            }
            hints.extend(vec![
                Span::styled(" Tab ", key_style),
                Span::styled(" next ", label_style),
                Span::styled(" L ", key_style),
                Span::styled(" lang ", label_style),
                Span::styled(" q ", key_style),
                Span::styled(" quit ", label_style),
            ]);
            hints
        }
        (Screen::About, _) => vec![
            Span::styled(" j/k ", key_style),
            Span::styled(" scroll ", label_style),
            Span::styled(" Tab ", key_style),
            Span::styled(" next ", label_style),
            Span::styled(" L ", key_style),
            Span::styled(" lang ", label_style),
            Span::styled(" q ", key_style),
            Span::styled(" quit ", label_style),
        ],
        (Screen::Home, _) => vec![
            Span::styled(" Enter ", key_style),
            Span::styled(" explore ", label_style),
            Span::styled(" Tab ", key_style),
            Span::styled(" next ", label_style),
            Span::styled(" L ", key_style),
            Span::styled(" lang ", label_style),
            Span::styled(" 1-4 ", key_style),
            Span::styled(" jump ", label_style),
            Span::styled(" q ", key_style),
            Span::styled(" quit ", label_style),
        ],
    };

    let footer_content = Line::from(
        vec![
            Span::styled(mode_text, mode_style),
            Span::styled(" ", label_style),
        ]
        .into_iter()
        .chain(hints)
        .collect::<Vec<_>>(),
    );

    let footer = Paragraph::new(footer_content).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}

fn render_home(app: &mut App, frame: &mut Frame, area: Rect) {
    // No drawing surface yet; try again next frame.
    if area.width == 0 || area.height == 0 {
        return;
    }

    // Braille gives 2x4 dots per cell; everything below works in logical
    // pixels so the grid arithmetic stays viewport-unit agnostic.
    let width = area.width as f64 * 2.0 * LOGICAL_SCALE;
    let height = area.height as f64 * 4.0 * LOGICAL_SCALE;

    let points = app.grid.points(width, height);
    let edges = GridWave::edges(&points);
    let grid = &app.grid;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            paint_flare(ctx, grid, width, height);
            ctx.layer();
            for edge in &edges {
                // Canvas y points up; grid coordinates are screen-space.
                ctx.draw(&CanvasLine {
                    x1: edge.from.0,
                    y1: height - edge.from.1,
                    x2: edge.to.0,
                    y2: height - edge.to.1,
                    color: glow(edge.alpha),
                });
                // Thick segments near the pointer get a second pass one
                // dot lower, the closest a cell grid comes to line width.
                if edge.width > 2.0 {
                    ctx.draw(&CanvasLine {
                        x1: edge.from.0,
                        y1: height - edge.from.1 - LOGICAL_SCALE,
                        x2: edge.to.0,
                        y2: height - edge.to.1 - LOGICAL_SCALE,
                        color: glow(edge.alpha),
                    });
                }
            }
        });

    frame.render_widget(canvas, area);
    render_hero_overlay(app, frame, area);
}

/// Radial wash around the pointer, painted dot by dot in a handful of
/// intensity bands so the draw-call count stays bounded.
fn paint_flare(
    ctx: &mut ratatui::widgets::canvas::Context,
    grid: &GridWave,
    width: f64,
    height: f64,
) {
    const BANDS: usize = 5;
    let mut bands: [Vec<(f64, f64)>; BANDS] = Default::default();

    let (px, py) = grid.pointer();
    let (mx, my) = (px * width, py * height);

    let step = LOGICAL_SCALE;
    let mut x = (mx - FLARE_RADIUS).max(0.0);
    while x <= (mx + FLARE_RADIUS).min(width) {
        let mut y = (my - FLARE_RADIUS).max(0.0);
        while y <= (my + FLARE_RADIUS).min(height) {
            let alpha = grid.flare_alpha(x, y, width, height);
            if alpha > 0.0 {
                let band = (((alpha / FLARE_INTENSITY) * BANDS as f64).ceil() as usize)
                    .clamp(1, BANDS)
                    - 1;
                bands[band].push((x, height - y));
            }
            y += step;
        }
        x += step;
    }

    for (i, coords) in bands.iter().enumerate() {
        if coords.is_empty() {
            continue;
        }
        let band_alpha = FLARE_INTENSITY * (i + 1) as f64 / BANDS as f64;
        ctx.draw(&Points {
            coords: coords.as_slice(),
            color: glow(band_alpha),
        });
    }
}

fn spaced(s: &str) -> String {
    let mut out = String::new();
    for (i, c) in s.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

fn render_hero_overlay(app: &App, frame: &mut Frame, area: Rect) {
    let hero = content::hero_text(app.lang);

    let lines = vec![
        Line::from(Span::styled(
            hero.role.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            spaced(hero.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            spaced(hero.subtitle),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("{} ▾", hero.cta),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text_height = lines.len() as u16;
    let overlay = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(text_height) / 2,
        area.width,
        text_height.min(area.height),
    );

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, overlay);
}

fn render_about(app: &mut App, frame: &mut Frame, area: Rect) {
    let strings = content::strings(app.lang);
    let about = content::about_text(app.lang);

    let [profile_area, skills_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let profile_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(format!(" {} ", strings.profile_data));

    let profile_lines = vec![
        Line::from(Span::styled(
            about.heading,
            Style::default().fg(ACCENT).bold(),
        )),
        Line::from(Span::styled(
            about.name,
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(about.role, Style::default().fg(Color::DarkGray))),
        Line::default(),
        Line::from(about.bio),
        Line::default(),
        Line::from(vec![
            Span::styled("» ", Style::default().fg(ACCENT)),
            Span::raw(about.stat_pcd),
        ]),
        Line::from(vec![
            Span::styled("» ", Style::default().fg(ACCENT)),
            Span::raw(about.stat_setup),
        ]),
        Line::default(),
        Line::from(Span::styled(
            content::CONTACT_EMAIL,
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            content::CONTACT_PHONE,
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            content::CONTACT_LOCATION,
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("© {}", strings.footer_credits),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let profile = Paragraph::new(profile_lines)
        .block(profile_block)
        .wrap(Wrap { trim: true })
        .scroll((app.about_scroll, 0));
    frame.render_widget(profile, profile_area);

    let [core_area, software_area] =
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(skills_area);

    render_skill_block(
        frame,
        core_area,
        strings.core_competencies,
        &content::core_skills(),
        app,
    );
    render_skill_block(
        frame,
        software_area,
        strings.software_stack,
        &content::software_stack(),
        app,
    );
}

fn render_skill_block(frame: &mut Frame, area: Rect, title: &str, skills: &[Skill], app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", title));

    let inner = block.inner(area);
    let bar_width = inner.width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for skill in skills {
        let filled = (skill.level as usize * bar_width) / 100;
        lines.push(Line::from(vec![
            Span::styled(
                skill.name.get(app.lang),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {}%", skill.level),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(ACCENT)),
            Span::styled(
                "░".repeat(bar_width.saturating_sub(filled)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn render_works(app: &mut App, frame: &mut Frame, area: Rect) {
    let strings = content::strings(app.lang);

    let [list_area, preview_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);

    // Store for mouse hit-testing
    app.works_area = Some(list_area);

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(format!(" {} // {} ", strings.works, strings.archives));

    let items: Vec<ListItem> = app
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let hovered = app.hovered_project == Some(i);
            let title_style = if hovered {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", project.id),
                        Style::default().fg(ACCENT),
                    ),
                    Span::styled(project.title.get(app.lang), title_style),
                ]),
                Line::from(Span::styled(
                    format!(
                        "    {} · {} · {}",
                        project.category.get(app.lang),
                        project.year,
                        project.kind.label()
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(list_block)
        .highlight_style(
            Style::default()
                .bg(ACCENT)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, list_area, &mut app.works_state);

    let preview_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" PREVIEW ");

    let preview_text = if let Some(project) = app.selected_project() {
        Text::from(vec![
            Line::from(Span::styled(
                project.title.get(app.lang),
                Style::default().fg(ACCENT).bold(),
            )),
            Line::from(Span::styled(
                format!(
                    "{} · {} · {}",
                    project.category.get(app.lang),
                    project.year,
                    project.kind.label()
                ),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(project.description.get(app.lang)),
            Line::default(),
            Line::from(Span::styled(
                format!("[Enter] {}", strings.click_details),
                Style::default().fg(Color::DarkGray),
            )),
        ])
    } else {
        Text::from("No project selected")
    };

    let preview = Paragraph::new(preview_text)
        .block(preview_block)
        .wrap(Wrap { trim: true });
    frame.render_widget(preview, preview_area);
}

fn render_project_modal(app: &mut App, frame: &mut Frame, area: Rect) {
    let Some(project) = app.selected_project() else {
        return;
    };
    let strings = content::strings(app.lang);

    let popup_width = 70.min(area.width.saturating_sub(4));
    let popup_height = 18.min(area.height.saturating_sub(4));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(format!(
            " {} // {} ",
            project.id,
            project.title.get(app.lang)
        ));

    let mut lines = vec![
        Line::from(Span::styled(
            strings.status,
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        Line::from(Span::styled(
            strings.overview,
            Style::default().fg(ACCENT).bold(),
        )),
        Line::from(project.description.get(app.lang)),
        Line::default(),
        Line::from(Span::styled(
            strings.technical_details,
            Style::default().fg(ACCENT).bold(),
        )),
        Line::from(project.details.get(app.lang)),
        Line::default(),
    ];

    if let Some(url) = project.video_url {
        lines.push(media_line("VIDEO", url));
    }
    if let Some(url) = project.media_url {
        lines.push(media_line("MEDIA", url));
    }
    if let Some(url) = project.before_image {
        lines.push(media_line("BEFORE", url));
    }
    if let Some(url) = project.after_image {
        lines.push(media_line("AFTER", url));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.modal_scroll, 0));
    frame.render_widget(paragraph, popup_area);
}

fn media_line(label: &str, url: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(ACCENT)),
        Span::styled(url, Style::default().fg(Color::Gray)),
    ])
}

fn render_link(app: &mut App, frame: &mut Frame, area: Rect) {
    let [chat_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    // Store for mouse hit-testing and scroll arithmetic (inner size)
    app.chat_area = Some(chat_area);
    app.link_chat_height = chat_area.height.saturating_sub(2);
    app.link_chat_width = chat_area.width.saturating_sub(2);

    let offline = if app.gemini.is_none() { " [offline]" } else { "" };
    let chat_border = match app.link.state() {
        LinkState::AwaitingResponse => Color::Yellow,
        LinkState::Idle => ACCENT,
    };
    let chat_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(chat_border))
        .title(format!(
            " NEURAL_LINK_V.1.0 // {}{} ",
            app.selected_model, offline
        ));

    let mut lines: Vec<Line> = Vec::new();
    for msg in app.link.messages() {
        let (who, style) = match msg.role {
            ChatRole::User => ("YOU", Style::default().fg(Color::Cyan).bold()),
            ChatRole::Model => ("NEURAL_LINK", Style::default().fg(ACCENT).bold()),
        };
        lines.push(Line::from(vec![
            Span::styled(who, style),
            Span::styled(
                format!("  {}", msg.timestamp.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for line in msg.text.lines() {
            lines.push(Line::from(line.to_string()));
        }
        lines.push(Line::default());
    }

    if app.link.is_awaiting() {
        lines.push(Line::from(Span::styled(
            "NEURAL_LINK",
            Style::default().fg(ACCENT).bold(),
        )));
        let dots = ".".repeat(app.thinking_frame() + 1);
        lines.push(Line::from(Span::styled(
            format!("PROCESSING DATA{}", dots),
            Style::default().fg(ACCENT).add_modifier(Modifier::ITALIC),
        )));
    }

    let chat = Paragraph::new(lines)
        .block(chat_block)
        .wrap(Wrap { trim: true })
        .scroll((app.link_scroll, 0));
    frame.render_widget(chat, chat_area);

    // Input with horizontal scrolling so the cursor stays visible
    let input_border_color = if app.input_mode == InputMode::Editing {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(input_border_color))
        .title(" ENTER COMMAND... ");

    let inner_width = input_area.width.saturating_sub(2) as usize;
    let cursor_pos = app.link.cursor;
    let scroll_offset = if inner_width == 0 {
        0
    } else if cursor_pos >= inner_width {
        cursor_pos - inner_width + 1
    } else {
        0
    };

    let visible_text: String = app
        .link
        .input
        .chars()
        .skip(scroll_offset)
        .take(inner_width)
        .collect();

    let input = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::Cyan))
        .block(input_block);
    frame.render_widget(input, input_area);

    if app.input_mode == InputMode::Editing {
        let cursor_x = (cursor_pos - scroll_offset) as u16;
        frame.set_cursor_position((input_area.x + cursor_x + 1, input_area.y + 1));
    }
}

fn render_model_picker(app: &mut App, frame: &mut Frame, area: Rect) {
    let popup_width = 40.min(area.width.saturating_sub(4));
    let popup_height = (app.available_models.len() as u16 + 2).min(area.height.saturating_sub(4));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Select Model (Enter to select, Esc to cancel) ");

    let items: Vec<ListItem> = app
        .available_models
        .iter()
        .map(|model| {
            let style = if model == &app.selected_model {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {} ", model)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(ACCENT)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, popup_area, &mut app.model_picker_state);
}
