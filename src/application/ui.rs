use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Tabs;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use strum::IntoEnumIterator;
use syntect::highlighting::Theme;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Panel;
use crate::domain::models::Status;
use crate::domain::services::events::EventsService;
use crate::domain::services::preview_lines;
use crate::domain::services::preview_title;
use crate::domain::services::AppState;
use crate::domain::services::Field;
use crate::domain::services::Tab;
use crate::domain::services::Themes;
use crate::domain::services::DEFAULT_THEME;

const FIELD_HEIGHT: u16 = 3;

fn status_color(status: Status) -> Color {
    match status {
        Status::Idle => return Color::Gray,
        Status::Loading => return Color::Yellow,
        Status::Success => return Color::Green,
        Status::Error => return Color::Red,
    }
}

fn centered_rect(percent_x: u16, height: u16, rect: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(rect);

    return Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1];
}

fn render_header<B: Backend>(frame: &mut Frame<B>, app_state: &AppState, rect: Rect) {
    let user = match (&app_state.logged_in, &app_state.username) {
        (true, Some(username)) => format!("Logged in as {username}"),
        (true, None) => "Logged in".to_string(),
        (false, _) => "Not logged in".to_string(),
    };

    if !app_state.logged_in {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("DevExy ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(user),
            ])),
            rect,
        );
        return;
    }

    let titles = Tab::iter()
        .map(|tab| {
            if tab == Tab::Generate {
                return Line::from(format!("{tab} ({})", app_state.test_type));
            }
            return Line::from(tab.to_string());
        })
        .collect::<Vec<_>>();
    let selected = Tab::iter()
        .position(|tab| return tab == app_state.tab)
        .unwrap_or(0);

    frame.render_widget(
        Tabs::new(titles)
            .block(Block::default().title(format!("DevExy - {user}")))
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        rect,
    );
}

fn render_field<B: Backend>(frame: &mut Frame<B>, field: &Field, rect: Rect) {
    if !field.masked {
        frame.render_widget(field.textarea().widget(), rect);
        return;
    }

    let border_type = if field.is_focused() {
        BorderType::Double
    } else {
        BorderType::Plain
    };
    frame.render_widget(
        Paragraph::new(field.display()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .title(field.label)
                .padding(Padding::new(1, 1, 0, 0)),
        ),
        rect,
    );
}

fn render_statuses<B: Backend>(frame: &mut Frame<B>, app_state: &AppState, rect: Rect) {
    let panels = if app_state.logged_in {
        app_state.tab.panels().to_vec()
    } else {
        vec![Panel::Login]
    };

    let mut lines = vec![];
    for panel in panels {
        if let Some(update) = app_state.status(panel) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{panel}: "),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    update.message.to_string(),
                    Style::default().fg(status_color(update.status)),
                ),
            ]));
        }
        if let Some(progress) = app_state.progress.get(&panel) {
            lines.push(Line::from(Span::styled(
                format!("  {progress}"),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rect);
}

fn render_results<B: Backend>(frame: &mut Frame<B>, app_state: &mut AppState, rect: Rect) {
    let lines = app_state
        .results_lines()
        .into_iter()
        .map(Line::from)
        .collect::<Vec<_>>();

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::TOP).title("Results"))
            .scroll((app_state.scroll.position, 0)),
        rect,
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        rect.inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut app_state.scroll.scrollbar_state,
    );
}

fn render_preview<B: Backend>(
    frame: &mut Frame<B>,
    app_state: &mut AppState,
    theme: &Theme,
    rect: Rect,
) {
    let test = match &app_state.preview {
        Some(test) => test,
        None => return,
    };

    let area = rect.inner(&Margin {
        vertical: 1,
        horizontal: 2,
    });
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(preview_lines(test, theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .title(preview_title(test))
                    .title_alignment(Alignment::Center),
            )
            .scroll((app_state.scroll.position, 0)),
        area,
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        area.inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut app_state.scroll.scrollbar_state,
    );
}

fn confirm_title(pending: usize) -> String {
    if pending > 1 {
        return format!("Confirm (1 of {pending})");
    }
    return "Confirm".to_string();
}

fn render_confirm<B: Backend>(frame: &mut Frame<B>, app_state: &AppState, rect: Rect) {
    let request = match app_state.confirm.front() {
        Some(request) => request,
        None => return,
    };

    let area = centered_rect(60, 7, rect);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(request.prompt.message.to_string()),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("[y] {}", request.prompt.accept),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("   "),
                Span::styled(
                    format!("[n] {}", request.prompt.decline),
                    Style::default().fg(Color::Red),
                ),
            ]),
        ])
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(confirm_title(app_state.confirm.len()))
                .padding(Padding::new(1, 1, 0, 0)),
        ),
        area,
    );
}

fn render<B: Backend>(frame: &mut Frame<B>, app_state: &mut AppState, theme: &Theme) {
    let area = frame.size();
    let field_count = u16::try_from(app_state.form().fields.len()).unwrap_or(0);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(2),
            Constraint::Length(field_count * FIELD_HEIGHT),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, app_state, layout[0]);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(FIELD_HEIGHT); field_count as usize])
        .split(layout[1]);
    for (field, rect) in app_state.form().fields.iter().zip(fields.iter()) {
        render_field(frame, field, *rect);
    }

    render_statuses(frame, app_state, layout[2]);

    if layout[3].height != app_state.last_known_height
        || layout[3].width != app_state.last_known_width
    {
        app_state.set_rect(layout[3]);
    }
    render_results(frame, app_state, layout[3]);

    frame.render_widget(
        Paragraph::new("Enter: run  Tab: next field  Ctrl+N: next tab  Esc: close  Ctrl+C: quit")
            .style(Style::default().fg(Color::DarkGray)),
        layout[4],
    );

    render_preview(frame, app_state, theme, area);
    render_confirm(frame, app_state, area);
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let theme = Themes::get(DEFAULT_THEME)?;
    let mut events = EventsService::new(rx);

    loop {
        terminal.draw(|frame| {
            render(frame, app_state, &theme);
        })?;

        let event = events.next().await?;
        for action in app_state.handle_event(event) {
            tx.send(action)?;
        }

        if app_state.should_quit {
            break;
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;
    let mut app_state = AppState::default();

    let res = start_loop(&mut terminal, &mut app_state, tx, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return res;
}
