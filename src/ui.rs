use crate::app::App;
use crate::submit::Submitter;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Terminal,
};
use std::io;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    submitter: &Submitter,
) -> io::Result<()> {
    loop {
        app.drain_completions();

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Min(0),
                ])
                .split(f.area());

            let header = Paragraph::new(format!("Master node: {}", submitter.submit_url()))
                .block(Block::default().title("Task Submission").borders(Borders::ALL));
            f.render_widget(header, chunks[0]);

            let input = Paragraph::new(Line::from(vec![
                Span::raw(app.input.as_str()),
                Span::styled("█", Style::default().fg(Color::DarkGray)),
            ]))
            .block(
                Block::default()
                    .title("Task ID")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
            f.render_widget(input, chunks[1]);

            let status = Paragraph::new(Line::from(vec![
                Span::raw(format!("{} in flight  |  ", app.in_flight)),
                Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" submit  "),
                Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" quit"),
            ]))
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(status, chunks[2]);

            if let Some(notification) = &app.notification {
                let area = popup_area(f.area());
                f.render_widget(Clear, area);
                let popup = Paragraph::new(notification.text.as_str())
                    .wrap(Wrap { trim: false })
                    .block(
                        Block::default()
                            .title(format!("Result ({})", notification.at))
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(Color::Yellow)),
                    );
                f.render_widget(popup, area);
            }
        })?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    return Ok(());
                }
                // Alert-style popup: any key dismisses it before input resumes.
                if app.notification.is_some() {
                    app.dismiss_notification();
                    continue;
                }
                match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Enter => app.submit(submitter),
                    KeyCode::Backspace => app.backspace(),
                    KeyCode::Char(c) => app.push_char(c),
                    _ => {}
                }
            }
        }
    }
}

fn popup_area(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical[1]);
    horizontal[1]
}
