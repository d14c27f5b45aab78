use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};

use crate::error::LookupError;
use crate::icons::resolve_icon;
use crate::lookup::{Lookup, Outcome, Phase, Ticket};
use crate::weather::{Coordinates, LocationQuery, WeatherResult};

const MISSING: &str = "--";

const POLL_INTERVAL: Duration = Duration::from_millis(100);

type Completion = (Ticket, Result<WeatherResult, LookupError>);

/// The interactive screen: a search field over the last lookup.
pub struct App {
    lookup: Lookup,
    input: String,
    home: Option<Coordinates>,
    runtime: Handle,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
    should_quit: bool,
}

impl App {
    pub fn new(lookup: Lookup, home: Option<Coordinates>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            lookup,
            input: String::new(),
            home,
            runtime,
            tx,
            rx,
            should_quit: false,
        }
    }

    pub fn lookup(&self) -> &Lookup {
        &self.lookup
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Issue a search without waiting for it. The completion is picked up by
    /// [`App::drain_completions`].
    pub fn search(&mut self, query: String) {
        let ticket = self.lookup.begin();
        let api = self.lookup.api().clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let completion = api.current(&query).await;
            // The receiver lives as long as the app.
            let _ = tx.send((ticket, completion));
        });
    }

    pub fn search_home(&mut self) {
        match self.home {
            Some(coords) => self.search(LocationQuery::from(coords).to_string()),
            None => tracing::info!("no home location configured"),
        }
    }

    pub fn drain_completions(&mut self) {
        while let Ok((ticket, completion)) = self.rx.try_recv() {
            if let Outcome::Displayed { .. } = self.lookup.finish(ticket, completion) {
                self.input.clear();
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('l') if ctrl => self.search_home(),
            KeyCode::Enter => self.search(self.input.clone()),
            KeyCode::Tab => {
                if let Err(e) = self.lookup.units_mut().toggle() {
                    tracing::debug!("ignoring unit toggle: {e}");
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            _ => {}
        }
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        app.drain_completions();

        if app.should_quit {
            return Ok(());
        }
    }
}

fn rounded_block(title: &str) -> Block<'_> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded);
    if title.is_empty() {
        block
    } else {
        block
            .title(Span::styled(title, Style::default().fg(Color::Yellow)))
            .title_alignment(Alignment::Left)
    }
}

fn display_headline(lookup: &Lookup) -> Paragraph<'static> {
    let name = lookup
        .units()
        .last_result()
        .map_or_else(|| MISSING.to_string(), |r| r.location_name.clone());
    let updated = lookup
        .updated()
        .map_or_else(String::new, |t| format!(" Updated {}", t.format("%d-%m-%Y %H:%M")));

    Paragraph::new(vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                name,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(updated),
    ])
    .block(rounded_block(""))
}

fn display_current_conditions(lookup: &Lookup) -> Table<'static> {
    let units = lookup.units();
    let (text, icon) = match units.last_result() {
        Some(result) => {
            let icon = resolve_icon(result.condition_code);
            (
                result.condition_text.clone(),
                format!("{} {}", icon.glyph(), icon.id()),
            )
        }
        None => (MISSING.to_string(), MISSING.to_string()),
    };

    let rows = vec![
        Row::new(vec![Cell::from("")]),
        Row::new(vec![
            Cell::from(" Temperature"),
            Cell::from(units.render()).style(Style::default().fg(Color::Green)),
        ]),
        Row::new(vec![
            Cell::from(" Conditions"),
            Cell::from(text).style(Style::default().fg(Color::Green)),
        ]),
        Row::new(vec![
            Cell::from(" Icon"),
            Cell::from(icon).style(Style::default().fg(Color::Green)),
        ]),
        Row::new(vec![
            Cell::from(" Unit"),
            Cell::from(format!("{} (Tab)", units.unit().symbol())),
        ]),
    ];

    Table::new(rows, [Constraint::Length(14), Constraint::Min(10)])
        .block(rounded_block(" Current Conditions "))
}

fn display_status(lookup: &Lookup) -> Line<'static> {
    match lookup.phase() {
        Phase::Idle => Line::from(" Type a location and press Enter"),
        Phase::Fetching => Line::from(Span::styled(
            " Searching...",
            Style::default().fg(Color::Yellow),
        )),
        Phase::Displaying { .. } => {
            Line::from(" Enter search · Tab °C/°F · Ctrl-L home · Esc quit")
        }
        Phase::Failed(kind) => Line::from(Span::styled(
            format!(" Search failed: {kind}"),
            Style::default().fg(Color::Red),
        )),
    }
}

fn ui(f: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(f.area());

    f.render_widget(display_headline(&app.lookup), layout[0]);
    f.render_widget(display_current_conditions(&app.lookup), layout[1]);

    let search = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::raw(app.input.as_str()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(rounded_block(" Search "));
    f.render_widget(search, layout[2]);

    f.render_widget(Paragraph::new(display_status(&app.lookup)), layout[3]);
}
