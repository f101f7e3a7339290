//! Ratatui terminal UI (TUI) for playing hi-lo rounds.
//!
//! v1 scope:
//! - setup screen with a live win-probability preview
//! - playing screen with hint/result messages and an attempts gauge
//! - session stats row (games, wins, win rate, win chance)

mod message;
mod validate;

pub use message::{outcome_message, Severity};
pub use validate::validate_config;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::{Frame, Terminal};

use hilo_core::round::GuessOutcome;
use hilo_core::{Config, GameController, RoundStarted, SecretSource};
use hilo_logging::{GuessEventV1, NdjsonWriter, RoundEndedEventV1, RoundStartedEventV1};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Setup,
    Playing,
}

struct App {
    screen: Screen,
    status: String,

    controller: GameController,

    /// Raw text in the setup bound field.
    max_input: String,
    /// Raw text in the guess field.
    guess_input: String,
    /// Live single-guess probability for the setup screen.
    probability: f64,
    /// Most recent round-start signal, for the playing header.
    started: Option<RoundStarted>,
    /// Message + severity from the last submitted guess.
    result: Option<(String, Severity)>,

    events: Option<NdjsonWriter>,
}

impl App {
    fn new(cfg: &Config) -> Self {
        let secrets = match cfg.game.seed {
            Some(seed) => SecretSource::from_seed(seed),
            None => SecretSource::from_entropy(),
        };
        let mut controller =
            GameController::with_default_max(secrets, cfg.game.default_max_number);

        let max_input = cfg.game.default_max_number.to_string();
        let probability = controller.preview_probability(&max_input);

        let mut status = setup_help();
        let events = cfg.logging.events_path.as_ref().and_then(|p| {
            match NdjsonWriter::open_append_with_flush(p, cfg.logging.flush_every_lines) {
                Ok(w) => Some(w),
                Err(e) => {
                    status = format!("event log disabled ({e}) | {}", setup_help());
                    None
                }
            }
        });

        Self {
            screen: Screen::Setup,
            status,
            controller,
            max_input,
            guess_input: String::new(),
            probability,
            started: None,
            result: None,
            events,
        }
    }

    fn refresh_probability(&mut self) {
        self.probability = self.controller.preview_probability(&self.max_input);
    }

    fn start_round(&mut self) {
        let started = self.controller.start_round(&self.max_input);
        if let Some(w) = self.events.as_mut() {
            let _ = w.write_event(&RoundStartedEventV1 {
                event: "round_started",
                ts_ms: hilo_logging::now_ms(),
                max_number: started.max_number,
                max_attempts: started.max_attempts,
            });
        }
        self.started = Some(started);
        self.result = None;
        self.guess_input.clear();
        self.screen = Screen::Playing;
        self.status = playing_help();
    }

    fn submit_guess(&mut self) {
        let outcome = self.controller.submit_guess(&self.guess_input);
        self.log_outcome(&outcome);
        let (msg, sev) = outcome_message(&outcome, &self.guess_input);
        self.result = Some((msg, sev));
        self.guess_input.clear();
        if !self.controller.is_round_active() {
            self.status = result_help();
        }
    }

    fn log_outcome(&mut self, outcome: &GuessOutcome) {
        let Some(w) = self.events.as_mut() else {
            return;
        };
        let ts_ms = hilo_logging::now_ms();
        let (kind, direction, remaining) = match outcome {
            GuessOutcome::Inactive => return,
            GuessOutcome::Invalid { .. } => ("invalid", None, None),
            GuessOutcome::Continue {
                direction,
                remaining,
            } => ("continue", Some(direction.as_str()), Some(*remaining)),
            GuessOutcome::Win { .. } => ("win", None, None),
            GuessOutcome::Loss { .. } => ("loss", None, None),
        };
        let _ = w.write_event(&GuessEventV1 {
            event: "guess",
            ts_ms,
            kind,
            direction,
            remaining,
        });

        let won = matches!(outcome, GuessOutcome::Win { .. });
        if won || matches!(outcome, GuessOutcome::Loss { .. }) {
            let stats = self.controller.stats();
            if let Some(r) = self.controller.round() {
                let _ = w.write_event(&RoundEndedEventV1 {
                    event: "round_ended",
                    ts_ms,
                    won,
                    attempts_used: r.attempts_used,
                    secret_number: r.secret_number,
                    games_played: stats.games_played,
                    wins: stats.wins,
                });
            }
        }
    }

    fn back_to_setup(&mut self) {
        self.controller.reset();
        self.started = None;
        self.result = None;
        self.guess_input.clear();
        self.screen = Screen::Setup;
        self.refresh_probability();
        self.status = setup_help();
    }

    /// Returns false when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.screen {
            Screen::Setup => match code {
                KeyCode::Char('q') => return false,
                KeyCode::Enter => self.start_round(),
                KeyCode::Backspace => {
                    self.max_input.pop();
                    self.refresh_probability();
                }
                KeyCode::Char(c) => {
                    if !c.is_control() {
                        self.max_input.push(c);
                        self.refresh_probability();
                    }
                }
                _ => {}
            },
            Screen::Playing => {
                let round_over = !self.controller.is_round_active();
                match code {
                    KeyCode::Char('q') => return false,
                    KeyCode::Esc => self.back_to_setup(),
                    KeyCode::Enter if round_over => self.back_to_setup(),
                    KeyCode::Char('p') if round_over => self.back_to_setup(),
                    KeyCode::Enter => self.submit_guess(),
                    KeyCode::Backspace => {
                        self.guess_input.pop();
                    }
                    KeyCode::Char(c) => {
                        if !round_over && !c.is_control() {
                            self.guess_input.push(c);
                        }
                    }
                    _ => {}
                }
            }
        }
        true
    }
}

fn setup_help() -> String {
    "q: quit | type an upper bound | Enter: start".to_string()
}

fn playing_help() -> String {
    "q quit | type a guess | Enter submit | Esc back".to_string()
}

fn result_help() -> String {
    "p play again | Esc back | q quit".to_string()
}

fn severity_style(sev: Severity) -> Style {
    let color = match sev {
        Severity::Info => Color::Gray,
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(1),
        ])
        .split(f.size());

    let title = Paragraph::new(Line::from(Span::styled(
        "hilo: guess the number",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    draw_stats_row(f, app, chunks[1]);

    match app.screen {
        Screen::Setup => draw_setup(f, app, chunks[2]),
        Screen::Playing => draw_playing(f, app, chunks[2]),
    }

    let status = Paragraph::new(app.status.as_str());
    f.render_widget(status, chunks[3]);
}

fn draw_stats_row(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.controller.stats();
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let cells: [(&str, String); 4] = [
        ("Games", stats.games_played.to_string()),
        ("Wins", stats.wins.to_string()),
        ("Win rate", format!("{}%", stats.win_rate)),
        ("Win chance", format!("{:.2}%", stats.win_probability)),
    ];
    for (i, (name, value)) in cells.iter().enumerate() {
        let p = Paragraph::new(value.as_str())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(*name));
        f.render_widget(p, tiles[i]);
    }
}

fn draw_setup(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(format!("Upper bound: {}▏", app.max_input)),
        Line::from(""),
        Line::from(format!(
            "A single random guess wins {:.2}% of the time.",
            app.probability
        )),
        Line::from(""),
        Line::from("Press Enter to start a round."),
    ];
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("New game"));
    f.render_widget(p, area);
}

fn draw_playing(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    let header = match app.started {
        Some(s) => format!("Guess a number between 0 and {}.", s.max_number),
        None => String::new(),
    };
    let input = Paragraph::new(vec![
        Line::from(header),
        Line::from(format!("Your guess: {}▏", app.guess_input)),
    ])
    .block(Block::default().borders(Borders::ALL).title("Round"));
    f.render_widget(input, rows[0]);

    if let Some(r) = app.controller.round() {
        let ratio = if r.max_attempts > 0 {
            f64::from(r.attempts_used) / f64::from(r.max_attempts)
        } else {
            0.0
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Attempts"))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("{} of {} used", r.attempts_used, r.max_attempts));
        f.render_widget(gauge, rows[1]);
    }

    if let Some((msg, sev)) = &app.result {
        let p = Paragraph::new(Line::from(Span::styled(msg.as_str(), severity_style(*sev))))
            .block(Block::default().borders(Borders::ALL).title("Result"));
        f.render_widget(p, rows[2]);
    }
}

pub fn run(cfg: &Config) -> io::Result<()> {
    // Terminal init.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(cfg);

    let tick_rate = Duration::from_millis(cfg.ui.tick_ms.max(1));
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| draw(f, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                if !app.handle_key(k.code) {
                    break;
                }
            }
        }
        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    if let Some(w) = app.events.as_mut() {
        let _ = w.flush();
    }

    // Terminal restore.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
