pub mod app_dirs;
pub mod celebration;
pub mod config;
pub mod content;
pub mod history;
pub mod progress;
pub mod quiz;
pub mod search;
pub mod theme;
pub mod ui;
pub mod util;

use crate::{
    celebration::ConfettiAnimation,
    config::{Config, ConfigStore, FileConfigStore},
    content::{PageInfo, Topic, PAGES},
    history::HistoryDb,
    progress::ProgressTracker,
    quiz::{QuizOutcome, QuizSession},
    search::{SearchEntry, SearchIndex},
    theme::Theme,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    sync::mpsc,
    thread,
    time::Duration,
};
use webbrowser::Browser;

const TICK_RATE_MS: u64 = 100;

/// sleek quiz tui for the python learning hub
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A sleek quiz TUI for the Python learning hub: per-topic multiple-choice quizzes with instant feedback, keyword search across every page, and persistent progress tracking."
)]
pub struct Cli {
    /// jump straight into the quiz for a topic (e.g. unit1)
    #[clap(short = 't', long)]
    topic: Option<String>,

    /// list available quiz topics and exit
    #[clap(long)]
    list_topics: bool,

    /// override the configured color theme for this run
    #[clap(long, value_enum)]
    theme: Option<Theme>,

    /// export recorded quiz scores as csv to the given path and exit
    #[clap(long)]
    export: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Home,
    Quiz,
    Results,
    Dashboard,
    Search,
}

#[derive(Debug, Default)]
pub struct HomeState {
    pub selected: usize,
}

#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<SearchEntry>,
    pub selected: usize,
}

pub struct App {
    pub config: Config,
    pub tracker: ProgressTracker,
    pub search_index: SearchIndex,
    pub history: Option<HistoryDb>,
    pub session: Option<QuizSession>,
    pub outcome: Option<QuizOutcome>,
    pub confetti: ConfettiAnimation,
    pub state: AppState,
    pub home: HomeState,
    pub search: SearchState,
}

impl App {
    pub fn new(config: Config, tracker: ProgressTracker) -> Self {
        Self {
            config,
            tracker,
            search_index: SearchIndex::from_pages(),
            history: HistoryDb::new().ok(),
            session: None,
            outcome: None,
            confetti: ConfettiAnimation::new(),
            state: AppState::Home,
            home: HomeState::default(),
            search: SearchState::default(),
        }
    }

    pub fn selected_page(&self) -> &'static PageInfo {
        &PAGES[self.home.selected.min(PAGES.len() - 1)]
    }

    pub fn select_prev_page(&mut self) {
        if self.home.selected > 0 {
            self.home.selected -= 1;
        }
    }

    pub fn select_next_page(&mut self) {
        if self.home.selected + 1 < PAGES.len() {
            self.home.selected += 1;
        }
    }

    /// Visit the selected page; pages with a quiz enter it directly
    pub fn enter_selected(&mut self) {
        let page = self.selected_page();
        self.tracker.record_visit(page.page);

        if let Some(topic_name) = page.topic {
            self.start_topic(topic_name);
        }
    }

    pub fn start_topic(&mut self, topic_name: &str) {
        let topic = Topic::new(topic_name);
        self.tracker.record_visit(&topic.page);
        self.session = Some(QuizSession::from_topic(&topic));
        self.outcome = None;
        self.state = AppState::Quiz;
    }

    /// Finish the current quiz: compute the outcome, report it to the
    /// progress tracker, log it, and kick off the confetti when earned
    pub fn finish_quiz(&mut self, width: u16, height: u16) {
        let Some(ref session) = self.session else {
            return;
        };
        let Some(outcome) = session.show_results() else {
            return;
        };

        self.tracker
            .record_quiz_score(&session.topic, outcome.score as u32, outcome.total as u32);
        let _ = session.save_results(&outcome);

        if outcome.celebrates() {
            self.confetti.start(width, height);
        }

        self.outcome = Some(outcome);
        self.state = AppState::Results;
    }

    pub fn restart_quiz(&mut self) {
        if let Some(ref mut session) = self.session {
            session.restart();
            self.outcome = None;
            self.state = AppState::Quiz;
        }
    }

    pub fn review_quiz(&mut self) {
        if let Some(ref mut session) = self.session {
            session.review_answers();
            self.state = AppState::Quiz;
        }
    }

    pub fn go_home(&mut self) {
        self.session = None;
        self.outcome = None;
        self.state = AppState::Home;
    }

    pub fn open_search(&mut self) {
        self.search = SearchState::default();
        self.state = AppState::Search;
    }

    pub fn refresh_search(&mut self) {
        self.search.results = self
            .search_index
            .query(&self.search.query)
            .into_iter()
            .cloned()
            .collect();
        if self.search.selected >= self.search.results.len() {
            self.search.selected = self.search.results.len().saturating_sub(1);
        }
    }

    pub fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggle();
    }

    /// Open the page in the default browser; opening counts as a visit
    pub fn open_page_in_browser(&mut self, page: &str) {
        self.tracker.record_visit(page);
        if Browser::is_available() {
            webbrowser::open(&content::page_url(page)).unwrap_or_default();
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.list_topics {
        for name in Topic::names() {
            let topic = Topic::new(&name);
            println!("{:<10} {}", name, topic.title);
        }
        return Ok(());
    }

    if let Some(ref path) = cli.export {
        let tracker = ProgressTracker::from_default_store();
        tracker.export_scores_csv(path)?;
        println!("exported {} scores to {}", tracker.quizzes_completed(), path.display());
        return Ok(());
    }

    if let Some(ref topic) = cli.topic {
        if !Topic::names().contains(topic) {
            let mut cmd = Cli::command();
            cmd.error(
                ErrorKind::InvalidValue,
                format!("unknown topic '{topic}' (try --list-topics)"),
            )
            .exit();
        }
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let config_store = FileConfigStore::new();
    let mut config = config_store.load();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let tracker = ProgressTracker::from_default_store();
    let mut app = App::new(config, tracker);
    if let Some(ref topic) = cli.topic {
        app.start_topic(topic);
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Persist any theme change from this run
    let _ = config_store.save(&app.config);

    result
}

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let app_events = get_app_events();

    terminal.draw(|f| ui(app, f))?;

    loop {
        match app_events.recv()? {
            AppEvent::Tick => {
                if app.confetti.is_active {
                    app.confetti.update();
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            AppEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            AppEvent::Key(key) => {
                let size = terminal.size().unwrap_or_default();
                if handle_key(app, key, size.width, size.height) == Flow::Quit {
                    break;
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent, width: u16, height: u16) -> Flow {
    // ctrl+c quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Flow::Quit;
    }

    match app.state {
        AppState::Home => match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Up | KeyCode::Char('k') => app.select_prev_page(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_page(),
            KeyCode::Enter => app.enter_selected(),
            KeyCode::Char('/') => app.open_search(),
            KeyCode::Char('d') => app.state = AppState::Dashboard,
            KeyCode::Char('t') => app.toggle_theme(),
            KeyCode::Char('o') => {
                let page = app.selected_page().page.to_string();
                app.open_page_in_browser(&page);
            }
            _ => {}
        },
        AppState::Quiz => match key.code {
            KeyCode::Esc => app.go_home(),
            KeyCode::Left => {
                if let Some(ref mut session) = app.session {
                    session.prev_question();
                }
            }
            KeyCode::Right => {
                if let Some(ref mut session) = app.session {
                    session.next_question();
                }
            }
            KeyCode::Enter => {
                let in_review = app
                    .session
                    .as_ref()
                    .map(|s| s.review_mode)
                    .unwrap_or(false);
                if in_review && app.outcome.is_some() {
                    app.state = AppState::Results;
                } else {
                    app.finish_quiz(width, height);
                }
            }
            KeyCode::Char(c) => {
                if let Some(index) = option_index_for(c) {
                    if let Some(ref mut session) = app.session {
                        session.select_option(index);
                    }
                }
            }
            _ => {}
        },
        AppState::Results => match key.code {
            KeyCode::Esc => app.go_home(),
            KeyCode::Char('r') => app.restart_quiz(),
            KeyCode::Char('v') => app.review_quiz(),
            KeyCode::Char('d') => app.state = AppState::Dashboard,
            KeyCode::Char('o') => {
                if let Some(page) = app
                    .session
                    .as_ref()
                    .and_then(|s| content::find_page(&format!("{}.html", s.topic)))
                    .map(|p| p.page.to_string())
                {
                    app.open_page_in_browser(&page);
                }
            }
            _ => {}
        },
        AppState::Dashboard => match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => {
                if app.outcome.is_some() {
                    app.state = AppState::Results;
                } else {
                    app.state = AppState::Home;
                }
            }
            _ => {}
        },
        AppState::Search => match key.code {
            KeyCode::Esc => {
                app.search = SearchState::default();
                app.state = AppState::Home;
            }
            KeyCode::Up => {
                if app.search.selected > 0 {
                    app.search.selected -= 1;
                }
            }
            KeyCode::Down => {
                if app.search.selected + 1 < app.search.results.len() {
                    app.search.selected += 1;
                }
            }
            KeyCode::Backspace => {
                app.search.query.pop();
                app.refresh_search();
            }
            KeyCode::Enter => {
                if let Some(entry) = app.search.results.get(app.search.selected).cloned() {
                    app.tracker.record_visit(&entry.page);
                    let topic = content::find_page(&entry.page).and_then(|p| p.topic);
                    if let Some(topic_name) = topic {
                        app.start_topic(topic_name);
                    } else {
                        if let Some(pos) = PAGES.iter().position(|p| p.page == entry.page) {
                            app.home.selected = pos;
                        }
                        app.state = AppState::Home;
                    }
                    app.search = SearchState::default();
                }
            }
            KeyCode::Char(c) => {
                app.search.query.push(c);
                app.refresh_search();
            }
            _ => {}
        },
    }

    Flow::Continue
}

/// Map an answer key to an option index: a-d or 1-4
fn option_index_for(c: char) -> Option<usize> {
    match c.to_ascii_lowercase() {
        'a' => Some(0),
        'b' => Some(1),
        'c' => Some(2),
        'd' => Some(3),
        '1' => Some(0),
        '2' => Some(1),
        '3' => Some(2),
        '4' => Some(3),
        _ => None,
    }
}

#[derive(Clone)]
enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

fn get_app_events() -> mpsc::Receiver<AppEvent> {
    let (tx, rx) = mpsc::channel();

    let tick_tx = tx.clone();
    thread::spawn(move || loop {
        if tick_tx.send(AppEvent::Tick).is_err() {
            break;
        }

        thread::sleep(Duration::from_millis(TICK_RATE_MS))
    });

    thread::spawn(move || loop {
        let evt = match event::read() {
            Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
            Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
            Ok(_) => None,
            Err(_) => break,
        };

        if let Some(evt) = evt {
            if tx.send(evt).is_err() {
                break;
            }
        }
    });

    rx
}

fn ui(app: &mut App, f: &mut Frame) {
    match app.state {
        AppState::Home => ui::render_home(app, f),
        AppState::Quiz => ui::quiz_view::render_quiz(app, f),
        AppState::Results => ui::results_view::render_results(app, f),
        AppState::Dashboard => ui::dashboard::render_dashboard(app, f),
        AppState::Search => {
            ui::render_home(app, f);
            ui::search_view::render_search_overlay(app, f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{FileProgressStore, ProgressTracker};
    use clap::Parser;
    use tempfile::tempdir;

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = FileProgressStore::with_path(dir.path().join("progress.json"));
        let tracker = ProgressTracker::new(Box::new(store), content::total_known_pages());
        let app = App::new(Config::default(), tracker);
        (app, dir)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["swot"]);

        assert_eq!(cli.topic, None);
        assert!(!cli.list_topics);
        assert_eq!(cli.theme, None);
        assert_eq!(cli.export, None);
    }

    #[test]
    fn test_cli_topic() {
        let cli = Cli::parse_from(["swot", "-t", "unit2"]);
        assert_eq!(cli.topic, Some("unit2".to_string()));

        let cli = Cli::parse_from(["swot", "--topic", "unit4"]);
        assert_eq!(cli.topic, Some("unit4".to_string()));
    }

    #[test]
    fn test_cli_theme() {
        let cli = Cli::parse_from(["swot", "--theme", "dark"]);
        assert_eq!(cli.theme, Some(Theme::Dark));

        let cli = Cli::parse_from(["swot", "--theme", "light"]);
        assert_eq!(cli.theme, Some(Theme::Light));
    }

    #[test]
    fn test_cli_export() {
        let cli = Cli::parse_from(["swot", "--export", "out.csv"]);
        assert_eq!(cli.export, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_app_starts_on_home() {
        let (app, _dir) = test_app();

        assert_eq!(app.state, AppState::Home);
        assert!(app.session.is_none());
        assert!(app.outcome.is_none());
        assert_eq!(app.home.selected, 0);
    }

    #[test]
    fn test_home_selection_clamps() {
        let (mut app, _dir) = test_app();

        app.select_prev_page();
        assert_eq!(app.home.selected, 0);

        for _ in 0..100 {
            app.select_next_page();
        }
        assert_eq!(app.home.selected, PAGES.len() - 1);
    }

    #[test]
    fn test_enter_quiz_page_starts_session_and_records_visit() {
        let (mut app, _dir) = test_app();

        app.home.selected = 0; // unit1
        app.enter_selected();

        assert_eq!(app.state, AppState::Quiz);
        assert!(app.session.is_some());
        assert!(app.tracker.has_visited("unit1.html"));
    }

    #[test]
    fn test_enter_plain_page_records_visit_only() {
        let (mut app, _dir) = test_app();

        let pos = PAGES.iter().position(|p| p.topic.is_none()).unwrap();
        app.home.selected = pos;
        app.enter_selected();

        assert_eq!(app.state, AppState::Home);
        assert!(app.session.is_none());
        assert!(app.tracker.has_visited(PAGES[pos].page));
    }

    #[test]
    fn test_full_quiz_flow_reaches_results_and_tracker() {
        let (mut app, _dir) = test_app();
        app.start_topic("unit1");

        let total = app.session.as_ref().unwrap().total();
        for _ in 0..total {
            if let Some(ref mut s) = app.session {
                s.select_option(0);
                s.next_question();
            }
        }
        app.finish_quiz(80, 24);

        assert_eq!(app.state, AppState::Results);
        let outcome = app.outcome.unwrap();
        assert_eq!(outcome.total, total);
        assert!(app.tracker.score_for("unit1").is_some());
    }

    #[test]
    fn test_finish_quiz_is_a_noop_before_last_question() {
        let (mut app, _dir) = test_app();
        app.start_topic("unit1");

        app.finish_quiz(80, 24);

        assert_eq!(app.state, AppState::Quiz);
        assert!(app.outcome.is_none());
    }

    #[test]
    fn test_perfect_quiz_starts_confetti() {
        let (mut app, _dir) = test_app();
        app.start_topic("unit1");

        // answer everything correctly
        let corrects: Vec<usize> = app
            .session
            .as_ref()
            .unwrap()
            .questions()
            .iter()
            .map(|q| q.correct)
            .collect();
        for c in corrects {
            if let Some(ref mut s) = app.session {
                s.select_option(c);
                s.next_question();
            }
        }
        app.finish_quiz(80, 24);

        assert!(app.outcome.unwrap().celebrates());
        assert!(app.confetti.is_active);
    }

    #[test]
    fn test_restart_returns_to_quiz() {
        let (mut app, _dir) = test_app();
        app.start_topic("unit1");

        let total = app.session.as_ref().unwrap().total();
        for _ in 0..total {
            if let Some(ref mut s) = app.session {
                s.select_option(0);
                s.next_question();
            }
        }
        app.finish_quiz(80, 24);
        app.restart_quiz();

        assert_eq!(app.state, AppState::Quiz);
        assert!(app.outcome.is_none());
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn test_review_keeps_outcome() {
        let (mut app, _dir) = test_app();
        app.start_topic("unit1");

        let total = app.session.as_ref().unwrap().total();
        for _ in 0..total {
            if let Some(ref mut s) = app.session {
                s.select_option(0);
                s.next_question();
            }
        }
        app.finish_quiz(80, 24);
        app.review_quiz();

        assert_eq!(app.state, AppState::Quiz);
        assert!(app.outcome.is_some());
        assert!(app.session.as_ref().unwrap().review_mode);
    }

    #[test]
    fn test_option_index_for_letters_and_digits() {
        assert_eq!(option_index_for('a'), Some(0));
        assert_eq!(option_index_for('B'), Some(1));
        assert_eq!(option_index_for('c'), Some(2));
        assert_eq!(option_index_for('4'), Some(3));
        assert_eq!(option_index_for('z'), None);
        assert_eq!(option_index_for('5'), None);
    }

    #[test]
    fn test_handle_key_quits_from_home_on_esc() {
        let (mut app, _dir) = test_app();

        assert_eq!(handle_key(&mut app, key(KeyCode::Esc), 80, 24), Flow::Quit);
    }

    #[test]
    fn test_handle_key_ctrl_c_quits_anywhere() {
        let (mut app, _dir) = test_app();
        app.start_topic("unit1");

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut app, ctrl_c, 80, 24), Flow::Quit);
    }

    #[test]
    fn test_handle_key_esc_in_quiz_goes_home() {
        let (mut app, _dir) = test_app();
        app.start_topic("unit1");

        assert_eq!(
            handle_key(&mut app, key(KeyCode::Esc), 80, 24),
            Flow::Continue
        );
        assert_eq!(app.state, AppState::Home);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_handle_key_answer_and_navigate() {
        let (mut app, _dir) = test_app();
        app.start_topic("unit1");

        handle_key(&mut app, key(KeyCode::Char('b')), 80, 24);
        assert_eq!(app.session.as_ref().unwrap().answer(0), Some(1));

        handle_key(&mut app, key(KeyCode::Right), 80, 24);
        assert_eq!(app.session.as_ref().unwrap().current_index, 1);

        handle_key(&mut app, key(KeyCode::Left), 80, 24);
        assert_eq!(app.session.as_ref().unwrap().current_index, 0);
    }

    #[test]
    fn test_handle_key_review_mode_keeps_recorded_answers() {
        let (mut app, _dir) = test_app();
        app.start_topic("unit1");

        let total = app.session.as_ref().unwrap().total();
        for _ in 0..total {
            if let Some(ref mut s) = app.session {
                s.select_option(1);
                s.next_question();
            }
        }
        app.finish_quiz(80, 24);
        app.review_quiz();

        // first question is answered with 1; pressing 'a' must not change it
        handle_key(&mut app, key(KeyCode::Char('a')), 80, 24);
        assert_eq!(app.session.as_ref().unwrap().answer(0), Some(1));
    }

    #[test]
    fn test_handle_key_theme_toggle() {
        let (mut app, _dir) = test_app();
        assert_eq!(app.config.theme, Theme::Light);

        handle_key(&mut app, key(KeyCode::Char('t')), 80, 24);
        assert_eq!(app.config.theme, Theme::Dark);

        handle_key(&mut app, key(KeyCode::Char('t')), 80, 24);
        assert_eq!(app.config.theme, Theme::Light);
    }

    #[test]
    fn test_search_flow() {
        let (mut app, _dir) = test_app();

        handle_key(&mut app, key(KeyCode::Char('/')), 80, 24);
        assert_eq!(app.state, AppState::Search);

        for c in "mcq".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)), 80, 24);
        }
        assert_eq!(app.search.results.len(), 1);
        assert_eq!(app.search.results[0].page, "mcq.html");

        handle_key(&mut app, key(KeyCode::Enter), 80, 24);
        assert_eq!(app.state, AppState::Home);
        assert!(app.tracker.has_visited("mcq.html"));
        // the home cursor lands on the opened page
        assert_eq!(app.selected_page().page, "mcq.html");
    }

    #[test]
    fn test_search_enter_on_quiz_page_starts_quiz() {
        let (mut app, _dir) = test_app();

        app.open_search();
        for c in "control structures".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)), 80, 24);
        }
        assert!(!app.search.results.is_empty());
        assert_eq!(app.search.results[0].page, "unit2.html");

        handle_key(&mut app, key(KeyCode::Enter), 80, 24);
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session.as_ref().unwrap().topic, "unit2");
    }

    #[test]
    fn test_search_backspace_refreshes() {
        let (mut app, _dir) = test_app();
        app.open_search();

        for c in "mcqz".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)), 80, 24);
        }
        assert!(app.search.results.is_empty());

        handle_key(&mut app, key(KeyCode::Backspace), 80, 24);
        assert_eq!(app.search.query, "mcq");
        assert_eq!(app.search.results.len(), 1);
    }

    #[test]
    fn test_dashboard_returns_to_results_after_a_quiz() {
        let (mut app, _dir) = test_app();
        app.start_topic("unit1");

        let total = app.session.as_ref().unwrap().total();
        for _ in 0..total {
            if let Some(ref mut s) = app.session {
                s.select_option(0);
                s.next_question();
            }
        }
        app.finish_quiz(80, 24);

        handle_key(&mut app, key(KeyCode::Char('d')), 80, 24);
        assert_eq!(app.state, AppState::Dashboard);

        handle_key(&mut app, key(KeyCode::Esc), 80, 24);
        assert_eq!(app.state, AppState::Results);
    }

    #[test]
    fn test_dashboard_returns_home_otherwise() {
        let (mut app, _dir) = test_app();

        handle_key(&mut app, key(KeyCode::Char('d')), 80, 24);
        assert_eq!(app.state, AppState::Dashboard);

        handle_key(&mut app, key(KeyCode::Char('b')), 80, 24);
        assert_eq!(app.state, AppState::Home);
    }

    #[test]
    fn test_ui_renders_every_state() {
        use ratatui::{backend::TestBackend, Terminal};

        let (mut app, _dir) = test_app();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| ui(&mut app, f)).unwrap();

        app.start_topic("unit1");
        terminal.draw(|f| ui(&mut app, f)).unwrap();

        let total = app.session.as_ref().unwrap().total();
        for _ in 0..total {
            if let Some(ref mut s) = app.session {
                s.select_option(0);
                s.next_question();
            }
        }
        app.finish_quiz(80, 24);
        terminal.draw(|f| ui(&mut app, f)).unwrap();

        app.state = AppState::Dashboard;
        terminal.draw(|f| ui(&mut app, f)).unwrap();

        app.state = AppState::Search;
        app.search.query = "list".to_string();
        app.refresh_search();
        terminal.draw(|f| ui(&mut app, f)).unwrap();
    }

    #[test]
    fn test_ui_home_shows_titles() {
        use ratatui::{backend::TestBackend, Terminal};

        let (mut app, _dir) = test_app();
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| ui(&mut app, f)).unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Unit I - Introduction"));
        assert!(content.contains("quizzes completed"));
    }
}
