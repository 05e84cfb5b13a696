//! Main application controller
//!
//! Owns the TUI, the router, the store and the screen components, and runs
//! the event dispatch loop. Every keyboard event is handled to completion
//! before the next one is polled; there is no background work.

use crate::{
    app::{
        prompt::{AmountPrompt, PromptOutcome, PromptPurpose},
        screens::{GroupScreen, HomeScreen, LearnScreen, MoneyScreen, ProgressScreen},
        state::{NavigationAction, Router, Screen, Theme},
        tui::Tui,
    },
    clock::SystemClock,
    config::AppConfig,
    error::user_friendly_message,
    store::Store,
    util::format::format_rupees,
    NidhiError, Result,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Tabs},
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Screen router and theme flag
    router: Router,
    /// Session view-state store
    store: Store,
    /// Loaded configuration
    config: AppConfig,
    /// Screen components
    home_screen: HomeScreen,
    learn_screen: LearnScreen,
    money_screen: MoneyScreen,
    group_screen: GroupScreen,
    progress_screen: ProgressScreen,
    /// Modal amount prompt, when one is open
    prompt: Option<AmountPrompt>,
    /// One-line status notice shown under the navigation bar
    notice: Option<String>,
}

impl App {
    /// Create a new application instance from loaded configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        let theme = if config.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        };
        let mut router = Router::new(theme);
        // Unknown names fail closed and leave the router on home
        router.select_named(&config.start_screen);
        Ok(Self {
            tui: Tui::new()?,
            router,
            store: Store::new(Box::new(SystemClock), config.opening_balance),
            config,
            home_screen: HomeScreen,
            learn_screen: LearnScreen::new(),
            money_screen: MoneyScreen::new(),
            group_screen: GroupScreen::new(),
            progress_screen: ProgressScreen,
            prompt: None,
            notice: None,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| NidhiError::TuiError(format!("failed to initialize terminal: {}", e)))
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        while !self.router.should_quit() {
            self.draw()?;
            if let Some(key) = self
                .tui
                .next_key()
                .map_err(|e| NidhiError::TuiError(format!("event polling failed: {}", e)))?
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Draw the active screen, navigation bar and status line
    fn draw(&mut self) -> Result<()> {
        let palette = self.router.theme().palette();
        let active = self.router.active_screen();
        let status = self
            .notice
            .clone()
            .unwrap_or_else(|| "Tab: Switch screen  1-5: Jump  d: Theme  q: Quit".to_string());

        self.tui
            .draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(8),    // Screen content
                        Constraint::Length(3), // Navigation bar
                        Constraint::Length(1), // Status line
                    ])
                    .split(f.size());

                match active {
                    Screen::Home => self.home_screen.render(
                        f,
                        chunks[0],
                        &self.store,
                        &self.config.profile,
                        &palette,
                    ),
                    Screen::Learn => self.learn_screen.render(
                        f,
                        chunks[0],
                        self.store.learning(),
                        &palette,
                    ),
                    Screen::Money => {
                        self.money_screen
                            .render(f, chunks[0], self.store.goals(), &palette)
                    }
                    Screen::Group => self.group_screen.render(
                        f,
                        chunks[0],
                        self.store.group_activities(),
                        self.store.attending_count(),
                        &palette,
                    ),
                    Screen::Progress => self.progress_screen.render(
                        f,
                        chunks[0],
                        self.store.health_score(),
                        &self.store.health_categories(),
                        &palette,
                    ),
                }

                let titles: Vec<String> = Screen::ALL
                    .iter()
                    .enumerate()
                    .map(|(i, s)| format!("{} {}", i + 1, s.title()))
                    .collect();
                let tabs = Tabs::new(titles)
                    .select(active.index())
                    .style(Style::default().fg(palette.dim))
                    .highlight_style(
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    )
                    .block(Block::default().borders(Borders::ALL));
                f.render_widget(tabs, chunks[1]);

                let status_line =
                    Paragraph::new(status.clone()).style(Style::default().fg(palette.dim));
                f.render_widget(status_line, chunks[2]);

                if let Some(prompt) = &self.prompt {
                    prompt.render(f, &palette);
                }
            })
            .map_err(|e| NidhiError::TuiError(format!("draw failed: {}", e)))
    }

    /// Handle one keyboard event to completion
    fn handle_key(&mut self, key: KeyEvent) {
        // An open prompt owns the keyboard
        if let Some(mut prompt) = self.prompt.take() {
            match prompt.handle_key(key) {
                PromptOutcome::Pending => self.prompt = Some(prompt),
                PromptOutcome::Cancelled => {}
                PromptOutcome::Submitted => self.submit_prompt(&prompt),
            }
            return;
        }

        let action = Router::key_to_navigation(key);
        match action {
            NavigationAction::Quit => {
                self.router.quit();
                return;
            }
            NavigationAction::NextScreen => {
                self.notice = None;
                self.router.next_screen();
                return;
            }
            NavigationAction::PreviousScreen => {
                self.notice = None;
                self.router.previous_screen();
                return;
            }
            NavigationAction::Goto(screen) => {
                self.notice = None;
                self.router.select(screen);
                return;
            }
            NavigationAction::ToggleTheme => {
                self.router.toggle_theme();
                return;
            }
            NavigationAction::Back => {
                // Esc peels back: notice first, then home, then quit
                if self.notice.take().is_some() {
                } else if self.router.active_screen() != Screen::Home {
                    self.router.select(Screen::Home);
                } else {
                    self.router.quit();
                }
                return;
            }
            _ => {}
        }

        match self.router.active_screen() {
            Screen::Home => self.handle_home_keys(key),
            Screen::Learn => self.handle_learn_keys(action),
            Screen::Money => self.handle_money_keys(key, action),
            Screen::Group => self.handle_group_keys(action),
            Screen::Progress => {}
        }
    }

    fn handle_home_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.prompt = Some(AmountPrompt::new(PromptPurpose::AddMoney, "Add Money"));
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.prompt = Some(AmountPrompt::new(PromptPurpose::SendMoney, "Send Money"));
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.notice = Some("Voice assistance activated".to_string());
            }
            _ => {}
        }
    }

    fn handle_learn_keys(&mut self, action: NavigationAction) {
        let len = self.store.learning().modules().len();
        match action {
            NavigationAction::Up => self.learn_screen.select_previous(len),
            NavigationAction::Down => self.learn_screen.select_next(len),
            NavigationAction::Select => {
                match self.store.start_lesson(self.learn_screen.selected_module()) {
                    Ok(100) => {
                        self.notice = Some(format!(
                            "Module complete! {}/{} lessons done",
                            self.store.learning().completed_lessons(),
                            self.store.learning().total_lessons()
                        ));
                    }
                    Ok(percent) => {
                        self.notice = Some(format!("Lesson done — module at {}%", percent));
                    }
                    Err(err) => self.report(err),
                }
            }
            _ => {}
        }
    }

    fn handle_money_keys(&mut self, key: KeyEvent, action: NavigationAction) {
        let len = self.store.goals().len();
        match action {
            NavigationAction::Up => {
                self.money_screen.select_previous(len);
                return;
            }
            NavigationAction::Down => {
                self.money_screen.select_next(len);
                return;
            }
            NavigationAction::Select => {
                self.open_contribute_prompt();
                return;
            }
            _ => {}
        }

        match key.code {
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.prompt = Some(AmountPrompt::new(PromptPurpose::AddMoney, "Add Money"));
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.prompt = Some(AmountPrompt::new(PromptPurpose::SendMoney, "Send Money"));
            }
            KeyCode::Char('c') | KeyCode::Char('C') => self.open_contribute_prompt(),
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.notice = Some("Investment feature coming soon!".to_string());
            }
            _ => {}
        }
    }

    fn handle_group_keys(&mut self, action: NavigationAction) {
        let len = self.store.group_activities().len();
        match action {
            NavigationAction::Up => self.group_screen.select_previous(len),
            NavigationAction::Down => self.group_screen.select_next(len),
            NavigationAction::Select => {
                let index = self.group_screen.selected_activity();
                match self.store.toggle_attendance(index) {
                    Ok(attending) => {
                        let title = self
                            .store
                            .group_activities()
                            .get(index)
                            .map(|a| a.title.clone())
                            .unwrap_or_default();
                        self.notice = Some(if attending {
                            format!("See you at {}!", title)
                        } else {
                            format!("Attendance removed for {}", title)
                        });
                    }
                    Err(err) => self.report(err),
                }
            }
            _ => {}
        }
    }

    fn open_contribute_prompt(&mut self) {
        let index = self.money_screen.selected_goal();
        match self.store.goals().get(index) {
            Some(goal) => {
                self.prompt = Some(AmountPrompt::new(
                    PromptPurpose::Contribute { goal_index: index },
                    format!("Contribute to {}", goal.title),
                ));
            }
            None => self.notice = Some("No savings goal selected".to_string()),
        }
    }

    /// Apply a submitted amount prompt to the store
    fn submit_prompt(&mut self, prompt: &AmountPrompt) {
        let amount = match prompt.amount() {
            Ok(amount) => amount,
            Err(err) => {
                self.report(err);
                return;
            }
        };

        let result = match prompt.purpose() {
            PromptPurpose::AddMoney => self.store.add_money(amount).map(|()| {
                format!(
                    "Added {} — balance {}",
                    format_rupees(amount),
                    format_rupees(self.store.balance())
                )
            }),
            PromptPurpose::SendMoney => self.store.send_money(amount).map(|()| {
                format!(
                    "Sent {} — balance {}",
                    format_rupees(amount),
                    format_rupees(self.store.balance())
                )
            }),
            PromptPurpose::Contribute { goal_index } => {
                self.store.contribute_to_goal(goal_index, amount).map(|()| {
                    let title = self
                        .store
                        .goals()
                        .get(goal_index)
                        .map(|g| g.title.clone())
                        .unwrap_or_default();
                    format!("Contributed {} to {}", format_rupees(amount), title)
                })
            }
        };

        match result {
            Ok(message) => {
                tracing::info!(%message, "operation applied");
                self.notice = Some(message);
            }
            Err(err) => self.report(err),
        }
    }

    /// Surface a recoverable error as a status notice
    fn report(&mut self, err: NidhiError) {
        tracing::debug!(error = %err, "operation rejected");
        self.notice = Some(user_friendly_message(&err));
    }
}
