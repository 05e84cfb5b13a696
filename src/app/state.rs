//! Screen routing and theme state
//!
//! Handles screen selection, the light/dark theme flag, and keyboard event
//! mapping for the TUI application. All five screens are mutually
//! reachable; there are no guards and no terminal screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

/// The five screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Profile header, balance card, recent activity
    Home,
    /// Learning hub with modules and lesson progress
    Learn,
    /// Money management: quick actions and savings goals
    Money,
    /// Community group activities and attendance
    Group,
    /// Derived financial-health score
    Progress,
}

impl Screen {
    /// All screens in navigation-bar order
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::Learn,
        Screen::Money,
        Screen::Group,
        Screen::Progress,
    ];

    /// Navigation-bar label
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Learn => "Learn",
            Screen::Money => "Money",
            Screen::Group => "Group",
            Screen::Progress => "Progress",
        }
    }

    /// Position in the navigation bar
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Parse a screen name at a string boundary (config, shortcuts).
    /// Unknown names return `None`; callers fail closed.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "home" => Some(Screen::Home),
            "learn" => Some(Screen::Learn),
            "money" => Some(Screen::Money),
            "group" => Some(Screen::Group),
            "progress" => Some(Screen::Progress),
            _ => None,
        }
    }

    /// The screen to the right in the navigation bar, wrapping
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The screen to the left in the navigation bar, wrapping
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::Home
    }
}

/// Presentation theme, orthogonal to the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Colors used by the screen components under this theme
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                text: Color::Black,
                dim: Color::DarkGray,
                accent: Color::Blue,
                credit: Color::Green,
                debit: Color::Red,
                highlight_bg: Color::Blue,
                highlight_fg: Color::White,
            },
            Theme::Dark => Palette {
                text: Color::White,
                dim: Color::Gray,
                accent: Color::Cyan,
                credit: Color::LightGreen,
                debit: Color::LightRed,
                highlight_bg: Color::Cyan,
                highlight_fg: Color::Black,
            },
        }
    }
}

/// Resolved colors for the active theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub credit: Color,
    pub debit: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Confirm selection (Enter, Space)
    Select,
    /// Dismiss/back (Esc)
    Back,
    /// Next screen (Tab, arrow right, l)
    NextScreen,
    /// Previous screen (Shift+Tab, arrow left, h)
    PreviousScreen,
    /// Jump straight to a screen (digits 1-5)
    Goto(Screen),
    /// Flip light/dark (d)
    ToggleTheme,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Screen router: owns the active screen, the theme flag and the quit flag
#[derive(Debug)]
pub struct Router {
    active: Screen,
    theme: Theme,
    should_quit: bool,
}

impl Router {
    /// Create a router starting at the home screen
    pub fn new(theme: Theme) -> Self {
        Self {
            active: Screen::Home,
            theme,
            should_quit: false,
        }
    }

    /// Currently active screen
    pub fn active_screen(&self) -> Screen {
        self.active
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch to a screen. Every transition is allowed.
    pub fn select(&mut self, screen: Screen) {
        self.active = screen;
    }

    /// Switch to a screen by name. Unknown names are ignored and logged;
    /// the current screen stays active.
    pub fn select_named(&mut self, name: &str) {
        match Screen::from_name(name) {
            Some(screen) => self.select(screen),
            None => tracing::warn!(name, "ignoring unknown screen name"),
        }
    }

    /// Move one screen right in the navigation bar
    pub fn next_screen(&mut self) {
        self.active = self.active.next();
    }

    /// Move one screen left in the navigation bar
    pub fn previous_screen(&mut self) {
        self.active = self.active.previous();
    }

    /// Flip the theme flag
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Selection movement
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,

            // Screen cycling
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => NavigationAction::NextScreen,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                NavigationAction::PreviousScreen
            }

            // Direct screen jumps
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                NavigationAction::Goto(Screen::ALL[index])
            }

            // Theme flag
            KeyCode::Char('d') | KeyCode::Char('D') => NavigationAction::ToggleTheme,

            // Selection and dismissal
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,
            KeyCode::Esc => NavigationAction::Back,

            _ => NavigationAction::None,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Theme::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_router_starts_at_home() {
        let router = Router::default();
        assert_eq!(router.active_screen(), Screen::Home);
        assert_eq!(router.theme(), Theme::Light);
        assert!(!router.should_quit());
    }

    #[test]
    fn test_all_screens_mutually_reachable() {
        let mut router = Router::default();
        for &from in Screen::ALL.iter() {
            for &to in Screen::ALL.iter() {
                router.select(from);
                router.select(to);
                assert_eq!(router.active_screen(), to);
            }
        }
    }

    #[test]
    fn test_screen_cycling_wraps() {
        let mut router = Router::default();
        for _ in 0..Screen::ALL.len() {
            router.next_screen();
        }
        assert_eq!(router.active_screen(), Screen::Home);

        router.previous_screen();
        assert_eq!(router.active_screen(), Screen::Progress);
    }

    #[test]
    fn test_select_named_fails_closed() {
        let mut router = Router::default();
        router.select_named("learn");
        assert_eq!(router.active_screen(), Screen::Learn);

        router.select_named("wallet");
        assert_eq!(router.active_screen(), Screen::Learn);
    }

    #[test]
    fn test_theme_toggle_is_orthogonal() {
        let mut router = Router::default();
        router.select(Screen::Money);
        router.toggle_theme();
        assert_eq!(router.theme(), Theme::Dark);
        assert_eq!(router.active_screen(), Screen::Money);
        router.toggle_theme();
        assert_eq!(router.theme(), Theme::Light);
    }

    #[test]
    fn test_screen_from_name() {
        assert_eq!(Screen::from_name("HOME"), Some(Screen::Home));
        assert_eq!(Screen::from_name("progress"), Some(Screen::Progress));
        assert_eq!(Screen::from_name("settings"), None);
    }

    #[test]
    fn test_key_to_navigation() {
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavigationAction::Quit
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            NavigationAction::Up
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            NavigationAction::NextScreen
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            NavigationAction::PreviousScreen
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE)),
            NavigationAction::Goto(Screen::Money)
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)),
            NavigationAction::ToggleTheme
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Select
        );
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            NavigationAction::None
        );
    }

    #[test]
    fn test_palettes_differ() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_ne!(light.text, dark.text);
        assert_ne!(light.accent, dark.accent);
    }
}
