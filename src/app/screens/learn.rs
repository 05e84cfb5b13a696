//! Learning hub screen
//!
//! Lesson counter with an overall progress gauge and the module list.
//! Enter steps one lesson of the selected module.

use crate::app::screens::meter;
use crate::app::state::Palette;
use crate::store::LearningProgress;
use crate::util::format::percent_label;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState},
    Frame,
};

/// Learning screen component
#[derive(Debug)]
pub struct LearnScreen {
    selected_index: usize,
    list_state: ListState,
}

impl LearnScreen {
    /// Create a new learning screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
        }
    }

    /// Index of the selected module
    pub fn selected_module(&self) -> usize {
        self.selected_index
    }

    /// Move selection up, wrapping
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = len - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down, wrapping
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.selected_index < len - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the learning screen into the content area
    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        learning: &LearningProgress,
        palette: &Palette,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Overall progress gauge
                Constraint::Min(4),    // Module list
            ])
            .split(area);

        self.render_progress(f, chunks[0], learning, palette);
        self.render_modules(f, chunks[1], learning, palette);
    }

    fn render_progress(
        &self,
        f: &mut Frame,
        area: Rect,
        learning: &LearningProgress,
        palette: &Palette,
    ) {
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Your Progress — {}/{} Lessons",
                learning.completed_lessons(),
                learning.total_lessons()
            )))
            .gauge_style(Style::default().fg(palette.accent))
            .ratio(learning.completion_ratio());
        f.render_widget(gauge, area);
    }

    fn render_modules(
        &mut self,
        f: &mut Frame,
        area: Rect,
        learning: &LearningProgress,
        palette: &Palette,
    ) {
        let items: Vec<ListItem> = learning
            .modules()
            .iter()
            .map(|module| {
                let state = if module.is_complete() { "done" } else { "play" };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            module.title.clone(),
                            Style::default()
                                .fg(palette.text)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(format!("  [{}]", state), Style::default().fg(palette.dim)),
                    ]),
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", meter(f64::from(module.progress_percent) / 100.0, 10)),
                            Style::default().fg(palette.accent),
                        ),
                        Span::styled(
                            format!(
                                "{}  {}",
                                percent_label(module.progress_percent),
                                module.description
                            ),
                            Style::default().fg(palette.dim),
                        ),
                    ]),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Learning Hub"))
            .highlight_style(
                Style::default()
                    .bg(palette.highlight_bg)
                    .fg(palette.highlight_fg),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for LearnScreen {
    fn default() -> Self {
        Self::new()
    }
}
