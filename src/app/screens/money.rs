//! Money management screen
//!
//! Quick Add/Send actions and the savings-goal list. Enter opens the
//! contribute prompt for the selected goal.

use crate::app::screens::meter;
use crate::app::state::Palette;
use crate::store::SavingsGoal;
use crate::util::format::rupee_pair;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Money screen component
#[derive(Debug)]
pub struct MoneyScreen {
    selected_index: usize,
    list_state: ListState,
}

impl MoneyScreen {
    /// Create a new money screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
        }
    }

    /// Index of the selected goal
    pub fn selected_goal(&self) -> usize {
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

    /// Render the money screen into the content area
    pub fn render(&mut self, f: &mut Frame, area: Rect, goals: &[SavingsGoal], palette: &Palette) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Quick actions
                Constraint::Min(4),    // Savings goals
            ])
            .split(area);

        self.render_actions(f, chunks[0], palette);
        self.render_goals(f, chunks[1], goals, palette);
    }

    fn render_actions(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let actions = Paragraph::new("[a] Add Money   [s] Send Money   [Enter] Contribute   [i] Invest")
            .style(Style::default().fg(palette.dim))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Money Management"),
            );
        f.render_widget(actions, area);
    }

    fn render_goals(&mut self, f: &mut Frame, area: Rect, goals: &[SavingsGoal], palette: &Palette) {
        let items: Vec<ListItem> = if goals.is_empty() {
            vec![ListItem::new("No savings goals")]
        } else {
            goals
                .iter()
                .map(|goal| {
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(
                                goal.title.clone(),
                                Style::default()
                                    .fg(palette.text)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(
                                format!("  {}", rupee_pair(goal.current_amount, goal.target_amount)),
                                Style::default().fg(palette.accent),
                            ),
                        ]),
                        Line::from(Span::styled(
                            format!("{} {:.0}%", meter(goal.fill_ratio(), 20), goal.fill_ratio() * 100.0),
                            Style::default().fg(palette.accent),
                        )),
                    ])
                })
                .collect()
        };

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Savings Goals"))
            .highlight_style(
                Style::default()
                    .bg(palette.highlight_bg)
                    .fg(palette.highlight_fg),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for MoneyScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_selection_wraps() {
        let mut screen = MoneyScreen::new();
        screen.select_next(2);
        assert_eq!(screen.selected_goal(), 1);
        screen.select_next(2);
        assert_eq!(screen.selected_goal(), 0);
        screen.select_previous(2);
        assert_eq!(screen.selected_goal(), 1);
    }
}
