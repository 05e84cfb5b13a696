//! Community group screen
//!
//! Group activity list with schedule, member ratio and the attendance
//! toggle, plus a derived headline of how many events the user joined.

use crate::app::state::Palette;
use crate::store::GroupActivity;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Group screen component
#[derive(Debug)]
pub struct GroupScreen {
    selected_index: usize,
    list_state: ListState,
}

impl GroupScreen {
    /// Create a new group screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
        }
    }

    /// Index of the selected activity
    pub fn selected_activity(&self) -> usize {
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

    /// Render the group screen into the content area
    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        activities: &[GroupActivity],
        attending_count: usize,
        palette: &Palette,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Headline stats
                Constraint::Min(4),    // Activity list
            ])
            .split(area);

        self.render_stats(f, chunks[0], activities.len(), attending_count, palette);
        self.render_activities(f, chunks[1], activities, palette);
    }

    fn render_stats(
        &self,
        f: &mut Frame,
        area: Rect,
        total: usize,
        attending: usize,
        palette: &Palette,
    ) {
        let stats = Paragraph::new(format!(
            "You're attending {} of {} upcoming activities",
            attending, total
        ))
        .style(Style::default().fg(palette.accent))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Community Groups"),
        );
        f.render_widget(stats, area);
    }

    fn render_activities(
        &mut self,
        f: &mut Frame,
        area: Rect,
        activities: &[GroupActivity],
        palette: &Palette,
    ) {
        let items: Vec<ListItem> = if activities.is_empty() {
            vec![ListItem::new("No group activities scheduled")]
        } else {
            activities
                .iter()
                .map(|activity| {
                    let (badge, badge_color) = if activity.attending {
                        ("Attending", palette.credit)
                    } else {
                        ("Join", palette.dim)
                    };
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(
                                activity.title.clone(),
                                Style::default()
                                    .fg(palette.text)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(
                                format!("  [{}]", badge),
                                Style::default().fg(badge_color),
                            ),
                        ]),
                        Line::from(Span::styled(
                            format!("{}  ·  {} members", activity.time, activity.member_ratio),
                            Style::default().fg(palette.dim),
                        )),
                    ])
                })
                .collect()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Group Activities — Enter toggles attendance"),
            )
            .highlight_style(
                Style::default()
                    .bg(palette.highlight_bg)
                    .fg(palette.highlight_fg),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for GroupScreen {
    fn default() -> Self {
        Self::new()
    }
}
