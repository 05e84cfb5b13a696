//! Home screen implementation
//!
//! Profile header, balance card with the Add/Send quick actions, and the
//! recent-activity list (newest first).

use crate::app::state::Palette;
use crate::config::Profile;
use crate::store::{ActivityKind, Store};
use crate::util::format::format_rupees;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Home screen component
#[derive(Debug, Default)]
pub struct HomeScreen;

impl HomeScreen {
    /// Render the home screen into the content area
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        store: &Store,
        profile: &Profile,
        palette: &Palette,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Profile header
                Constraint::Length(5), // Balance card
                Constraint::Min(4),    // Recent activity
            ])
            .split(area);

        self.render_header(f, chunks[0], profile, palette);
        self.render_balance_card(f, chunks[1], store, palette);
        self.render_activities(f, chunks[2], store, palette);
    }

    fn render_header(&self, f: &mut Frame, area: Rect, profile: &Profile, palette: &Palette) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                profile.name.clone(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  गाँव: {}", profile.village),
                Style::default().fg(palette.dim),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
        f.render_widget(header, area);
    }

    fn render_balance_card(&self, f: &mut Frame, area: Rect, store: &Store, palette: &Palette) {
        let lines = vec![
            Line::from(Span::styled(
                "आपका बैलेंस",
                Style::default().fg(palette.dim),
            )),
            Line::from(Span::styled(
                format_rupees(store.balance()),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "[a] Add Money   [s] Send Money",
                Style::default().fg(palette.dim),
            )),
        ];

        let card = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
        f.render_widget(card, area);
    }

    fn render_activities(&self, f: &mut Frame, area: Rect, store: &Store, palette: &Palette) {
        let items: Vec<ListItem> = if store.activities().is_empty() {
            vec![ListItem::new("No activity yet")]
        } else {
            store
                .activities()
                .iter()
                .map(|activity| {
                    let amount_color = match activity.kind {
                        ActivityKind::Credit => palette.credit,
                        ActivityKind::Debit => palette.debit,
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:>8}  ", activity.signed_amount()),
                            Style::default().fg(amount_color),
                        ),
                        Span::styled(activity.description.clone(), Style::default().fg(palette.text)),
                        Span::styled(
                            format!("  {}", activity.timestamp),
                            Style::default().fg(palette.dim),
                        ),
                    ]))
                })
                .collect()
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Recent Activity"),
        );
        f.render_widget(list, area);
    }
}
