//! Progress screen
//!
//! Headline financial-health score plus the per-category breakdown, all
//! derived live from the store.

use crate::app::state::Palette;
use crate::store::HealthCategory;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Progress screen component
#[derive(Debug, Default)]
pub struct ProgressScreen;

impl ProgressScreen {
    /// Render the progress screen into the content area
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        score: u8,
        categories: &[HealthCategory],
        palette: &Palette,
    ) {
        let mut constraints = vec![Constraint::Length(4)];
        constraints.extend(categories.iter().map(|_| Constraint::Length(3)));
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.render_headline(f, chunks[0], score, palette);
        for (i, category) in categories.iter().enumerate() {
            self.render_category(f, chunks[i + 1], category, palette);
        }
    }

    fn render_headline(&self, f: &mut Frame, area: Rect, score: u8, palette: &Palette) {
        let headline = Paragraph::new(vec![
            Line::from("Financial Health Score"),
            Line::from(format!("{}/100", score)),
        ])
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
        f.render_widget(headline, area);
    }

    fn render_category(
        &self,
        f: &mut Frame,
        area: Rect,
        category: &HealthCategory,
        palette: &Palette,
    ) {
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(category.title))
            .gauge_style(Style::default().fg(palette.accent))
            .percent(u16::from(category.score.min(100)));
        f.render_widget(gauge, area);
    }
}
