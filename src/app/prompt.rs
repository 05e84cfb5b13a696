//! Modal amount prompt
//!
//! The prototype hardcoded its add/send/contribute amounts; here the amount
//! is typed by the user into a small centered popup. Digits edit the
//! buffer, Enter submits, Esc cancels. Validation happens at this boundary
//! so the store only ever sees positive amounts.

use crate::app::state::Palette;
use crate::{NidhiError, Result};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Longest amount accepted, in digits (999,999,999 rupees is plenty)
const MAX_DIGITS: usize = 9;

/// What the prompted amount will be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    /// Credit the ledger
    AddMoney,
    /// Debit the ledger
    SendMoney,
    /// Debit the ledger into a savings goal
    Contribute {
        /// Index of the goal being funded
        goal_index: usize,
    },
}

/// What a key press did to the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Still editing
    Pending,
    /// User dismissed the prompt
    Cancelled,
    /// User pressed Enter; read the amount with [`AmountPrompt::amount`]
    Submitted,
}

/// A modal prompt collecting a rupee amount
#[derive(Debug)]
pub struct AmountPrompt {
    purpose: PromptPurpose,
    title: String,
    buffer: String,
}

impl AmountPrompt {
    /// Create a prompt; the title names the action, e.g. "Add Money"
    pub fn new(purpose: PromptPurpose, title: impl Into<String>) -> Self {
        Self {
            purpose,
            title: title.into(),
            buffer: String::new(),
        }
    }

    /// What the amount is for
    pub fn purpose(&self) -> PromptPurpose {
        self.purpose
    }

    /// Apply a key press to the prompt
    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        match key.code {
            KeyCode::Char(c @ '0'..='9') => {
                // No leading zeros, no overflow past the digit cap
                if self.buffer.len() < MAX_DIGITS && !(self.buffer.is_empty() && c == '0') {
                    self.buffer.push(c);
                }
                PromptOutcome::Pending
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                PromptOutcome::Pending
            }
            KeyCode::Enter => PromptOutcome::Submitted,
            KeyCode::Esc => PromptOutcome::Cancelled,
            _ => PromptOutcome::Pending,
        }
    }

    /// Parse the typed amount, rejecting empty input
    pub fn amount(&self) -> Result<u64> {
        let amount: u64 = self
            .buffer
            .parse()
            .map_err(|_| NidhiError::InvalidAmount("no amount entered".to_string()))?;
        if amount == 0 {
            return Err(NidhiError::InvalidAmount(
                "amount must be greater than zero".to_string(),
            ));
        }
        Ok(amount)
    }

    /// Render the prompt as a centered popup over the current screen
    pub fn render(&self, f: &mut Frame, palette: &Palette) {
        let area = centered_rect(40, 7, f.size());
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(self.title.clone());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let entry = Paragraph::new(Line::from(vec![
            Span::styled("₹ ", Style::default().fg(palette.dim)),
            Span::styled(
                if self.buffer.is_empty() {
                    "0".to_string()
                } else {
                    self.buffer.clone()
                },
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(palette.accent)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(entry, chunks[1]);

        let help = Paragraph::new("Enter: Confirm  Esc: Cancel")
            .style(Style::default().fg(palette.dim))
            .alignment(Alignment::Center);
        f.render_widget(help, chunks[2]);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
