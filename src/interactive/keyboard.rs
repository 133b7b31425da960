//! On-screen keyboard geometry
//!
//! The same layout is used to draw the keys and to resolve mouse clicks, so
//! a click always lands on the button that was drawn there.

use super::input::InputAction;
use ratatui::layout::Rect;

/// Letter rows, top to bottom
pub const LETTER_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

const KEY_GAP: u16 = 1;
const ROW_STEP: u16 = 2;

/// One clickable key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: InputAction,
    pub area: Rect,
}

impl Button {
    #[must_use]
    pub const fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height
    }

    /// The letter this key types, if it is a letter key
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        match self.action {
            InputAction::Append(c) => Some(c),
            _ => None,
        }
    }
}

/// Positions of all keys within an area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    buttons: Vec<Button>,
}

impl KeyboardLayout {
    /// Lines needed to show every row
    pub const HEIGHT: u16 = ROW_STEP * 3 + 1;

    /// Lay out the keys centered in `area`
    ///
    /// The bottom row holds ENTER and BACK, plus RESTART when `show_restart`
    /// is set. Keys that don't fit inside `area` are left out.
    #[must_use]
    pub fn new(area: Rect, show_restart: bool) -> Self {
        let mut rows: Vec<Vec<(String, InputAction)>> = LETTER_ROWS
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| (format!(" {c} "), InputAction::Append(c)))
                    .collect()
            })
            .collect();

        let mut actions = vec![
            (" ENTER ".to_string(), InputAction::Submit),
            (" BACK ".to_string(), InputAction::Delete),
        ];
        if show_restart {
            actions.push((" RESTART ".to_string(), InputAction::Restart));
        }
        rows.push(actions);

        let mut buttons = Vec::new();
        for (index, keys) in rows.into_iter().enumerate() {
            let y = area.y + index as u16 * ROW_STEP;
            if y >= area.y + area.height {
                break;
            }

            let widths: Vec<u16> = keys.iter().map(|(label, _)| label.len() as u16).collect();
            let row_width =
                widths.iter().sum::<u16>() + KEY_GAP * (widths.len() as u16).saturating_sub(1);
            let mut x = area.x + area.width.saturating_sub(row_width) / 2;

            for ((label, action), width) in keys.into_iter().zip(widths) {
                if x + width > area.x + area.width {
                    break;
                }
                buttons.push(Button {
                    label,
                    action,
                    area: Rect::new(x, y, width, 1),
                });
                x += width + KEY_GAP;
            }
        }

        Self { buttons }
    }

    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Action of the key under a terminal cell, if any
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<InputAction> {
        self.buttons
            .iter()
            .find(|b| b.contains(column, row))
            .map(|b| b.action)
    }
}
