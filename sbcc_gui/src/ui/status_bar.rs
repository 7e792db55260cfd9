//! Status Bar (Bottom)
//!
//! Displays the row count and the most recent status message.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(row_count: usize, status: &str) -> Element<'_, Message> {
    let rows_label = if row_count == 1 {
        "1 row".to_string()
    } else {
        format!("{} rows", row_count)
    };

    row![
        text(rows_label).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
