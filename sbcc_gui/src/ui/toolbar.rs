//! Toolbar component
//!
//! Contains session operations (New, Export JSON) and the settings dropdown.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header
pub fn view_header() -> Element<'static, Message> {
    row![
        text("SBCC").size(28),
        Space::new().width(Length::Fill),
        text("Embodied Carbon / Green Mark Estimator").size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the toolbar with session operations and settings dropdown
pub fn view_toolbar(settings_menu_open: bool) -> Element<'static, Message> {
    let session_buttons = row![
        button(text("New").size(11))
            .on_press(Message::NewSession)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        button(text("Export JSON").size(11))
            .on_press(Message::Export)
            .padding(Padding::from([4, 8]))
            .style(button::primary),
    ]
    .spacing(4);

    // Settings button with dropdown indicator
    let settings_button_text = if settings_menu_open { "Settings ▲" } else { "Settings ▼" };
    let settings_button = button(text(settings_button_text).size(11))
        .on_press(Message::ToggleSettingsMenu)
        .padding(Padding::from([4, 8]))
        .style(if settings_menu_open { button::primary } else { button::secondary });

    row![
        session_buttons,
        Space::new().width(Length::Fill),
        settings_button,
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}

/// Render the settings dropdown menu
pub fn view_settings_menu(dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    let dropdown_content = column![
        button(text(theme_label).size(10))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 12]))
            .width(Length::Fill)
            .style(button::secondary),
    ]
    .spacing(2)
    .width(Length::Fixed(130.0));

    container(dropdown_content)
        .padding(4)
        .style(container::bordered_box)
        .into()
}
