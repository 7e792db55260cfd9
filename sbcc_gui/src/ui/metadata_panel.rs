//! Input view for project metadata
//!
//! Displays the gross floor area field and the reference benchmark the
//! score is computed against.

use std::fmt;

use iced::widget::{column, pick_list, row, text, text_input, Column, Space};
use iced::{Alignment, Length};

use sbcc_core::catalogue::ReferenceEntry;

use crate::{App, Message};

/// One benchmark option of the reference pick list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceChoice {
    pub building_type: String,
    pub value: f64,
}

impl ReferenceChoice {
    fn from_entry(entry: &ReferenceEntry) -> Self {
        ReferenceChoice {
            building_type: entry.building_type.clone(),
            value: entry.reference_value,
        }
    }
}

impl fmt::Display for ReferenceChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.0} kgCO2e/m2)", self.building_type, self.value)
    }
}

/// Render the metadata editor
pub fn view(app: &App) -> Column<'_, Message> {
    let project = app.calculator.project();

    let options: Vec<ReferenceChoice> = app
        .calculator
        .catalogue()
        .reference_entries()
        .iter()
        .map(ReferenceChoice::from_entry)
        .collect();
    let selected = options
        .iter()
        .find(|choice| choice.value == project.reference_value)
        .cloned();

    let gfa_input = row![
        text("GFA (m2):").size(11).width(Length::Fixed(110.0)),
        text_input("", &app.gfa.text)
            .on_input(Message::GfaChanged)
            .width(Length::Fixed(120.0))
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center);

    let mut panel = column![
        text("Project").size(14),
        Space::new().height(8),
        gfa_input,
    ]
    .spacing(6);

    if let Some(reason) = &app.gfa.error {
        panel = panel.push(text(reason).size(10).color([0.8, 0.2, 0.2]));
    }

    panel.push(
        row![
            text("Benchmark:").size(11).width(Length::Fixed(110.0)),
            pick_list(options, selected, Message::ReferenceSelected)
                .width(Length::Fill)
                .text_size(11)
                .placeholder("Select a building type..."),
        ]
        .align_y(Alignment::Center),
    )
}
