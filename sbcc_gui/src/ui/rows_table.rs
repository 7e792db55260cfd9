//! Input view for the material rows
//!
//! One editable block per row: a material line (component, quantity, units,
//! category, origin) and the transport legs (sea, international road, local
//! road). Numeric inputs render their draft text with a field-scoped error
//! underneath until the entry coerces; the component and country choosers
//! materialize their option lists only while open.

use std::fmt;

use iced::widget::{
    button, column, container, pick_list, row, rule, scrollable, text, text_input, Column,
    Space,
};
use iced::{Alignment, Element, Length, Padding};
use uuid::Uuid;

use sbcc_core::catalogue::Catalogue;
use sbcc_core::options::ChooserState;
use sbcc_core::row::{GreenMarkCategory, Row, Units};

use crate::{App, ChooserField, FieldDraft, Message, RowDraft};

/// Category option, including the explicit "none".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryChoice {
    None,
    Category(GreenMarkCategory),
}

impl CategoryChoice {
    pub const ALL: [CategoryChoice; 4] = [
        CategoryChoice::None,
        CategoryChoice::Category(GreenMarkCategory::Concrete),
        CategoryChoice::Category(GreenMarkCategory::Steel),
        CategoryChoice::Category(GreenMarkCategory::Glass),
    ];

    pub fn from_option(category: Option<GreenMarkCategory>) -> Self {
        match category {
            Some(c) => CategoryChoice::Category(c),
            None => CategoryChoice::None,
        }
    }

    pub fn into_option(self) -> Option<GreenMarkCategory> {
        match self {
            CategoryChoice::Category(c) => Some(c),
            CategoryChoice::None => None,
        }
    }
}

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryChoice::None => write!(f, "-"),
            CategoryChoice::Category(c) => write!(f, "{}", c),
        }
    }
}

/// Vehicle option resolved to its display name.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleChoice {
    pub id: String,
    pub label: String,
}

impl fmt::Display for VehicleChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Render the rows editor
pub fn view(app: &App) -> Column<'_, Message> {
    let catalogue = app.calculator.catalogue();
    let marine = vehicle_choices(catalogue, catalogue.marine_vehicle_ids());
    let road = vehicle_choices(catalogue, catalogue.road_vehicle_ids());

    let mut rows_list: Column<'_, Message> = column![].spacing(8);
    for (index, (row_state, draft)) in app
        .calculator
        .project()
        .rows
        .iter()
        .zip(&app.drafts)
        .enumerate()
    {
        rows_list = rows_list.push(view_row(index, row_state, draft, &marine, &road));
    }

    if app.drafts.is_empty() {
        rows_list = rows_list.push(
            text("No rows. Add one to start estimating.")
                .size(11)
                .color([0.5, 0.5, 0.5]),
        );
    }

    let add_row_btn = button(text("+ Add Row").size(10))
        .on_press(Message::AddRow)
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    column![
        text("Material Rows").size(14),
        Space::new().height(8),
        rows_list,
        Space::new().height(8),
        add_row_btn,
    ]
    .spacing(2)
}

fn vehicle_choices(catalogue: &Catalogue, ids: Vec<String>) -> Vec<VehicleChoice> {
    ids.into_iter()
        .map(|id| {
            let label = catalogue.vehicle_label(&id).unwrap_or(&id).to_string();
            VehicleChoice { id, label }
        })
        .collect()
}

fn selected_vehicle(options: &[VehicleChoice], id: &str) -> Option<VehicleChoice> {
    options.iter().find(|choice| choice.id == id).cloned()
}

/// Render one row block
fn view_row<'a>(
    index: usize,
    row_state: &'a Row,
    draft: &'a RowDraft,
    marine: &[VehicleChoice],
    road: &[VehicleChoice],
) -> Element<'a, Message> {
    let id = draft.id;

    let header_line = row![
        text(format!("{}.", index + 1)).size(11).width(Length::Fixed(24.0)),
        view_chooser(id, ChooserField::Component, &draft.component_chooser),
        Space::new().width(Length::Fill),
        button(text("Duplicate").size(10))
            .on_press(Message::DuplicateRow(id))
            .padding(Padding::from([2, 6]))
            .style(button::secondary),
        button(text("X").size(10))
            .on_press(Message::RemoveRow(id))
            .padding(Padding::from([2, 6]))
            .style(button::secondary),
    ]
    .spacing(4)
    .align_y(Alignment::Start);

    let material_line = row![
        text("Qty:").size(10),
        numeric_input("", &draft.quantity, 70.0, move |s| {
            Message::QuantityChanged(id, s)
        }),
        pick_list(&Units::ALL[..], Some(row_state.units), move |u| {
            Message::UnitsSelected(id, u)
        })
        .width(Length::Fixed(70.0))
        .text_size(10),
        text("Category:").size(10),
        pick_list(
            &CategoryChoice::ALL[..],
            Some(CategoryChoice::from_option(row_state.green_mark_category)),
            move |c| Message::CategorySelected(id, c),
        )
        .width(Length::Fixed(90.0))
        .text_size(10),
        text("Origin:").size(10),
        view_chooser(id, ChooserField::Country, &draft.country_chooser),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let sea_line = row![
        text("Sea:").size(10).width(Length::Fixed(36.0)),
        pick_list(marine.to_vec(), selected_vehicle(marine, &row_state.marine_vehicle_id), move |c| {
            Message::MarineVehicleSelected(id, c)
        })
        .width(Length::Fixed(180.0))
        .text_size(10)
        .placeholder("Select..."),
        text("km:").size(10),
        numeric_input("port", &draft.manual_marine_distance, 70.0, move |s| {
            Message::ManualMarineDistanceChanged(id, s)
        }),
        text("blank = port distance").size(9).color([0.5, 0.5, 0.5]),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let road_line = row![
        text("Intl:").size(10).width(Length::Fixed(36.0)),
        pick_list(
            road.to_vec(),
            selected_vehicle(road, &row_state.international_road_vehicle_id),
            move |c| Message::InternationalVehicleSelected(id, c),
        )
        .width(Length::Fixed(150.0))
        .text_size(10)
        .placeholder("Select..."),
        numeric_input("km", &draft.international_road_distance, 60.0, move |s| {
            Message::InternationalDistanceChanged(id, s)
        }),
        text("Local:").size(10),
        pick_list(
            road.to_vec(),
            selected_vehicle(road, &row_state.local_road_vehicle_id),
            move |c| Message::LocalVehicleSelected(id, c),
        )
        .width(Length::Fixed(150.0))
        .text_size(10)
        .placeholder("Select..."),
        numeric_input("km", &draft.local_road_distance, 60.0, move |s| {
            Message::LocalDistanceChanged(id, s)
        }),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    container(
        column![
            header_line,
            rule::horizontal(1),
            material_line,
            sea_line,
            road_line,
        ]
        .spacing(6),
    )
    .padding(8)
    .style(container::bordered_box)
    .width(Length::Fill)
    .into()
}

/// Numeric text input with its inline error underneath
fn numeric_input<'a>(
    placeholder: &'a str,
    draft: &'a FieldDraft,
    width: f32,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let input = text_input(placeholder, &draft.text)
        .on_input(on_change)
        .width(Length::Fixed(width))
        .padding(2)
        .size(10);

    match &draft.error {
        Some(reason) => column![input, text(reason).size(9).color([0.8, 0.2, 0.2])]
            .spacing(2)
            .into(),
        None => input.into(),
    }
}

/// Dropdown over a large catalogue list; options exist only while open
fn view_chooser(id: Uuid, field: ChooserField, chooser: &ChooserState) -> Element<'_, Message> {
    let indicator = if chooser.is_open() { "▲" } else { "▼" };

    let toggle = button(
        row![
            text(chooser.selected_label()).size(10),
            Space::new().width(Length::Fill),
            text(indicator).size(9),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::ChooserToggled(id, field))
    .padding(Padding::from([3, 6]))
    .style(button::secondary)
    .width(Length::Fixed(190.0));

    if !chooser.is_open() {
        return toggle.into();
    }

    let mut options: Column<'_, Message> = column![].spacing(1);
    for option in chooser.options() {
        options = options.push(
            button(text(&option.label).size(10))
                .on_press(Message::ChooserPicked(id, field, option.id.clone()))
                .padding(Padding::from([2, 6]))
                .style(button::text)
                .width(Length::Fill),
        );
    }

    column![
        toggle,
        container(scrollable(options).height(Length::Fixed(140.0)))
            .style(container::bordered_box)
            .width(Length::Fixed(190.0))
            .padding(2),
    ]
    .spacing(2)
    .into()
}
