//! # SBCC GUI Application
//!
//! Desktop and web front end for the embodied-carbon estimator. Built with
//! Iced 0.14.0 using the Elm architecture (State, Message, Update, View).
//!
//! All domain state lives in [`sbcc_core::Calculator`]; this crate keeps
//! presentation state next to it: one text draft per numeric control (so
//! half-typed input never reaches the trusted state), a field-scoped inline
//! error per draft, and the open/closed state of the two big catalogue
//! choosers on each row.

mod download;
mod ui;

use std::path::PathBuf;

use chrono::Local;
use iced::widget::{column, container, row, scrollable, Space};
use iced::window;
use iced::{Element, Length, Size, Task, Theme};
use uuid::Uuid;

use sbcc_core::calculator::{Calculator, FieldEdit, MetadataEdit};
use sbcc_core::catalogue::Catalogue;
use sbcc_core::errors::CarbonError;
use sbcc_core::options::{ChooserOption, ChooserState};
use sbcc_core::row::{Row, Units};

use ui::metadata_panel::ReferenceChoice;
use ui::rows_table::{CategoryChoice, VehicleChoice};

pub fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1000.0, 620.0)),
            ..Default::default()
        })
        .run()
}

/// Which of a row's two catalogue choosers a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooserField {
    Component,
    Country,
}

/// Draft text for one numeric control plus its inline error.
///
/// The text always follows the keyboard; the error is set exactly when the
/// current text was rejected by the calculator, in which case the trusted
/// state still holds the last accepted value.
#[derive(Debug, Clone, Default)]
pub struct FieldDraft {
    pub text: String,
    pub error: Option<String>,
}

impl FieldDraft {
    fn new(text: String) -> Self {
        FieldDraft { text, error: None }
    }
}

/// Presentation state for one calculator row.
///
/// Drafts sit in a list parallel to `calculator.project().rows`. Messages
/// carry the draft's id rather than an index, so a click that races a
/// structural edit can only miss, never hit the wrong row.
#[derive(Debug, Clone)]
pub struct RowDraft {
    pub id: Uuid,
    pub quantity: FieldDraft,
    pub manual_marine_distance: FieldDraft,
    pub international_road_distance: FieldDraft,
    pub local_road_distance: FieldDraft,
    pub component_chooser: ChooserState,
    pub country_chooser: ChooserState,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Toolbar
    NewSession,
    Export,
    ExportFinished(Result<Option<PathBuf>, CarbonError>),
    ToggleSettingsMenu,
    ToggleDarkMode,

    // Metadata panel
    GfaChanged(String),
    ReferenceSelected(ReferenceChoice),

    // Row structure
    AddRow,
    DuplicateRow(Uuid),
    RemoveRow(Uuid),

    // Row fields
    QuantityChanged(Uuid, String),
    UnitsSelected(Uuid, Units),
    CategorySelected(Uuid, CategoryChoice),
    MarineVehicleSelected(Uuid, VehicleChoice),
    ManualMarineDistanceChanged(Uuid, String),
    InternationalVehicleSelected(Uuid, VehicleChoice),
    LocalVehicleSelected(Uuid, VehicleChoice),
    InternationalDistanceChanged(Uuid, String),
    LocalDistanceChanged(Uuid, String),

    // Catalogue choosers
    ChooserToggled(Uuid, ChooserField),
    ChooserPicked(Uuid, ChooserField, String),
}

pub struct App {
    calculator: Calculator,
    drafts: Vec<RowDraft>,
    gfa: FieldDraft,
    status: String,
    settings_menu_open: bool,
    dark_mode: bool,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let calculator = Calculator::new(Catalogue::builtin());
        let drafts = drafts_for(&calculator);
        let gfa = FieldDraft::new(format_f64(calculator.project().gfa));

        (
            App {
                calculator,
                drafts,
                gfa,
                status: "Ready".to_string(),
                settings_menu_open: false,
                dark_mode: true,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        "SBCC - Embodied Carbon Estimator".to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NewSession => {
                self.calculator = Calculator::new(Catalogue::builtin());
                self.drafts = drafts_for(&self.calculator);
                self.gfa = FieldDraft::new(format_f64(self.calculator.project().gfa));
                self.settings_menu_open = false;
                self.set_status("New session");
                Task::none()
            }
            Message::Export => self.export(),
            Message::ExportFinished(result) => {
                match result {
                    Ok(Some(path)) => self.set_status(format!("Exported {}", path.display())),
                    Ok(None) => self.set_status("Export cancelled"),
                    Err(e) => self.set_status(format!("Export failed: {}", e)),
                }
                Task::none()
            }
            Message::ToggleSettingsMenu => {
                self.settings_menu_open = !self.settings_menu_open;
                Task::none()
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                Task::none()
            }

            Message::GfaChanged(text) => {
                let result = self.calculator.set_metadata(MetadataEdit::Gfa(text.clone()));
                self.gfa.text = text;
                self.gfa.error = result.err().map(|e| inline_reason(&e));
                Task::none()
            }
            Message::ReferenceSelected(choice) => {
                if let Err(e) = self
                    .calculator
                    .set_metadata(MetadataEdit::ReferenceValue(choice.value))
                {
                    self.set_status(format!("Edit rejected: {}", e));
                }
                Task::none()
            }

            Message::AddRow => {
                let index = self.calculator.append_default();
                let draft = row_draft(
                    &self.calculator.project().rows[index],
                    self.calculator.catalogue(),
                );
                self.drafts.push(draft);
                self.set_status("Row added");
                Task::none()
            }
            Message::DuplicateRow(id) => {
                if let Some(index) = self.draft_index(id) {
                    if let Some(new_index) = self.calculator.duplicate(index) {
                        let draft = row_draft(
                            &self.calculator.project().rows[new_index],
                            self.calculator.catalogue(),
                        );
                        self.drafts.push(draft);
                        self.set_status(format!("Row {} duplicated", index + 1));
                    }
                }
                Task::none()
            }
            Message::RemoveRow(id) => {
                if let Some(index) = self.draft_index(id) {
                    if self.calculator.remove(index).is_some() {
                        self.drafts.remove(index);
                        self.set_status(format!("Row {} removed", index + 1));
                    }
                }
                Task::none()
            }

            Message::QuantityChanged(id, text) => {
                self.apply_row_text(id, text, |d| &mut d.quantity, FieldEdit::Quantity);
                Task::none()
            }
            Message::UnitsSelected(id, units) => {
                self.apply_row_edit(id, FieldEdit::Units(units));
                Task::none()
            }
            Message::CategorySelected(id, choice) => {
                self.apply_row_edit(id, FieldEdit::Category(choice.into_option()));
                Task::none()
            }
            Message::MarineVehicleSelected(id, choice) => {
                self.apply_row_edit(id, FieldEdit::MarineVehicleId(choice.id));
                Task::none()
            }
            Message::ManualMarineDistanceChanged(id, text) => {
                self.apply_row_text(
                    id,
                    text,
                    |d| &mut d.manual_marine_distance,
                    FieldEdit::ManualMarineDistance,
                );
                Task::none()
            }
            Message::InternationalVehicleSelected(id, choice) => {
                self.apply_row_edit(id, FieldEdit::InternationalRoadVehicleId(choice.id));
                Task::none()
            }
            Message::LocalVehicleSelected(id, choice) => {
                self.apply_row_edit(id, FieldEdit::LocalRoadVehicleId(choice.id));
                Task::none()
            }
            Message::InternationalDistanceChanged(id, text) => {
                self.apply_row_text(
                    id,
                    text,
                    |d| &mut d.international_road_distance,
                    FieldEdit::InternationalRoadDistance,
                );
                Task::none()
            }
            Message::LocalDistanceChanged(id, text) => {
                self.apply_row_text(
                    id,
                    text,
                    |d| &mut d.local_road_distance,
                    FieldEdit::LocalRoadDistance,
                );
                Task::none()
            }

            Message::ChooserToggled(id, field) => {
                if let Some(index) = self.draft_index(id) {
                    let draft = &mut self.drafts[index];
                    let chooser = match field {
                        ChooserField::Component => &mut draft.component_chooser,
                        ChooserField::Country => &mut draft.country_chooser,
                    };
                    if chooser.is_open() {
                        chooser.close();
                    } else {
                        let options = match field {
                            ChooserField::Component => {
                                component_options(self.calculator.catalogue())
                            }
                            ChooserField::Country => country_options(self.calculator.catalogue()),
                        };
                        chooser.open_with(|| options);
                    }
                }
                Task::none()
            }
            Message::ChooserPicked(id, field, option_id) => {
                if let Some(index) = self.draft_index(id) {
                    let edit = match field {
                        ChooserField::Component => FieldEdit::ComponentId(option_id.clone()),
                        ChooserField::Country => FieldEdit::CountryId(option_id.clone()),
                    };
                    if let Err(e) = self.calculator.set_field(index, edit) {
                        self.set_status(format!("Edit rejected: {}", e));
                    } else {
                        let label = match field {
                            ChooserField::Component => self
                                .calculator
                                .catalogue()
                                .component_label(&option_id)
                                .unwrap_or(&option_id)
                                .to_string(),
                            ChooserField::Country => option_id.clone(),
                        };
                        let draft = &mut self.drafts[index];
                        let chooser = match field {
                            ChooserField::Component => &mut draft.component_chooser,
                            ChooserField::Country => &mut draft.country_chooser,
                        };
                        chooser.set_selected_label(label);
                        chooser.close();
                    }
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header();
        let toolbar = ui::toolbar::view_toolbar(self.settings_menu_open);

        let editor = container(
            scrollable(
                column![
                    ui::metadata_panel::view(self),
                    Space::new().height(14),
                    ui::rows_table::view(self),
                ]
                .padding(8),
            ),
        )
        .width(Length::FillPortion(62))
        .style(container::bordered_box)
        .padding(5);

        let main_row = row![editor, ui::results_panel::view_results_panel(self)]
            .spacing(8)
            .height(Length::Fill);

        let mut layout = column![header, toolbar].spacing(4).padding(8);
        if self.settings_menu_open {
            layout = layout.push(row![
                Space::new().width(Length::Fill),
                ui::toolbar::view_settings_menu(self.dark_mode),
            ]);
        }

        layout
            .push(main_row)
            .push(ui::status_bar::view_status_bar(
                self.calculator.project().rows.len(),
                &self.status,
            ))
            .into()
    }

    /// Index of the draft (and therefore the calculator row) with this id.
    fn draft_index(&self, id: Uuid) -> Option<usize> {
        self.drafts.iter().position(|d| d.id == id)
    }

    /// Commit a numeric text edit: the draft tracks the keystrokes, the
    /// calculator decides whether the value lands.
    fn apply_row_text(
        &mut self,
        id: Uuid,
        text: String,
        pick: fn(&mut RowDraft) -> &mut FieldDraft,
        make: fn(String) -> FieldEdit,
    ) {
        let Some(index) = self.draft_index(id) else {
            return;
        };
        let result = self.calculator.set_field(index, make(text.clone()));
        let field = pick(&mut self.drafts[index]);
        field.text = text;
        field.error = result.err().map(|e| inline_reason(&e));
    }

    /// Commit a typed selection edit.
    fn apply_row_edit(&mut self, id: Uuid, edit: FieldEdit) {
        let Some(index) = self.draft_index(id) else {
            return;
        };
        if let Err(e) = self.calculator.set_field(index, edit) {
            self.set_status(format!("Edit rejected: {}", e));
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = format!("[{}] {}", Local::now().format("%H:%M:%S"), message.into());
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn export(&mut self) -> Task<Message> {
        let output = self.calculator.output().clone();
        Task::perform(download::save_with_dialog(output), Message::ExportFinished)
    }

    #[cfg(target_arch = "wasm32")]
    fn export(&mut self) -> Task<Message> {
        use sbcc_core::export::EXPORT_FILE_NAME;

        match download::browser_download(self.calculator.output()) {
            Ok(()) => self.set_status(format!("Exported {}", EXPORT_FILE_NAME)),
            Err(e) => self.set_status(format!("Export failed: {}", e)),
        }
        Task::none()
    }
}

/// Build the draft list for a fresh calculator.
fn drafts_for(calculator: &Calculator) -> Vec<RowDraft> {
    calculator
        .project()
        .rows
        .iter()
        .map(|row| row_draft(row, calculator.catalogue()))
        .collect()
}

/// Build the presentation draft mirroring one trusted row.
fn row_draft(row: &Row, catalogue: &Catalogue) -> RowDraft {
    let component_label = catalogue
        .component_label(&row.component_id)
        .unwrap_or(&row.component_id)
        .to_string();

    RowDraft {
        id: Uuid::new_v4(),
        quantity: FieldDraft::new(format_f64(row.quantity)),
        manual_marine_distance: FieldDraft::new(
            row.manual_marine_distance.map(format_f64).unwrap_or_default(),
        ),
        international_road_distance: FieldDraft::new(format_f64(row.international_road_distance)),
        local_road_distance: FieldDraft::new(format_f64(row.local_road_distance)),
        component_chooser: ChooserState::closed(component_label),
        country_chooser: ChooserState::closed(row.country_id.clone()),
    }
}

fn format_f64(value: f64) -> String {
    format!("{}", value)
}

/// The short, field-scoped reason shown inline next to a control.
fn inline_reason(error: &CarbonError) -> String {
    match error {
        CarbonError::InvalidInput { reason, .. } => reason.clone(),
        CarbonError::MissingField { .. } => "Required".to_string(),
        other => other.to_string(),
    }
}

fn component_options(catalogue: &Catalogue) -> Vec<ChooserOption> {
    catalogue
        .component_ids()
        .into_iter()
        .map(|id| {
            let label = catalogue.component_label(&id).unwrap_or(&id).to_string();
            ChooserOption { id, label }
        })
        .collect()
}

fn country_options(catalogue: &Catalogue) -> Vec<ChooserOption> {
    catalogue
        .country_ids()
        .into_iter()
        .map(|id| {
            let label = id.clone();
            ChooserOption { id, label }
        })
        .collect()
}
