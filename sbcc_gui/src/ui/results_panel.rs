//! Results Panel (Right Side)
//!
//! Read-only view over the derived output: the Green Mark score, the
//! project totals, and a per-row emissions table. Everything shown here
//! is republished by the engine after each edit, so the panel never
//! computes anything itself.

use iced::widget::{column, container, row, rule, scrollable, text, Column, Space};
use iced::{Element, Length};

use crate::{App, Message};

/// Render the derived results for the current project state
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let output = app.calculator.output();

    let score_color = match output.green_mark_score {
        2 => [0.2, 0.6, 0.2],
        1 => [0.8, 0.5, 0.1],
        _ => [0.6, 0.6, 0.6],
    };

    let mut content: Column<'_, Message> = column![
        text("Results").size(14),
        Space::new().height(8),
        text(format!("Green Mark Score: {} / 2", output.green_mark_score))
            .size(16)
            .color(score_color),
        Space::new().height(12),
        text("Totals").size(12),
        text(format!("Total Emissions: {:.1} kgCO2e", output.total_emissions)).size(11),
        text(format!(
            "Per GFA: {:.2} kgCO2e/m2",
            output.embodied_carbon_per_gfa
        ))
        .size(11),
        text(format!(
            "Reduction vs Benchmark: {:.1}%",
            output.embodied_carbon_per_gfa_compared_to_reference
        ))
        .size(11),
        Space::new().height(12),
        text("Per-Row Emissions (kgCO2e)").size(12),
        Space::new().height(4),
    ]
    .spacing(2);

    if output.rows.is_empty() {
        content = content.push(text("No rows.").size(11).color([0.5, 0.5, 0.5]));
    } else {
        content = content.push(
            row![
                text("#").size(10).width(Length::Fixed(24.0)),
                text("Component").size(10).width(Length::Fill),
                text("A1-A3").size(10).width(Length::Fixed(70.0)),
                text("A4").size(10).width(Length::Fixed(60.0)),
                text("Total").size(10).width(Length::Fixed(70.0)),
            ]
            .spacing(4),
        );
        content = content.push(rule::horizontal(1));

        let catalogue = app.calculator.catalogue();
        for (index, (row_state, row_output)) in app
            .calculator
            .project()
            .rows
            .iter()
            .zip(&output.rows)
            .enumerate()
        {
            let label = catalogue
                .component_label(&row_state.component_id)
                .unwrap_or(&row_state.component_id);
            content = content.push(
                row![
                    text(format!("{}.", index + 1)).size(10).width(Length::Fixed(24.0)),
                    text(label).size(10).width(Length::Fill),
                    text(format!("{:.1}", row_output.a1a3))
                        .size(10)
                        .width(Length::Fixed(70.0)),
                    text(format!("{:.1}", row_output.a4))
                        .size(10)
                        .width(Length::Fixed(60.0)),
                    text(format!("{:.1}", row_output.total()))
                        .size(10)
                        .width(Length::Fixed(70.0)),
                ]
                .spacing(4),
            );
        }
    }

    let panel = container(scrollable(content.padding(8)))
        .width(Length::FillPortion(38))
        .style(container::bordered_box)
        .padding(5);

    panel.into()
}
