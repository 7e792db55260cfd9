//! # SBCC CLI Application
//!
//! Terminal interface for quick embodied-carbon estimates. Prompts for the
//! project metadata and material rows on stdin, prints the derived results,
//! and can write the JSON export file.

use std::io::{self, BufRead, Write};
use std::path::Path;

use sbcc_core::calculator::{Calculator, MetadataEdit};
use sbcc_core::cascade::apply_component_cascade;
use sbcc_core::catalogue::{
    Catalogue, DEFAULT_COUNTRY_ID, DEFAULT_MARINE_VEHICLE_ID, DEFAULT_ROAD_VEHICLE_ID,
};
use sbcc_core::export::{write_output, EXPORT_FILE_NAME};
use sbcc_core::row::RawRow;

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn prompt_or_default(prompt: &str, default: &str) -> String {
    let line = prompt_line(prompt);
    if line.is_empty() {
        default.to_string()
    } else {
        line
    }
}

/// Prompt for a 1-based selection out of `len` options.
fn prompt_index(prompt: &str, len: usize, default: usize) -> usize {
    prompt_line(prompt)
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|&i| i < len)
        .unwrap_or(default)
}

fn prompt_yes(prompt: &str) -> bool {
    matches!(prompt_line(prompt).to_lowercase().as_str(), "y" | "yes")
}

/// Show a numbered list of catalogue ids and return the chosen one.
///
/// Empty or unparseable input takes `default_id` (or the first entry when
/// the default is not in the list).
fn choose_id(
    label: &str,
    ids: &[String],
    display: impl Fn(&str) -> String,
    default_id: &str,
) -> String {
    if ids.is_empty() {
        return String::new();
    }

    println!("{}:", label);
    for (i, id) in ids.iter().enumerate() {
        println!("  {}. {}", i + 1, display(id));
    }

    let default = ids.iter().position(|id| id == default_id).unwrap_or(0);
    let pick = prompt_index(&format!("Select [{}]: ", default + 1), ids.len(), default);
    ids[pick].clone()
}

fn main() {
    println!("SBCC CLI - Embodied Carbon & Green Mark Estimator");
    println!("=================================================");
    println!();

    let mut calc = Calculator::new(Catalogue::builtin());

    let raw_gfa = prompt_or_default("Gross floor area in m2 [1000]: ", "1000");
    if let Err(e) = calc.set_metadata(MetadataEdit::Gfa(raw_gfa)) {
        println!("  {} (keeping {} m2)", e, calc.project().gfa);
    }

    println!();
    println!("Benchmark building type:");
    let reference_count = calc.catalogue().reference_entries().len();
    for (i, entry) in calc.catalogue().reference_entries().iter().enumerate() {
        println!(
            "  {}. {} ({:.0} kgCO2e/m2)",
            i + 1,
            entry.building_type,
            entry.reference_value
        );
    }
    let pick = prompt_index("Select [1]: ", reference_count, 0);
    let reference_value = calc
        .catalogue()
        .reference_entries()
        .get(pick)
        .map(|entry| entry.reference_value);
    if let Some(value) = reference_value {
        if let Err(e) = calc.set_metadata(MetadataEdit::ReferenceValue(value)) {
            println!("  {}", e);
        }
    }

    println!();
    print_rows(&calc);
    println!();

    while prompt_yes("Add another row? [y/N]: ") {
        add_row(&mut calc);
        println!();
        print_rows(&calc);
        println!();
    }

    print_results(&calc);

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(calc.output()) {
        println!("{}", json);
    }

    println!();
    if prompt_yes(&format!("Write {}? [y/N]: ", EXPORT_FILE_NAME)) {
        match write_output(calc.output(), Path::new(EXPORT_FILE_NAME)) {
            Ok(()) => println!("Wrote {}", EXPORT_FILE_NAME),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

/// Prompt for one row until it validates or the user gives up.
fn add_row(calc: &mut Calculator) {
    loop {
        let raw = prompt_row(calc);

        match raw.validate() {
            Ok(mut row) => {
                apply_component_cascade(calc.catalogue(), &mut row);
                match calc.append(row) {
                    Ok(index) => {
                        println!("Added row {}.", index + 1);
                        return;
                    }
                    Err(e) => println!("Error: {}", e),
                }
            }
            Err(errors) => {
                println!("Row rejected:");
                for e in &errors {
                    println!("  - {}", e);
                }
            }
        }

        if !prompt_yes("Try again? [y/N]: ") {
            return;
        }
    }
}

/// Collect the raw field values for one row.
///
/// The category is left empty; the component cascade assigns it after
/// validation, the same as every other surface.
fn prompt_row(calc: &Calculator) -> RawRow {
    let catalogue = calc.catalogue();

    println!();
    let component_id = choose_id(
        "Component",
        &catalogue.component_ids(),
        |id| catalogue.component_label(id).unwrap_or(id).to_string(),
        "",
    );
    let country_id = choose_id(
        "Origin country",
        &catalogue.country_ids(),
        |id| id.to_string(),
        DEFAULT_COUNTRY_ID,
    );
    let quantity = prompt_or_default("Quantity [20]: ", "20");
    let units = prompt_or_default("Units (tonne/kg) [tonne]: ", "tonne");
    let marine_vehicle_id = choose_id(
        "Marine vehicle",
        &catalogue.marine_vehicle_ids(),
        |id| catalogue.vehicle_label(id).unwrap_or(id).to_string(),
        DEFAULT_MARINE_VEHICLE_ID,
    );
    let manual_marine_distance =
        prompt_line("Sea distance override in km (blank = port distance): ");
    let international_road_vehicle_id = choose_id(
        "International road vehicle",
        &catalogue.road_vehicle_ids(),
        |id| catalogue.vehicle_label(id).unwrap_or(id).to_string(),
        DEFAULT_ROAD_VEHICLE_ID,
    );
    let international_road_distance =
        prompt_or_default("International road distance in km [0]: ", "0");
    let local_road_vehicle_id = choose_id(
        "Local road vehicle",
        &catalogue.road_vehicle_ids(),
        |id| catalogue.vehicle_label(id).unwrap_or(id).to_string(),
        DEFAULT_ROAD_VEHICLE_ID,
    );
    let local_road_distance = prompt_or_default("Local road distance in km [50]: ", "50");

    RawRow {
        component_id,
        green_mark_category: String::new(),
        country_id,
        quantity,
        units,
        marine_vehicle_id,
        manual_marine_distance,
        international_road_vehicle_id,
        local_road_vehicle_id,
        international_road_distance,
        local_road_distance,
    }
}

fn print_rows(calc: &Calculator) {
    let rows = &calc.project().rows;

    println!("Current rows:");
    if rows.is_empty() {
        println!("  (none)");
        return;
    }

    for (i, row) in rows.iter().enumerate() {
        let label = calc
            .catalogue()
            .component_label(&row.component_id)
            .unwrap_or(&row.component_id);
        let category = row
            .green_mark_category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {}. {} [{}] {} {} from {}",
            i + 1,
            label,
            category,
            row.quantity,
            row.units,
            row.country_id
        );
    }
}

fn print_results(calc: &Calculator) {
    let output = calc.output();

    println!();
    println!("═══════════════════════════════════════");
    println!("  EMBODIED CARBON RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    for (i, row) in output.rows.iter().enumerate() {
        println!("Row {}: A1-A3 = {:.1}, A4 = {:.1}", i + 1, row.a1a3, row.a4);
    }
    println!();
    println!("Total:        {:.1} kgCO2e", output.total_emissions);
    println!("Per GFA:      {:.2} kgCO2e/m2", output.embodied_carbon_per_gfa);
    println!(
        "vs Reference: {:.1}% reduction",
        output.embodied_carbon_per_gfa_compared_to_reference
    );
    println!("Green Mark:   {} / 2 points", output.green_mark_score);
    println!("═══════════════════════════════════════");
}
