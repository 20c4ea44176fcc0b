use comfy_table::presets::UTF8_NO_BORDERS;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use itertools::Itertools;

use crate::chance::chance_table;
use crate::status::Status;
use crate::util::{Count, Probability, Result};

/// Formats a probability as a percentage.
///
/// Without a precision the shortest round-tripping form of the `f64` is
/// printed.
#[must_use]
pub fn percent(p: Probability, precision: Option<usize>) -> String {
    let value = p * 100.0;
    match precision {
        Some(precision) => format!("{value:.precision$}%"),
        None => format!("{value}%"),
    }
}

/// Chance of at least `k` successes for every `k` the pool can roll.
pub fn chance_report(dice: Count, status: Status, precision: Option<usize>) -> Result<String> {
    let chances = chance_table(dice, status)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_NO_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Successes"), Cell::new("Chance")]);
    for (k, p) in chances.into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("{k}+")),
            Cell::new(percent(p, precision)).set_alignment(CellAlignment::Right),
        ]);
    }

    let faces = status.success_faces().join(", ");
    Ok(format!(
        "Dice: {dice} | Status: {status} (succeeds on {faces})\n\n{table}\n"
    ))
}
