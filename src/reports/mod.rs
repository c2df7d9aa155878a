use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use stringforge::genome::{Alphabet, Chromosome, KnownAlphabet};
use stringforge::trace::EvaluationTrace;

/// Prints every `every`-th generation plus the first and last.
pub fn print_trace_table(trace: &EvaluationTrace, every: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Gen").add_attribute(Attribute::Bold),
        Cell::new("Best").add_attribute(Attribute::Bold),
        Cell::new("Cost").fg(Color::Cyan),
    ]);
    if let Some(col) = table.column_mut(0) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    let last = trace.len().saturating_sub(1);
    for (i, record) in trace.iter().enumerate() {
        if i != 0 && i != last && record.generation % every.max(1) != 0 {
            continue;
        }
        let cost_cell = if record.cost == 0 {
            Cell::new(record.cost).fg(Color::Green)
        } else {
            Cell::new(record.cost)
        };
        table.add_row(vec![
            Cell::new(record.generation),
            Cell::new(&record.best),
            cost_cell,
        ]);
    }
    println!("\n{}", table);
}

pub fn print_encoding_table(alphabet: &Alphabet, text: &str, chromosome: &Chromosome) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["#", "Symbol", "Index", "Gene"]);

    for (i, (symbol, gene)) in text.chars().zip(chromosome.genes()).enumerate() {
        let index = alphabet
            .position(symbol)
            .map_or_else(|| "?".to_string(), |p| p.to_string());
        table.add_row(vec![
            Cell::new(i),
            Cell::new(format!("{:?}", symbol)).set_alignment(CellAlignment::Center),
            Cell::new(index).set_alignment(CellAlignment::Right),
            Cell::new(gene.to_string()),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_alphabet_table(rows: &[(KnownAlphabet, Alphabet, Alphabet)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Preset").add_attribute(Attribute::Bold),
        Cell::new("Size"),
        Cell::new("Fixed Bits"),
        Cell::new("Unused Codes").fg(Color::Red),
        Cell::new("Derived Bits"),
        Cell::new("Unused Codes").fg(Color::Red),
        Cell::new("Symbols"),
    ]);

    for (preset, fixed, derived) in rows {
        table.add_row(vec![
            Cell::new(preset).add_attribute(Attribute::Bold),
            Cell::new(fixed.len()),
            Cell::new(fixed.bit_width()),
            Cell::new(fixed.unassigned_codes()),
            Cell::new(derived.bit_width()),
            Cell::new(derived.unassigned_codes()),
            Cell::new(fixed.to_string()),
        ]);
    }
    println!("\n{}", table);
}
