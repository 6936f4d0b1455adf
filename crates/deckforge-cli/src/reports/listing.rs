use super::card_label;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use deckforge_core::catalog::CardCatalog;
use deckforge_core::model::DeckRecord;

pub fn print_deck(record: &DeckRecord, catalog: &CardCatalog) {
    println!("\n{}", record.leader);
    println!("{}", record.stratagem);

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Card", "Count"]);

    for entry in &record.cards {
        table.add_row(vec![
            Cell::new(card_label(catalog, entry.id)),
            Cell::new(entry.count).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
    println!("Total cards: {}", record.total_copies());
}
