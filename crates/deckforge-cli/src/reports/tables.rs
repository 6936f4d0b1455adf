use super::card_label;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use deckforge_core::catalog::CardCatalog;
use deckforge_core::model::CardId;
use deckforge_core::ranker::RankedDeck;
use deckforge_core::stats::{AffinityKind, CorpusStatistics};
use deckforge_core::FitnessDetails;
use std::cmp::Ordering;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn detail_cells(d: &FitnessDetails) -> Vec<Cell> {
    vec![
        Cell::new(format!("{:.3}", d.total)).fg(Color::Cyan),
        Cell::new(format!("{:.1}", d.frequency)),
        Cell::new(format!("{:.3}", d.leader)),
        Cell::new(format!("{:.3}", d.stratagem)),
        Cell::new(format!("{:.3}", d.synergy)).fg(Color::Green),
        Cell::new(d.card_count),
    ]
}

pub fn scoring(results: &[(String, FitnessDetails)]) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Deck").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Freq"),
        Cell::new("Leader"),
        Cell::new("Strat"),
        Cell::new("Synergy").fg(Color::Green),
        Cell::new("Cards"),
    ]);
    align_right(&mut table, 1..=6);

    for (name, d) in results {
        let mut row = vec![Cell::new(name).add_attribute(Attribute::Bold)];
        row.extend(detail_cells(d));
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn ranking(ranked: &[RankedDeck]) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Deck").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Freq"),
        Cell::new("Leader"),
        Cell::new("Strat"),
        Cell::new("Synergy").fg(Color::Green),
        Cell::new("Cards"),
        Cell::new("Rejected").fg(Color::Red),
    ]);
    align_right(&mut table, 2..=7);

    let mut position = 0;
    for r in ranked {
        let mut row = Vec::with_capacity(9);
        match &r.details {
            Some(d) => {
                position += 1;
                row.push(Cell::new(position));
                row.push(Cell::new(&r.name).add_attribute(Attribute::Bold));
                row.extend(detail_cells(d));
                row.push(Cell::new(""));
            }
            None => {
                row.push(Cell::new("-"));
                row.push(Cell::new(&r.name));
                row.extend((0..6).map(|_| Cell::new("")));
                row.push(Cell::new(r.rejection.as_deref().unwrap_or("")).fg(Color::Red));
            }
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn occurrences(stats: &CorpusStatistics, catalog: &CardCatalog, top: usize) {
    let mut rows: Vec<(CardId, u64)> = stats.occurrences.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Card").add_attribute(Attribute::Bold),
        Cell::new("Id"),
        Cell::new("Copies"),
        Cell::new("Popularity").fg(Color::Cyan),
    ]);
    align_right(&mut table, 1..=3);

    for (id, count) in rows.into_iter().take(top) {
        table.add_row(vec![
            Cell::new(card_label(catalog, id)),
            Cell::new(id),
            Cell::new(count),
            Cell::new(format!("{:.3}", stats.normalized.get(id))).fg(Color::Cyan),
        ]);
    }
    println!("\nMost played cards\n{}", table);
}

pub fn synergies(stats: &CorpusStatistics, catalog: &CardCatalog, top: usize) {
    let mut rows: Vec<((CardId, CardId), f64)> = stats.cooccurrence.iter().collect();
    rows.sort_by(|a, b| match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        other => other,
    });

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Card A").add_attribute(Attribute::Bold),
        Cell::new("Card B").add_attribute(Attribute::Bold),
        Cell::new("Synergy").fg(Color::Green),
    ]);
    align_right(&mut table, 2..=2);

    for ((a, b), value) in rows.into_iter().take(top) {
        table.add_row(vec![
            Cell::new(card_label(catalog, a)),
            Cell::new(card_label(catalog, b)),
            Cell::new(format!("{:.3}", value)).fg(Color::Green),
        ]);
    }
    println!("\nStrongest pairs\n{}", table);
}

pub fn card(id: CardId, stats: &CorpusStatistics, catalog: &CardCatalog, top: usize) {
    println!(
        "\n{} (#{}): {} copies, popularity {:.3}",
        card_label(catalog, id),
        id,
        stats.occurrences.get(id),
        stats.normalized.get(id)
    );

    let mut partners = new_table();
    partners.add_row(vec![
        Cell::new("Partner").add_attribute(Attribute::Bold),
        Cell::new("Synergy").fg(Color::Green),
    ]);
    align_right(&mut partners, 1..=1);
    for (other, value) in stats.cooccurrence.partners(id).into_iter().take(top) {
        partners.add_row(vec![
            Cell::new(card_label(catalog, other)),
            Cell::new(format!("{:.3}", value)).fg(Color::Green),
        ]);
    }
    println!("\nSynergy partners\n{}", partners);

    for kind in [AffinityKind::Leader, AffinityKind::Stratagem] {
        let Some(dist) = stats.affinity(kind).distribution(id) else {
            continue;
        };
        let mut rows: Vec<(&String, &f64)> = dist.iter().collect();
        rows.sort_by(|a, b| b.1.total_cmp(a.1).then(a.0.cmp(b.0)));

        let mut table = new_table();
        table.add_row(vec![
            Cell::new(kind.to_string()).add_attribute(Attribute::Bold),
            Cell::new("Share").fg(Color::Cyan),
        ]);
        align_right(&mut table, 1..=1);
        for (category, share) in rows.into_iter().take(top) {
            table.add_row(vec![
                Cell::new(category),
                Cell::new(format!("{:.1}%", share * 100.0)).fg(Color::Cyan),
            ]);
        }
        println!("\n{}", table);
    }
}
