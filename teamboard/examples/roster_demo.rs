//! Seed a board in a temporary directory, shuffle some cards around and
//! print the grouped view.
//!
//! ```bash
//! cargo run --example roster_demo
//! ```

use teamboard::{CardBox, CategoryId, ColumnId, FileStorage, Result, TeamBoard};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let dir = std::env::temp_dir().join("teamboard-demo");
    let mut board = TeamBoard::open(Box::new(FileStorage::new(&dir)));

    if board.store().iter().next().is_none() {
        board.import_roster_text(
            "username,role\n\
             Ashe,vanguard\n\
             Bao,heals\n\
             Cyra,99\n\
             Dain,swords\n\
             Elu,mystic",
        );
    }

    let team1 = ColumnId::from_string("team1");
    let pool_ids: Vec<_> = board
        .store()
        .cards_in(&ColumnId::pool())
        .iter()
        .map(|card| card.id.clone())
        .collect();
    for id in pool_ids.iter().take(3) {
        board.move_card_to_end(id, &team1)?;
    }

    // Drop the last mover into the tank section, above everyone already
    // there, the way a drag release would
    if let Some(id) = pool_ids.get(2) {
        let boxes = [CardBox::new(100.0, 40.0), CardBox::new(150.0, 40.0)];
        board.drop_at(id, &team1, Some(&CategoryId::from_string("tank")), &boxes, 0.0)?;
    }

    for team in board.visible_teams() {
        println!("{} ({})", team.name, board.store().count_in(&team.id));
    }
    if let Some(groups) = board.category_groups(&team1) {
        for group in groups {
            if group.cards.is_empty() {
                continue;
            }
            println!("  [{}]", group.name);
            for card in group.cards {
                println!("    {} - {}", card.name, card.jobs.join(", "));
            }
        }
    }
    println!("pool: {} cards", board.store().count_in(&ColumnId::pool()));
    println!("state dir: {}", dir.display());

    Ok(())
}
