//! Card list editing commands for CLI.

use clap::Subcommand;
use cardpile_core::{CardStore, Config, Database, DeckEditor, ValidationError};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum CardsAction {
    /// Add a card to the front of the list
    Add {
        /// Question side
        prompt: String,
        /// Answer side
        answer: String,
    },
    /// List saved cards
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a card by id or list position
    Remove {
        /// Card id, or zero-based position as shown by `list`
        target: String,
    },
    /// Remove every card
    Clear,
}

pub fn run(action: CardsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = Database::open()?;
    let mut editor = DeckEditor::open(CardStore::with_key(&db, config.storage.cards_key));

    match action {
        CardsAction::Add { prompt, answer } => {
            let card = editor.add_card(&prompt, &answer)?;
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
        CardsAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(editor.cards())?);
            } else if editor.cards().is_empty() {
                println!("no cards");
            } else {
                for (i, card) in editor.cards().iter().enumerate() {
                    println!("{i}\t{}\t{}\t{}", card.id(), card.prompt(), card.answer());
                }
            }
        }
        CardsAction::Remove { target } => {
            let removed: Vec<_> = if let Ok(id) = Uuid::parse_str(&target) {
                editor.remove(id)?.into_iter().collect()
            } else if let Ok(index) = target.parse::<usize>() {
                editor.remove_at(&[index])?
            } else {
                return Err(ValidationError::InvalidId(target).into());
            };
            if removed.is_empty() {
                println!("no such card");
            } else {
                println!("{}", serde_json::to_string_pretty(&removed)?);
            }
        }
        CardsAction::Clear => {
            editor.clear()?;
            println!("cleared");
        }
    }
    Ok(())
}
