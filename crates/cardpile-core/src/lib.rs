//! # cardpile Core Library
//!
//! Headless flashcard study engine. A pile of prompt/answer cards is worked
//! through top-down under a countdown; dragging the top card far enough left
//! or right judges it and takes it off the pile.
//!
//! ## Architecture
//!
//! - **Study session**: a state machine over a [`Deck`] and a
//!   [`SessionTimer`]. It owns no clock and no thread; the host feeds it
//!   ticks, classified gestures and foreground changes, one at a time.
//! - **Gestures**: pure classification of drag displacement into an
//!   [`Outcome`]. Rendering and pointer tracking stay in the host.
//! - **Storage**: the card list as a JSON blob in a key-value store
//!   (SQLite by default) plus TOML configuration.
//!
//! ## Key Components
//!
//! - [`StudySession`]: phase machine (Active, Expired, Exhausted)
//! - [`DeckEditor`]: add/remove cards with save-on-change
//! - [`CardStore`]: load/save hook over any [`BlobStore`]
//! - [`Config`]: application configuration management

pub mod card;
pub mod deck;
pub mod editor;
pub mod error;
pub mod events;
pub mod gesture;
pub mod session;
pub mod storage;
pub mod timer;

pub use card::{Card, CardId};
pub use deck::Deck;
pub use editor::DeckEditor;
pub use error::{ConfigError, CoreError, DatabaseError, Result, ValidationError};
pub use events::Event;
pub use gesture::{classify, Drag, Gesture, Outcome, Thresholds};
pub use session::{Input, Phase, SessionSnapshot, StudySession, Tally};
pub use storage::{BlobStore, CardStore, Config, Database, MemoryStore};
pub use timer::SessionTimer;
