//! Photo Score Common Library
//!
//! CLIとWeb(WASM)で共有される採点セッションとCSV出力

pub mod controller;
pub mod display;
pub mod error;
pub mod export;
pub mod identity;
pub mod input;
pub mod keys;
pub mod list;
pub mod loader;
pub mod scores;
pub mod session;
pub mod status;
pub mod types;

pub use controller::{Outcome, ScoringController};
pub use display::{DisplayState, RefreshTicket};
pub use error::{Error, Result};
pub use export::{export_csv, CsvExport, CsvOptions};
pub use identity::IdentityGate;
pub use input::ScoreInput;
pub use keys::KeyCommand;
pub use list::ListEntry;
pub use loader::{load_image_set, SourceFile};
pub use scores::{Score, ScoreStore};
pub use session::{NavState, NextStep, ScoringSession};
pub use status::{LoadStatus, Notice};
pub use types::{ImageItem, ImageSet};
