pub mod export;
pub mod parse;
pub mod setup;
pub mod ui;
