//! Buzzword bingo for the terminal
//!
//! A card of random buzzwords is dealt from a word list; the player moves a
//! highlight with the arrow keys, marks words, and claims the win on the
//! "confirm win" cell once a row, column or diagonal is complete.

pub mod bingo_rand;
pub mod cli;
pub mod config;
pub mod display_headless;
pub mod display_logging;
pub mod display_manager;
pub mod display_ratatui;
pub mod display_trait;
pub mod error;
pub mod grid;
pub mod input;
pub mod layout;
pub mod session;
pub mod word_list;
