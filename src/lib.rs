//! 写真採点・CSV出力ツール（CLI）

pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod output;
pub mod render;
pub mod replay;
pub mod scanner;
