// src/logic/mod.rs
//! ゲームのルールや山札など、画面に依存しないロジックをまとめるよ。

pub mod auto_move;
pub mod deck;
pub mod rules;
