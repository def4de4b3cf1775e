// src/systems/mod.rs
//! ゲームのロジックを「システム」単位でまとめるモジュールだよ！
//!
//! システムはゲーム状態 (`GameState`) を受け取って、決まった仕事をひとつだけするんだ。
//! 配る係、勝ち判定する係、みたいな感じ！

pub mod deal_system;
pub mod win_condition_system;

use crate::error::Result;
use crate::game::GameState;

/// System（システム）トレイトだよ！
///
/// `run` はゲーム状態を読んだり書き換えたりする。
/// 途中で「本来起きないはず」のことが起きたら `Err` で返すよ。
pub trait System {
    fn run(&mut self, state: &mut GameState) -> Result<()>;
}

pub use deal_system::DealInitialCardsSystem;
pub use win_condition_system::WinConditionSystem;
