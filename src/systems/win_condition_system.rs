// src/systems/win_condition_system.rs

use log::info;

use super::System;
use crate::components::game_status::GameStatus;
use crate::error::Result;
use crate::game::GameState;
use crate::logic::rules::check_win_condition;

/// ゲームの勝利条件をチェックするシステムだよ！🏆
///
/// 組札が全部揃っていたら、ゲーム状態を `Won` にする。
#[derive(Debug, Default, Clone, Copy)]
pub struct WinConditionSystem;

impl System for WinConditionSystem {
    fn run(&mut self, state: &mut GameState) -> Result<()> {
        if state.status() != GameStatus::Playing {
            return Ok(());
        }
        if check_win_condition(state.board().foundation_sizes()) {
            info!("WinConditionSystem: 勝利条件達成！🏆");
            state.set_status(GameStatus::Won);
        }
        Ok(())
    }
}
