// src/components/game_status.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆
///
/// ひとりプレイのクロンダイクなので、遊んでる途中か、クリアしたかの2つだけ。
/// 手詰まり判定はしないよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    #[default]
    Playing,
    /// 4つの組札が全部 King まで揃った！🎉
    Won,
}
