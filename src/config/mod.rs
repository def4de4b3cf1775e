// src/config/mod.rs
//! ゲームの設定まわりをまとめるモジュールだよ！⚙️

pub mod layout;

use serde::{Deserialize, Serialize};

use crate::components::card::DEFAULT_BACK_STYLE;
use crate::error::{GameError, Result};
pub use layout::LayoutConfig;

/// 空いた場札の列に何を置けるか、のハウスルール。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptyTableauRule {
    /// 普通のクロンダイク: King だけ置ける。
    #[default]
    KingOnly,
    /// ゆるいルール: どのカードでも置ける。
    AnyCard,
}

/// ゲーム全体の設定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub layout: LayoutConfig,
    pub empty_tableau_rule: EmptyTableauRule,
    /// カード裏面の画像名 (`assets/back_side/{back_style}.png`)。
    pub back_style: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            empty_tableau_rule: EmptyTableauRule::default(),
            back_style: DEFAULT_BACK_STYLE.to_string(),
        }
    }
}

impl GameConfig {
    /// JS から渡された JSON 文字列を読む。足りないフィールドはデフォルト値になるよ。
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))
    }
}
