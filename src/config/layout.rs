//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! カードの大きさ、スタックの座標、重なり具合、スナップ距離など。
//! ここの値は `LayoutConfig::default()` の初期値として使われるよ。

use serde::{Deserialize, Serialize};

pub const CARD_WIDTH: f32 = 80.0; // カード画像の幅
pub const CARD_HEIGHT: f32 = 120.0; // カード画像の高さ
pub const CARD_SPACING_X: f32 = 20.0; // 列と列の間の水平方向の隙間

// --- 各エリアの開始位置 ---
pub const BOARD_START_X: f32 = 100.0; // 一番左の列 (山札と場札0) の X 座標
pub const TOP_ROW_Y: f32 = 50.0; // 山札・捨て札・組札の Y 座標
pub const TABLEAU_START_Y: f32 = 200.0; // 場札の一番上のカードの Y 座標

// 上の段は場札と同じ列の位置に並べるよ。山札は列0、捨て札は列1、組札は列3〜6。
pub const STOCK_COLUMN: u8 = 0;
pub const WASTE_COLUMN: u8 = 1;
pub const FOUNDATION_FIRST_COLUMN: u8 = 3;

pub const TABLEAU_OVERLAP_FRACTION: f32 = 0.25; // 場札の重なり: カードの高さの 1/4 ずつずらす
pub const SNAP_DISTANCE: f32 = 50.0; // ドロップ先に吸い付く距離 (px)

pub const BOARD_WIDTH: f32 = 800.0;
pub const BOARD_HEIGHT: f32 = 600.0;
pub const BACKGROUND_COLOR: &str = "#0b6623";

/// レイアウトの調整値をまとめた構造体。
///
/// 重なり具合とスナップ距離は見た目の調整用なので、JS から JSON で上書きできるようにしてあるよ。
/// 省略したフィールドは上の定数が使われる (`#[serde(default)]`)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub card_width: f32,
    pub card_height: f32,
    pub column_gap: f32,
    pub start_x: f32,
    pub top_row_y: f32,
    pub tableau_start_y: f32,
    pub overlap_fraction: f32,
    pub snap_distance: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            column_gap: CARD_SPACING_X,
            start_x: BOARD_START_X,
            top_row_y: TOP_ROW_Y,
            tableau_start_y: TABLEAU_START_Y,
            overlap_fraction: TABLEAU_OVERLAP_FRACTION,
            snap_distance: SNAP_DISTANCE,
        }
    }
}

impl LayoutConfig {
    /// 列 `column` の左端の X 座標。
    pub fn column_x(&self, column: u8) -> f32 {
        self.start_x + f32::from(column) * (self.card_width + self.column_gap)
    }

    /// 場札でカード1枚ごとにずらす Y の量。
    pub fn tableau_step(&self) -> f32 {
        self.card_height * self.overlap_fraction
    }
}
