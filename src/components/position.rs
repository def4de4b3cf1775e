// src/components/position.rs

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// 2D 画面上の位置 (x, y) だよ。📍
///
/// 入力 (マウスの座標) もカードの描画位置も、全部この型でやりとりするよ。
/// GUI フレームワークのイベント型には依存しない！
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 2点間のユークリッド距離。スナップ判定で使うよ。
    pub fn distance_to(self, other: Position) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// カード1枚分の当たり判定用の矩形。左上 (x, y) と幅・高さ。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(origin: Position, width: f32, height: f32) -> Self {
        Self { x: origin.x, y: origin.y, width, height }
    }

    /// 点が矩形の中にあるか。右端と下端は含まないよ。
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_arithmetic() {
        let a = Position::new(100.5, -50.0);
        let b = Position::new(0.5, 10.0);
        assert_eq!(a - b, Position::new(100.0, -60.0));
        assert_eq!(a - b + b, a);
        assert_eq!(Position::new(0.0, 0.0).distance_to(Position::new(3.0, 4.0)), 5.0);
        println!("Position テスト、成功！🎉");
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(Position::new(10.0, 20.0), 80.0, 120.0);
        assert!(rect.contains(Position::new(10.0, 20.0)));
        assert!(rect.contains(Position::new(89.9, 139.9)));
        assert!(!rect.contains(Position::new(90.0, 50.0)));
        assert!(!rect.contains(Position::new(50.0, 140.0)));
        assert!(!rect.contains(Position::new(9.9, 50.0)));
    }
}
