// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//!
//! ここの関数は全部「一番上のカード (無ければ None)」と「置きたいカード」だけを見る純粋な判定で、
//! スタックの中身を変えたりはしないよ。

pub mod common;
pub mod foundation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;


// 各モジュールから公開したい関数をここで再エクスポート！
pub use common::*;
pub use foundation::*;
pub use stock_waste::*;
pub use tableau::*;
pub use win_condition::*;
