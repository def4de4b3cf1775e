// src/components/mod.rs

// ゲームのデータ部品をまとめるモジュールだよ！
pub mod card;
pub mod dragging_info;
pub mod game_status;
pub mod position;
pub mod stack;

// よく使う型はここから直接使えるようにしておく！
pub use card::{Card, CardColor, Rank, Suit};
pub use dragging_info::DraggingInfo;
pub use game_status::GameStatus;
pub use position::{Position, Rect};
pub use stack::{Stack, StackType};
