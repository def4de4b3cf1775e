// src/app/mod.rs
//! マウス操作・描画・ブラウザとの橋渡しなど、GameApp まわりのロジックを役割ごとに分割して置くモジュールだよ！

pub mod console_logger;
pub mod drag_apply_handler;
pub mod drag_handler;
pub mod event_handler;
pub mod game_app;
pub mod layout_calculator;
pub mod renderer;
pub mod stock_handler;
