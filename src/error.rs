// src/error.rs
//! ゲーム全体で使うエラー型だよ！
//!
//! 山札やスタックが空なのに取り出そうとした、みたいな「本来起きないはず」のケースを表すよ。
//! 置けない場所へのドロップはエラーじゃなくて、ただのキャンセル扱いなのでここには無いよ。

use thiserror::Error;

use crate::components::stack::StackType;

/// このクレートのエラー型。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// 空の山札 (Deck) からカードを引こうとした。
    #[error("deck is empty")]
    EmptyDeck,
    /// 空のスタックから一番上のカードを取ろうとした。
    #[error("stack {0:?} is empty")]
    EmptyPile(StackType),
    /// 盤面に存在しないスタックを指定した (例: `Tableau(9)`)。
    #[error("unknown stack {0:?}")]
    UnknownStack(StackType),
    /// 移動元と移動先が同じスタックだった。
    #[error("cannot move cards from {0:?} onto itself")]
    SameStack(StackType),
    /// スタックの範囲外の位置からカードの列を切り出そうとした。
    #[error("index {index} is out of range for {stack:?} holding {len} cards")]
    InvalidRunIndex {
        stack: StackType,
        index: usize,
        len: usize,
    },
    /// JS から渡された設定 JSON が読めなかった。
    #[error("invalid config: {0}")]
    Config(String),
}

/// `Result<T, GameError>` の短縮形だよ。
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(GameError::EmptyDeck.to_string(), "deck is empty");
        assert_eq!(
            GameError::EmptyPile(StackType::Waste).to_string(),
            "stack Waste is empty"
        );
        let err = GameError::InvalidRunIndex { stack: StackType::Tableau(3), index: 9, len: 2 };
        assert_eq!(err.to_string(), "index 9 is out of range for Tableau(3) holding 2 cards");
    }
}
