// src/logic/deck.rs

use itertools::iproduct;
use log::debug;
use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS, DEFAULT_BACK_STYLE};
use crate::error::{GameError, Result};

/// 1ゲーム分の山札 (52枚) だよ！🃏
///
/// `cards` の最後が「一番上」で、`draw` はそこから1枚ずつ取り出す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

/// 標準的な52枚のカードを、スート×ランクの順番で生成する関数だよ！
/// 生成された時点では、すべてのカードは裏向き。
pub fn create_standard_deck(back_style: &str) -> Vec<Card> {
    iproduct!(ALL_SUITS, ALL_RANKS)
        .map(|(suit, rank)| Card::with_back_style(suit, rank, back_style))
        .collect()
}

impl Deck {
    /// `thread_rng` でシャッフルした新しい山札を作る。
    pub fn shuffled_new() -> Self {
        Self::shuffled_with(&mut thread_rng(), DEFAULT_BACK_STYLE)
    }

    /// 乱数生成器を指定してシャッフルした山札を作る。テストではシード付きの `StdRng` を渡すよ。
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R, back_style: &str) -> Self {
        let mut cards = create_standard_deck(back_style);
        cards.shuffle(rng);
        debug!("Deck: shuffled {} cards", cards.len());
        Self { cards }
    }

    /// 一番上のカードを1枚引く。空なら `GameError::EmptyDeck`。
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 残りのカードを一番下から順に全部取り出す。
    pub fn drain_remaining(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}
