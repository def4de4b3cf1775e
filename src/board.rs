// src/board.rs
//! 盤面 (テーブルの上) 全体を表すモジュールだよ！🃏
//!
//! 13 個のスタック (場札7 + 組札4 + 山札 + 捨て札) と、配る前の山札 (Deck) を全部ここで持つ。
//! カードはいつもどこか1か所にだけあって、移動は「取り出して別の場所に積む」だけ。
//! だから山札 + 全スタックの合計はずっと 52 枚のまま！

use crate::components::card::Card;
use crate::components::stack::{Stack, StackType, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::error::{GameError, Result};
use crate::logic::deck::Deck;

const STOCK_SLOT: usize = (TABLEAU_COUNT + FOUNDATION_COUNT) as usize;
const WASTE_SLOT: usize = STOCK_SLOT + 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// `StackType::scan_order()` と同じ順番で並んでるよ。
    stacks: Vec<Stack>,
    deck: Deck,
}

impl Board {
    /// 全スタックが空の盤面を作る。カードはまだ全部 `deck` の中。
    pub fn new(deck: Deck) -> Self {
        let stacks = StackType::scan_order().into_iter().map(Stack::new).collect();
        Self { stacks, deck }
    }

    /// スタックの種類から `stacks` の何番目かを求める。
    fn slot(stack_type: StackType) -> Option<usize> {
        match stack_type {
            StackType::Tableau(i) if i < TABLEAU_COUNT => Some(usize::from(i)),
            StackType::Foundation(i) if i < FOUNDATION_COUNT => {
                Some(usize::from(TABLEAU_COUNT + i))
            }
            StackType::Stock => Some(STOCK_SLOT),
            StackType::Waste => Some(WASTE_SLOT),
            _ => None,
        }
    }

    pub fn stack(&self, stack_type: StackType) -> Result<&Stack> {
        Self::slot(stack_type)
            .and_then(|slot| self.stacks.get(slot))
            .ok_or(GameError::UnknownStack(stack_type))
    }

    pub fn stack_mut(&mut self, stack_type: StackType) -> Result<&mut Stack> {
        Self::slot(stack_type)
            .and_then(|slot| self.stacks.get_mut(slot))
            .ok_or(GameError::UnknownStack(stack_type))
    }

    /// 全スタックを決まった順番 (場札, 組札, 山札, 捨て札) で返す。描画順もこれ。
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// 組札4つそれぞれの枚数。
    pub fn foundation_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.stacks
            .iter()
            .filter(|stack| matches!(stack.stack_type(), StackType::Foundation(_)))
            .map(Stack::len)
    }

    /// スタックに置かれている全カード (山札 Deck の中身は含まない)。
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stacks.iter().flat_map(|stack| stack.cards().iter())
    }

    /// 山札 Deck + 全スタックの合計枚数。ずっと 52 のはず。
    pub fn total_card_count(&self) -> usize {
        self.deck.len() + self.stacks.iter().map(Stack::len).sum::<usize>()
    }
}
