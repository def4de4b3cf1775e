// src/components/stack.rs

use serde::{Deserialize, Serialize};
use std::slice;

use crate::components::card::Card;
use crate::config::EmptyTableauRule;
use crate::error::{GameError, Result};
use crate::logic::rules;

/// 場札の列数。
pub const TABLEAU_COUNT: u8 = 7;
/// 組札の数。
pub const FOUNDATION_COUNT: u8 = 4;

/// カードが存在する場所の種類を示す Enum だよ。
/// これを使って、カードが山札にあるのか、場札の何列目にあるのか、などを区別するよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation) だよ。スートごとに4つある。
    /// 0: Heart, 1: Diamond, 2: Club, 3: Spade の約束で固定！
    Foundation(u8),
    /// 山札 (Stock) だよ。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste) だよ。
    Waste,
}

impl StackType {
    /// 全スタックを決まった順番 (場札 0..6, 組札 0..3, 山札, 捨て札) で返すよ。
    /// スナップ先の同点判定はこの順番で決める！
    pub fn scan_order() -> Vec<StackType> {
        (0..TABLEAU_COUNT)
            .map(StackType::Tableau)
            .chain((0..FOUNDATION_COUNT).map(StackType::Foundation))
            .chain([StackType::Stock, StackType::Waste])
            .collect()
    }
}

/// カードの山 (パイル) だよ！🃏🃏🃏
///
/// 場札・組札・山札・捨て札は全部これで表すよ。違いは `stack_type` だけで、
/// 「このカード置ける？」の判定は `stack_type` ごとのルールに振り分ける。
/// `cards` の最後が一番上 (いちばん手前) のカードね。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    stack_type: StackType,
    cards: Vec<Card>,
}

impl Stack {
    /// 空のスタックを作る。
    pub fn new(stack_type: StackType) -> Self {
        Self { stack_type, cards: Vec::new() }
    }

    pub fn stack_type(&self) -> StackType {
        self.stack_type
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上にカードを積む。
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// カードの列をまとめて積む。順番はそのまま！
    pub fn extend_run(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    /// 一番上のカードを取り出す。空なら `GameError::EmptyPile`。
    pub fn pop(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(GameError::EmptyPile(self.stack_type))
    }

    /// 一番上のカードを覗き見る (取り出さない)。
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub(crate) fn peek_top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// `index` 番目から上のカードを全部取り出す。順番は保ったままだよ。
    pub fn split_off(&mut self, index: usize) -> Result<Vec<Card>> {
        if index >= self.cards.len() {
            return Err(GameError::InvalidRunIndex {
                stack: self.stack_type,
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.split_off(index))
    }

    /// このカード1枚を今すぐ上に置けるか判定する。
    pub fn can_accept(&self, card: &Card, empty_rule: EmptyTableauRule) -> bool {
        self.can_accept_run(slice::from_ref(card), empty_rule)
    }

    /// カードの列 (先頭がドラッグしたカード) をまとめて置けるか判定する。
    ///
    /// - 場札: 先頭のカードが置けて、列そのものが正しく組まれていること
    /// - 組札: 1枚だけのときしか受け付けない
    /// - 山札・捨て札: ドロップ先にはならない
    pub fn can_accept_run(&self, run: &[Card], empty_rule: EmptyTableauRule) -> bool {
        let Some(head) = run.first() else {
            return false;
        };
        match self.stack_type {
            StackType::Tableau(_) => {
                rules::can_move_to_tableau(self.peek_top(), head, empty_rule)
                    && rules::is_valid_tableau_run(run)
            }
            StackType::Foundation(index) => {
                run.len() == 1 && rules::can_move_to_foundation(index, self.peek_top(), head)
            }
            StackType::Stock | StackType::Waste => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn face_up(suit: Suit, rank: Rank) -> Card {
        let mut card = Card::new(suit, rank);
        card.flip();
        card
    }

    #[test]
    fn push_pop_peek() {
        let mut stack = Stack::new(StackType::Waste);
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(GameError::EmptyPile(StackType::Waste)));
        assert!(stack.peek_top().is_none());

        stack.push(Card::new(Suit::Heart, Rank::Ace));
        stack.push(Card::new(Suit::Club, Rank::Two));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek_top().map(Card::rank), Some(Rank::Two));

        let top = stack.pop().expect("カードがあるはず");
        assert_eq!(top.rank(), Rank::Two);
        assert_eq!(stack.len(), 1);
        println!("Stack の基本操作テスト、成功！👍");
    }

    #[test]
    fn split_off_keeps_order() {
        let mut stack = Stack::new(StackType::Tableau(2));
        stack.push(Card::new(Suit::Spade, Rank::King));
        stack.push(face_up(Suit::Heart, Rank::Queen));
        stack.push(face_up(Suit::Club, Rank::Jack));

        let run = stack.split_off(1).expect("範囲内のはず");
        let ranks: Vec<Rank> = run.iter().map(Card::rank).collect();
        assert_eq!(ranks, vec![Rank::Queen, Rank::Jack]);
        assert_eq!(stack.len(), 1);

        assert_eq!(
            stack.split_off(1),
            Err(GameError::InvalidRunIndex { stack: StackType::Tableau(2), index: 1, len: 1 })
        );
    }

    #[test]
    fn stock_and_waste_never_accept() {
        let ace = face_up(Suit::Heart, Rank::Ace);
        assert!(!Stack::new(StackType::Stock).can_accept(&ace, EmptyTableauRule::AnyCard));
        assert!(!Stack::new(StackType::Waste).can_accept(&ace, EmptyTableauRule::AnyCard));
        assert!(!Stack::new(StackType::Tableau(0)).can_accept_run(&[], EmptyTableauRule::AnyCard));
    }

    #[test]
    fn foundation_only_takes_single_cards() {
        let foundation = Stack::new(StackType::Foundation(0));
        let ace = face_up(Suit::Heart, Rank::Ace);
        let two = face_up(Suit::Heart, Rank::Two);
        assert!(foundation.can_accept(&ace, EmptyTableauRule::KingOnly));
        assert!(!foundation.can_accept_run(&[ace, two], EmptyTableauRule::KingOnly));
    }

    #[test]
    fn scan_order_is_stable() {
        let order = StackType::scan_order();
        assert_eq!(order.len(), 13);
        assert_eq!(order[0], StackType::Tableau(0));
        assert_eq!(order[6], StackType::Tableau(6));
        assert_eq!(order[7], StackType::Foundation(0));
        assert_eq!(order[11], StackType::Stock);
        assert_eq!(order[12], StackType::Waste);
    }
}
