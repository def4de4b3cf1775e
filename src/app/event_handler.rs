// src/app/event_handler.rs
//! クリック判定 (当たり判定) のロジックだよ！🖱️
//!
//! どの座標に何があるかは、いつも `layout_calculator` で毎回計算した位置で判定する。

use log::debug;

use super::layout_calculator::{calculate_card_position, card_rect, stack_base_position};
use crate::board::Board;
use crate::components::{Position, StackType};
use crate::config::LayoutConfig;

/// クリックされた要素の種類を表す Enum だよ！
/// カードがクリックされたのか、それともスタックの空きスペースがクリックされたのかを示すんだ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// カードがクリックされた場合。どのスタックの何番目か。
    Card { stack_type: StackType, index: usize },
    /// スタックの土台エリアがクリックされた場合。
    Stack(StackType),
}

/// クリックされた座標に基づいて、どのゲーム要素 (表向きカード or スタック) が
/// クリックされたかを特定する関数だよ！
///
/// 1. 表向きのカードで一番手前にあるもの
/// 2. なければスタックの土台エリア
/// 3. どっちもなければ None
pub fn find_clicked_element(board: &Board, layout: &LayoutConfig, point: Position) -> Option<ClickTarget> {
    find_topmost_face_up_card(board, layout, point)
        .or_else(|| find_clicked_stack_area(layout, point))
}

/// 座標にある表向きカードのうち、最も手前にあるものを探すヘルパー関数だよ。
///
/// 描画順 (スタックの走査順 → スタック内の順番) の逆からたどって、
/// 最初に当たった表向きカードが一番手前！ 裏向きのカードはドラッグできないので無視するよ。
pub fn find_topmost_face_up_card(
    board: &Board,
    layout: &LayoutConfig,
    point: Position,
) -> Option<ClickTarget> {
    let hit = board
        .stacks()
        .iter()
        .rev()
        .flat_map(|stack| {
            let stack_type = stack.stack_type();
            stack
                .cards()
                .iter()
                .enumerate()
                .rev()
                .map(move |(index, card)| (stack_type, index, card))
        })
        .filter(|(_, _, card)| card.is_face_up())
        .find(|&(stack_type, index, _)| {
            card_rect(calculate_card_position(stack_type, index, layout), layout).contains(point)
        });

    match hit {
        Some((stack_type, index, card)) => {
            debug!("Hit card {} at {:?}[{}]", card, stack_type, index);
            Some(ClickTarget::Card { stack_type, index })
        }
        None => None,
    }
}

/// 座標がスタックの土台エリア (カード1枚分) に入っているか判定するよ。
/// 最初に見つかったものを返す。
pub fn find_clicked_stack_area(layout: &LayoutConfig, point: Position) -> Option<ClickTarget> {
    StackType::scan_order()
        .into_iter()
        .find(|&stack_type| card_rect(stack_base_position(stack_type, layout), layout).contains(point))
        .map(ClickTarget::Stack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Card, Rank, Suit};
    use crate::logic::deck::Deck;

    fn up(suit: Suit, rank: Rank) -> Card {
        let mut card = Card::new(suit, rank);
        card.flip();
        card
    }

    fn board_with_column() -> Board {
        let mut board = Board::new(Deck::shuffled_new());
        let column = board.stack_mut(StackType::Tableau(0)).expect("列はあるはず");
        column.push(Card::new(Suit::Club, Rank::Four)); // 裏向き
        column.push(up(Suit::Heart, Rank::Nine));
        column.push(up(Suit::Spade, Rank::Eight));
        board
    }

    #[test]
    fn topmost_face_up_card_wins() {
        let board = board_with_column();
        let layout = LayoutConfig::default();
        // 列 0: y=200 (裏), 230 (9♥), 260 (8♠)。y=270 は 9♥ と 8♠ の両方に入るけど、手前は 8♠。
        assert_eq!(
            find_clicked_element(&board, &layout, Position::new(110.0, 270.0)),
            Some(ClickTarget::Card { stack_type: StackType::Tableau(0), index: 2 })
        );
        // 9♥ の見えている部分
        assert_eq!(
            find_clicked_element(&board, &layout, Position::new(110.0, 240.0)),
            Some(ClickTarget::Card { stack_type: StackType::Tableau(0), index: 1 })
        );
    }

    #[test]
    fn face_down_cards_are_not_hit() {
        let board = board_with_column();
        let layout = LayoutConfig::default();
        // y=205 は裏向きカードだけの部分なので、カードとしては当たらない。土台エリアに当たる。
        assert_eq!(
            find_clicked_element(&board, &layout, Position::new(110.0, 205.0)),
            Some(ClickTarget::Stack(StackType::Tableau(0)))
        );
        assert_eq!(find_topmost_face_up_card(&board, &layout, Position::new(110.0, 205.0)), None);
    }

    #[test]
    fn stock_area_and_background() {
        let board = Board::new(Deck::shuffled_new());
        let layout = LayoutConfig::default();
        assert_eq!(
            find_clicked_element(&board, &layout, Position::new(120.0, 60.0)),
            Some(ClickTarget::Stack(StackType::Stock))
        );
        assert_eq!(find_clicked_element(&board, &layout, Position::new(5.0, 5.0)), None);
    }
}
