// src/components/card.rs

// serde を使う宣言！カード情報を JS 側に渡す時に使うよ！
use serde::{Deserialize, Serialize};
use std::fmt;

/// デフォルトのカード裏面スタイル。`assets/back_side/green_back.png` に対応するよ。
pub const DEFAULT_BACK_STYLE: &str = "green_back";

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// #[derive(...)] のおまじないも忘れずに！
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq, Hash: 比較したり HashSet に入れたりできるように
/// - Serialize, Deserialize: JSON に変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// 全スートの一覧。組札 (Foundation) のインデックス順 (0: Heart, 1: Diamond, 2: Club, 3: Spade) と同じだよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// カードの色（赤か黒か）だよ。場札のルールで使う！
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Red,
    Black,
}

impl Suit {
    /// スートからカードの色を取得する。
    pub fn color(self) -> CardColor {
        match self {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }

    /// 画像ファイル名に使う1文字のコード (H, D, C, S)。
    pub fn letter(self) -> char {
        match self {
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Spade => 'S',
        }
    }

    fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord もつけて、ランクの大小比較 (`<`, `>`) ができるようにしてあるよ！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// 全ランクの一覧 (Ace から King まで)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// 数値 (1..=13) を返すよ。Ace = 1, King = 13。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値からランクに戻す。範囲外なら None。
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードそのものを表す構造体だよ！🃏
///
/// スートとランクの組み合わせ (カードの「正体」) は作った後に変えられないように、
/// フィールドは非公開にしてゲッターだけ用意してるよ。
/// 変えられるのは表向きか裏向きか (`flip`) だけ！
///
/// Copy は付けないよ。カードはスタック間で「移動」するもので、複製されちゃ困るからね。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    is_face_up: bool,
    back_style: String,
}

impl Card {
    /// 裏向きの新しいカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self::with_back_style(suit, rank, DEFAULT_BACK_STYLE)
    }

    /// 裏面スタイルを指定してカードを作る。
    pub fn with_back_style(suit: Suit, rank: Rank, back_style: &str) -> Self {
        Self {
            suit,
            rank,
            is_face_up: false,
            back_style: back_style.to_string(),
        }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn back_style(&self) -> &str {
        &self.back_style
    }

    /// 表向きなら true。
    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    /// カードをひっくり返す。今の状態に関係なく必ず反転するよ。
    pub fn flip(&mut self) {
        self.is_face_up = !self.is_face_up;
    }

    /// 描画に使う画像のキー（パス）を返すよ。
    ///
    /// 表向きなら `assets/cards/{数値}{スート文字}.png` (例: `assets/cards/1S.png`)、
    /// 裏向きなら `assets/back_side/{裏面スタイル}.png` になる！
    pub fn image_path(&self) -> String {
        if self.is_face_up {
            format!("assets/cards/{}{}.png", self.rank.value(), self.suit.letter())
        } else {
            format!("assets/back_side/{}.png", self.back_style)
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_card() {
        let card = Card::new(Suit::Spade, Rank::Ace);

        assert_eq!(card.suit(), Suit::Spade);
        assert_eq!(card.rank(), Rank::Ace);
        assert!(!card.is_face_up(), "作ったばかりのカードは裏向きのはず");
        assert_eq!(card.back_style(), DEFAULT_BACK_STYLE);

        println!("作成したカード: {:?}", card);
        println!("Card 作成テスト、成功！🎉");
    }

    #[test]
    fn flip_toggles_every_time() {
        let mut card = Card::new(Suit::Heart, Rank::Seven);
        card.flip();
        assert!(card.is_face_up());
        card.flip();
        assert!(!card.is_face_up());
    }

    #[test]
    fn image_path_depends_on_face() {
        let mut card = Card::with_back_style(Suit::Club, Rank::Queen, "red_back");
        assert_eq!(card.image_path(), "assets/back_side/red_back.png");
        card.flip();
        assert_eq!(card.image_path(), "assets/cards/12C.png");
    }

    #[test]
    fn rank_comparison_and_values() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::from_value(13), Some(Rank::King));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
        println!("Rank の比較テスト、成功！🎉");
    }

    #[test]
    fn colors_and_labels() {
        assert_eq!(Suit::Heart.color(), CardColor::Red);
        assert_eq!(Suit::Diamond.color(), CardColor::Red);
        assert_eq!(Suit::Club.color(), CardColor::Black);
        assert_eq!(Suit::Spade.color(), CardColor::Black);
        assert_eq!(Card::new(Suit::Heart, Rank::Ten).to_string(), "10♥");
    }
}
