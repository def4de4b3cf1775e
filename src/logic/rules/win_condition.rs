//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::ALL_RANKS;

/// 組札ひとつが完成したときの枚数 (Ace..King)。
pub const FULL_FOUNDATION: usize = ALL_RANKS.len();

/// ゲームのクリア条件: 全部の組札が 13 枚ずつ揃っているか。
pub fn check_win_condition<I>(foundation_sizes: I) -> bool
where
    I: IntoIterator<Item = usize>,
{
    let mut count = 0;
    for size in foundation_sizes {
        if size != FULL_FOUNDATION {
            return false;
        }
        count += 1;
    }
    count == 4
}
