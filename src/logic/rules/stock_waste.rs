//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。
//! この2つはドロップ先にならず、山札クリックの操作でだけカードが行き来する。

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// ストック（山札）が空のときに、ウェスト（捨て札）からストックにカードを戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}
