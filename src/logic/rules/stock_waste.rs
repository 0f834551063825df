//! Rules for the stock and waste piles.

/// Cards can be turned whenever the stock has any left.
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// An empty stock is refilled from the cards already shown, if there are any.
pub fn can_reset_stock_from_waste(stock_is_empty: bool, shown_is_empty: bool) -> bool {
    stock_is_empty && !shown_is_empty
}
