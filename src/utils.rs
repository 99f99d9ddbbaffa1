/// Shorten an address for display: first and last eight characters.
/// Identifiers short enough to show whole are left untouched. Truncation
/// counts characters, never bytes; identifiers are opaque strings and may
/// carry multi-byte input.
pub fn address_label(address: &str) -> String {
    let count = address.chars().count();
    if count > 16 {
        let head: String = address.chars().take(8).collect();
        let tail: String = address.chars().skip(count - 8).collect();
        format!("{}...{}", head, tail)
    } else {
        address.to_string()
    }
}

/// Shorten a transaction id for display.
pub fn transaction_label(txid: &str) -> String {
    if txid.chars().count() > 8 {
        let head: String = txid.chars().take(8).collect();
        format!("TX: {}...", head)
    } else {
        format!("TX: {}", txid)
    }
}
