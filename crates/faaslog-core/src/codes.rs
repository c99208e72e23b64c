//! Human-readable messages for the upstream API's HTTP status codes.

/// Sorted by code.
pub static ERROR_CODE_MESSAGES: [(u16, &str); 11] = [
    (400, "Bad request."),
    (401, "The request requires an user authentication."),
    (402, "Not enough money on the contract"),
    (403, "The access is not allowed."),
    (404, "Wrong pagination parameters."),
    (405, "Method not allowed."),
    (409, "Outdated dataHash, provided product variant(s) are not available anymore"),
    (410, "Selected products not available anymore"),
    (413, "Too many products selected, change agent limitation"),
    (422, "Failed creating order"),
    (500, "Internal server error"),
];

pub fn message_for(code: u16) -> Option<&'static str> {
    ERROR_CODE_MESSAGES
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|idx| ERROR_CODE_MESSAGES[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(ERROR_CODE_MESSAGES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn known_and_unknown_codes() {
        assert_eq!(message_for(404), Some("Wrong pagination parameters."));
        assert_eq!(message_for(500), Some("Internal server error"));
        assert_eq!(message_for(200), None);
        assert_eq!(message_for(418), None);
    }
}
