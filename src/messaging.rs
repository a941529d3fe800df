//! WhatsApp deep links
//!
//! Builds the `wa.me` URL used to send a match notification. Sending is
//! fire-and-forget: the link is opened in a new tab and nothing is awaited
//! or retried.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

/// Regional mobile prefix that marks a locally-formatted 10-digit number
const LOCAL_MOBILE_PREFIX: char = '5';
/// Country code prepended to locally-formatted numbers
const DEFAULT_COUNTRY_CODE: &str = "90";

/// Best-effort phone cleanup: strip everything that is not a digit, and
/// prefix the default country code when the result looks like a 10-digit
/// locally-formatted mobile number. Numbers from other regions that happen to
/// match the shape are prefixed too; nothing here is validated against a
/// numbering plan.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 && digits.starts_with(LOCAL_MOBILE_PREFIX) {
        format!("{DEFAULT_COUNTRY_CODE}{digits}")
    } else {
        digits
    }
}

/// Build the `wa.me` URL addressing `phone` with the percent-encoded
/// `message` in the `text` parameter.
pub fn whatsapp_link(phone: &str, message: &str) -> Result<Url, url::ParseError> {
    let phone = normalize_phone(phone);
    let text = utf8_percent_encode(message, NON_ALPHANUMERIC);
    Url::parse(&format!("https://wa.me/{phone}?text={text}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_formatting() {
        assert_eq!(normalize_phone("+1 (212) 555-0199"), "12125550199");
        assert_eq!(normalize_phone("90 555 123 45 67"), "905551234567");
        assert_eq!(normalize_phone("no digits"), "");
    }

    #[test]
    fn local_mobile_numbers_gain_the_country_code() {
        assert_eq!(normalize_phone("5551234567"), "905551234567");
        assert_eq!(normalize_phone("555 123 45 67"), "905551234567");
    }

    #[test]
    fn other_shapes_pass_through_digits_only() {
        // 10 digits but not the local mobile prefix
        assert_eq!(normalize_phone("2125550199"), "2125550199");
        // Already carries a country code
        assert_eq!(normalize_phone("905551234567"), "905551234567");
        // Too short to classify
        assert_eq!(normalize_phone("555123"), "555123");
    }

    #[test]
    fn link_targets_the_normalized_number() {
        let url = whatsapp_link("555-123-45-67", "hi").unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/905551234567");
    }

    #[test]
    fn message_is_percent_encoded() {
        let url = whatsapp_link("905551234567", "Hello Alice!\nYou drew *Bob* 🎁").unwrap();
        let query = url.query().unwrap();
        assert!(query.starts_with("text="));
        // Raw spaces, newlines, and asterisks never survive encoding
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(!query.contains('*'));
        assert!(query.contains("%20"));
        assert!(query.contains("%0A"));
    }

    #[test]
    fn decoded_query_restores_the_message() {
        let message = "🎄 Hello İpek! → *Ümit* 🎁";
        let url = whatsapp_link("5550000000", message).unwrap();
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(value, message);
    }
}
