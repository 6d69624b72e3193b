//! Outbound contact link builders.
//!
//! The WhatsApp deep link requires a digits-only destination regardless of
//! how the number was entered in the CMS (`+91 98765 43210` and
//! `919876543210` must produce the same link). Telephone and mail links
//! pass the stored value through as entered.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped in the prefilled-message query value.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'?');

/// Strip everything but ASCII digits from a stored phone number.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Build a `https://wa.me/<digits>` deep link, optionally with a
/// prefilled message.
pub fn whatsapp_url(number: &str, text: Option<&str>) -> String {
    let digits = digits_only(number);
    match text {
        Some(message) => format!(
            "https://wa.me/{digits}?text={}",
            utf8_percent_encode(message, QUERY)
        ),
        None => format!("https://wa.me/{digits}"),
    }
}

/// Build a `tel:` link with the number exactly as entered.
pub fn tel_url(number: &str) -> String {
    format!("tel:{number}")
}

/// Build a `mailto:` link.
pub fn mailto_url(email: &str) -> String {
    format!("mailto:{email}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_strips_formatting() {
        assert_eq!(digits_only("+91 98765 43210"), "919876543210");
        assert_eq!(digits_only("919876543210"), "919876543210");
        assert_eq!(digits_only("(0141) 123-4567"), "01411234567");
    }

    #[test]
    fn whatsapp_link_is_digits_only() {
        assert_eq!(
            whatsapp_url("+91 98765 43210", None),
            "https://wa.me/919876543210"
        );
    }

    #[test]
    fn whatsapp_link_encodes_prefill_text() {
        assert_eq!(
            whatsapp_url("919876543210", Some("Hi, I'm interested in your products.")),
            "https://wa.me/919876543210?text=Hi,%20I%27m%20interested%20in%20your%20products."
        );
    }

    #[test]
    fn tel_link_keeps_formatting() {
        assert_eq!(tel_url("+91 98765 43210"), "tel:+91 98765 43210");
    }

    #[test]
    fn mailto_link() {
        assert_eq!(mailto_url("info@agropure.com"), "mailto:info@agropure.com");
    }
}
