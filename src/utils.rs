use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{ImageFormat, Luma};
use log::warn;
use qrcode::QrCode;
use yew::prelude::{InputEvent, TargetCast};

use crate::api::ApiError;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn parse_amount(raw: &str) -> Option<f64> {
    let amount = raw.trim().parse::<f64>().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

/// PSBTs pasted from terminals arrive wrapped; the backend wants one base64 line.
pub fn strip_newlines(psbt: &str) -> String {
    psbt.chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn format_balance(balance: &str) -> String {
    format!("{} BTC", balance)
}

pub fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

pub fn error_text(err: &ApiError, fallback: &str) -> String {
    let message = err.to_string();
    if is_blank(&message) {
        fallback.to_string()
    } else {
        message
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum QrSource {
    Image(String),
    Payload(String),
}

pub fn classify_qr(value: &str) -> QrSource {
    let trimmed = value.trim();
    if trimmed.starts_with("data:image/")
        || trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
    {
        QrSource::Image(trimmed.to_string())
    } else {
        QrSource::Payload(trimmed.to_string())
    }
}

pub fn generate_qr_data_url(text: &str) -> Option<String> {
    let qr_code = match QrCode::new(text.as_bytes()) {
        Ok(code) => code,
        Err(e) => {
            warn!("Cannot encode {} bytes as QR code: {}", text.len(), e);
            return None;
        }
    };
    let qr_image = qr_code.render::<Luma<u8>>().min_dimensions(200, 200).build();

    let mut png_bytes: Vec<u8> = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut png_bytes);
    if let Err(e) = qr_image.write_to(&mut cursor, ImageFormat::Png) {
        warn!("Failed to encode QR code as PNG: {}", e);
        return None;
    }

    Some(format!("data:image/png;base64,{}", BASE64.encode(&png_bytes)))
}

pub fn qr_image_src(value: &str) -> Option<String> {
    match classify_qr(value) {
        QrSource::Image(src) => Some(src),
        QrSource::Payload(text) if text.is_empty() => None,
        QrSource::Payload(text) => generate_qr_data_url(&text),
    }
}

pub fn input_value(ev: &InputEvent) -> Option<String> {
    if let Some(input) = ev.target_dyn_into::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    ev.target_dyn_into::<web_sys::HtmlTextAreaElement>()
        .map(|area| area.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_amounts_are_accepted() {
        assert_eq!(parse_amount("0.0001"), Some(0.0001));
        assert_eq!(parse_amount(" 2 "), Some(2.0));
        assert_eq!(parse_amount("1e-3"), Some(0.001));
    }

    #[test]
    fn non_positive_or_non_numeric_amounts_are_rejected() {
        for raw in ["-1", "0", "0.0", "abc", "", "inf", "NaN", "1.2.3"] {
            assert_eq!(parse_amount(raw), None, "accepted {:?}", raw);
        }
    }

    #[test]
    fn blank_detection_trims() {
        assert!(is_blank(""));
        assert!(is_blank(" \n\t"));
        assert!(!is_blank(" w1 "));
    }

    #[test]
    fn newlines_are_removed_from_psbt() {
        assert_eq!(strip_newlines("abc\ndef\r\nghi\n"), "abcdefghi");
        assert_eq!(strip_newlines("  cHNidP8=  "), "cHNidP8=");
    }

    #[test]
    fn balance_carries_currency_label() {
        assert_eq!(format_balance("0.5"), "0.5 BTC");
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        assert_eq!(encode_path_segment("w1"), "w1");
        assert_eq!(encode_path_segment("my wallet/a"), "my%20wallet%2Fa");
        assert_eq!(encode_path_segment("caf\u{e9}"), "caf%C3%A9");
        assert_eq!(encode_path_segment("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn reserved_bytes_use_two_uppercase_hex_digits() {
        assert_eq!(encode_path_segment("?#%"), "%3F%23%25");
        assert_eq!(encode_path_segment("\n"), "%0A");
        assert_eq!(encode_path_segment(""), "");
    }

    #[test]
    fn backend_message_wins_over_fallback() {
        let err = ApiError::Backend {
            status: 500,
            message: "Wallet file not found".into(),
        };
        assert_eq!(error_text(&err, "Failed to get balance."), "Wallet file not found");
    }

    #[test]
    fn transport_message_is_used_without_backend_text() {
        let err = ApiError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(error_text(&err, "Broadcast failed"), "TypeError: Failed to fetch");
        let err = ApiError::Status(502);
        assert_eq!(
            error_text(&err, "Broadcast failed"),
            "Request failed with status code 502"
        );
    }

    #[test]
    fn empty_message_uses_fallback() {
        let err = ApiError::Transport(String::new());
        assert_eq!(error_text(&err, "Broadcast failed"), "Broadcast failed");
    }

    #[test]
    fn qr_values_are_classified() {
        assert_eq!(
            classify_qr("data:image/png;base64,iVBOR"),
            QrSource::Image("data:image/png;base64,iVBOR".into())
        );
        assert_eq!(
            classify_qr("https://example.org/qr.png"),
            QrSource::Image("https://example.org/qr.png".into())
        );
        assert_eq!(classify_qr("cHNidP8B"), QrSource::Payload("cHNidP8B".into()));
    }

    #[test]
    fn payload_is_rendered_to_png_data_url() {
        let src = qr_image_src("cHNidP8BAHECAAAAAQ").unwrap();
        assert!(src.starts_with("data:image/png;base64,"));
        assert_eq!(qr_image_src("   "), None);
    }

    #[test]
    fn same_qr_value_yields_same_image() {
        let payload = "cHNidP8BAHECAAAAAQ";
        assert_eq!(qr_image_src(payload), qr_image_src(payload));
        assert_ne!(qr_image_src(payload), qr_image_src("cHNidP8BAHECAAAAAg"));
        let url = "data:image/png;base64,iVBOR";
        assert_eq!(qr_image_src(url).as_deref(), Some(url));
    }
}
