//! Input Masks
//!
//! Display formatting only. Masks never reject values; validation is the
//! schema's job (and phone has none on purpose).

pub const PHONE_FORMAT: &str = "+7 (###) ###-##-##";
pub const PHONE_PLACEHOLDER: &str = "+7 (___) ___-__-__";
pub const EMAIL_PLACEHOLDER: &str = "example@domain.com";

/// Render a stored phone value through the `+7 (###) ###-##-##` mask.
/// Digits fill the `#` slots in order; unfilled slots show as `_`. The
/// country prefix digit is dropped when the value already starts with it.
pub fn format_phone(raw: &str) -> String {
    let trimmed = raw.strip_prefix("+7").unwrap_or(raw);
    let mut digits: Vec<char> = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 11 && (digits[0] == '7' || digits[0] == '8') {
        digits.remove(0);
    }

    let mut out = String::with_capacity(PHONE_FORMAT.len());
    let mut next = digits.into_iter();
    for slot in PHONE_FORMAT.chars() {
        if slot == '#' {
            out.push(next.next().unwrap_or('_'));
        } else {
            out.push(slot);
        }
    }
    out
}
