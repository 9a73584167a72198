//! Formatting helpers and permissive input predicates.
//!
//! The email and phone checks are deliberately loose: they catch obvious
//! typos in form fields, not every malformed address.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a count of seconds as `MM:SS`.
///
/// Minutes are not capped, so an hour and a bit renders as `61:01`.
#[must_use]
pub fn format_time(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Format a duration in seconds as `1h 2m 3s`, dropping leading zero units.
#[must_use]
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// `local@domain.tld`, where each part is one or more characters that are
/// neither whitespace nor `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(is_address_char) || !domain.chars().all(is_address_char) {
        return false;
    }
    // Some dot in the domain needs at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

/// Exactly ten ASCII digits, no separators.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Trim and escape text for inclusion in HTML markup.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let trimmed = text.trim();
    let mut out = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

// JS `\s`: Unicode whitespace without NEL (U+0085), plus the byte order mark.
fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn is_address_char(c: char) -> bool {
    c != '@' && !is_js_whitespace(c)
}
