/// Cut `text` to at most `max_bytes` without splitting a character.
pub fn truncate_string(text: &str, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text.to_string();
    }
    let mut truncated = String::new();
    for ch in text.chars() {
        if truncated.len() + ch.len_utf8() > max_bytes {
            break;
        }
        truncated.push(ch);
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::truncate_string;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_string("Pump It", 20), "Pump It");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // "é" is two bytes; a three-byte budget fits "Bé" but not "Béy".
        assert_eq!(truncate_string("Béyoncé", 3), "Bé");
    }
}
