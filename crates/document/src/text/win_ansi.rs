//! Transcoding text to the WinAnsi (Windows-1252) encoding of the base fonts.

/// Replacement byte for characters the encoding cannot represent.
const REPLACEMENT: u8 = b'?';

/// Encodes `text` as WinAnsi bytes. Unmappable characters become `?`,
/// control whitespace becomes a space.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

fn encode_char(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '\t' | '\n' | '\r' => b' ',
        // Latin-1 supplement maps one to one
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => REPLACEMENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode_win_ansi("Report 2026"), b"Report 2026".to_vec());
    }

    #[test]
    fn test_report_glyphs() {
        assert_eq!(encode_win_ansi("€"), vec![0x80]);
        assert_eq!(encode_win_ansi("—"), vec![0x97]);
        assert_eq!(encode_win_ansi("·"), vec![0xb7]);
        assert_eq!(encode_win_ansi("m²"), vec![b'm', 0xb2]);
        assert_eq!(encode_win_ansi("Año"), vec![b'A', 0xf1, b'o']);
    }

    #[test]
    fn test_unmappable_characters_are_replaced() {
        assert_eq!(encode_win_ansi("₿ 円"), b"? ?".to_vec());
        assert_eq!(
            encode_win_ansi("Depósito a plazo"),
            b"Dep\xf3sito a plazo".to_vec()
        );
    }
}
