//! Text dump of glyph bitmaps
//!
//! Each character becomes one block:
//!
//! ```text
//! Character: A (ASCII 65)
//! 00011000
//! 00100100
//! ...
//!
//! ```
//!
//! A header line, one line of `'1'`/`'0'` per bitmap row (`'1'` is ink),
//! then a blank separator line.

use glyphgrid_render::{BitmapRecord, FOREGROUND};

/// Whether `c` can be shown literally in a block header
///
/// Controls (C0, DEL, C1), the no-break space and the soft hyphen are
/// not printable. The ordinary space is.
pub fn is_printable(c: char) -> bool {
    !c.is_control() && c != '\u{A0}' && c != '\u{AD}'
}

/// Header label for `c`: the character itself, or a space
pub fn label(c: char) -> char {
    if is_printable(c) { c } else { ' ' }
}

/// Format the block for character `code`
pub fn format_block(code: u8, record: &BitmapRecord) -> String {
    let width = record.width() as usize;
    let mut block = String::with_capacity(32 + (width + 1) * record.height() as usize);

    block.push_str(&format!("Character: {} (ASCII {})\n", label(char::from(code)), code));
    for row in record.rows() {
        block.extend(row.iter().map(|&v| if v == FOREGROUND { '1' } else { '0' }));
        block.push('\n');
    }
    block.push('\n');
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphgrid_render::{Canvas, PixelRect};
    use glyphgrid_text::InkSurface;

    #[test]
    fn test_printable_range() {
        let printable: Vec<u8> = (0..=u8::MAX).filter(|&b| is_printable(char::from(b))).collect();
        // 32..=126 and 161..=255 minus the soft hyphen
        assert_eq!(printable.len(), 95 + 94);
        assert!(is_printable(' '));
        assert!(is_printable('~'));
        assert!(is_printable('é'));
        assert!(!is_printable('\0'));
        assert!(!is_printable('\n'));
        assert!(!is_printable('\u{7F}'));
        assert!(!is_printable('\u{85}'));
        assert!(!is_printable('\u{A0}'));
        assert!(!is_printable('\u{AD}'));
    }

    #[test]
    fn test_labels() {
        assert_eq!(label('A'), 'A');
        assert_eq!(label('\u{1B}'), ' ');
        assert_eq!(label('ÿ'), 'ÿ');
    }

    #[test]
    fn test_block_layout() {
        let mut canvas = Canvas::new(4, 3);
        canvas.put_ink(0, 0);
        canvas.put_ink(3, 2);
        let record = canvas.crop(PixelRect::new(0, 0, 4, 3)).unwrap();

        let block = format_block(b'A', &record);
        assert_eq!(block, "Character: A (ASCII 65)\n1000\n0000\n0001\n\n");
    }

    #[test]
    fn test_control_block_uses_space_label() {
        let canvas = Canvas::new(2, 2);
        let record = canvas.crop(PixelRect::new(0, 0, 2, 2)).unwrap();

        let block = format_block(0, &record);
        assert_eq!(block, "Character:   (ASCII 0)\n00\n00\n\n");
    }
}
