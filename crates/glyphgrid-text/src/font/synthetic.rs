//! In-memory TrueType fonts for tests
//!
//! Builds a minimal but well-formed `glyf`-flavoured font: `cmap` (format 4),
//! `glyf`, `head`, `hhea`, `loca` and `maxp`. Metrics are fixed at
//! 1000 units per em, ascender 800, descender -200.
//!
//! Glyph table:
//! - 0: `.notdef`, no outline
//! - 1: square, x 200..800, y 0..600
//! - 2: blank, mapped but no outline
//! - 3: wide bar, x -1000..2000, y 100..500
//! - 4: overhanging box, x 600..1400, y 0..600 (ink past the advance)

/// Outline kinds a character can be mapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Square = 1,
    Blank = 2,
    Wide = 3,
    Overhang = 4,
}

pub const UNITS_PER_EM: u16 = 1000;
pub const ASCENDER: i16 = 800;
pub const DESCENDER: i16 = -200;

/// Builder for a synthetic font
#[derive(Debug, Clone, Default)]
pub struct SyntheticFont {
    mapping: Vec<(char, Shape)>,
}

impl SyntheticFont {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `c` to the square outline
    pub fn with_square(self, c: char) -> Self {
        self.assign(c, Shape::Square)
    }

    /// Map `c` to a glyph without contours
    pub fn with_blank(self, c: char) -> Self {
        self.assign(c, Shape::Blank)
    }

    /// Map `c` to a bar three ems wide
    pub fn with_wide(self, c: char) -> Self {
        self.assign(c, Shape::Wide)
    }

    /// Map `c` to a box that extends past its right edge
    pub fn with_overhang(self, c: char) -> Self {
        self.assign(c, Shape::Overhang)
    }

    fn assign(mut self, c: char, shape: Shape) -> Self {
        assert!((c as u32) < 0xFFFF, "synthetic fonts cover the BMP only");
        self.mapping.retain(|(existing, _)| *existing != c);
        self.mapping.push((c, shape));
        self
    }

    /// Serialize to TrueType bytes
    pub fn build(&self) -> Vec<u8> {
        let square = rect_glyph(200, 0, 800, 600);
        let wide = rect_glyph(-1000, 100, 2000, 500);
        let overhang = rect_glyph(600, 0, 1400, 600);

        let mut glyf = Vec::new();
        let mut loca = vec![0u16, 0];
        glyf.extend_from_slice(&square);
        loca.push((glyf.len() / 2) as u16);
        loca.push((glyf.len() / 2) as u16);
        glyf.extend_from_slice(&wide);
        loca.push((glyf.len() / 2) as u16);
        glyf.extend_from_slice(&overhang);
        loca.push((glyf.len() / 2) as u16);
        let num_glyphs = (loca.len() - 1) as u16;

        let tables: [(&[u8; 4], Vec<u8>); 6] = [
            (b"cmap", self.cmap()),
            (b"glyf", glyf),
            (b"head", head()),
            (b"hhea", hhea(num_glyphs)),
            (b"loca", loca.iter().flat_map(|v| v.to_be_bytes()).collect()),
            (b"maxp", maxp(num_glyphs)),
        ];

        let mut out = Vec::new();
        put_u32(&mut out, 0x0001_0000);
        put_u16(&mut out, tables.len() as u16);
        put_u16(&mut out, 64); // searchRange
        put_u16(&mut out, 2); // entrySelector
        put_u16(&mut out, (tables.len() as u16) * 16 - 64); // rangeShift

        let mut offset = 12 + 16 * tables.len();
        for (tag, data) in &tables {
            out.extend_from_slice(&tag[..]);
            put_u32(&mut out, 0); // checksum, unchecked by parsers
            put_u32(&mut out, offset as u32);
            put_u32(&mut out, data.len() as u32);
            offset += padded_len(data.len());
        }
        for (_, data) in &tables {
            out.extend_from_slice(data);
            out.resize(out.len() + padded_len(data.len()) - data.len(), 0);
        }
        out
    }

    /// Windows Unicode BMP cmap with one single-code segment per character
    fn cmap(&self) -> Vec<u8> {
        let mut mapping = self.mapping.clone();
        mapping.sort_by_key(|(c, _)| *c as u32);

        let mut segments: Vec<(u16, u16)> = mapping
            .iter()
            .map(|(c, shape)| (*c as u16, *shape as u16))
            .collect();
        // Mandatory terminating segment, maps 0xFFFF to glyph 0
        segments.push((0xFFFF, 0));

        let seg_count = segments.len() as u16;
        let mut sub = Vec::new();
        put_u16(&mut sub, 4); // format
        put_u16(&mut sub, 16 + 8 * seg_count); // length
        put_u16(&mut sub, 0); // language
        put_u16(&mut sub, seg_count * 2);
        let pow = 1u16 << (15 - seg_count.leading_zeros().min(15));
        put_u16(&mut sub, pow * 2); // searchRange
        put_u16(&mut sub, pow.trailing_zeros() as u16); // entrySelector
        put_u16(&mut sub, seg_count * 2 - pow * 2); // rangeShift
        for (code, _) in &segments {
            put_u16(&mut sub, *code); // endCode
        }
        put_u16(&mut sub, 0); // reservedPad
        for (code, _) in &segments {
            put_u16(&mut sub, *code); // startCode
        }
        for (code, glyph) in &segments {
            put_u16(&mut sub, glyph.wrapping_sub(*code)); // idDelta
        }
        for _ in &segments {
            put_u16(&mut sub, 0); // idRangeOffset
        }

        let mut cmap = Vec::new();
        put_u16(&mut cmap, 0); // version
        put_u16(&mut cmap, 1); // numTables
        put_u16(&mut cmap, 3); // platform: Windows
        put_u16(&mut cmap, 1); // encoding: Unicode BMP
        put_u32(&mut cmap, 12);
        cmap.extend_from_slice(&sub);
        cmap
    }
}

/// A single clockwise rectangular contour
fn rect_glyph(x0: i16, y0: i16, x1: i16, y1: i16) -> Vec<u8> {
    let mut g = Vec::new();
    put_i16(&mut g, 1); // numberOfContours
    put_i16(&mut g, x0);
    put_i16(&mut g, y0);
    put_i16(&mut g, x1);
    put_i16(&mut g, y1);
    put_u16(&mut g, 3); // endPtsOfContours[0]
    put_u16(&mut g, 0); // instructionLength
    g.extend_from_slice(&[0x01; 4]); // on-curve, 16-bit deltas
    for dx in [x0, 0, x1 - x0, 0] {
        put_i16(&mut g, dx);
    }
    for dy in [y0, y1 - y0, 0, y0 - y1] {
        put_i16(&mut g, dy);
    }
    g.resize(padded_len(g.len()), 0);
    g
}

fn head() -> Vec<u8> {
    let mut t = Vec::new();
    put_u32(&mut t, 0x0001_0000); // version
    put_u32(&mut t, 0x0001_0000); // fontRevision
    put_u32(&mut t, 0); // checksumAdjustment
    put_u32(&mut t, 0x5F0F_3CF5); // magicNumber
    put_u16(&mut t, 0); // flags
    put_u16(&mut t, UNITS_PER_EM);
    t.extend_from_slice(&[0; 16]); // created, modified
    put_i16(&mut t, -1000);
    put_i16(&mut t, DESCENDER);
    put_i16(&mut t, 2000);
    put_i16(&mut t, ASCENDER);
    put_u16(&mut t, 0); // macStyle
    put_u16(&mut t, 8); // lowestRecPPEM
    put_i16(&mut t, 2); // fontDirectionHint
    put_i16(&mut t, 0); // indexToLocFormat: short
    put_i16(&mut t, 0); // glyphDataFormat
    t
}

fn hhea(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::new();
    put_u32(&mut t, 0x0001_0000);
    put_i16(&mut t, ASCENDER);
    put_i16(&mut t, DESCENDER);
    put_i16(&mut t, 0); // lineGap
    put_u16(&mut t, UNITS_PER_EM); // advanceWidthMax
    t.extend_from_slice(&[0; 22]); // bearings, caret, reserved, metricDataFormat
    put_u16(&mut t, num_glyphs); // numberOfHMetrics
    t
}

fn maxp(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::new();
    put_u32(&mut t, 0x0000_5000);
    put_u16(&mut t, num_glyphs);
    t
}

fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

fn put_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn put_i16(out: &mut Vec<u8>, v: i16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn put_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}
