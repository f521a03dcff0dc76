//! Pipeline tests - font file to grid image and text dump
//!
//! Runs the real ttf-parser/tiny-skia rasterizer against a synthetic font
//! written to a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use glyphgrid_text::font::synthetic::SyntheticFont;
use glyphgrid::{generate, Artifact, CellResolution, Error, GridConfig, GridShape};
use tempfile::TempDir;

fn write_font(dir: &Path, font: SyntheticFont) -> PathBuf {
    let path = dir.join("synthetic.ttf");
    fs::write(&path, font.build()).expect("Failed to write font");
    path
}

fn sample_font() -> SyntheticFont {
    SyntheticFont::new()
        .with_blank(' ')
        .with_square('A')
        .with_square('#')
        .with_square('é')
        .with_wide('W')
        .with_overhang('N')
}

fn config(dir: &Path, cell: u32, columns: u32, rows: u32) -> GridConfig {
    GridConfig {
        font: write_font(dir, sample_font()),
        image: dir.join("grid.png"),
        text: dir.join("grid.txt"),
        cell: CellResolution { width: cell, height: cell },
        grid: GridShape { columns, rows },
    }
}

/// Split a dump into (header, bitmap rows) blocks
fn blocks(dump: &str) -> Vec<(String, Vec<String>)> {
    dump.split("\n\n")
        .filter(|b| !b.is_empty())
        .map(|b| {
            let mut lines = b.lines();
            let header = lines.next().unwrap_or_default().to_string();
            (header, lines.map(str::to_string).collect())
        })
        .collect()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_eight_pixel_cells_on_sixteen_grid() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config(dir.path(), 8, 16, 16);

    let mut reported = Vec::new();
    generate(&config, |a| reported.push(a.clone())).unwrap();

    assert_eq!(
        reported,
        vec![Artifact::Image(config.image.clone()), Artifact::Text(config.text.clone())]
    );

    let image = image::open(&config.image).unwrap().to_luma8();
    assert_eq!(image.dimensions(), (128, 128));

    let dump = fs::read_to_string(&config.text).unwrap();
    let blocks = blocks(&dump);
    assert_eq!(blocks.len(), 256);
    for (header, rows) in &blocks {
        assert!(header.starts_with("Character: "), "bad header {header:?}");
        assert_eq!(rows.len(), 8);
        for row in rows {
            assert_eq!(row.len(), 8);
            assert!(row.chars().all(|c| c == '0' || c == '1'));
        }
    }
}

#[test]
fn test_headers_in_ascending_order() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config(dir.path(), 8, 16, 16);
    generate(&config, |_| {}).unwrap();

    let dump = fs::read_to_string(&config.text).unwrap();
    let headers: Vec<&str> = dump.lines().filter(|l| l.starts_with("Character: ")).collect();
    assert_eq!(headers.len(), 256);
    for (code, header) in headers.iter().enumerate() {
        let c = char::from(code as u8);
        let expected_label = if glyphgrid::dump::is_printable(c) { c } else { ' ' };
        assert_eq!(*header, format!("Character: {expected_label} (ASCII {code})"));
    }
}

#[test]
fn test_mapped_glyphs_have_ink_and_empty_ones_do_not() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config(dir.path(), 16, 16, 16);
    let grid = generate(&config, |_| {}).unwrap();

    for code in [b'A', b'#', 0xE9, b'W'] {
        assert!(!grid.glyph(code).record.is_blank(), "code {code} has no ink");
    }
    for code in [0u8, b' ', b'B', 0x7F, 0xFF] {
        assert!(grid.glyph(code).record.is_blank(), "code {code} has ink");
    }

    let dump = fs::read_to_string(&config.text).unwrap();
    let blocks = blocks(&dump);
    assert!(blocks[0].1.iter().all(|row| !row.contains('1')));
    assert!(blocks[b'A' as usize].1.iter().any(|row| row.contains('1')));
}

#[test]
fn test_square_placed_at_half_the_spare_space() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config(dir.path(), 32, 16, 16);
    let grid = generate(&config, |_| {}).unwrap();

    // Ink box is 20x20 in a 32 px cell, so the origin sits 6 px in.
    // The outline adds its own 6.4 px bearing on both axes.
    let record = &grid.glyph(b'A').record;
    let rows: Vec<&[u8]> = record.rows().collect();
    let inked_rows: Vec<usize> = (0..32).filter(|&y| rows[y].contains(&0)).collect();
    let inked_cols: Vec<usize> = (0..32).filter(|&x| rows.iter().any(|r| r[x] == 0)).collect();

    let (top, bottom) = (inked_rows[0], *inked_rows.last().unwrap());
    let (left, right) = (inked_cols[0], *inked_cols.last().unwrap());
    assert!((11..=13).contains(&top), "top edge {top}");
    assert!((30..=31).contains(&bottom), "bottom edge {bottom}");
    assert!((11..=13).contains(&left), "left edge {left}");
    assert!((30..=31).contains(&right), "right edge {right}");
}

#[test]
fn test_overhang_shows_up_in_next_record() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config(dir.path(), 16, 16, 16);
    let grid = generate(&config, |_| {}).unwrap();

    // 'N' reaches about 7 px into the cell of 'O', which the font lacks
    assert!(!grid.glyph(b'N').record.is_blank());
    let spill = &grid.glyph(b'O').record;
    assert!(!spill.is_blank());
    for (y, row) in spill.rows().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            if value == 0 {
                assert!(x < 8 && (5..16).contains(&y), "stray ink at ({x}, {y})");
            }
        }
    }

    let dump = fs::read_to_string(&config.text).unwrap();
    assert!(blocks(&dump)[b'O' as usize].1.iter().any(|row| row.starts_with('1')));
}

#[test]
fn test_spill_into_earlier_cells_only_reaches_the_image() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config(dir.path(), 16, 16, 16);
    let grid = generate(&config, |_| {}).unwrap();

    // 'W' is three ems wide and covers the cells of 'U' and 'V' to its left,
    // which were cropped before it was drawn
    assert!(grid.glyph(b'U').record.is_blank());
    assert!(grid.glyph(b'V').record.is_blank());

    let image = image::open(&config.image).unwrap().to_luma8();
    let (vx, vy) = ((b'V' as u32 % 16) * 16, (b'V' as u32 / 16) * 16);
    assert_eq!(image.get_pixel(vx + 4, vy + 12).0, [0]);
}

#[test]
fn test_surplus_cells_left_blank_in_image() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config(dir.path(), 8, 16, 20);
    generate(&config, |_| {}).unwrap();

    let image = image::open(&config.image).unwrap().to_luma8();
    assert_eq!(image.dimensions(), (128, 160));
    for y in 128..160 {
        for x in 0..128 {
            assert_eq!(image.get_pixel(x, y).0, [255]);
        }
    }

    let dump = fs::read_to_string(&config.text).unwrap();
    assert_eq!(blocks(&dump).len(), 256);
}

#[test]
fn test_image_matches_records() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config(dir.path(), 12, 16, 16);
    let grid = generate(&config, |_| {}).unwrap();

    let image = image::open(&config.image).unwrap().to_luma8();
    let code = b'A';
    let (cx, cy) = ((code as u32 % 16) * 12, (code as u32 / 16) * 12);
    for (y, row) in grid.glyph(code).record.rows().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            let pixel = image.get_pixel(cx + x as u32, cy + y as u32).0[0];
            assert_eq!(pixel == 0, value == 0, "mismatch at ({x}, {y})");
        }
    }
}

#[test]
fn test_text_output_is_deterministic() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config(dir.path(), 10, 16, 16);

    generate(&config, |_| {}).unwrap();
    let first = fs::read(&config.text).unwrap();
    generate(&config, |_| {}).unwrap();
    let second = fs::read(&config.text).unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_missing_font_writes_nothing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = config(dir.path(), 8, 16, 16);
    config.font = dir.path().join("missing.ttf");

    let err = generate(&config, |_| panic!("nothing should be written")).unwrap_err();
    assert!(matches!(err, Error::FontLoad(_)));
    assert!(!config.image.exists());
    assert!(!config.text.exists());
}

#[test]
fn test_malformed_font_writes_nothing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = config(dir.path(), 8, 16, 16);
    fs::write(&config.font, b"not a font at all").unwrap();

    let err = generate(&config, |_| {}).unwrap_err();
    assert!(matches!(err, Error::FontLoad(_)));
    assert!(!config.image.exists());
    assert!(!config.text.exists());
}

#[test]
fn test_missing_text_directory_leaves_image() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = config(dir.path(), 8, 16, 16);
    config.text = dir.path().join("no-such-dir").join("grid.txt");

    let mut reported = Vec::new();
    let err = generate(&config, |a| reported.push(a.clone())).unwrap_err();

    assert!(matches!(err, Error::TextWrite { .. }));
    assert!(config.image.exists());
    assert!(!config.text.exists());
    assert_eq!(reported, vec![Artifact::Image(config.image.clone())]);
}

#[test]
fn test_missing_image_directory_skips_text() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = config(dir.path(), 8, 16, 16);
    config.image = dir.path().join("no-such-dir").join("grid.png");

    let err = generate(&config, |_| {}).unwrap_err();
    assert!(matches!(err, Error::ImageWrite(_)));
    assert!(!config.text.exists());
}

#[test]
fn test_undersized_grid_fails_fast() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config(dir.path(), 8, 16, 15);

    let err = generate(&config, |_| {}).unwrap_err();
    assert!(matches!(err, Error::GridTooSmall { columns: 16, rows: 15 }));
    assert!(!config.image.exists());
    assert!(!config.text.exists());
}

#[test]
fn test_bmp_output_by_extension() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = config(dir.path(), 8, 32, 8);
    config.image = dir.path().join("grid.bmp");

    generate(&config, |_| {}).unwrap();
    let image = image::open(&config.image).unwrap().to_luma8();
    assert_eq!(image.dimensions(), (256, 64));
}
