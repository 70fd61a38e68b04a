//! Blocky digit glyphs built from quads, so the score needs no font asset.

use game_core::Aabb;
use glam::Vec2;

const GLYPH_COLUMNS: usize = 3;
const GLYPH_ROWS: usize = 5;
const GLYPH_ADVANCE: f32 = 4.0; // columns per character, including the gap

/// 3x5 bitmaps, one row per entry, most significant of the low three bits is the left column
const DIGITS: [[u8; GLYPH_ROWS]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b010, 0b010, 0b010], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

fn glyph(c: char) -> Option<&'static [u8; GLYPH_ROWS]> {
    c.to_digit(10).map(|d| &DIGITS[d as usize])
}

/// Width of `text` at glyph height `size`
pub fn text_width(text: &str, size: f32) -> f32 {
    let cell = size / GLYPH_ROWS as f32;
    let chars = text.chars().count();
    if chars == 0 {
        return 0.0;
    }
    (chars as f32 * GLYPH_ADVANCE - 1.0) * cell
}

/// Lit cells of `text`, top-centre anchored at `anchor`.
/// Characters without a glyph still take up space.
pub fn layout(anchor: Vec2, size: f32, text: &str) -> Vec<Aabb> {
    let cell = size / GLYPH_ROWS as f32;
    let left = anchor.x - text_width(text, size) / 2.0;

    let mut cells = Vec::new();
    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let origin_x = left + i as f32 * GLYPH_ADVANCE * cell;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLUMNS {
                if bits & (1 << (GLYPH_COLUMNS - 1 - col)) == 0 {
                    continue;
                }
                let pos = Vec2::new(origin_x + col as f32 * cell, anchor.y + row as f32 * cell);
                cells.push(Aabb::from_pos_size(pos, Vec2::splat(cell)));
            }
        }
    }
    cells
}
