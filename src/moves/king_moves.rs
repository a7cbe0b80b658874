//! King step targets (castling is handled by the king move generator).

use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::knight_moves::set_if_valid;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> SquareSet {
    SquareSet(KING_ATTACKS[square.index() as usize])
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < KING_OFFSETS.len() {
            let (d_row, d_col) = KING_OFFSETS[i];
            attacks |= set_if_valid(row + d_row as i32, col + d_col as i32);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::king_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        let a1 = Square::from_algebraic("a1").expect("a1 should parse");
        assert_eq!(king_attacks(a1).len(), 3);
    }

    #[test]
    fn king_attacks_from_e4_has_eight_targets() {
        let e4 = Square::from_algebraic("e4").expect("e4 should parse");
        assert_eq!(king_attacks(e4).len(), 8);
    }
}
