use crate::game_state::chess_types::{Color, Square, SquareSet};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_white_pawn_attacks();
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_black_pawn_attacks();

/// Diagonal capture squares of a pawn, regardless of what occupies them.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> SquareSet {
    match color {
        Color::White => SquareSet(WHITE_PAWN_ATTACKS[square.index() as usize]),
        Color::Black => SquareSet(BLACK_PAWN_ATTACKS[square.index() as usize]),
    }
}

const fn generate_white_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = sq % 8;
        let row = sq / 8;
        let mut attacks = 0u64;

        if row < 7 {
            if col > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if col < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_black_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = sq % 8;
        let row = sq / 8;
        let mut attacks = 0u64;

        if row > 0 {
            if col > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if col < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::{Color, Square, SquareSet};

    fn set_of(names: &[&str]) -> SquareSet {
        names
            .iter()
            .map(|s| Square::from_algebraic(s).expect("square should parse"))
            .collect()
    }

    #[test]
    fn white_pawn_attacks_from_e2() {
        let e2 = Square::from_algebraic("e2").expect("e2 should parse");
        assert_eq!(pawn_attacks(Color::White, e2), set_of(&["d3", "f3"]));
    }

    #[test]
    fn black_pawn_attacks_from_a7_stay_on_board() {
        let a7 = Square::from_algebraic("a7").expect("a7 should parse");
        assert_eq!(pawn_attacks(Color::Black, a7), set_of(&["b6"]));
    }
}
