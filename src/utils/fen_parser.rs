//! FEN-to-GameState parser.
//!
//! Rebuilds the board and metadata from a six-field Forsyth-Edwards Notation
//! string. Every field is validated before a `GameState` is returned.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, Piece, Square};
use crate::game_state::game_state::GameState;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let [board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        parts.as_slice()
    else {
        return Err(ChessErrors::FormatError(format!(
            "FEN must have exactly 6 fields, found {}",
            parts.len()
        )));
    };

    let board = parse_board(board_part)?;
    let active_color = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part, active_color)?;
    let halfmove_clock = halfmove_part
        .parse::<u32>()
        .map_err(|_| ChessErrors::FormatError(format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u32>()
        .ok()
        .filter(|n| *n >= 1)
        .ok_or_else(|| ChessErrors::FormatError(format!("invalid fullmove number: {fullmove_part}")))?;

    Ok(GameState {
        board,
        active_color,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
    })
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::FormatError(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx as u8;
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::FormatError(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as u8;
                if col > 8 {
                    break;
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| ChessErrors::FormatError(format!("invalid piece character '{ch}'")))?;
            let square = Square::from_row_col(row, col).ok_or_else(|| {
                ChessErrors::FormatError(format!("rank {} has too many files", row + 1))
            })?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::FormatError(format!(
                "rank {} does not sum to 8 files",
                row + 1
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    let mut chars = side_part.chars();
    match (chars.next().and_then(Color::from_code), chars.next()) {
        (Some(color), None) => Ok(color),
        _ => Err(ChessErrors::FormatError(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => {
                return Err(ChessErrors::FormatError(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

/// The target must be the square the opponent's pawn just skipped: rank 6
/// with White to move, rank 3 with Black to move.
fn parse_en_passant_square(en_passant_part: &str, active_color: Color) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = Square::from_algebraic(en_passant_part)
        .map_err(|_| ChessErrors::FormatError(format!("invalid en-passant square: {en_passant_part}")))?;

    let mover = active_color.opposite();
    let skipped_row = mover.pawn_start_row() as i8 + mover.forward();
    if square.row() as i8 != skipped_row {
        return Err(ChessErrors::FormatError(format!(
            "en-passant square {en_passant_part} is impossible with {active_color} to move"
        )));
    }

    Ok(Some(square))
}
