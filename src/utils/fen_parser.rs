//! FEN-to-Position parser.
//!
//! Builds a mailbox position from a Forsyth-Edwards Notation string. The
//! en-passant target square is folded into the per-color file record; the
//! clock fields are validated but not stored.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::CastlingRights;
use crate::game_state::chess_types::*;
use crate::game_state::position::{en_passant_landing_row, Position};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;

    // Clocks are optional; when present they must be numbers.
    if let Some(halfmove_part) = parts.next() {
        halfmove_part
            .parse::<u16>()
            .map_err(|_| invalid(&format!("halfmove clock {halfmove_part}")))?;
    }
    if let Some(fullmove_part) = parts.next() {
        fullmove_part
            .parse::<u16>()
            .map_err(|_| invalid(&format!("fullmove number {fullmove_part}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut position = Position::empty(parse_side_to_move(side_part)?);
    parse_board(board_part, &mut position)?;
    position.castling_rights = parse_castling_rights(castling_part)?;
    position.en_passant_files = parse_en_passant(en_passant_part)?;

    Ok(position)
}

fn invalid(what: &str) -> ChessError {
    ChessError::InvalidFen(what.to_owned())
}

fn parse_board(board_part: &str, position: &mut Position) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;

            if col >= 8 {
                return Err(invalid(&format!("rank {} has too many files", 8 - row)));
            }

            position.board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid(&format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("side to move {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_short = true,
            'Q' => rights.white_long = true,
            'k' => rights.black_short = true,
            'q' => rights.black_long = true,
            _ => return Err(invalid(&format!("castling rights character {ch}"))),
        }
    }

    Ok(rights)
}

/// Maps the target square to the file record of the color that just pushed.
fn parse_en_passant(en_passant_part: &str) -> ChessResult<[Option<u8>; 2]> {
    let mut files = [None, None];
    if en_passant_part == "-" {
        return Ok(files);
    }

    let target = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("en-passant square {en_passant_part}")))?;

    // A white double step is captured by a black pawn landing on the target.
    let pusher = if target.row == en_passant_landing_row(Color::Black) {
        Color::White
    } else if target.row == en_passant_landing_row(Color::White) {
        Color::Black
    } else {
        return Err(invalid(&format!("en-passant square {en_passant_part}")));
    };

    files[pusher.index()] = Some(target.col);
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::Color;
    use crate::game_state::position::Position;

    #[test]
    fn parse_starting_fen_matches_new_game() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(parsed, Position::new());
    }

    #[test]
    fn en_passant_target_maps_to_pushing_color() {
        let after_e4 = parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .expect("FEN should parse");
        assert_eq!(after_e4.en_passant_file(Color::White), Some(4));
        assert_eq!(after_e4.en_passant_file(Color::Black), None);

        let after_d5 = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6").expect("FEN should parse");
        assert_eq!(after_d5.en_passant_file(Color::Black), Some(3));
    }

    #[test]
    fn rejects_malformed_fields() {
        for bad in [
            "",
            "8/8/8/8/8/8/8 w - -",
            "9/8/8/8/8/8/8/8 w - -",
            "8/8/8/8/8/8/8/8 x - -",
            "8/8/8/8/8/8/8/8 w X -",
            "8/8/8/8/8/8/8/8 w - e4",
            "8/8/8/8/8/8/8/8 w - - z 1",
            "8/8/8/8/8/8/8/8 w - - 0 1 extra",
        ] {
            assert!(
                matches!(parse_fen(bad), Err(ChessError::InvalidFen(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
