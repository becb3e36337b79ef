//! Position-to-FEN serializer.
//!
//! Clocks are not tracked by the engine, so the last two fields are always
//! `0 1`.

use crate::game_state::chess_types::*;
use crate::game_state::position::{en_passant_landing_row, Position};

pub fn generate_fen(position: &Position) -> String {
    let mut out = String::with_capacity(90);

    for (row, cells) in position.board.iter().enumerate() {
        let mut empty_run = 0u8;
        for cell in cells {
            match cell {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match position.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    out.push(' ');
    let rights = position.castling_rights;
    let mut castling = String::new();
    if rights.white_short {
        castling.push('K');
    }
    if rights.white_long {
        castling.push('Q');
    }
    if rights.black_short {
        castling.push('k');
    }
    if rights.black_long {
        castling.push('q');
    }
    if castling.is_empty() {
        castling.push('-');
    }
    out.push_str(&castling);

    out.push(' ');
    out.push_str(&en_passant_target(position).map_or_else(|| "-".to_owned(), |sq| sq.to_string()));

    out.push_str(" 0 1");
    out
}

fn en_passant_target(position: &Position) -> Option<Square> {
    [Color::White, Color::Black].into_iter().find_map(|pusher| {
        let col = position.en_passant_file(pusher)?;
        Square::new(en_passant_landing_row(pusher.opposite()), col)
    })
}
