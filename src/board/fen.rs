use std::str::FromStr;

use super::error::{FenError, MoveError};
use super::{castle_side, Board, CastlingRights, Color, GameStatus, Move, Piece, Square};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// All six fields are required. The parsed board has status `New` and a
    /// score of zero.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 6 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse piece placement
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(FenError::InvalidFileCount {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                board.set_piece(Square(7 - rank_idx, file), color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::InvalidFileCount {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        // Parse side to move
        board.active_color = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = parse_castling(parts[2])?;

        // Parse en passant target
        board.en_passant_target = match parts[3] {
            "-" => None,
            text => match text.parse::<Square>() {
                Ok(sq) if sq.rank() == 2 || sq.rank() == 5 => Some(sq),
                _ => {
                    return Err(FenError::InvalidEnPassant {
                        found: text.to_string(),
                    })
                }
            },
        };

        board.halfmove_clock = parts[4]
            .parse()
            .map_err(|_| FenError::InvalidHalfmoveClock {
                found: parts[4].to_string(),
            })?;

        board.fullmove_number = match parts[5].parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => {
                return Err(FenError::InvalidFullmoveNumber {
                    found: parts[5].to_string(),
                })
            }
        };

        board.status = GameStatus::New;
        Ok(board)
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.active_color.to_fen_char(),
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Read a move typed by a player ("e2e4", "e2 e4", "e2-e4", "e7e8q").
    ///
    /// The piece and the move kind come from this board: a king stepping two
    /// files from e1/e8 castles, a pawn moving diagonally onto the en passant
    /// target captures en passant, and a pawn reaching the far rank promotes
    /// (to a queen unless a piece letter follows). Whether the move is legal
    /// is left to the caller.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveError> {
        let compact: String = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        let parse_err = || MoveError::Parse {
            text: text.to_string(),
        };
        if compact.len() < 4 || compact.len() > 5 || !compact.is_ascii() {
            return Err(parse_err());
        }

        let from: Square = compact[0..2].parse().map_err(|_| parse_err())?;
        let to: Square = compact[2..4].parse().map_err(|_| parse_err())?;
        let promotion = match compact[4..].chars().next() {
            Some(c) => match Piece::from_char(c) {
                Some(piece @ (Piece::Queen | Piece::Rook | Piece::Bishop | Piece::Knight)) => {
                    Some(piece)
                }
                _ => return Err(parse_err()),
            },
            None => None,
        };

        let (color, piece) = self.piece_at(from).ok_or(MoveError::EmptyOrigin { from })?;

        let mv = match piece {
            Piece::King
                if from == Square(color.back_rank(), 4)
                    && to.rank() == from.rank()
                    && to.file().abs_diff(from.file()) == 2 =>
            {
                if to.file() > from.file() {
                    Move::castle_kingside(color)
                } else {
                    Move::castle_queenside(color)
                }
            }
            Piece::Pawn if to.rank() == color.pawn_promotion_rank() => {
                Move::promotion(color, from, to, promotion.unwrap_or(Piece::Queen))
            }
            Piece::Pawn if Some(to) == self.en_passant_target && to.file() != from.file() => {
                Move::en_passant(color, from, to)
            }
            _ => Move::new(piece, color, from, to),
        };

        if promotion.is_some() && mv.promotion_piece().is_none() {
            return Err(parse_err());
        }
        Ok(mv)
    }
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let (color, kingside) = castle_side(c).ok_or_else(|| FenError::InvalidCastling {
            found: field.to_string(),
        })?;
        rights.set(color, kingside);
    }
    Ok(rights)
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
