use crate::{board::Position, types::*};

const ORTHO_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAG_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ALL_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Pseudo-legal test: can `piece`, standing on `from`, reach `to` on the
/// current board? Blocking and capture rules are applied; whether the move
/// would leave the mover's own king in check is not (see `legal_move`).
pub fn can_move(pos: &Position, piece: Piece, from: u8, to: u8) -> bool {
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_can_move(pos, piece.color, from, to),
        PieceKind::Knight => knight_can_move(pos, piece.color, from, to),
        PieceKind::Bishop => slider_can_move(pos, piece.color, from, to, &DIAG_DIRS),
        PieceKind::Rook => slider_can_move(pos, piece.color, from, to, &ORTHO_DIRS),
        PieceKind::Queen => slider_can_move(pos, piece.color, from, to, &ALL_DIRS),
        PieceKind::King => king_can_move(pos, piece.color, from, to),
    }
}

/// Legality filter: true iff the mover's own color is not in check after
/// playing the move. Simulates on a scratch copy and discards it, so the
/// live position is untouched regardless of the result. Assumes the caller
/// has already established `can_move`.
pub fn legal_move(pos: &Position, piece: Piece, from: u8, to: u8) -> bool {
    let mut scratch = pos.clone();
    scratch.make_move(Move::new(from, to));
    !scratch.in_check(piece.color)
}

/// Every destination square the piece on `from` may legally move to.
/// Read-only helper for move-highlighting front ends.
pub fn legal_destinations(pos: &Position, from: u8) -> Vec<u8> {
    let piece = match pos.piece_at(from) {
        Some(p) => p,
        None => return Vec::new(),
    };
    (0..64)
        .filter(|&to| can_move(pos, piece, from, to) && legal_move(pos, piece, from, to))
        .collect()
}

/// All legal moves for the side to move.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for from in 0..64u8 {
        let piece = match pos.piece_at(from) {
            Some(p) if p.color == pos.side_to_move => p,
            _ => continue,
        };
        for to in 0..64u8 {
            if can_move(pos, piece, from, to) && legal_move(pos, piece, from, to) {
                out.push(Move::new(from, to));
            }
        }
    }
    out
}

/// Early-exit terminal scan: does the side to move have any legal move at
/// all? `false` here means checkmate or stalemate depending on `in_check`.
pub fn has_legal_move(pos: &Position) -> bool {
    for from in 0..64u8 {
        let piece = match pos.piece_at(from) {
            Some(p) if p.color == pos.side_to_move => p,
            _ => continue,
        };
        for to in 0..64u8 {
            if can_move(pos, piece, from, to) && legal_move(pos, piece, from, to) {
                return true;
            }
        }
    }
    false
}

fn target_ok(pos: &Position, c: Color, to: u8) -> bool {
    match pos.piece_at(to) {
        None => true,
        Some(pc) => pc.color != c,
    }
}

fn pawn_can_move(pos: &Position, c: Color, from: u8, to: u8) -> bool {
    let f = file_of(from);
    let r = rank_of(from);
    let df = file_of(to) - f;
    let dr = rank_of(to) - r;

    let (dir, start_rank): (i8, i8) = match c {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };

    // forward 1
    if df == 0 && dr == dir {
        return pos.piece_at(to).is_none();
    }
    // forward 2 from the home rank, both squares empty
    if df == 0 && dr == 2 * dir && r == start_rank {
        if let Some(mid) = sq(f, r + dir) {
            return pos.piece_at(mid).is_none() && pos.piece_at(to).is_none();
        }
        return false;
    }
    // diagonal capture, or en passant into the recorded target square
    if df.abs() == 1 && dr == dir {
        return match pos.piece_at(to) {
            Some(tpc) => tpc.color != c,
            None => pos.en_passant == Some(to),
        };
    }
    false
}

fn knight_can_move(pos: &Position, c: Color, from: u8, to: u8) -> bool {
    let df = (file_of(to) - file_of(from)).abs();
    let dr = (rank_of(to) - rank_of(from)).abs();
    ((df == 1 && dr == 2) || (df == 2 && dr == 1)) && target_ok(pos, c, to)
}

fn slider_can_move(pos: &Position, c: Color, from: u8, to: u8, dirs: &[(i8, i8)]) -> bool {
    let df = file_of(to) - file_of(from);
    let dr = rank_of(to) - rank_of(from);
    // a diagonal must be exact; orthogonal deltas have a zero component
    if df != 0 && dr != 0 && df.abs() != dr.abs() {
        return false;
    }
    let step = (df.signum(), dr.signum());
    if !dirs.contains(&step) {
        return false;
    }

    // every square strictly between origin and destination must be empty
    let mut f = file_of(from) + step.0;
    let mut r = rank_of(from) + step.1;
    while let Some(s) = sq(f, r) {
        if s == to {
            break;
        }
        if pos.piece_at(s).is_some() {
            return false;
        }
        f += step.0;
        r += step.1;
    }
    target_ok(pos, c, to)
}

fn king_can_move(pos: &Position, c: Color, from: u8, to: u8) -> bool {
    if can_castle(pos, c, from, to) {
        return true;
    }
    let df = (file_of(to) - file_of(from)).abs();
    let dr = (rank_of(to) - rank_of(from)).abs();
    df <= 1 && dr <= 1 && target_ok(pos, c, to)
}

/// Castling gate: king on its home square moving to g1/c1 (g8/c8), the
/// matching rights flag still set, the squares between king and rook empty,
/// the king not currently in check, and the crossed and landing squares
/// not attacked.
fn can_castle(pos: &Position, c: Color, from: u8, to: u8) -> bool {
    let (home, ks_right, qs_right) = match c {
        Color::White => (4u8, pos.castling.wk, pos.castling.wq),
        Color::Black => (60u8, pos.castling.bk, pos.castling.bq),
    };
    if from != home {
        return false;
    }

    let enemy = c.other();
    // King side: e->g, squares f,g empty and f,g not attacked
    if to == home + 2 {
        return ks_right
            && pos.piece_at(home + 1).is_none()
            && pos.piece_at(home + 2).is_none()
            && !pos.in_check(c)
            && !pos.is_square_attacked(home + 1, enemy)
            && !pos.is_square_attacked(home + 2, enemy);
    }
    // Queen side: e->c, squares d,c,b empty; d,c not attacked
    if to == home - 2 {
        return qs_right
            && pos.piece_at(home - 1).is_none()
            && pos.piece_at(home - 2).is_none()
            && pos.piece_at(home - 3).is_none()
            && !pos.in_check(c)
            && !pos.is_square_attacked(home - 1, enemy)
            && !pos.is_square_attacked(home - 2, enemy);
    }
    false
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
