//! Move-generator validation against the known node counts from the
//! standard initial position. Promotion is always to queen here, so only
//! depths without promotions are quoted; depth 4 is behind `FULL_PERFT`
//! because the scan-based generator is not built for speed.

use chess_rules::{Position, perft};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

#[test]
fn perft_startpos_shallow() {
    let mut pos = Position::startpos();
    assert_eq!(perft(&mut pos, 0), 1);
    assert_eq!(perft(&mut pos, 1), 20);
    assert_eq!(perft(&mut pos, 2), 400);
    assert_eq!(perft(&mut pos, 3), 8_902);
    // The board comes back untouched from the make/unmake recursion
    assert_eq!(pos, Position::startpos());
}

#[test]
fn perft_startpos_depth_four() {
    if std::env::var(FULL_PERFT_ENV).is_err() {
        eprintln!("set {FULL_PERFT_ENV}=1 to run the depth-4 count");
        return;
    }
    let mut pos = Position::startpos();
    assert_eq!(perft(&mut pos, 4), 197_281);
}
