use crate::board::Board;
use crate::rules::legal_destinations;
use crate::side::Side;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total number of leaf nodes visited.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Side::White, depth)
}

/// Counts move sequences of length `depth` under this crate's rules.
///
/// Kings may be captured and the walk simply continues; there is no
/// terminal position.
pub fn perft(board: &Board, side_to_move: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for (from, piece) in board.pieces().filter(|(_, p)| p.side == side_to_move) {
        let destinations = legal_destinations(board, from, side_to_move);
        if depth == 1 {
            nodes += destinations.len() as u64;
            continue;
        }
        for to in destinations {
            let mut next = *board;
            next.set(to, Some(piece));
            next.set(from, None);
            nodes += perft(&next, side_to_move.opposite(), depth - 1);
        }
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_zero() {
        assert_eq!(perft_root(0), 1);
    }

    #[test]
    fn test_perft_empty_board() {
        assert_eq!(perft(&Board::empty(), Side::White, 3), 0);
    }

    #[test]
    fn test_perft_is_colour_symmetric_at_start() {
        assert_eq!(perft(&Board::new(), Side::Black, 1), perft_root(1));
    }
}
