use chess_core::perft::perft_root;

#[test]
fn test_perft() {
    // 16 pawn moves, 4 knight moves, 5 + 5 bishop moves and 11 queen moves:
    // bishops and queen are not blocked by the pawns in front of them.
    let nodes = perft_root(1);
    assert_eq!(nodes, 41);
}
