use rand::rngs::SmallRng;
use rand::SeedableRng;

use board_search::ai::minimax::{alpha_beta, minimax, AlphaBetaStrategy, MinimaxStrategy};
use board_search::ai::simple::GreedyStrategy;
use board_search::ai::{SearchHandle, Strategy};
use board_search::board::Player;
use board_search::games::dummy::DummyGame;
use board_search::games::ttt::TTTBoard;
use board_search::util::board_gen::random_board_with_moves;
use board_search::util::bot_game::play_game;

#[test]
fn tie_break_takes_first_best() {
    let board: DummyGame = "(5 -2 5)".parse().unwrap();

    assert_eq!(minimax(&board, 1).best_index, Some(0));
    assert_eq!(alpha_beta(&board, 1).best_index, Some(0));
    assert_eq!(minimax(&board, 1).value, 5);
}

#[test]
fn minimizes_for_b() {
    let board: DummyGame = "(5 -2 5)".parse().unwrap();
    let board = board.with_first_player(Player::B);

    let result = minimax(&board, 1);
    assert_eq!(result.best_index, Some(1));
    assert_eq!(result.value, -2);
    assert_eq!(alpha_beta(&board, 1), result);
}

#[test]
fn two_ply_tree() {
    // A to move, B replies: child values are min(3, 9) = 3 and min(4, 2) = 2
    let board: DummyGame = "((3 9) (4 2))".parse().unwrap();

    let result = minimax(&board, 2);
    assert_eq!(result.best_index, Some(0));
    assert_eq!(result.value, 3);
    let pruned = alpha_beta(&board, 2);
    assert_eq!(pruned.best_index, result.best_index);
    assert_eq!(pruned.value, result.value);
}

#[test]
fn pruning_skips_nodes_but_keeps_the_move() {
    // after the first branch settles on 5, the second branch is cut as soon as the 4 shows up
    let board: DummyGame = "((5 9) (4 2 8))".parse().unwrap();

    let full = minimax(&board, 2);
    let pruned = alpha_beta(&board, 2);

    assert_eq!(full.best_index, Some(0));
    assert_eq!(full.value, 5);
    assert_eq!(pruned.best_index, full.best_index);
    assert_eq!(pruned.value, full.value);
    assert!(
        pruned.nodes < full.nodes,
        "expected a cutoff: pruned {} vs full {}",
        pruned.nodes,
        full.nodes
    );
}

#[test]
fn depth_zero_matches_greedy() {
    let mut rng = SmallRng::seed_from_u64(0);

    for _ in 0..50 {
        let board = random_board_with_moves(&TTTBoard::default(), 3, &mut rng);

        let greedy = GreedyStrategy.select_move(&board, 1, &SearchHandle::new());
        assert_eq!(minimax(&board, 0).best_index, greedy, "on board\n{}", board);
        assert_eq!(minimax(&board, 1).best_index, greedy, "on board\n{}", board);
    }
}

#[test]
fn alpha_beta_equals_minimax_on_random_boards() {
    let mut rng = SmallRng::seed_from_u64(1);

    for n in 0..6 {
        for _ in 0..20 {
            let board = random_board_with_moves(&TTTBoard::default(), n, &mut rng);

            for depth in 0..5 {
                let full = minimax(&board, depth);
                let pruned = alpha_beta(&board, depth);

                assert_eq!(
                    full.best_index, pruned.best_index,
                    "depth {} on board\n{}",
                    depth, board
                );
                assert_eq!(full.value, pruned.value, "depth {} on board\n{}", depth, board);
                assert!(
                    pruned.nodes <= full.nodes,
                    "pruning may never visit more nodes, depth {} on board\n{}",
                    depth,
                    board
                );
            }
        }
    }
}

#[test]
fn terminal_board_has_no_move() {
    let board: DummyGame = "7".parse().unwrap();

    let result = minimax(&board, 3);
    assert_eq!(result.best_index, None);
    assert_eq!(result.value, 7);
    assert_eq!(result.nodes, 1);
}

#[test]
fn deep_search_sees_the_trap() {
    // the tempting 9 at index 1 hands B a -50 reply two plies down
    let board: DummyGame = "((3 (9 9)) (-50 9))".parse().unwrap();

    // one ply deep both children look like 0-score inner nodes, so index 0 wins the tie
    assert_eq!(minimax(&board, 1).best_index, Some(0));

    let result = minimax(&board, 3);
    assert_eq!(result.best_index, Some(0));
    assert_eq!(result.value, 3);
    assert_eq!(alpha_beta(&board, 3).best_index, Some(0));
}

#[test]
fn strategies_report_full_progress() {
    let board: DummyGame = "(1 2 3 4)".parse().unwrap();
    let handle = SearchHandle::new();

    let index = MinimaxStrategy.select_move(&board, 2, &handle);
    assert_eq!(index, Some(3));
    assert_eq!(handle.progress(), 1.0);
}

#[test]
fn full_games_agree() {
    // a full tic-tac-toe game played by minimax must be move-for-move identical to one played
    // by alpha-beta
    let full = play_game(
        &TTTBoard::default(),
        4,
        &mut MinimaxStrategy,
        &mut MinimaxStrategy,
    );
    let pruned = play_game(
        &TTTBoard::default(),
        4,
        &mut AlphaBetaStrategy,
        &mut AlphaBetaStrategy,
    );

    assert_eq!(full.moves, pruned.moves);
    assert_eq!(full.final_score, pruned.final_score);
    assert!(full.moves.len() <= 9);
}
