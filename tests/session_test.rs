//! End-to-end runs of a session against a manual ticker.

use std::collections::HashMap;

use pairs::records::{LEADERBOARD_CAPACITY, SCORES_KEY};
use pairs::{
    CardState, EventLog, FileStore, FlipOutcome, FlipRejected, GameError, GridSize, ManualTicker,
    MemoryStore, ScoreEntry, Session, SessionEvent, StarRating, Store, Theme, ThemeKind,
};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn session_with_log(seed: u64) -> (Session<ManualTicker, MemoryStore>, EventLog) {
    let mut session = Session::with_rng(
        ManualTicker::new(),
        MemoryStore::new(),
        StdRng::seed_from_u64(seed),
    );
    let log = EventLog::new();
    session.subscribe(log.clone());
    (session, log)
}

/// Positions of each pair on the current board.
fn pairs_of<T: pairs::Ticker, S: Store>(session: &Session<T, S>) -> Vec<[usize; 2]> {
    let mut by_symbol: HashMap<&str, Vec<usize>> = HashMap::new();
    for card in session.game().unwrap().board().cards() {
        by_symbol.entry(card.symbol.as_str()).or_default().push(card.position);
    }
    let mut pairs: Vec<[usize; 2]> = by_symbol.values().map(|p| [p[0], p[1]]).collect();
    pairs.sort();
    pairs
}

fn play_perfectly<T: pairs::Ticker, S: Store>(session: &mut Session<T, S>) {
    for [a, b] in pairs_of(session) {
        session.click(a).unwrap();
        session.click(b).unwrap();
    }
}

fn miss_once<T: pairs::Ticker, S: Store>(session: &mut Session<T, S>) {
    let pairs = pairs_of(session);
    let outcome = session.click(pairs[0][0]).unwrap();
    assert_eq!(outcome, FlipOutcome::Revealed { position: pairs[0][0] });
    let outcome = session.click(pairs[1][0]).unwrap();
    assert_eq!(
        outcome,
        FlipOutcome::Mismatched {
            pair: [pairs[0][0], pairs[1][0]]
        }
    );
    assert!(session.settle().is_some());
}

fn won_events(events: &[SessionEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SessionEvent::GameWon(_)))
        .count()
}

#[test]
fn perfect_sixteen_card_game_earns_three_stars() {
    let (mut session, log) = session_with_log(11);
    session
        .start(GridSize::MEDIUM, &ThemeKind::Emoji.theme())
        .unwrap();
    play_perfectly(&mut session);

    assert_eq!(session.moves(), 8);
    assert_eq!(session.matched_pairs(), 8);
    assert_eq!(session.stars(), StarRating::Three);
    assert_eq!(session.stars().to_string(), "⭐⭐⭐");
    assert!(session.is_won());
    assert_eq!(won_events(&log.drain()), 1);
}

#[test]
fn seventeen_moves_on_sixteen_cards_is_two_stars() {
    let (mut session, _log) = session_with_log(12);
    session
        .start(GridSize::MEDIUM, &ThemeKind::Animals.theme())
        .unwrap();
    for _ in 0..9 {
        miss_once(&mut session);
    }
    play_perfectly(&mut session);

    // 17 > 2 * 8 but not > 3 * 8
    assert_eq!(session.moves(), 17);
    assert_eq!(session.stars(), StarRating::Two);
}

#[test]
fn twenty_five_moves_on_sixteen_cards_is_one_star() {
    let (mut session, _log) = session_with_log(13);
    session
        .start(GridSize::MEDIUM, &ThemeKind::Flags.theme())
        .unwrap();
    for _ in 0..17 {
        miss_once(&mut session);
    }
    play_perfectly(&mut session);
    assert_eq!(session.moves(), 25);
    assert_eq!(session.stars(), StarRating::One);
}

#[test]
fn stars_only_ever_go_down() {
    let (mut session, log) = session_with_log(14);
    session
        .start(GridSize::MEDIUM, &ThemeKind::Emoji.theme())
        .unwrap();
    for _ in 0..30 {
        miss_once(&mut session);
    }
    play_perfectly(&mut session);

    let ratings: Vec<StarRating> = log
        .drain()
        .into_iter()
        .filter_map(|e| match e {
            SessionEvent::MoveMade { stars, .. } => Some(stars),
            _ => None,
        })
        .collect();
    assert_eq!(ratings.len(), 38);
    assert!(ratings.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn mismatch_locks_out_a_third_click() {
    let (mut session, _log) = session_with_log(15);
    session
        .start(GridSize::MEDIUM, &ThemeKind::Emoji.theme())
        .unwrap();
    let pairs = pairs_of(&session);
    session.click(pairs[0][0]).unwrap();
    session.click(pairs[1][0]).unwrap();

    let before = session.game().unwrap().board().clone();
    assert_eq!(session.click(pairs[2][0]), Err(FlipRejected::Locked));
    assert_eq!(session.click(pairs[0][1]), Err(FlipRejected::Locked));
    assert_eq!(session.game().unwrap().board(), &before);
    assert_eq!(session.moves(), 1);

    assert_eq!(session.settle(), Some([pairs[0][0], pairs[1][0]]));
    let board = session.game().unwrap().board();
    assert_eq!(board.cards()[pairs[0][0]].state, CardState::Hidden);
    assert_eq!(board.cards()[pairs[1][0]].state, CardState::Hidden);
    assert!(session.click(pairs[2][0]).is_ok());
}

#[test]
fn clicking_face_up_cards_changes_nothing() {
    let (mut session, _log) = session_with_log(16);
    session
        .start(GridSize::MEDIUM, &ThemeKind::Emoji.theme())
        .unwrap();
    let pairs = pairs_of(&session);
    session.click(pairs[0][0]).unwrap();
    session.click(pairs[0][1]).unwrap();
    session.click(pairs[1][0]).unwrap();

    let (moves, matched) = (session.moves(), session.matched_pairs());
    assert_eq!(
        session.click(pairs[0][0]),
        Err(FlipRejected::AlreadyMatched { position: pairs[0][0] })
    );
    assert_eq!(
        session.click(pairs[1][0]),
        Err(FlipRejected::AlreadyFlipped { position: pairs[1][0] })
    );
    assert_eq!((session.moves(), session.matched_pairs()), (moves, matched));
}

#[test]
fn one_win_event_per_session() {
    let (mut session, log) = session_with_log(17);
    let theme = ThemeKind::Animals.theme();
    session.start(GridSize::SMALL, &theme).unwrap();
    play_perfectly(&mut session);
    assert_eq!(session.click(0), Err(FlipRejected::Finished));
    assert_eq!(won_events(&log.drain()), 1);

    session.restart().unwrap();
    play_perfectly(&mut session);
    let events = log.drain();
    assert!(matches!(events.first(), Some(SessionEvent::BoardChanged(_))));
    assert_eq!(won_events(&events), 1);
}

#[test]
fn timer_counts_ticks_and_stops_on_win() {
    let (mut session, _log) = session_with_log(18);
    session.start(GridSize::SMALL, &ThemeKind::Emoji.theme()).unwrap();
    assert!(session.is_timer_running());
    for _ in 0..7 {
        session.tick();
    }
    play_perfectly(&mut session);
    assert!(!session.is_timer_running());
    session.tick();
    assert_eq!(session.elapsed_seconds(), 7);

    let top = session.leaderboard().entries().to_vec();
    assert_eq!(
        top,
        vec![ScoreEntry {
            elapsed_seconds: 7,
            moves: 2,
            star_rating: StarRating::Three,
        }]
    );
}

#[test]
fn restarting_never_leaves_two_counters_running() {
    let (mut session, _log) = session_with_log(19);
    let theme = ThemeKind::Emoji.theme();
    session.start(GridSize::MEDIUM, &theme).unwrap();
    session.restart_timer();
    session.start_timer();
    session.restart().unwrap();

    let ticker = session.ticker();
    assert!(ticker.is_running());
    assert_eq!(ticker.starts(), ticker.stops() + 1);

    session.tick();
    assert_eq!(session.elapsed_seconds(), 1);
    session.stop_timer();
    session.stop_timer();
    assert_eq!(session.ticker().starts(), session.ticker().stops());
}

#[test]
fn leaderboard_keeps_the_five_fastest_wins() {
    let (mut session, log) = session_with_log(20);
    let theme = ThemeKind::Flags.theme();
    for secs in [50, 10, 30, 5, 40, 20] {
        session.start(GridSize::SMALL, &theme).unwrap();
        for _ in 0..secs {
            session.tick();
        }
        play_perfectly(&mut session);
    }

    let raw = session.leaderboard().store().get(SCORES_KEY).unwrap().unwrap();
    let stored: Vec<ScoreEntry> = serde_json::from_str(&raw).unwrap();
    let times: Vec<u32> = stored.iter().map(|e| e.elapsed_seconds).collect();
    assert_eq!(times, vec![5, 10, 20, 30, 40]);
    assert_eq!(stored.len(), LEADERBOARD_CAPACITY);

    let last_summary = log
        .drain()
        .into_iter()
        .filter_map(|e| match e {
            SessionEvent::GameWon(summary) => Some(summary),
            _ => None,
        })
        .last()
        .unwrap();
    assert_eq!(last_summary.score.elapsed_seconds, 20);
    assert_eq!(last_summary.leaderboard, stored);
}

#[test]
fn wins_are_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::with_rng(
        ManualTicker::new(),
        FileStore::new(dir.path()),
        StdRng::seed_from_u64(21),
    );
    session.start(GridSize::SMALL, &ThemeKind::Emoji.theme()).unwrap();
    session.tick();
    play_perfectly(&mut session);

    let raw = std::fs::read_to_string(dir.path().join("memory-scores.json")).unwrap();
    assert_eq!(raw, r#"[{"time":1,"moves":2,"stars":3}]"#);

    let mut reopened = pairs::Leaderboard::new(FileStore::new(dir.path()));
    assert_eq!(reopened.entries().len(), 1);
}

#[test]
fn short_theme_keeps_the_previous_game() {
    let (mut session, _log) = session_with_log(22);
    session.start(GridSize::SMALL, &ThemeKind::Emoji.theme()).unwrap();
    let generation = session.generation();

    let tiny = Theme::new("tiny", ["A", "B", "C"]).unwrap();
    let err = session.start(GridSize::MEDIUM, &tiny).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientSymbols {
            theme: "tiny".to_string(),
            required: 8,
            available: 3,
        }
    );
    assert_eq!(session.generation(), generation);
    assert_eq!(session.grid(), Some(GridSize::SMALL));
    assert_eq!(session.game().unwrap().board().len(), 4);
}

#[test]
fn idle_session_ignores_clicks_and_restart() {
    let (mut session, log) = session_with_log(23);
    assert_eq!(session.click(0), Err(FlipRejected::Idle));
    assert_eq!(session.restart(), Err(GameError::NoActiveGame));
    assert_eq!(session.settle(), None);
    session.tick();
    assert!(log.is_empty());
}

#[test]
fn observers_see_cards_moves_and_ticks() {
    let (mut session, log) = session_with_log(24);
    session.start(GridSize::SMALL, &ThemeKind::Emoji.theme()).unwrap();
    let pairs = pairs_of(&session);
    log.drain();

    session.tick();
    session.click(pairs[0][0]).unwrap();
    session.click(pairs[1][0]).unwrap();
    session.settle();

    let events = log.drain();
    let kinds: Vec<&str> = events
        .iter()
        .map(|e| match e {
            SessionEvent::BoardChanged(_) => "board",
            SessionEvent::CardChanged(_) => "card",
            SessionEvent::MoveMade { .. } => "move",
            SessionEvent::Tick(_) => "tick",
            SessionEvent::GameWon(_) => "won",
        })
        .collect();
    assert_eq!(kinds, vec!["tick", "card", "card", "card", "move", "card", "card"]);
    assert!(matches!(
        events.last(),
        Some(SessionEvent::CardChanged(card)) if card.state == CardState::Hidden
    ));
}
