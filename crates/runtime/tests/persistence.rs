//! File-backed save/load scenarios.

use std::fs;

use game_core::{Action, Direction, EntityId, GameConfig, GenerationParams};
use runtime::{
    FileStateRepository, GameSession, LoopControl, OracleManager, RepositoryError, RuntimeConfig,
    RuntimeError, StateRepository,
};

fn params() -> GenerationParams {
    GenerationParams {
        map_width: 60,
        map_height: 45,
        max_rooms: 12,
        room_min_size: 4,
        room_max_size: 8,
        viewport_width: 0,
        viewport_height: 0,
    }
}

fn new_session(seed: u64) -> GameSession {
    GameSession::new_game(OracleManager::standard(), GameConfig::default(), params(), seed)
        .expect("new game should generate")
}

/// A handful of turns that never depend on the layout being open.
fn play(session: &mut GameSession) {
    for direction in [Direction::North, Direction::East, Direction::South, Direction::West] {
        session
            .submit(&Action::bump(EntityId::PLAYER, direction))
            .expect("bump never fails hard");
        if session.is_game_over() {
            return;
        }
    }
    session
        .submit(&Action::wait(EntityId::PLAYER))
        .expect("wait never fails hard");
}

#[test]
fn missing_save_file_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileStateRepository::new(dir.path()).unwrap();

    assert!(!repo.exists());
    assert!(repo.load().unwrap().is_none());
    repo.delete().unwrap();
}

#[test]
fn saved_game_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileStateRepository::new(dir.path()).unwrap();
    let mut session = new_session(21);
    play(&mut session);

    session.save(&repo).unwrap();
    assert!(repo.exists());
    assert_eq!(repo.path(), dir.path().join("savegame.sav"));
    assert!(!dir.path().join("savegame.sav.tmp").exists());

    let loaded = repo.load().unwrap().unwrap();
    assert_eq!(&loaded, session.state());
}

#[test]
fn resumed_game_continues_deterministically() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileStateRepository::new(dir.path()).unwrap();
    let mut original = new_session(77);
    play(&mut original);
    original.save(&repo).unwrap();

    let mut resumed = GameSession::load(OracleManager::standard(), &repo)
        .unwrap()
        .expect("save exists");

    play(&mut original);
    play(&mut resumed);
    assert_eq!(original.state(), resumed.state());
}

#[test]
fn corrupt_save_is_distinct_from_missing_save() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileStateRepository::new(dir.path()).unwrap();
    fs::write(repo.path(), b"this is not a saved game").unwrap();

    let err = repo.load().unwrap_err();
    assert!(err.is_corrupt());
    assert!(matches!(err, RepositoryError::CorruptedData(_)));

    let err = GameSession::load(OracleManager::standard(), &repo)
        .err()
        .expect("corrupt save must not load");
    assert!(matches!(err, RuntimeError::Repository(e) if e.is_corrupt()));
}

#[test]
fn truncated_save_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileStateRepository::new(dir.path()).unwrap();
    new_session(4).save(&repo).unwrap();

    let bytes = fs::read(repo.path()).unwrap();
    fs::write(repo.path(), &bytes[..bytes.len() / 2]).unwrap();

    assert!(repo.load().unwrap_err().is_corrupt());
}

#[test]
fn leaving_through_the_menu_writes_the_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = RuntimeConfig {
        save_dir: dir.path().join("saves"),
        generation: params(),
        seed: Some(13),
        ..RuntimeConfig::default()
    };
    let repo = config.open_repository().unwrap();
    let session = GameSession::from_config(OracleManager::standard(), &config).unwrap();

    session.conclude(LoopControl::ReturnToMenu, &repo).unwrap();
    assert!(config.save_path().is_file());

    let again = GameSession::from_config(OracleManager::standard(), &config).unwrap();
    assert_eq!(again.state(), session.state());
}
