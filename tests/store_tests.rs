//! Unit tests for the in-memory player store.

use roster_server::roster::player::NewPlayer;
use roster_server::roster::store::PlayerStore;

fn draft(name: &str, email: &str) -> NewPlayer {
    NewPlayer {
        name: name.into(),
        email: email.into(),
    }
}

#[test]
fn fresh_store_holds_the_five_seeds() {
    let store = PlayerStore::new();
    let players = store.list_all();

    assert_eq!(players.len(), 5);
    for (i, p) in players.iter().enumerate() {
        let n = i as i32 + 1;
        assert_eq!(p.id, n);
        assert_eq!(p.name, format!("Player{n}"));
        assert_eq!(p.email, format!("player{n}@gmail.com"));
    }
}

#[test]
fn ids_continue_from_six_without_gaps() {
    let store = PlayerStore::new();

    for expected in 6..=9 {
        let stored = store.add(draft("Fresh Player", "fresh@player.com"));
        assert_eq!(stored.id, expected);
    }

    let ids: Vec<i32> = store.list_all().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn add_appends_and_leaves_existing_records_alone() {
    let store = PlayerStore::new();
    let before = store.list_all();

    let stored = store.add(draft("Trailing Entry", "trailing@entry.com"));

    let after = store.list_all();
    assert_eq!(after.len(), before.len() + 1);
    // prefix unchanged
    assert_eq!(&after[..before.len()], &before[..]);
    // exactly the stored record at the tail
    assert_eq!(after.last(), Some(&stored));
}

#[test]
fn add_returns_the_stored_record_verbatim() {
    let store = PlayerStore::new();
    let stored = store.add(draft("Ada Lovelace", "ada@lovelace.org"));

    assert_eq!(stored.id, 6);
    assert_eq!(stored.name, "Ada Lovelace");
    assert_eq!(stored.email, "ada@lovelace.org");
}

#[test]
fn concurrent_adds_never_reuse_ids() {
    let store = PlayerStore::new();

    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..25 {
                    store.add(draft("Racing Player", "race@player.com"));
                }
            });
        }
    });

    // 5 seeds + 200 adds, every id distinct
    let mut ids: Vec<i32> = store.list_all().iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 205);
}
