//! In-memory player store: sole owner of the record list and the id counter.

use std::sync::{Mutex, MutexGuard};

use crate::roster::player::{NewPlayer, Player};

/// Mutable store state. Both fields live under one lock so id assignment
/// and append cannot interleave across concurrent submissions.
struct Inner {
    players: Vec<Player>,
    next_id: i32,
}

/// Process-wide player collection, built once in `main` and handed to the
/// page handlers through `web::Data`.
pub struct PlayerStore {
    inner: Mutex<Inner>,
}

impl PlayerStore {
    /// Fresh store holding the five demo records, counter parked at 6.
    pub fn new() -> Self {
        let players = (1..=5)
            .map(|i| Player {
                id: i,
                name: format!("Player{i}"),
                email: format!("player{i}@gmail.com"),
            })
            .collect();

        PlayerStore {
            inner: Mutex::new(Inner {
                players,
                next_id: 6,
            }),
        }
    }

    /// Snapshot of every stored player, in insertion order.
    pub fn list_all(&self) -> Vec<Player> {
        self.lock().players.clone()
    }

    /// Assign the next id to `draft`, append it and return the stored record.
    /// Field validation is the caller's job; `add` never rejects.
    pub fn add(&self, draft: NewPlayer) -> Player {
        let mut inner = self.lock();
        let player = Player {
            id: inner.next_id,
            name: draft.name,
            email: draft.email,
        };
        inner.next_id += 1;
        inner.players.push(player.clone());
        player
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("player store lock poisoned")
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new()
    }
}
