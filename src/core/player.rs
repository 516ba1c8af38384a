//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Stable identifier derived from a player's name and seat.
//!
//! ## PlayerMap
//!
//! Insertion-ordered per-player storage backed by a `Vec`, with an
//! `FxHashMap` index for O(1) lookup by `PlayerId`. Iteration follows
//! registration order, which is also the winner tie-break order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier derived from the display name.
///
/// Whitespace is stripped and the rest lowercased, then the seat number is
/// appended so two bowlers with the same name still get distinct ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Derive an id from a name and the seat it was registered in.
    ///
    /// ```
    /// use rust_bowling::core::PlayerId;
    ///
    /// let id = PlayerId::from_name("The Dude", 0);
    /// assert_eq!(id.as_str(), "thedude-0");
    /// ```
    #[must_use]
    pub fn from_name(name: &str, seat: usize) -> Self {
        let slug: String = name
            .split_whitespace()
            .collect::<String>()
            .to_lowercase();
        Self(format!("{slug}-{seat}"))
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-player data storage keyed by `PlayerId`.
///
/// ## Example
///
/// ```
/// use rust_bowling::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::new();
/// let dude = PlayerId::from_name("The Dude", 0);
/// scores.insert(dude.clone(), 150);
///
/// assert_eq!(scores[&dude], 150);
/// scores[&dude] += 10;
/// assert_eq!(scores.get(&dude), Some(&160));
/// ```
#[derive(Clone, Debug)]
pub struct PlayerMap<T> {
    entries: Vec<(PlayerId, T)>,
    index: FxHashMap<PlayerId, usize>,
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<T> PlayerMap<T> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning it back if the id is already present.
    pub fn insert(&mut self, id: PlayerId, value: T) -> Result<(), T> {
        if self.index.contains_key(&id) {
            return Err(value);
        }
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, value));
        Ok(())
    }

    /// Get the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no players are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a player is registered.
    #[must_use]
    pub fn contains(&self, id: &PlayerId) -> bool {
        self.index.contains_key(id)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, id: &PlayerId) -> Option<&T> {
        self.index.get(id).map(|&i| &self.entries[i].1)
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, id: &PlayerId) -> Option<&mut T> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    /// Iterate mutably over (id, value) pairs in registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&PlayerId, &mut T)> {
        self.entries.iter_mut().map(|(id, v)| (&*id, v))
    }

    /// Iterate over values in registration order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterate over all player ids in registration order.
    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.entries.iter().map(|(id, _)| id)
    }
}

impl<T> Index<&PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, id: &PlayerId) -> &Self::Output {
        match self.get(id) {
            Some(value) => value,
            None => panic!("no player {id} in map"),
        }
    }
}

impl<T> IndexMut<&PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, id: &PlayerId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(value) => value,
            None => panic!("no player {id} in map"),
        }
    }
}
