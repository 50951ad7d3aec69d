//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The game is strictly two-player. Players are numbered 1 and 2 in reports
//! and board renderings; `index()` gives the 0-based slot.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// Places first and moves first.
    One,
    /// Places second; its pieces are the incoming side of placement fights.
    Two,
}

impl PlayerId {
    /// Both players in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Get the 0-based slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Get the 1-based player number used in reports.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Iterate over both players in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rps_referee::core::{PlayerId, PlayerMap};
///
/// let mut flags: PlayerMap<u32> = PlayerMap::with_value(1);
/// flags[PlayerId::Two] = 0;
///
/// assert_eq!(flags[PlayerId::One], 1);
/// assert_eq!(flags[PlayerId::Two], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::One), factory(PlayerId::Two)],
        }
    }

    /// Create a map from player 1's and player 2's values.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Map every entry to a new value.
    pub fn map<U>(&self, f: impl Fn(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|p| f(p, self.get(p)))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::One.index(), 0);
        assert_eq!(PlayerId::Two.index(), 1);
        assert_eq!(PlayerId::One.number(), 1);
        assert_eq!(PlayerId::Two.number(), 2);
        assert_eq!(format!("{}", PlayerId::Two), "Player 2");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u8> = PlayerMap::new(|p| p.number() * 10);

        assert_eq!(map[PlayerId::One], 10);
        assert_eq!(map[PlayerId::Two], 20);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_default();

        map[PlayerId::One] = 3;
        *map.get_mut(PlayerId::Two) += 7;

        assert_eq!(map[PlayerId::One], 3);
        assert_eq!(map[PlayerId::Two], 7);
    }

    #[test]
    fn test_player_map_iter_order() {
        let map: PlayerMap<u8> = PlayerMap::new(|p| p.number());
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(PlayerId::One, &1), (PlayerId::Two, &2)]);
    }

    #[test]
    fn test_player_map_map() {
        let map: PlayerMap<u8> = PlayerMap::with_value(4);
        let doubled = map.map(|_, v| u32::from(*v) * 2);

        assert_eq!(doubled[PlayerId::One], 8);
        assert_eq!(doubled[PlayerId::Two], 8);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| u32::from(p.number()));
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
