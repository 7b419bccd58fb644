//! Wildlife species and habitat terrains.
//!
//! Both enumerations have five variants in a fixed order. The `#[repr(u8)]`
//! discriminant doubles as an array index, so per-species and per-terrain
//! values live in a `ByKind` fixed-size array rather than a hash map.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use serde::de::{Deserializer, Error as _, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Number of variants in both `Species` and `Terrain`.
pub const KIND_COUNT: usize = 5;

/// A wildlife token species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Species {
    Bear = 0,
    Elk = 1,
    Salmon = 2,
    Hawk = 3,
    Fox = 4,
}

/// All species in index order.
pub const ALL_SPECIES: [Species; KIND_COUNT] = [
    Species::Bear,
    Species::Elk,
    Species::Salmon,
    Species::Hawk,
    Species::Fox,
];

/// A habitat tile terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Terrain {
    Mountain = 0,
    Forest = 1,
    Prairie = 2,
    Wetland = 3,
    River = 4,
}

/// All terrains in index order.
pub const ALL_TERRAINS: [Terrain; KIND_COUNT] = [
    Terrain::Mountain,
    Terrain::Forest,
    Terrain::Prairie,
    Terrain::Wetland,
    Terrain::River,
];

/// Common surface of `Species` and `Terrain`, used by `ByKind`.
pub trait Kind: Copy + Eq + 'static {
    const ALL: [Self; KIND_COUNT];

    fn index(self) -> usize;

    /// Returns the lowercase name used in data files.
    fn name(self) -> &'static str;

    /// Parses a lowercase name. Case-insensitive.
    fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
    }
}

impl Kind for Species {
    const ALL: [Species; KIND_COUNT] = ALL_SPECIES;

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Species::Bear => "bear",
            Species::Elk => "elk",
            Species::Salmon => "salmon",
            Species::Hawk => "hawk",
            Species::Fox => "fox",
        }
    }
}

impl Kind for Terrain {
    const ALL: [Terrain; KIND_COUNT] = ALL_TERRAINS;

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Terrain::Mountain => "mountain",
            Terrain::Forest => "forest",
            Terrain::Prairie => "prairie",
            Terrain::Wetland => "wetland",
            Terrain::River => "river",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per species or per terrain, indexed by the enum.
///
/// Serializes as a JSON object keyed by lowercase name, in index order.
/// Deserializing accepts any subset of names; missing entries take
/// `T::default()` and unknown names are rejected.
pub struct ByKind<K, T> {
    values: [T; KIND_COUNT],
    _kind: PhantomData<K>,
}

/// Per-species values.
pub type PerSpecies<T> = ByKind<Species, T>;

/// Per-terrain values.
pub type PerTerrain<T> = ByKind<Terrain, T>;

impl<K: Kind, T> ByKind<K, T> {
    pub fn from_fn(mut f: impl FnMut(K) -> T) -> Self {
        ByKind {
            values: K::ALL.map(&mut f),
            _kind: PhantomData,
        }
    }

    /// Iterates `(kind, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        K::ALL.into_iter().zip(self.values.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(K, &T) -> U) -> ByKind<K, U> {
        ByKind::from_fn(|k| f(k, &self.values[k.index()]))
    }
}

impl<K: Kind> ByKind<K, u32> {
    /// Sum of all values, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.values.iter().fold(0, |acc, &v| acc.saturating_add(v))
    }
}

impl<K: Kind, T> Index<K> for ByKind<K, T> {
    type Output = T;

    fn index(&self, kind: K) -> &T {
        &self.values[kind.index()]
    }
}

impl<K: Kind, T> IndexMut<K> for ByKind<K, T> {
    fn index_mut(&mut self, kind: K) -> &mut T {
        &mut self.values[kind.index()]
    }
}

impl<K: Kind, T: Default> Default for ByKind<K, T> {
    fn default() -> Self {
        ByKind::from_fn(|_| T::default())
    }
}

impl<K, T: Clone> Clone for ByKind<K, T> {
    fn clone(&self) -> Self {
        ByKind {
            values: self.values.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K, T: PartialEq> PartialEq for ByKind<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<K, T: Eq> Eq for ByKind<K, T> {}

impl<K: Kind + fmt::Debug, T: fmt::Debug> fmt::Debug for ByKind<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(K::ALL.iter().map(|k| k.name()).zip(self.values.iter()))
            .finish()
    }
}

impl<K: Kind, T: Serialize> Serialize for ByKind<K, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(KIND_COUNT))?;
        for (kind, value) in self.iter() {
            map.serialize_entry(kind.name(), value)?;
        }
        map.end()
    }
}

impl<'de, K: Kind, T: Deserialize<'de> + Default> Deserialize<'de> for ByKind<K, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ByKindVisitor<K, T>(PhantomData<(K, T)>);

        impl<'de, K: Kind, T: Deserialize<'de> + Default> Visitor<'de> for ByKindVisitor<K, T> {
            type Value = ByKind<K, T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let names: Vec<&str> = K::ALL.iter().map(|k| k.name()).collect();
                write!(f, "a map keyed by one of: {}", names.join(", "))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut out = ByKind::<K, T>::default();
                while let Some(key) = access.next_key::<String>()? {
                    let kind = K::from_name(&key)
                        .ok_or_else(|| A::Error::custom(format!("unknown name '{key}'")))?;
                    out[kind] = access.next_value()?;
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(ByKindVisitor(PhantomData))
    }
}
