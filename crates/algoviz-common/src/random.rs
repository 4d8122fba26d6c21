//! Random value generation.
//!
//! Each structure fills itself from a different value range, so generation is
//! parameterized by a [`RandomProfile`]. A [`ValueGenerator`] seeded with a fixed
//! seed produces the same sequence every run, which tests and benchmarks rely on.

use crate::types::{Value, ValueType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Value ranges used when filling a particular structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomProfile {
    /// Arrays: ints in [0, 10000), floats in [0, 1000), printable chars, 5-10 letter words.
    Sequence,
    /// Linked lists: ints in [0, 1000), floats in [0, 100).
    List,
    /// Trees: ints in [0, 1000), floats in [0, 1000), lowercase letters.
    Tree,
    /// Graph node labels: ints in [10, 100), uppercase letters, `N1`..`N20`.
    GraphLabel,
}

/// Seedable generator of typed values.
#[derive(Debug, Clone)]
pub struct ValueGenerator {
    rng: StdRng,
}

impl ValueGenerator {
    /// Creates a generator from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a generator from an optional seed.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Generates one value of the given kind.
    pub fn value(&mut self, value_type: ValueType, profile: RandomProfile) -> Value {
        match (value_type, profile) {
            (ValueType::Integer, RandomProfile::Sequence) => {
                Value::Integer(self.rng.gen_range(0..10_000))
            }
            (ValueType::Integer, RandomProfile::List | RandomProfile::Tree) => {
                Value::Integer(self.rng.gen_range(0..1_000))
            }
            (ValueType::Integer, RandomProfile::GraphLabel) => {
                Value::Integer(self.rng.gen_range(10..100))
            }
            (ValueType::Float, RandomProfile::Sequence | RandomProfile::Tree) => {
                Value::Float(self.rng.gen_range(0.0..1000.0))
            }
            (ValueType::Float, RandomProfile::List) => Value::Float(self.rng.gen_range(0.0..100.0)),
            (ValueType::Float, RandomProfile::GraphLabel) => {
                Value::Float(self.rng.gen_range(10..100) as f32 / 1.5)
            }
            (ValueType::Character, RandomProfile::Sequence | RandomProfile::List) => {
                Value::Character(self.rng.gen_range(33..=126))
            }
            (ValueType::Character, RandomProfile::Tree) => {
                Value::Character(self.rng.gen_range(b'a'..=b'z'))
            }
            (ValueType::Character, RandomProfile::GraphLabel) => {
                Value::Character(self.rng.gen_range(b'A'..=b'Z'))
            }
            (ValueType::Text, RandomProfile::GraphLabel) => {
                Value::text(format!("N{}", self.rng.gen_range(1..=20)))
            }
            (ValueType::Text, _) => Value::text(self.word()),
        }
    }

    /// Generates `count` values of the given kind.
    pub fn values(
        &mut self,
        value_type: ValueType,
        profile: RandomProfile,
        count: usize,
    ) -> Vec<Value> {
        (0..count).map(|_| self.value(value_type, profile)).collect()
    }

    /// Returns a random lowercase word of 5 to 10 letters.
    pub fn word(&mut self) -> String {
        let len = self.rng.gen_range(5..=10);
        (0..len)
            .map(|_| char::from(self.rng.gen_range(b'a'..=b'z')))
            .collect()
    }

    /// Returns a uniformly chosen integer in `[low, high)`.
    pub fn int_in(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..high)
    }

    /// Returns `true` with the given percentage chance.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.rng.gen_range(0..100) < percent
    }
}

impl Default for ValueGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = ValueGenerator::seeded(7);
        let mut b = ValueGenerator::seeded(7);
        let va = a.values(ValueType::Integer, RandomProfile::Sequence, 32);
        let vb = b.values(ValueType::Integer, RandomProfile::Sequence, 32);
        assert_eq!(va, vb);
    }

    #[test]
    fn test_sequence_ranges() {
        let mut g = ValueGenerator::seeded(1);
        for _ in 0..500 {
            let Value::Integer(i) = g.value(ValueType::Integer, RandomProfile::Sequence) else {
                panic!("expected integer");
            };
            assert!((0..10_000).contains(&i));

            let Value::Float(f) = g.value(ValueType::Float, RandomProfile::Sequence) else {
                panic!("expected float");
            };
            assert!((0.0..1000.0).contains(&f));

            let Value::Character(c) = g.value(ValueType::Character, RandomProfile::Sequence) else {
                panic!("expected character");
            };
            assert!((33..=126).contains(&c));
        }
    }

    #[test]
    fn test_words_are_lowercase_and_bounded() {
        let mut g = ValueGenerator::seeded(3);
        for _ in 0..200 {
            let w = g.word();
            assert!((5..=10).contains(&w.len()));
            assert!(w.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_graph_labels() {
        let mut g = ValueGenerator::seeded(11);
        for _ in 0..100 {
            let v = g.value(ValueType::Text, RandomProfile::GraphLabel);
            let s = v.as_str().unwrap();
            let n: u32 = s[1..].parse().unwrap();
            assert!(s.starts_with('N'));
            assert!((1..=20).contains(&n));
        }
    }
}
