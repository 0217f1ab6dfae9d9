#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value carrying no information.
///
/// Used as the success payload of an [`Outcome`](crate::Outcome) whose
/// computation has nothing to report beyond the fact that it succeeded. The
/// field is private, so [`Unit::INSTANCE`] is the only value callers see.
///
/// ```
/// use outcome::{Outcome, Unit};
///
/// let done: Outcome<Unit, &str> = Outcome::Success(Unit::INSTANCE);
/// assert_eq!(done.unwrap(), Unit::instance());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit(());

impl Unit {
    pub const INSTANCE: Self = Self(());

    #[must_use]
    pub const fn instance() -> Self {
        Self::INSTANCE
    }
}

#[cfg(test)]
mod tests {
    use core::{
        hash::{Hash, Hasher},
        mem::size_of,
    };

    use super::Unit;

    struct Fnv(u64);

    impl Hasher for Fnv {
        fn finish(&self) -> u64 {
            self.0
        }

        fn write(&mut self, bytes: &[u8]) {
            for byte in bytes {
                self.0 ^= u64::from(*byte);
                self.0 = self.0.wrapping_mul(0x100_0000_01b3);
            }
        }
    }

    fn hash_of(unit: Unit) -> u64 {
        let mut hasher = Fnv(0xcbf2_9ce4_8422_2325);
        unit.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_zero_sized() {
        assert_eq!(size_of::<Unit>(), 0);
    }

    #[test]
    fn test_all_values_equal() {
        let copied = Unit::INSTANCE;
        assert_eq!(Unit::INSTANCE, Unit::instance());
        assert_eq!(copied, Unit::INSTANCE);
        assert_eq!(copied.cmp(&Unit::instance()), core::cmp::Ordering::Equal);
        assert_eq!(hash_of(copied), hash_of(Unit::instance()));
    }
}
