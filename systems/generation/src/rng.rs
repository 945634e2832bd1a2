//! Two-seed additive generator of the original Boulder Dash cave builder.
//!
//! Every carry is derived from 8-bit overflow exactly where the 6502 routine
//! produces it, so classic caves regenerate cell for cell.

use boulder_caves_core::CaveError;

/// Advances the seed pair by one step.
#[must_use]
pub const fn step(seeds: (u8, u8)) -> (u8, u8) {
    let (seed0, seed1) = seeds;
    let low_bit_of_seed0 = (seed0 & 0x01) << 7;
    let high_bits_of_seed1 = (seed1 >> 1) & 0x7F;

    let (sum, carry) = seed1.overflowing_add((seed1 & 0x01) << 7);
    let (sum, carry_in) = sum.overflowing_add(carry as u8);
    let (next_seed1, carry_out) = sum.overflowing_add(0x13);
    let carry = carry_in | carry_out;

    let (sum, carry_in) = seed0.overflowing_add(carry as u8);
    let (sum, carry_out) = sum.overflowing_add(low_bit_of_seed0);
    let carry = carry_in | carry_out;
    let next_seed0 = sum
        .wrapping_add(carry as u8)
        .wrapping_add(high_bits_of_seed1);

    (next_seed0, next_seed1)
}

/// Builds a seed pair from wider integers, rejecting values outside a byte.
pub fn checked_seeds(seed0: i64, seed1: i64) -> Result<(u8, u8), CaveError> {
    let narrow = |value: i64, name: &str| {
        u8::try_from(value).map_err(|_| {
            CaveError::precondition(format!("{name} {value} is not between 0 and 0xFF"))
        })
    };
    Ok((narrow(seed0, "seed 0")?, narrow(seed1, "seed 1")?))
}

/// Stateful wrapper that advances a seed pair one step per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BdRandom {
    seeds: (u8, u8),
}

impl BdRandom {
    /// Creates a generator primed with the provided seeds.
    #[must_use]
    pub const fn new(seed0: u8, seed1: u8) -> Self {
        Self {
            seeds: (seed0, seed1),
        }
    }

    /// Current seed pair.
    #[must_use]
    pub const fn seeds(&self) -> (u8, u8) {
        self.seeds
    }

    /// Advances one step and returns the new seed pair.
    pub fn advance(&mut self) -> (u8, u8) {
        self.seeds = step(self.seeds);
        self.seeds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_vector_from_one_zero() {
        assert_eq!(step((1, 0)), (0x81, 0x13));
    }

    #[test]
    fn carries_propagate_between_seeds() {
        assert_eq!(step((0xFF, 0xFF)), (0xFF, 0x93));
        assert_eq!(step((0x80, 0x7F)), (0xC0, 0x12));
        assert_eq!(step((0x01, 0xED)), (0xF7, 0x81));
        assert_eq!(step((0, 0)), (0, 0x13));
    }

    #[test]
    fn sequence_matches_cave_builder_seed() {
        let mut rng = BdRandom::new(0, 0x0A);
        let produced: Vec<(u8, u8)> = (0..6).map(|_| rng.advance()).collect();
        assert_eq!(
            produced,
            vec![
                (0x05, 0x1D),
                (0x93, 0xB0),
                (0x6C, 0xC3),
                (0xCD, 0x57),
                (0x79, 0xEA),
                (0x6E, 0xFD),
            ]
        );
        assert_eq!(rng.seeds(), (0x6E, 0xFD));
    }

    #[test]
    fn checked_seeds_rejects_values_outside_a_byte() {
        assert_eq!(checked_seeds(0, 255), Ok((0, 255)));
        assert!(matches!(
            checked_seeds(256, 0),
            Err(CaveError::PreconditionViolation { .. })
        ));
        assert!(checked_seeds(0, -1).is_err());
    }
}
