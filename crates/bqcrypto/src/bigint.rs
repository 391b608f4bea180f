//! Thin adapter over `rug` for the big-integer plumbing both ciphers share:
//! big-endian byte conversion and uniform sampling. Modular exponentiation
//! and inversion are used straight off `rug::Integer` (`pow_mod`, `invert`).

use rand::RngCore;
use rug::integer::Order;
use rug::Integer;

pub fn int_from_be(bytes: &[u8]) -> Integer {
    Integer::from_digits(bytes, Order::MsfBe)
}

pub fn int_to_be(i: &Integer) -> Vec<u8> {
    i.to_digits::<u8>(Order::MsfBe)
}

/// Uniform in `[0, 2^bits)`.
pub fn rand_bits(bits: u32, rng: &mut impl RngCore) -> Integer {
    if bits == 0 {
        return Integer::new();
    }
    let nbytes = (bits as usize + 7) / 8;
    let mut bytes = vec![0u8; nbytes];
    rng.fill_bytes(&mut bytes);
    // mask off extra MSBs so the value < 2^bits
    let excess = 8 * nbytes - bits as usize;
    if excess > 0 {
        bytes[0] &= 0xFFu8 >> excess;
    }
    int_from_be(&bytes)
}

/// Uniform in `[0, n)` by rejection sampling.
pub fn rand_below(n: &Integer, rng: &mut impl RngCore) -> Integer {
    let bits = n.significant_bits();
    loop {
        let c = rand_bits(bits, rng);
        if &c < n {
            return c;
        }
    }
}

/// Uniform over the units of `Z_n`: `r` in `[1, n)` with `gcd(r, n) = 1`.
pub fn rand_unit(n: &Integer, rng: &mut impl RngCore) -> Integer {
    loop {
        let r = rand_below(n, rng);
        if r != 0 && Integer::from(r.gcd_ref(n)) == 1 {
            return r;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn be_bytes_roundtrip() {
        let x = Integer::from(0xDEAD_BEEFu64);
        assert_eq!(int_from_be(&int_to_be(&x)), x);
        assert_eq!(int_from_be(&[]), Integer::new());
    }

    #[test]
    fn rand_bits_bounded() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let x = rand_bits(17, &mut rng);
            assert!(x < Integer::from(1u32) << 17);
        }
        assert_eq!(rand_bits(0, &mut rng), 0);
    }

    #[test]
    fn rand_below_bounded() {
        let mut rng = rand::thread_rng();
        let n = Integer::from(1_000_003u32);
        for _ in 0..100 {
            assert!(rand_below(&n, &mut rng) < n);
        }
    }

    #[test]
    fn rand_unit_is_coprime() {
        let mut rng = rand::thread_rng();
        // 30030 = 2*3*5*7*11*13, plenty of non-units to reject
        let n = Integer::from(30030u32);
        for _ in 0..50 {
            let r = rand_unit(&n, &mut rng);
            assert!(r != 0 && r < n);
            assert_eq!(Integer::from(r.gcd_ref(&n)), 1);
        }
    }
}
