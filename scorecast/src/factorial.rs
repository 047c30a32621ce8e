/// Largest `n` for which `n!` is finite in an `f64`.
pub const MAX_N: u8 = 170;

pub trait Factorial {
    fn get(&self, n: u8) -> f64;
}

#[derive(Default)]
pub struct Calculator;

impl Factorial for Calculator {
    #[inline]
    fn get(&self, n: u8) -> f64 {
        assert!(n <= MAX_N, "{n}! overflows");
        (2..=n).fold(1.0, |product, i| product * i as f64)
    }
}

const TABLE_LEN: usize = MAX_N as usize + 1;

/// Precomputed factorials; the preferred implementation when the same values are sampled
/// repeatedly, as they are when filling a score grid.
pub struct Lookup {
    entries: Box<[f64; TABLE_LEN]>,
}
impl Factorial for Lookup {
    #[inline]
    fn get(&self, n: u8) -> f64 {
        self.entries[n as usize]
    }
}

impl Default for Lookup {
    fn default() -> Self {
        let mut entries = Box::new([1.0; TABLE_LEN]);
        for n in 2..TABLE_LEN {
            entries[n] = n as f64 * entries[n - 1];
        }
        Self { entries }
    }
}
