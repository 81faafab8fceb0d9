use serde::Serialize;

/// Parity of an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

/// Tag reported in the `properties` list of a classification
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Armstrong,
    Even,
    Odd,
}

impl Property {
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Armstrong => "armstrong",
            Property::Even => "even",
            Property::Odd => "odd",
        }
    }
}

impl From<Parity> for Property {
    fn from(parity: Parity) -> Self {
        match parity {
            Parity::Even => Property::Even,
            Parity::Odd => Property::Odd,
        }
    }
}

/// Every derived value for a single integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub is_armstrong: bool,
    pub parity: Parity,
    pub digit_sum: u64,
}

impl Classification {
    /// Properties in response order: `armstrong` first when present, parity last.
    pub fn properties(&self) -> Vec<Property> {
        let mut properties = Vec::with_capacity(2);
        if self.is_armstrong {
            properties.push(Property::Armstrong);
        }
        properties.push(self.parity.into());
        properties
    }
}

/// Run every predicate over `n`
pub fn classify(n: i64) -> Classification {
    Classification {
        number: n,
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        is_armstrong: is_armstrong(n),
        parity: parity(n),
        digit_sum: digit_sum(n),
    }
}

/// Witnesses that make Miller-Rabin exact for every 64-bit input
const MILLER_RABIN_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// True when no integer in `[2, floor(sqrt(n))]` divides `n`.
///
/// Anything below 2, negatives included, is not prime. Below 2^32 this is
/// plain trial division; above it, deterministic Miller-Rabin gives the same
/// answer in a bounded number of steps.
pub fn is_prime(n: i64) -> bool {
    n >= 2 && is_prime_u64(n.unsigned_abs())
}

fn is_prime_u64(n: u64) -> bool {
    if n <= u64::from(u32::MAX) {
        is_prime_trial_division(n)
    } else {
        is_prime_miller_rabin(n)
    }
}

fn is_prime_trial_division(n: u64) -> bool {
    if n < 4 {
        return n >= 2;
    }
    if n % 2 == 0 {
        return false;
    }

    // `i <= n / i` is `i * i <= n` without the overflow
    let mut i = 3u64;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

fn is_prime_miller_rabin(n: u64) -> bool {
    for &p in &MILLER_RABIN_BASES {
        if n % p == 0 {
            return n == p;
        }
    }

    // n - 1 = d * 2^s with d odd
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    'witness: for &a in &MILLER_RABIN_BASES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1u64;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// True when the proper divisors of `n` sum to `n`.
///
/// `1` and non-positive numbers are never perfect. Every even perfect number
/// is `2^(p-1) * (2^p - 1)` with `2^p - 1` prime (Euclid-Euler), and no odd
/// perfect number exists below 10^1500, so the check never walks divisors.
pub fn is_perfect(n: i64) -> bool {
    if n <= 1 || n % 2 != 0 {
        return false;
    }
    let n = n.unsigned_abs();

    // n = 2^k * m with m odd; k <= 62 for any positive i64
    let k = n.trailing_zeros();
    let m = n >> k;
    m == (1u64 << (k + 1)) - 1 && is_prime_u64(m)
}

/// True when the digits of `n`, each raised to the digit count, sum to `n`.
///
/// A digit power sum is never negative, so negative numbers are never
/// Armstrong numbers.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let value = n.unsigned_abs();
    let digits = digits(value);
    let power = digits.len() as u32;

    // 9^19 * 19 fits comfortably in u128
    let sum: u128 = digits.iter().map(|&d| u128::from(d).pow(power)).sum();
    sum == u128::from(value)
}

/// Sum of the decimal digits of `|n|`
pub fn digit_sum(n: i64) -> u64 {
    digits(n.unsigned_abs()).iter().map(|&d| u64::from(d)).sum()
}

pub fn parity(n: i64) -> Parity {
    if n % 2 == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

/// Decimal digits of `value`, most significant first. `0` has one digit.
fn digits(mut value: u64) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }
    let mut digits = Vec::with_capacity(20);
    while value > 0 {
        digits.push((value % 10) as u8);
        value /= 10;
    }
    digits.reverse();
    digits
}
