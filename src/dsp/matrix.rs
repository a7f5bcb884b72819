//! Small fixed-size matrices and the scaling-and-squaring matrix
//! exponential used by the state-space ladder.
//!
//! The matrices here are tiny (5x5 at most), so everything is plain nested
//! arrays on the stack; no allocation, no linear-algebra crate.

/// Dense N x N matrix of `f64`, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat<const N: usize>(pub [[f64; N]; N]);

impl<const N: usize> Mat<N> {
    pub fn zero() -> Self {
        Self([[0.0; N]; N])
    }

    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.0[i][i] = 1.0;
        }
        m
    }

    pub fn add(&self, other: &Self) -> Self {
        let mut m = *self;
        for i in 0..N {
            for j in 0..N {
                m.0[i][j] += other.0[i][j];
            }
        }
        m
    }

    pub fn scale(&self, s: f64) -> Self {
        let mut m = *self;
        for row in &mut m.0 {
            for x in row {
                *x *= s;
            }
        }
        m
    }

    pub fn mul(&self, other: &Self) -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            for k in 0..N {
                let a = self.0[i][k];
                if a == 0.0 {
                    continue;
                }
                for j in 0..N {
                    m.0[i][j] += a * other.0[k][j];
                }
            }
        }
        m
    }

    pub fn mul_vec(&self, v: &[f64; N]) -> [f64; N] {
        let mut out = [0.0; N];
        for i in 0..N {
            for j in 0..N {
                out[i] += self.0[i][j] * v[j];
            }
        }
        out
    }
}

/// Truncated Taylor series for `exp(A)`: identity plus terms `A^i / i!` for
/// `i` in `1..n`. Only accurate when `A` is small; `expm_hyb` takes care of
/// making it small.
pub fn expm_series<const N: usize>(a: &Mat<N>, n: u32) -> Mat<N> {
    let mut b = Mat::identity();
    let mut c = Mat::identity();
    for i in 1..n {
        c = a.mul(&c).scale(1.0 / i as f64);
        b = b.add(&c);
    }
    b
}

/// Scaling and squaring: evaluate the short series on `A / 2^n2`, where it
/// converges fast, then square the result `n2` times to recover `exp(A)`.
pub fn expm_hyb<const N: usize>(a: &Mat<N>, n1: u32, n2: u32) -> Mat<N> {
    let mut b = expm_series(&a.scale(1.0 / (1u64 << n2) as f64), n1);
    for _ in 0..n2 {
        b = b.mul(&b);
    }
    b
}

/// Continuous-time Jacobian of the 4-stage ladder with cutoff coupling `a`
/// and resonance feedback `k`. Row 0 is the held input (zero dynamics);
/// stage `i` decays at rate `a` and is driven by stage `i-1` at rate `a`;
/// stage 1 additionally sees `-k*a` from stage 4, the feedback path.
pub fn ladder_jacobian(a: f64, k: f64) -> Mat<5> {
    Mat([
        [0.0, 0.0, 0.0, 0.0, 0.0],
        [a, -a, 0.0, 0.0, -k * a],
        [0.0, a, -a, 0.0, 0.0],
        [0.0, 0.0, a, -a, 0.0],
        [0.0, 0.0, 0.0, a, -a],
    ])
}
