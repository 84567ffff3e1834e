//! Macro for defining the quadratic extension Fp2 = Fp[i]/(i^2 + 1).
//!
//! Macro expectations:
//! Fp      base field type (from `define_fp_core`), with p = 3 mod 4 so that
//!         -1 is a non-square and x^2 + 1 is irreducible

macro_rules! define_fp2_core {
    () => {
        use std::fmt;

        /// Element x0 + i*x1 of GF(p^2).
        #[derive(Clone, Copy, Debug)]
        pub struct Fp2 {
            x0: Fp,
            x1: Fp,
        }

        impl Fp2 {
            /// Length of the canonical encoding, in bytes: real part then
            /// imaginary part.
            pub const ENC_LEN: usize = 2 * Fp::ENC_LEN;

            pub const ZERO: Self = Self { x0: Fp::ZERO, x1: Fp::ZERO };
            pub const ONE: Self = Self { x0: Fp::ONE, x1: Fp::ZERO };
            pub const TWO: Self = Self { x0: Fp::TWO, x1: Fp::ZERO };
            pub const THREE: Self = Self { x0: Fp::THREE, x1: Fp::ZERO };
            pub const FOUR: Self = Self { x0: Fp::FOUR, x1: Fp::ZERO };
            pub const MINUS_ONE: Self = Self { x0: Fp::MINUS_ONE, x1: Fp::ZERO };
            pub const ZETA: Self = Self { x0: Fp::ZERO, x1: Fp::ONE };

            pub const fn new(re: &Fp, im: &Fp) -> Self {
                Self { x0: *re, x1: *im }
            }

            /// Build an element from the natural little-endian limbs of its
            /// real and imaginary parts (compile-time friendly).
            pub const fn w64le(re: [u64; Fp::N], im: [u64; Fp::N]) -> Self {
                Self { x0: Fp::w64le(re), x1: Fp::w64le(im) }
            }

            pub const fn const_small(x: u64) -> Self {
                Self { x0: Fp::const_small(x), x1: Fp::ZERO }
            }

            pub fn real(&self) -> Fp {
                self.x0
            }

            pub fn imag(&self) -> Fp {
                self.x1
            }

            #[inline]
            fn set_add(&mut self, rhs: &Self) {
                self.x0 += &rhs.x0;
                self.x1 += &rhs.x1;
            }

            #[inline]
            fn set_sub(&mut self, rhs: &Self) {
                self.x0 -= &rhs.x0;
                self.x1 -= &rhs.x1;
            }

            #[inline]
            pub fn set_neg(&mut self) {
                self.x0.set_neg();
                self.x1.set_neg();
            }

            #[inline]
            pub fn set_conjugate(&mut self) {
                self.x1.set_neg();
            }

            #[inline(always)]
            pub fn conjugate(self) -> Self {
                let mut r = self;
                r.set_conjugate();
                r
            }

            #[inline]
            pub fn set_cond(&mut self, a: &Self, ctl: u32) {
                self.x0.set_cond(&a.x0, ctl);
                self.x1.set_cond(&a.x1, ctl);
            }

            #[inline]
            pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
                let mut r = *a0;
                r.set_cond(a1, ctl);
                r
            }

            #[inline]
            pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
                Fp::cswap(&mut a.x0, &mut b.x0, ctl);
                Fp::cswap(&mut a.x1, &mut b.x1, ctl);
            }

            // Karatsuba: 3 base field multiplications
            #[inline]
            fn set_mul(&mut self, rhs: &Self) {
                let t0 = self.x0 * rhs.x0;
                let t1 = self.x1 * rhs.x1;
                let t2 = (self.x0 + self.x1) * (rhs.x0 + rhs.x1);
                self.x0 = t0 - t1;
                self.x1 = t2 - t0 - t1;
            }

            #[inline]
            pub fn set_square(&mut self) {
                let t0 = (self.x0 + self.x1) * (self.x0 - self.x1);
                let t1 = self.x0 * self.x1;
                self.x0 = t0;
                self.x1 = t1.mul2();
            }

            #[inline(always)]
            pub fn square(self) -> Self {
                let mut r = self;
                r.set_square();
                r
            }

            #[inline(always)]
            pub fn mul2(self) -> Self {
                Self { x0: self.x0.mul2(), x1: self.x1.mul2() }
            }

            #[inline(always)]
            pub fn half(self) -> Self {
                Self { x0: self.x0.half(), x1: self.x1.half() }
            }

            /// Multiply by a small constant, using additions only.
            pub fn mul_small(self, k: u32) -> Self {
                let mut r = Self::ZERO;
                let mut t = self;
                let mut k = k;
                while k != 0 {
                    if (k & 1) != 0 {
                        r += t;
                    }
                    t = t.mul2();
                    k >>= 1;
                }
                r
            }

            /// Norm x0^2 + x1^2, an element of the base field.
            #[inline]
            pub fn norm(&self) -> Fp {
                self.x0.square() + self.x1.square()
            }

            /// Inversion through the norm; zero maps to zero.
            pub fn invert(self) -> Self {
                let ni = self.norm().invert();
                Self { x0: self.x0 * ni, x1: -(self.x1 * ni) }
            }

            /// Invert every element of the slice in place with a single field
            /// inversion. Zero entries stay zero.
            pub fn batch_invert(xx: &mut [Self]) {
                let n = xx.len();
                if n == 0 {
                    return;
                }
                let mut tt = Vec::with_capacity(n);
                let mut acc = Self::ONE;
                for x in xx.iter() {
                    let mut v = *x;
                    v.set_cond(&Self::ONE, v.iszero());
                    acc *= v;
                    tt.push(acc);
                }
                let mut k = acc.invert();
                for j in (1..n).rev() {
                    let mut x = xx[j];
                    let zz = x.iszero();
                    x.set_cond(&Self::ONE, zz);
                    xx[j].set_cond(&(k * tt[j - 1]), !zz);
                    k *= x;
                }
                let zz0 = xx[0].iszero();
                xx[0].set_cond(&k, !zz0);
            }

            /// Returns 0xFFFFFFFF if this value is a square in GF(p^2)
            /// (zero included), 0 otherwise. An element is a square exactly
            /// when its norm is a square in GF(p).
            pub fn is_square(&self) -> u32 {
                let ls = self.norm().legendre();
                ((ls >> 1) as u32) ^ 0xFFFFFFFF
            }

            /// Square root in GF(p^2), with status 0xFFFFFFFF on success and
            /// 0 when no root exists (the returned value is then zero).
            ///
            /// For a + b*i with b != 0, let d be a square root of the norm
            /// a^2 + b^2. Exactly one of (a + d)/2 and (a - d)/2 is a square
            /// x^2 in GF(p), and then x + i*b/(2x) is a root. For b = 0 the
            /// root is sqrt(a) when a is a square and i*sqrt(-a) otherwise.
            pub fn sqrt(self) -> (Self, u32) {
                let (a, b) = (self.x0, self.x1);

                // generic case
                let (d, _) = self.norm().sqrt_ext();
                let (x_plus, ok_plus) = (a + d).half().sqrt();
                let (x_minus, _) = (a - d).half().sqrt();
                let x = Fp::select(&x_minus, &x_plus, ok_plus);
                let y = b * x.mul2().invert();
                let mut r = Self { x0: x, x1: y };

                // imaginary part is zero
                let (s, ok_a) = a.sqrt_ext();
                let r_real = Self {
                    x0: Fp::select(&Fp::ZERO, &s, ok_a),
                    x1: Fp::select(&s, &Fp::ZERO, ok_a),
                };
                r.set_cond(&r_real, b.iszero());

                let ok = r.square().equals(&self);
                r.set_cond(&Self::ZERO, !ok);
                (r, ok)
            }

            #[inline]
            pub fn equals(&self, rhs: &Self) -> u32 {
                self.x0.equals(&rhs.x0) & self.x1.equals(&rhs.x1)
            }

            #[inline]
            pub fn iszero(&self) -> u32 {
                self.x0.iszero() & self.x1.iszero()
            }

            /// Canonical encoding: real part then imaginary part, each
            /// little-endian over `Fp::ENC_LEN` bytes.
            pub fn encode(&self) -> [u8; Self::ENC_LEN] {
                let mut d = [0u8; Self::ENC_LEN];
                d[..Fp::ENC_LEN].copy_from_slice(&self.x0.encode());
                d[Fp::ENC_LEN..].copy_from_slice(&self.x1.encode());
                d
            }

            /// Strict decoding of exactly `ENC_LEN` bytes; both halves must
            /// be canonical. Returns zero with status 0 otherwise.
            pub fn decode(buf: &[u8]) -> (Self, u32) {
                if buf.len() != Self::ENC_LEN {
                    return (Self::ZERO, 0);
                }
                let (x0, ok0) = Fp::decode(&buf[..Fp::ENC_LEN]);
                let (x1, ok1) = Fp::decode(&buf[Fp::ENC_LEN..]);
                let ok = ok0 & ok1;
                let mut r = Self { x0, x1 };
                r.set_cond(&Self::ZERO, !ok);
                (r, ok)
            }

            /// Decoding with implicit reduction of both halves. Inputs
            /// shorter or longer than `ENC_LEN` are split at the midpoint.
            pub fn decode_reduce(buf: &[u8]) -> Self {
                let mid = buf.len() / 2;
                Self {
                    x0: Fp::decode_reduce(&buf[..mid]),
                    x1: Fp::decode_reduce(&buf[mid..]),
                }
            }
        }

        crate::finitefield::impl_field_ops!(Fp2);

        impl fmt::Display for Fp2 {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{} + i*{}", self.x0, self.x1)
            }
        }
    };
}

pub(crate) use define_fp2_core;
