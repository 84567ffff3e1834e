//! Macro for defining the base field type `Fp` of integers modulo a prime p.
//!
//! Macro expectations (constants in the calling module):
//! N        number of 64-bit limbs
//! BITLEN   bit length of p
//! MODULUS  p, as N little-endian 64-bit limbs; p = 3 mod 4 and p < 2^(64*N - 1)
//!
//! Elements are kept in Montgomery representation (x*R mod p with
//! R = 2^(64*N)). All operations except decoding run in constant time.

macro_rules! define_fp_core {
    () => {
        use std::fmt;

        // =============================================================
        // Compile-time helpers. They also back the runtime Montgomery
        // multiplication, so everything below stays branch-free on data.

        #[inline(always)]
        const fn adc(x: u64, y: u64, cc: u64) -> (u64, u64) {
            let z = (x as u128) + (y as u128) + (cc as u128);
            (z as u64, (z >> 64) as u64)
        }

        #[inline(always)]
        const fn sbb(x: u64, y: u64, bb: u64) -> (u64, u64) {
            let z = (x as u128).wrapping_sub(y as u128).wrapping_sub(bb as u128);
            (z as u64, ((z >> 64) as u64) & 1)
        }

        // x*y + a + b over 128 bits, as (lo, hi)
        #[inline(always)]
        const fn umaal(x: u64, y: u64, a: u64, b: u64) -> (u64, u64) {
            let z = (x as u128) * (y as u128) + (a as u128) + (b as u128);
            (z as u64, (z >> 64) as u64)
        }

        // -1/x mod 2^64, x odd
        const fn ninv64(x: u64) -> u64 {
            let y = 2u64.wrapping_sub(x);
            let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
            let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
            let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
            let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
            let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
            y.wrapping_neg()
        }

        const M0I: u64 = ninv64(MODULUS[0]);

        /// Montgomery product a*b/R mod p. Inputs may be any value below
        /// 2^(64*N) as long as one of them is below p; the output is
        /// always fully reduced.
        const fn mont_mul(a: &[u64; N], b: &[u64; N]) -> [u64; N] {
            let mut t = [0u64; N];
            let mut th = 0u64;
            let mut i = 0;
            while i < N {
                let f = b[i];
                let (lo, mut cc1) = umaal(f, a[0], t[0], 0);
                let g = lo.wrapping_mul(M0I);
                let (_, mut cc2) = umaal(g, MODULUS[0], lo, 0);
                let mut j = 1;
                while j < N {
                    let (d, hi1) = umaal(f, a[j], t[j], cc1);
                    cc1 = hi1;
                    let (d, hi2) = umaal(g, MODULUS[j], d, cc2);
                    cc2 = hi2;
                    t[j - 1] = d;
                    j += 1;
                }
                let (d, hh) = adc(cc1, cc2, th);
                t[N - 1] = d;
                th = hh;
                i += 1;
            }

            // Subtract p, then add it back if that borrowed past the top carry
            let mut r = [0u64; N];
            let mut bb = 0;
            let mut j = 0;
            while j < N {
                let (d, b2) = sbb(t[j], MODULUS[j], bb);
                r[j] = d;
                bb = b2;
                j += 1;
            }
            let mm = th.wrapping_sub(bb);
            let mut cc = 0;
            j = 0;
            while j < N {
                let (d, c2) = adc(r[j], mm & MODULUS[j], cc);
                r[j] = d;
                cc = c2;
                j += 1;
            }
            r
        }

        // 2^n mod p, in natural representation
        const fn pow2mod(n: usize) -> [u64; N] {
            let mut d = [0u64; N];
            d[0] = 1;
            let mut k = 0;
            while k < n {
                let mut cc = 0;
                let mut j = 0;
                while j < N {
                    let w = d[j];
                    d[j] = (w << 1) | cc;
                    cc = w >> 63;
                    j += 1;
                }
                let mut r = [0u64; N];
                let mut bb = 0;
                j = 0;
                while j < N {
                    let (x, b2) = sbb(d[j], MODULUS[j], bb);
                    r[j] = x;
                    bb = b2;
                    j += 1;
                }
                if cc == 1 || bb == 0 {
                    d = r;
                }
                k += 1;
            }
            d
        }

        // MODULUS + k (k small, p + k < 2^(64*N))
        const fn modulus_plus(k: u64) -> [u64; N] {
            let mut d = MODULUS;
            let mut cc = k;
            let mut j = 0;
            while j < N {
                let (x, c2) = adc(d[j], cc, 0);
                d[j] = x;
                cc = c2;
                j += 1;
            }
            d
        }

        // MODULUS - k (k small)
        const fn modulus_minus(k: u64) -> [u64; N] {
            let mut d = MODULUS;
            let mut bb = k;
            let mut j = 0;
            while j < N {
                let (x, b2) = sbb(d[j], bb, 0);
                d[j] = x;
                bb = b2;
                j += 1;
            }
            d
        }

        // x >> s for 0 < s < 64
        const fn shr_limbs(x: [u64; N], s: u32) -> [u64; N] {
            let mut d = [0u64; N];
            let mut j = 0;
            while j < N {
                d[j] = x[j] >> s;
                if j + 1 < N {
                    d[j] |= x[j + 1] << (64 - s);
                }
                j += 1;
            }
            d
        }

        const R2: [u64; N] = pow2mod(N * 128);

        // Exponents used by inversion, square roots and the Legendre symbol
        const INV_EXP: [u64; N] = modulus_minus(2);
        const SQRT_EXP: [u64; N] = shr_limbs(modulus_plus(1), 2);
        const LEGENDRE_EXP: [u64; N] = shr_limbs(modulus_minus(1), 1);

        /// Element of GF(p).
        #[derive(Clone, Copy, Debug)]
        pub struct Fp([u64; N]);

        impl Fp {
            /// Number of 64-bit limbs.
            pub const N: usize = N;

            /// Bit length of the modulus.
            pub const BITLEN: usize = BITLEN;

            /// Length of the canonical encoding, in bytes.
            pub const ENC_LEN: usize = (BITLEN + 7) >> 3;

            /// The modulus, little-endian 64-bit limbs.
            pub const MODULUS: [u64; N] = MODULUS;

            pub const ZERO: Self = Self([0u64; N]);
            pub const ONE: Self = Self(pow2mod(N * 64));
            pub const TWO: Self = Self::const_small(2);
            pub const THREE: Self = Self::const_small(3);
            pub const FOUR: Self = Self::const_small(4);
            pub const MINUS_ONE: Self = Self(mont_mul(&modulus_minus(1), &R2));

            /// Create an element from its 64-bit limbs in little-endian
            /// order, usable in constant expressions. Values at or above
            /// the modulus are implicitly reduced.
            pub const fn w64le(x: [u64; N]) -> Self {
                Self(mont_mul(&x, &R2))
            }

            /// Create an element from a small integer, usable in constant
            /// expressions.
            pub const fn const_small(x: u64) -> Self {
                let mut d = [0u64; N];
                d[0] = x;
                Self(mont_mul(&d, &R2))
            }

            #[inline]
            fn set_add(&mut self, rhs: &Self) {
                let mut cc1 = 0;
                for i in 0..N {
                    (self.0[i], cc1) = adc(self.0[i], rhs.0[i], cc1);
                }
                let mut r = [0u64; N];
                let mut cc2 = 0;
                for i in 0..N {
                    (r[i], cc2) = sbb(self.0[i], MODULUS[i], cc2);
                }
                // keep the subtracted value unless it borrowed with no carry out
                let m = cc2.wrapping_neg() & !cc1.wrapping_neg();
                for i in 0..N {
                    self.0[i] = r[i] ^ (m & (r[i] ^ self.0[i]));
                }
            }

            #[inline]
            fn set_sub(&mut self, rhs: &Self) {
                let mut cc1 = 0;
                for i in 0..N {
                    (self.0[i], cc1) = sbb(self.0[i], rhs.0[i], cc1);
                }
                let m = cc1.wrapping_neg();
                let mut cc2 = 0;
                for i in 0..N {
                    (self.0[i], cc2) = adc(self.0[i], m & MODULUS[i], cc2);
                }
            }

            #[inline]
            pub fn set_neg(&mut self) {
                let mut cc1 = 0;
                for i in 0..N {
                    (self.0[i], cc1) = sbb(0, self.0[i], cc1);
                }
                let m = cc1.wrapping_neg();
                let mut cc2 = 0;
                for i in 0..N {
                    (self.0[i], cc2) = adc(self.0[i], m & MODULUS[i], cc2);
                }
            }

            /// Replace this value with `a` if `ctl` is 0xFFFFFFFF; keep it
            /// unchanged if `ctl` is 0.
            #[inline]
            pub fn set_cond(&mut self, a: &Self, ctl: u32) {
                let cw = ((ctl as i32) as i64) as u64;
                for i in 0..N {
                    self.0[i] ^= cw & (self.0[i] ^ a.0[i]);
                }
            }

            /// Return `a0` if `ctl` is 0, `a1` if `ctl` is 0xFFFFFFFF.
            #[inline]
            pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
                let mut r = *a0;
                r.set_cond(a1, ctl);
                r
            }

            #[inline]
            pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
                let cw = ((ctl as i32) as i64) as u64;
                for i in 0..N {
                    let t = cw & (a.0[i] ^ b.0[i]);
                    a.0[i] ^= t;
                    b.0[i] ^= t;
                }
            }

            #[inline(always)]
            fn set_mul(&mut self, rhs: &Self) {
                self.0 = mont_mul(&self.0, &rhs.0);
            }

            #[inline(always)]
            pub fn set_square(&mut self) {
                self.0 = mont_mul(&self.0, &self.0);
            }

            #[inline(always)]
            pub fn square(self) -> Self {
                let mut r = self;
                r.set_square();
                r
            }

            /// Square this value n times.
            pub fn set_xsquare(&mut self, n: u32) {
                for _ in 0..n {
                    self.set_square();
                }
            }

            #[inline]
            pub fn set_half(&mut self) {
                let m = (self.0[0] & 1).wrapping_neg();
                let (mut dd, mut cc) = adc(self.0[0], m & MODULUS[0], 0);
                dd >>= 1;
                for i in 1..N {
                    let (x, ee) = adc(self.0[i], m & MODULUS[i], cc);
                    cc = ee;
                    self.0[i - 1] = dd | (x << 63);
                    dd = x >> 1;
                }
                self.0[N - 1] = dd | (cc << 63);
            }

            #[inline(always)]
            pub fn half(self) -> Self {
                let mut r = self;
                r.set_half();
                r
            }

            #[inline(always)]
            pub fn mul2(self) -> Self {
                let mut r = self;
                r.set_add(&self);
                r
            }

            // Raise this value to a public exponent given as N limbs,
            // with a 4-bit fixed window.
            fn set_modpow_pubexp(&mut self, e: &[u64; N]) {
                let mut win = [Self::ZERO; 15];
                win[0] = *self;
                for i in 1..8 {
                    let j = i * 2;
                    win[j - 1] = win[i - 1].square();
                    win[j] = win[j - 1] * win[0];
                }

                let mut z = false;
                for i in (0..N).rev() {
                    let ew = e[i];
                    for j in (0..16).rev() {
                        if z {
                            self.set_xsquare(4);
                        }
                        let c = ((ew >> (j << 2)) & 0x0F) as usize;
                        if c != 0 {
                            if z {
                                self.set_mul(&win[c - 1]);
                            } else {
                                z = true;
                                *self = win[c - 1];
                            }
                        }
                    }
                }
                if !z {
                    *self = Self::ONE;
                }
            }

            /// Inversion by Fermat's little theorem. Zero maps to zero.
            pub fn invert(self) -> Self {
                let mut r = self;
                r.set_modpow_pubexp(&INV_EXP);
                r
            }

            /// Invert all elements of the slice in place with a single field
            /// inversion (Montgomery's trick). Zero entries stay zero.
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

            /// Legendre symbol: 0 for zero, 1 for a non-zero square,
            /// -1 otherwise.
            pub fn legendre(self) -> i32 {
                let mut r = self;
                r.set_modpow_pubexp(&LEGENDRE_EXP);
                let is_one = r.equals(&Self::ONE);
                let is_zero = r.iszero();
                let v = (is_one & 1) | (!is_one & !is_zero & 0xFFFFFFFF);
                v as i32
            }

            /// Candidate square root x^((p+1)/4), with status 0xFFFFFFFF if
            /// it squares back to this value. When this value is not a
            /// square, the candidate is a square root of its negation.
            pub fn sqrt_ext(self) -> (Self, u32) {
                let mut r = self;
                r.set_modpow_pubexp(&SQRT_EXP);
                let ok = r.square().equals(&self);
                (r, ok)
            }

            /// Square root, with status 0xFFFFFFFF on success. On failure
            /// the returned value is zero.
            pub fn sqrt(self) -> (Self, u32) {
                let (mut r, ok) = self.sqrt_ext();
                r.set_cond(&Self::ZERO, !ok);
                (r, ok)
            }

            /// Constant-time equality; 0xFFFFFFFF on equality, 0 otherwise.
            #[inline]
            pub fn equals(&self, rhs: &Self) -> u32 {
                let mut r = 0;
                for i in 0..N {
                    r |= self.0[i] ^ rhs.0[i];
                }
                ((r | r.wrapping_neg()) >> 63).wrapping_sub(1) as u32
            }

            #[inline]
            pub fn iszero(&self) -> u32 {
                let mut r = 0;
                for i in 0..N {
                    r |= self.0[i];
                }
                ((r | r.wrapping_neg()) >> 63).wrapping_sub(1) as u32
            }

            /// Unsigned little-endian encoding of the value in [0, p-1].
            pub fn encode(&self) -> [u8; Self::ENC_LEN] {
                let mut one = [0u64; N];
                one[0] = 1;
                let x = mont_mul(&self.0, &one);
                let mut d = [0u8; Self::ENC_LEN];
                let mut j = 0;
                for i in 0..N {
                    if (j + 8) <= Self::ENC_LEN {
                        d[j..(j + 8)].copy_from_slice(&x[i].to_le_bytes());
                        j += 8;
                    } else {
                        let k = Self::ENC_LEN - j;
                        d[j..].copy_from_slice(&x[i].to_le_bytes()[..k]);
                        break;
                    }
                }
                d
            }

            // Raw little-endian decoding of at most 8*N bytes.
            fn decode_raw(buf: &[u8]) -> [u64; N] {
                let mut d = [0u64; N];
                for (i, chunk) in buf.chunks(8).take(N).enumerate() {
                    let mut tmp = [0u8; 8];
                    tmp[..chunk.len()].copy_from_slice(chunk);
                    d[i] = u64::from_le_bytes(tmp);
                }
                d
            }

            /// Strict decoding: the slice must be exactly `ENC_LEN` bytes
            /// holding a value below p. On failure, zero and status 0 are
            /// returned.
            pub fn decode(buf: &[u8]) -> (Self, u32) {
                if buf.len() != Self::ENC_LEN {
                    return (Self::ZERO, 0);
                }
                let raw = Self::decode_raw(buf);
                let mut cc = 0;
                for i in 0..N {
                    (_, cc) = sbb(raw[i], MODULUS[i], cc);
                }
                let ok = (cc as u32).wrapping_neg();
                let mut r = Self(mont_mul(&raw, &R2));
                r.set_cond(&Self::ZERO, !ok);
                (r, ok)
            }

            /// Decode an unsigned little-endian integer of any length,
            /// reduced modulo p.
            pub fn decode_reduce(buf: &[u8]) -> Self {
                let n = buf.len();
                if n == 0 {
                    return Self::ZERO;
                }

                // Chunks of 8*N bytes from the top down. The accumulator is
                // in Montgomery form; adding a raw chunk and multiplying by
                // R2 both shifts it and converts the chunk.
                let chunk_len = 8 * N;
                let mut j = n - (n % chunk_len);
                if j == n {
                    j -= chunk_len;
                }
                let mut acc = Self(mont_mul(&Self::decode_raw(&buf[j..]), &R2));
                while j >= chunk_len {
                    j -= chunk_len;
                    let x = Self::decode_raw(&buf[j..(j + chunk_len)]);
                    let mut cc = 0;
                    for i in 0..N {
                        (acc.0[i], cc) = adc(acc.0[i], x[i], cc);
                    }
                    let m = cc.wrapping_neg();
                    let mut bb = 0;
                    for i in 0..N {
                        (acc.0[i], bb) = sbb(acc.0[i], m & MODULUS[i], bb);
                    }
                    acc.0 = mont_mul(&acc.0, &R2);
                }
                acc
            }
        }

        crate::finitefield::impl_field_ops!(Fp);

        impl fmt::Display for Fp {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let mut enc = self.encode();
                enc.reverse();
                write!(f, "0x{}", hex::encode(enc))
            }
        }
    };
}

pub(crate) use define_fp_core;
