//! Macro for defining the following types:
//! - PointX: a point on the Kummer line of a Montgomery curve, (X : Z)
//! - Curve: a Montgomery curve y^2 = x^3 + (A/C)x^2 + x with projective coefficient
//!
//! together with the x-only formulas (doubling, tripling, differential
//! addition, ladder step) used by the isogeny walks.
//!
//! Macro expectations:
//! Fq      type of field element Fp^2

macro_rules! define_ec_core {
    () => {
        use std::fmt;

        /// Kummer line point (X : Z). The point at infinity is (1 : 0).
        #[derive(Clone, Copy, Debug)]
        pub struct PointX {
            X: Fq,
            Z: Fq,
        }

        impl PointX {
            pub const INFINITY: Self = Self {
                X: Fq::ONE,
                Z: Fq::ZERO,
            };

            pub const fn new_xz(X: &Fq, Z: &Fq) -> Self {
                Self { X: *X, Z: *Z }
            }

            /// Affine x-coordinate, as (x : 1)
            pub const fn from_x(x: &Fq) -> Self {
                Self { X: *x, Z: Fq::ONE }
            }

            pub fn to_xz(&self) -> (Fq, Fq) {
                (self.X, self.Z)
            }

            /// 0xFFFFFFFF for the point at infinity, 0 otherwise.
            pub fn isinfinity(&self) -> u32 {
                self.Z.iszero()
            }

            /// Affine x-coordinate X/Z; infinity maps to zero.
            pub fn x(&self) -> Fq {
                self.X / self.Z
            }

            /// Projective equality, X1*Z2 == X2*Z1.
            pub fn equals(&self, other: &Self) -> u32 {
                let lhs = self.X * other.Z;
                let rhs = other.X * self.Z;
                let both_inf = self.isinfinity() & other.isinfinity();
                let none_inf = !self.isinfinity() & !other.isinfinity();
                both_inf | (none_inf & lhs.equals(&rhs))
            }

            pub fn cswap(P: &mut Self, Q: &mut Self, ctl: u32) {
                Fq::cswap(&mut P.X, &mut Q.X, ctl);
                Fq::cswap(&mut P.Z, &mut Q.Z, ctl);
            }

            /// Normalize a batch of points to affine x-coordinates with a
            /// single inversion.
            pub fn batch_x(points: &[Self]) -> Vec<Fq> {
                let mut zs: Vec<Fq> = points.iter().map(|P| P.Z).collect();
                Fq::batch_invert(&mut zs);
                points.iter().zip(zs.iter()).map(|(P, zi)| P.X * zi).collect()
            }
        }

        impl fmt::Display for PointX {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                if self.isinfinity() != 0 {
                    write!(f, "(1 : 0)")
                } else {
                    write!(f, "x = {}", self.x())
                }
            }
        }

        // ========================================================
        // x-only formulas on projective curve constants
        // ========================================================

        /// Doubling, with (A24plus : C24) = (A + 2C : 4C).
        /// Cost: 4M + 2S
        #[inline]
        pub fn xdbl(P: &PointX, A24plus: &Fq, C24: &Fq) -> PointX {
            let t0 = (P.X - P.Z).square();
            let mut t1 = (P.X + P.Z).square();
            let mut Z = C24 * t0;
            let X = Z * t1;
            t1 -= t0;
            Z += A24plus * t1;
            Z *= t1;
            PointX { X, Z }
        }

        /// Repeated doubling, [2^e]P
        pub fn xdble(P: &PointX, A24plus: &Fq, C24: &Fq, e: usize) -> PointX {
            let mut Q = *P;
            for _ in 0..e {
                Q = xdbl(&Q, A24plus, C24);
            }
            Q
        }

        /// Tripling, with (A24minus : A24plus) = (A - 2C : A + 2C).
        /// Cost: 7M + 5S
        #[inline]
        pub fn xtpl(P: &PointX, A24minus: &Fq, A24plus: &Fq) -> PointX {
            let mut t0 = P.X - P.Z;
            let mut t2 = t0.square();
            let mut t1 = P.X + P.Z;
            let mut t3 = t1.square();
            let t4 = t1 + t0;
            t0 = t1 - t0;
            t1 = t4.square();
            t1 -= t3;
            t1 -= t2;
            let t5 = t3 * A24plus;
            t3 *= t5;
            let t6 = t2 * A24minus;
            t2 *= t6;
            t3 = t2 - t3;
            t2 = t5 - t6;
            t1 *= t2;
            t2 = (t3 + t1).square();
            let X = t4 * t2;
            t1 = (t3 - t1).square();
            let Z = t0 * t1;
            PointX { X, Z }
        }

        /// Repeated tripling, [3^e]P
        pub fn xtple(P: &PointX, A24minus: &Fq, A24plus: &Fq, e: usize) -> PointX {
            let mut Q = *P;
            for _ in 0..e {
                Q = xtpl(&Q, A24minus, A24plus);
            }
            Q
        }

        /// Differential addition: x(P + Q) from x(P), x(Q) and x(P - Q).
        /// Cost: 4M + 2S
        #[inline]
        pub fn xadd(P: &PointX, Q: &PointX, PQ: &PointX) -> PointX {
            let t0 = (P.X - P.Z) * (Q.X + Q.Z);
            let t1 = (P.X + P.Z) * (Q.X - Q.Z);
            let X = PQ.Z * (t0 + t1).square();
            let Z = PQ.X * (t0 - t1).square();
            PointX { X, Z }
        }

        /// Ladder step: ([2]P, P + Q) given the affine x(Q - P) and the
        /// affine constant A24 = (A + 2)/4.
        /// Cost: 6M + 4S
        #[inline]
        pub fn xdbladd(P: &PointX, Q: &PointX, xPQ: &Fq, A24: &Fq) -> (PointX, PointX) {
            let mut t0 = P.X + P.Z;
            let mut t1 = P.X - P.Z;
            let mut XP = t0.square();
            let mut t2 = Q.X - Q.Z;
            let mut XQ = Q.X + Q.Z;
            t0 *= t2;
            let mut ZP = t1.square();
            t1 *= XQ;
            t2 = XP - ZP;
            XP *= ZP;
            XQ = A24 * t2;
            let mut ZQ = t0 - t1;
            ZP += XQ;
            XQ = t0 + t1;
            ZP *= t2;
            ZQ = ZQ.square();
            XQ = XQ.square();
            ZQ *= xPQ;
            (PointX { X: XP, Z: ZP }, PointX { X: XQ, Z: ZQ })
        }

        // ========================================================
        // Montgomery curves
        // ========================================================

        /// Montgomery curve y^2 = x^3 + (A/C)x^2 + x.
        #[derive(Clone, Copy, Debug)]
        pub struct Curve {
            A: Fq,
            C: Fq,
        }

        impl Curve {
            pub const fn new(A: &Fq) -> Self {
                Self { A: *A, C: Fq::ONE }
            }

            pub const fn new_projective(A: &Fq, C: &Fq) -> Self {
                Self { A: *A, C: *C }
            }

            /// Recover the curve from the affine x-coordinates of P, Q and
            /// P - Q: A = (1 - xP*xQ - xP*xR - xQ*xR)^2 / (4*xP*xQ*xR) - xP - xQ - xR
            pub fn from_basis_x(xP: &Fq, xQ: &Fq, xR: &Fq) -> Self {
                let mut t1 = xP + xQ;
                let mut t0 = xP * xQ;
                let mut A = xR * t1;
                A += t0;
                t0 *= xR;
                A -= Fq::ONE;
                t0 = t0.mul2().mul2();
                t1 += xR;
                A = A.square();
                A *= t0.invert();
                A -= t1;
                Self::new(&A)
            }

            /// Affine Montgomery coefficient A/C
            pub fn get_constant(&self) -> Fq {
                self.A / self.C
            }

            /// (A + 2C : 4C), the constants used by doubling
            pub fn a24_doubling(&self) -> (Fq, Fq) {
                let C2 = self.C.mul2();
                (self.A + C2, C2.mul2())
            }

            /// (A - 2C : A + 2C), the constants used by tripling
            pub fn a24_tripling(&self) -> (Fq, Fq) {
                let C2 = self.C.mul2();
                (self.A - C2, self.A + C2)
            }

            pub fn double(&self, P: &PointX) -> PointX {
                let (A24plus, C24) = self.a24_doubling();
                xdbl(P, &A24plus, &C24)
            }

            pub fn double_iter(&self, P: &PointX, n: usize) -> PointX {
                let (A24plus, C24) = self.a24_doubling();
                xdble(P, &A24plus, &C24, n)
            }

            pub fn triple(&self, P: &PointX) -> PointX {
                let (A24minus, A24plus) = self.a24_tripling();
                xtpl(P, &A24minus, &A24plus)
            }

            pub fn triple_iter(&self, P: &PointX, n: usize) -> PointX {
                let (A24minus, A24plus) = self.a24_tripling();
                xtple(P, &A24minus, &A24plus, n)
            }

            /// x(P + [m]Q) from the affine x-coordinates of P, Q and P - Q.
            /// The scalar m is little-endian; exactly `nbits` ladder steps
            /// are executed whatever its value, with constant-time swaps.
            pub fn ladder3pt(&self, xP: &Fq, xQ: &Fq, xPQ: &Fq, m: &[u8], nbits: usize) -> PointX {
                let A24 = (self.A + self.C.mul2()) * self.C.mul2().mul2().invert();

                let mut R0 = PointX::from_x(xQ);
                let mut R2 = PointX::from_x(xPQ);
                let mut R = PointX::from_x(xP);

                let mut prevbit = 0u32;
                for i in 0..nbits {
                    let byte = m.get(i >> 3).copied().unwrap_or(0);
                    let bit = ((byte >> (i & 7)) & 1) as u32;
                    let swap = bit ^ prevbit;
                    prevbit = bit;
                    PointX::cswap(&mut R, &mut R2, swap.wrapping_neg());
                    (R0, R2) = xdbladd(&R0, &R2, &R.X, &A24);
                    R2.X *= R.Z;
                }
                PointX::cswap(&mut R, &mut R2, prevbit.wrapping_neg());
                R
            }

            /// j-invariant 256*(A^2 - 3C^2)^3 / (C^4*(A^2 - 4C^2))
            pub fn j_invariant(&self) -> Fq {
                let mut jinv = self.A.square();
                let mut t1 = self.C.square();
                let mut t0 = t1.mul2();
                t0 = jinv - t0;
                t0 -= t1;
                jinv = t0 - t1;
                t1 = t1.square();
                jinv *= t1;
                t0 = t0.mul2().mul2();
                t1 = t0.square();
                t0 *= t1;
                t0 = t0.mul2().mul2();
                jinv = jinv.invert();
                jinv * t0
            }

            /// y-coordinate of a point with affine abscissa x, with status
            /// 0xFFFFFFFF when x^3 + (A/C)x^2 + x is a square in Fq and 0
            /// otherwise.
            pub fn lift_x(&self, x: &Fq) -> (Fq, u32) {
                let a = self.get_constant();
                let rhs = ((x + a) * x + Fq::ONE) * x;
                rhs.sqrt()
            }
        }

        impl fmt::Display for Curve {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "Montgomery curve with A = {}", self.get_constant())
            }
        }
    };
}

pub(crate) use define_ec_core;
