//! Macro for defining the following types:
//! - FourIsogeny, ThreeIsogeny: elementary isogenies between Montgomery curves,
//!   computed and evaluated with x-only formulas on projective constants
//! - isogeny_walk: a composite isogeny of degree 4^n or 3^n following an
//!   optimal strategy
//!
//! Macro expectations:
//! Fq      type of field element Fp^2
//! PointX  type of point on the Kummer line of a montgomery curve
//! xdble, xtple   repeated doubling and tripling on projective constants

macro_rules! define_isogeny_structure {
    () => {
        /// An isogeny of small prime power degree whose codomain is
        /// described by a pair of projective curve constants.
        pub trait ElementaryIsogeny: Sized {
            /// Compute the isogeny with kernel generated by `kernel`, together
            /// with the constants of its codomain.
            fn from_kernel(kernel: &PointX) -> (Self, (Fq, Fq));

            /// Image of a point.
            fn evaluate(&self, P: &PointX) -> PointX;

            /// Multiply a point by deg^m on the curve with the given constants.
            fn advance(P: &PointX, constants: &(Fq, Fq), m: usize) -> PointX;
        }

        /// 4-isogeny with kernel generated by a point of order 4 other than
        /// a point above (0, 0). Curve constants are (A + 2C : 4C).
        #[derive(Clone, Copy, Debug)]
        pub struct FourIsogeny {
            K: [Fq; 3],
        }

        impl ElementaryIsogeny for FourIsogeny {
            /// Cost: 4S + 5a
            fn from_kernel(kernel: &PointX) -> (Self, (Fq, Fq)) {
                let (X4, Z4) = kernel.to_xz();
                let K1 = X4 - Z4;
                let K2 = X4 + Z4;
                let mut K0 = Z4.square().mul2();
                let C24 = K0.square();
                K0 = K0.mul2();
                let A24plus = X4.square().mul2().square();
                (FourIsogeny { K: [K0, K1, K2] }, (A24plus, C24))
            }

            /// Cost: 6M + 2S + 6a
            fn evaluate(&self, P: &PointX) -> PointX {
                let (X, Z) = P.to_xz();
                let mut t0 = X + Z;
                let mut t1 = X - Z;
                let mut X = t0 * self.K[1];
                let mut Z = t1 * self.K[2];
                t0 *= t1;
                t0 *= self.K[0];
                t1 = X + Z;
                Z = X - Z;
                t1 = t1.square();
                Z = Z.square();
                X = t0 + t1;
                t0 = Z - t0;
                X *= t1;
                Z *= t0;
                PointX::new_xz(&X, &Z)
            }

            fn advance(P: &PointX, constants: &(Fq, Fq), m: usize) -> PointX {
                xdble(P, &constants.0, &constants.1, 2 * m)
            }
        }

        /// 3-isogeny with kernel generated by a point of order 3. Curve
        /// constants are (A - 2C : A + 2C).
        #[derive(Clone, Copy, Debug)]
        pub struct ThreeIsogeny {
            K: [Fq; 2],
        }

        impl ElementaryIsogeny for ThreeIsogeny {
            /// Cost: 2M + 3S + 14a
            fn from_kernel(kernel: &PointX) -> (Self, (Fq, Fq)) {
                let (X3, Z3) = kernel.to_xz();
                let K0 = X3 - Z3;
                let t0 = K0.square();
                let K1 = X3 + Z3;
                let t1 = K1.square();
                let mut t2 = t0 + t1;
                let mut t3 = (K0 + K1).square();
                t3 -= t2;
                t2 = t1 + t3;
                t3 += t0;
                let mut t4 = (t3 + t0).mul2();
                t4 += t1;
                let A24minus = t2 * t4;
                t4 = (t1 + t2).mul2();
                t4 += t0;
                let A24plus = t3 * t4;
                (ThreeIsogeny { K: [K0, K1] }, (A24minus, A24plus))
            }

            /// Cost: 4M + 2S + 4a
            fn evaluate(&self, P: &PointX) -> PointX {
                let (X, Z) = P.to_xz();
                let mut t0 = X + Z;
                let mut t1 = X - Z;
                t0 *= self.K[0];
                t1 *= self.K[1];
                let t2 = (t0 + t1).square();
                t0 = (t1 - t0).square();
                PointX::new_xz(&(X * t2), &(Z * t0))
            }

            fn advance(P: &PointX, constants: &(Fq, Fq), m: usize) -> PointX {
                xtple(P, &constants.0, &constants.1, m)
            }
        }

        /// Walk the isogeny of degree deg^n with kernel generated by `kernel`,
        /// starting from the curve with constants `domain`, and push the
        /// `image_points` through it. Returns the constants of the final
        /// codomain and the images.
        ///
        /// The kernel must have order exactly deg^n; this is not checked.
        pub fn isogeny_walk<I: ElementaryIsogeny>(
            domain: &(Fq, Fq),
            kernel: &PointX,
            image_points: &[PointX],
            n: usize,
            strategy: &[usize],
        ) -> ((Fq, Fq), Vec<PointX>) {
            let mut constants = *domain;
            let mut images = image_points.to_vec();

            // Pending kernel multiples; each is evaluated at every step
            let mut kernel_pts = vec![*kernel];

            // Bookkeeping for optimised strategy
            let mut strat_idx = 0;
            let mut level: Vec<usize> = vec![0];
            let mut prev: usize;

            for k in 0..n {
                prev = level.iter().sum();
                let mut K = kernel_pts[kernel_pts.len() - 1];

                while prev != (n - 1 - k) {
                    // Add the next strategy to the level
                    level.push(strategy[strat_idx]);

                    // Advance the kernel according to the strategy
                    K = I::advance(&K, &constants, strategy[strat_idx]);
                    kernel_pts.push(K);

                    // Update the strategy bookkeepping
                    prev += strategy[strat_idx];
                    strat_idx += 1;
                }

                // Clear out the used kernel point and update level
                kernel_pts.pop();
                level.pop();

                // K now has order deg
                let (phi, codomain) = I::from_kernel(&K);
                constants = codomain;
                for P in kernel_pts.iter_mut() {
                    *P = phi.evaluate(P);
                }
                for P in images.iter_mut() {
                    *P = phi.evaluate(P);
                }
            }

            (constants, images)
        }
    };
}

pub(crate) use define_isogeny_structure;
