//! SIDH key agreement.
//!
//! `define_sidh_engine` builds the per-field protocol functions on raw
//! scalars and x-coordinates; `derive_secret` dispatches typed keys to the
//! right engine.
//!
//! Macro expectations:
//! Fq, Curve, PointX              curve types of the field
//! FourIsogeny, ThreeIsogeny      elementary isogenies
//! isogeny_walk                   strategy-driven composite isogeny
//! A0, XPA, XQA, XRA, XPB, XQB, XRB   starting curve and torsion bases
//! FIELD                          the `FieldId` of the field
use std::fmt;

use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey, PublicPoints};
use crate::params::Role;

macro_rules! define_sidh_engine {
    () => {
        use crate::params::{params, Role};
        use crate::strategy::strategy;

        fn to_affine(points: &[PointX]) -> [Fq; 3] {
            let xs = PointX::batch_x(points);
            [xs[0], xs[1], xs[2]]
        }

        /// Public key of role A for the scalar m: the x-coordinates of the
        /// images of PB, QB and PB - QB under the isogeny with kernel
        /// PA + [m]QA.
        pub fn public_key_a(secret: &[u8]) -> [Fq; 3] {
            let domain = params(FIELD).domain(Role::A);
            let E0 = Curve::new(&A0);
            let kernel = E0.ladder3pt(&XPA, &XQA, &XRA, secret, domain.secret_bit_len);
            let images = [
                PointX::from_x(&XPB),
                PointX::from_x(&XQB),
                PointX::from_x(&XRB),
            ];
            let (_, images) = isogeny_walk::<FourIsogeny>(
                &E0.a24_doubling(),
                &kernel,
                &images,
                domain.isogeny_steps,
                strategy(FIELD, Role::A),
            );
            to_affine(&images)
        }

        /// Public key of role B for the scalar m: the x-coordinates of the
        /// images of PA, QA and PA - QA under the isogeny with kernel
        /// PB + [m]QB.
        pub fn public_key_b(secret: &[u8]) -> [Fq; 3] {
            let domain = params(FIELD).domain(Role::B);
            let E0 = Curve::new(&A0);
            let kernel = E0.ladder3pt(&XPB, &XQB, &XRB, secret, domain.secret_bit_len);
            let images = [
                PointX::from_x(&XPA),
                PointX::from_x(&XQA),
                PointX::from_x(&XRA),
            ];
            let (_, images) = isogeny_walk::<ThreeIsogeny>(
                &E0.a24_tripling(),
                &kernel,
                &images,
                domain.isogeny_steps,
                strategy(FIELD, Role::B),
            );
            to_affine(&images)
        }

        /// j-invariant reached by role A from role B's public key.
        pub fn shared_secret_a(secret: &[u8], peer: &[Fq; 3]) -> Fq {
            let domain = params(FIELD).domain(Role::A);
            let E = Curve::from_basis_x(&peer[0], &peer[1], &peer[2]);
            let kernel = E.ladder3pt(&peer[0], &peer[1], &peer[2], secret, domain.secret_bit_len);
            let ((A24plus, C24), _) = isogeny_walk::<FourIsogeny>(
                &E.a24_doubling(),
                &kernel,
                &[],
                domain.isogeny_steps,
                strategy(FIELD, Role::A),
            );
            // (A + 2C : 4C) -> (4A : 4C)
            Curve::new_projective(&(A24plus.mul2() - C24).mul2(), &C24).j_invariant()
        }

        /// j-invariant reached by role B from role A's public key.
        pub fn shared_secret_b(secret: &[u8], peer: &[Fq; 3]) -> Fq {
            let domain = params(FIELD).domain(Role::B);
            let E = Curve::from_basis_x(&peer[0], &peer[1], &peer[2]);
            let kernel = E.ladder3pt(&peer[0], &peer[1], &peer[2], secret, domain.secret_bit_len);
            let ((A24minus, A24plus), _) = isogeny_walk::<ThreeIsogeny>(
                &E.a24_tripling(),
                &kernel,
                &[],
                domain.isogeny_steps,
                strategy(FIELD, Role::B),
            );
            // (A - 2C : A + 2C) -> (4A : 4C)
            Curve::new_projective(&(A24plus + A24minus).mul2(), &(A24plus - A24minus))
                .j_invariant()
        }

        pub fn public_key(role: Role, secret: &[u8]) -> [Fq; 3] {
            match role {
                Role::A => public_key_a(secret),
                Role::B => public_key_b(secret),
            }
        }

        pub fn shared_secret(role: Role, secret: &[u8], peer: &[Fq; 3]) -> Fq {
            match role {
                Role::A => shared_secret_a(secret, peer),
                Role::B => shared_secret_b(secret, peer),
            }
        }

        pub fn encode_public_key(pk: &[Fq; 3]) -> Vec<u8> {
            let mut out = Vec::with_capacity(3 * Fq::ENC_LEN);
            for x in pk.iter() {
                out.extend_from_slice(&x.encode());
            }
            out
        }

        /// Decode three concatenated elements, reducing each half modulo p.
        /// The caller checks that `bytes` is exactly 3 * `Fq::ENC_LEN` long.
        pub fn decode_public_key(bytes: &[u8]) -> [Fq; 3] {
            let mut pk = [Fq::ZERO; 3];
            for (x, chunk) in pk.iter_mut().zip(bytes.chunks(Fq::ENC_LEN)) {
                *x = Fq::decode_reduce(chunk);
            }
            pk
        }
    };
}

pub(crate) use define_sidh_engine;

/// Shared secret: the canonical encoding of the j-invariant of the final
/// curve, `shared_secret_len()` bytes for the field.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(Vec<u8>);

/// Constant-time in the contents; only the lengths leak.
impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        let mut r = 0u32;
        for (x, y) in self.0.iter().zip(other.0.iter()) {
            r |= (x ^ y) as u32;
        }
        // 0xFFFFFFFF if all bytes matched, 0 otherwise
        let mask = ((r | r.wrapping_neg()) >> 31).wrapping_sub(1);
        mask != 0
    }
}

impl Eq for SharedSecret {}

impl SharedSecret {
    pub fn size(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SharedSecret([REDACTED; {}])", self.0.len())
    }
}

/// Derive the shared secret from our private key and the peer's public key.
/// Both keys must belong to the same field and to opposite roles.
pub fn derive_secret(own: &PrivateKey, peer: &PublicKey) -> Result<SharedSecret> {
    if own.field() != peer.field() || own.role().peer() != peer.role() {
        return Err(Error::MismatchedParameters {
            own_field: own.field(),
            own_role: own.role(),
            peer_field: peer.field(),
            peer_role: peer.role(),
        });
    }

    debug!("deriving shared secret for {}/{}", own.field(), own.role());
    let role: Role = own.role();
    let secret = match peer.points() {
        PublicPoints::P503(pk) => crate::sidh503::shared_secret(role, own.scalar(), pk)
            .encode()
            .to_vec(),
        PublicPoints::P751(pk) => crate::sidh751::shared_secret(role, own.scalar(), pk)
            .encode()
            .to_vec(),
    };
    Ok(SharedSecret(secret))
}
