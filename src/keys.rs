//! Private and public keys for both roles over both fields.
use std::fmt;

use log::{debug, trace};
use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::params::{params, FieldId, Role};
use crate::{ec503, ec751};

/// Secret scalar of one role, stored little-endian over the role's
/// `secret_byte_len` bytes. The bytes are wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    #[zeroize(skip)]
    field: FieldId,
    #[zeroize(skip)]
    role: Role,
    scalar: Vec<u8>,
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("field", &self.field)
            .field("role", &self.role)
            .field("scalar", &"[REDACTED]")
            .finish()
    }
}

// 0xFFFFFFFF if a < b, 0 otherwise; both little-endian of the same length
fn ct_lt(a: &[u8], b: &[u8]) -> u32 {
    let mut borrow = 0u16;
    for (x, y) in a.iter().zip(b.iter()) {
        let d = (*x as u16).wrapping_sub(*y as u16).wrapping_sub(borrow);
        borrow = (d >> 15) & 1;
    }
    (borrow as u32).wrapping_neg()
}

// 3*a in place; the caller guarantees no overflow out of the top byte
fn mul3(a: &mut [u8]) {
    let mut carry = 0u16;
    for x in a.iter_mut() {
        let v = 3 * (*x as u16) + carry;
        *x = v as u8;
        carry = v >> 8;
    }
}

fn mask_to_bits(a: &mut [u8], bits: usize) {
    let full = bits / 8;
    let rem = bits % 8;
    for (i, x) in a.iter_mut().enumerate() {
        if i > full || (i == full && rem == 0) {
            *x = 0;
        } else if i == full {
            *x &= (1u8 << rem) - 1;
        }
    }
}

impl PrivateKey {
    /// Draw a fresh private key from `rng`.
    ///
    /// Role A scalars are even with at most e2 bits. Role B scalars are
    /// multiples of 3 below 3^e3, obtained as 3*r with r drawn uniformly
    /// below 3^(e3 - 1) by rejection sampling.
    pub fn generate<R: RngCore + CryptoRng>(field: FieldId, role: Role, rng: &mut R) -> Result<Self> {
        let fp = params(field);
        let domain = fp.domain(role);
        let mut scalar = vec![0u8; domain.secret_byte_len];

        match role {
            Role::A => {
                rng.try_fill_bytes(&mut scalar)?;
                mask_to_bits(&mut scalar, domain.secret_bit_len);
                scalar[0] &= 0xFE;
            }
            Role::B => {
                let bound = BigUint::from(3u32).pow((fp.e3 - 1) as u32);
                let bound_bits = bound.bits() as usize;
                let mut bound_bytes = bound.to_bytes_le();
                bound_bytes.resize(scalar.len(), 0);

                let mut rounds = 0usize;
                loop {
                    rounds += 1;
                    rng.try_fill_bytes(&mut scalar)?;
                    mask_to_bits(&mut scalar, bound_bits);
                    if ct_lt(&scalar, &bound_bytes) != 0 {
                        break;
                    }
                }
                mul3(&mut scalar);
                debug!("role B scalar for {} accepted after {} draws", field, rounds);
            }
        }

        debug!("generated private key for {}/{}", field, role);
        Ok(PrivateKey { field, role, scalar })
    }

    /// Import a private key. Only the length is checked.
    pub fn import(field: FieldId, role: Role, bytes: &[u8]) -> Result<Self> {
        let expected = params(field).domain(role).secret_byte_len;
        if bytes.len() != expected {
            return Err(Error::InvalidEncoding {
                context: "private key",
                expected,
                got: bytes.len(),
            });
        }
        trace!("imported private key for {}/{}: {} bytes", field, role, bytes.len());
        Ok(PrivateKey { field, role, scalar: bytes.to_vec() })
    }

    pub fn export(&self) -> Vec<u8> {
        self.scalar.clone()
    }

    pub fn size(&self) -> usize {
        self.scalar.len()
    }

    pub fn field(&self) -> FieldId {
        self.field
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub(crate) fn scalar(&self) -> &[u8] {
        &self.scalar
    }

    /// Compute the public key matching this private key.
    pub fn public_key(&self) -> PublicKey {
        let points = match self.field {
            FieldId::P503 => PublicPoints::P503(crate::sidh503::public_key(self.role, &self.scalar)),
            FieldId::P751 => PublicPoints::P751(crate::sidh751::public_key(self.role, &self.scalar)),
        };
        debug!("computed public key for {}/{}", self.field, self.role);
        PublicKey { role: self.role, points }
    }
}

/// x-coordinates of the images of the peer's torsion basis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PublicPoints {
    P503([ec503::Fq; 3]),
    P751([ec751::Fq; 3]),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    role: Role,
    points: PublicPoints,
}

impl PublicKey {
    /// Import a public key of exactly `public_key_len()` bytes. Each of the
    /// six coordinate halves is reduced modulo p; no further validation is
    /// performed.
    ///
    /// A non-canonical encoding (some half at or above p) is accepted and
    /// reduced, so `export()` then returns the canonical bytes, which differ
    /// from the input. Keys whose points are not a valid basis (all zeros,
    /// for instance) are accepted as well; deriving a secret from them
    /// yields meaningless bytes but never panics.
    pub fn import(field: FieldId, role: Role, bytes: &[u8]) -> Result<Self> {
        let expected = params(field).public_key_len();
        if bytes.len() != expected {
            return Err(Error::InvalidEncoding {
                context: "public key",
                expected,
                got: bytes.len(),
            });
        }
        let points = match field {
            FieldId::P503 => PublicPoints::P503(crate::sidh503::decode_public_key(bytes)),
            FieldId::P751 => PublicPoints::P751(crate::sidh751::decode_public_key(bytes)),
        };
        trace!("imported public key for {}/{}: {} bytes", field, role, bytes.len());
        Ok(PublicKey { role, points })
    }

    pub fn export(&self) -> Vec<u8> {
        let out = match &self.points {
            PublicPoints::P503(pk) => crate::sidh503::encode_public_key(pk),
            PublicPoints::P751(pk) => crate::sidh751::encode_public_key(pk),
        };
        trace!("exported public key for {}/{}: {} bytes", self.field(), self.role, out.len());
        out
    }

    pub fn size(&self) -> usize {
        params(self.field()).public_key_len()
    }

    pub fn field(&self) -> FieldId {
        match self.points {
            PublicPoints::P503(_) => FieldId::P503,
            PublicPoints::P751(_) => FieldId::P751,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub(crate) fn points(&self) -> &PublicPoints {
        &self.points
    }
}
