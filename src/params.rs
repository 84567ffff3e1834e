//! Parameter sets and per-role domain parameters.
//!
//! The arithmetic constants live in `crate::fields`; this module carries the
//! sizes and exponents the key layer needs, looked up by `FieldId`.
use std::fmt;

use crate::fields::{Fp503, Fp503Ext, Fp751, Fp751Ext};

/// Identifier of a supported prime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// p = 2^250 * 3^159 - 1
    P503,
    /// p = 2^372 * 3^239 - 1
    P751,
}

impl FieldId {
    pub const ALL: [FieldId; 2] = [FieldId::P503, FieldId::P751];

    pub fn name(&self) -> &'static str {
        params(*self).name
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Side of the exchange. Role A walks 2-power isogenies, role B 3-power ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    A,
    B,
}

impl Role {
    /// The role on the other side of an exchange.
    pub fn peer(&self) -> Role {
        match self {
            Role::A => Role::B,
            Role::B => Role::A,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::A => f.write_str("A"),
            Role::B => f.write_str("B"),
        }
    }
}

/// Sizes and exponents for one (field, role) pair.
#[derive(Clone, Copy, Debug)]
pub struct DomainParams {
    /// Number of elementary isogenies (degree 4 for A, degree 3 for B)
    pub isogeny_steps: usize,
    /// Private scalars are strictly below 2^secret_bit_len
    pub secret_bit_len: usize,
    pub secret_byte_len: usize,
}

/// One supported prime and its derived sizes.
#[derive(Debug)]
pub struct FieldParams {
    pub id: FieldId,
    pub name: &'static str,
    /// Bit length of p
    pub bitlen: usize,
    /// Encoded length of a base field element
    pub fp_len: usize,
    pub e2: usize,
    pub e3: usize,
    pub domain_a: DomainParams,
    pub domain_b: DomainParams,
}

impl FieldParams {
    pub fn domain(&self, role: Role) -> &DomainParams {
        match role {
            Role::A => &self.domain_a,
            Role::B => &self.domain_b,
        }
    }

    /// x(P), x(Q) and x(P - Q), each an element of GF(p^2)
    pub fn public_key_len(&self) -> usize {
        6 * self.fp_len
    }

    /// Encoding of a j-invariant in GF(p^2)
    pub fn shared_secret_len(&self) -> usize {
        2 * self.fp_len
    }
}

const fn domain_a(e2: usize) -> DomainParams {
    DomainParams {
        isogeny_steps: e2 / 2,
        secret_bit_len: e2,
        secret_byte_len: (e2 + 7) / 8,
    }
}

// three_bits is the bit length of 3^e3
const fn domain_b(e3: usize, three_bits: usize) -> DomainParams {
    DomainParams {
        isogeny_steps: e3,
        secret_bit_len: three_bits,
        secret_byte_len: (three_bits + 7) / 8,
    }
}

static P503_PARAMS: FieldParams = FieldParams {
    id: FieldId::P503,
    name: "P-503",
    bitlen: Fp503::Fp::BITLEN,
    fp_len: Fp503::Fp::ENC_LEN,
    e2: Fp503Ext::E2,
    e3: Fp503Ext::E3,
    domain_a: domain_a(Fp503Ext::E2),
    domain_b: domain_b(Fp503Ext::E3, 253),
};

static P751_PARAMS: FieldParams = FieldParams {
    id: FieldId::P751,
    name: "P-751",
    bitlen: Fp751::Fp::BITLEN,
    fp_len: Fp751::Fp::ENC_LEN,
    e2: Fp751Ext::E2,
    e3: Fp751Ext::E3,
    domain_a: domain_a(Fp751Ext::E2),
    domain_b: domain_b(Fp751Ext::E3, 379),
};

/// Parameter set for a field identifier.
pub fn params(id: FieldId) -> &'static FieldParams {
    match id {
        FieldId::P503 => &P503_PARAMS,
        FieldId::P751 => &P751_PARAMS,
    }
}
