#![allow(non_snake_case)]

pub mod eccore;
pub mod error;
pub mod fields;
pub mod finitefield;
pub mod isogeny;
pub mod keys;
pub mod params;
pub mod sidh;
pub mod strategy;

pub mod ec503 {
    pub type Fq = crate::fields::Fp503Ext::Fp2;
    crate::eccore::define_ec_core! {}
    crate::isogeny::define_isogeny_structure! {}
}

pub mod ec751 {
    pub type Fq = crate::fields::Fp751Ext::Fp2;
    crate::eccore::define_ec_core! {}
    crate::isogeny::define_isogeny_structure! {}
}

pub mod sidh503 {
    pub use crate::ec503::{isogeny_walk, Curve, FourIsogeny, Fq, PointX, ThreeIsogeny};
    use crate::fields::Fp503Ext::{A0, XPA, XPB, XQA, XQB, XRA, XRB};
    const FIELD: crate::params::FieldId = crate::params::FieldId::P503;
    crate::sidh::define_sidh_engine! {}
}

pub mod sidh751 {
    pub use crate::ec751::{isogeny_walk, Curve, FourIsogeny, Fq, PointX, ThreeIsogeny};
    use crate::fields::Fp751Ext::{A0, XPA, XPB, XQA, XQB, XRA, XRB};
    const FIELD: crate::params::FieldId = crate::params::FieldId::P751;
    crate::sidh::define_sidh_engine! {}
}

pub use error::{Error, Result};
pub use keys::{PrivateKey, PublicKey};
pub use params::{params, FieldId, FieldParams, Role};
pub use sidh::{derive_secret, SharedSecret};
