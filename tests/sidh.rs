use std::num::NonZeroU32;

use num_bigint::BigUint;
use rand::thread_rng;
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, RngCore, SeedableRng};
use sidh_rs::{derive_secret, params, Error, FieldId, PrivateKey, PublicKey, Role};

struct Kat {
    field: FieldId,
    pr_a: &'static str,
    pr_b: &'static str,
    pk_a: &'static str,
    pk_b: &'static str,
    ss: &'static str,
}

const KAT_P503: Kat = Kat {
    field: FieldId::P503,
    pr_a: "B0AD510708F4ABCF3E0D97DC2F2FF112D9D2AAE49D97FFD1E4267F21C6E71C03",
    pr_b: "A885A8B889520A6DBAD9FB33365E5B77FDED629440A16A533F259A510F63A822",
    pk_a: "A6BADBA04518A924B20046B59AC197DCDF0EA48014C9E228C4994CCA432F360E2D527AFB06CA7C96EE5CEE19BAD53BF9218A3961CAD7EC092BD8D9EBB22A3D5133008895A3F1F6A023F91E0FE06A00A622FD6335DAC107F8EC4283DC2632F0804E64B390DAD8A2572F1947C67FDF4F8787D140CE2C6B24E752DA9A195040EDFAC27333FAE97DBDEB41DA9EEB2DB067AE7DA8C58C0EF57AEFC18A3D6BD0576FF2F1CFCAEC50C958331BF631F3D2E769790C7B6DF282B74BBC02998AD10F291D47C5A762FF84253D3B3278BDF20C8D4D4AA317BE401B884E26A1F02C7308AADB6820EBDB0D339F5A63346F3B40CACED72F544DAF51566C6E807D0E6E1E38514342432661DC9564DA07548570E256688CD9E8060D8775F95D501886D958588CACA09F2D2AE1913F996E76AF63E31A179A7A7D2A46EDA03B2BCCF9020A5AA15F9A289340B33F3AE7F97360D45F8AE1B9DD48779A57E8C45B50A02C00349CD1C58C551D68BC2A75EAFED944E8C599C288037181E997471352E24C952B",
    pk_b: "244AF1F367C2C33912750A98497CC8214BC195BD52BD76513D32ACE4B75E31F0281755C265F5565C74E3C04182B9C244071859C8588CC7F09547CEFF8F7705D260CE87D6BFF914EE7DBE4B9AF051CA420062EEBDF043AF58184495026949B06898A47046BFAE8DF3B447746184AF550553BB5D266D6E1967ACA33CAC5F399F90360D70867F2C71EF6F94FF915C7DA8BC9549FB7656E691DAEFC93CF56876E482CA2F8BE2D6CDCC374C31AD8833CABE997CC92305F38497BEC4DFD1821B004FECE16448F9A24F965EFE409A8939EEA671633D9FFCF961283E59B8834BDF7EDDB305D6275B61DA6692325432A0BAA074FC7C1F51E76208AB193A57520D40A76334EE5712BDC3E1EFB6103966F2329EDFF63082C4DFCDF6BE1C5A048630B81871B883B735748A8FD4E2D9530C272163AB18105B10015CA7456202FE1C9B92CEB1675EAE1132E582C88E47ED87B363D45F05BEA714D5E9933D7AF4071CBB5D49008F3E3DAD7DFF935EE509D5DE561842B678CCEB133D62E270E9AC3E",
    ss: "339BD8CDA31373B5F1F7331B2A1EFEA6C1C161892A812C1D974C7708B1CC83423DFF145BBFC0CBA8654EF644F7CF9D42322D9C53EDD855C08E48C161C24D348CB040AE88DDCDAE96F6267A81FADF2EFA85F13292641E2E0F443F0D9EFEBD146D56D6629AC083FA59FF7247DA7B240F3864E039104F3AED1D07A37F3A173A",
};

const KAT_P751: Kat = Kat {
    field: FieldId::P751,
    pr_a: "C09957CC83045FB4C3726384D784476ACB6FFD92E5B15B3C2D451BA063F1BD4CED8FBCF682A98DD0954D37BCAF730E",
    pr_b: "393E8510E78A16D2DC1AACA9C9D17E7E78DB630881D8599C7040D05BB5557ECAE8165C45D5366ECB37B00969740AF201",
    pk_a: "74D8EF08CB74EC99BF08B6FBE4FB3D048873B67F018E44988B9D70C564D058401D20E093C7DF0C66F022C823E5139D2EA0EE137804B4820E950B046A90B0597759A0B6A197C56270128EA089FA1A2007DDE3430B37A3E6350BD47B7F513863741C125FA63DEDAFC475C13DB59E533055B7CBE4B2F32672DF2DF97E03E29617B0E9B6A35B58ABB26527A721142701EB147C7050E1D9125DA577B08CD51C8BB50627B8B47FACFC9C7C07DD00DD75115DD83719FD5F96115DED23ECAA50B1044C6BF3F27442DA284BA4A272D850F414FB185801BF2EF7E628EDB5643E35694B992CF30A2C5120CAF9434F09ACFCA3645B3FFC3A308901FAC7B8955FD5C98576AEFD03F5806CB7430F75B3431B75BEC080596ABCA26E637E6E8D4C25175A8C052C9CBE77900A863F83FAB0095B32D9C3858EF8A35B9F163D429E71DBA47539EB4791D117FE39DDE94EA7801A42DB12D84DE4740ACF51CD7C32BB854569D7D94E11E69D9663CC7ED02E78CF48F4069DF3D3E86198B307095C6B11D46C0DC849F9D94C7693209E5B3848AFAA6DA6A8D73362D779CBC43515902ED2BCE3A748C537DE2FCF092FD3E91B790AF54E1092C5E5B89BE5BE23B955A52F769D97277EF69F820109042F28C316AC90AE69EB374C9280300B816E62494B2E01072D1CA96E4B284D2BE1368D6969744B614FACBC8C165864E26E33481D4FDC47B6E523954A25C1A096A37CD23FB81AE64FB11BD0A439609F1CE40673B06DD96F698A910E935219D840F3D411EDFB00D98065AB9868C32D3DA05FF415",
    pk_b: "F6C260C4141E418457CB442E11F0F5558375437576E55D211D19EF83E2839E51D07A82765D8E7B6366FA70B56CDE3AD3B629ACF542A433369496EDA51EDFBE16EFA1B8DEE1CE46B37820ECBD0CD674AACD4F21FABC2436651E3AF604356FF3EB2CA87976890E34A56FAEC9A2ACD9559B1BB67B69AC1A521342E1E787DA5D70932B0F5842ECA1C99B269DB6C2ED8397F0FC49F114CF8B5AF327A698C0251575CDD1D67732668109A91A3BFA5B47D413C7FAB8817FCBEBFE9BDD9C0B1F3B1934A7028A65233E8B58A92E7E9F66B68B2057ECBF7E44A0EF6EFCC3C8AA5414E100FA0C24F7545324AD17062FC11377A2A4749DEE27E192460E099DBDA8E840EA11AD9D5C83DF065AF77030E7FE18CE24CFC71D356B9B9601811B93676C12CB6B41747133D5259E7A20CC065FAB99DF944FDB34ABB9A374F9E9CC8F9C186BD2181DC2771F69C02629C3E4801A7E7C21F6F3CFF7D257E2257C88C015F0CC8DC0E7FB3373CF4ED6A786AB329E7F16895CA147AD91F6EAE1DFE38116580DF52381599E4246278CB1848FE4A56ABF98652E9E7C2E681551A3D78FA033D932087D8B6567D779A56B726B153033D72231A1B5C16ED7DC4458308D6B64AF6723CC0F52C94E04C58FCA9739E890AA40CC05E22321F10129D2B591F317102034C109A56D711591E5B44C717CFC9C9B9461894767CAFA42D2B394194B03999C2A9EF48868F3FB03D1A40F596613AF97F4ED7643A1C2D12692E959C6DEB8E72403ADC0E42204DBCE5056EEF0CC60B0C6E83B8B55AC01F6C85644EE49",
    ss: "D4F473AAFD20160E12CD8CC2BAD5C5E78BDC76C186DCEB803A879690331CA15938F771F7694B7A94A58C5CD32431F76EEACA4A470BC817D8AB8B8F979176142CBAE7EF21A7D4EC25DBC4B6F745DE758A97F250772D8AD94E9222A4BF8445F3585D32E17AAD1F5FA06D0547E354960A0F88A5CFCFABD4B219D5689A77AC8FA4BE04417858A948E1EEAE75C076D5766E7ADE3647BBD4522D5218FAC92D8D12DAE8AA200909CB9439EB84830C2A141B170287979AF800163E68CBE5EE05",
};

// Role A key whose most significant byte differs from KAT_P751.pr_a
const P751_PR_A_EVEN: &str = "C09957CC83045FB4C3726384D784476ACB6FFD92E5B15B3C2D451BA063F1BD4CED8FBCF682A98DD0954D37BCAF730F";
const P751_PK_A_EVEN: &str = "8A2DE6FD963C475F7829B689C8B8306FC0917A39EBBC35CA171546269A85698FEC0379E2E1A3C567BE1B8EF5639F81F304889737E6CC444DBED4579DB204DC8C7928F5CBB1ECDD682A1B5C48C0DAF34208C06BF201BE4E6063B1BFDC42413B0537F8E76BEE645C1A24118301BAB17EB8D6E0F283BCB16EFB833E4BB3463953C93165A0DDAC55B385059F27FF7228486D0A733812C81C792BE9EC3A16A5DB0EB099EEA76AC0E59612251A3AD19F7CC567DA2AEBD7733171F48E471D17648692355164E27B515D2A47D7BA34B3B48A047BE7C09C4ABEE2FCC9ACA7396C8A8C9E73E29533FC7369094DFA7988778E55E53F309922C6E233F8F9C7936C3D29CEA640406FCA06450AA1978FF39F227BF06B1E072F1763447C6F513B23CDF3B0EC0379070AEE5A02D9AD8E0EB023461D631F4A9643A4C79921334945F6B33DDFC11D9703BD06B047B4DA404AB12EFD2C3A49E5C42D10DA063352748B21DE41C32A5693FE1C0DCAB111F4990CD58BECADB1892EE7A7E99C9DB4DA4E69C96E57138B99038BC9B877ECE75914EFB98DD08B9E4A2DCCB948A8F7D2F26678A9952BA0EFAB1E9CF6E51B557480DEC2BA30DE0FE4AFE30A6B30765EE75EF64F678316D81C72755AD2CFA0B8C7706B07BFA52FBC3DB84EF9E79796C0089305B1E13C78660779E0FF2A13820CE141104F976B1678990F85B2D3D2B89CD5BC4DD52603A5D24D3EFEDA44BAA0F38CDB75A220AF45EAB70F2799875D435CE50FC6315EDD4BB7AA7260AFD7CD0561B69B4FA3A817904322661C3108DA24";
const P751_SS_EVEN: &str = "7DF8D24E62DAFF994C9F7A3F558CA2DC65CECC2944B95912C3312233BBA72ED8D21389B89AB905E20D983125E95D6E2655652418C5388AB2C5CA658B57FF5B85380FCFEED73D0158E4866E7CAB51F46AA763FA397F6B5B8549F18CDD22261137FD501EB9FF48F68731CACF6B971BF70BF5514235C5091CD0204CEE3BB71D826CA122DB53D01B546EA71AD77F6930E9A2C8AE34D6F6AFA7B99BB09E228C6E7266BFF53930B0B31D36FCF74D53D7FEBA147E4EBE443DA74DF9D753651C";

fn import_private(field: FieldId, role: Role, h: &str) -> PrivateKey {
    PrivateKey::import(field, role, &hex::decode(h).unwrap()).unwrap()
}

fn import_public(field: FieldId, role: Role, h: &str) -> PublicKey {
    PublicKey::import(field, role, &hex::decode(h).unwrap()).unwrap()
}

fn check_public_keys(kat: &Kat) {
    let pr_a = import_private(kat.field, Role::A, kat.pr_a);
    let pr_b = import_private(kat.field, Role::B, kat.pr_b);
    assert_eq!(hex::encode_upper(pr_a.public_key().export()), kat.pk_a);
    assert_eq!(hex::encode_upper(pr_b.public_key().export()), kat.pk_b);
}

// Both sides agree on `ss`; flipping the first byte of role A's public key
// breaks the agreement.
fn check_agreement(field: FieldId, pr_a: &str, pk_a: &str, pr_b: &str, pk_b: &str, ss: &str) {
    let alice = import_private(field, Role::A, pr_a);
    let bob = import_private(field, Role::B, pr_b);
    let alice_public = import_public(field, Role::A, pk_a);
    let bob_public = import_public(field, Role::B, pk_b);

    let s1 = derive_secret(&bob, &alice_public).unwrap();
    let s2 = derive_secret(&alice, &bob_public).unwrap();
    assert_eq!(s1, s2);
    assert_eq!(hex::encode_upper(s1.as_ref()), ss);

    let mut bytes = hex::decode(pk_a).unwrap();
    bytes[0] = !bytes[0];
    let alice_public = PublicKey::import(field, Role::A, &bytes).unwrap();
    let s1 = derive_secret(&bob, &alice_public).unwrap();
    let s2 = derive_secret(&alice, &bob_public).unwrap();
    assert_ne!(s1, s2);
}

#[test]
fn known_public_keys_p503() {
    check_public_keys(&KAT_P503);
}

#[test]
fn known_public_keys_p751() {
    check_public_keys(&KAT_P751);
}

#[test]
fn known_agreement() {
    for kat in [&KAT_P503, &KAT_P751] {
        check_agreement(kat.field, kat.pr_a, kat.pk_a, kat.pr_b, kat.pk_b, kat.ss);
    }
}

#[test]
fn known_agreement_p751_even_key() {
    let pr_a = import_private(FieldId::P751, Role::A, P751_PR_A_EVEN);
    assert_eq!(hex::encode_upper(pr_a.public_key().export()), P751_PK_A_EVEN);
    assert_ne!(P751_PK_A_EVEN, KAT_P751.pk_a);
    check_agreement(
        FieldId::P751,
        P751_PR_A_EVEN,
        P751_PK_A_EVEN,
        KAT_P751.pr_b,
        KAT_P751.pk_b,
        P751_SS_EVEN,
    );
}

#[test]
fn known_public_keys_import_export() {
    for kat in [&KAT_P503, &KAT_P751] {
        let a_bytes = hex::decode(kat.pk_a).unwrap();
        let b_bytes = hex::decode(kat.pk_b).unwrap();
        let a = PublicKey::import(kat.field, Role::A, &a_bytes).unwrap();
        let b = PublicKey::import(kat.field, Role::B, &b_bytes).unwrap();
        assert_eq!(a.export(), a_bytes);
        assert_eq!(b.export(), b_bytes);
        assert_eq!(a.export().len(), a.size());
        assert_eq!(b.export().len(), b.size());
    }
}

#[test]
fn non_canonical_public_key_is_reduced() {
    for field in FieldId::ALL {
        let len = params(field).public_key_len();
        let ones = vec![0xFFu8; len];
        let pk = PublicKey::import(field, Role::A, &ones).unwrap();
        let exported = pk.export();
        assert_eq!(exported.len(), pk.size());
        assert_ne!(exported, ones);
        // the reduced form is canonical and stable
        let again = PublicKey::import(field, Role::A, &exported).unwrap();
        assert_eq!(again, pk);
        assert_eq!(again.export(), exported);
    }
}

#[test]
fn degenerate_public_keys_do_not_panic() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    for field in FieldId::ALL {
        let len = params(field).public_key_len();
        let a = PrivateKey::generate(field, Role::A, &mut rng).unwrap();
        let b = PrivateKey::generate(field, Role::B, &mut rng).unwrap();
        for fill in [0x00u8, 0xFF] {
            let bytes = vec![fill; len];
            let as_a = PublicKey::import(field, Role::A, &bytes).unwrap();
            let as_b = PublicKey::import(field, Role::B, &bytes).unwrap();
            let ss = derive_secret(&b, &as_a).unwrap();
            assert_eq!(ss.size(), params(field).shared_secret_len());
            let ss = derive_secret(&a, &as_b).unwrap();
            assert_eq!(ss.size(), params(field).shared_secret_len());
        }
    }
}

#[test]
fn key_sizes() {
    let expected = [(FieldId::P503, 32, 32, 378, 126), (FieldId::P751, 47, 48, 564, 188)];
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for (field, len_a, len_b, pk_len, ss_len) in expected {
        let a = PrivateKey::generate(field, Role::A, &mut rng).unwrap();
        let b = PrivateKey::generate(field, Role::B, &mut rng).unwrap();
        assert_eq!(a.size(), len_a);
        assert_eq!(b.size(), len_b);
        assert_eq!(a.export().len(), len_a);

        let pk = a.public_key();
        assert_eq!(pk.size(), pk_len);
        assert_eq!(pk.export().len(), pk_len);
        assert_eq!(params(field).public_key_len(), pk_len);

        let ss = derive_secret(&b, &pk).unwrap();
        assert_eq!(ss.as_ref().len(), ss_len);
    }
}

#[test]
fn export_import_round_trip() {
    let mut rng = thread_rng();
    for field in FieldId::ALL {
        for role in [Role::A, Role::B] {
            let key = PrivateKey::generate(field, role, &mut rng).unwrap();
            let again = PrivateKey::import(field, role, &key.export()).unwrap();
            assert_eq!(again.export(), key.export());

            let pk = key.public_key();
            let pk_again = PublicKey::import(field, role, &pk.export()).unwrap();
            assert_eq!(pk_again, pk);
            assert_eq!(pk_again.export(), pk.export());
            assert_eq!(again.public_key(), pk);
        }
    }
}

#[test]
fn random_agreement() {
    let mut rng = thread_rng();
    for field in FieldId::ALL {
        let a = PrivateKey::generate(field, Role::A, &mut rng).unwrap();
        let b = PrivateKey::generate(field, Role::B, &mut rng).unwrap();

        let pk_a = PublicKey::import(field, Role::A, &a.public_key().export()).unwrap();
        let pk_b = PublicKey::import(field, Role::B, &b.public_key().export()).unwrap();
        let ss_a = derive_secret(&a, &pk_b).unwrap();
        let ss_b = derive_secret(&b, &pk_a).unwrap();
        assert_eq!(ss_a, ss_b);
    }
}

#[test]
fn generated_scalars_are_in_range() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5EED);
    let three = BigUint::from(3u32);
    for field in FieldId::ALL {
        let fp = params(field);
        let bound_a = BigUint::from(1u32) << fp.e2;
        let bound_b = three.pow(fp.e3 as u32);
        for _ in 0..1000 {
            let a = PrivateKey::generate(field, Role::A, &mut rng).unwrap();
            let m = BigUint::from_bytes_le(&a.export());
            assert!(m < bound_a);
            assert!(!m.bit(0));

            let b = PrivateKey::generate(field, Role::B, &mut rng).unwrap();
            let m = BigUint::from_bytes_le(&b.export());
            assert!(m < bound_b);
            assert_eq!(&m % &three, BigUint::from(0u32));
        }
    }
}

#[test]
fn seeded_generation_is_deterministic() {
    let mut rng1 = ChaCha20Rng::seed_from_u64(42);
    let mut rng2 = ChaCha20Rng::seed_from_u64(42);
    for role in [Role::A, Role::B] {
        let k1 = PrivateKey::generate(FieldId::P503, role, &mut rng1).unwrap();
        let k2 = PrivateKey::generate(FieldId::P503, role, &mut rng2).unwrap();
        assert_eq!(k1.export(), k2.export());
    }
}

#[test]
fn mismatched_keys_rejected() {
    let mut rng = thread_rng();
    let a503 = PrivateKey::generate(FieldId::P503, Role::A, &mut rng).unwrap();
    let b503 = PrivateKey::generate(FieldId::P503, Role::B, &mut rng).unwrap();
    let b751 = PrivateKey::generate(FieldId::P751, Role::B, &mut rng).unwrap();

    // different fields
    match derive_secret(&a503, &b751.public_key()) {
        Err(Error::MismatchedParameters { own_field, peer_field, .. }) => {
            assert_eq!(own_field, FieldId::P503);
            assert_eq!(peer_field, FieldId::P751);
        }
        other => panic!("unexpected result {:?}", other),
    }

    // same role
    let a503_other = PrivateKey::generate(FieldId::P503, Role::A, &mut rng).unwrap();
    assert!(matches!(
        derive_secret(&a503, &a503_other.public_key()),
        Err(Error::MismatchedParameters { .. })
    ));

    assert!(derive_secret(&a503, &b503.public_key()).is_ok());
}

#[test]
fn wrong_lengths_rejected() {
    for field in FieldId::ALL {
        let fp = params(field);
        let pk_len = fp.public_key_len();
        for len in [0, pk_len - 1, pk_len + 1] {
            assert!(matches!(
                PublicKey::import(field, Role::A, &vec![0u8; len]),
                Err(Error::InvalidEncoding { context: "public key", .. })
            ));
        }
        let sk_len = fp.domain(Role::B).secret_byte_len;
        assert!(matches!(
            PrivateKey::import(field, Role::B, &vec![0u8; sk_len + 1]),
            Err(Error::InvalidEncoding { context: "private key", .. })
        ));
    }
}

struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Err(rand_core::Error::from(NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap()))
    }
}

impl CryptoRng for FailingRng {}

#[test]
fn rng_failure_is_reported() {
    for role in [Role::A, Role::B] {
        match PrivateKey::generate(FieldId::P503, role, &mut FailingRng) {
            Err(Error::RandomSourceFailure(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }
}
