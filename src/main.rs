use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use sidh_rs::{derive_secret, FieldId, PrivateKey, Role};
use std::time::Instant;

fn sidh_exchange_bench(field: FieldId, rng: &mut ChaCha20Rng) -> sidh_rs::Result<()> {
    const TOTAL_CASES: usize = 5;
    for case_num in 0..TOTAL_CASES {
        println!("========={field} TEST #{case_num}=======");
        let timer = Instant::now();
        let sk_a = PrivateKey::generate(field, Role::A, rng)?;
        let sk_b = PrivateKey::generate(field, Role::B, rng)?;
        println!("keygen elapsed : {} us", timer.elapsed().as_micros());

        let timer = Instant::now();
        let pk_a = sk_a.public_key();
        println!("public key A elapsed : {} ms", timer.elapsed().as_millis());

        let timer = Instant::now();
        let pk_b = sk_b.public_key();
        println!("public key B elapsed : {} ms", timer.elapsed().as_millis());

        let timer = Instant::now();
        let ss_a = derive_secret(&sk_a, &pk_b)?;
        println!("shared secret A elapsed : {} ms", timer.elapsed().as_millis());

        let timer = Instant::now();
        let ss_b = derive_secret(&sk_b, &pk_a)?;
        println!("shared secret B elapsed : {} ms", timer.elapsed().as_millis());

        assert_eq!(ss_a, ss_b);
    }
    Ok(())
}

fn main() -> sidh_rs::Result<()> {
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    for field in FieldId::ALL {
        sidh_exchange_bench(field, &mut rng)?;
    }
    Ok(())
}
