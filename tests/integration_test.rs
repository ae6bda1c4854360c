use ipfe_crypto::elgamal::GroupParams;
use ipfe_crypto::errors::IpfeError;
use ipfe_crypto::ipfe::Ipfe;
use ipfe_crypto::preset::{modp_group, toy_group};

use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn happy_flow() -> Result<(), IpfeError> {
    let params = toy_group();
    let mut rng = StdRng::seed_from_u64(42);

    let scheme = Ipfe::setup(2, &params, &mut rng)?;

    let x = [BigUint::from(5u32), BigUint::from(7u32)];
    let y = [BigUint::from(2u32), BigUint::from(3u32)];

    let functional_key = scheme.derive_key(&y)?;
    let ciphertext = scheme.encrypt(&x, &mut rng)?;

    let recovered = functional_key.decrypt(&ciphertext, &y, &params)?;

    dbg!(&recovered);

    // <x, y> = 31 and 15^31 mod 73 = 5
    assert_eq!(recovered, BigUint::from(5u32));

    Ok(())
}

#[test]
fn recovers_power_of_generator_over_modp_2048() -> Result<(), IpfeError> {
    let params = modp_group(2048)?;
    let mut rng = StdRng::seed_from_u64(7);

    let scheme = Ipfe::setup(3, params, &mut rng)?;

    let x = [1u32, 2, 3].map(BigUint::from);
    let y = [4u32, 5, 6].map(BigUint::from);

    let functional_key = scheme.derive_key(&y)?;
    let ciphertext = scheme.encrypt(&x, &mut rng)?;

    // <x, y> = 32 and the generator is 2, so the result is 2^32.
    assert_eq!(
        functional_key.decrypt(&ciphertext, &y, params)?,
        BigUint::from(4_294_967_296u64)
    );

    Ok(())
}

#[test]
fn fresh_randomness_changes_ciphertexts_but_not_results() -> Result<(), IpfeError> {
    let params = modp_group(1536)?;
    let mut rng = StdRng::seed_from_u64(99);

    let scheme = Ipfe::setup(4, params, &mut rng)?;

    let x = [9u32, 0, 3, 71].map(BigUint::from);
    let y = [1u32, 2, 3, 4].map(BigUint::from);

    let first = scheme.encrypt(&x, &mut rng)?;
    let second = scheme.encrypt(&x, &mut rng)?;

    assert_ne!(first.c0, second.c0);
    assert_ne!(first.c1, second.c1);

    let functional_key = scheme.derive_key(&y)?;

    assert_eq!(
        functional_key.decrypt(&first, &y, params)?,
        functional_key.decrypt(&second, &y, params)?
    );

    Ok(())
}

#[test]
fn scheme_state_survives_json_round_trip() -> Result<(), IpfeError> {
    let params = GroupParams::from_json(&toy_group().to_json()?)?;

    let mut rng = StdRng::seed_from_u64(3);
    let exported = Ipfe::setup(3, &params, &mut rng)?.to_json()?;
    let scheme = Ipfe::from_json(&exported)?;

    let x = [2u32, 0, 1].map(BigUint::from);
    let y = [5u32, 5, 5].map(BigUint::from);

    let functional_key = scheme.derive_key(&y)?;
    let ciphertext = scheme.encrypt(&x, &mut rng)?;

    // <x, y> = 15
    let expected = params
        .element_ring()
        .pow(params.generator(), &BigUint::from(15u32));
    assert_eq!(functional_key.decrypt(&ciphertext, &y, &params)?, expected);

    Ok(())
}

#[test]
fn one_scheme_serves_many_threads() -> Result<(), IpfeError> {
    let params = toy_group();
    let mut rng = StdRng::seed_from_u64(11);
    let scheme = Ipfe::setup(2, &params, &mut rng)?;

    std::thread::scope(|scope| {
        for worker in 0u64..4 {
            let scheme = &scheme;
            let params = &params;

            scope.spawn(move || {
                let mut rng = StdRng::seed_from_u64(1000 + worker);

                let x = [BigUint::from(worker), BigUint::from(2 * worker)];
                let y = [BigUint::from(3u32), BigUint::from(7u32)];

                let functional_key = scheme.derive_key(&y).unwrap();
                let ciphertext = scheme.encrypt(&x, &mut rng).unwrap();
                let recovered = functional_key.decrypt(&ciphertext, &y, params).unwrap();

                // <x, y> = 3w + 14w = 17w
                let exponent = BigUint::from(17 * worker);
                assert_eq!(
                    recovered,
                    params.element_ring().pow(params.generator(), &exponent)
                );
            });
        }
    });

    Ok(())
}
