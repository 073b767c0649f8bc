use afl::fuzz;
use chrono::{Duration, NaiveDate};
use dd_cnp::{CnpChecksum, DecodeConfig, DecoderBuilder, RuleSet, Validator};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_config(rng: &mut StdRng) -> DecodeConfig {
    let rule_set = if rng.gen_bool(0.5) {
        RuleSet::V1
    } else {
        RuleSet::V2
    };
    // any day between 1900 and 2150
    let epoch = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    let reference_date = epoch + Duration::days(rng.gen_range(0..250 * 365));

    DecodeConfig::new()
        .rule_set(rule_set)
        .reference_date(reference_date)
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let config = gen_config(&mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Config: {:?}", config);
    }

    let decoder = DecoderBuilder::new().config(config).build();
    let cnp = decoder.decode(input);

    #[cfg(feature = "manual_test")]
    {
        println!("Result: {:?}", cnp.record());
        println!("Error: {:?}", cnp.error());
    }

    // queries must never panic, whatever the outcome
    let _ = cnp.birth_date("%Y-%m-%d", "");
    let _ = cnp.sex("M", "F", "");
    let _ = cnp.age();

    assert_eq!(cnp.is_valid(), cnp.error().is_none());
    assert_eq!(cnp.is_valid(), decoder.is_valid_match(input));
    if let Some(record) = cnp.record() {
        assert_eq!(record.to_string(), input.trim());
        assert!(CnpChecksum.is_valid_match(input));
    }
}
