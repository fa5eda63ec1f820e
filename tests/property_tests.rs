use linecode::{
    differential_manchester, encode, manchester, nrz_i, nrz_l, rz, EncoderConfig, Error, Level,
    Scheme,
};
use proptest::prelude::*;

fn lenient(scheme: Scheme, bits: &str, config: &EncoderConfig) -> Vec<Level> {
    match scheme {
        Scheme::NrzL => nrz_l(bits),
        Scheme::NrzI => nrz_i(bits, config.initial_level),
        Scheme::Rz => rz(bits),
        Scheme::Manchester => manchester(bits),
        Scheme::DifferentialManchester => {
            differential_manchester(bits, config.initial_transition_is_lh)
        }
    }
}

#[test]
fn test_reference_vectors() {
    let bits = "11001";
    assert_eq!(nrz_l(bits), [1i8, 1, -1, -1, 1]);
    assert_eq!(nrz_i(bits, 1), [-1i8, 1, 1, 1, -1]);
    assert_eq!(nrz_i(bits, -1), [1i8, -1, -1, -1, 1]);
    assert_eq!(rz(bits), [1i8, 0, 1, 0, -1, 0, -1, 0, 1, 0]);
    assert_eq!(manchester(bits), [-1i8, 1, -1, 1, 1, -1, 1, -1, -1, 1]);
    assert_eq!(
        differential_manchester(bits, true),
        [1i8, -1, -1, 1, -1, 1, -1, 1, 1, -1]
    );
}

#[test]
fn test_invalid_input_is_empty_for_every_scheme() {
    let config = EncoderConfig::default();
    for scheme in Scheme::ALL {
        assert!(lenient(scheme, "102", &config).is_empty(), "{scheme}");
        assert!(matches!(
            encode(scheme, "102"),
            Err(Error::InvalidSymbol { .. })
        ));
    }
}

#[test]
fn test_calls_are_independent_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let lh = i % 2 == 0;
                (lh, differential_manchester("0110100111", lh))
            })
        })
        .collect();
    for handle in handles {
        let (lh, out) = handle.join().unwrap();
        assert_eq!(out, differential_manchester("0110100111", lh));
    }
}

proptest! {
    #[test]
    fn prop_output_length(
        input in "[01]{0,128}",
        initial_level in prop::sample::select(vec![1i8, -1]),
        lh in any::<bool>(),
    ) {
        let config = EncoderConfig { initial_level, initial_transition_is_lh: lh };
        for scheme in Scheme::ALL {
            let out = lenient(scheme, &input, &config);
            prop_assert_eq!(out.len(), input.len() * scheme.samples_per_bit());
        }
    }

    #[test]
    fn prop_lenient_and_strict_agree(
        input in "[01]{0,64}",
        initial_level in prop::sample::select(vec![1i8, -1]),
        lh in any::<bool>(),
    ) {
        let config = EncoderConfig { initial_level, initial_transition_is_lh: lh };
        for scheme in Scheme::ALL {
            let strict = scheme.encode(&input, &config).unwrap();
            prop_assert_eq!(strict, lenient(scheme, &input, &config));
        }
    }

    #[test]
    fn prop_non_binary_input_rejected(
        prefix in "[01]{0,16}",
        bad in "[^01]",
        suffix in "[01]{0,16}",
    ) {
        let input = format!("{prefix}{bad}{suffix}");
        let config = EncoderConfig::default();
        for scheme in Scheme::ALL {
            prop_assert!(lenient(scheme, &input, &config).is_empty());
            let err = scheme.encode(&input, &config).unwrap_err();
            let Error::InvalidSymbol { position, found } = err else {
                return Err(TestCaseError::fail(format!("{scheme}: unexpected error {err:?}")));
            };
            prop_assert_eq!(position, prefix.chars().count());
            prop_assert_eq!(Some(found), bad.chars().next());
        }
    }

    #[test]
    fn prop_nrz_i_and_nrz_l_levels_are_polar(input in "[01]{0,64}") {
        for level in nrz_l(&input).into_iter().chain(nrz_i(&input, 1)) {
            prop_assert_ne!(level, Level::Zero);
        }
    }
}
