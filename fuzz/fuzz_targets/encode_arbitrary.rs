#![no_main]
use libfuzzer_sys::fuzz_target;
use linecode::{
    differential_manchester, manchester, nrz_i, nrz_l, rz, EncoderConfig, Scheme,
};

fuzz_target!(|data: (String, i8, bool)| {
    let (input, initial_level, lh) = data;
    let config = EncoderConfig {
        initial_level,
        initial_transition_is_lh: lh,
    };

    for scheme in Scheme::ALL {
        let lenient = match scheme {
            Scheme::NrzL => nrz_l(&input),
            Scheme::NrzI => nrz_i(&input, initial_level),
            Scheme::Rz => rz(&input),
            Scheme::Manchester => manchester(&input),
            Scheme::DifferentialManchester => differential_manchester(&input, lh),
        };

        match scheme.encode(&input, &config) {
            Ok(strict) => {
                assert_eq!(strict, lenient);
                assert_eq!(strict.len(), input.len() * scheme.samples_per_bit());
            }
            Err(_) => {
                // Bad NRZ-I levels fall back to +1 on the lenient path.
                if scheme == Scheme::NrzI && linecode::validate(&input) {
                    assert_eq!(lenient, nrz_i(&input, 1));
                } else {
                    assert!(lenient.is_empty());
                }
            }
        }
    }
});
