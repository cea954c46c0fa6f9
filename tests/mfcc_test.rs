// tests/mfcc_test.rs
//
// End-to-end MFCC extraction behaviour.
//
// Usage:
//   cargo test --test mfcc_test -- --nocapture

mod test_utils;

use mfccr::{
    compute_mfcc, MfccConfig, MfccError, MfccExtractor, ProfilePreset, WindowFunction,
};
use test_utils::{argmax, bin_frequency, init_logging, noise, silence, sine};

const SAMPLE_RATE: u32 = 16000;

#[test]
fn one_second_of_silence_at_16k() {
    init_logging();

    let mfcc = compute_mfcc(&silence(16000), SAMPLE_RATE, 20).unwrap();
    assert_eq!(mfcc.shape(), (20, 100));
    assert!(mfcc.row(0).iter().all(|&c| c == 0.0));
    for row in 1..20 {
        assert!(
            mfcc.row(row).iter().all(|c| c.is_finite()),
            "row {} has non-finite values",
            row
        );
    }
}

#[test]
fn silence_is_floored_not_propagated() {
    let extractor = MfccExtractor::with_filters(SAMPLE_RATE, 20).unwrap();
    let energies = extractor.mel_energies(&silence(4000));
    assert!(energies.as_slice().iter().all(|&e| e == 0.0));

    // every band sits at log10(floor), so the DCT leaves nothing past row 0
    let mfcc = extractor.extract(&silence(4000));
    assert!(mfcc.as_slice().iter().all(|c| c.is_finite() && c.abs() < 1e-9));
}

#[test]
fn frame_count_follows_hop() {
    let extractor = MfccExtractor::with_filters(SAMPLE_RATE, 20).unwrap();
    assert_eq!(extractor.layout().hop, 160);

    for &len in &[1usize, 159, 160, 161, 400, 16000, 16001, 23456] {
        let mfcc = extractor.extract(&noise(0.1, len, len as u64));
        assert_eq!(mfcc.rows(), 20);
        assert_eq!(mfcc.cols(), (len + 159) / 160, "len {}", len);
        assert_eq!(mfcc.cols(), extractor.frame_count(len));
    }
}

#[test]
fn overlap_based_framing_uses_derived_hop() {
    let config = MfccConfig::builder().overlap_duration(0.010).build().unwrap();
    let extractor = MfccExtractor::new(SAMPLE_RATE, config).unwrap();
    assert_eq!(extractor.layout().frame_len, 400);
    assert_eq!(extractor.layout().hop, 240);
    assert_eq!(extractor.extract(&silence(16000)).cols(), 67);
}

#[test]
fn overlap_framing_rounds_in_samples_at_11025() {
    let config = MfccConfig::builder().overlap_duration(0.010).build().unwrap();
    let extractor = MfccExtractor::new(11025, config).unwrap();
    let layout = extractor.layout();

    // round(275.625) - round(110.25)
    assert_eq!(layout.frame_len, 276);
    assert_eq!(layout.overlap(), 110);
    assert_eq!(layout.hop, 166);
    assert_eq!(layout.frame_start(3), 498);

    let mfcc = extractor.extract(&silence(11025));
    assert_eq!(mfcc.cols(), (11025 + 165) / 166);
}

#[test]
fn sine_energy_peaks_in_the_matching_filter() {
    init_logging();

    let extractor = MfccExtractor::with_filters(SAMPLE_RATE, 20).unwrap();
    let fft_size = extractor.config().fft_size;

    for &filter in &[8usize, 14, 18] {
        let center = extractor.filterbank().center_bin(filter).unwrap();
        let freq = bin_frequency(center, fft_size, SAMPLE_RATE);
        let energies = extractor.mel_energies(&sine(freq, 0.5, SAMPLE_RATE, 16000));

        for frame in 0..energies.cols() {
            assert_eq!(
                argmax(&energies.column(frame)),
                filter,
                "{:.1} Hz tone missed filter {} in frame {}",
                freq,
                filter,
                frame
            );
        }
    }
}

#[test]
fn extraction_is_deterministic() {
    let samples = noise(0.3, 24000, 7);
    let first = compute_mfcc(&samples, SAMPLE_RATE, 20).unwrap();
    let second = compute_mfcc(&samples, SAMPLE_RATE, 20).unwrap();
    assert_eq!(first, second);

    let extractor = MfccExtractor::with_filters(SAMPLE_RATE, 20).unwrap();
    assert_eq!(extractor.extract(&samples), first);
    assert_eq!(extractor.extract(&samples), extractor.extract(&samples));
}

#[test]
fn shared_extractor_across_threads() {
    let extractor = MfccExtractor::with_filters(SAMPLE_RATE, 13).unwrap();
    let signals: Vec<Vec<f64>> = (0..4).map(|i| noise(0.2, 8000, i)).collect();

    let expected: Vec<_> = signals.iter().map(|s| extractor.extract(s)).collect();
    let shared = &extractor;
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = signals
            .iter()
            .map(|s| scope.spawn(move || shared.extract(s)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, expected);
}

#[test]
fn periodogram_is_normalised_by_frame_length() {
    let config = MfccConfig::builder()
        .window(WindowFunction::Rectangular)
        .build()
        .unwrap();
    let extractor = MfccExtractor::new(SAMPLE_RATE, config).unwrap();
    let periodogram = extractor.periodogram(&vec![1.0; 800]);

    assert_eq!(periodogram.shape(), (5, 513));
    // a full frame of ones puts 1.0 on the DC bin, stored second after the shift
    assert!((periodogram.get(0, 1) - 1.0).abs() < 1e-9);
    assert!(periodogram.as_slice().iter().all(|&m| m >= 0.0));
}

#[test]
fn telephone_profile_at_8k() {
    let extractor =
        MfccExtractor::new(8000, MfccConfig::from_preset(ProfilePreset::Telephone)).unwrap();
    assert_eq!(extractor.layout().frame_len, 200);
    assert_eq!(extractor.layout().hop, 80);

    let mfcc = extractor.extract(&sine(1000.0, 0.5, 8000, 8000));
    assert_eq!(mfcc.shape(), (20, 100));
    assert!(mfcc.row(0).iter().all(|&c| c == 0.0));
    assert!(mfcc.as_slice().iter().all(|c| c.is_finite()));
}

#[test]
fn invalid_configurations_are_rejected_up_front() {
    assert_eq!(
        MfccExtractor::new(0, MfccConfig::default()).unwrap_err(),
        MfccError::InvalidSampleRate(0)
    );

    let config = MfccConfig {
        fft_size: 1000,
        n_filters: 600,
        ..MfccConfig::default()
    };
    assert!(matches!(
        MfccExtractor::new(SAMPLE_RATE, config),
        Err(MfccError::FftTooSmall { .. })
    ));

    let config = MfccConfig {
        log_floor: -1.0,
        ..MfccConfig::default()
    };
    assert_eq!(
        MfccExtractor::new(SAMPLE_RATE, config).unwrap_err(),
        MfccError::InvalidLogFloor(-1.0)
    );
}

#[test]
fn config_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("mfccr-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("wideband.json");

    let config = MfccConfig::from_preset(ProfilePreset::Wideband);
    config.save(&path).unwrap();
    let loaded = MfccConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    let extractor = MfccExtractor::new(SAMPLE_RATE, loaded).unwrap();
    assert_eq!(extractor.extract(&silence(3200)).shape(), (26, 20));

    assert!(MfccConfig::load(&dir.join("missing.json")).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
