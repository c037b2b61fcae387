use crate::*;
use crate::normalizer::{canonicalize, carry, digit_chars};
use crate::rewrite::{has_compaction_site, has_ultra_site, Rewriter};
use oct_core::{CanonicalDigits, OctaviaError};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn digits(d: &[u8]) -> CanonicalDigits {
    CanonicalDigits::new(d.to_vec()).unwrap()
}

/// Random canonical digits, biased towards zeros so rules actually fire.
fn random_digits(rng: &mut StdRng, max_len: usize) -> CanonicalDigits {
    let len = rng.gen_range(1..=max_len);
    if len == 1 && rng.gen_bool(0.1) {
        return CanonicalDigits::zero();
    }
    let mut d = Vec::with_capacity(len);
    d.push(rng.gen_range(1..=7));
    for _ in 1..len {
        d.push(if rng.gen_bool(0.5) { 0 } else { rng.gen_range(1..=7) });
    }
    CanonicalDigits::new(d).unwrap()
}

// ========== Normalizer ==========

#[test]
fn test_norm_overflow_digits() {
    assert_eq!(normalize("8").digits(), &[1, 0]);
    assert_eq!(normalize("9").digits(), &[1, 1]);
    assert_eq!(normalize("8").value().unwrap(), 8);
    assert_eq!(normalize("9").value().unwrap(), 9);
}

#[test]
fn test_norm_empty_and_zero() {
    assert_eq!(normalize("").digits(), &[0]);
    assert_eq!(normalize("000").digits(), &[0]);
    assert_eq!(normalize("0").digits(), &[0]);
    assert_eq!(normalize("no digits here").digits(), &[0]);
}

#[test]
fn test_norm_in_range_unchanged() {
    assert_eq!(normalize("17").digits(), &[1, 7]);
    assert_eq!(normalize("5").digits(), &[5]);
    assert_eq!(normalize("777").digits(), &[7, 7, 7]);
}

#[test]
fn test_norm_strips_leading_zeros() {
    assert_eq!(normalize("0017").digits(), &[1, 7]);
    assert_eq!(normalize("0008").digits(), &[1, 0]);
}

#[test]
fn test_norm_discards_non_digits() {
    assert_eq!(normalize(" 2-0 ").digits(), &[2, 0]);
    assert_eq!(normalize("1,0,1").digits(), &[1, 0, 1]);
    assert_eq!(digit_chars("a1b2\u{0663}c"), "12");
}

#[test]
fn test_norm_multi_digit_carry() {
    // 9*8 + 9 = 81 = 0o121
    assert_eq!(normalize("99").digits(), &[1, 2, 1]);
    // Carry into a prepended place that itself overflows.
    assert_eq!(carry(&[80]).digits(), &[1, 2, 0]);
}

#[test]
fn test_norm_preserves_weighted_sum() {
    // Σ 9 * 8^k for k in 0..7
    assert_eq!(normalize("9999999").value().unwrap(), 2_696_337);
    assert!(normalize("9999999").digits().iter().all(|&d| d < 8));
}

#[test]
fn test_norm_roundtrip_octal() {
    for n in 0..=10_000u64 {
        assert_eq!(normalize(&format!("{n:o}")), CanonicalDigits::from_u64(n), "n = {n}");
    }
}

#[test]
fn test_canonicalize_ring_counts() {
    let counts = compact(&digits(&[1, 0, 0]));
    assert_eq!(canonicalize(&counts), digits(&[1, 0, 0]));
}

// ========== Canonical ==========

#[test]
fn test_canonical_identity() {
    assert_eq!(canonical(&digits(&[2, 0])).counts(), &[2, 0]);
    assert_eq!(canonical(&CanonicalDigits::zero()).counts(), &[0]);
    assert_eq!(apply(Policy::Canonical, &digits(&[1, 0, 1])).rewrites, 0);
}

// ========== Minimal ==========

#[test]
fn test_minimal_single_step() {
    assert_eq!(minimal(&digits(&[2, 0])).counts(), &[1, 8]);
    assert_eq!(minimal(&digits(&[1, 0, 1])).counts(), &[8, 1]);
    // Only the first firing; [8, 0] is not revisited.
    assert_eq!(minimal(&digits(&[1, 0, 0])).counts(), &[8, 0]);
}

#[test]
fn test_minimal_leftmost_pair() {
    let r = minimal(&digits(&[1, 2, 0, 3, 0]));
    assert_eq!(r.counts(), &[1, 1, 8, 3, 0]);
    assert_eq!(r.value().unwrap(), digits(&[1, 2, 0, 3, 0]).value().unwrap());
}

#[test]
fn test_minimal_no_pair() {
    assert_eq!(minimal(&digits(&[3, 2, 1])).counts(), &[3, 2, 1]);
    assert_eq!(minimal(&CanonicalDigits::zero()).counts(), &[0]);
    assert_eq!(apply(Policy::Minimal, &digits(&[3, 2, 1])).rewrites, 0);
}

// ========== Compact ==========

#[test]
fn test_compact_sixteen() {
    let r = compact(&CanonicalDigits::from_u64(16));
    assert_eq!(r.counts(), &[1, 8]);
    assert_eq!(r.value().unwrap(), 16);
}

#[test]
fn test_compact_sixty_five() {
    let r = compact(&CanonicalDigits::from_u64(65));
    assert_eq!(r.counts(), &[8, 1]);
    assert_eq!(r.value().unwrap(), 65);
}

#[test]
fn test_compact_sixty_four() {
    let r = apply(Policy::Compact, &digits(&[1, 0, 0]));
    assert_eq!(r.counts.counts(), &[7, 8]);
    assert_eq!(r.counts.value().unwrap(), 64);
    assert_eq!(r.rewrites, 2);
}

#[test]
fn test_compact_five_twelve() {
    let r = compact(&digits(&[1, 0, 0, 0]));
    assert_eq!(r.counts(), &[7, 7, 8]);
    assert_eq!(r.value().unwrap(), 512);
}

#[test]
fn test_compact_stable_inputs() {
    assert_eq!(compact(&CanonicalDigits::zero()).counts(), &[0]);
    assert_eq!(compact(&digits(&[7, 7, 7])).counts(), &[7, 7, 7]);
}

// ========== Ultra ==========

#[test]
fn test_ultra_four_digit_fixture() {
    let s = digits(&[1, 0, 0, 0]);
    let r = ultra(&s);
    assert_eq!(r.value().unwrap(), 512);
    assert!(!has_compaction_site(r.counts()));
    assert!(!has_ultra_site(r.counts()));
}

#[test]
fn test_ultra_matches_compact_on_small_values() {
    for n in 0..=4096u64 {
        let s = CanonicalDigits::from_u64(n);
        assert_eq!(ultra(&s), compact(&s), "n = {n}");
    }
}

// ========== Properties ==========

#[test]
fn test_prop_value_preservation() {
    let mut rng = StdRng::seed_from_u64(0o1234);
    for _ in 0..2000 {
        let s = random_digits(&mut rng, 20);
        let v = s.value().unwrap();
        for policy in Policy::ALL {
            let r = apply(policy, &s);
            assert_eq!(r.counts.value().unwrap(), v, "{policy} on {s}");
        }
    }
}

#[test]
fn test_prop_value_preservation_long() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let s = random_digits(&mut rng, 120);
        for policy in Policy::ALL {
            assert_eq!(canonicalize(&apply(policy, &s).counts), s, "{policy} on {s}");
        }
    }
}

#[test]
fn test_prop_ring_count_form() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let s = random_digits(&mut rng, 16);
        for policy in Policy::ALL {
            let r = apply(policy, &s).counts;
            assert!(r.counts().iter().all(|&c| c <= 8));
            assert!(r.len() == 1 || r.counts()[0] != 0, "{policy} on {s} gave {r}");
        }
    }
}

#[test]
fn test_prop_compact_postcondition_and_idempotence() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..1000 {
        let s = random_digits(&mut rng, 24);
        let r = compact(&s);
        assert!(!has_compaction_site(r.counts()), "{s} -> {r}");
        let mut again = Rewriter::new(r.counts());
        assert_eq!(again.compact_to_fixpoint(), 0);
        assert_eq!(again.digits(), r.counts());
    }
}

#[test]
fn test_prop_ultra_postcondition() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1000 {
        let s = random_digits(&mut rng, 24);
        let r = ultra(&s);
        assert!(!has_compaction_site(r.counts()));
        assert!(!has_ultra_site(r.counts()));
    }
}

#[test]
fn test_prop_minimal_relation() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1000 {
        let s = random_digits(&mut rng, 16);
        let r = apply(Policy::Minimal, &s);
        if has_compaction_site(s.digits()) {
            assert_eq!(r.rewrites, 1);
            assert_ne!(r.counts.counts(), s.digits());
            assert!(r.counts.full_rings() <= 1);
        } else {
            assert_eq!(r.rewrites, 0);
            assert_eq!(r.counts.counts(), s.digits());
        }
    }
}

// ========== Policy / Selection ==========

#[test]
fn test_policy_parse() {
    assert_eq!("compact".parse::<Policy>().unwrap(), Policy::Compact);
    assert_eq!("ULTRA".parse::<Policy>().unwrap(), Policy::Ultra);
    assert_eq!("Compact (preferred)".parse::<Policy>().unwrap(), Policy::Compact);
    assert_eq!("Canonical (literal base-8)".parse::<Policy>().unwrap(), Policy::Canonical);
    assert!(matches!("".parse::<Policy>(), Err(OctaviaError::UnknownPolicy(_))));
    assert!(matches!("maximal".parse::<Policy>(), Err(OctaviaError::UnknownPolicy(_))));
}

#[test]
fn test_policy_names_roundtrip() {
    for policy in Policy::ALL {
        assert_eq!(policy.as_str().parse::<Policy>().unwrap(), policy);
        assert_eq!(policy.label().parse::<Policy>().unwrap(), policy);
    }
}

#[test]
fn test_selection_parse() {
    assert_eq!("all".parse::<Selection>().unwrap(), Selection::All);
    assert_eq!(" All ".parse::<Selection>().unwrap(), Selection::All);
    assert_eq!("minimal".parse::<Selection>().unwrap(), Selection::Single(Policy::Minimal));
    assert!("sideways".parse::<Selection>().is_err());
}

// ========== Pipeline ==========

#[test]
fn test_pipeline_default_is_compact() {
    let results = RingPipeline::default().run(&CanonicalDigits::from_u64(16));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].policy, Policy::Compact);
    assert_eq!(results[0].counts.counts(), &[1, 8]);
    assert_eq!(results[0].rewrites, 1);
    assert!(!results[0].is_unchanged());
}

#[test]
fn test_pipeline_all_fan_out() {
    let s = digits(&[1, 0, 0]);
    let results = RingPipeline::all().run(&s);
    let policies: Vec<_> = results.iter().map(|r| r.policy).collect();
    assert_eq!(policies, Policy::ALL.to_vec());
    assert_eq!(results[0].counts.counts(), &[1, 0, 0]);
    assert_eq!(results[1].counts.counts(), &[8, 0]);
    assert_eq!(results[2].counts.counts(), &[7, 8]);
    assert_eq!(results[3].counts.counts(), &[7, 8]);
    assert!(results.iter().all(|r| r.canonical == s));
}

#[test]
fn test_pipeline_run_raw() {
    let (canonical, results) = RingPipeline::new(Policy::Canonical).run_raw("20");
    assert_eq!(canonical.to_octal_string(), "20");
    assert!(results[0].is_unchanged());

    let (canonical, results) = RingPipeline::default().run_raw("18");
    assert_eq!(canonical.to_octal_string(), "20");
    assert_eq!(results[0].counts.counts(), &[1, 8]);
}
