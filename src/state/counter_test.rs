use super::*;

fn run_to_end(mut counter: CounterAnimation) -> Vec<CounterFrame> {
    let mut frames = Vec::new();
    while let Some(frame) = counter.step() {
        frames.push(frame);
        assert!(frames.len() < 10_000, "counter never finished");
    }
    frames
}

fn shown_value(frame: &CounterFrame) -> u64 {
    frame.text.trim_end_matches('+').replace(',', "").parse().unwrap()
}

// =============================================================
// format_thousands
// =============================================================

#[test]
fn format_thousands_groups_digits() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1000), "1,000");
    assert_eq!(format_thousands(15_000), "15,000");
    assert_eq!(format_thousands(1_234_567), "1,234,567");
}

// =============================================================
// parse_target
// =============================================================

#[test]
fn parse_target_accepts_integers() {
    assert_eq!(parse_target("500"), Some(500));
    assert_eq!(parse_target(" 2500 "), Some(2500));
    assert_eq!(parse_target("98.6"), Some(98));
    assert_eq!(parse_target("+40"), Some(40));
}

#[test]
fn parse_target_reads_leading_digits() {
    assert_eq!(parse_target("500+"), Some(500));
    assert_eq!(parse_target("10,000"), Some(10));
    assert_eq!(parse_target("25k"), Some(25));
    assert_eq!(parse_target("  15 years"), Some(15));
}

#[test]
fn parse_target_rejects_junk() {
    assert_eq!(parse_target(""), None);
    assert_eq!(parse_target("lots"), None);
    assert_eq!(parse_target("-5"), None);
    assert_eq!(parse_target("k25"), None);
    assert_eq!(parse_target("99999999999999999999999"), None);
}

// =============================================================
// Animation
// =============================================================

#[test]
fn counter_to_500_ends_with_plus() {
    let frames = run_to_end(CounterAnimation::new(500, 2000.0, 16.0));
    let last = frames.last().unwrap();
    assert_eq!(last.text, "500+");
    assert!(last.finished);
    assert!(frames[..frames.len() - 1].iter().all(|f| !f.finished));
}

#[test]
fn counter_is_non_decreasing_and_below_target_until_final() {
    let frames = run_to_end(CounterAnimation::new(500, 2000.0, 16.0));
    let values: Vec<u64> = frames.iter().map(shown_value).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert!(values[..values.len() - 1].iter().all(|v| *v < 500));
}

#[test]
fn counter_takes_about_duration_over_frame_steps() {
    let frames = run_to_end(CounterAnimation::new(500, 2000.0, 16.0));
    // 2000 / 16 = 125 increments.
    assert!((124..=126).contains(&frames.len()), "got {} frames", frames.len());
}

#[test]
fn intermediate_frames_use_separators() {
    let mut counter = CounterAnimation::new(50_000, 2000.0, 16.0);
    let mut saw_grouped = false;
    while let Some(frame) = counter.step() {
        if !frame.finished && frame.text.contains(',') {
            saw_grouped = true;
        }
    }
    assert!(saw_grouped);
}

#[test]
fn zero_target_finishes_immediately() {
    let frames = run_to_end(CounterAnimation::new(0, 2000.0, 16.0));
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].text, "0+");
}

#[test]
fn step_after_finish_is_none() {
    let mut counter = CounterAnimation::new(1, 2000.0, 16.0);
    let last = std::iter::from_fn(|| counter.step()).last().unwrap();
    assert_eq!(last, CounterFrame { text: "1+".into(), finished: true });
    assert!(counter.step().is_none());
}
