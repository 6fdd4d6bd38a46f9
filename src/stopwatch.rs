use std::time::Instant;

// =============================================================================
// Wall-clock measurement for a block of work
// =============================================================================

/// Runs `work` and returns the elapsed wall-clock time in milliseconds.
/// A panic inside `work` propagates to the caller unmeasured.
pub fn measure(work: impl FnOnce()) -> f64 {
    let started = Instant::now();
    work();
    started.elapsed().as_secs_f64() * 1000.0
}

/// Like `measure`, but also prints "<label> in <elapsed> ms".
pub fn measure_and_report(label: &str, work: impl FnOnce()) -> f64 {
    let elapsed_ms = measure(work);
    println!("{label} in {elapsed_ms} ms");
    elapsed_ms
}
