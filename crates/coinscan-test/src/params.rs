//! Regression test parameters and operations

/// Regression test state: test name, running check index, and the
/// failures recorded so far.
///
/// Each comparison bumps the index so a failure message points at the
/// exact check that broke. `cleanup` prints the summary and returns
/// overall success; regression tests end with `assert!(rp.cleanup())`.
pub struct RegParams {
    /// Name of the test (e.g., "conncomp")
    pub test_name: String,
    /// Current check index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Compare two values within a tolerance.
    ///
    /// Records a failure (and returns `false`) if they differ by more
    /// than `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let ok = (expected - actual).abs() <= delta;
        if !ok {
            let msg = format!(
                "{} check {}: expected {}, got {} (delta {})",
                self.test_name, self.index, expected, actual, delta
            );
            eprintln!("FAILURE: {msg}");
            self.failures.push(msg);
            self.success = false;
        }
        ok
    }

    /// Record a named boolean check.
    pub fn check(&mut self, label: &str, ok: bool) -> bool {
        self.index += 1;
        if !ok {
            let msg = format!("{} check {} ({label}) failed", self.test_name, self.index);
            eprintln!("FAILURE: {msg}");
            self.failures.push(msg);
            self.success = false;
        }
        ok
    }

    /// Print the summary and return overall success.
    pub fn cleanup(&self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg: {} checks", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg: {} of {} checks failed",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_run() {
        let mut rp = RegParams::new("selftest");
        assert!(rp.compare_values(1.0, 1.0, 0.0));
        assert!(rp.compare_values(10.0, 10.4, 0.5));
        assert!(rp.check("tautology", true));
        assert!(rp.cleanup());
    }

    #[test]
    fn test_failing_run() {
        let mut rp = RegParams::new("selftest");
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert!(rp.check("still ok", true));
        assert!(!rp.cleanup());
    }
}
