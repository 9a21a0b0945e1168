/// A total that stayed within its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub total: usize,
    pub threshold: usize,
}
