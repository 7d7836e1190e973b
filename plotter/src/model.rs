use std::fmt;

/// The four load-test scenarios run against the KV store.
///
/// Each scenario is backed by one results table written by the load-test
/// client and yields one throughput chart and one latency chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    GetOnly,
    PutOnly,
    Mixed,
    GetPopular,
}

impl Scenario {
    /// All scenarios, in the order their reports are rendered.
    pub const ALL: [Scenario; 4] = [
        Scenario::GetOnly,
        Scenario::PutOnly,
        Scenario::Mixed,
        Scenario::GetPopular,
    ];

    /// Label used in chart titles and output file names.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::GetOnly => "get_only",
            Scenario::PutOnly => "put_only",
            Scenario::Mixed => "mixed",
            Scenario::GetPopular => "get_popular",
        }
    }

    /// File name of the results table backing this scenario.
    pub fn source_name(&self) -> String {
        format!("results_{}.csv", self.label())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
