use serde::Serialize;
use std::fmt;

/// Shape of one family's sub-index.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilySummary {
    /// Distinct netmasks, i.e. set probes per query.
    pub netmasks: usize,
    /// Distinct network addresses across all netmasks.
    pub networks: usize,
    /// Prefix lengths present, broadest first.
    pub prefix_lengths: Vec<u8>,
}

/// Size of a built [`super::MembershipIndex`], for logging and the `info` command.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSummary {
    pub v4: FamilySummary,
    pub v6: FamilySummary,
}

impl fmt::Display for FamilySummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lengths: Vec<String> = self
            .prefix_lengths
            .iter()
            .map(|len| format!("/{len}"))
            .collect();
        write!(
            f,
            "{} networks under {} netmasks [{}]",
            self.networks,
            self.netmasks,
            lengths.join(" ")
        )
    }
}

impl fmt::Display for IndexSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IPv4: {} | IPv6: {}", self.v4, self.v6)
    }
}
