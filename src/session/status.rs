/// Flags shown in the tabline for a connected tabpage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Status {
    pub executing: bool,
    pub killing: bool,
    pub results_pending: bool,
}

impl Status {
    /// One character summarising the flags; killing wins over executing, which
    /// wins over pending results.
    pub fn flag(&self) -> &'static str {
        if self.killing {
            "k"
        } else if self.executing {
            "e"
        } else if self.results_pending {
            "r"
        } else {
            ""
        }
    }
}
