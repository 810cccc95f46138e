#[derive(Debug, Clone, Copy)]
pub enum Workload {
    Numbers,
    Strings,
    Mixed,
}

impl Workload {
    pub const fn names(&self) -> &'static [&'static str] {
        &[
            "Fohz fOhZ FoHz",
            "Brain rot",
            "",
            "a somewhat longer string that forces the buffer to grow in bigger steps",
        ]
    }

    /// Number of records written per run.
    pub const fn records(&self) -> usize {
        use Workload::*;
        match self {
            Numbers | Mixed => 4096,
            Strings => 1024,
        }
    }
}
