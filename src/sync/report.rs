//! Results of a synchronization run.

/// What happened to a single dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No checkout existed; it was downloaded and built.
    Downloaded,
    /// The update check asked for an update; it was updated and built.
    Updated,
    /// The update check passed; nothing ran after it.
    UpToDate,
}

impl Outcome {
    /// Whether this outcome counts toward the changed total.
    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::UpToDate)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Downloaded => "downloaded",
            Self::Updated => "updated",
            Self::UpToDate => "up to date",
        };
        write!(f, "{}", s)
    }
}

/// Per-dependency entry in a [`SyncReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReport {
    pub name: String,
    pub outcome: Outcome,
    /// Number of build commands that ran.
    pub builds_run: usize,
}

/// Ordered outcomes of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub dependencies: Vec<DependencyReport>,
}

impl SyncReport {
    pub fn push(&mut self, entry: DependencyReport) {
        self.dependencies.push(entry);
    }

    /// Number of dependencies downloaded or updated.
    pub fn changed_count(&self) -> usize {
        self.dependencies
            .iter()
            .filter(|d| d.outcome.is_changed())
            .count()
    }

    /// Process exit status for this run.
    ///
    /// The changed count, saturated so large counts never wrap to zero.
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.changed_count()).unwrap_or(u8::MAX)
    }

    pub fn get(&self, name: &str) -> Option<&DependencyReport> {
        self.dependencies.iter().find(|d| d.name == name)
    }
}
