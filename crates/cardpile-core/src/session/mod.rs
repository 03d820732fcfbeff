mod machine;
mod snapshot;

pub use machine::{Input, Phase, StudySession, Tally};
pub use snapshot::SessionSnapshot;
