pub mod orchestrator;
pub mod state;

pub use orchestrator::{build_report, SyncOrchestrator};
pub use state::{RunState, RunStatus, SyncPhase, SyncSummary};
