//! Command implementations

pub mod analyze;
pub mod assist;
pub mod benchmark;
pub mod input;
pub mod play;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_code};
pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{Game, GameConfig, Role, run_play};
pub use solve::{DEFAULT_MAX_TURNS, GuessStep, SolveConfig, SolveResult, solve_code, solve_secret};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
