pub mod proposer_selector;

pub use proposer_selector::{ProposerSelector, RoundRobinProposerSelector};
