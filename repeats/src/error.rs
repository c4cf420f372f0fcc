use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepeatsError {
    #[error(transparent)]
    Fasta(#[from] fasta_source::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("every edge was pruned away, leaving an empty graph")]
    EmptyGraph,

    #[error("invalid configuration: {0}")]
    Config(String),
}
