pub type Result<T> = ::std::result::Result<T, StatsError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),
}

pub(crate) fn check_lengths(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(StatsError::LengthMismatch(a, b));
    }
    Ok(())
}
