use thiserror::Error;

/**
 * Slot failures
 *
 * Never carries an operation's own failure, those are part of the
 * operation output and reach the caller untouched.
 */
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Operation settling into slot {index} panicked: {message}")]
    Panicked { index: usize, message: String },
    #[error("Slot {0} was abandoned before being resolved")]
    Abandoned(usize),
}
