use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("width mismatch on line `{line}`: line is {line_width} bits, operand is {value_width}")]
    WidthMismatch {
        line: String,
        line_width: usize,
        value_width: usize,
    },
    #[error("unknown line: {0}")]
    UnknownLine(String),
    #[error("`{0}` is not a logic value character")]
    InvalidLogicChar(char),
    #[error("don't-care is only valid in patterns, not in sampled values")]
    DontCareSample,
    #[error("fatal alert: {0}")]
    FatalAlert(String),
    #[error("expect on line `{line}` has no timeout and no pending transitions")]
    PollStarved { line: String },
}
