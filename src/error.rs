use thiserror::Error;

/// Lookups of key types and part names that fall outside the closed sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PianoError {
    #[error("unknown key type `{0}` (expected `natural` or `sharp`)")]
    UnknownKeyType(String),
    #[error("unknown part `{0}`")]
    UnknownPart(String),
}

/// Refused hammer speed changes. The limit is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpeedError {
    #[error("cannot change speed whilst {active} key(s) are moving")]
    KeysMoving { active: usize },
    #[error("slowest speed reached")]
    Slowest,
    #[error("fastest speed reached")]
    Fastest,
}
