use std::num::NonZeroU64;

use super::{
    error::{Result, SimError},
    state::Ticks,
};

pub fn parse_bursts<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Ticks>> {
    if tokens.is_empty() {
        return Err(SimError::InvalidInput("missing burst times".to_owned()));
    }

    tokens
        .iter()
        .enumerate()
        .map(|(pos, token)| parse_burst(pos, token.as_ref()))
        .collect()
}

// Negative values are told apart from garbage so the message can say which
fn parse_ticks(token: &str) -> std::result::Result<u64, Option<i64>> {
    let token = token.trim();
    token
        .parse::<u64>()
        .map_err(|_| token.parse::<i64>().ok().filter(|v| *v < 0))
}

fn parse_burst(pos: usize, token: &str) -> Result<Ticks> {
    parse_ticks(token).map_err(|negative| match negative {
        Some(value) => SimError::InvalidInput(format!("burst for P{pos} is negative: {value}")),
        None => SimError::InvalidInput(format!("burst for P{pos} is not a number: {token:?}")),
    })
}

pub fn parse_quantum(token: &str) -> Result<NonZeroU64> {
    match parse_ticks(token) {
        Ok(value) => NonZeroU64::new(value)
            .ok_or_else(|| SimError::InvalidInput("quantum must be positive, got 0".to_owned())),
        Err(Some(value)) => Err(SimError::InvalidInput(format!(
            "quantum must be positive, got {value}"
        ))),
        Err(None) => Err(SimError::InvalidInput(format!(
            "quantum is not a number: {token:?}"
        ))),
    }
}
