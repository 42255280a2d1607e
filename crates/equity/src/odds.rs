// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pot and implied odds.
use crate::EquityError;

/// Returns the pot odds ratio `(pot + bet) / bet`.
///
/// A ratio of 4.0 means the caller needs to win once every 4 times to break
/// even.
///
/// ```
/// # use oddsmith_equity::pot_odds;
/// assert_eq!(pot_odds(30.0, 10.0).unwrap(), 4.0);
/// ```
pub fn pot_odds(pot: f64, bet: f64) -> Result<f64, EquityError> {
    if !pot.is_finite() || pot < 0.0 {
        return Err(EquityError::InvalidOdds("pot must be a non negative number"));
    }

    if !bet.is_finite() || bet <= 0.0 {
        return Err(EquityError::InvalidOdds("bet must be a positive number"));
    }

    Ok((pot + bet) / bet)
}

/// Returns the extra amount the caller needs to win on later streets to
/// break even on a call, given the win chance as a percentage.
///
/// A negative value means the call is already profitable with the current
/// pot.
pub fn implied_odds(chance: f64, pot: f64, call: f64) -> Result<f64, EquityError> {
    if !chance.is_finite() || chance <= 0.0 || chance > 100.0 {
        return Err(EquityError::InvalidOdds("chance must be in (0, 100]"));
    }

    if !pot.is_finite() || pot < 0.0 {
        return Err(EquityError::InvalidOdds("pot must be a non negative number"));
    }

    if !call.is_finite() || call <= 0.0 {
        return Err(EquityError::InvalidOdds("call must be a positive number"));
    }

    Ok(call / (chance / 100.0) - (pot + call))
}
