//! Order status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle states of a customer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Just placed, not yet picked up by staff.
    New,
    /// Being worked on.
    InProgress,
    /// Work finished, awaiting handover.
    Ready,
    /// Handed over to the customer.
    Completed,
    /// Cancelled before completion.
    Cancelled,
}

impl OrderStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Ready => "ready",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the order has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether the status may change to `next`.
    ///
    /// Orders move forward only; terminal states accept no transition.
    /// Cancellation is allowed from any non-terminal state.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        if self.is_terminal() || *self == next {
            return false;
        }
        match next {
            Self::New => false,
            Self::InProgress => matches!(self, Self::New),
            Self::Ready => matches!(self, Self::New | Self::InProgress),
            Self::Completed => matches!(self, Self::Ready),
            Self::Cancelled => true,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = lingohub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "in_progress" => Ok(Self::InProgress),
            "ready" => Ok(Self::Ready),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(lingohub_core::AppError::validation(format!(
                "Invalid order status: '{s}'"
            ))),
        }
    }
}
