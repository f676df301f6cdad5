use chrono::{DateTime, TimeDelta, Utc};

/// How long an order spends in each phase before it is considered delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTimings {
    pub preparation: TimeDelta,
    pub delivery: TimeDelta,
}

impl Default for StatusTimings {
    fn default() -> Self {
        Self {
            preparation: TimeDelta::seconds(10),
            delivery: TimeDelta::seconds(60),
        }
    }
}

/// Display status of an order. Never stored: always recomputed from the
/// order's creation time and the current clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub fn derive(created: DateTime<Utc>, now: DateTime<Utc>, timings: &StatusTimings) -> Self {
        let elapsed = now - created;
        if elapsed < timings.preparation {
            OrderStatus::Preparing
        } else if elapsed < timings.preparation + timings.delivery {
            OrderStatus::OutForDelivery
        } else {
            OrderStatus::Delivered
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}
