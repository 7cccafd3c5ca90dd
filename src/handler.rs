// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Consumer Handler
//!
//! Application seam of the consumer loop. Implementations receive the raw
//! message payload and decide, through their `Result`, whether the delivery
//! is done or must travel the retry path.

use crate::errors::AmqpError;
use async_trait::async_trait;

/// Processes deliveries consumed from a queue.
///
/// `process` runs once per delivery attempt. Returning `Err` sends the
/// delivery through the retry topology until the retry budget is spent, at
/// which point `escalate` runs exactly once with the final error and the
/// delivery is dropped from the queue.
///
/// Both methods run inside the consumer workers, so implementations must be
/// shareable across tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConsumerHandler: Send + Sync {
    /// Handles one delivery attempt.
    async fn process(&self, body: &[u8]) -> Result<(), AmqpError>;

    /// Last-resort hook for a delivery whose retry budget is spent.
    ///
    /// Failures here are logged and dropped; the delivery is acknowledged
    /// either way.
    async fn escalate(&self, error: AmqpError, body: &[u8]) -> Result<(), AmqpError>;
}
