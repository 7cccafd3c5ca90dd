// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Error Types for the Retry-Aware RabbitMQ Client
//!
//! This module provides the error set for every operation the crate performs
//! against the broker: connecting, opening channels, declaring topology,
//! publishing, consuming and acknowledging. Application handlers return the
//! same type, so a single enum travels through the whole send/receive surface.

use thiserror::Error;

/// Represents errors that can occur during AMQP/RabbitMQ operations.
///
/// Send-style operations (`publish`, `publish_delayed`) return these to the
/// caller. The receive path absorbs connection errors into the supervisor's
/// bounded reconnect loop and only surfaces [`AmqpError::ReconnectLimitExceeded`]
/// once the attempt budget is spent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmqpError {
    /// Internal errors that don't fit into other categories, including
    /// panics recovered at the supervisor boundary
    #[error("internal error")]
    InternalError,

    /// Error establishing a connection to the RabbitMQ server
    #[error("failure to connect")]
    ConnectionError,

    /// Error creating a channel from an established connection
    #[error("failure to create a channel")]
    ChannelError,

    /// Error declaring an exchange with the given name
    #[error("failure to declare an exchange `{0}`")]
    DeclareExchangeError(String),

    /// Error declaring a queue with the given name
    #[error("failure to declare a queue `{0}`")]
    DeclareQueueError(String),

    /// Error binding a queue to an exchange
    #[error("failure to bind queue `{0}` to exchange `{1}`")]
    BindingExchangeToQueueError(String, String),

    /// Error configuring Quality of Service parameters
    #[error("failure to configure qos `{0}`")]
    QoSDeclarationError(String),

    /// Error starting a consumer on a queue
    #[error("failure to declare consumer `{0}`")]
    BindingConsumerError(String),

    /// Error publishing a message
    #[error("failure to publish")]
    PublishingError,

    /// Error JSON-encoding a payload before publishing
    #[error("failure to encode payload")]
    SerializePayloadError,

    /// Error acknowledging a delivery
    #[error("failure to ack message")]
    AckMessageError,

    /// Delayed publish called with a non-positive ttl
    #[error("delayed publish requires a positive ttl, got `{0}`")]
    InvalidTtl(i64),

    /// The supervisor spent its whole connect attempt budget
    #[error("reconnect attempts exhausted after `{0}` tries")]
    ReconnectLimitExceeded(usize),

    /// Application-level processing failure. Handlers return this from
    /// `process` to route a delivery into the retry/escalate path.
    #[error("handler failure: {0}")]
    HandlerError(String),
}
