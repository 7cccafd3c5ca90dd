// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # AMQP Connection Management
//!
//! This module handles the creation and teardown of AMQP connections and
//! channels. Producers dial a fresh connection per publish and close it when
//! done; the consumer side keeps one connection shared by every worker and
//! opens a channel per worker.

use crate::{errors::AmqpError, topology::TopologySpec};
use lapin::{types::LongString, Channel, Connection, ConnectionProperties};
use tracing::{debug, error};

/// Establishes a connection to the broker at the spec's address.
///
/// The connection is named after the spec's queue so it can be told apart in
/// the broker's management UI.
pub async fn connect(spec: &TopologySpec) -> Result<Connection, AmqpError> {
    debug!("creating amqp connection...");

    let options =
        ConnectionProperties::default().with_connection_name(LongString::from(spec.queue.clone()));

    match Connection::connect(&spec.address, options).await {
        Ok(conn) => {
            debug!("amqp connected");
            Ok(conn)
        }
        Err(err) => {
            error!(error = err.to_string(), "failure to connect");
            Err(AmqpError::ConnectionError)
        }
    }
}

/// Opens a channel on an established connection.
pub async fn open_channel(conn: &Connection) -> Result<Channel, AmqpError> {
    debug!("creating amqp channel...");

    match conn.create_channel().await {
        Ok(channel) => {
            debug!("channel created");
            Ok(channel)
        }
        Err(err) => {
            error!(error = err.to_string(), "error to create the channel");
            Err(AmqpError::ChannelError)
        }
    }
}

/// Best-effort connection close.
///
/// Close failures are logged and dropped; by this point the caller has
/// already finished or abandoned its work on the link.
pub(crate) async fn close(conn: &Connection) {
    if let Err(err) = conn
        .close(lapin::protocol::constants::REPLY_SUCCESS as u16, "")
        .await
    {
        error!(error = err.to_string(), "error to close the connection");
    }
}
