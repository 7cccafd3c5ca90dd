// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Message Envelope
//!
//! Borrowed view over a received delivery: the raw payload plus the retry
//! metadata carried in the AMQP headers.

use lapin::{message::Delivery, types::AMQPValue, BasicProperties};

/// Header carrying how many times a delivery has already been requeued
/// through the retry topology.
///
/// Absent on first delivery. Stored as a signed 32-bit AMQP `long-int`;
/// any other type in the slot is treated as absent.
pub(crate) const AMQP_HEADERS_RETRY_NUMS: &str = "retry_nums";

/// A received message as the consumer loop sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'d> {
    pub(crate) body: &'d [u8],
    pub(crate) retry_nums: i32,
}

impl<'d> Envelope<'d> {
    pub(crate) fn new(body: &'d [u8], retry_nums: i32) -> Envelope<'d> {
        Envelope { body, retry_nums }
    }

    pub(crate) fn from_delivery(delivery: &'d Delivery) -> Envelope<'d> {
        Envelope {
            body: &delivery.data,
            retry_nums: retry_count(&delivery.properties),
        }
    }

    /// The raw message payload.
    pub fn body(&self) -> &[u8] {
        self.body
    }

    /// How many retry requeues this delivery already went through.
    pub fn retry_nums(&self) -> i32 {
        self.retry_nums
    }
}

/// Reads the retry counter out of the delivery properties, defaulting to
/// zero when the header is missing or carries an unexpected type.
pub(crate) fn retry_count(properties: &BasicProperties) -> i32 {
    match properties.headers() {
        Some(headers) => match headers.inner().get(AMQP_HEADERS_RETRY_NUMS) {
            Some(AMQPValue::LongInt(nums)) => *nums,
            _ => 0,
        },
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lapin::types::{FieldTable, LongString, ShortString};
    use std::collections::BTreeMap;

    fn properties_with_header(value: AMQPValue) -> BasicProperties {
        let mut map = BTreeMap::new();
        map.insert(ShortString::from(AMQP_HEADERS_RETRY_NUMS), value);

        BasicProperties::default().with_headers(FieldTable::from(map))
    }

    #[test]
    fn retry_count_defaults_to_zero_without_headers() {
        assert_eq!(retry_count(&BasicProperties::default()), 0);
    }

    #[test]
    fn retry_count_defaults_to_zero_when_header_is_missing() {
        let props = BasicProperties::default().with_headers(FieldTable::default());
        assert_eq!(retry_count(&props), 0);
    }

    #[test]
    fn retry_count_reads_long_int_header() {
        let props = properties_with_header(AMQPValue::LongInt(2));
        assert_eq!(retry_count(&props), 2);
    }

    #[test]
    fn retry_count_ignores_wrongly_typed_header() {
        let props = properties_with_header(AMQPValue::LongString(LongString::from("2")));
        assert_eq!(retry_count(&props), 0);
    }

    #[test]
    fn envelope_exposes_body_and_counter() {
        let body = b"{\"id\":1}";
        let envelope = Envelope::new(body, 1);

        assert_eq!(envelope.body(), body);
        assert_eq!(envelope.retry_nums(), 1);
    }
}
