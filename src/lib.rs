// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

mod consumer;
mod otel;

pub mod channel;
pub mod errors;
pub mod handler;
pub mod message;
pub mod publisher;
pub mod supervisor;
pub mod topology;
