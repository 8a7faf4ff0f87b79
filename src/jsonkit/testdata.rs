// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Protobuf fixtures compiled by `build.rs` from `proto/testdata`.

#![allow(clippy::all)]

include!(concat!(env!("OUT_DIR"), "/dashkit.testdata.rs"));
include!(concat!(env!("OUT_DIR"), "/dashkit.testdata.serde.rs"));
