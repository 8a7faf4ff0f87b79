// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_root = "proto";
    let user_proto = format!("{proto_root}/testdata/user.proto");
    let descriptor_path = PathBuf::from(env::var("OUT_DIR")?).join("testdata_descriptor.bin");

    // An explicit PROTOC wins over the vendored binary
    if env::var_os("PROTOC").is_none() {
        let protoc = protoc_bin_vendored::protoc_bin_path().map_err(|e| e.to_string())?;
        env::set_var("PROTOC", protoc);
    }

    prost_build::Config::new()
        .file_descriptor_set_path(&descriptor_path)
        .compile_protos(&[user_proto.as_str()], &[proto_root])?;

    // protobuf JSON mapping: unpopulated fields are emitted
    let descriptor_set = std::fs::read(&descriptor_path)?;
    pbjson_build::Builder::new()
        .register_descriptors(&descriptor_set)?
        .emit_fields()
        .build(&[".dashkit"])?;

    println!("cargo:rerun-if-changed={user_proto}");
    Ok(())
}
