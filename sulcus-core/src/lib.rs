// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

pub mod constant;
pub mod crop;
pub mod error;
pub mod im;
pub mod remap;
pub mod ut;
