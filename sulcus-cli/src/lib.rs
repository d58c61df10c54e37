// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

pub mod args;
pub mod pipeline;
