// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use clap::Parser;
use sulcus_cli::args::Cli;
use sulcus_cli::pipeline;

fn main() {
    let cli = Cli::parse();
    pipeline::run(&cli);
}
