// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use chrono;
use colored::*;

/// Prefix a message with a standardized timestamp
pub fn timestamp(desc: &str) -> String {
    let time = chrono::Local::now();
    let ymd = time.format("%Y-%m-%dT").to_string();
    let ymd = &ymd[..ymd.len() - 1];
    let hms = time.format("%H:%M:%S").to_string();
    let time = format!("{} | {}", ymd, hms);

    format!(
        "{} {} {} {} {} {}",
        "[".bold(),
        time,
        "|".bold(),
        "sulcus".truecolor(227, 110, 75).bold(),
        "]".bold(),
        desc,
    )
}

/// Print timestamped statements to console
pub fn log(desc: &str) {
    println!("{}", timestamp(desc));
}
