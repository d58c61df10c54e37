// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

mod volume;

pub use volume::LabelVolume;
pub use volume::MaskVolume;
pub use volume::PosteriorVolume;

pub use volume::save_labels;
pub use volume::save_probability;
