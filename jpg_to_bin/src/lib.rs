/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

mod convert;

pub use convert::{
    INPUT_PATH, OUTPUT_PATH, RESIZE_FILTER, convert, load_image, resize, swap_red_blue, write_raw,
};
