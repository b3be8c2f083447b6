//! IMA ADPCM Test Modules

mod codec_tests;
mod utils;
