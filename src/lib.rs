#![doc = r##"
aestishot — composite a set of photographs into one rotated panoramic strip.

Every input is rotated by a fixed angle, trimmed, and one horizontal band is cut
from it (band `i` of `n` from input `i`). The bands are stacked, rotated back and
trimmed; the result can get rounded corners and a gradient backdrop whose
endpoints default to the dominant colors of the first and last photos.

Add dependency
--------------
```toml
[dependencies]
aestishot = "0.1"
```

Quick start: write a strip to disk
----------------------------------
```rust,no_run
use std::path::PathBuf;
use aestishot::{compose_strip_to_path, OutputFormat, StripOptions};

fn main() -> aestishot::Result<()> {
    let options = StripOptions {
        angle: 9,
        radius: 25,
        padding: 32,
        format: OutputFormat::Png,
        output_name: "strip".to_string(),
        gradient_from: Some("#ff0000".parse().unwrap()),
        images: vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg"), PathBuf::from("c.jpg")],
        ..Default::default()
    };

    let written = compose_strip_to_path(&options, false)?;
    println!("wrote {}", written.display());
    Ok(())
}
```

In-memory composition
---------------------
```rust,no_run
use std::path::PathBuf;
use aestishot::{compose_strip, StripOptions};

fn main() -> aestishot::Result<()> {
    let options = StripOptions {
        padding: 0,
        images: vec![PathBuf::from("a.png"), PathBuf::from("b.png")],
        ..Default::default()
    };
    let strip = compose_strip(&options)?;
    println!("{}x{} from {} bands", strip.width(), strip.height(), strip.bands);
    Ok(())
}
```

Error handling
--------------
All public functions return `aestishot::Result<T>`. Unreadable inputs are logged
and skipped; only when no input yields a band does composition fail with
`Error::NoBands`.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — options record and the individual compositing stages.
- [`io`] — image decoding and format writers.
- [`color`] — color parsing for gradient endpoints.
- [`error`] — crate-level `Error` and `Result`.
"##]

pub mod api;
pub mod color;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use color::{Color, ColorParseError};
pub use crate::core::params::StripOptions;
pub use error::{Error, Result};
pub use types::{OutputFormat, StripImage};

// Metadata sidecar
pub use io::writers::metadata::{StripMetadata, write_metadata_sidecar};

// High-level API re-exports
pub use api::{compose_strip, compose_strip_to_path, save_strip};
